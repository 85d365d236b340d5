use chrono::Weekday;
use datewise::{
    date_to_epoch_millis, epoch_millis_to_date_time, format_date_time, last_in_month,
    next_months_string, next_working_day, today, FixedZone,
};
use qtty::Hours;

fn main() -> datewise::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let day = today();
    println!("today:             {day}");
    println!("next 6 months:     {}", next_months_string(6));
    println!("next working day:  {}", next_working_day());
    println!("last Friday:       {}", last_in_month(Weekday::Fri));
    println!("end of day:        {}", datewise::format_last_time_of_day());

    let millis = date_to_epoch_millis(day);
    println!("epoch ms (UTC+8):  {millis}");

    let kolkata = FixedZone::from_hours(Hours::new(5.5))?;
    let there = kolkata.epoch_millis_to_date_time(millis)?;
    println!("same instant {kolkata}: {}", format_date_time(there));
    println!("round trip:        {}", epoch_millis_to_date_time(millis)?);
    Ok(())
}
