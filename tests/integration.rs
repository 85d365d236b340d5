use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use datewise::{
    date_time_to_epoch_millis, date_to_epoch_millis, date_to_legacy, epoch_millis_to_date,
    epoch_millis_to_date_time, format_date_time, legacy_to_date, limit_list, limit_string,
    or_empty_list, parse_int_optional, require_or_throw, DateAdjustExt, Error, FixedZone,
    FirstDayOfMonth, LastInMonth, MonthPattern, NextWorkingDay,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn month_labels_from_anchor() {
    let anchor = ymd(2020, 10, 9);
    let pattern = MonthPattern::default();
    assert_eq!(
        limit_list(Some(anchor), 3, &pattern),
        ["202011", "202012", "202101"]
    );
    assert_eq!(limit_string(Some(anchor), 3, &pattern), "202011,202012,202101");
    assert!(limit_list(Some(anchor), 0, &pattern).is_empty());
    assert_eq!(limit_string(Some(anchor), 0, &pattern), "");
}

#[test]
fn date_epoch_roundtrip_over_a_leap_cycle() {
    let mut date = ymd(1999, 12, 25);
    while date < ymd(2004, 1, 10) {
        assert_eq!(epoch_millis_to_date(date_to_epoch_millis(date)).unwrap(), date);
        assert_eq!(legacy_to_date(date_to_legacy(date)).unwrap(), date);
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn date_time_epoch_roundtrip_at_millisecond_precision() {
    let dt = ymd(1965, 7, 4).and_hms_milli_opt(23, 1, 2, 345).unwrap();
    assert_eq!(
        epoch_millis_to_date_time(date_time_to_epoch_millis(dt)).unwrap(),
        dt
    );
}

#[test]
fn utc_plus_8_is_the_default_zone() {
    let dt = ymd(2020, 10, 9).and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(
        date_time_to_epoch_millis(dt),
        FixedZone::default().date_time_to_epoch_millis(dt)
    );
    assert_eq!(
        FixedZone::UTC.date_time_to_epoch_millis(dt) - date_time_to_epoch_millis(dt),
        8 * 3_600 * 1_000
    );
}

#[test]
fn overflow_is_an_error() {
    assert!(matches!(
        epoch_millis_to_date_time(i64::MAX),
        Err(Error::Overflow { .. })
    ));
}

#[test]
fn next_working_day_skips_weekend() {
    // 2020-10-09 Fri, 10 Sat, 11 Sun, 12 Mon.
    for day in 9..=11 {
        assert_eq!(ymd(2020, 10, day).with(NextWorkingDay), ymd(2020, 10, 12));
    }
    assert_eq!(ymd(2020, 10, 12).with(NextWorkingDay), ymd(2020, 10, 13));
}

#[test]
fn last_friday_of_month() {
    let last = ymd(2020, 2, 1).with(LastInMonth(Weekday::Fri));
    assert_eq!(last, ymd(2020, 2, 28));
    assert_eq!(last.weekday(), Weekday::Fri);
}

#[test]
fn today_relative_boundaries() {
    let (today, first, next_year, last, end, end_text) = loop {
        let before = datewise::today();
        let taken = (
            datewise::first_day_of_month(),
            datewise::first_day_of_next_year(),
            datewise::last_day_of_year(),
            datewise::last_time_of_day(),
            datewise::format_last_time_of_day(),
        );
        if datewise::today() == before {
            break (before, taken.0, taken.1, taken.2, taken.3, taken.4);
        }
    };
    assert_eq!(first, today.with(FirstDayOfMonth));
    assert_eq!(first.day(), 1);
    assert_eq!(next_year, ymd(today.year() + 1, 1, 1));
    assert_eq!(last, ymd(today.year(), 12, 31));
    assert_eq!(end.date(), today);
    assert_eq!(end.nanosecond(), 999_999_999);
    assert_eq!(end_text, format_date_time(end));
    assert!(end_text.ends_with("23:59:59.999999999"));
}

#[test]
fn proleptic_and_era_year_letters_in_labels() {
    let anchor = ymd(2020, 10, 9);
    assert_eq!(
        datewise::limit_list_with(Some(anchor), 2, "uuuuMM").unwrap(),
        ["202011", "202012"]
    );
    let era = MonthPattern::parse("yyyyMM").unwrap();
    assert_eq!(era.format(ymd(0, 6, 1)), "000106");
    assert_eq!(era.format(ymd(-44, 3, 1)), "004503");
    let proleptic = MonthPattern::parse("uuuuMM").unwrap();
    assert_eq!(proleptic.format(ymd(-44, 3, 1)), "-004403");
}

#[test]
fn custom_date_time_format() {
    let day = ymd(2020, 10, 9);
    assert_eq!(
        format_date_time(day.and_hms_opt(0, 0, 0).unwrap()),
        "2020-10-09 00:00:00"
    );
    assert_eq!(
        format_date_time(day.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap()),
        "2020-10-09 23:59:59.999999999"
    );
}

#[test]
fn guards() {
    assert_eq!(parse_int_optional("42"), Some(42));
    assert_eq!(parse_int_optional("abc"), None);
    assert_eq!(parse_int_optional(""), None);
    assert!(or_empty_list::<i32>(None).is_empty());
    assert_eq!(or_empty_list(Some(vec![1, 2])), [1, 2]);
    assert_eq!(
        require_or_throw(&None::<()>, "msg"),
        Err(Error::IllegalArgument {
            message: "msg".into()
        })
    );
    assert!(require_or_throw(&Some(5), "msg").is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn serde_zone_and_legacy_are_plain_numbers() {
    use datewise::LegacyDate;

    let json = serde_json::to_string(&FixedZone::UTC_PLUS_8).unwrap();
    assert_eq!(json, "28800");
    let zone: FixedZone = serde_json::from_str("-18000").unwrap();
    assert_eq!(zone.offset_seconds(), -18_000);
    assert!(serde_json::from_str::<FixedZone>("86400").is_err());

    let legacy = LegacyDate::from_millis(1_602_172_800_000);
    let json = serde_json::to_string(&legacy).unwrap();
    assert_eq!(json, "1602172800000");
    assert_eq!(serde_json::from_str::<LegacyDate>(&json).unwrap(), legacy);
}
