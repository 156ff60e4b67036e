use kinline_calendar::{LeapDayPolicy, NaiveDate};
use kinline_upcoming::{Banner, find_next};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn birthday_on_reference_date_is_today() {
    let births = [ymd(1961, 3, 14), ymd(1993, 8, 8), ymd(2015, 11, 30)];
    let todays = [ymd(2026, 3, 14), ymd(2026, 8, 8), ymd(2026, 11, 30)];
    for (i, &today) in todays.iter().enumerate() {
        let next = find_next(today, &births, LeapDayPolicy::default()).unwrap();
        assert_eq!(next.index(), i);
        assert_eq!(next.days(), 0);
        assert!(next.is_today());
        assert_eq!(next.next_date(), today);
        assert_eq!(
            Banner::new("Grace", &next).to_string(),
            "🎂 Today is Grace's birthday!"
        );
    }
}

#[test]
fn single_person_day_before_birthday() {
    let births = [ymd(1990, 5, 1)];
    let next = find_next(ymd(2026, 4, 30), &births, LeapDayPolicy::default()).unwrap();
    assert_eq!(next.days(), 1);
    assert!(!next.is_today());
    assert_eq!(
        Banner::new("Ada", &next).to_string(),
        "🎉 Ada in 1 day (2026-05-01)"
    );
}

#[test]
fn day_after_birthday_waits_a_year() {
    let births = [ymd(1990, 5, 1)];
    let next = find_next(ymd(2026, 5, 2), &births, LeapDayPolicy::default()).unwrap();
    assert_eq!(next.next_date(), ymd(2027, 5, 1));
    assert_eq!(next.days(), 364);
}

#[test]
fn leap_day_birthday_in_leap_year_is_kept() {
    let births = [ymd(2000, 2, 29)];
    let next = find_next(ymd(2028, 2, 1), &births, LeapDayPolicy::MarchFirst).unwrap();
    assert_eq!(next.next_date(), ymd(2028, 2, 29));
    assert_eq!(next.days(), 28);
}
