use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Timelike};
use kitbag::utils::date::*;

fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn ymd(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

#[test]
fn test_is_same_date_reflexive() {
    let d = ymd(2024, 6, 12);
    assert!(is_same_date(Some(d), Some(d)));
    assert!(!is_same_date(Some(d), Some(d + Duration::days(1))));
}

#[test]
fn test_is_same_date_ignores_time() {
    let morning = moment(2024, 6, 12, 0, 0, 1);
    let night = moment(2024, 6, 12, 23, 59, 59);
    assert!(is_same_date(Some(morning), Some(night)));
}

#[test]
fn test_is_same_date_mixed_shapes() {
    let as_moment = moment(2024, 6, 12, 14, 30, 0);
    let as_date = ymd(2024, 6, 12);
    assert!(is_same_date(Some(as_moment), Some(as_date)));
    assert!(!is_same_date(Some(as_moment), Some(ymd(2024, 6, 13))));
}

#[test]
fn test_is_same_date_absent_inputs() {
    let d = ymd(2024, 6, 12);
    assert!(!is_same_date(None::<NaiveDate>, Some(d)));
    assert!(!is_same_date(Some(d), None::<NaiveDate>));
    assert!(!is_same_date(None::<NaiveDate>, None::<NaiveDate>));
}

#[test]
fn test_is_today_at() {
    let now = moment(2024, 6, 12, 14, 30, 45);
    assert!(is_today_at(Some(moment(2024, 6, 12, 1, 2, 3)), now));
    assert!(!is_today_at(Some(moment(2024, 6, 11, 14, 30, 45)), now));
    assert!(!is_today_at(None, now));
}

#[test]
fn test_is_weekend_full_week_sweep() {
    // 2024-06-10 is a Monday
    for day in 10..=14 {
        assert!(!is_weekend(Some(ymd(2024, 6, day))), "2024-06-{} should be a weekday", day);
    }
    assert!(is_weekend(Some(ymd(2024, 6, 15)))); // Saturday
    assert!(is_weekend(Some(ymd(2024, 6, 16)))); // Sunday
    assert!(!is_weekend(None::<NaiveDate>));
}

#[test]
fn test_same_or_younger_and_older_reflexive() {
    let d = ymd(2024, 6, 12);
    assert!(is_same_or_younger(Some(d), Some(d)));
    assert!(is_same_or_older(Some(d), Some(d)));
}

#[test]
fn test_same_or_younger_ordering() {
    let base = ymd(2024, 6, 12);
    let later = ymd(2024, 6, 13);
    assert!(is_same_or_younger(Some(later), Some(base)));
    assert!(!is_same_or_younger(Some(base), Some(later)));
    assert!(is_same_or_older(Some(base), Some(later)));
    assert!(!is_same_or_older(Some(later), Some(base)));
    // year dominates month, month dominates day
    assert!(is_same_or_younger(Some(ymd(2025, 1, 1)), Some(ymd(2024, 12, 31))));
    assert!(is_same_or_older(Some(ymd(2024, 1, 31)), Some(ymd(2024, 2, 1))));
}

#[test]
fn test_same_or_younger_ignores_time() {
    let late = moment(2024, 6, 12, 23, 59, 59);
    let early = moment(2024, 6, 12, 0, 0, 1);
    assert!(is_same_or_younger(Some(early), Some(late)));
    assert!(is_same_or_older(Some(late), Some(early)));
}

#[test]
fn test_same_or_younger_absent_inputs() {
    let d = ymd(2024, 6, 12);
    assert!(!is_same_or_younger(None::<NaiveDate>, Some(d)));
    assert!(!is_same_or_older(Some(d), None::<NaiveDate>));
}

#[test]
fn test_adjusted_minutes_and_days() {
    let base = moment(2024, 6, 12, 14, 30, 0);
    assert_eq!(adjusted(base, AdjustUnit::Minutes, 90), moment(2024, 6, 12, 16, 0, 0));
    assert_eq!(adjusted(base, AdjustUnit::Minutes, -31), moment(2024, 6, 12, 13, 59, 0));
    assert_eq!(adjusted(base, AdjustUnit::Days, 1), moment(2024, 6, 13, 14, 30, 0));
}

#[test]
fn test_adjusted_day_rolls_into_next_month() {
    let last_of_may = moment(2024, 5, 31, 10, 0, 0);
    assert_eq!(adjusted(last_of_may, AdjustUnit::Days, 1), moment(2024, 6, 1, 10, 0, 0));
}

#[test]
fn test_adjusted_months_clamps_day() {
    let jan31 = moment(2024, 1, 31, 9, 0, 0);
    assert_eq!(adjusted(jan31, AdjustUnit::Months, 1), moment(2024, 2, 29, 9, 0, 0));
    let mar31 = moment(2024, 3, 31, 9, 0, 0);
    assert_eq!(adjusted(mar31, AdjustUnit::Months, -1), moment(2024, 2, 29, 9, 0, 0));
}

#[test]
fn test_adjusted_years_clamps_leap_day() {
    let leap = moment(2024, 2, 29, 9, 0, 0);
    assert_eq!(adjusted(leap, AdjustUnit::Years, 1), moment(2025, 2, 28, 9, 0, 0));
    assert_eq!(adjusted(leap, AdjustUnit::Years, -4), moment(2020, 2, 29, 9, 0, 0));
}

#[test]
fn test_now_less_family() {
    let now = moment(2024, 6, 12, 12, 0, 0);
    assert_eq!(now_less_days_at(now, 2), moment(2024, 6, 10, 12, 0, 0));
    assert_eq!(now_less_months_at(now, 7), moment(2023, 11, 12, 12, 0, 0));
    assert_eq!(now_less_years_at(now, 3), moment(2021, 6, 12, 12, 0, 0));
}

#[test]
fn test_today_at_clears_time() {
    let now = moment(2024, 6, 12, 14, 30, 45);
    let midnight = today_at(now);
    assert_eq!(midnight.date_naive(), ymd(2024, 6, 12));
    assert_eq!(midnight.hour(), 0);
    assert_eq!(midnight.minute(), 0);
    assert_eq!(midnight.second(), 0);
    assert_eq!(midnight.nanosecond(), 0);
}

#[test]
fn test_yesterday_and_tomorrow_at() {
    let now = moment(2024, 6, 12, 14, 30, 45);
    assert_eq!(yesterday_at(now), moment(2024, 6, 11, 0, 0, 0));
    assert_eq!(tomorrow_at(now), moment(2024, 6, 13, 0, 0, 0));
}

#[test]
fn test_january_1_this_year_at() {
    let now = moment(2024, 6, 12, 14, 30, 45);
    assert_eq!(january_1_this_year_at(now), moment(2024, 1, 1, 0, 0, 0));
}

#[test]
fn test_without_time_idempotent() {
    let x = moment(2024, 6, 12, 23, 59, 59);
    assert_eq!(without_time(without_time(x)), without_time(x));
}

#[test]
fn test_number_of_days_between_exact_boundary() {
    let t = moment(2024, 6, 12, 8, 0, 0);
    assert_eq!(number_of_days_between(Some(t), Some(t + Duration::milliseconds(MILLIS_IN_DAY))), 1);
    assert_eq!(
        number_of_days_between(Some(t), Some(t + Duration::milliseconds(MILLIS_IN_DAY - 1))),
        0
    );
}

#[test]
fn test_number_of_days_between_is_not_calendar_aware() {
    // 23 hours apart, straddling midnight: still 0 whole days
    let evening = moment(2024, 6, 12, 20, 0, 0);
    let next_day = moment(2024, 6, 13, 19, 0, 0);
    assert_eq!(number_of_days_between(Some(evening), Some(next_day)), 0);
}

#[test]
fn test_number_of_days_between_signed_and_absent() {
    let t = moment(2024, 6, 12, 8, 0, 0);
    assert_eq!(number_of_days_between(Some(t + Duration::days(3)), Some(t)), -3);
    assert_eq!(number_of_days_between(None, Some(t)), 0);
    assert_eq!(number_of_days_between(Some(t), None), 0);
}

#[test]
fn test_nearest_non_weekend_day() {
    let friday = ymd(2024, 6, 14);
    assert_eq!(nearest_non_weekend_day(ymd(2024, 6, 15)), friday); // Saturday
    assert_eq!(nearest_non_weekend_day(ymd(2024, 6, 16)), friday); // Sunday, two steps back
    assert_eq!(nearest_non_weekend_day(ymd(2024, 6, 12)), ymd(2024, 6, 12)); // Wednesday
}
