//! Calendar date comparison, arithmetic and normalization helpers.
//!
//! Comparison predicates operate at day granularity: time of day is
//! discarded, and an absent input degrades to `false` rather than an error.
//! Every "now"-relative operation has a `*_at` variant taking the current
//! moment explicitly so tests can pin the clock.

use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday,
};

/// Milliseconds in one whole day, the unit of [`number_of_days_between`].
pub const MILLIS_IN_DAY: i64 = 86_400_000;

/// Anything that can be reduced to a local calendar date.
///
/// The comparison predicates accept any mix of calendar dates and
/// points-in-time; points-in-time are reduced to their local-timezone
/// calendar day before comparing.
pub trait CalendarLike {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarLike for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarLike for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl CalendarLike for DateTime<Local> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Unit for [`adjusted`] offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AdjustUnit {
    Minutes,
    Days,
    Months,
    Years,
}

/// Do the two inputs fall on the same historical date?
///
/// True iff year and day-of-year match; time of day is ignored. `None` on
/// either side yields `false`.
pub fn is_same_date<A: CalendarLike, B: CalendarLike>(a: Option<A>, b: Option<B>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            let (a, b) = (a.calendar_date(), b.calendar_date());
            a.year() == b.year() && a.ordinal() == b.ordinal()
        }
        _ => false,
    }
}

/// Does the given moment fall on the current local calendar day?
pub fn is_today(moment: Option<DateTime<Local>>) -> bool {
    is_today_at(moment, Local::now())
}

pub fn is_today_at(moment: Option<DateTime<Local>>, now: DateTime<Local>) -> bool {
    is_same_date(moment, Some(now))
}

/// Is the given date a Saturday or Sunday? `None` yields `false`.
pub fn is_weekend<T: CalendarLike>(d: Option<T>) -> bool {
    match d {
        Some(d) => matches!(d.calendar_date().weekday(), Weekday::Sat | Weekday::Sun),
        None => false,
    }
}

/// Is `date` on or after `base`, comparing (year, month, day-of-month)?
///
/// `NaiveDate` already orders by exactly that triple, so this is a plain
/// `>=` once both inputs are reduced to calendar days. `None` on either
/// side yields `false`.
pub fn is_same_or_younger<A: CalendarLike, B: CalendarLike>(date: Option<A>, base: Option<B>) -> bool {
    match (date, base) {
        (Some(date), Some(base)) => date.calendar_date() >= base.calendar_date(),
        _ => false,
    }
}

/// Is `date` on or before `base`, comparing (year, month, day-of-month)?
pub fn is_same_or_older<A: CalendarLike, B: CalendarLike>(date: Option<A>, base: Option<B>) -> bool {
    match (date, base) {
        (Some(date), Some(base)) => date.calendar_date() <= base.calendar_date(),
        _ => false,
    }
}

/// Offset `base` by `amount` units; the sign of `amount` gives the direction.
///
/// Month and year offsets clamp the day-of-month into the target month
/// (Jan 31 plus one month lands on the last day of February).
pub fn adjusted(base: DateTime<Local>, unit: AdjustUnit, amount: i64) -> DateTime<Local> {
    match unit {
        AdjustUnit::Minutes => base + Duration::minutes(amount),
        AdjustUnit::Days => base + Duration::days(amount),
        AdjustUnit::Months => adjusted_months(base, amount),
        AdjustUnit::Years => adjusted_months(base, amount * 12),
    }
}

/// [`adjusted`] anchored at the current moment.
pub fn adjusted_now(unit: AdjustUnit, amount: i64) -> DateTime<Local> {
    adjusted(Local::now(), unit, amount)
}

fn adjusted_months(base: DateTime<Local>, amount: i64) -> DateTime<Local> {
    let months = Months::new(amount.unsigned_abs() as u32);
    let shifted = if amount >= 0 {
        base.checked_add_months(months)
    } else {
        base.checked_sub_months(months)
    };
    // only None at the edges of chrono's representable range
    shifted.unwrap_or(base)
}

/// A moment `days` days in the past, counted as wall-clock hours.
pub fn now_less_days(days: i64) -> DateTime<Local> {
    now_less_days_at(Local::now(), days)
}

pub fn now_less_days_at(now: DateTime<Local>, days: i64) -> DateTime<Local> {
    now - Duration::hours(days * 24)
}

/// A moment `months` months in the past.
pub fn now_less_months(months: i64) -> DateTime<Local> {
    now_less_months_at(Local::now(), months)
}

pub fn now_less_months_at(now: DateTime<Local>, months: i64) -> DateTime<Local> {
    adjusted(now, AdjustUnit::Months, -months)
}

/// A moment `years` years in the past.
pub fn now_less_years(years: i64) -> DateTime<Local> {
    now_less_years_at(Local::now(), years)
}

pub fn now_less_years_at(now: DateTime<Local>, years: i64) -> DateTime<Local> {
    adjusted(now, AdjustUnit::Years, -years)
}

/// Midnight of the current local calendar day.
pub fn today() -> DateTime<Local> {
    today_at(Local::now())
}

pub fn today_at(now: DateTime<Local>) -> DateTime<Local> {
    without_time(now)
}

/// Midnight of the previous local calendar day.
pub fn yesterday() -> DateTime<Local> {
    yesterday_at(Local::now())
}

pub fn yesterday_at(now: DateTime<Local>) -> DateTime<Local> {
    without_time(now - Duration::days(1))
}

/// Midnight of the next local calendar day.
pub fn tomorrow() -> DateTime<Local> {
    tomorrow_at(Local::now())
}

pub fn tomorrow_at(now: DateTime<Local>) -> DateTime<Local> {
    without_time(now + Duration::days(1))
}

/// Midnight of January 1 of the current year.
pub fn january_1_this_year() -> DateTime<Local> {
    january_1_this_year_at(Local::now())
}

pub fn january_1_this_year_at(now: DateTime<Local>) -> DateTime<Local> {
    let jan1 = NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap_or_else(|| now.date_naive());
    local_midnight(jan1)
}

/// Strip the time-of-day from a moment, leaving midnight of its calendar
/// day. Idempotent.
pub fn without_time(moment: DateTime<Local>) -> DateTime<Local> {
    local_midnight(moment.date_naive())
}

fn local_midnight(d: NaiveDate) -> DateTime<Local> {
    let midnight = d.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}

/// Whole 86,400,000 ms units in `end - start`, truncated toward zero.
///
/// This is a raw millisecond division, not a calendar-day count: two
/// moments 23 hours apart yield 0 even when they straddle midnight.
/// `None` on either side yields 0.
pub fn number_of_days_between(start: Option<DateTime<Local>>, end: Option<DateTime<Local>>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_milliseconds() / MILLIS_IN_DAY,
        _ => 0,
    }
}

/// Walk backward from `d` one day at a time until the day is neither
/// Saturday nor Sunday. A weekday is returned unchanged.
pub fn nearest_non_weekend_day<T: CalendarLike>(d: T) -> NaiveDate {
    let mut day = d.calendar_date();
    while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    day
}
