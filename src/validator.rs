use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const TIME_FORMAT: &str = "%H:%M";

// Regular class window, in minutes since midnight.
const CLASS_WINDOW_START: u32 = 10 * 60;
const CLASS_WINDOW_END: u32 = 12 * 60;

/// A proposed session's date and times, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date or time format. Please use 'DD-MM-YYYY' for dates and 'HH:MM' for times.")]
    InvalidFormat,
    #[error("Regular classes can only be scheduled from Monday to Thursday.")]
    ClassWrongDay,
    #[error("Regular classes must be scheduled between 10:00 and 12:00 Chile Time.")]
    ClassOutsideWindow,
    #[error("Q&A sessions are typically scheduled on Fridays.")]
    QaWrongDay,
    #[error("Demo sessions are typically scheduled on Fridays.")]
    DemoWrongDay,
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// Checks a proposed session against the booking rules for its type.
///
/// Regular classes run Monday to Thursday and must start in `[10:00, 12:00)`
/// and end in `(10:00, 12:00]`. Q&A and demo sessions are Friday only, at any
/// time. Unknown types are accepted as long as the date and times parse.
pub fn validate(
    session_type: &str,
    date: &str,
    start_time: &str,
    end_time: &str,
) -> Result<Schedule, ScheduleError> {
    let (Some(date), Some(start_time), Some(end_time)) =
        (parse_date(date), parse_time(start_time), parse_time(end_time))
    else {
        return Err(ScheduleError::InvalidFormat);
    };

    let weekday = date.weekday();
    match session_type.to_lowercase().as_str() {
        "class" => {
            if !matches!(
                weekday,
                Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu
            ) {
                return Err(ScheduleError::ClassWrongDay);
            }
            let start = minute_of_day(start_time);
            let end = minute_of_day(end_time);
            let start_ok = (CLASS_WINDOW_START..CLASS_WINDOW_END).contains(&start);
            let end_ok = CLASS_WINDOW_START < end && end <= CLASS_WINDOW_END;
            if !(start_ok && end_ok) {
                return Err(ScheduleError::ClassOutsideWindow);
            }
        }
        "qa" if weekday != Weekday::Fri => return Err(ScheduleError::QaWrongDay),
        "demo" if weekday != Weekday::Fri => return Err(ScheduleError::DemoWrongDay),
        _ => {}
    }

    Ok(Schedule {
        date,
        start_time,
        end_time,
    })
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
