use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GymError {
    #[error("Date out of range: {date} shifted by {months} months")]
    DateOutOfRange { date: NaiveDateTime, months: i32 },
}
