use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::{Clock, FixedClock, SystemClock};

#[derive(Debug, Clone)]
pub struct Config {
    /// Hides the banner printed at startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers, `2` prints only summaries.
    pub quiet: u8,
    /// Pins "today" instead of reading the wall clock.
    ///
    /// The pinned clock reads midnight of the given date.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => {
                let midnight: NaiveDateTime = date.and_time(chrono::NaiveTime::MIN);
                Box::new(FixedClock(midnight))
            }
            None => Box::new(SystemClock),
        }
    }
}
