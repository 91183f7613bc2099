//! # Membership
//!
//! The only mutable object in the model. A membership owns a date window and
//! an activity flag; callers mutate it directly through setters and
//! [`Membership::extend_membership`].
//!
//! The flag is never derived from the window. A membership can be active
//! after its end date, inactive inside its window, and its end date may be
//! set before its start date. None of these states are rejected.

use chrono::{Months, NaiveDateTime};
use gymkit_common::GymError;
use gymkit_common::clock::Clock;
use tracing::debug;

/// Window length used by the constructors that do not take one.
pub const DEFAULT_DURATION_MONTHS: i32 = 12;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    member_id: i32,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    is_active: bool,
}

impl Membership {
    /// A membership starting at `start_date` and lasting `duration_months`.
    pub fn new(
        member_id: i32,
        start_date: NaiveDateTime,
        duration_months: i32,
    ) -> Result<Self, GymError> {
        let end_date = shift_months(start_date, duration_months)?;
        Ok(Self {
            member_id,
            start_date,
            end_date,
            is_active: false,
        })
    }

    /// A membership for `member_id` starting now, with the default duration.
    pub fn for_member(member_id: i32, clock: &dyn Clock) -> Result<Self, GymError> {
        Self::new(member_id, clock.now(), DEFAULT_DURATION_MONTHS)
    }

    /// An unassigned membership (member id `0`) starting now.
    pub fn with_defaults(clock: &dyn Clock) -> Result<Self, GymError> {
        Self::for_member(0, clock)
    }

    pub fn member_id(&self) -> i32 {
        self.member_id
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_member_id(&mut self, member_id: i32) {
        self.member_id = member_id;
    }

    pub fn set_end_date(&mut self, end_date: NaiveDateTime) {
        self.end_date = end_date;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Moves the end date by `months` calendar months. Negative values move it back.
    ///
    /// The end date is left untouched when the result would not be representable.
    pub fn extend_membership(&mut self, months: i32) -> Result<(), GymError> {
        self.end_date = shift_months(self.end_date, months)?;
        debug!(
            member_id = self.member_id,
            months,
            end_date = %self.end_date,
            "membership extended"
        );
        Ok(())
    }

    /// Days left until the end date, as a fraction. Negative once the end date has passed.
    pub fn remaining_days(&self, clock: &dyn Clock) -> f64 {
        let remaining = self.end_date - clock.now();
        // Nanoseconds overflow past ~292 years; milliseconds cover the rest.
        match remaining.num_nanoseconds() {
            Some(nanos) => nanos as f64 / NANOS_PER_DAY,
            None => remaining.num_milliseconds() as f64 / MILLIS_PER_DAY,
        }
    }

    pub fn status(&self, clock: &dyn Clock) -> String {
        format!(
            "Member {}: {} to {}, Active: {}, Remaining days: {:.0}",
            self.member_id,
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT),
            self.is_active,
            self.remaining_days(clock)
        )
    }
}

fn shift_months(date: NaiveDateTime, months: i32) -> Result<NaiveDateTime, GymError> {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    shifted.ok_or(GymError::DateOutOfRange { date, months })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
