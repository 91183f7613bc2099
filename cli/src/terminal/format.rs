use crate::terminal::colors;
use chrono::NaiveDateTime;
use colored::*;
use gymkit_common::clock::Clock;
use gymkit_common::entity::{Equipment, Trainer};
use gymkit_core::Membership;

pub type Detail = (String, ColoredString);

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_to_value(date: NaiveDateTime) -> ColoredString {
    date.format(DATE_FORMAT).to_string().color(colors::DATE)
}

pub fn flag_to_value(flag: bool, yes: &str, no: &str) -> ColoredString {
    if flag {
        yes.color(colors::ACTIVE)
    } else {
        no.color(colors::INACTIVE)
    }
}

pub fn trainer_to_details(trainer: &Trainer) -> Vec<Detail> {
    vec![
        ("Age".to_string(), trainer.age.to_string().normal()),
        (
            "Experience".to_string(),
            format!("{} years", trainer.experience_years).normal(),
        ),
        ("Focus".to_string(), trainer.specialization.as_str().normal()),
    ]
}

pub fn equipment_to_details(equipment: &Equipment) -> Vec<Detail> {
    vec![
        ("Category".to_string(), equipment.category.as_str().normal()),
        (
            "Status".to_string(),
            flag_to_value(equipment.is_available, "Available", "In use"),
        ),
    ]
}

pub fn membership_to_details(membership: &Membership, clock: &dyn Clock) -> Vec<Detail> {
    let remaining: f64 = membership.remaining_days(clock);
    let remaining: ColoredString = if remaining < 0.0 {
        format!("expired {:.0} days ago", -remaining).color(colors::INACTIVE)
    } else {
        format!("{:.0}", remaining).color(colors::DAYS_LEFT)
    };

    vec![
        ("Start".to_string(), date_to_value(membership.start_date())),
        ("End".to_string(), date_to_value(membership.end_date())),
        (
            "Active".to_string(),
            flag_to_value(membership.is_active(), "yes", "no"),
        ),
        ("Days left".to_string(), remaining),
    ]
}
