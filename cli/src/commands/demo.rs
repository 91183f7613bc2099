use anyhow::Context;
use chrono::{Months, NaiveDate, NaiveDateTime};
use colored::*;

use crate::terminal::{colors, format, print};
use gymkit_common::clock::Clock;
use gymkit_common::config::Config;
use gymkit_common::display::{self, Displayable};
use gymkit_common::entity::{Equipment, Gender, Trainer, Visitor};
use gymkit_common::{info, success};
use gymkit_core::{Gym, Membership, Subscription};

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let clock: Box<dyn Clock> = cfg.clock();

    let first = Visitor::new("Andrii Koval", 30, Gender::Male);
    let second = Visitor::new("Olena Marchenko", 28, Gender::Female);
    let trainer = Trainer::new("Taras Bondar", 45, 20, "Functional Training");
    let barbell = Equipment::new("Barbell", "Weights", true);
    let elliptical = Equipment::new("Elliptical", "Cardio", false);
    success!("Created 2 visitors, 1 trainer and 2 pieces of equipment");

    let with_trainer = Subscription::new(first.clone(), Some(trainer.clone()), 6, 300.50);
    let without_trainer = Subscription::new(second.clone(), None, 12, 550.0);

    let gym = Gym::new(
        "Cross-Platform Gym",
        "Virtual Space",
        vec![trainer.clone()],
        vec![first.clone(), second],
        vec![barbell.clone(), elliptical],
        vec![with_trainer.clone(), without_trainer],
    );
    success!("Created {} at {}", gym.name(), gym.location());

    print::section("people and plans", cfg);
    if print::shows_details(cfg) {
        print::field("Locker room", first.locker_room_direction());
        print::field("Trainer", trainer.introduction());
        for subscription in gym.subscriptions() {
            print::field("Subscription", subscription.details());
        }
    }

    let newcomer = Visitor::new("Iryna Melnyk", 22, Gender::Female);
    let updated: Gym = gym.add_visitor(newcomer);
    info!(
        "Added a visitor: {} now has {} visitors, the original still has {}",
        updated.name(),
        updated.visitors().len(),
        gym.visitors().len()
    );

    print_roster(&updated, cfg);

    print::section("item descriptions", cfg);
    if print::shows_details(cfg) {
        let items: [&dyn Displayable; 4] = [&first, &trainer, &barbell, &updated];
        for line in display::describe_all(&items) {
            print::line(line);
        }
    }

    print::section("memberships", cfg);
    let memberships: Vec<Membership> = sample_memberships(clock.as_ref())?;
    print_memberships(&memberships, clock.as_ref(), cfg);

    Ok(())
}

fn print_roster(gym: &Gym, cfg: &Config) {
    print::section("roster", cfg);

    if print::shows_details(cfg) {
        for (idx, line) in gym.list_visitors().enumerate() {
            print::entry(idx, &line, Vec::new());
        }

        for (idx, trainer) in gym.trainers().iter().enumerate() {
            print::blank();
            print::entry(idx, &trainer.name, format::trainer_to_details(trainer));
        }

        for (idx, equipment) in gym.equipment().iter().enumerate() {
            print::blank();
            print::entry(idx, &equipment.name, format::equipment_to_details(equipment));
        }
    }

    print::summary(gym.describe().color(colors::ACCENT));
}

fn sample_memberships(clock: &dyn Clock) -> anyhow::Result<Vec<Membership>> {
    let start: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .context("invalid membership start date")?;

    let fixed = Membership::new(201, start, 12)?;

    let mut extended = Membership::for_member(202, clock)?;
    extended.extend_membership(6)?;

    let mut adjusted = Membership::with_defaults(clock)?;
    let next_month: NaiveDateTime = clock
        .now()
        .checked_add_months(Months::new(1))
        .context("next month is out of range")?;
    adjusted.set_member_id(203);
    adjusted.set_end_date(next_month);
    adjusted.set_active(true);

    Ok(vec![fixed, extended, adjusted])
}

fn print_memberships(memberships: &[Membership], clock: &dyn Clock, cfg: &Config) {
    for (idx, membership) in memberships.iter().enumerate() {
        if print::shows_details(cfg) {
            let title: String = format!("Member {}", membership.member_id());
            print::entry(idx, &title, format::membership_to_details(membership, clock));
            if idx + 1 != memberships.len() {
                print::blank();
            }
        } else {
            print::line(membership.status(clock));
        }
    }
}
