#![cfg(test)]
use gymkit_common::display::{self, Displayable};
use gymkit_common::entity::{Equipment, Gender, Trainer, Visitor};
use gymkit_core::{Gym, Subscription};

fn two_visitor_gym() -> Gym {
    let trainer = Trainer::new("CSharp Trainer", 45, 20, "Functional Training");
    let first = Visitor::new("CSharp Visitor 1", 30, Gender::Male);
    let second = Visitor::new("CSharp Visitor 2", 28, Gender::Female);

    let subscriptions = vec![
        Subscription::new(first.clone(), Some(trainer.clone()), 6, 300.50),
        Subscription::new(second.clone(), None, 12, 550.0),
    ];

    Gym::new(
        "Cross-Platform Gym",
        "Virtual Space",
        vec![trainer],
        vec![first, second],
        vec![
            Equipment::new("Barbell", "Weights", true),
            Equipment::new("Elliptical", "Cardio", false),
        ],
        subscriptions,
    )
}

/// A subscription with a trainer names everyone and the price.
#[test]
fn subscription_details_end_to_end() {
    let visitor = Visitor::new("A", 30, Gender::Male);
    let trainer = Trainer::new("B", 45, 20, "Functional Training");
    let subscription = Subscription::new(visitor, Some(trainer), 6, 300.50);

    let details = subscription.details();

    assert!(details.contains("A"), "missing visitor: {details}");
    assert!(details.contains("6"), "missing duration: {details}");
    assert!(details.contains("300.5"), "missing price: {details}");
    assert!(details.contains("B"), "missing trainer: {details}");
}

#[test]
fn subscription_without_trainer_never_names_one() {
    let trainer = Trainer::new("Zed", 40, 10, "Boxing");
    let visitor = Visitor::new("Alone", 19, Gender::Female);

    let with = Subscription::new(visitor.clone(), Some(trainer), 3, 90.0).details();
    let without = Subscription::new(visitor, None, 3, 90.0).details();

    assert_ne!(with, without);
    assert!(with.contains("Zed"));
    assert!(without.contains("no trainer"));
    assert!(!without.contains("Zed"));
}

/// Adding a third visitor yields a three-visitor gym and leaves the original alone.
#[test]
fn add_visitor_end_to_end() {
    let gym = two_visitor_gym();
    let newcomer = Visitor::new("New CSharp User", 22, Gender::Female);

    let updated = gym.add_visitor(newcomer.clone());

    assert_eq!(gym.visitors().len(), 2);
    assert_eq!(updated.visitors().len(), 3);
    assert_eq!(updated.visitors()[2], newcomer);

    let lines: Vec<String> = updated.list_visitors().collect();
    let expected: Vec<String> = updated.visitors().iter().map(|v| v.describe()).collect();
    assert_eq!(lines, expected);
    assert!(lines[0].contains("CSharp Visitor 1"));
    assert!(lines[1].contains("CSharp Visitor 2"));
    assert!(lines[2].contains("New CSharp User"));
}

#[test]
fn chained_updates_do_not_leak_between_branches() {
    let base = two_visitor_gym();
    let left = base.add_visitor(Visitor::new("Left", 20, Gender::Male));
    let right = base.add_visitor(Visitor::new("Right", 21, Gender::Female));

    assert_eq!(base.visitors().len(), 2);
    assert_eq!(left.visitors().last().map(|v| v.name.as_str()), Some("Left"));
    assert_eq!(right.visitors().last().map(|v| v.name.as_str()), Some("Right"));
    assert_eq!(left.trainers(), right.trainers());
    assert_eq!(left.subscriptions(), base.subscriptions());
}

#[test]
fn structurally_equal_visitors_are_interchangeable() {
    let gym = two_visitor_gym();
    let a = Visitor::new("Twin", 33, Gender::Male);
    let b = Visitor::new("Twin", 33, Gender::Male);

    assert_eq!(gym.add_visitor(a.clone()), gym.add_visitor(b.clone()));
    assert_eq!(
        Subscription::new(a, None, 1, 10.0).details(),
        Subscription::new(b, None, 1, 10.0).details()
    );
}

#[test]
fn every_displayable_kind_describes_itself() {
    let gym = two_visitor_gym();
    let visitor = &gym.visitors()[0];
    let trainer = &gym.trainers()[0];
    let equipment = &gym.equipment()[1];

    let lines = display::describe_all(&[visitor, trainer, equipment, &gym]);

    assert!(lines[0].contains("30") && lines[0].contains("Male"));
    assert!(lines[1].contains("Functional Training"));
    assert!(lines[2].contains("Not available"));
    assert!(lines[3].contains("Visitors: 2"));
    assert!(lines[3].contains("Trainers: 1"));
    assert!(lines[3].contains("Equipment: 2"));
    assert_eq!(display::describe_item(&gym), gym.describe());
}
