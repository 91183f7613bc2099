//! # Gym Aggregate
//!
//! The facility and everything it holds. A [`Gym`] is never mutated: an
//! update returns a new value and leaves the receiver, and every other handle
//! to it, untouched. Sequences the update does not change are shared between
//! the old and the new value instead of being copied.

use std::sync::Arc;

use gymkit_common::display::Displayable;
use gymkit_common::entity::{Equipment, Trainer, Visitor};
use tracing::debug;

use crate::subscription::Subscription;

#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    name: String,
    location: String,
    trainers: Arc<[Trainer]>,
    visitors: Arc<[Visitor]>,
    equipment: Arc<[Equipment]>,
    subscriptions: Arc<[Subscription]>,
}

impl Gym {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        trainers: Vec<Trainer>,
        visitors: Vec<Visitor>,
        equipment: Vec<Equipment>,
        subscriptions: Vec<Subscription>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            trainers: trainers.into(),
            visitors: visitors.into(),
            equipment: equipment.into(),
            subscriptions: subscriptions.into(),
        }
    }

    /// Returns a new gym with `visitor` appended to the end of the visitor list.
    pub fn add_visitor(&self, visitor: Visitor) -> Gym {
        let visitors: Arc<[Visitor]> = self
            .visitors
            .iter()
            .cloned()
            .chain(std::iter::once(visitor))
            .collect();

        debug!(gym = %self.name, visitors = visitors.len(), "visitor added");

        Gym {
            name: self.name.clone(),
            location: self.location.clone(),
            trainers: Arc::clone(&self.trainers),
            visitors,
            equipment: Arc::clone(&self.equipment),
            subscriptions: Arc::clone(&self.subscriptions),
        }
    }

    /// One description line per visitor, in stored order.
    pub fn list_visitors(&self) -> impl Iterator<Item = String> + '_ {
        self.visitors.iter().map(|visitor| visitor.describe())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }
}

impl Displayable for Gym {
    fn describe(&self) -> String {
        format!(
            "Gym: {} at {}, Visitors: {}, Trainers: {}, Equipment: {}",
            self.name,
            self.location,
            self.visitors.len(),
            self.trainers.len(),
            self.equipment.len()
        )
    }
}
