//! # Displayable Capability
//!
//! A one-line, human-readable description shared by otherwise unrelated
//! kinds: visitors, trainers, equipment and the gym aggregate itself.

pub trait Displayable {
    fn describe(&self) -> String;
}

/// Describes any displayable item through the shared capability.
pub fn describe_item(item: &dyn Displayable) -> String {
    item.describe()
}

/// Describes a mixed batch of items, preserving their order.
pub fn describe_all(items: &[&dyn Displayable]) -> Vec<String> {
    items.iter().map(|item| item.describe()).collect()
}
