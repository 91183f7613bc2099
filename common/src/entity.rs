//! # Entity Value Types
//!
//! Immutable records built once from their full field set. Nothing here
//! validates logical ranges: a trainer with more years of experience than
//! years of age is representable.
//!
//! * [`gender::Gender`]: closed two-variant tag.
//! * [`visitor::Visitor`]: a person training at the gym.
//! * [`trainer::Trainer`]: staff member with a specialization.
//! * [`equipment::Equipment`]: a piece of gear and whether it is free.

pub mod equipment;
pub mod gender;
pub mod trainer;
pub mod visitor;

pub use equipment::Equipment;
pub use gender::Gender;
pub use trainer::Trainer;
pub use visitor::Visitor;
