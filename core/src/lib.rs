//! # Gymkit Core
//!
//! The gym domain model built on top of the value entities in
//! [`gymkit_common::entity`].
//!
//! * **[`subscription`]**: a visitor's plan, optionally with a personal trainer.
//! * **[`gym`]**: the facility aggregate. Immutable; updates produce new values.
//! * **[`membership`]**: the one mutable lifecycle object, a dated membership window.

pub mod gym;
pub mod membership;
pub mod subscription;

pub use gym::Gym;
pub use membership::Membership;
pub use subscription::Subscription;
