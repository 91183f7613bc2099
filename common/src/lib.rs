//! # Gymkit Common
//!
//! Shared building blocks for the gymkit workspace.
//!
//! ## Contents
//! * **[`entity`]**: The immutable value entities (visitors, trainers, equipment).
//! * **[`display`]**: The [`display::Displayable`] capability shared by every describable kind.
//! * **[`clock`]**: Injected time source, so "now" never comes from a global.
//! * **[`config`]**: Runtime flags handed down from the command line.
//! * **[`error`]**: The library error type.

pub mod clock;
pub mod config;
pub mod display;
pub mod entity;
pub mod error;
mod macros;

#[doc(hidden)]
pub use tracing;

pub use display::Displayable;
pub use error::GymError;
