//! # Application Layer
//!
//! Use cases and the service interfaces they orchestrate.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
