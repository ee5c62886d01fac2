//! Host platform detection.

pub mod platform;

pub use platform::{is_ci, Platform};
