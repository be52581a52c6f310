//! Small display helpers shared across views.

pub mod format;
