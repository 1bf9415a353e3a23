//! Foundation module - shared utilities

pub mod logging;
