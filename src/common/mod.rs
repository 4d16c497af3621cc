//! Common utilities shared across the codebase

pub mod fs;
