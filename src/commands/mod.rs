//! Command implementations for the appinstall CLI

pub mod install;
pub mod list;
pub mod translations;
pub mod uninstall;
pub mod version;
