//! Configuration for appinstall
//!
//! Everything the installer needs to know about where things live on disk is
//! resolved once into a [`Layout`].

pub mod paths;

pub use paths::Layout;
