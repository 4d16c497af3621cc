//! Terminal presentation layer
//!
//! This module handles:
//! - Styled status lines for command results
//! - A spinner shown while a bundle runs its self-extraction
//!
//! Results go to stdout, warnings and errors to stderr.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub fn info(message: &str) {
    println!("{message}");
}

pub fn success(message: &str) {
    println!("{} {message}", style("✓").green().bold());
}

pub fn warn(message: &str) {
    eprintln!("{} {message}", style("!").yellow().bold());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", style("✗").red().bold());
}

/// A dimmed secondary line (e.g. a diagnostic help text)
pub fn hint(message: &str) {
    eprintln!("  {}", style(message).dim());
}

/// Spinner on stderr; invisible when stderr is not a terminal
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
