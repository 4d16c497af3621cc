//! appinstall - per-user AppImage installer
//!
//! Installs AppImages into the user's home directory, registers them with the
//! desktop launcher menu and tracks installed versions in a local registry.

use clap::{CommandFactory, Parser};

mod bundle;
mod cli;
mod commands;
mod common;
mod config;
mod desktop;
mod error;
mod i18n;
mod logging;
mod names;
mod operations;
mod registry;
mod temp;
mod transaction;
mod ui;

use cli::{Action, Cli};
use config::Layout;
use error::Result;
use i18n::{Localizer, MessageKey};
use operations::InstallOptions;

fn run(action: Action, l10n: &Localizer) -> Result<()> {
    match action {
        Action::Install {
            path,
            no_sandbox,
            clean,
        } => {
            let layout = Layout::discover()?;
            commands::install::run(&layout, l10n, &path, InstallOptions { no_sandbox, clean });
        }
        Action::Uninstall(name) => {
            let layout = Layout::discover()?;
            commands::uninstall::run(&layout, l10n, &name);
        }
        Action::List => commands::list::run(&Layout::discover()?, l10n)?,
        Action::Version => commands::version::run(),
        Action::ReportTranslations => commands::translations::run(l10n),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (l10n, unknown_lang) = Localizer::resolve(cli.lang.as_deref());
    if let Some(code) = unknown_lang {
        ui::warn(&l10n.format(MessageKey::UnknownLanguage, &[&code]));
    }
    tracing::debug!(lang = l10n.lang().code(), "message language selected");

    let Some(action) = cli.action() else {
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(e) = run(action, &l10n) {
        ui::error(&l10n.format(MessageKey::ErrorOccurred, &[&e]));
        std::process::exit(1);
    }
}
