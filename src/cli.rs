//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// appinstall - AppImage installer
///
/// Install AppImages into the user's home and register them with the desktop menu.
#[derive(Parser, Debug)]
#[command(
    name = "appinstall",
    author,
    disable_version_flag = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install and uninstall AppImages for the current user",
    long_about = "appinstall copies an AppImage to ~/.local/bin, extracts its icon, writes a \
                  launcher entry to ~/.local/share/applications and records the installed \
                  version in a local registry.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appinstall --install ~/Downloads/Krita.AppImage   \x1b[90m# Install\x1b[0m\n   \
                  appinstall --install ./App.AppImage --sandbox      \x1b[90m# Launch with --no-sandbox\x1b[0m\n   \
                  appinstall --uninstall krita                       \x1b[90m# Uninstall\x1b[0m\n   \
                  appinstall --list                                  \x1b[90m# List installed apps\x1b[0m\n"
)]
#[command(group(
    ArgGroup::new("action")
        .args(["install", "uninstall", "list", "version", "report_translations"])
        .multiple(false)
))]
pub struct Cli {
    /// Install the AppImage at PATH
    #[arg(long, short = 'i', value_name = "PATH")]
    pub install: Option<PathBuf>,

    /// Uninstall an application by name (e.g. firefox)
    #[arg(long, short = 'u', value_name = "NAME")]
    pub uninstall: Option<String>,

    /// List installed applications
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Launch the installed app with --no-sandbox (disables its internal sandbox)
    #[arg(long)]
    pub sandbox: bool,

    /// Delete the source AppImage after a successful install
    #[arg(long)]
    pub clean: bool,

    /// Message language (en, tr); defaults to the system locale
    #[arg(long, value_name = "CODE", env = "APPINSTALL_LANG")]
    pub lang: Option<String>,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Show translation coverage per language
    #[arg(long)]
    pub report_translations: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// The primary action selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Install {
        path: PathBuf,
        no_sandbox: bool,
        clean: bool,
    },
    Uninstall(String),
    List,
    Version,
    ReportTranslations,
}

impl Cli {
    /// `None` when no primary action was given
    pub fn action(&self) -> Option<Action> {
        if let Some(path) = &self.install {
            Some(Action::Install {
                path: path.clone(),
                no_sandbox: self.sandbox,
                clean: self.clean,
            })
        } else if let Some(name) = &self.uninstall {
            Some(Action::Uninstall(name.clone()))
        } else if self.list {
            Some(Action::List)
        } else if self.version {
            Some(Action::Version)
        } else if self.report_translations {
            Some(Action::ReportTranslations)
        } else {
            None
        }
    }
}
