//! Install command CLI wrapper
//!
//! Runs [`InstallOperation`] and turns its outcome, or its error, into
//! localized terminal output. Errors stop here: a failed install is reported
//! and the process still exits normally.

use std::path::Path;

use miette::Diagnostic;

use crate::config::Layout;
use crate::error::AppError;
use crate::i18n::{Localizer, MessageKey};
use crate::operations::{InstallOperation, InstallOptions, InstallOutcome, SourceCleanup};
use crate::ui;

/// Run install command
pub fn run(layout: &Layout, l10n: &Localizer, source: &Path, options: InstallOptions) {
    ui::info(&l10n.format(MessageKey::Installing, &[&source.display()]));

    let spinner = ui::spinner(l10n.text(MessageKey::Extracting));
    let result = InstallOperation::new(layout, options).execute(source);
    spinner.finish_and_clear();

    match result {
        Ok(outcome) => report_outcome(l10n, &outcome),
        Err(err) => report_error(l10n, &err),
    }
}

fn report_outcome(l10n: &Localizer, outcome: &InstallOutcome) {
    if outcome.icon.is_none() {
        ui::warn(l10n.text(MessageKey::IconMissing));
    }
    if !outcome.refreshed {
        ui::warn(l10n.text(MessageKey::RefreshFailed));
    }

    ui::success(&l10n.format(
        MessageKey::InstallComplete,
        &[&outcome.name, &outcome.version],
    ));

    match &outcome.cleanup {
        Some(SourceCleanup::Removed) => ui::info(&l10n.format(
            MessageKey::SourceRemoved,
            &[&outcome.source.display()],
        )),
        Some(SourceCleanup::Failed(reason)) => ui::warn(&l10n.format(
            MessageKey::SourceRemoveFailed,
            &[&outcome.source.display(), reason],
        )),
        Some(SourceCleanup::Kept) | None => {}
    }
}

pub(crate) fn report_error(l10n: &Localizer, err: &AppError) {
    tracing::debug!(error = ?err, "command failed");
    let message = match err {
        AppError::BundleNotFound { path } => l10n.format(MessageKey::InvalidBundlePath, &[path]),
        AppError::DescriptorNotFound { bundle } => {
            l10n.format(MessageKey::DescriptorMissing, &[bundle])
        }
        other => l10n.format(MessageKey::ErrorOccurred, &[other]),
    };
    ui::error(&message);
    if let Some(help) = err.help() {
        ui::hint(&help.to_string());
    }
}
