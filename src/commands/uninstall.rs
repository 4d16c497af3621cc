//! Uninstall command CLI wrapper

use crate::config::Layout;
use crate::i18n::{Localizer, MessageKey};
use crate::names::AppId;
use crate::operations::{
    ArtifactKind, ArtifactRemoval, RemovalStatus, UninstallOperation, UninstallOutcome,
};
use crate::registry::RegistryEntry;
use crate::ui;

use super::install::report_error;

/// Run uninstall command
///
/// Like install, errors are reported rather than propagated.
pub fn run(layout: &Layout, l10n: &Localizer, name: &str) {
    ui::info(&l10n.format(MessageKey::Uninstalling, &[&name]));

    match UninstallOperation::new(layout).execute(name) {
        Ok(UninstallOutcome::NotFound { path }) => {
            ui::warn(&l10n.format(MessageKey::NotInstalled, &[&path.display()]));
        }
        Ok(UninstallOutcome::Removed {
            id,
            artifacts,
            registry_entry,
            refreshed,
        }) => {
            for artifact in &artifacts {
                report_artifact(l10n, artifact);
            }
            report_registry_entry(l10n, &id, registry_entry.as_ref());
            if !refreshed {
                ui::warn(l10n.text(MessageKey::RefreshFailed));
            }
            ui::success(l10n.text(MessageKey::UninstallComplete));
        }
        Err(err) => report_error(l10n, &err),
    }
}

fn report_registry_entry(l10n: &Localizer, id: &AppId, entry: Option<&RegistryEntry>) {
    let label = l10n.text(MessageKey::LabelRegistryEntry);
    match entry {
        Some(entry) => {
            let removed = format!("{id} {}", entry.version);
            ui::info(&l10n.format(MessageKey::ArtifactRemoved, &[&label, &removed]));
        }
        None => ui::info(&l10n.format(MessageKey::ArtifactMissing, &[&label, id])),
    }
}

fn report_artifact(l10n: &Localizer, artifact: &ArtifactRemoval) {
    let label = l10n.text(match artifact.kind {
        ArtifactKind::Bundle => MessageKey::LabelBundle,
        ArtifactKind::Launcher => MessageKey::LabelLauncher,
        ArtifactKind::Icon => MessageKey::LabelIcon,
    });
    let path = artifact.path.display();

    match &artifact.status {
        RemovalStatus::Removed => {
            ui::info(&l10n.format(MessageKey::ArtifactRemoved, &[&label, &path]));
        }
        RemovalStatus::Missing => {
            ui::info(&l10n.format(MessageKey::ArtifactMissing, &[&label, &path]));
        }
        RemovalStatus::Failed(reason) => {
            ui::warn(&l10n.format(
                MessageKey::ArtifactRemoveFailed,
                &[&label, &path, reason],
            ));
        }
    }
}
