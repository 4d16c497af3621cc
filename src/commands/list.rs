//! List command implementation

use console::style;

use crate::config::Layout;
use crate::error::Result;
use crate::i18n::{Localizer, MessageKey};
use crate::operations::list_installed;
use crate::ui;

/// Run list command
pub fn run(layout: &Layout, l10n: &Localizer) -> Result<()> {
    let installed = list_installed(layout)?;

    if installed.is_empty() {
        ui::info(l10n.text(MessageKey::NoAppsInstalled));
        return Ok(());
    }

    ui::info(&l10n.format(MessageKey::InstalledHeader, &[&installed.len()]));
    let width = installed.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    for (id, entry) in &installed {
        println!(
            "  {}  {}  {}",
            style(format!("{id:<width$}")).cyan().bold(),
            entry.version,
            style(&entry.path).dim()
        );
    }

    Ok(())
}
