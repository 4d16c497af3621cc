//! Translation coverage report

use crate::i18n::{self, Localizer, MessageKey};
use crate::ui;

/// Print how many messages each language translates and which are missing
pub fn run(l10n: &Localizer) {
    for coverage in i18n::coverage() {
        ui::info(&l10n.format(
            MessageKey::TranslationSummary,
            &[&coverage.lang.code(), &coverage.translated, &coverage.total],
        ));
        for key in &coverage.missing {
            ui::info(&l10n.format(MessageKey::TranslationMissing, &[&format!("{key:?}")]));
        }
    }
}
