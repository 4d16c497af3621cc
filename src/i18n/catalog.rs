//! Message catalogues
//!
//! English is the reference language and covers every key; other languages
//! may leave keys out, in which case the English text is used.

use super::MessageKey;

pub fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Installing => "Installing {0}...",
        MessageKey::Extracting => "Extracting bundle...",
        MessageKey::InstallComplete => "Installation complete: {0} {1}",
        MessageKey::InvalidBundlePath => "Not a valid AppImage file: {0}",
        MessageKey::DescriptorMissing => "ERROR: no .desktop file found in {0}",
        MessageKey::IconMissing => "No icon found; the menu entry may have no icon.",
        MessageKey::RefreshFailed => "Could not refresh the desktop menu database.",
        MessageKey::SourceRemoved => "Removed source file: {0}",
        MessageKey::SourceRemoveFailed => "Could not remove source file {0}: {1}",
        MessageKey::ErrorOccurred => "An error occurred: {0}",
        MessageKey::Uninstalling => "Uninstalling {0}...",
        MessageKey::NotInstalled => "AppImage not found: {0}",
        MessageKey::ArtifactRemoved => "{0} removed: {1}",
        MessageKey::ArtifactMissing => "{0} not found: {1}",
        MessageKey::ArtifactRemoveFailed => "Could not remove {0} {1}: {2}",
        MessageKey::UninstallComplete => "Uninstall complete.",
        MessageKey::LabelBundle => "AppImage",
        MessageKey::LabelLauncher => "Desktop entry",
        MessageKey::LabelIcon => "Icon",
        MessageKey::LabelRegistryEntry => "Registry entry",
        MessageKey::NoAppsInstalled => "No applications installed.",
        MessageKey::InstalledHeader => "Installed applications ({0}):",
        MessageKey::UnknownLanguage => "Unknown language '{0}', using English.",
        MessageKey::TranslationSummary => "{0}: {1}/{2} messages translated",
        MessageKey::TranslationMissing => "  missing: {0}",
    }
}

pub fn turkish(key: MessageKey) -> Option<&'static str> {
    let text = match key {
        MessageKey::Installing => "{0} kuruluyor...",
        MessageKey::Extracting => "AppImage açılıyor...",
        MessageKey::InstallComplete => "Kurulum tamamlandı: {0} {1}",
        MessageKey::InvalidBundlePath => "Geçerli bir AppImage dosyası girilmedi: {0}",
        MessageKey::DescriptorMissing => "HATA: {0} içinde .desktop dosyası bulunamadı.",
        MessageKey::IconMissing => "İkon bulunamadı, masaüstü simgesi olmayabilir.",
        MessageKey::RefreshFailed => "Masaüstü menü veritabanı güncellenemedi.",
        MessageKey::SourceRemoved => "Kaynak dosya silindi: {0}",
        MessageKey::SourceRemoveFailed => "Kaynak dosya silinemedi {0}: {1}",
        MessageKey::ErrorOccurred => "Hata oluştu: {0}",
        MessageKey::Uninstalling => "{0} kaldırılıyor...",
        MessageKey::NotInstalled => "AppImage bulunamadı: {0}",
        MessageKey::ArtifactRemoved => "{0} silindi: {1}",
        MessageKey::ArtifactMissing => "{0} bulunamadı: {1}",
        MessageKey::ArtifactRemoveFailed => "{0} silinemedi {1}: {2}",
        MessageKey::UninstallComplete => "Kaldırma işlemi tamamlandı.",
        MessageKey::LabelBundle => "AppImage",
        MessageKey::LabelLauncher => "Masaüstü dosyası",
        MessageKey::LabelIcon => "İkon",
        MessageKey::LabelRegistryEntry => "Kayıt",
        MessageKey::NoAppsInstalled => "Kurulu uygulama yok.",
        MessageKey::InstalledHeader => "Kurulu uygulamalar ({0}):",
        MessageKey::UnknownLanguage => "Bilinmeyen dil '{0}', İngilizce kullanılıyor.",
        MessageKey::TranslationSummary | MessageKey::TranslationMissing => return None,
    };
    Some(text)
}
