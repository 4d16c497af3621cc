//! Launcher entry generation

use std::path::Path;

use super::BundleMetadata;

/// Switch appended to the launch command when the caller asks for it
pub const NO_SANDBOX_ARG: &str = "--no-sandbox";

/// Render the `.desktop` file that registers an installed bundle.
///
/// `exec` replaces the bundle's own Exec value. Categories always gets a
/// trailing `;`, even when empty or already terminated.
pub fn render(metadata: &BundleMetadata, exec: &str, icon: &str) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={name}\n\
         Comment={comment}\n\
         Exec={exec}\n\
         Icon={icon}\n\
         Terminal=false\n\
         Categories={categories};\n",
        name = metadata.name,
        comment = metadata.comment,
        categories = metadata.categories,
    )
}

/// Launch command for a retained bundle
pub fn launch_command(bundle: &Path, no_sandbox: bool) -> String {
    let program = quote_exec_arg(&bundle.display().to_string());
    if no_sandbox {
        format!("{program} {NO_SANDBOX_ARG}")
    } else {
        program
    }
}

/// Escape an Exec argument, quoting it when it contains reserved characters.
///
/// `%` is doubled so it is not read as a field code. Exec is a string value,
/// so the backslashes added by quoting are escaped once more.
fn quote_exec_arg(arg: &str) -> String {
    const RESERVED: &[char] = &[
        ' ', '\t', '"', '\'', '\\', '>', '<', '~', '|', '&', ';', '$', '*', '?', '#', '(', ')',
        '`',
    ];
    let arg = arg.replace('%', "%%");
    if !arg.contains(RESERVED) {
        return arg;
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted.replace('\\', "\\\\")
}
