//! `--version` output: package version, target and build profile

use std::env::consts::{ARCH, OS};

/// Run version command
pub fn run() {
    print!("{}", version_text());
}

fn version_text() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    format!(
        "appinstall {version}\n\
         \n\
         Build info:\n\
         \x20 Target: {OS}-{ARCH}\n\
         \x20 Profile: {profile}\n\
         \x20 MSRV: {msrv}\n",
        version = env!("CARGO_PKG_VERSION"),
        msrv = env!("CARGO_PKG_RUST_VERSION"),
    )
}
