//! Common test utilities for appinstall integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// An isolated home directory plus a private TMPDIR
pub struct TestHome {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Value of APPINSTALL_HOME for the binary under test
    pub home: PathBuf,
    /// Value of TMPDIR, used to detect leaked scratch directories
    pub tmp: PathBuf,
    /// Where test bundles are written before install
    #[allow(dead_code)]
    pub downloads: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        let home = root.join("home");
        let tmp = root.join("tmp");
        let downloads = root.join("downloads");
        for dir in [&home, &tmp, &downloads] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        Self {
            temp,
            home,
            tmp,
            downloads,
        }
    }

    /// The appinstall binary, isolated from the real user environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("appinstall").expect("Failed to find appinstall binary");
        cmd.env("APPINSTALL_HOME", &self.home)
            .env("TMPDIR", &self.tmp)
            .env("LANG", "C")
            .env("NO_COLOR", "1")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env_remove("APPINSTALL_LANG")
            .env_remove("APPINSTALL_LOG");
        cmd
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.home.join(".local/bin")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.home.join(".local/share/icons")
    }

    pub fn applications_dir(&self) -> PathBuf {
        self.home.join(".local/share/applications")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.home.join(".local/share/appinstall/registry.json")
    }

    /// Parsed registry document
    #[allow(dead_code)]
    pub fn registry(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.registry_path()).expect("Failed to read registry");
        serde_json::from_str(&content).expect("Registry is not valid JSON")
    }

    #[allow(dead_code)]
    pub fn launcher(&self, id: &str) -> String {
        fs::read_to_string(self.applications_dir().join(format!("{id}.desktop")))
            .expect("Failed to read launcher entry")
    }

    /// Scratch directories left behind in TMPDIR
    #[allow(dead_code)]
    pub fn leaked_scratch_dirs(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.tmp)
            .expect("Failed to read TMPDIR")
            .map(|entry| entry.expect("Failed to read TMPDIR entry").path())
            .collect()
    }
}

/// A shell script that behaves like an AppImage's `--appimage-extract`
#[allow(dead_code)]
pub struct FakeBundle {
    descriptor: Option<String>,
    files: Vec<(String, String)>,
    fail_extraction: bool,
    mode: u32,
}

#[allow(dead_code)]
impl FakeBundle {
    /// Bundle whose descriptor declares `name` and nothing else
    pub fn named(name: &str) -> Self {
        Self::with_descriptor(&format!("[Desktop Entry]\nName={name}\n"))
    }

    pub fn with_descriptor(descriptor: &str) -> Self {
        Self {
            descriptor: Some(descriptor.to_string()),
            files: Vec::new(),
            fail_extraction: false,
            mode: 0o644,
        }
    }

    /// Bundle that extracts fine but carries no descriptor
    pub fn without_descriptor() -> Self {
        Self {
            descriptor: None,
            files: Vec::new(),
            fail_extraction: false,
            mode: 0o644,
        }
    }

    /// Add a file to the extracted tree; its content is its relative path
    pub fn file(mut self, relative: &str) -> Self {
        self.files
            .push((relative.to_string(), relative.to_string()));
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_extraction = true;
        self
    }

    /// Write with execute bits set, like a bundle appinstall retained
    pub fn executable(mut self) -> Self {
        self.mode = 0o755;
        self
    }

    /// Write the script to `dir/file_name`; non-executable like a fresh download
    /// unless [`FakeBundle::executable`] was called
    pub fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create bundle directory");
        }
        fs::write(&path, self.script()).expect("Failed to write bundle");
        #[cfg(unix)]
        fs::set_permissions(&path, fs::Permissions::from_mode(self.mode))
            .expect("Failed to set bundle permissions");
        path
    }

    fn script(&self) -> String {
        let mut script = String::from("#!/bin/sh\n");
        script.push_str("if [ \"$1\" != \"--appimage-extract\" ]; then exit 0; fi\n");
        if self.fail_extraction {
            script.push_str("echo 'squashfs: corrupt image' >&2\nexit 3\n");
            return script;
        }
        script.push_str("mkdir -p squashfs-root\n");
        if let Some(descriptor) = &self.descriptor {
            script.push_str("cat > squashfs-root/app.desktop <<'APPINSTALL_EOF'\n");
            script.push_str(descriptor);
            script.push_str("\nAPPINSTALL_EOF\n");
        }
        for (relative, content) in &self.files {
            script.push_str(&format!(
                "mkdir -p \"$(dirname 'squashfs-root/{relative}')\"\nprintf '%s' '{content}' > 'squashfs-root/{relative}'\n"
            ));
        }
        script.push_str("exit 0\n");
        script
    }
}
