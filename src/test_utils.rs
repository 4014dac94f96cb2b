#![allow(dead_code)]

use std::env;
use std::error::Error;
use std::fs::{self, create_dir_all, write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Command;
use clap_mangen::Man;

// man pages -------------------------------------------------------------------

pub fn generate_manpage(cmd: Command) {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("doc");
    m(&cmd, &dir).expect("failed to generate manpage");
}

fn m(cmd: &Command, dir: &Path) -> std::result::Result<(), Box<dyn Error>> {
    let man = Man::new(cmd.clone());
    let mut buf = Vec::new();
    man.render(&mut buf)?;

    let cmd_name = cmd.get_display_name().unwrap_or_else(|| cmd.get_name());
    create_dir_all(dir)?;
    write(dir.join(format!("{}.1", cmd_name)), buf)?;

    Ok(())
}

#[macro_export]
macro_rules! gen_manpage {
    ($cli:ident) => {
        #[test]
        fn generate_manpage() {
            use clap::CommandFactory;
            crate::test_utils::generate_manpage($cli::command());
        }
    };
}

// temporary directories -------------------------------------------------------

static UNIQUE_ID: AtomicUsize = AtomicUsize::new(0);

/// A uniquely named directory which is removed when dropped.
pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn new(name: impl AsRef<str>) -> TestDir {
        let path = env::temp_dir().join(format!(
            "tmpsnread-test-{}.{}.{}",
            name.as_ref(),
            process::id(),
            UNIQUE_ID.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&path).unwrap();

        TestDir { path }
    }

    /// Write a file relative to this directory, creating any parent directories.
    pub fn write(&self, name: impl AsRef<str>, contents: impl AsRef<str>) -> PathBuf {
        let path = self.path.join(name.as_ref());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents.as_ref()).unwrap();
        path
    }

    /// Add a fake hwmon chip at `entry` (e.g. `hwmon0`) with the given driver name and attributes.
    pub fn add_chip(&self, entry: &str, name: &str, attrs: &[(&str, &str)]) -> PathBuf {
        self.write(format!("{}/name", entry), format!("{}\n", name));
        for (attr, value) in attrs {
            self.write(format!("{}/{}", entry, attr), format!("{}\n", value));
        }

        self.path.join(entry)
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
