// src/opener.rs

use crate::error::Result;
use std::path::Path;

/// Shows a directory to the user.
pub trait DirectoryOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Hands the directory to the platform file browser.
///
/// The path travels as a single argument to the launcher; no shell is involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl DirectoryOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        // Whatever the browser does with a missing directory is its own business.
        open::that_detached(path)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    pub(crate) struct RecordingOpener {
        pub opened: RefCell<Vec<PathBuf>>,
    }

    impl DirectoryOpener for RecordingOpener {
        fn open(&self, path: &Path) -> Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn launchers_get_path_as_one_argument_without_a_shell() {
        let path = Path::new("/tmp/logs/A/US-(h1)-(2024-01-01)-(UTC) \"; rm -rf ~");
        let commands = open::commands(path);
        assert!(!commands.is_empty());
        for cmd in &commands {
            let program = Path::new(cmd.get_program())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            assert!(!["sh", "bash", "zsh", "cmd"].contains(&program.as_str()));
            // wslview gets the path translated to a Windows path.
            if program == "wslview" {
                continue;
            }
            let last = cmd.get_args().last().map(Path::new);
            assert_eq!(last, Some(path));
        }
    }
}
