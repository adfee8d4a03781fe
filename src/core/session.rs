use std::env;
use std::path::{Path, PathBuf};

use crate::path::{normalize, PathExpander};

/// The interpreter's cursor: where relative names resolve, and whether the
/// read loop keeps going.
///
/// `current_dir` is always absolute and normalized. Only a successful `cd`
/// moves it and only `exit` clears `running`.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
    running: bool,
    path_expander: PathExpander,
}

impl Session {
    /// `dir` must be absolute; relative input is anchored at `/`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let current_dir = if dir.is_absolute() {
            normalize(dir)
        } else {
            normalize(&Path::new("/").join(dir))
        };

        Self {
            current_dir,
            running: true,
            path_expander: PathExpander::new(),
        }
    }

    pub fn from_env() -> Result<Self, std::io::Error> {
        Ok(Self::new(env::current_dir()?))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resolve a user-typed name against the current directory.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        let expanded = self
            .path_expander
            .expand(arg)
            .unwrap_or_else(|_| PathBuf::from(arg));

        if expanded.is_absolute() {
            normalize(&expanded)
        } else {
            normalize(&self.current_dir.join(expanded))
        }
    }

    pub(crate) fn change_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
    }
}
