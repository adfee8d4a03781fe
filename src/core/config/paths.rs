use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// `None` when there is no home directory and no `--config` was given.
    pub rc_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    /// The rc file was named on the command line, so it must exist.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new(custom_rc: Option<PathBuf>) -> Self {
        Self::resolve(dirs::home_dir(), custom_rc)
    }

    pub fn with_home(home_path: PathBuf, custom_rc: Option<PathBuf>) -> Self {
        Self::resolve(Some(home_path), custom_rc)
    }

    fn resolve(home_path: Option<PathBuf>, custom_rc: Option<PathBuf>) -> Self {
        let explicit = custom_rc.is_some();
        ConfigPaths {
            rc_path: custom_rc.or_else(|| home_path.as_ref().map(|home| home.join(".huskrc"))),
            history_path: home_path.map(|home| home.join(".husk_history")),
            explicit,
        }
    }
}
