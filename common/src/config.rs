use std::path::PathBuf;

pub const DEFAULT_CF_BINARY: &str = "cf";

pub struct Config {
    /// Suppresses headers and the closing summary.
    ///
    /// Errors and warnings are still reported.
    pub quiet: u8,
    /// Raises the log level: 1 for debug, 2 or more for trace.
    pub verbose: u8,
    /// Path or name of the `cf` executable to drive.
    pub cf_binary: PathBuf,
    /// Directory holding `.cf/config.json`, mirroring `CF_HOME`.
    ///
    /// `None` falls back to the user's home directory.
    pub cf_home: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            verbose: 0,
            cf_binary: PathBuf::from(DEFAULT_CF_BINARY),
            cf_home: None,
        }
    }
}

impl Config {
    /// Location of the cf CLI configuration file.
    pub fn cf_config_path(&self) -> Option<PathBuf> {
        let home = self
            .cf_home
            .clone()
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))?;
        Some(home.join(".cf").join("config.json"))
    }
}
