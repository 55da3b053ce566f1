use crate::cli::Args;
use crate::error::{ClercError, Result};
use crate::trace;
use clerc_models::ConfigFile;
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8098";

const CONFIG_FILE_NAME: &str = ".clerc";

/// Effective settings for one invocation: built-in defaults, then
/// `~/.clerc`, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub server_url: String,
    pub verbose: bool,
    pub show_objects: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            verbose: false,
            show_objects: false,
        }
    }
}

impl Configuration {
    pub fn resolve(args: &Args) -> Result<Self> {
        let config = Self::default();
        trace::set_verbose(config.verbose);

        let config = match config_file_path() {
            Some(path) => config.load_file(&path)?,
            None => config,
        };

        Ok(config.with_overrides(args))
    }

    /// Missing or unreadable file keeps `self` as is. A file that exists but
    /// is not valid JSON is an error.
    pub fn load_file(self, path: &Path) -> Result<Self> {
        let contents = match std::fs::read(path) {
            Ok(contents) => contents,
            Err(_) => {
                log::debug!("unable to read file :(");
                return Ok(self);
            }
        };

        let file: ConfigFile =
            serde_json::from_slice(&contents).map_err(|source| ClercError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        let config = self.merge(file);
        trace::set_verbose(config.verbose);
        log::debug!("config: {}", String::from_utf8_lossy(&contents));

        Ok(config)
    }

    pub fn merge(self, file: ConfigFile) -> Self {
        Self {
            server_url: file.url.unwrap_or(self.server_url),
            verbose: file.verbose.unwrap_or(self.verbose),
            show_objects: file.show.unwrap_or(self.show_objects),
        }
    }

    pub fn with_overrides(mut self, args: &Args) -> Self {
        if args.verbose {
            self.verbose = true;
        }
        if args.show {
            self.show_objects = true;
        }
        if let Some(url) = &args.url {
            self.server_url = url.clone();
        }

        trace::set_verbose(self.verbose);
        self
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}
