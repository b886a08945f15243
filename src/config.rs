use std::path;

use crate::error;

/// Groups data passed by the user in the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wether or not text between single backticks is wrapped in `<code>` tags.
    pub(crate) code_spans: bool,
    /// The element inserted between two lines of the same paragraph.
    pub(crate) soft_break: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code_spans: false,
            soft_break: String::from("<br/>"),
        }
    }
}

impl Config {
    /// Loads the config file, either from the given path or from the default location of the user's config directory.
    /// Never creates a file: a missing default file means defaults, a missing explicit file is an error.
    pub fn load(path: Option<&path::Path>) -> error::Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(error::ConvertError::ConfigMissing(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = confy::get_configuration_file_path("markdown2html", "config")?;
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };
        Ok(confy::load_path(path)?)
    }
}

/// Loads the config file and applies the overrides given on the command line.
/// A config file that cannot be loaded is reported and replaced by the defaults.
pub fn load_configuration(args: &crate::Arguments) -> Config {
    // === Step 1: Load config file ===
    let mut config = Config::load(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{e}");
        Config::default()
    });

    // === Step 2: Command line overrides ===
    config.code_spans |= args.code_spans;

    log::debug!("Using configuration {config:?}");

    config
}
