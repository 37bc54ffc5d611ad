//! Reading the configuration from a file.
//!
//! The format is chosen by the extension: JSON, YAML or TOML.
//! Missing fields take their default values.

use crate::error::Error;
use conlife_lib::Config;
use std::{fs, path::Path};

/// Formats of config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guesses the format from the extension of the file.
    pub(crate) fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(Error::UnknownFormat(ext)),
        }
    }
}

/// Parses a config.
pub(crate) fn parse(text: &str, format: Format) -> Result<Config, Error> {
    let config = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    Ok(config)
}

/// Reads a config file.
pub(crate) fn load(path: &Path) -> Result<Config, Error> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    log::info!("loading {:?} config from {:?}", format, path);
    parse(&text, format)
}
