//! Errors of the command-line program.

use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors of the command-line program.
#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// {0}
    Clap(#[from] clap::Error),
    /// Unable to read {path:?}: {source}
    Read { path: PathBuf, source: io::Error },
    /// Unknown config format {0:?}. Use .json, .yaml, .yml or .toml.
    UnknownFormat(String),
    /// Invalid JSON config: {0}
    Json(#[from] serde_json::Error),
    /// Invalid YAML config: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Invalid TOML config: {0}
    Toml(#[from] toml::de::Error),
    /// {0}
    Lib(#[from] conlife_lib::Error),
    /// Unable to draw a frame: {0}
    Render(#[from] io::Error),
}
