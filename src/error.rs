use std::path::PathBuf;

use thiserror::Error;

/// A panel layout or palette that cannot back a working control panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("element identity for {role} is empty")]
    EmptyIdentity { role: &'static str },
    #[error("element identity `{id}` is shared by {first} and {second}")]
    DuplicateIdentity {
        id: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("{role} color is empty")]
    EmptyColor { role: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
