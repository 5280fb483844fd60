//! Setup-time errors. Nothing in the per-frame path returns these.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map has no rows")]
    EmptyMap,

    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be below {limit}, got {value}")]
    TooLarge {
        field: &'static str,
        value: f32,
        limit: f32,
    },

    #[error("`{field}` must be greater than zero")]
    Zero { field: &'static str },

    #[error("start cell (col {col}, row {row}) is not an open cell")]
    BlockedStart { col: usize, row: usize },

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tuning file: {0}")]
    Toml(#[from] toml::de::Error),
}
