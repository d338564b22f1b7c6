//! Errors raised while turning external input into a game.
//!
//! Rejected moves and purchases are not errors; the model reports those as `false`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("maze is empty")]
    Empty,

    #[error("invalid stats line {line:?}: expected `<strength> <moves>`")]
    InvalidStats { line: String },

    #[error("maze has no rows below the stats line")]
    NoRows,

    #[error("row {row} has width {found}, expected {expected}")]
    NonRectangular { row: usize, expected: usize, found: usize },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("maze has no player marker")]
    MissingPlayer,

    #[error("maze has more than one player marker (second at row {row}, column {col})")]
    MultiplePlayers { row: usize, col: usize },

    #[error("failed to read maze file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules config")]
    Parse(#[from] serde_json::Error),

    #[error("legend character {symbol:?} is a digit or is used for more than one symbol")]
    InvalidLegend { symbol: char },
}
