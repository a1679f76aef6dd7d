use thiserror::Error;

/// Errors raised while building, reducing or differencing octaves.
///
/// Shapes are reported as (rows, cols).
#[derive(Error, Debug)]
pub enum OctaveError {
    #[error("level dimensions disagree: expected {expected:?}, found {found:?}")]
    DimensionMismatch { expected: (usize,usize), found: (usize,usize) },
    #[error("octave has {levels} level(s) but at least 2 are needed to take a difference")]
    EmptyOctave { levels: usize },
    #[error("band {band} requested but the level only has {bands} band(s)")]
    BandIndexOutOfRange { band: usize, bands: usize },
    #[error("invalid runtime parameters: {0}")]
    InvalidParameters(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] serde_yaml::Error)
}
