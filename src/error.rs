use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A named balloon specification does not exist.
    NotFound,
    /// A value is outside its physically meaningful domain.
    InvalidValue,
    /// Reading or writing an external file failed.
    Io,
}

/// Errors raised while building or running a simulation.
///
/// Everything except [`ErrorKind::Io`] is a configuration error: it is raised
/// before the first integration step and no partial output is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no balloon specification named \"{0}\"")]
    UnknownBalloon(String),

    #[error("\"{name}\" is not a known gas species (known: {known})")]
    UnknownGas { name: String, known: String },

    #[error("cannot compute radius from negative volume ({0} m^3)")]
    NegativeVolume(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed balloon specification \"{part_number}\": {source}")]
    MalformedLibrary {
        part_number: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed configuration: {source}")]
    MalformedConfig {
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownBalloon(_) => ErrorKind::NotFound,
            Error::UnknownGas { .. }
            | Error::NegativeVolume(_)
            | Error::InvalidConfig(_)
            | Error::MalformedLibrary { .. }
            | Error::MalformedConfig { .. } => ErrorKind::InvalidValue,
            Error::Io(_) | Error::Json(_) | Error::Csv(_) => ErrorKind::Io,
        }
    }

    /// True for errors caused by the simulation inputs rather than the outer
    /// file surface.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound | ErrorKind::InvalidValue)
    }
}
