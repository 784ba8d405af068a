use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the route network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Recoverable conditions on the mutation path (missing codes, duplicate
/// vertices) are reported as `false` by the store instead of surfacing here.
#[derive(Debug, Error)]
pub enum Error {
    /// Network file could not be located at the resolved path.
    #[error("network data not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// No platform data directory could be resolved for the default network.
    #[error("failed to resolve a data directory for the default network file")]
    DataDirUnavailable,

    /// Raised when a route record references a metro that was never declared.
    #[error("route references unknown metro code {code}")]
    UnknownPort { code: String },

    /// Raised when a route record carries a negative or non-finite distance.
    #[error("route {departure} -> {destination} has invalid distance {distance}")]
    InvalidDistance {
        departure: String,
        destination: String,
        distance: f64,
    },

    /// Raised when a metro's coordinates are not one latitude and one longitude.
    #[error("metro {code} has invalid coordinates: {message}")]
    InvalidCoordinates { code: String, message: String },

    /// Raised when a vertex code is absent from the network.
    #[error("unknown city code: {code}")]
    UnknownVertex { code: String },

    /// Raised when an itinerary contains a hop with no direct flight.
    #[error("no direct flight from {departure} to {destination}")]
    InvalidRoute {
        departure: String,
        destination: String,
    },

    /// Raised when an itinerary contains no city codes at all.
    #[error("itinerary is empty")]
    EmptyItinerary,

    /// Raised when an aggregate needs at least one element of `what`.
    #[error("cannot compute {what} over an empty network")]
    EmptyNetwork { what: &'static str },

    /// Wrapper for JSON parsing and rendering errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
