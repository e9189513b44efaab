//! Application state for the HTTP server.

use crate::ephemeris::EphemerisModel;

/// Shared application state passed to all handlers.
///
/// Read-only after startup; every request computes from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    /// Ephemeris model used for every computation
    pub ephemeris: EphemerisModel,
}

impl AppState {
    /// Create a new application state with the given ephemeris model.
    pub fn new(ephemeris: EphemerisModel) -> Self {
        Self { ephemeris }
    }
}
