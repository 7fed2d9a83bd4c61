#![forbid(unsafe_code)]

//! Inspector configuration.

use std::time::Duration;

/// Tunables for an inspection session.
///
/// These are the only recognized options; there is no CLI, persisted
/// state, or network configuration surface.
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// Upper bound on a single node's measurement round-trip. A node that
    /// does not answer in time is dropped from the snapshot.
    /// Default: 3000 ms.
    pub measure_timeout: Duration,

    /// Minimum quiet interval between eager snapshot rebuilds when layout
    /// invalidations arrive in bursts.
    /// Default: 300 ms.
    pub invalidate_debounce: Duration,

    /// How long the presentation layer should flash a highlight after
    /// selection. Carried as plain data; the core never animates.
    /// Default: 600 ms.
    pub highlight_flash: Duration,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            measure_timeout: Duration::from_millis(3000),
            invalidate_debounce: Duration::from_millis(300),
            highlight_flash: Duration::from_millis(600),
        }
    }
}
