#![forbid(unsafe_code)]

//! Node-local measurement failures.

use thiserror::Error;

/// Why a single node could not be measured.
///
/// Always node-local: the snapshot builder drops the node and keeps the
/// batch going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// The platform did not answer within the configured bound.
    #[error("measurement timed out after {elapsed_ms} ms")]
    Timeout {
        /// How long the call was allowed to run.
        elapsed_ms: u64,
    },

    /// The node's backing view exposes no measurement channel.
    #[error("node's backing view does not support measurement")]
    Unsupported,

    /// The node disappeared between enumeration and measurement.
    #[error("node was unmounted before it could be measured")]
    Unmounted,

    /// The platform rejected the measurement call.
    #[error("platform rejected measurement: {0}")]
    Platform(String),
}
