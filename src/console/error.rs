//! Console error types.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can abort console startup.
///
/// Runtime timeouts are deliberately not represented here: an unconfirmed
/// transmit or a byte that never arrives is absorbed by the loop and
/// self-heals on the next keystroke.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
