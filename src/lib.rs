//! # uart-console
//!
//! Interrupt-driven, line-oriented command console over a single serial
//! transport.
//!
//! ## Architecture
//!
//! ```text
//! RX interrupt ──raise──▶ rx-done ──wake──▶ Console task ──▶ LineBuffer
//!                                              │
//!                                     echo / dispatch / output
//!                                              ▼
//! TX interrupt ──raise──▶ tx-done ◀──wait── Transport
//! ```
//!
//! One character is in flight per direction at a time. Interrupt handlers
//! only ever raise a [`CompletionSignal`]; every buffer is owned by the
//! single console task, so no locks guard the line or output buffers.

pub mod commands;
pub mod config;
pub mod console;
pub mod hal;
pub mod interpreter;
pub mod signal;
pub mod transport;

pub use commands::BuiltinInterpreter;
pub use config::ConsoleConfig;
pub use console::{is_end_of_line, Console, ConsoleError, LineBuffer, INPUT_LINE_SIZE};
pub use interpreter::{CommandInterpreter, OutputBuffer, ProcessStatus};
pub use signal::{CompletionSignal, WaitOutcome};
pub use transport::{RxSlot, SerialTransport, TransportConfig, TransportError};
