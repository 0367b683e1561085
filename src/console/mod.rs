//! Line-oriented command console over a serial transport.
//!
//! Single task, no polling: the loop sleeps on completion signals raised
//! from interrupt context.

pub mod console;
pub mod error;
pub mod line_buffer;

pub use console::{is_end_of_line, Console, VERSION};
pub use error::ConsoleError;
pub use line_buffer::{LineBuffer, INPUT_LINE_SIZE};
