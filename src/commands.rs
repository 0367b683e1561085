//! Built-in demo command set.
//!
//! A small table-driven interpreter for the demo binary. `help` produces
//! one output chunk per registered command across successive `process`
//! calls, exercising the chunked-output contract.

use core::fmt::Write;
use std::time::Instant;

use crate::interpreter::{CommandInterpreter, OutputBuffer, ProcessStatus};

/// Command descriptor.
struct CommandDescriptor {
    name: &'static str,
    brief: &'static str,
}

/// All registered commands.
const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "help",
        brief: "List registered commands",
    },
    CommandDescriptor {
        name: "echo",
        brief: "Echo the arguments back",
    },
    CommandDescriptor {
        name: "uptime",
        brief: "Seconds since console start",
    },
];

/// Interpreter behind the demo binary.
pub struct BuiltinInterpreter {
    started: Instant,
    /// Next command to print for an in-progress `help` listing.
    help_cursor: usize,
}

impl BuiltinInterpreter {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            help_cursor: 0,
        }
    }
}

impl Default for BuiltinInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInterpreter for BuiltinInterpreter {
    fn process(&mut self, line: &[u8], out: &mut OutputBuffer) -> ProcessStatus {
        let line = core::str::from_utf8(line).unwrap_or("");
        let command = line.split_whitespace().next().unwrap_or("");

        match command {
            "help" => {
                // One command per chunk.
                if let Some(c) = COMMANDS.get(self.help_cursor) {
                    let _ = write!(out, "{:<8} {}\r\n", c.name, c.brief);
                }
                self.help_cursor += 1;
                if self.help_cursor < COMMANDS.len() {
                    ProcessStatus::MoreOutput
                } else {
                    self.help_cursor = 0;
                    ProcessStatus::Done
                }
            }
            "echo" => {
                let rest = line.strip_prefix("echo").unwrap_or("").trim_start();
                let _ = write!(out, "{}\r\n", rest);
                ProcessStatus::Done
            }
            "uptime" => {
                let _ = write!(out, "up {} s\r\n", self.started.elapsed().as_secs());
                ProcessStatus::Done
            }
            "" => ProcessStatus::Done,
            other => {
                let _ = write!(
                    out,
                    "Command not recognised: '{}'. Enter 'help' to view a list of available commands.\r\n",
                    other
                );
                ProcessStatus::Done
            }
        }
    }
}
