//! uart-console - Demo entry point
//!
//! Runs the command console over stdin/stdout, with the built-in command
//! set as the interpreter. The stdio driver's reader and writer threads
//! stand in for the UART receive/transmit interrupts.

use uart_console::hal::StdioTransport;
use uart_console::{BuiltinInterpreter, Console, ConsoleConfig};

fn main() {
    env_logger::init();

    let transport = StdioTransport::new();
    let interpreter = BuiltinInterpreter::new();
    let mut console = Console::new(transport, interpreter, ConsoleConfig::default());

    if let Err(err) = console.run() {
        eprintln!("console failed to start: {err}");
        std::process::exit(1);
    }
}
