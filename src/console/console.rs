//! Console loop state machine.
//!
//! A single task loops forever: arm a receive, sleep on rx-done, echo the
//! byte, then either edit the input line or dispatch it to the command
//! interpreter and stream every output chunk back over the transport.
//! Interrupt handlers never touch these buffers; they only raise the
//! completion signals.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::console::error::ConsoleError;
use crate::console::line_buffer::LineBuffer;
use crate::interpreter::{CommandInterpreter, OutputBuffer};
use crate::signal::{CompletionSignal, WaitOutcome};
use crate::transport::{RxSlot, SerialTransport, TransportConfig};

/// Version string (set by build.rs, includes git hash).
pub const VERSION: &str = env!("VERSION_STRING");

/// Banner sent once at startup, ending in a prompt.
const WELCOME_MESSAGE: &str = concat!(
    "\r\n\r\n",
    env!("VERSION_STRING"),
    " command server.\r\nType 'help' to view a list of registered commands.\r\n\r\n>"
);

/// Footer sent after the last output chunk of a dispatch, ending in a
/// fresh prompt.
const END_OF_OUTPUT_MESSAGE: &str = "\r\n[Press ENTER to execute the previous command again]\r\n>";

/// Separator between echoed input and command output.
const NEW_LINE: &str = "\r\n";

/// End-of-line predicate: `\n` or `\r` alone each terminate a line.
pub fn is_end_of_line(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// The command console.
///
/// Owns the input line, the snapshot of the previous submission and the
/// interpreter's output buffer. One instance, one task, constructed once
/// at startup.
pub struct Console<T, I> {
    transport: T,
    interpreter: I,
    input: LineBuffer,
    last: LineBuffer,
    output: OutputBuffer,
    rx_slot: RxSlot,
    rx_done: Arc<CompletionSignal>,
    tx_done: Arc<CompletionSignal>,
    tx_wait: Duration,
    transport_config: TransportConfig,
}

impl<T, I> Console<T, I>
where
    T: SerialTransport,
    I: CommandInterpreter,
{
    pub fn new(transport: T, interpreter: I, config: ConsoleConfig) -> Self {
        Self {
            transport,
            interpreter,
            input: LineBuffer::new(),
            last: LineBuffer::new(),
            output: OutputBuffer::with_capacity(config.output_capacity),
            rx_slot: RxSlot::new(),
            rx_done: Arc::new(CompletionSignal::new()),
            tx_done: Arc::new(CompletionSignal::new()),
            tx_wait: Duration::from_millis(config.tx_wait_ms),
            transport_config: config.transport,
        }
    }

    /// Configure the transport, register the completion signals and send
    /// the welcome banner. The configuration failure here is the one
    /// condition permitted to halt startup.
    pub fn start(&mut self) -> Result<(), ConsoleError> {
        self.transport.configure(&self.transport_config)?;
        self.transport
            .register_completions(self.rx_done.clone(), self.tx_done.clone());

        log::info!(
            "console up: line capacity {} bytes, output capacity {} bytes",
            self.input.capacity(),
            self.output.capacity()
        );

        self.write(WELCOME_MESSAGE.as_bytes());
        Ok(())
    }

    /// Run the console for the lifetime of the device. Returns only if
    /// startup fails.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        self.start()?;
        loop {
            self.serve_byte();
        }
    }

    /// One full cycle: await a byte, echo it, then edit or dispatch.
    pub fn serve_byte(&mut self) {
        if let Err(err) = self.transport.begin_receive(&self.rx_slot) {
            log::warn!("failed to arm receive: {err}");
            return;
        }

        // Nothing else to do until a key arrives; sleep with no timeout.
        self.rx_done.wait(None);
        let byte = self.rx_slot.take();

        // Echo before interpreting, unconditionally.
        self.write(&[byte]);

        if is_end_of_line(byte) {
            self.dispatch();
        } else {
            self.input.feed(byte);
        }
    }

    /// Run one submitted line through the interpreter and stream all of
    /// its output chunks back.
    fn dispatch(&mut self) {
        // Space the output from the input.
        self.write(NEW_LINE.as_bytes());

        // An empty submission repeats the previous command.
        if self.input.is_empty() {
            self.input.copy_from(&self.last);
        }

        log::debug!("dispatching {:?}", self.input.as_str());

        // The interpreter may produce several chunks for one line; each
        // chunk is fully transmitted before the next call, so the output
        // buffer is never reused concurrently.
        loop {
            self.output.clear();
            let status = self.interpreter.process(self.input.as_bytes(), &mut self.output);
            Self::transmit(
                &mut self.transport,
                &self.tx_done,
                self.tx_wait,
                self.output.as_bytes(),
            );
            if status.is_done() {
                break;
            }
        }

        // Remember the line just processed in case it is to be repeated,
        // then clear the input ready for the next command.
        self.last.copy_from(&self.input);
        self.input.clear();

        self.write(END_OF_OUTPUT_MESSAGE.as_bytes());
    }

    /// Blocking write: arm a transmit and wait for its completion with a
    /// bounded timeout so an unresponsive transport cannot wedge the
    /// console. A timeout is not retried; the loop proceeds.
    fn write(&mut self, data: &[u8]) {
        Self::transmit(&mut self.transport, &self.tx_done, self.tx_wait, data);
    }

    fn transmit(transport: &mut T, tx_done: &CompletionSignal, tx_wait: Duration, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        if let Err(err) = transport.begin_transmit(data) {
            log::warn!("failed to arm transmit: {err}");
            return;
        }
        if tx_done.wait(Some(tx_wait)) == WaitOutcome::TimedOut {
            log::warn!("transmit completion not seen within {:?}", tx_wait);
        }
    }
}
