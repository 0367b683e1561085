//! Host transport driver over stdin/stdout.
//!
//! The RX and TX completion interrupts of the hardware design are modeled
//! by two threads. Each services one armed operation at a time, deposits
//! or drains the bytes, raises the matching completion signal and goes
//! back to sleep. Neither touches the console's buffers.

use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use crate::signal::CompletionSignal;
use crate::transport::{RxSlot, SerialTransport, TransportConfig, TransportError};

/// Interrupt-style serial transport backed by stdin/stdout.
pub struct StdioTransport {
    rx_arm: Option<Sender<RxSlot>>,
    tx_data: Option<Sender<Vec<u8>>>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            rx_arm: None,
            tx_data: None,
        }
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialTransport for StdioTransport {
    fn configure(&mut self, config: &TransportConfig) -> Result<(), TransportError> {
        // Baud and framing have no meaning on a pipe.
        log::debug!(
            "stdio transport: ignoring {} baud / {} data bits",
            config.baud_rate,
            config.data_bits
        );
        Ok(())
    }

    fn register_completions(
        &mut self,
        rx_done: Arc<CompletionSignal>,
        tx_done: Arc<CompletionSignal>,
    ) {
        let (arm_tx, arm_rx) = mpsc::channel::<RxSlot>();
        thread::Builder::new()
            .name("uart-rx-isr".into())
            .spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut byte = [0u8; 1];
                for slot in arm_rx.iter() {
                    match stdin.read_exact(&mut byte) {
                        Ok(()) => {
                            slot.store(byte[0]);
                            rx_done.raise();
                        }
                        // EOF: no further completions will be reported.
                        Err(_) => break,
                    }
                }
            })
            .expect("failed to spawn rx thread");

        let (data_tx, data_rx) = mpsc::channel::<Vec<u8>>();
        thread::Builder::new()
            .name("uart-tx-isr".into())
            .spawn(move || {
                let mut stdout = io::stdout().lock();
                for buf in data_rx.iter() {
                    let _ = stdout.write_all(&buf);
                    let _ = stdout.flush();
                    tx_done.raise();
                }
            })
            .expect("failed to spawn tx thread");

        self.rx_arm = Some(arm_tx);
        self.tx_data = Some(data_tx);
    }

    fn begin_receive(&mut self, slot: &RxSlot) -> Result<(), TransportError> {
        let arm = self.rx_arm.as_ref().ok_or(TransportError::NotConfigured)?;
        arm.send(slot.clone()).map_err(|_| TransportError::Closed)
    }

    fn begin_transmit(&mut self, data: &[u8]) -> Result<(), TransportError> {
        if data.is_empty() {
            return Ok(());
        }
        let tx = self.tx_data.as_ref().ok_or(TransportError::NotConfigured)?;
        tx.send(data.to_vec()).map_err(|_| TransportError::Closed)
    }
}
