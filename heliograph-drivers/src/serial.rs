//! Serial link to the commander host
//!
//! Two halves with one owner each: [`SerialLink`] is the foreground
//! blocking transmitter (the echo path), [`RxHandler`] is the body of
//! the receive interrupt (byte in, packet out to the mailbox).

use heliograph_core::dispatch::PacketSink;
use heliograph_core::mailbox::Mailbox;
use heliograph_core::packet::CommandPacket;
use heliograph_core::poll::{PollBudget, PollExpired};
use heliograph_core::PacketAssembler;
use heliograph_hal::{SerialRx, SerialTx};

/// Errors from the transmit path
///
/// Only reachable with a bounded [`PollBudget`]; the hardware default
/// is to wait forever for transmit-ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The transmitter never reported ready within the poll budget
    TxStuck,
}

impl From<PollExpired> for LinkError {
    fn from(_: PollExpired) -> Self {
        LinkError::TxStuck
    }
}

/// Blocking transmitter over a [`SerialTx`]
///
/// Foreground context only. Each byte waits for the transmit buffer to
/// drain before being written.
pub struct SerialLink<T> {
    tx: T,
    budget: PollBudget,
}

impl<T: SerialTx> SerialLink<T> {
    /// Create a link with an unbounded transmit wait (hardware default)
    pub fn new(tx: T) -> Self {
        Self {
            tx,
            budget: PollBudget::Unbounded,
        }
    }

    /// Override the transmit-ready budget (tests, simulated peripherals)
    pub fn with_poll_budget(mut self, budget: PollBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Transmit bytes in order, blocking on transmit-ready per byte
    pub fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let budget = self.budget;
        for &byte in bytes {
            budget.wait_until(|| self.tx.tx_ready())?;
            self.tx.write_byte(byte);
        }
        Ok(())
    }
}

impl<T: SerialTx> PacketSink for SerialLink<T> {
    type Error = LinkError;

    fn send(&mut self, packet: &CommandPacket) -> Result<(), LinkError> {
        self.send_bytes(packet.as_bytes())
    }
}

/// Receive-interrupt handler over a [`SerialRx`]
///
/// `on_byte` is the entire interrupt body: read the byte (clearing the
/// receive-full condition), append it to the packet under assembly, and
/// publish to the mailbox when the packet completes. Bounded, short
/// work only; the next byte arrives one frame time later.
pub struct RxHandler<R> {
    rx: R,
    assembler: PacketAssembler,
}

impl<R: SerialRx> RxHandler<R> {
    /// Create a handler with an empty packet buffer
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            assembler: PacketAssembler::new(),
        }
    }

    /// Service one receive interrupt
    pub fn on_byte(&mut self, mailbox: &Mailbox) {
        let byte = self.rx.read_byte();
        if let Some(packet) = self.assembler.accept(byte) {
            mailbox.publish(packet);
        }
    }

    /// Write position within the packet under assembly
    pub fn cursor(&self) -> usize {
        self.assembler.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Transmitter that reports not-ready for a fixed number of polls
    /// before each byte
    struct MockTx {
        sent: Vec<u8, 16>,
        stall_polls: u32,
        remaining: core::cell::Cell<u32>,
    }

    impl MockTx {
        fn new(stall_polls: u32) -> Self {
            Self {
                sent: Vec::new(),
                stall_polls,
                remaining: core::cell::Cell::new(stall_polls),
            }
        }
    }

    impl SerialTx for &mut MockTx {
        fn tx_ready(&self) -> bool {
            let remaining = self.remaining.get();
            if remaining == 0 {
                true
            } else {
                self.remaining.set(remaining - 1);
                false
            }
        }

        fn write_byte(&mut self, byte: u8) {
            self.sent.push(byte).unwrap();
            self.remaining.set(self.stall_polls);
        }
    }

    struct ScriptRx {
        bytes: Vec<u8, 16>,
        next: usize,
    }

    impl ScriptRx {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: Vec::from_slice(bytes).unwrap(),
                next: 0,
            }
        }
    }

    impl SerialRx for ScriptRx {
        fn read_byte(&mut self) -> u8 {
            let byte = self.bytes[self.next];
            self.next += 1;
            byte
        }
    }

    #[test]
    fn test_send_in_order() {
        let mut tx = MockTx::new(0);
        let mut link = SerialLink::new(&mut tx);
        link.send_bytes(b"ABCD").unwrap();
        assert_eq!(&tx.sent[..], b"ABCD");
    }

    #[test]
    fn test_send_waits_for_tx_ready() {
        let mut tx = MockTx::new(3);
        let mut link = SerialLink::new(&mut tx).with_poll_budget(PollBudget::Attempts(16));
        link.send_bytes(b"AB").unwrap();
        assert_eq!(&tx.sent[..], b"AB");
    }

    #[test]
    fn test_stuck_transmitter_expires_bounded_budget() {
        let mut tx = MockTx::new(u32::MAX);
        let mut link = SerialLink::new(&mut tx).with_poll_budget(PollBudget::Attempts(8));
        assert_eq!(link.send_bytes(b"A"), Err(LinkError::TxStuck));
        assert!(tx.sent.is_empty());
    }

    #[test]
    fn test_rx_publishes_on_fourth_byte() {
        let mailbox = Mailbox::new();
        let mut handler = RxHandler::new(ScriptRx::new(b"ABCD"));

        for expected_cursor in [1, 2, 3] {
            handler.on_byte(&mailbox);
            assert_eq!(handler.cursor(), expected_cursor);
            assert!(!mailbox.is_ready());
        }

        handler.on_byte(&mailbox);
        assert_eq!(handler.cursor(), 0);
        assert_eq!(mailbox.peek().unwrap().as_bytes(), b"ABCD");
    }
}
