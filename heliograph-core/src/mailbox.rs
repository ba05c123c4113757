//! Single-slot interrupt-to-foreground mailbox
//!
//! The sole cross-context hand-off in the firmware. The receive
//! interrupt publishes completed packets; the foreground dispatch loop
//! peeks, services, then clears. A new packet arriving before the
//! previous one was cleared overwrites the slot (single-slot,
//! overwrite-on-overrun), but the critical section guarantees the
//! foreground never reads a torn packet.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;

use crate::packet::CommandPacket;

/// Single-slot packet mailbox
///
/// Exactly one writer per resource per phase: interrupt context writes
/// the slot and sets the ready flag, foreground reads the slot and
/// clears the flag. The flag uses release/acquire ordering so the
/// packet bytes are visible to the foreground before the flag is.
pub struct Mailbox {
    slot: Mutex<RefCell<CommandPacket>>,
    ready: AtomicBool,
}

impl Mailbox {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(CommandPacket::new())),
            ready: AtomicBool::new(false),
        }
    }

    /// Publish a completed packet (interrupt context)
    ///
    /// Overwrites any unconsumed packet. The ready flag is set only
    /// after the slot write, with release ordering.
    pub fn publish(&self, packet: CommandPacket) {
        critical_section::with(|cs| {
            *self.slot.borrow(cs).borrow_mut() = packet;
        });
        self.ready.store(true, Ordering::Release);
    }

    /// Check whether an unserviced packet is pending (foreground)
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Copy out the pending packet without clearing the flag (foreground)
    ///
    /// Returns `None` when no packet is pending. The dispatch loop uses
    /// peek-then-clear so the flag drops only after render and echo
    /// have both completed.
    pub fn peek(&self) -> Option<CommandPacket> {
        if !self.is_ready() {
            return None;
        }
        Some(critical_section::with(|cs| *self.slot.borrow(cs).borrow()))
    }

    /// Mark the pending packet as consumed (foreground)
    pub fn clear(&self) {
        self.ready.store(false, Ordering::Release);
    }

    /// Copy out the pending packet and clear the flag in one step
    pub fn take(&self) -> Option<CommandPacket> {
        let packet = self.peek()?;
        self.clear();
        Some(packet)
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::CommandPacket;

    #[test]
    fn test_empty_mailbox() {
        let mailbox = Mailbox::new();
        assert!(!mailbox.is_ready());
        assert_eq!(mailbox.peek(), None);
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_publish_peek_clear() {
        let mailbox = Mailbox::new();
        mailbox.publish(CommandPacket::from_bytes(*b"ABCD"));

        assert!(mailbox.is_ready());
        // Peek does not consume
        assert_eq!(mailbox.peek().unwrap().as_bytes(), b"ABCD");
        assert!(mailbox.is_ready());

        mailbox.clear();
        assert!(!mailbox.is_ready());
        assert_eq!(mailbox.peek(), None);
    }

    #[test]
    fn test_overrun_overwrites() {
        let mailbox = Mailbox::new();
        mailbox.publish(CommandPacket::from_bytes(*b"OLD!"));
        mailbox.publish(CommandPacket::from_bytes(*b"NEW!"));

        assert_eq!(mailbox.take().unwrap().as_bytes(), b"NEW!");
        assert!(!mailbox.is_ready());
    }
}
