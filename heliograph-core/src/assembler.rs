//! Receive-side packet assembly
//!
//! Accumulates bytes from the serial receive interrupt into a packet.
//! This is pure cursor logic so it can be tested on the host; the
//! interrupt glue lives in heliograph-drivers.

use crate::packet::{CommandPacket, PACKET_LEN};

/// Accumulates received bytes into [`CommandPacket`]s
///
/// The cursor is owned by interrupt context and always stays in
/// `[0, PACKET_LEN)`: it wraps to 0 in the same call that completes a
/// packet.
#[derive(Debug, Clone)]
pub struct PacketAssembler {
    buf: [u8; PACKET_LEN],
    cursor: usize,
}

impl PacketAssembler {
    /// Create an assembler with an empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0; PACKET_LEN],
            cursor: 0,
        }
    }

    /// Append one received byte
    ///
    /// Returns the completed packet when this byte was the last of a
    /// packet; the cursor has wrapped back to 0 by the time this
    /// returns.
    pub fn accept(&mut self, byte: u8) -> Option<CommandPacket> {
        self.buf[self.cursor] = byte;
        self.cursor += 1;
        if self.cursor == PACKET_LEN {
            self.cursor = 0;
            Some(CommandPacket::from_bytes(self.buf))
        } else {
            None
        }
    }

    /// Current write position within the packet under assembly
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for PacketAssembler {
    fn default() -> Self {
        Self::new()
    }
}
