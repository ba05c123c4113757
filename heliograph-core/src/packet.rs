//! The fixed-size command packet
//!
//! The commander link carries no framing beyond length: any four
//! consecutive received bytes form one packet. The sender is responsible
//! for alignment.

/// Number of bytes in a command packet
pub const PACKET_LEN: usize = 4;

/// One command packet, exactly [`PACKET_LEN`] raw bytes
///
/// The bytes are not interpreted anywhere in the firmware; they are
/// rendered to the display as-is and echoed back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandPacket([u8; PACKET_LEN]);

impl CommandPacket {
    /// Create an empty (all-zero) packet
    pub const fn new() -> Self {
        Self([0; PACKET_LEN])
    }

    /// Create a packet from raw bytes
    pub const fn from_bytes(bytes: [u8; PACKET_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw packet bytes
    pub fn as_bytes(&self) -> &[u8; PACKET_LEN] {
        &self.0
    }
}

impl Default for CommandPacket {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u8; PACKET_LEN]> for CommandPacket {
    fn from(bytes: [u8; PACKET_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for CommandPacket {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
