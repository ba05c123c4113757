//! UART serial communication abstractions
//!
//! Byte-level traits for the half-duplex link to the commander host.
//! The receiver side is driven from interrupt context; the transmitter
//! is polled from the foreground.

/// UART transmitter
///
/// Split into a readiness poll and a register write so callers control
/// the busy-wait policy (see `PollBudget` in heliograph-core).
pub trait SerialTx {
    /// Check whether the transmit buffer can accept a byte
    fn tx_ready(&self) -> bool;

    /// Write one byte into the transmit buffer
    ///
    /// Must only be called after `tx_ready` returned true; writing to a
    /// full buffer is hardware-dependent behavior.
    fn write_byte(&mut self, byte: u8);
}

/// UART receiver
///
/// Called from the receive interrupt handler, where the hardware
/// guarantees a byte is pending. Must execute in bounded, short time.
pub trait SerialRx {
    /// Read the received byte, clearing the receive-full condition
    fn read_byte(&mut self) -> u8;
}

/// UART configuration
///
/// The board crate applies this when bringing up the peripheral. The
/// default matches the commander link: 115200 baud, 8N1, 16x
/// oversampling.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Receiver oversampling ratio
    pub oversampling: u8,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            oversampling: 16,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
