//! Bidirectional parallel data bus abstraction
//!
//! The HD44780 shares one 8-bit bus for writes (commands, characters)
//! and reads (the status register during busy polling), so the bus
//! direction has to be switchable at runtime. On the reference board
//! this maps to a whole GPIO port's direction register.

/// 8-bit bidirectional parallel bus
///
/// The bus starts in output mode after board init. Callers are
/// responsible for restoring output mode after a read phase; the LCD
/// driver's ready-wait does exactly that.
pub trait DataBus {
    /// Switch all eight lines to output (device drives the bus)
    fn set_output(&mut self);

    /// Switch all eight lines to input (peripheral drives the bus)
    fn set_input(&mut self);

    /// Drive a byte onto the bus
    ///
    /// Only meaningful in output mode.
    fn write(&mut self, byte: u8);

    /// Sample the byte currently on the bus
    ///
    /// Only meaningful in input mode.
    fn read(&mut self) -> u8;
}
