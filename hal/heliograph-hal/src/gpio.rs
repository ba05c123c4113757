//! GPIO pin abstractions
//!
//! Provides the digital output trait used for the LCD control lines.
//! Implementations handle the actual hardware register manipulation for
//! the specific chip.

/// Digital output pin
///
/// Used for the LCD register-select, read/write and enable lines.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
