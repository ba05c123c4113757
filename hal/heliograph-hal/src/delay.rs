//! Blocking delay abstraction

/// Blocking millisecond delay
///
/// The contract is "at least this long"; implementations are free to
/// overshoot. `delay_ms(0)` still produces a minimum-width wait and is
/// used as the enable-pulse fence in the LCD driver.
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
