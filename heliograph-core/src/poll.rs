//! Busy-wait polling budget
//!
//! Every blocking wait in the firmware (LCD busy bit, UART transmit
//! ready) is a busy-poll; the target has no scheduler to yield to. On
//! real hardware those waits are unbounded: a peripheral that never
//! becomes ready hangs the device, and that is the accepted failure
//! mode. Tests inject a bounded budget instead so a simulated stuck
//! peripheral fails the wait rather than the test run.

/// How long a busy-poll is allowed to spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollBudget {
    /// Spin until the condition holds, however long that takes
    #[default]
    Unbounded,
    /// Give up after this many condition samples
    Attempts(u32),
}

/// A bounded poll ran out of attempts before the condition held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollExpired;

impl PollBudget {
    /// Spin until `condition` returns true
    ///
    /// The closure is invoked once per attempt and may perform the
    /// sampling side effects itself (e.g. pulsing the LCD enable line
    /// and reading the status byte).
    pub fn wait_until(self, mut condition: impl FnMut() -> bool) -> Result<(), PollExpired> {
        match self {
            PollBudget::Unbounded => {
                while !condition() {}
                Ok(())
            }
            PollBudget::Attempts(max) => {
                for _ in 0..max {
                    if condition() {
                        return Ok(());
                    }
                }
                Err(PollExpired)
            }
        }
    }
}
