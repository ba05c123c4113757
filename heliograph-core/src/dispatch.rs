//! Foreground dispatch loop
//!
//! The loop that runs after board init with interrupts enabled: spin
//! on the mailbox, and for each pending packet render it, echo it back
//! to the commander, then clear the ready flag. A tight spin-poll is
//! deliberate; the target environment has no scheduler or event wait.

use core::convert::Infallible;

use crate::mailbox::Mailbox;
use crate::packet::CommandPacket;

/// Render seam: something that can display a command packet
pub trait PacketScreen {
    /// Error type for render operations
    type Error;

    /// Render the packet (clear screen, label, raw bytes)
    fn show(&mut self, packet: &CommandPacket) -> Result<(), Self::Error>;
}

/// Echo seam: something that can send a packet back to the commander
pub trait PacketSink {
    /// Error type for send operations
    type Error;

    /// Transmit all packet bytes, in order
    fn send(&mut self, packet: &CommandPacket) -> Result<(), Self::Error>;
}

/// Errors from a dispatch iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError<S, T> {
    /// Rendering to the display failed
    Screen(S),
    /// Echoing to the serial link failed
    Link(T),
}

/// The foreground command loop
///
/// Owns the render and echo ends; the mailbox is shared with the
/// receive interrupt.
pub struct Dispatcher<'a, S, T> {
    mailbox: &'a Mailbox,
    screen: S,
    link: T,
}

impl<'a, S, T> Dispatcher<'a, S, T>
where
    S: PacketScreen,
    T: PacketSink,
{
    /// Create a dispatcher over a shared mailbox
    pub fn new(mailbox: &'a Mailbox, screen: S, link: T) -> Self {
        Self {
            mailbox,
            screen,
            link,
        }
    }

    /// Run one loop iteration
    ///
    /// Returns `Ok(true)` if a packet was serviced. The ready flag is
    /// cleared only after both render and echo completed, so a packet
    /// is never half-serviced and never serviced twice.
    pub fn poll(&mut self) -> Result<bool, DispatchError<S::Error, T::Error>> {
        let packet = match self.mailbox.peek() {
            Some(packet) => packet,
            None => return Ok(false),
        };

        self.screen.show(&packet).map_err(DispatchError::Screen)?;
        self.link.send(&packet).map_err(DispatchError::Link)?;
        self.mailbox.clear();

        Ok(true)
    }

    /// Run the loop forever
    ///
    /// Only returns on a render or echo error, which with the default
    /// unbounded poll budgets cannot happen (those waits hang instead).
    pub fn run(&mut self) -> Result<Infallible, DispatchError<S::Error, T::Error>> {
        loop {
            self.poll()?;
        }
    }
}
