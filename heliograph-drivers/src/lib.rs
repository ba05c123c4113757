//! Hardware driver implementations
//!
//! Concrete drivers over the heliograph-hal traits:
//!
//! - HD44780 character LCD in 8-bit parallel mode (busy-poll handshake)
//! - Serial link to the commander host (blocking echo transmit,
//!   interrupt-context receive glue)

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod serial;

pub use lcd::{Hd44780, LcdError};
pub use serial::{LinkError, RxHandler, SerialLink};
