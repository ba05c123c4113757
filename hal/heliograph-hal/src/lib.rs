//! Heliograph Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware capability traits the rest of
//! the firmware is written against. Chip-specific code (pin muxing,
//! clock gates, baud divisors, interrupt registration) lives outside the
//! workspace and implements these traits; the core and drivers never
//! touch a register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  heliograph-core / heliograph-drivers   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  heliograph-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  board crate (KL25Z, mocks, ...)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Control lines (register-select, read/write, enable)
//! - [`bus::DataBus`] - 8-bit bidirectional parallel bus to the LCD
//! - [`serial::SerialTx`], [`serial::SerialRx`] - UART byte transfer
//! - [`delay::DelayMs`] - Blocking millisecond delay / timing fence

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod delay;
pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use bus::DataBus;
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use serial::{SerialConfig, SerialRx, SerialTx};
