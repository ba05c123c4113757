//! Board-agnostic core logic for the Heliograph command display
//!
//! This crate contains everything that does not touch hardware:
//!
//! - The fixed-size command packet type
//! - The receive-side packet assembler (interrupt-context cursor logic)
//! - The single-slot mailbox handing packets from interrupt to foreground
//! - The busy-wait polling budget
//! - The foreground dispatch loop (render, echo, clear)

#![no_std]
#![deny(unsafe_code)]

pub mod assembler;
pub mod dispatch;
pub mod mailbox;
pub mod packet;
pub mod poll;

pub use assembler::PacketAssembler;
pub use dispatch::{DispatchError, Dispatcher, PacketScreen, PacketSink};
pub use mailbox::Mailbox;
pub use packet::{CommandPacket, PACKET_LEN};
pub use poll::{PollBudget, PollExpired};
