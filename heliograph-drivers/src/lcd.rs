//! HD44780 character LCD driver (8-bit parallel mode)
//!
//! Drives the display over an 8-bit data bus plus three control lines
//! (register-select, read/write, enable). Every transaction except the
//! power-on sequence is gated on the busy-bit handshake: switch the bus
//! to input, address the status register, pulse enable and sample until
//! bit 7 clears, then switch back to output.
//!
//! Line sequencing and pulse fencing follow the HD44780 datasheet
//! exactly; reordering them hangs or corrupts the physical device.

use heliograph_core::dispatch::PacketScreen;
use heliograph_core::packet::CommandPacket;
use heliograph_core::poll::{PollBudget, PollExpired};
use heliograph_hal::{DataBus, DelayMs, OutputPin};

/// HD44780 command opcodes and status bits
pub mod opcode {
    /// 8-bit interface select, repeated during power-on while the
    /// controller cannot yet report status
    pub const FUNCTION_SET_8BIT: u8 = 0x30;
    /// 8-bit bus, 2 display lines, 5x7 font
    pub const FUNCTION_SET: u8 = 0x38;
    /// Auto-increment cursor after each write, no display shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    /// Clear display, home cursor
    pub const CLEAR: u8 = 0x01;
    /// Display on, cursor on, blink on
    pub const DISPLAY_ON_BLINK: u8 = 0x0F;
    /// Set DDRAM address to the start of line 2
    pub const SET_LINE2: u8 = 0xC0;
    /// Busy flag bit in the status byte
    pub const BUSY: u8 = 0x80;
}

/// Label shown above the raw command bytes
const COMMAND_LABEL: &[u8] = b"Command:";

/// Errors from LCD transactions
///
/// Only reachable with a bounded [`PollBudget`]; the hardware default
/// is to wait forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// The busy bit never cleared within the poll budget
    BusyStuck,
}

impl From<PollExpired> for LcdError {
    fn from(_: PollExpired) -> Self {
        LcdError::BusyStuck
    }
}

/// HD44780 driver over HAL pin/bus/delay capabilities
///
/// The board crate supplies the bus and control lines already
/// configured as outputs; the driver owns all direction switching from
/// then on.
pub struct Hd44780<B, RS, RW, EN, D> {
    bus: B,
    rs: RS,
    rw: RW,
    en: EN,
    delay: D,
    budget: PollBudget,
}

impl<B, RS, RW, EN, D> Hd44780<B, RS, RW, EN, D>
where
    B: DataBus,
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    D: DelayMs,
{
    /// Create a driver with an unbounded busy-wait (hardware default)
    pub fn new(bus: B, rs: RS, rw: RW, en: EN, delay: D) -> Self {
        Self {
            bus,
            rs,
            rw,
            en,
            delay,
            budget: PollBudget::Unbounded,
        }
    }

    /// Override the busy-wait budget (tests, simulated peripherals)
    pub fn with_poll_budget(mut self, budget: PollBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Assert-then-deassert the enable line, latching the bus contents
    ///
    /// The zero-length delay is the minimum pulse-width fence.
    fn pulse_enable(&mut self) {
        self.en.set_high();
        self.delay.delay_ms(0);
        self.en.set_low();
    }

    /// Drive one byte at the selected register and latch it
    ///
    /// `data_register` selects display data (true) or command (false).
    fn put(&mut self, data_register: bool, byte: u8) {
        self.rs.set_state(data_register);
        self.rw.set_low();
        self.bus.write(byte);
        self.pulse_enable();
    }

    /// Poll the busy bit until the controller is ready
    ///
    /// Bus direction and the read/write line are restored to write mode
    /// on both success and expiry.
    fn ready_wait(&mut self) -> Result<(), LcdError> {
        self.bus.set_input();
        self.rs.set_low();
        self.rw.set_high();

        let budget = self.budget;
        let result = budget.wait_until(|| {
            self.en.set_high();
            self.delay.delay_ms(0);
            let status = self.bus.read();
            self.en.set_low();
            self.delay.delay_ms(0);
            status & opcode::BUSY == 0
        });

        self.rw.set_low();
        self.bus.set_output();
        result?;
        Ok(())
    }

    /// Send a command byte, gated on the busy handshake
    pub fn command(&mut self, op: u8) -> Result<(), LcdError> {
        self.ready_wait()?;
        self.put(false, op);
        Ok(())
    }

    /// Send a command byte without the busy handshake
    ///
    /// Only valid during the power-on sequence, before the controller
    /// can report status.
    pub fn command_immediate(&mut self, op: u8) {
        self.put(false, op);
    }

    /// Send one display-data byte (a character at the cursor)
    pub fn data(&mut self, byte: u8) -> Result<(), LcdError> {
        self.ready_wait()?;
        self.put(true, byte);
        Ok(())
    }

    /// Run the fixed power-on sequence
    ///
    /// Order and delays are mandated by the HD44780 power-on timing:
    /// three unconditional function-set retries with fixed waits, then
    /// the busy-gated configuration commands.
    pub fn init(&mut self) -> Result<(), LcdError> {
        self.delay.delay_ms(20);
        self.command_immediate(opcode::FUNCTION_SET_8BIT);
        self.delay.delay_ms(5);
        self.command_immediate(opcode::FUNCTION_SET_8BIT);
        self.delay.delay_ms(1);
        self.command_immediate(opcode::FUNCTION_SET_8BIT);

        self.command(opcode::FUNCTION_SET)?;
        self.command(opcode::ENTRY_MODE_INCREMENT)?;
        self.command(opcode::CLEAR)?;
        self.command(opcode::DISPLAY_ON_BLINK)?;
        Ok(())
    }

    /// Write raw bytes as characters at the cursor, left to right
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), LcdError> {
        for &b in bytes {
            self.data(b)?;
        }
        Ok(())
    }

    /// Write a non-negative integer in decimal digits
    ///
    /// Digits come out least-significant first (the cursor
    /// auto-advances, so they read reversed on screen) and zero renders
    /// nothing at all. Kept bug-for-bug compatible with the commander
    /// host's expectations; see DESIGN.md before changing.
    pub fn write_uint(&mut self, mut n: u32) -> Result<(), LcdError> {
        while n > 0 {
            self.data(b'0' + (n % 10) as u8)?;
            n /= 10;
        }
        Ok(())
    }
}

impl<B, RS, RW, EN, D> PacketScreen for Hd44780<B, RS, RW, EN, D>
where
    B: DataBus,
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    D: DelayMs,
{
    type Error = LcdError;

    /// Render the command screen: clear, label, the four raw packet
    /// bytes, cursor parked at the start of line 2
    fn show(&mut self, packet: &CommandPacket) -> Result<(), LcdError> {
        self.command(opcode::CLEAR)?;
        self.write_bytes(COMMAND_LABEL)?;
        self.write_bytes(packet.as_bytes())?;
        self.command(opcode::SET_LINE2)?;
        Ok(())
    }
}
