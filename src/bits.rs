//! Conversion between raw register contents and per-pin flags.
//!
//! Every register pair on the TCA95x5 holds one bit per pin. [`RegisterValue`] is the 16-bit view
//! of such a pair, built from two [`PortBits`] (port 0 in the low byte, port 1 in the high byte).
//! Both views are the same data, so there is nothing to keep in sync.

use core::fmt;

use crate::pin::{InvalidPin, Pin, Port, PINS_PER_PORT};

/// Return `value` with the bit for `pin` forced to `flag`. All other bits are unchanged.
pub const fn set_bit(value: u16, pin: Pin, flag: bool) -> u16 {
    if flag {
        value | pin.mask()
    } else {
        value & !pin.mask()
    }
}

/// Extract the bit for `pin` from `value`.
pub const fn get_bit(value: u16, pin: Pin) -> bool {
    value & pin.mask() != 0
}

/// The eight pin flags of a single port. Bit `k` belongs to pin `k` of the port.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct PortBits(u8);

impl PortBits {
    /// All flags cleared.
    pub const CLEAR: PortBits = PortBits(0x00);
    /// All flags set.
    pub const SET: PortBits = PortBits(0xFF);

    /// Wrap a raw register byte.
    pub const fn from_raw(raw: u8) -> Self {
        PortBits(raw)
    }

    /// The raw register byte.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Read the flag at `bit` (`0..=7`).
    pub fn bit(self, bit: u8) -> Result<bool, InvalidPin> {
        if bit < PINS_PER_PORT {
            Ok(self.0 & (1 << bit) != 0)
        } else {
            Err(InvalidPin(i32::from(bit)))
        }
    }

    /// Force the flag at `bit` (`0..=7`) to `flag`.
    pub fn set_bit(&mut self, bit: u8, flag: bool) -> Result<(), InvalidPin> {
        if bit >= PINS_PER_PORT {
            return Err(InvalidPin(i32::from(bit)));
        }
        if flag {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
        Ok(())
    }
}

impl From<u8> for PortBits {
    fn from(raw: u8) -> Self {
        PortBits(raw)
    }
}

impl From<PortBits> for u8 {
    fn from(bits: PortBits) -> u8 {
        bits.0
    }
}

impl fmt::Debug for PortBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortBits({:#010b})", self.0)
    }
}

/// The contents of a register pair: one flag per pin across both ports.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterValue(u16);

impl RegisterValue {
    /// All 16 flags cleared.
    pub const CLEAR: RegisterValue = RegisterValue(0x0000);
    /// All 16 flags set.
    pub const SET: RegisterValue = RegisterValue(0xFFFF);

    /// Build a value from its 16-bit integer view.
    pub const fn from_int(raw: u16) -> Self {
        RegisterValue(raw)
    }

    /// The 16-bit integer view. Pin `n` is bit `n`.
    pub const fn to_int(self) -> u16 {
        self.0
    }

    /// Build a value from the two port registers.
    pub fn from_ports(port0: PortBits, port1: PortBits) -> Self {
        RegisterValue(u16::from_le_bytes([port0.raw(), port1.raw()]))
    }

    /// The flags of one port.
    pub fn port(self, port: Port) -> PortBits {
        PortBits(self.0.to_le_bytes()[port.index() as usize])
    }

    /// Replace the flags of one port, leaving the other untouched.
    pub fn set_port(&mut self, port: Port, bits: PortBits) {
        let mut bytes = self.0.to_le_bytes();
        bytes[port.index() as usize] = bits.raw();
        self.0 = u16::from_le_bytes(bytes);
    }

    /// The flag for `pin`.
    pub fn pin(self, pin: Pin) -> bool {
        get_bit(self.0, pin)
    }

    /// Force the flag for `pin` to `flag`.
    pub fn set_pin(&mut self, pin: Pin, flag: bool) {
        self.0 = set_bit(self.0, pin, flag);
    }

    /// Builder-style variant of [`set_pin`](Self::set_pin).
    pub fn with_pin(mut self, pin: Pin, flag: bool) -> Self {
        self.set_pin(pin, flag);
        self
    }

    /// Wire encoding of the pair: port 0 first, then port 1.
    pub fn to_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Decode the wire encoding produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        RegisterValue(u16::from_le_bytes(bytes))
    }
}

impl From<u16> for RegisterValue {
    fn from(raw: u16) -> Self {
        RegisterValue(raw)
    }
}

impl From<RegisterValue> for u16 {
    fn from(value: RegisterValue) -> u16 {
        value.0
    }
}

impl fmt::Debug for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegisterValue({:#06X})", self.0)
    }
}
