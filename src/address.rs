//! I2C slave address selection.

use core::fmt;

/// Base address of the TCA9535/TCA9555 with all address-select pins tied low.
pub const BASE_ADDRESS: u8 = 0x20;

/// A 7-bit I2C slave address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlaveAddress(u8);

impl SlaveAddress {
    /// Validate a raw 7-bit address. Returns `None` if the eighth bit is set.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw <= 0x7F {
            Some(SlaveAddress(raw))
        } else {
            None
        }
    }

    /// The address selected by the states of the A0, A1 and A2 pins, relative to
    /// [`BASE_ADDRESS`].
    pub const fn from_pins(a0: bool, a1: bool, a2: bool) -> Self {
        Self::with_base(BASE_ADDRESS, a0, a1, a2)
    }

    /// Like [`from_pins`](Self::from_pins), for chip variants with a different base address. The
    /// pin states are OR'd onto the low three bits of `base`; only the low 7 bits of `base` are
    /// used.
    pub const fn with_base(base: u8, a0: bool, a1: bool, a2: bool) -> Self {
        SlaveAddress((base & 0x7F) | (a0 as u8) | (a1 as u8) << 1 | (a2 as u8) << 2)
    }

    /// The raw 7-bit address.
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl Default for SlaveAddress {
    fn default() -> Self {
        SlaveAddress(BASE_ADDRESS)
    }
}

impl From<SlaveAddress> for u8 {
    fn from(addr: SlaveAddress) -> u8 {
        addr.0
    }
}

impl fmt::Display for SlaveAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
