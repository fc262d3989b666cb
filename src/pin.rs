//! Pin and port addressing on the TCA95x5.
//!
//! The device has 16 I/O pins split into two 8-pin ports. Pin `n` lives on port `n / 8` at bit
//! `n % 8` of that port's registers. A [`Pin`] can only be constructed for indices `0..=15`, so
//! anything holding one can address a register bit without further checks.

use core::convert::TryFrom;
use core::fmt;

/// Number of I/O pins on the device.
pub const PIN_COUNT: u8 = 16;

/// Number of pins sharing one port register.
pub const PINS_PER_PORT: u8 = 8;

/// An out-of-range pin (or bit) index. Carries the rejected index as given by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPin(pub i32);

impl fmt::Display for InvalidPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TCA95x5 does not have pin {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPin {}

/// One of the two 8-pin ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Port {
    /// Pins 0 through 7.
    P0,
    /// Pins 8 through 15.
    P1,
}

impl Port {
    /// Both ports, in register order.
    pub const ALL: [Port; 2] = [Port::P0, Port::P1];

    /// Zero-based port number, which is also the register offset within a register pair.
    pub const fn index(self) -> u8 {
        match self {
            Port::P0 => 0,
            Port::P1 => 1,
        }
    }

    /// The pin at `bit` (`0..=7`) on this port.
    pub fn pin(self, bit: u8) -> Result<Pin, InvalidPin> {
        if bit < PINS_PER_PORT {
            Ok(Pin(self.index() * PINS_PER_PORT + bit))
        } else {
            Err(InvalidPin(i32::from(bit)))
        }
    }
}

/// A validated pin index in `0..=15`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin(u8);

impl Pin {
    /// Validate `index` as a pin number.
    pub fn new(index: u8) -> Result<Self, InvalidPin> {
        if index < PIN_COUNT {
            Ok(Pin(index))
        } else {
            Err(InvalidPin(i32::from(index)))
        }
    }

    /// Pin number in `0..=15`.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The port this pin belongs to.
    pub const fn port(self) -> Port {
        if self.0 < PINS_PER_PORT {
            Port::P0
        } else {
            Port::P1
        }
    }

    /// Bit position of this pin within its port register.
    pub const fn bit(self) -> u8 {
        self.0 % PINS_PER_PORT
    }

    /// Mask selecting this pin in the 16-bit view of a register pair.
    pub const fn mask(self) -> u16 {
        1 << self.0
    }

    /// Iterate over every pin in ascending order.
    pub fn all() -> impl Iterator<Item = Pin> {
        (0..PIN_COUNT).map(Pin)
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> u8 {
        pin.0
    }
}

impl TryFrom<u8> for Pin {
    type Error = InvalidPin;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Pin::new(index)
    }
}

impl TryFrom<i32> for Pin {
    type Error = InvalidPin;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match u8::try_from(index) {
            Ok(i) if i < PIN_COUNT => Ok(Pin(i)),
            _ => Err(InvalidPin(index)),
        }
    }
}

impl TryFrom<usize> for Pin {
    type Error = InvalidPin;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match u8::try_from(index) {
            Ok(i) => Pin::new(i),
            Err(_) => Err(InvalidPin(i32::try_from(index).unwrap_or(i32::MAX))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_port_and_bit() {
        let zero = Pin::new(0).unwrap();
        assert_eq!((zero.port(), zero.bit()), (Port::P0, 0));
        let seven = Pin::new(7).unwrap();
        assert_eq!((seven.port(), seven.bit()), (Port::P0, 7));
        let eight = Pin::new(8).unwrap();
        assert_eq!((eight.port(), eight.bit()), (Port::P1, 0));
        let fifteen = Pin::new(15).unwrap();
        assert_eq!((fifteen.port(), fifteen.bit()), (Port::P1, 7));
        assert_eq!(fifteen.mask(), 0x8000);
    }

    #[test]
    fn pin_out_of_range() {
        assert_eq!(Pin::new(16), Err(InvalidPin(16)));
        assert_eq!(Pin::new(255), Err(InvalidPin(255)));
    }

    #[test]
    fn pin_from_raw_int() {
        assert_eq!(Pin::try_from(-1i32), Err(InvalidPin(-1)));
        assert_eq!(Pin::try_from(16i32), Err(InvalidPin(16)));
        assert_eq!(Pin::try_from(1000i32), Err(InvalidPin(1000)));
        assert_eq!(Pin::try_from(3i32).map(u8::from), Ok(3));
        assert_eq!(Pin::try_from(usize::MAX), Err(InvalidPin(i32::MAX)));
    }

    #[test]
    fn port_pin() {
        assert_eq!(Port::P1.pin(2), Pin::new(10));
        assert_eq!(Port::P0.pin(8), Err(InvalidPin(8)));
    }

    #[test]
    fn all_pins() {
        let pins = Pin::all().map(u8::from).collect::<Vec<_>>();
        assert_eq!(pins, (0..16).collect::<Vec<_>>());
    }
}
