//! The register addresses within the TCA95x5.

use crate::pin::Port;

/// A register address within the TCA95x5. These are created by conversion from `Register`. It is a
/// newtype around `u8` that prevents invalid addresses from being forged and passed to
/// `ExpanderInterface` methods.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RegisterAddress(pub(crate) u8);

impl From<RegisterAddress> for u8 {
    /// Convert a `RegisterAddress` into a `u8` corresponding to the hardware address.
    fn from(addr: RegisterAddress) -> u8 {
        addr.0
    }
}

/// One of the eight physical registers, each holding the bits for one port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Input port register. Reflects the logic level on each pin, after polarity inversion.
    /// Writes are ignored by the device.
    Input(Port),

    /// Output port register. Sets the level driven on pins configured as outputs. Reads return
    /// the register contents, not the pin level.
    Output(Port),

    /// Polarity inversion register. A set bit inverts the corresponding pin in the input
    /// register.
    PolarityInversion(Port),

    /// Configuration register. A set bit configures the pin as an input, a cleared bit as an
    /// output.
    Configuration(Port),
}

impl From<Register> for RegisterAddress {
    /// Convert a `Register` into a `RegisterAddress`.
    fn from(reg: Register) -> RegisterAddress {
        use self::Register::*;
        match reg {
            Input(port) => RegisterAddress(port.index()),
            Output(port) => RegisterAddress(0x02 + port.index()),
            PolarityInversion(port) => RegisterAddress(0x04 + port.index()),
            Configuration(port) => RegisterAddress(0x06 + port.index()),
        }
    }
}

/// A logical function of the device, backed by a pair of registers (port 0 then port 1) that is
/// read or written as one 16-bit value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterPair {
    /// Input port registers.
    Input,
    /// Output port registers.
    Output,
    /// Polarity inversion registers.
    Polarity,
    /// Configuration (pin direction) registers.
    Mode,
}

impl RegisterPair {
    /// Bytes transferred when accessing the pair in one burst.
    pub const WIDTH: usize = 2;

    /// The register for `port` within this pair.
    pub fn register(self, port: Port) -> Register {
        match self {
            RegisterPair::Input => Register::Input(port),
            RegisterPair::Output => Register::Output(port),
            RegisterPair::Polarity => Register::PolarityInversion(port),
            RegisterPair::Mode => Register::Configuration(port),
        }
    }

    /// The first register of the pair (port 0), which a burst access starts from.
    pub fn base(self) -> Register {
        self.register(Port::P0)
    }

    /// Whether the device accepts writes to this pair.
    pub fn is_writable(self) -> bool {
        self != RegisterPair::Input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(reg: Register) -> u8 {
        RegisterAddress::from(reg).into()
    }

    #[test]
    fn register_addresses() {
        assert_eq!(addr(Register::Input(Port::P0)), 0x00);
        assert_eq!(addr(Register::Input(Port::P1)), 0x01);
        assert_eq!(addr(Register::Output(Port::P0)), 0x02);
        assert_eq!(addr(Register::Output(Port::P1)), 0x03);
        assert_eq!(addr(Register::PolarityInversion(Port::P0)), 0x04);
        assert_eq!(addr(Register::PolarityInversion(Port::P1)), 0x05);
        assert_eq!(addr(Register::Configuration(Port::P0)), 0x06);
        assert_eq!(addr(Register::Configuration(Port::P1)), 0x07);
    }

    #[test]
    fn pair_base_registers() {
        assert_eq!(addr(RegisterPair::Input.base()), 0x00);
        assert_eq!(addr(RegisterPair::Output.base()), 0x02);
        assert_eq!(addr(RegisterPair::Polarity.base()), 0x04);
        assert_eq!(addr(RegisterPair::Mode.base()), 0x06);
        assert_eq!(addr(RegisterPair::Mode.register(Port::P1)), 0x07);
    }

    #[test]
    fn only_input_is_read_only() {
        assert!(!RegisterPair::Input.is_writable());
        assert!(RegisterPair::Output.is_writable());
        assert!(RegisterPair::Polarity.is_writable());
        assert!(RegisterPair::Mode.is_writable());
    }
}
