//! Single-pin helpers addressed by raw integer pin numbers.
//!
//! These go straight to the device and bypass the locally held configuration: `digital_write`
//! and `pin_mode` read the current register pair, change one bit and write the pair back. They
//! are not atomic. Two callers changing different pins of the same pair can lose one of the
//! updates, and a later [`Expander::apply_config`] overwrites whatever they did with the local
//! configuration.
//!
//! `Expander::pin_mode` here is a setter that writes to the device. The getter of the same name,
//! [`Config::pin_mode`](crate::Config::pin_mode), only reports the locally held direction.

use core::convert::TryFrom;

use crate::config::{Level, PinMode};
use crate::error::Error;
use crate::expander::Expander;
use crate::interface::ExpanderInterface;
use crate::pin::Pin;
use crate::registers::RegisterPair;

impl<EI: ExpanderInterface> Expander<EI> {
    /// Read the level of `pin` from the input registers (after polarity inversion).
    pub fn digital_read(&mut self, pin: i32) -> Result<Level, Error<EI::Error>> {
        let pin = Pin::try_from(pin)?;
        Ok(self.read_input_status()?.pin(pin).into())
    }

    /// Set the output level of `pin` on the device with a read-modify-write of the output
    /// registers.
    pub fn digital_write(&mut self, pin: i32, level: Level) -> Result<(), Error<EI::Error>> {
        let pin = Pin::try_from(pin)?;
        let current = self.read_output_config()?;
        self.write_pair(RegisterPair::Output, current.with_pin(pin, level.into()))
    }

    /// Set the direction of `pin` on the device with a read-modify-write of the configuration
    /// registers. The local configuration, and so [`Config::pin_mode`](crate::Config::pin_mode),
    /// is left unchanged.
    pub fn pin_mode(&mut self, pin: i32, mode: PinMode) -> Result<(), Error<EI::Error>> {
        let pin = Pin::try_from(pin)?;
        let current = self.read_mode_config()?;
        self.write_pair(RegisterPair::Mode, current.with_pin(pin, mode.into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::address::SlaveAddress;
    use crate::config::{Config, Level, PinMode};
    use crate::error::Error;
    use crate::expander::Expander;
    use crate::interface::test_spy::{SimulatedDevice, Txn};
    use crate::pin::InvalidPin;

    #[test]
    fn digital_write_touches_one_bit() {
        let dev = SimulatedDevice::new();
        dev.set_pair(0x02, 0x00FF);
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex.digital_write(8, Level::High).is_ok());
        assert_eq!(ex.active_config().map(|c| c.output.to_int()), Ok(0x01FF));
    }

    #[test]
    fn digital_write_is_read_modify_write() {
        let dev = SimulatedDevice::new();
        dev.set_pair(0x02, 0xF0F0);
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex.digital_write(4, Level::Low).is_ok());
        assert_eq!(
            dev.log(),
            vec![
                Txn::Write(0x20, vec![0x02]),
                Txn::Read(0x20, 2),
                Txn::Write(0x20, vec![0x02, 0xE0, 0xF0]),
            ]
        );
        assert_eq!(*ex.config(), Config::default());
    }

    #[test]
    fn pin_mode_touches_one_bit() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex.pin_mode(3, PinMode::Output).is_ok());
        assert_eq!(dev.pair(0x06), 0xFFF7);
        assert!(ex.pin_mode(3, PinMode::Input).is_ok());
        assert_eq!(dev.pair(0x06), 0xFFFF);
        assert!(ex.pin_mode(5, PinMode::Output).is_ok());
        assert_eq!(ex.config().pin_mode(5), Ok(PinMode::Input));
    }

    #[test]
    fn digital_read_output_pin() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex.pin_mode(10, PinMode::Output).is_ok());
        assert!(ex.digital_write(10, Level::Low).is_ok());
        assert_eq!(ex.digital_read(10), Ok(Level::Low));
        assert!(ex.digital_write(10, Level::High).is_ok());
        assert_eq!(ex.digital_read(10), Ok(Level::High));
    }

    #[test]
    fn digital_read_input_pin() {
        let dev = SimulatedDevice::new();
        dev.set_pin_levels(0x0004);
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert_eq!(ex.digital_read(2), Ok(Level::High));
        assert_eq!(ex.digital_read(3), Ok(Level::Low));
    }

    #[test]
    fn out_of_range_pins_do_no_io() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert_eq!(ex.digital_read(-1), Err(Error::InvalidPin(InvalidPin(-1))));
        assert_eq!(
            ex.digital_write(16, Level::High),
            Err(Error::InvalidPin(InvalidPin(16)))
        );
        assert_eq!(
            ex.pin_mode(99, PinMode::Output),
            Err(Error::InvalidPin(InvalidPin(99)))
        );
        assert!(dev.log().is_empty());
    }
}
