//! Abstractions used to configure the TCA95x5 hardware.

use crate::bits::RegisterValue;
use crate::error::Error;
use crate::expander::Expander;
use crate::interface::ExpanderInterface;
use crate::pin::{InvalidPin, Pin};
use crate::registers::RegisterPair;

/// Direction of an I/O pin. Every pin is an input after power-on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
    /// Push-pull logic output.
    Output,
    /// High-impedance logic input.
    Input,
}

impl From<PinMode> for bool {
    fn from(mode: PinMode) -> bool {
        mode == PinMode::Input
    }
}

impl From<bool> for PinMode {
    fn from(bit: bool) -> PinMode {
        if bit {
            PinMode::Input
        } else {
            PinMode::Output
        }
    }
}

/// Logic level of a pin. As an output state it only has an effect on pins configured as
/// outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Logic low.
    Low,
    /// Logic high.
    High,
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        level == Level::High
    }
}

impl From<bool> for Level {
    fn from(bit: bool) -> Level {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Input polarity of a pin. Inverted pins report the opposite of their logic level in the input
/// register. Has no effect on pins configured as outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Input register reflects the pin level.
    Normal,
    /// Input register reflects the inverse of the pin level.
    Inverted,
}

impl From<Polarity> for bool {
    fn from(polarity: Polarity) -> bool {
        polarity == Polarity::Inverted
    }
}

impl From<bool> for Polarity {
    fn from(bit: bool) -> Polarity {
        if bit {
            Polarity::Inverted
        } else {
            Polarity::Normal
        }
    }
}

/// The three writable register pairs of the device.
///
/// An `Expander` keeps one of these as the desired configuration, which is only sent to the device
/// by an explicit apply. Reading the configuration back from the device produces another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Pin directions; a set bit is an input.
    pub mode: RegisterValue,
    /// Output levels; a set bit drives high.
    pub output: RegisterValue,
    /// Input polarity; a set bit inverts.
    pub polarity: RegisterValue,
}

impl Default for Config {
    /// The power-on state of the device: all pins inputs, output latches high, no inversion.
    fn default() -> Self {
        Self {
            mode: RegisterValue::SET,
            output: RegisterValue::SET,
            polarity: RegisterValue::CLEAR,
        }
    }
}

impl Config {
    /// Restore the power-on state. See [`Config::default`].
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    /// The register pair value this config holds for `pair`, or `None` for the read-only input
    /// pair.
    pub fn value(&self, pair: RegisterPair) -> Option<RegisterValue> {
        match pair {
            RegisterPair::Mode => Some(self.mode),
            RegisterPair::Output => Some(self.output),
            RegisterPair::Polarity => Some(self.polarity),
            RegisterPair::Input => None,
        }
    }

    /// Set the direction of `pin` (`0..=15`).
    pub fn set_pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), InvalidPin> {
        self.mode.set_pin(Pin::new(pin)?, mode.into());
        Ok(())
    }

    /// Set the output level of `pin` (`0..=15`).
    pub fn set_pin_output_state(&mut self, pin: u8, level: Level) -> Result<(), InvalidPin> {
        self.output.set_pin(Pin::new(pin)?, level.into());
        Ok(())
    }

    /// Set the input polarity of `pin` (`0..=15`).
    pub fn set_pin_polarity(&mut self, pin: u8, polarity: Polarity) -> Result<(), InvalidPin> {
        self.polarity.set_pin(Pin::new(pin)?, polarity.into());
        Ok(())
    }

    /// Direction of `pin` (`0..=15`) in this configuration.
    ///
    /// Not to be confused with [`Expander::pin_mode`], which sets a pin's direction directly on the
    /// device.
    pub fn pin_mode(&self, pin: u8) -> Result<PinMode, InvalidPin> {
        Ok(self.mode.pin(Pin::new(pin)?).into())
    }

    /// Output level of `pin` (`0..=15`).
    pub fn pin_output_state(&self, pin: u8) -> Result<Level, InvalidPin> {
        Ok(self.output.pin(Pin::new(pin)?).into())
    }

    /// Input polarity of `pin` (`0..=15`).
    pub fn pin_polarity(&self, pin: u8) -> Result<Polarity, InvalidPin> {
        Ok(self.polarity.pin(Pin::new(pin)?).into())
    }
}

/// A `Configurator` provides methods to build a list of pin configuration changes and commit them
/// to the device. You obtain one from `Expander::configure()`, chain method calls on it to make
/// configuration changes, and then end the chain with `commit()` to transmit them to the TCA95x5.
///
/// Pin indices are validated at `commit()`: if any of them was out of range, nothing is changed
/// and no bus traffic occurs.
///
/// ```
/// # use tca95x5::interface::noop::NoopInterface;
/// # use tca95x5::{Expander, Level, PinMode, SlaveAddress};
/// # let ei = NoopInterface;
/// let mut expander = Expander::with_address(ei, SlaveAddress::from_pins(false, false, false));
/// expander
///     .configure()
///     .pins(0..=7, PinMode::Output)
///     .output(3, Level::Low)
///     .commit()
///     .unwrap();
/// ```
#[must_use = "Configuration changes are not applied unless committed"]
pub struct Configurator<'e, EI: ExpanderInterface> {
    expander: &'e mut Expander<EI>,
    staged: Config,
    touched: [bool; 3],
    error: Option<InvalidPin>,
}

// Index into `touched`, which is also the order registers are written in.
const OUTPUT: usize = 0;
const MODE: usize = 1;
const POLARITY: usize = 2;
const WRITE_ORDER: [RegisterPair; 3] = [
    RegisterPair::Output,
    RegisterPair::Mode,
    RegisterPair::Polarity,
];

impl<'e, EI: ExpanderInterface> Configurator<'e, EI> {
    pub(crate) fn new(expander: &'e mut Expander<EI>) -> Self {
        let staged = *expander.config();
        Self {
            expander,
            staged,
            touched: [false; 3],
            error: None,
        }
    }

    fn stage(&mut self, which: usize, result: Result<(), InvalidPin>) {
        match result {
            Ok(()) => self.touched[which] = true,
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
    }

    /// Set the direction of a single pin.
    pub fn pin(mut self, pin: u8, mode: PinMode) -> Self {
        let result = self.staged.set_pin_mode(pin, mode);
        self.stage(MODE, result);
        self
    }

    /// Set the direction of a sequence of pins. All of the pins will be set to `mode`.
    pub fn pins<I>(mut self, pins: I, mode: PinMode) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        for pin in pins {
            let result = self.staged.set_pin_mode(pin, mode);
            self.stage(MODE, result);
        }
        self
    }

    /// Set the output level of a single pin.
    pub fn output(mut self, pin: u8, level: Level) -> Self {
        let result = self.staged.set_pin_output_state(pin, level);
        self.stage(OUTPUT, result);
        self
    }

    /// Set the input polarity of a single pin.
    pub fn polarity(mut self, pin: u8, polarity: Polarity) -> Self {
        let result = self.staged.set_pin_polarity(pin, polarity);
        self.stage(POLARITY, result);
        self
    }

    /// Start from the power-on configuration instead of the expander's current one. Every
    /// register pair will be written on commit.
    pub fn reset(mut self) -> Self {
        self.staged.reset_to_default();
        self.touched = [true; 3];
        self
    }

    /// Store the staged configuration in the expander and write the register pairs that were
    /// changed through this configurator, output levels first, then directions, then polarity.
    pub fn commit(self) -> Result<(), Error<EI::Error>> {
        if let Some(e) = self.error {
            return Err(e.into());
        }
        *self.expander.config_mut() = self.staged;
        for (&pair, &touched) in WRITE_ORDER.iter().zip(self.touched.iter()) {
            if touched {
                self.expander.apply_pair(pair)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::SlaveAddress;
    use crate::interface::test_spy::{SimulatedDevice, Txn};

    #[test]
    fn config_default_is_power_on_state() {
        let config = Config::default();
        assert_eq!(config.mode.to_int(), 0xFFFF);
        assert_eq!(config.output.to_int(), 0xFFFF);
        assert_eq!(config.polarity.to_int(), 0x0000);
    }

    #[test]
    fn config_reset_to_default() {
        let mut config = Config {
            mode: RegisterValue::from_int(0x1234),
            output: RegisterValue::from_int(0x0000),
            polarity: RegisterValue::from_int(0xFFFF),
        };
        config.reset_to_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_value_per_pair() {
        let config = Config {
            mode: RegisterValue::from_int(0x0001),
            output: RegisterValue::from_int(0x0002),
            polarity: RegisterValue::from_int(0x0004),
        };
        assert_eq!(config.value(RegisterPair::Mode), Some(config.mode));
        assert_eq!(config.value(RegisterPair::Output), Some(config.output));
        assert_eq!(config.value(RegisterPair::Polarity), Some(config.polarity));
        assert_eq!(config.value(RegisterPair::Input), None);
    }

    #[test]
    fn config_set_pin_mode_boundaries() {
        let mut config = Config::default();
        config.mode = RegisterValue::CLEAR;
        assert!(config.set_pin_mode(15, PinMode::Input).is_ok());
        assert_eq!(config.mode.to_int(), 0x8000);

        let mut config = Config::default();
        assert!(config.set_pin_mode(0, PinMode::Output).is_ok());
        assert_eq!(config.mode.to_int(), 0xFFFE);
    }

    #[test]
    fn config_set_pin_out_of_range() {
        let mut config = Config::default();
        assert_eq!(
            config.set_pin_mode(16, PinMode::Output),
            Err(InvalidPin(16))
        );
        assert_eq!(
            config.set_pin_output_state(200, Level::Low),
            Err(InvalidPin(200))
        );
        assert_eq!(
            config.set_pin_polarity(16, Polarity::Inverted),
            Err(InvalidPin(16))
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_pin_getters() {
        let mut config = Config::default();
        assert!(config.set_pin_output_state(4, Level::Low).is_ok());
        assert!(config.set_pin_polarity(12, Polarity::Inverted).is_ok());
        assert_eq!(config.pin_output_state(4), Ok(Level::Low));
        assert_eq!(config.pin_output_state(5), Ok(Level::High));
        assert_eq!(config.pin_polarity(12), Ok(Polarity::Inverted));
        assert_eq!(config.pin_mode(12), Ok(PinMode::Input));
        assert_eq!(config.pin_mode(16), Err(InvalidPin(16)));
        assert_eq!(config.polarity.to_int(), 0x1000);
    }

    #[test]
    fn configurator_writes_only_touched_pairs() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex.configure().pins(0..=7, PinMode::Output).commit().is_ok());
        assert_eq!(dev.writes(), vec![Txn::Write(0x20, vec![0x06, 0x00, 0xFF])]);
        assert_eq!(ex.config().mode.to_int(), 0xFF00);
    }

    #[test]
    fn configurator_writes_output_before_mode() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex
            .configure()
            .polarity(9, Polarity::Inverted)
            .pin(2, PinMode::Output)
            .output(2, Level::Low)
            .commit()
            .is_ok());
        assert_eq!(
            dev.writes(),
            vec![
                Txn::Write(0x20, vec![0x02, 0xFB, 0xFF]),
                Txn::Write(0x20, vec![0x06, 0xFB, 0xFF]),
                Txn::Write(0x20, vec![0x04, 0x00, 0x02]),
            ]
        );
    }

    #[test]
    fn configurator_invalid_pin_changes_nothing() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert_eq!(
            ex.configure()
                .pin(3, PinMode::Output)
                .pins(14..=17, PinMode::Output)
                .commit(),
            Err(Error::InvalidPin(InvalidPin(16)))
        );
        assert_eq!(*ex.config(), Config::default());
        assert!(dev.log().is_empty());
    }

    #[test]
    fn configurator_noop() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        assert!(ex.configure().commit().is_ok());
        assert!(dev.log().is_empty());
    }

    #[test]
    fn configurator_reset_writes_everything() {
        let dev = SimulatedDevice::new();
        let mut ex = Expander::with_address(dev.split(), SlaveAddress::default());
        ex.config_mut().mode = RegisterValue::CLEAR;
        assert!(ex.configure().reset().commit().is_ok());
        assert_eq!(
            dev.writes(),
            vec![
                Txn::Write(0x20, vec![0x02, 0xFF, 0xFF]),
                Txn::Write(0x20, vec![0x06, 0xFF, 0xFF]),
                Txn::Write(0x20, vec![0x04, 0x00, 0x00]),
            ]
        );
    }
}
