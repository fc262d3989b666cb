//! The port expander device API. This provides the `Expander` type which is a direct abstraction
//! of the TCA95x5. It allows direct use of all operations available on the device.

use crate::address::SlaveAddress;
use crate::bits::RegisterValue;
use crate::config::{Config, Configurator, Level, PinMode, Polarity};
use crate::error::Error;
use crate::interface::ExpanderInterface;
use crate::registers::{RegisterAddress, RegisterPair};

pub mod convenience;

/// The port expander device itself.
///
/// An `Expander` holds the desired pin configuration locally. Setters only change that copy; it
/// reaches the device when [`apply_config`](Self::apply_config) (or a
/// [`Configurator`] commit) is called. [`active_config`](Self::active_config) reads what the
/// device is actually using, which differs from the local copy until the next apply or after the
/// device was reset externally.
///
/// An `Expander` has no internal locking. Sharing one between contexts needs external mutual
/// exclusion covering whole operations, since `apply_config` and the read-modify-write helpers
/// span several bus transactions.
pub struct Expander<EI: ExpanderInterface> {
    iface: EI,
    address: Option<SlaveAddress>,
    config: Config,
}

impl<EI: ExpanderInterface> Expander<EI> {
    /// Create a new `Expander` without a device address.
    ///
    /// Takes ownership of the `ExpanderInterface` which it should use to communicate with the
    /// TCA95x5. Every bus operation fails with [`Error::Unaddressed`] until
    /// [`begin`](Self::begin) or [`set_address`](Self::set_address) is called.
    pub fn new(iface: EI) -> Self {
        Self {
            iface,
            address: None,
            config: Config::default(),
        }
    }

    /// Create a new `Expander` talking to the device at `address`, without checking for its
    /// presence.
    pub fn with_address(iface: EI, address: SlaveAddress) -> Self {
        Self {
            iface,
            address: Some(address),
            config: Config::default(),
        }
    }

    /// Select the device at `address` and check that it acknowledges.
    ///
    /// The address stays selected even if the check fails with [`Error::DeviceNotFound`]; later
    /// operations are attempted against it regardless. The error carries the interface's own
    /// error so that a bus fault can be told apart from a missing device.
    pub fn begin(&mut self, address: SlaveAddress) -> Result<(), Error<EI::Error>> {
        self.address = Some(address);
        #[cfg(feature = "log")]
        log::debug!("TCA95x5 selected at {}", address);
        self.iface.probe(address).map_err(|cause| {
            #[cfg(feature = "log")]
            log::warn!("TCA95x5 did not acknowledge at {}", address);
            Error::DeviceNotFound { address, cause }
        })
    }

    /// Select the device whose A0, A1 and A2 pins are tied to the given levels, and check that
    /// it acknowledges. See [`begin`](Self::begin).
    pub fn set_address(&mut self, a0: bool, a1: bool, a2: bool) -> Result<(), Error<EI::Error>> {
        self.begin(SlaveAddress::from_pins(a0, a1, a2))
    }

    /// The currently selected device address, if any.
    pub fn address(&self) -> Option<SlaveAddress> {
        self.address
    }

    /// Release the `ExpanderInterface`, consuming the `Expander`.
    pub fn release(self) -> EI {
        self.iface
    }

    /// The locally held configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the locally held configuration. Changes take effect on the next apply.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Reset the locally held configuration to the device's power-on state. No bus traffic.
    pub fn reset_config(&mut self) {
        self.config.reset_to_default();
    }

    /// Set the direction of `pin` (`0..=15`) in the local configuration.
    pub fn set_pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error<EI::Error>> {
        Ok(self.config.set_pin_mode(pin, mode)?)
    }

    /// Set the output level of `pin` (`0..=15`) in the local configuration.
    pub fn set_pin_output_state(&mut self, pin: u8, level: Level) -> Result<(), Error<EI::Error>> {
        Ok(self.config.set_pin_output_state(pin, level)?)
    }

    /// Set the input polarity of `pin` (`0..=15`) in the local configuration.
    pub fn set_pin_polarity(
        &mut self,
        pin: u8,
        polarity: Polarity,
    ) -> Result<(), Error<EI::Error>> {
        Ok(self.config.set_pin_polarity(pin, polarity)?)
    }

    /// Begin (re)configuring the port expander hardware by returning a [`Configurator`].
    ///
    /// The `Configurator` is a builder-like interface that can be used to alter pin directions,
    /// output levels and polarity, then write them in one go.
    pub fn configure(&mut self) -> Configurator<'_, EI> {
        Configurator::new(self)
    }

    /// Write the whole local configuration to the device: output levels first, then pin
    /// directions, then polarity.
    ///
    /// Output levels go first so that a pin switching from input to output immediately drives the
    /// configured level instead of a stale one. Each register pair is a separate transaction; on
    /// failure the error names the pair that was not written, the pairs before it stay written
    /// and the ones after it are not attempted.
    pub fn apply_config(&mut self) -> Result<(), Error<EI::Error>> {
        #[cfg(feature = "log")]
        log::debug!("TCA95x5 applying {:?}", self.config);
        self.apply_output_config()?;
        self.apply_mode_config()?;
        self.apply_polarity_config()
    }

    /// Write the locally configured pin directions to the device.
    pub fn apply_mode_config(&mut self) -> Result<(), Error<EI::Error>> {
        self.apply_pair(RegisterPair::Mode)
    }

    /// Write the locally configured output levels to the device.
    pub fn apply_output_config(&mut self) -> Result<(), Error<EI::Error>> {
        self.apply_pair(RegisterPair::Output)
    }

    /// Write the locally configured input polarity to the device.
    pub fn apply_polarity_config(&mut self) -> Result<(), Error<EI::Error>> {
        self.apply_pair(RegisterPair::Polarity)
    }

    /// Read the configuration the device is currently using. The local configuration is not
    /// changed.
    pub fn active_config(&mut self) -> Result<Config, Error<EI::Error>> {
        let mode = self.read_mode_config()?;
        let output = self.read_output_config()?;
        let polarity = self.read_polarity_config()?;
        Ok(Config {
            mode,
            output,
            polarity,
        })
    }

    /// Read the pin directions from the device.
    pub fn read_mode_config(&mut self) -> Result<RegisterValue, Error<EI::Error>> {
        self.read_pair(RegisterPair::Mode)
    }

    /// Read the output register contents from the device.
    pub fn read_output_config(&mut self) -> Result<RegisterValue, Error<EI::Error>> {
        self.read_pair(RegisterPair::Output)
    }

    /// Read the input polarity from the device.
    pub fn read_polarity_config(&mut self) -> Result<RegisterValue, Error<EI::Error>> {
        self.read_pair(RegisterPair::Polarity)
    }

    /// Read the input port registers: the logic level of every pin, after polarity inversion.
    pub fn read_input_status(&mut self) -> Result<RegisterValue, Error<EI::Error>> {
        self.read_pair(RegisterPair::Input)
    }

    /// Alias of [`read_input_status`](Self::read_input_status).
    pub fn pin_states(&mut self) -> Result<RegisterValue, Error<EI::Error>> {
        self.read_input_status()
    }

    /// Read both registers of `pair` in one burst.
    pub fn read_pair(&mut self, pair: RegisterPair) -> Result<RegisterValue, Error<EI::Error>> {
        let address = self.device()?;
        let register = pair.base();
        let mut buf = [0u8; RegisterPair::WIDTH];
        let received = self
            .iface
            .read_register(address, RegisterAddress::from(register), &mut buf)
            .map_err(Error::transaction(register))?;
        if received < buf.len() {
            #[cfg(feature = "log")]
            log::warn!(
                "TCA95x5 short read from {:?}: {} of {} bytes",
                register,
                received,
                buf.len()
            );
            return Err(Error::ShortRead {
                register,
                expected: buf.len(),
                received,
            });
        }
        let value = RegisterValue::from_bytes(buf);
        #[cfg(feature = "log")]
        log::trace!("TCA95x5 read {:?} -> {:?}", register, value);
        Ok(value)
    }

    /// Write the locally configured value of `pair`. The read-only input pair has nothing to
    /// write and is skipped.
    pub(crate) fn apply_pair(&mut self, pair: RegisterPair) -> Result<(), Error<EI::Error>> {
        match self.config.value(pair) {
            Some(value) => self.write_pair(pair, value),
            None => Ok(()),
        }
    }

    pub(crate) fn write_pair(
        &mut self,
        pair: RegisterPair,
        value: RegisterValue,
    ) -> Result<(), Error<EI::Error>> {
        debug_assert!(pair.is_writable(), "{:?} registers are read-only", pair);
        let address = self.device()?;
        let register = pair.base();
        #[cfg(feature = "log")]
        log::trace!("TCA95x5 write {:?} <- {:?}", register, value);
        self.iface
            .write_register(address, RegisterAddress::from(register), &value.to_bytes())
            .map_err(Error::transaction(register))
    }

    fn device(&self) -> Result<SlaveAddress, Error<EI::Error>> {
        self.address.ok_or(Error::Unaddressed)
    }
}
