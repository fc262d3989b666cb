//! Driver library for the TI TCA9535 / TCA9555 family of 16-bit I2C I/O expanders.
//!
//! The TCA95x5 provides 16 GPIO pins in two 8-pin ports. Each pin can be configured as a
//! push-pull output or a high-impedance input, and inputs can have their reported polarity
//! inverted. The device is controlled through eight 8-bit registers on an I2C bus.
//!
//! This driver is intended to work on embedded platforms using any implementation of the
//! `embedded-hal` trait library. It communicates with the expander via any blocking I2C device
//! implementing the respective traits.
//!
//! # Construction
//!
//! To set up the driver:
//!
//! - Use your platform's `embedded-hal` implementation to obtain the I2C master device the
//!   TCA95x5 is connected to.
//! - Construct an [`ExpanderInterface`] (the [`I2cInterface`]) which will take ownership of the
//!   I2C device.
//! - Construct an [`Expander`], which will take ownership of the `ExpanderInterface`, and select
//!   the device address with [`Expander::begin`] or [`Expander::set_address`].
//!
//! ```ignore
//! let i2c = /* construct something implementing embedded_hal::blocking::i2c::{Write,Read} */
//!
//! let ei = tca95x5::I2cInterface::new(i2c);
//! let mut expander = tca95x5::Expander::new(ei);
//! expander.set_address(false, false, false)?;
//! ```
//!
//! `begin` and `set_address` perform a presence check. If nothing acknowledges they return
//! [`Error::DeviceNotFound`], but the address stays selected and later calls still go out on the
//! bus.
//!
//! # Device configuration
//!
//! *See [`Config`] and [`Expander::apply_config`].*
//!
//! The expander keeps a local copy of the direction, output level and polarity registers. Pin
//! setters change only that copy; `apply_config` writes it to the device:
//!
//! ```
//! # fn main() -> Result<(), tca95x5::Error<core::convert::Infallible>> {
//! # let ei = tca95x5::interface::noop::NoopInterface;
//! # let mut expander = tca95x5::Expander::with_address(ei, tca95x5::SlaveAddress::default());
//! expander.set_pin_mode(0, tca95x5::PinMode::Output)?;
//! expander.set_pin_output_state(0, tca95x5::Level::Low)?;
//! expander.set_pin_polarity(9, tca95x5::Polarity::Inverted)?;
//! expander.apply_config()?;
//! # Ok(())
//! # }
//! ```
//!
//! The same can be done with the builder returned by [`Expander::configure`], which only writes
//! the registers it touched:
//!
//! ```
//! # fn main() -> Result<(), tca95x5::Error<core::convert::Infallible>> {
//! # let ei = tca95x5::interface::noop::NoopInterface;
//! # let mut expander = tca95x5::Expander::with_address(ei, tca95x5::SlaveAddress::default());
//! expander
//!     .configure()
//!     .pins(0..=7, tca95x5::PinMode::Output)
//!     .output(7, tca95x5::Level::High)
//!     .commit()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Expander::active_config`] reads back what the device is actually using, which lets you
//! detect that it was reset or reconfigured behind the driver's back.
//!
//! # Single-pin access
//!
//! [`Expander::digital_read`], [`Expander::digital_write`] and [`Expander::pin_mode`] take raw
//! pin numbers and go straight to the device with a read-modify-write of the affected register
//! pair. They do not update the local configuration, and are not atomic:
//!
//! ```
//! # fn main() -> Result<(), tca95x5::Error<core::convert::Infallible>> {
//! # let ei = tca95x5::interface::noop::NoopInterface;
//! # let mut expander = tca95x5::Expander::with_address(ei, tca95x5::SlaveAddress::default());
//! expander.pin_mode(12, tca95x5::PinMode::Output)?;
//! expander.digital_write(12, tca95x5::Level::High)?;
//! let button = expander.digital_read(3)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo features
//!
//! - `std` (default): implements `std::error::Error` for the error types.
//! - `log`: emits diagnostics through the `log` facade (address selection, applies, failed
//!   presence checks, short reads, and every register transaction at trace level).

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate embedded_hal as hal;

pub mod address;
pub mod bits;
pub mod config;
pub mod error;
pub mod expander;
pub mod interface;
pub mod pin;
pub mod registers;

pub use address::SlaveAddress;
pub use bits::{PortBits, RegisterValue};
pub use config::{Config, Configurator, Level, PinMode, Polarity};
pub use error::Error;
pub use expander::Expander;
pub use interface::i2c::I2cInterface;
pub use interface::ExpanderInterface;
pub use pin::{InvalidPin, Pin, Port};
pub use registers::{Register, RegisterPair};
