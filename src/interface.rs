//! This module provides shims for the `embedded-hal` hardware corresponding to the TCA95x5's bus
//! interface. It is a shim between `embedded-hal` implementations and the expander's registers.

use crate::address::SlaveAddress;
use crate::registers::RegisterAddress;

/// An interface for the TCA95x5 implements this trait, which provides the basic operations for
/// sending pre-encoded register accesses to the chip via the bus.
///
/// Every method is one complete, blocking bus exchange. Timeouts and retries, if any, belong to
/// the implementation.
pub trait ExpanderInterface {
    /// The type of error that transactions may return.
    type Error;

    /// Issue a transaction without data to check that a device acknowledges `address`.
    fn probe(&mut self, address: SlaveAddress) -> Result<(), Self::Error>;

    /// Issue a single transaction to the device at `address` carrying the register address
    /// followed by `data` (at most one register pair, 2 bytes). The device stores the bytes into
    /// consecutive registers of the pair starting at `register`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `data` is longer than [`RegisterPair::WIDTH`] bytes. The
    /// `Expander` never passes more than one register pair.
    ///
    /// [`RegisterPair::WIDTH`]: crate::registers::RegisterPair::WIDTH
    fn write_register(
        &mut self,
        address: SlaveAddress,
        register: RegisterAddress,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Point the device at `register` with a transaction carrying only the register address,
    /// then request `buf.len()` bytes in a second transaction. Returns the number of bytes
    /// actually received into `buf`.
    fn read_register(
        &mut self,
        address: SlaveAddress,
        register: RegisterAddress,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

// This is here (and has to be pub) for doctests only. It's useless otherwise.
#[doc(hidden)]
pub mod noop {
    use super::ExpanderInterface;
    use crate::address::SlaveAddress;
    use crate::registers::RegisterAddress;

    pub struct NoopInterface;

    impl ExpanderInterface for NoopInterface {
        type Error = core::convert::Infallible;

        fn probe(&mut self, _address: SlaveAddress) -> Result<(), Self::Error> {
            Ok(())
        }
        fn write_register(
            &mut self,
            _address: SlaveAddress,
            _register: RegisterAddress,
            _data: &[u8],
        ) -> Result<(), Self::Error> {
            Ok(())
        }
        fn read_register(
            &mut self,
            _address: SlaveAddress,
            _register: RegisterAddress,
            buf: &mut [u8],
        ) -> Result<usize, Self::Error> {
            buf.iter_mut().for_each(|b| *b = 0);
            Ok(buf.len())
        }
    }
}

pub mod i2c {
    //! The I2C interface controls a TCA95x5 via the 2-wire bus (SCL, SDA).

    use hal::blocking::i2c::{Read, Write};

    use super::ExpanderInterface;
    use crate::address::SlaveAddress;
    use crate::registers::{RegisterAddress, RegisterPair};

    /// The union of all errors that may occur on the I2C interface.
    #[derive(Debug, PartialEq)]
    pub enum I2cInterfaceError<WE, RE> {
        /// An error occurred during an I2C write, including a NACK of the address or data.
        WriteError(WE),
        /// An error occurred during an I2C read.
        ReadError(RE),
    }

    impl<WE, RE> I2cInterfaceError<WE, RE> {
        fn from_write(e: WE) -> Self {
            Self::WriteError(e)
        }
        fn from_read(e: RE) -> Self {
            Self::ReadError(e)
        }
    }

    /// A configured `ExpanderInterface` for controlling a TCA95x5 via I2C.
    pub struct I2cInterface<I2C> {
        /// The I2C master device the TCA95x5 is connected to.
        i2c: I2C,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: Write + Read,
    {
        /// Create a new I2C interface to communicate with the port expander. `i2c` is the I2C
        /// master device; the slave address is chosen by the `Expander`.
        pub fn new(i2c: I2C) -> Self {
            Self { i2c }
        }

        /// Give back the I2C master device.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> ExpanderInterface for I2cInterface<I2C>
    where
        I2C: Write + Read,
    {
        type Error = I2cInterfaceError<<I2C as Write>::Error, <I2C as Read>::Error>;

        fn probe(&mut self, address: SlaveAddress) -> Result<(), Self::Error> {
            self.i2c
                .write(address.raw(), &[])
                .map_err(Self::Error::from_write)
        }

        /// # Panics
        ///
        /// Panics if `data` is longer than one register pair.
        fn write_register(
            &mut self,
            address: SlaveAddress,
            register: RegisterAddress,
            data: &[u8],
        ) -> Result<(), Self::Error> {
            assert!(
                data.len() <= RegisterPair::WIDTH,
                "TCA95x5 register writes carry at most {} bytes",
                RegisterPair::WIDTH
            );
            // Register address first, then the data, all in one transaction.
            let mut buf = [0u8; 1 + RegisterPair::WIDTH];
            let len = 1 + data.len();
            buf[0] = register.into();
            buf[1..len].copy_from_slice(data);
            self.i2c
                .write(address.raw(), &buf[..len])
                .map_err(Self::Error::from_write)
        }

        fn read_register(
            &mut self,
            address: SlaveAddress,
            register: RegisterAddress,
            buf: &mut [u8],
        ) -> Result<usize, Self::Error> {
            // Set the register pointer, stop, then burst-read from it. The device auto-increments
            // within the register pair.
            self.i2c
                .write(address.raw(), &[register.into()])
                .map_err(Self::Error::from_write)?;
            self.i2c
                .read(address.raw(), buf)
                .map_err(Self::Error::from_read)?;
            Ok(buf.len())
        }
    }

}
