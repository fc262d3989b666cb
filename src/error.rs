//! Errors reported by the driver.

use core::fmt;

use crate::address::SlaveAddress;
use crate::pin::InvalidPin;
use crate::registers::Register;

/// Errors produced by [`Expander`](crate::Expander) operations. `E` is the error type of the
/// [`ExpanderInterface`](crate::ExpanderInterface) in use.
///
/// Nothing is retried by the driver; each error is returned to the caller as soon as it occurs.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// The bus interface reported a failed transaction while accessing `register`.
    Transaction {
        /// Register targeted by the failed transaction.
        register: Register,
        /// Error returned by the interface.
        cause: E,
    },

    /// The device returned fewer bytes than requested. The partial data is discarded.
    ShortRead {
        /// Register the burst read started from.
        register: Register,
        /// Number of bytes requested.
        expected: usize,
        /// Number of bytes received.
        received: usize,
    },

    /// A pin index outside `0..=15` (or a bit index outside `0..=7`) was given.
    InvalidPin(InvalidPin),

    /// No device acknowledged the presence check at `address`. The address remains selected and
    /// later operations will still be attempted against it.
    DeviceNotFound {
        /// Address that was checked.
        address: SlaveAddress,
        /// Error returned by the interface, which tells a NACK apart from other bus faults.
        cause: E,
    },

    /// An I/O operation was attempted before any device address was selected.
    Unaddressed,
}

impl<E> Error<E> {
    pub(crate) fn transaction(register: Register) -> impl FnOnce(E) -> Self {
        move |cause| Error::Transaction { register, cause }
    }
}

impl<E> From<InvalidPin> for Error<E> {
    fn from(e: InvalidPin) -> Self {
        Error::InvalidPin(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transaction { register, cause } => {
                write!(f, "bus transaction on {:?} failed: {:?}", register, cause)
            }
            Error::ShortRead {
                register,
                expected,
                received,
            } => write!(
                f,
                "short read from {:?}: expected {} bytes, received {}",
                register, expected, received
            ),
            Error::InvalidPin(e) => fmt::Display::fmt(e, f),
            Error::DeviceNotFound { address, cause } => {
                write!(f, "no device acknowledged address {}: {:?}", address, cause)
            }
            Error::Unaddressed => f.write_str("no device address selected"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
