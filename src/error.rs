//! Error handling primitives for the RM3100 bus adapter.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus transfer.
    Interface(E),
    /// The device answered but its `REVID` byte is not the RM3100 one.
    IdentityMismatch {
        /// Identification byte actually read from the device.
        found: u8,
    },
    /// The outbound write buffer (address byte + payload) exceeds its capacity.
    BufferTooLarge {
        /// Requested buffer length, address byte included.
        len: usize,
    },
    /// The control opcode is not handled by this adapter.
    Unsupported(u16),
    /// The provided bus configuration is invalid.
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
