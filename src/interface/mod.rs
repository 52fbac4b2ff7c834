//! Bus abstractions for the RM3100 adapter.

#[cfg(feature = "i2c")]
pub mod i2c;

use crate::control::ControlResponse;

/// Lowest-level primitive that clocks bytes on and off the bus.
pub trait BusTransfer {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes `out` and then reads into `input` as one bus transaction.
    ///
    /// An empty `input` makes this write-only and an empty `out` makes it
    /// read-only. `retries` is the number of extra attempts allowed after a
    /// failed first try.
    fn transfer(
        &mut self,
        out: &[u8],
        input: &mut [u8],
        retries: u8,
    ) -> core::result::Result<(), Self::Error>;
}

/// Byte-addressable register device.
pub trait RegisterDevice {
    /// Error type returned by every operation.
    type Error;

    /// Reads `buf.len()` consecutive bytes starting at `register`.
    fn read(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes `data` to consecutive registers starting at `register`.
    fn write(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Handles an out-of-band control request identified by a raw opcode.
    fn control(&mut self, opcode: u16) -> core::result::Result<ControlResponse, Self::Error>;
}

/// Reports how the sensor is wired relative to the main enclosure.
pub trait BusTopology {
    /// Returns `true` when `address` on `bus_id` is reached through an external connector.
    fn is_external(&self, bus_id: u8, address: u8) -> bool;
}
