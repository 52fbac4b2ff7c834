//! Packed device identity record.
//!
//! Sensor-fusion layers tell magnetometers apart by a 32-bit descriptor that
//! encodes which bus the sensor sits on, its address there and its model.
//! The layout, from the least significant bit, is
//! `bus_type:3 | bus:5 | address:8 | devtype:8 | reserved:8`.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Device type tag of the RM3100 magnetometer.
pub const DEVTYPE_RM3100: u8 = 0x07;

/// Bus family encoded in [`DeviceId::bus_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum BusType {
    /// Bus family not known.
    Unknown = 0,
    /// I2C bus.
    I2c = 1,
    /// SPI bus.
    Spi = 2,
    /// UAVCAN node.
    Uavcan = 3,
}

/// Bitfield representation of the device identity record.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub bus_type: BusType,
    pub bus: B5,
    pub address: u8,
    pub devtype: u8,
    #[skip]
    __: B8,
}

impl DeviceId {
    /// Builds the record for an RM3100 on the given I2C bus and address.
    pub fn rm3100_i2c(bus: u8, address: u8) -> Self {
        Self::new()
            .with_bus_type(BusType::I2c)
            .with_bus(bus & 0x1F)
            .with_address(address)
            .with_devtype(DEVTYPE_RM3100)
    }
}

impl From<u32> for DeviceId {
    fn from(value: u32) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl From<DeviceId> for u32 {
    fn from(value: DeviceId) -> Self {
        u32::from_le_bytes(value.into_bytes())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DeviceId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "DeviceId {{ bus_type: {}, bus: {}, address: {=u8:#x}, devtype: {=u8:#x} }}",
            self.bus_type_or_err().unwrap_or(BusType::Unknown),
            self.bus(),
            self.address(),
            self.devtype()
        );
    }
}
