//! Out-of-band control requests understood by the adapter.

use crate::device_id::DeviceId;

/// Recognized control opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Opcode {
    /// Asks whether the sensor sits on an external connector.
    GetExternal = 0x2401,
    /// Asks for the packed device identity record.
    GetDeviceId = 0x2402,
}

impl TryFrom<u16> for Opcode {
    type Error = u16;

    fn try_from(value: u16) -> core::result::Result<Self, Self::Error> {
        match value {
            0x2401 => Ok(Self::GetExternal),
            0x2402 => Ok(Self::GetDeviceId),
            other => Err(other),
        }
    }
}

impl From<Opcode> for u16 {
    fn from(value: Opcode) -> Self {
        value as u16
    }
}

/// Answer to a control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlResponse {
    /// Answer to [`Opcode::GetExternal`].
    External(bool),
    /// Answer to [`Opcode::GetDeviceId`].
    DeviceId(DeviceId),
}

#[cfg(test)]
mod tests {
    use super::Opcode;

    #[test]
    fn raw_opcodes_map_to_variants() {
        assert_eq!(Opcode::try_from(0x2401), Ok(Opcode::GetExternal));
        assert_eq!(Opcode::try_from(0x2402), Ok(Opcode::GetDeviceId));
        assert_eq!(u16::from(Opcode::GetDeviceId), 0x2402);
    }

    #[test]
    fn unknown_raw_opcode_is_returned_back() {
        assert_eq!(Opcode::try_from(0x0001), Err(0x0001));
    }
}
