//! Register map definitions for the RM3100 magnetometer.

/// Register address of `POLL` (single measurement request).
pub const REG_POLL: u8 = 0x00;
/// Register address of `CMM` (continuous measurement mode).
pub const REG_CMM: u8 = 0x01;
/// Register address of `CCX` (X cycle count, MSB first).
pub const REG_CCX: u8 = 0x04;
/// Register address of `CCY` (Y cycle count, MSB first).
pub const REG_CCY: u8 = 0x06;
/// Register address of `CCZ` (Z cycle count, MSB first).
pub const REG_CCZ: u8 = 0x08;
/// Register address of `TMRC` (continuous mode update rate).
pub const REG_TMRC: u8 = 0x0B;
/// Register address of `MX` (24-bit X result).
pub const REG_MX: u8 = 0x24;
/// Register address of `MY` (24-bit Y result).
pub const REG_MY: u8 = 0x27;
/// Register address of `MZ` (24-bit Z result).
pub const REG_MZ: u8 = 0x2A;
/// Register address of `BIST` (built-in self test).
pub const REG_BIST: u8 = 0x33;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x34;
/// Register address of `HSHAKE` (handshake).
pub const REG_HSHAKE: u8 = 0x35;
/// Register address of `REVID`.
pub const REG_REVID: u8 = 0x36;

/// Expected value of the `REVID` register.
pub const EXPECTED_REVID: u8 = 0x22;

/// Capacity of the outbound write buffer, register address byte included.
pub const WRITE_BUFFER_LEN: usize = 32;
