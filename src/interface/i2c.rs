//! I2C transfer primitive built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::BusTransfer;

/// I2C-based transfer primitive bound to one 7-bit device address.
pub struct I2cTransfer<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransfer<I2C> {
    /// Creates a new primitive talking to `address` on the provided bus.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address every transfer targets.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the primitive and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> I2cTransfer<I2C>
where
    I2C: I2c,
{
    fn transfer_once(&mut self, out: &[u8], input: &mut [u8]) -> core::result::Result<(), I2C::Error> {
        match (out.is_empty(), input.is_empty()) {
            (false, false) => self.i2c.write_read(self.address, out, input),
            (false, true) => self.i2c.write(self.address, out),
            (true, false) => self.i2c.read(self.address, input),
            (true, true) => Ok(()),
        }
    }
}

impl<I2C> BusTransfer for I2cTransfer<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn transfer(
        &mut self,
        out: &[u8],
        input: &mut [u8],
        retries: u8,
    ) -> core::result::Result<(), Self::Error> {
        let mut attempt = 0u8;
        loop {
            match self.transfer_once(out, input) {
                Ok(()) => return Ok(()),
                Err(err) if attempt >= retries => return Err(err),
                Err(_) => attempt += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::I2cTransfer;
    use crate::interface::BusTransfer;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x20;

    #[test]
    fn write_only_transfer_uses_plain_write() {
        let expectations = [I2cTransaction::write(ADDR, vec![0x36])];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = I2cTransfer::new(i2c.clone(), ADDR);

        bus.transfer(&[0x36], &mut [], 0).unwrap();
        i2c.done();
    }

    #[test]
    fn read_only_transfer_uses_plain_read() {
        let expectations = [I2cTransaction::read(ADDR, vec![0xAA, 0x55])];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = I2cTransfer::new(i2c.clone(), ADDR);

        let mut buf = [0u8; 2];
        bus.transfer(&[], &mut buf, 0).unwrap();
        assert_eq!(buf, [0xAA, 0x55]);
        i2c.done();
    }

    #[test]
    fn combined_transfer_uses_write_read() {
        let expectations = [I2cTransaction::write_read(ADDR, vec![0x24], vec![1, 2, 3])];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = I2cTransfer::new(i2c.clone(), ADDR);

        let mut buf = [0u8; 3];
        bus.transfer(&[0x24], &mut buf, 0).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        i2c.done();
    }

    #[test]
    fn empty_transfer_touches_nothing() {
        let expectations: [I2cTransaction; 0] = [];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = I2cTransfer::new(i2c.clone(), ADDR);

        bus.transfer(&[], &mut [], 3).unwrap();
        i2c.done();
    }

    #[test]
    fn failed_attempt_is_retried() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x01]).with_error(ErrorKind::Other),
            I2cTransaction::write(ADDR, vec![0x01]).with_error(ErrorKind::Other),
            I2cTransaction::write(ADDR, vec![0x01]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = I2cTransfer::new(i2c.clone(), ADDR);

        bus.transfer(&[0x01], &mut [], 2).unwrap();
        i2c.done();
    }

    #[test]
    fn exhausted_retries_return_last_error() {
        let expectations = [
            I2cTransaction::read(ADDR, vec![0x00]).with_error(ErrorKind::Other),
            I2cTransaction::read(ADDR, vec![0x00]).with_error(ErrorKind::Bus),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = I2cTransfer::new(i2c.clone(), ADDR);

        let mut buf = [0u8; 1];
        let err = bus.transfer(&[], &mut buf, 1).unwrap_err();
        assert_eq!(err, ErrorKind::Bus);
        i2c.done();
    }

    #[test]
    fn release_returns_wrapped_bus() {
        let expectations: [I2cTransaction; 0] = [];
        let i2c = I2cMock::new(&expectations);
        let bus = I2cTransfer::new(i2c, ADDR);

        assert_eq!(bus.address(), ADDR);
        let mut i2c = bus.release();
        i2c.done();
    }
}
