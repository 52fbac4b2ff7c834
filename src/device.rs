//! RM3100 register bus adapter.

use crate::config::BusConfig;
use crate::control::{ControlResponse, Opcode};
use crate::device_id::DeviceId;
use crate::error::{Error, Result};
#[cfg(feature = "i2c")]
use crate::interface::i2c::I2cTransfer;
use crate::interface::{BusTopology, BusTransfer, RegisterDevice};
use crate::registers::{EXPECTED_REVID, REG_REVID, WRITE_BUFFER_LEN};
#[cfg(feature = "i2c")]
use embedded_hal::i2c::I2c;

/// Register bus adapter for the RM3100 magnetometer.
///
/// Turns register-level reads and writes into the transfers the RM3100
/// expects and checks the chip identity during [`init`](Self::init).
pub struct Rm3100<BUS> {
    bus: BUS,
    config: BusConfig,
    retries: u8,
    ready: bool,
}

impl<BUS> Rm3100<BUS> {
    // ==================================================================
    // == Adapter Construction & Ownership ==============================
    // ==================================================================
    /// Creates a new adapter from the provided transfer primitive.
    pub fn new(bus: BUS, config: BusConfig) -> Self {
        Self {
            bus,
            retries: config.retry.steady,
            config,
            ready: false,
        }
    }

    /// Creates a new adapter whose external flag comes from `topology`.
    pub fn with_topology(bus: BUS, mut config: BusConfig, topology: &impl BusTopology) -> Self {
        config.external = topology.is_external(config.bus_id, config.address);
        Self::new(bus, config)
    }

    /// Consumes the adapter and returns the owned primitive.
    pub fn release(self) -> (BUS, BusConfig) {
        (self.bus, self.config)
    }

    /// Provides mutable access to the underlying transfer primitive.
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    // ==================================================================
    // == State Accessors ===============================================
    // ==================================================================
    /// Returns a shared reference to the bus configuration.
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Retry budget handed to the next transfer.
    pub fn retries(&self) -> u8 {
        self.retries
    }

    /// Whether [`init`](Self::init) completed successfully.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether the sensor sits on an external connector.
    pub fn is_external(&self) -> bool {
        self.config.external
    }

    /// Packed identity record for this sensor.
    pub fn device_id(&self) -> DeviceId {
        DeviceId::rm3100_i2c(self.config.bus_id, self.config.address)
    }
}

#[cfg(feature = "i2c")]
impl<I2C> Rm3100<I2cTransfer<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, config: BusConfig) -> Self {
        Self::new(I2cTransfer::new(i2c, config.address), config)
    }

    /// Releases the adapter, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, BusConfig) {
        let (bus, config) = self.release();
        (bus.release(), config)
    }
}

impl<BUS, CommE> Rm3100<BUS>
where
    BUS: BusTransfer<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Identification ===============================
    // ==================================================================
    /// Validates the configuration and probes the device.
    ///
    /// The adapter is only marked ready when the probe succeeds.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.ready = false;
        self.config.validate().map_err(|_| Error::InvalidConfig)?;

        self.probe()?;
        self.ready = true;
        debug!(
            "RM3100 ready on bus {} at {=u8:#x}",
            self.config.bus_id,
            self.config.address
        );
        Ok(())
    }

    /// Reads `REVID` and checks it against the RM3100 constant.
    ///
    /// The read runs with the generous probe retry budget. Once the device
    /// has answered, the budget drops to the steady-state value.
    pub fn probe(&mut self) -> Result<(), CommE> {
        self.retries = self.config.retry.probe;

        let mut revid = [0u8; 1];
        if let Err(err) = RegisterDevice::read(self, REG_REVID, &mut revid) {
            debug!("RM3100 read_reg fail");
            return Err(err);
        }

        self.retries = self.config.retry.steady;

        if revid[0] != EXPECTED_REVID {
            warn!("RM3100 bad ID: {=u8:#x}", revid[0]);
            return Err(Error::IdentityMismatch { found: revid[0] });
        }

        Ok(())
    }
}

impl<BUS, CommE> RegisterDevice for Rm3100<BUS>
where
    BUS: BusTransfer<Error = CommE>,
{
    type Error = Error<CommE>;

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    fn read(&mut self, register: u8, buf: &mut [u8]) -> Result<(), CommE> {
        if buf.is_empty() {
            return Ok(());
        }

        // Select the register first, then clock the data back in a separate transfer.
        self.bus
            .transfer(&[register], &mut [], self.retries)
            .map_err(Error::from)?;
        self.bus
            .transfer(&[], buf, self.retries)
            .map_err(Error::from)
    }

    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), CommE> {
        let len = data.len() + 1;
        if len > WRITE_BUFFER_LEN {
            return Err(Error::BufferTooLarge { len });
        }

        let mut buf = [0u8; WRITE_BUFFER_LEN];
        buf[0] = register;
        buf[1..len].copy_from_slice(data);

        self.bus
            .transfer(&buf[..len], &mut [], self.retries)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Control Requests ==============================================
    // ==================================================================
    fn control(&mut self, opcode: u16) -> Result<ControlResponse, CommE> {
        match Opcode::try_from(opcode) {
            Ok(Opcode::GetExternal) => Ok(ControlResponse::External(self.is_external())),
            Ok(Opcode::GetDeviceId) => Ok(ControlResponse::DeviceId(self.device_id())),
            Err(raw) => Err(Error::Unsupported(raw)),
        }
    }
}
