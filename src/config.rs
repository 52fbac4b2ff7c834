//! Configuration primitives for the RM3100 bus adapter.

/// Fixed 7-bit I2C address of the RM3100 (SA0 = SA1 = low).
pub const DEFAULT_ADDRESS: u8 = 0x20;
/// Bus clock the RM3100 is driven at, in hertz.
pub const DEFAULT_CLOCK_SPEED_HZ: u32 = 400_000;
/// Bus the sensor sits on when nothing else is specified.
pub const DEFAULT_BUS_ID: u8 = 1;

/// Retry budgets handed to the bus transfer primitive.
///
/// Each value counts extra attempts made after a failed first transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    /// Budget used while probing, absorbing bus settling after power-up.
    pub probe: u8,
    /// Budget used for every transfer once the device has been identified.
    pub steady: u8,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { probe: 10, steady: 2 }
    }
}

/// Bus-level configuration for one RM3100 adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Physical bus index the sensor is wired to.
    pub bus_id: u8,
    /// 7-bit device address.
    pub address: u8,
    /// Bus clock in hertz. Applied by the HAL that owns the bus.
    pub clock_speed_hz: u32,
    /// Whether the sensor sits on an external connector.
    pub external: bool,
    /// Retry budgets for probing and steady-state transfers.
    pub retry: RetryPolicy,
}

impl BusConfig {
    /// Begins building a [`BusConfig`] using the builder pattern.
    pub fn new() -> BusConfigBuilder {
        BusConfigBuilder::new()
    }

    /// Checks that the address fits in 7 bits and the clock is non-zero.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.address > 0x7F {
            return Err(ConfigError::InvalidAddress);
        }

        if self.clock_speed_hz == 0 {
            return Err(ConfigError::InvalidClockSpeed);
        }

        Ok(())
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            bus_id: DEFAULT_BUS_ID,
            address: DEFAULT_ADDRESS,
            clock_speed_hz: DEFAULT_CLOCK_SPEED_HZ,
            external: false,
            retry: RetryPolicy::default(),
        }
    }
}

/// Builder for [`BusConfig`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct BusConfigBuilder {
    config: BusConfig,
}

impl BusConfigBuilder {
    /// Creates a new builder seeded with [`BusConfig::default()`].
    pub fn new() -> Self {
        Self {
            config: BusConfig::default(),
        }
    }

    /// Selects the physical bus.
    pub fn bus_id(mut self, bus_id: u8) -> Self {
        self.config.bus_id = bus_id;
        self
    }

    /// Overrides the 7-bit device address.
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Overrides the bus clock.
    pub fn clock_speed_hz(mut self, clock_speed_hz: u32) -> Self {
        self.config.clock_speed_hz = clock_speed_hz;
        self
    }

    /// Marks the sensor as living on an external connector.
    pub fn external(mut self, external: bool) -> Self {
        self.config.external = external;
        self
    }

    /// Overrides both retry budgets.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.config.retry = retry;
        self
    }

    /// Finalizes the builder and returns the [`BusConfig`].
    pub fn build(self) -> BusConfig {
        self.config
    }
}

impl Default for BusConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors generated while verifying a [`BusConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address does not fit in 7 bits.
    InvalidAddress,
    /// Bus clock of zero hertz.
    InvalidClockSpeed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_rm3100_wiring() {
        let config = BusConfig::default();
        assert_eq!(config.bus_id, 1);
        assert_eq!(config.address, 0x20);
        assert_eq!(config.clock_speed_hz, 400_000);
        assert!(!config.external);
        assert_eq!(config.retry, RetryPolicy { probe: 10, steady: 2 });
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = BusConfig::new()
            .bus_id(3)
            .address(0x23)
            .clock_speed_hz(100_000)
            .external(true)
            .retry(RetryPolicy { probe: 5, steady: 0 })
            .build();

        assert_eq!(config.bus_id, 3);
        assert_eq!(config.address, 0x23);
        assert_eq!(config.clock_speed_hz, 100_000);
        assert!(config.external);
        assert_eq!(config.retry.probe, 5);
        assert_eq!(config.retry.steady, 0);
    }

    #[test]
    fn validate_rejects_eight_bit_address() {
        let config = BusConfig::new().address(0x80).build();
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress));
    }

    #[test]
    fn validate_rejects_zero_clock() {
        let config = BusConfig::new().clock_speed_hz(0).build();
        assert_eq!(config.validate(), Err(ConfigError::InvalidClockSpeed));
    }
}
