//! Driver and collaborator traits consumed by the hub.
//!
//! The hub owns no hardware knowledge of its own: each physical sensor family
//! is represented by a small trait mirroring the vendor driver's
//! begin/read contract, and concrete adapters are injected at construction.
//! This keeps the scheduling and encoding logic host-testable with fakes.

use thiserror_no_std::Error;

/// Errors reported by sensor driver adapters.
///
/// Every error is non-fatal to the hub: a failure at initialization leaves
/// the family unavailable for the run, a failure mid-run degrades that
/// reading to its sentinel until the next round-robin turn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The device did not respond to its startup sequence.
    #[error("{sensor} did not respond during startup")]
    StartupFailed { sensor: &'static str },
    /// The device answered but produced no usable reading.
    #[error("{sensor} returned no valid reading")]
    ReadFailed { sensor: &'static str },
    /// No driver is fitted in this slot.
    #[error("no driver fitted")]
    NotFitted,
}

/// Real-time clock adapter (e.g. a DS3232-class chip).
pub trait ClockDriver {
    /// Synchronize with the clock hardware. Called once at initialization;
    /// a failure here permanently disables the time-dependent capabilities
    /// for the run.
    fn sync(&mut self) -> Result<(), SensorError>;

    /// Current wall-clock time in unix seconds.
    fn now(&mut self) -> Result<u32, SensorError>;

    /// The clock chip's internal temperature register, in degrees Celsius.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;
}

/// Combined temperature/humidity probe adapter (e.g. a DHT22-class device).
pub trait ProbeDriver {
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Temperature in degrees Celsius. Adapters wrapping NaN-signalling
    /// hardware may also return `Ok(NaN)`; the hub treats that as invalid.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Relative humidity in percent.
    fn read_humidity(&mut self) -> Result<f32, SensorError>;
}

/// One shot of the light sensor's channels.
///
/// `lux` is the adapter's own lux calculation from the raw channels; the
/// visible channel is derived by the hub (`full - infrared`, clamped at 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Luminosity {
    pub lux: u16,
    pub full: u16,
    pub infrared: u16,
}

/// Multi-channel light sensor adapter (e.g. a TSL2561-class device).
pub trait LightDriver {
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Read all channels in one transaction.
    fn read_luminosity(&mut self) -> Result<Luminosity, SensorError>;
}

/// Barometric pressure sensor adapter (e.g. a BMP180-class device).
pub trait BarometerDriver {
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Absolute pressure in pascals.
    fn read_pressure(&mut self) -> Result<f32, SensorError>;

    /// The barometer's temperature channel, in degrees Celsius.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;
}

/// Downstream actuator/relay collaborator.
///
/// Readings are pushed one way after each scheduler pass; there is no
/// acknowledgment and no retry.
pub trait RelayControl {
    fn is_ready(&self) -> bool;
    fn set_temperature(&mut self, celsius: f32);
    fn set_humidity(&mut self, percent: f32);
    fn set_light(&mut self, lux: u16);
}

/// Placeholder for an unfitted driver slot.
///
/// Every operation fails with [`SensorError::NotFitted`], so the
/// corresponding capability is simply never granted. Use this for hub type
/// parameters whose family is disabled in the configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDriver;

impl ClockDriver for NoDriver {
    fn sync(&mut self) -> Result<(), SensorError> {
        Err(SensorError::NotFitted)
    }

    fn now(&mut self) -> Result<u32, SensorError> {
        Err(SensorError::NotFitted)
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        Err(SensorError::NotFitted)
    }
}

impl ProbeDriver for NoDriver {
    fn begin(&mut self) -> Result<(), SensorError> {
        Err(SensorError::NotFitted)
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        Err(SensorError::NotFitted)
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        Err(SensorError::NotFitted)
    }
}

impl LightDriver for NoDriver {
    fn begin(&mut self) -> Result<(), SensorError> {
        Err(SensorError::NotFitted)
    }

    fn read_luminosity(&mut self) -> Result<Luminosity, SensorError> {
        Err(SensorError::NotFitted)
    }
}

impl BarometerDriver for NoDriver {
    fn begin(&mut self) -> Result<(), SensorError> {
        Err(SensorError::NotFitted)
    }

    fn read_pressure(&mut self) -> Result<f32, SensorError> {
        Err(SensorError::NotFitted)
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        Err(SensorError::NotFitted)
    }
}
