//! Per-capability availability tracking.
//!
//! Each capability is a one-way latch: it is granted at most once, after its
//! backing driver produced a valid reading during initialization, and there
//! is deliberately no way to revoke it afterwards. A transient read failure
//! mid-run degrades the *value* (to its sentinel), never the availability.

/// A capability the hub may offer, one per sensor quantity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Initialization completed. Granted last, gates scheduling and encoding
    /// as a whole. A hub with zero working sensors is still configured.
    Configured,
    /// The real-time clock answered a sync request.
    ClockSynced,
    /// Temperature from the clock chip's internal register.
    TemperatureFromClock,
    /// Temperature from the combined probe.
    TemperatureFromProbe,
    /// Humidity from the combined probe.
    HumidityFromProbe,
    /// The light sensor produced a plausible luminosity reading.
    LightSensorReady,
    /// The barometer responded.
    BarometerReady,
    /// Temperature from the barometer's own channel.
    TemperatureFromBarometer,
}

/// The set of granted capabilities.
///
/// Stored as independent booleans rather than a packed bit field so each
/// flag is addressable by name. The never-revoked invariant is enforced by
/// the API surface: [`Availability::grant`] is the sole mutator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Availability {
    configured: bool,
    clock_synced: bool,
    temperature_from_clock: bool,
    temperature_from_probe: bool,
    humidity_from_probe: bool,
    light_sensor_ready: bool,
    barometer_ready: bool,
    temperature_from_barometer: bool,
}

impl Availability {
    /// All capabilities absent.
    pub const fn new() -> Self {
        Self {
            configured: false,
            clock_synced: false,
            temperature_from_clock: false,
            temperature_from_probe: false,
            humidity_from_probe: false,
            light_sensor_ready: false,
            barometer_ready: false,
            temperature_from_barometer: false,
        }
    }

    /// Grant a capability. Granting is idempotent and irreversible.
    pub fn grant(&mut self, capability: Capability) {
        match capability {
            Capability::Configured => self.configured = true,
            Capability::ClockSynced => self.clock_synced = true,
            Capability::TemperatureFromClock => self.temperature_from_clock = true,
            Capability::TemperatureFromProbe => self.temperature_from_probe = true,
            Capability::HumidityFromProbe => self.humidity_from_probe = true,
            Capability::LightSensorReady => self.light_sensor_ready = true,
            Capability::BarometerReady => self.barometer_ready = true,
            Capability::TemperatureFromBarometer => self.temperature_from_barometer = true,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Configured => self.configured,
            Capability::ClockSynced => self.clock_synced,
            Capability::TemperatureFromClock => self.temperature_from_clock,
            Capability::TemperatureFromProbe => self.temperature_from_probe,
            Capability::HumidityFromProbe => self.humidity_from_probe,
            Capability::LightSensorReady => self.light_sensor_ready,
            Capability::BarometerReady => self.barometer_ready,
            Capability::TemperatureFromBarometer => self.temperature_from_barometer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Capability; 8] = [
        Capability::Configured,
        Capability::ClockSynced,
        Capability::TemperatureFromClock,
        Capability::TemperatureFromProbe,
        Capability::HumidityFromProbe,
        Capability::LightSensorReady,
        Capability::BarometerReady,
        Capability::TemperatureFromBarometer,
    ];

    #[test]
    fn test_starts_with_nothing_granted() {
        let availability = Availability::new();
        for capability in ALL {
            assert!(
                !availability.has(capability),
                "capability {:?} must start ungranted",
                capability
            );
        }
    }

    #[test]
    fn test_grant_is_independent_per_capability() {
        let mut availability = Availability::new();
        availability.grant(Capability::HumidityFromProbe);

        assert!(availability.has(Capability::HumidityFromProbe));
        for capability in ALL {
            if capability != Capability::HumidityFromProbe {
                assert!(!availability.has(capability));
            }
        }
    }

    #[test]
    fn test_grant_is_idempotent() {
        let mut availability = Availability::new();
        availability.grant(Capability::BarometerReady);
        availability.grant(Capability::BarometerReady);
        assert!(availability.has(Capability::BarometerReady));
    }

    #[test]
    fn test_all_capabilities_can_be_granted() {
        let mut availability = Availability::new();
        for capability in ALL {
            availability.grant(capability);
        }
        for capability in ALL {
            assert!(availability.has(capability));
        }
    }
}
