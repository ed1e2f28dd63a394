use serde::{Deserialize, Serialize};

/// Selects which sensor families and features the hub operates.
///
/// The hardware mix varies between deployed nodes; a family that is disabled
/// here is never probed at initialization, never scheduled, and never
/// encoded, regardless of what hardware is actually fitted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct HubConfig {
    /// Real-time clock (time sync plus the clock's own temperature register).
    pub enable_clock: bool,
    /// Combined temperature/humidity probe.
    pub enable_probe: bool,
    /// Multi-channel light sensor (lux, infrared, visible, full spectrum).
    pub enable_light: bool,
    /// Barometric pressure sensor (pressure plus its temperature channel).
    pub enable_barometer: bool,
    /// Dew point derivation from probe temperature and humidity.
    pub enable_dew_point: bool,
    /// Binary telemetry encoding for the radio link.
    pub enable_radio: bool,
}

impl HubConfig {
    /// A configuration with every family and feature enabled.
    pub const fn all() -> Self {
        Self {
            enable_clock: true,
            enable_probe: true,
            enable_light: true,
            enable_barometer: true,
            enable_dew_point: true,
            enable_radio: true,
        }
    }
}
