//! Last-known sensor values.

/// One slot per sensor quantity, holding the most recent valid reading.
///
/// Sentinels mark "no valid reading yet": NaN for floating quantities
/// (temperatures can legitimately sit near zero, so zero cannot serve) and
/// zero for the integer quantities whose domain permits it (pressure is
/// never legitimately zero; a zero light channel is a real dark reading and
/// is simply trusted once the light sensor is available).
///
/// Slots are mutated only from inside scheduler ticks; the encoder and the
/// relay collaborator read them through shared references.
#[derive(Debug, Clone, Copy)]
pub struct Readings {
    /// Wall-clock time in unix seconds.
    pub timestamp: u32,
    /// Temperature from the clock chip's register, °C.
    pub clock_temperature: f32,
    /// Temperature from the combined probe, °C.
    pub probe_temperature: f32,
    /// Relative humidity from the combined probe, %.
    pub probe_humidity: f32,
    /// Temperature from the barometer's channel, °C.
    pub barometer_temperature: f32,
    /// Absolute pressure in pascals.
    pub pressure: i64,
    /// Calculated illuminance, lux.
    pub lux: u16,
    /// Raw infrared channel.
    pub infrared: u16,
    /// Visible light, derived as `full - infrared` clamped at zero.
    pub visible: u16,
    /// Raw full-spectrum channel.
    pub full_spectrum: u16,
    /// Derived dew point, °C.
    pub dew_point: f32,
}

impl Readings {
    pub const fn new() -> Self {
        Self {
            timestamp: 0,
            clock_temperature: f32::NAN,
            probe_temperature: f32::NAN,
            probe_humidity: f32::NAN,
            barometer_temperature: f32::NAN,
            pressure: 0,
            lux: 0,
            infrared: 0,
            visible: 0,
            full_spectrum: 0,
            dew_point: f32::NAN,
        }
    }
}

impl Default for Readings {
    fn default() -> Self {
        Self::new()
    }
}

/// Dew point from temperature (°C) and relative humidity (%), NOAA method.
///
/// Computes the saturation vapor pressure ratio first, then inverts the
/// vapor pressure relation. Slower than the Magnus approximation but
/// accurate across the whole greenhouse range.
pub fn dew_point(celsius: f32, humidity: f32) -> f32 {
    let celsius = celsius as f64;
    let humidity = humidity as f64;

    // Saturation vapor pressure, Goff-Gratch style series.
    let ratio = 373.15 / (273.15 + celsius);
    let mut rhs = -7.90298 * (ratio - 1.0);
    rhs += 5.02808 * libm::log10(ratio);
    rhs += -1.3816e-7 * (libm::pow(10.0, 11.344 * (1.0 - 1.0 / ratio)) - 1.0);
    rhs += 8.1328e-3 * (libm::pow(10.0, -3.49149 * (ratio - 1.0)) - 1.0);
    rhs += libm::log10(1013.246);

    // The -3 shifts hPa to the humidity-scaled vapor pressure.
    let vapor_pressure = libm::pow(10.0, rhs - 3.0) * humidity;

    let t = libm::log(vapor_pressure / 0.61078);
    ((241.88 * t) / (17.558 - t)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_readings_hold_sentinels() {
        let readings = Readings::new();
        assert_eq!(readings.timestamp, 0);
        assert!(readings.clock_temperature.is_nan());
        assert!(readings.probe_temperature.is_nan());
        assert!(readings.probe_humidity.is_nan());
        assert!(readings.barometer_temperature.is_nan());
        assert!(readings.dew_point.is_nan());
        assert_eq!(readings.pressure, 0);
        assert_eq!(readings.lux, 0);
    }

    #[test]
    fn test_dew_point_saturated_air_equals_temperature() {
        // At 100% humidity the dew point is the air temperature itself.
        let dp = dew_point(20.0, 100.0);
        assert!((dp - 20.0).abs() < 0.1, "expected ~20.0, got {}", dp);
    }

    #[test]
    fn test_dew_point_dry_air_is_well_below_temperature() {
        let dp = dew_point(25.0, 30.0);
        assert!(dp < 10.0, "expected well under 10 °C, got {}", dp);
        assert!(dp > 0.0, "expected above freezing, got {}", dp);
    }

    #[test]
    fn test_dew_point_monotonic_in_humidity() {
        let low = dew_point(22.0, 40.0);
        let high = dew_point(22.0, 80.0);
        assert!(low < high);
    }
}
