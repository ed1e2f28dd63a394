//! Serialization of the current readings into wire frames.

use crate::availability::{Availability, Capability};
use crate::readings::Readings;

use super::{
    LONG_FRAME_LEN, SCALAR_FRAME_LEN, SENSOR_MARKER, TIME_FRAME_LEN, TIME_MARKER, TelemetryBuffer,
    fixed_point, tag,
};

/// Serialize every currently valid reading into `buffer`, in the fixed
/// family order: time, clock temperature, probe temperature, probe humidity,
/// light (lux, infrared, visible, full spectrum), barometer temperature,
/// pressure, dew point.
///
/// A family whose availability flag is absent is skipped entirely, as is any
/// slot still holding its sentinel. A field that no longer fits in the
/// buffer is skipped silently — no truncation, no partial frame, no error;
/// later (smaller) fields are still attempted. The receiver cannot tell a
/// skipped-for-space field from an unavailable one; that ambiguity is part
/// of the protocol.
///
/// Returns the number of fields written.
pub fn encode_all(
    availability: &Availability,
    readings: &Readings,
    buffer: &mut impl TelemetryBuffer,
) -> u8 {
    let mut written = 0;

    if availability.has(Capability::ClockSynced) && readings.timestamp != 0 {
        written += put_time(buffer, readings.timestamp) as u8;
    }
    if availability.has(Capability::TemperatureFromClock) && !readings.clock_temperature.is_nan() {
        written += put_scalar(
            buffer,
            tag::TEMPERATURE_CLOCK,
            fixed_point(readings.clock_temperature),
        ) as u8;
    }
    if availability.has(Capability::TemperatureFromProbe) && !readings.probe_temperature.is_nan() {
        written += put_scalar(
            buffer,
            tag::TEMPERATURE_PROBE,
            fixed_point(readings.probe_temperature),
        ) as u8;
    }
    if availability.has(Capability::HumidityFromProbe) && !readings.probe_humidity.is_nan() {
        written += put_scalar(buffer, tag::HUMIDITY, fixed_point(readings.probe_humidity)) as u8;
    }
    if availability.has(Capability::LightSensorReady) {
        // All four channels travel together; integer channels use the same
        // ×100 wire scale as the quantized floats.
        written += put_scalar(buffer, tag::LUX, readings.lux as i32 * 100) as u8;
        written += put_scalar(buffer, tag::INFRARED, readings.infrared as i32 * 100) as u8;
        written += put_scalar(buffer, tag::VISIBLE, readings.visible as i32 * 100) as u8;
        written += put_scalar(
            buffer,
            tag::FULL_SPECTRUM,
            readings.full_spectrum as i32 * 100,
        ) as u8;
    }
    if availability.has(Capability::BarometerReady) {
        if availability.has(Capability::TemperatureFromBarometer)
            && !readings.barometer_temperature.is_nan()
        {
            written += put_scalar(
                buffer,
                tag::TEMPERATURE_BAROMETER,
                fixed_point(readings.barometer_temperature),
            ) as u8;
        }
        if readings.pressure != 0 {
            written += put_long(buffer, tag::PRESSURE, readings.pressure) as u8;
        }
    }
    if availability.has(Capability::TemperatureFromProbe)
        && availability.has(Capability::HumidityFromProbe)
        && !readings.dew_point.is_nan()
    {
        written += put_scalar(buffer, tag::DEW_POINT, fixed_point(readings.dew_point)) as u8;
    }

    written
}

fn put_time(buffer: &mut impl TelemetryBuffer, seconds: u32) -> bool {
    if buffer.free_capacity() < TIME_FRAME_LEN {
        return false;
    }
    buffer.write_byte(TIME_MARKER) && buffer.write_timestamp(seconds)
}

fn put_scalar(buffer: &mut impl TelemetryBuffer, tag: u8, value: i32) -> bool {
    if buffer.free_capacity() < SCALAR_FRAME_LEN {
        return false;
    }
    buffer.write_byte(SENSOR_MARKER) && buffer.write_byte(tag) && buffer.write_fixed_int(value)
}

fn put_long(buffer: &mut impl TelemetryBuffer, tag: u8, value: i64) -> bool {
    if buffer.free_capacity() < LONG_FRAME_LEN {
        return false;
    }
    buffer.write_byte(SENSOR_MARKER) && buffer.write_byte(tag) && buffer.write_fixed_long(value)
}
