//! Binary telemetry wire format for the serial radio link.
//!
//! Each reading travels as one self-describing frame: a marker byte, a
//! sensor-type tag and a fixed-width big-endian payload. The link is lossy
//! but framed; there is no checksum, no retry and no schema negotiation —
//! the tag byte alone tells the remote peer what follows.
//!
//! Frame layouts:
//!
//! | frame  | bytes | layout                                  |
//! |--------|-------|-----------------------------------------|
//! | time   | 5     | `0x10`, u32 unix seconds                |
//! | scalar | 6     | `0x40`, tag, i32 value scaled by 100    |
//! | long   | 10    | `0x40`, tag, i64 value (pressure, Pa)   |
//!
//! Floating readings are quantized to fixed point by multiplying by
//! [`FIXED_POINT_SCALE`] and truncating toward zero; two decimal digits
//! survive the wire. Pressure magnitudes exceed the scalar range and use the
//! wide payload instead.

mod buffer;
mod decode;
mod encode;

pub use buffer::{FrameBuffer, TelemetryBuffer};
pub use decode::{Frame, FrameIter, decode_frames};
pub use encode::encode_all;

/// Marker opening a time frame. The time frame carries no tag byte; the
/// marker itself identifies the payload.
pub const TIME_MARKER: u8 = 0x10;

/// Marker opening a scalar or long sensor-value frame.
pub const SENSOR_MARKER: u8 = 0x40;

/// Fixed-point scale for floating readings: two decimal digits.
pub const FIXED_POINT_SCALE: f32 = 100.0;

/// Sensor-type tag values.
///
/// The high bits identify the quantity, the low bits the physical source, so
/// the three temperature channels stay distinguishable on the wire.
pub mod tag {
    pub const TEMPERATURE_CLOCK: u8 = 0x01 << 3 | 0x01;
    pub const TEMPERATURE_PROBE: u8 = 0x01 << 3 | 0x02;
    pub const TEMPERATURE_BAROMETER: u8 = 0x01 << 3 | 0x03;
    pub const HUMIDITY: u8 = 0x03 << 3 | 0x01;
    pub const DEW_POINT: u8 = 0x04 << 3 | 0x01;
    pub const LUX: u8 = 0x08 << 3 | 0x01;
    pub const INFRARED: u8 = 0x09 << 3 | 0x01;
    pub const VISIBLE: u8 = 0x0A << 3 | 0x01;
    pub const FULL_SPECTRUM: u8 = 0x0B << 3 | 0x01;
    pub const PRESSURE: u8 = 0x0C << 3 | 0x01;
}

/// Whole-frame sizes, checked before any byte is written so a frame is never
/// half-emitted into a nearly full buffer.
pub(crate) const TIME_FRAME_LEN: usize = 5;
pub(crate) const SCALAR_FRAME_LEN: usize = 6;
pub(crate) const LONG_FRAME_LEN: usize = 10;

/// Quantize a floating reading to wire fixed point (×100, truncated toward
/// zero).
pub fn fixed_point(value: f32) -> i32 {
    (value * FIXED_POINT_SCALE) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_truncates_not_rounds() {
        assert_eq!(fixed_point(23.456), 2345);
        assert_eq!(fixed_point(23.459), 2345);
    }

    #[test]
    fn test_fixed_point_truncates_toward_zero_for_negatives() {
        assert_eq!(fixed_point(-1.237), -123);
    }

    #[test]
    fn test_fixed_point_exact_values() {
        assert_eq!(fixed_point(0.0), 0);
        assert_eq!(fixed_point(100.0), 10000);
    }

    #[test]
    fn test_temperature_tags_share_quantity_bits_but_differ() {
        assert_eq!(tag::TEMPERATURE_CLOCK & !0x07, tag::TEMPERATURE_PROBE & !0x07);
        assert_ne!(tag::TEMPERATURE_CLOCK, tag::TEMPERATURE_PROBE);
        assert_ne!(tag::TEMPERATURE_PROBE, tag::TEMPERATURE_BAROMETER);
    }
}
