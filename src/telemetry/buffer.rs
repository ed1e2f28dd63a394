//! Caller-owned output buffer for wire frames.

/// Write side of the radio output buffer.
///
/// Every write either appends the whole value or appends nothing and returns
/// `false`; partial writes are not possible. The encoder additionally checks
/// [`free_capacity`](TelemetryBuffer::free_capacity) before starting a frame
/// so a marker/tag pair never lands without its payload.
pub trait TelemetryBuffer {
    /// Bytes still available before the buffer is full.
    fn free_capacity(&self) -> usize;

    fn write_byte(&mut self, byte: u8) -> bool;

    /// Append a 4-byte big-endian signed integer.
    fn write_fixed_int(&mut self, value: i32) -> bool;

    /// Append an 8-byte big-endian signed integer (the wide pressure path).
    fn write_fixed_long(&mut self, value: i64) -> bool;

    /// Append a 4-byte big-endian timestamp in unix seconds.
    fn write_timestamp(&mut self, seconds: u32) -> bool;
}

/// Fixed-capacity frame buffer backed by `heapless::Vec`.
///
/// `N` is chosen by the host around its radio payload limit. The hub only
/// borrows the buffer for the duration of one encoding pass; draining it
/// into the radio is the host's business.
#[derive(Debug, Default)]
pub struct FrameBuffer<const N: usize> {
    data: heapless::Vec<u8, N>,
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new() -> Self {
        Self {
            data: heapless::Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Drop all buffered bytes, e.g. after handing them to the radio.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<const N: usize> TelemetryBuffer for FrameBuffer<N> {
    fn free_capacity(&self) -> usize {
        N - self.data.len()
    }

    fn write_byte(&mut self, byte: u8) -> bool {
        self.data.push(byte).is_ok()
    }

    fn write_fixed_int(&mut self, value: i32) -> bool {
        self.data.extend_from_slice(&value.to_be_bytes()).is_ok()
    }

    fn write_fixed_long(&mut self, value: i64) -> bool {
        self.data.extend_from_slice(&value.to_be_bytes()).is_ok()
    }

    fn write_timestamp(&mut self, seconds: u32) -> bool {
        self.data.extend_from_slice(&seconds.to_be_bytes()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_capacity_tracks_writes() {
        let mut buffer = FrameBuffer::<8>::new();
        assert_eq!(buffer.free_capacity(), 8);
        assert!(buffer.write_byte(0xAA));
        assert_eq!(buffer.free_capacity(), 7);
        assert!(buffer.write_fixed_int(1));
        assert_eq!(buffer.free_capacity(), 3);
    }

    #[test]
    fn test_fixed_int_is_big_endian() {
        let mut buffer = FrameBuffer::<4>::new();
        assert!(buffer.write_fixed_int(0x0102_0304));
        assert_eq!(buffer.as_bytes(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_full_buffer_rejects_writes() {
        let mut buffer = FrameBuffer::<2>::new();
        assert!(buffer.write_byte(1));
        assert!(buffer.write_byte(2));
        assert!(!buffer.write_byte(3));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_oversized_write_appends_nothing() {
        let mut buffer = FrameBuffer::<3>::new();
        assert!(!buffer.write_fixed_int(42), "4 bytes must not fit in 3");
        assert!(buffer.is_empty(), "failed write must leave no partial bytes");
    }

    #[test]
    fn test_clear_resets_capacity() {
        let mut buffer = FrameBuffer::<4>::new();
        buffer.write_fixed_int(7);
        buffer.clear();
        assert_eq!(buffer.free_capacity(), 4);
        assert!(buffer.is_empty());
    }
}
