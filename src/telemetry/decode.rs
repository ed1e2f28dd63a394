//! Host-side parser for the wire format.
//!
//! The remote end of the radio link receives a concatenation of frames with
//! no outer length or checksum. Parsing walks the stream frame by frame;
//! anything unrecognized or truncated ends iteration, which matches the
//! lossy-but-framed link model (a damaged tail is dropped, not repaired).

use super::{SENSOR_MARKER, TIME_MARKER, tag};

/// One decoded wire frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Timestamp in unix seconds.
    Time(u32),
    /// A quantized scalar reading (value is ×100 fixed point).
    Scalar { tag: u8, value: i32 },
    /// A wide integer reading (pressure in pascals).
    Long { tag: u8, value: i64 },
}

/// Iterator over the frames of a received byte stream.
pub struct FrameIter<'a> {
    bytes: &'a [u8],
}

/// Parse a received byte stream into frames.
pub fn decode_frames(bytes: &[u8]) -> FrameIter<'_> {
    FrameIter { bytes }
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let (&marker, rest) = self.bytes.split_first()?;
        match marker {
            TIME_MARKER => {
                let payload: [u8; 4] = rest.get(..4)?.try_into().ok()?;
                self.bytes = &rest[4..];
                Some(Frame::Time(u32::from_be_bytes(payload)))
            }
            SENSOR_MARKER => {
                let (&frame_tag, rest) = rest.split_first()?;
                // The pressure tag is the only one carrying the wide payload.
                if frame_tag == tag::PRESSURE {
                    let payload: [u8; 8] = rest.get(..8)?.try_into().ok()?;
                    self.bytes = &rest[8..];
                    Some(Frame::Long {
                        tag: frame_tag,
                        value: i64::from_be_bytes(payload),
                    })
                } else {
                    let payload: [u8; 4] = rest.get(..4)?.try_into().ok()?;
                    self.bytes = &rest[4..];
                    Some(Frame::Scalar {
                        tag: frame_tag,
                        value: i32::from_be_bytes(payload),
                    })
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_mixed_stream() {
        let mut bytes = heapless::Vec::<u8, 32>::new();
        bytes.push(TIME_MARKER).unwrap();
        bytes.extend_from_slice(&1_700_000_000_u32.to_be_bytes()).unwrap();
        bytes.push(SENSOR_MARKER).unwrap();
        bytes.push(tag::HUMIDITY).unwrap();
        bytes.extend_from_slice(&4870_i32.to_be_bytes()).unwrap();
        bytes.push(SENSOR_MARKER).unwrap();
        bytes.push(tag::PRESSURE).unwrap();
        bytes.extend_from_slice(&101_325_i64.to_be_bytes()).unwrap();

        let mut frames = decode_frames(&bytes);
        assert_eq!(frames.next(), Some(Frame::Time(1_700_000_000)));
        assert_eq!(
            frames.next(),
            Some(Frame::Scalar {
                tag: tag::HUMIDITY,
                value: 4870
            })
        );
        assert_eq!(
            frames.next(),
            Some(Frame::Long {
                tag: tag::PRESSURE,
                value: 101_325
            })
        );
        assert_eq!(frames.next(), None);
    }

    #[test]
    fn test_truncated_tail_ends_iteration() {
        let bytes = [SENSOR_MARKER, tag::LUX, 0x00, 0x01];
        let mut frames = decode_frames(&bytes);
        assert_eq!(frames.next(), None);
    }

    #[test]
    fn test_unknown_marker_ends_iteration() {
        let bytes = [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut frames = decode_frames(&bytes);
        assert_eq!(frames.next(), None);
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        assert_eq!(decode_frames(&[]).next(), None);
    }
}
