//! Heart Rate Measurement characteristic decoding
//!
//! The payload is a variable-length packet whose layout is driven entirely
//! by the flags byte in front:
//!
//! ```text
//! 16-bit heart rate, energy expended, and zero or more RR-intervals:
//!   +--------+--------+--------+--------+--------+--------+--------+----
//!   | flags  | HR 16 (LE)      | energy (LE)     | RR 0 (LE)       | ...
//!   +--------+--------+--------+--------+--------+--------+--------+----
//!
//! 8-bit heart rate and zero or more RR-intervals:
//!   +--------+--------+--------+--------+----
//!   | flags  | HR 8   | RR 0 (LE)       | ...
//!   +--------+--------+--------+--------+----
//! ```
//!
//! All multi-byte fields are little-endian. The RR-interval region has no
//! length prefix; it runs to the end of the buffer.

use serde::Serialize;

use crate::cursor::Cursor;
use crate::error::DecodeError;

// Flag bits of the first payload byte.
//
//   bit 0    heart rate format, 0 = u8, 1 = u16
//   bits 1-2 sensor contact: 2 = supported/no contact, 3 = supported/in
//            contact, 0 and 1 = feature not supported
//   bit 3    energy expended field present
//   bit 4    RR-interval fields present
//   bits 5-7 reserved, ignored
const SIXTEEN_BIT_VALUE: u8 = 0b0000_0001;
const SENSOR_IN_CONTACT: u8 = 0b0000_0010;
const SENSOR_CONTACT_SUPPORTED: u8 = 0b0000_0100;
const ENERGY_EXPENDED_AVAILABLE: u8 = 0b0000_1000;
const RR_VALUES_PRESENT: u8 = 0b0001_0000;

/// The flags byte of a Heart Rate Measurement payload.
///
/// Stored raw; every query is a cheap bit test. Reserved bits 5-7 are kept
/// as received but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HrFlags(u8);

impl HrFlags {
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    /// Heart rate value is a 16-bit field rather than 8-bit.
    pub fn sixteen_bit_heart_rate(self) -> bool {
        self.0 & SIXTEEN_BIT_VALUE != 0
    }

    /// The sensor implements contact detection at all.
    pub fn contact_supported(self) -> bool {
        self.0 & SENSOR_CONTACT_SUPPORTED != 0
    }

    /// Skin contact detected. Only meaningful when the feature is
    /// supported, so an unsupported sensor always reports `false`.
    pub fn in_contact(self) -> bool {
        self.contact_supported() && self.0 & SENSOR_IN_CONTACT != 0
    }

    pub fn energy_expended_available(self) -> bool {
        self.0 & ENERGY_EXPENDED_AVAILABLE != 0
    }

    pub fn rr_intervals_present(self) -> bool {
        self.0 & RR_VALUES_PRESENT != 0
    }
}

/// One decoded Heart Rate Measurement notification.
///
/// Immutable value type; equality is field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeartRateMeasurement {
    pub flags: HrFlags,
    /// Beats per minute. 8-bit payloads are zero-extended.
    pub heart_rate: u16,
    /// Kilojoules expended since the field was last reset, when reported.
    pub energy_expended: Option<u16>,
    /// Beat-to-beat intervals in 1/1024 s units, when reported. May be
    /// present but empty.
    pub rr_intervals: Option<Vec<u16>>,
}

impl HeartRateMeasurement {
    /// Decode one characteristic-value payload.
    ///
    /// Fails with [`DecodeError::TruncatedBuffer`] whenever the buffer ends
    /// before a field the flags byte promised. Trailing bytes after the
    /// last defined field are ignored unless the RR flag is set, in which
    /// case they must divide evenly into 16-bit interval values.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        let mut cur = Cursor::new(buf);

        let flags = HrFlags::new(cur.read_u8()?);

        let heart_rate = if flags.sixteen_bit_heart_rate() {
            cur.read_u16_le()?
        } else {
            u16::from(cur.read_u8()?)
        };

        let energy_expended = if flags.energy_expended_available() {
            Some(cur.read_u16_le()?)
        } else {
            None
        };

        let rr_intervals = if flags.rr_intervals_present() {
            let mut intervals = Vec::with_capacity(cur.remaining() / 2);
            while !cur.is_empty() {
                intervals.push(cur.read_u16_le()?);
            }
            Some(intervals)
        } else {
            None
        };

        Ok(Self {
            flags,
            heart_rate,
            energy_expended,
            rr_intervals,
        })
    }

    pub fn contact_supported(&self) -> bool {
        self.flags.contact_supported()
    }

    pub fn in_contact(&self) -> bool {
        self.flags.in_contact()
    }

    pub fn sixteen_bit_heart_rate(&self) -> bool {
        self.flags.sixteen_bit_heart_rate()
    }

    pub fn energy_expended_available(&self) -> bool {
        self.flags.energy_expended_available()
    }
}
