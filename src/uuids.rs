//! GATT identifier catalog
//!
//! The 16-bit assigned numbers this crate cares about, grouped by kind.
//! The transport layer uses these to filter service discovery and to pick
//! the characteristics to read or subscribe to; nothing here changes at
//! runtime.

use uuid::Uuid;

/// The Bluetooth Base UUID. 16-bit assigned numbers map into it as
/// `0000xxxx-0000-1000-8000-00805f9b34fb`.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

pub const fn bluetooth_uuid_from_u16(short: u16) -> Uuid {
    Uuid::from_u128(((short as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// A symbolic GATT identifier with a fixed 16-bit assigned number.
///
/// One mapping shared by every identifier kind, so each kind only has to
/// supply its assigned numbers.
pub trait GattId: Copy {
    fn uuid16(self) -> u16;

    /// Full 128-bit UUID, Base-UUID expanded.
    fn uuid(self) -> Uuid {
        bluetooth_uuid_from_u16(self.uuid16())
    }

    /// The `"0x2A37"` form used in the SIG assigned-numbers listings.
    fn uuid_string(self) -> String {
        format!("0x{:04X}", self.uuid16())
    }
}

/// Services the heart rate monitor exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    HeartRate,
    DeviceInformation,
    RunningSpeedCadence,
}

impl GattId for Service {
    fn uuid16(self) -> u16 {
        match self {
            Self::HeartRate => 0x180D,
            Self::DeviceInformation => 0x180A,
            Self::RunningSpeedCadence => 0x1814,
        }
    }
}

/// Characteristics within those services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Characteristic {
    // Heart Rate service
    HeartRateMeasurement,
    BodySensorLocation,
    // Device Information service
    ManufacturerName,
    ModelNumber,
    HardwareRevision,
}

impl GattId for Characteristic {
    fn uuid16(self) -> u16 {
        match self {
            Self::HeartRateMeasurement => 0x2A37,
            Self::BodySensorLocation => 0x2A38,
            Self::ManufacturerName => 0x2A29,
            Self::ModelNumber => 0x2A24,
            Self::HardwareRevision => 0x2A27,
        }
    }
}

/// Expand a batch of identifiers, the shape discovery filters want.
pub fn uuids<T: GattId>(ids: &[T]) -> Vec<Uuid> {
    ids.iter().map(|id| id.uuid()).collect()
}
