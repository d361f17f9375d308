//! Bluetooth Heart Rate Profile decoding
//!
//! This crate decodes the Heart Rate Measurement characteristic (UUID
//! `0x2A37`) of the Bluetooth SIG Heart Rate service (`0x180D`). The
//! transport layer — adapter management, scanning, connecting, subscribing
//! to notifications — is the embedding application's job; this crate takes
//! the raw notification payload and turns it into a typed
//! [`HeartRateMeasurement`], or a [`DecodeError`] when the payload is
//! truncated.
//!
//! Decoding is pure and synchronous: no I/O, no logging, no shared state,
//! safe to call from any number of threads at once.

pub mod cursor;
pub mod error;
pub mod measurement;
pub mod monitor;
pub mod uuids;

pub use error::DecodeError;
pub use measurement::{HeartRateMeasurement, HrFlags};
pub use monitor::{MonitorState, StateChange, StateTracker};
pub use uuids::{Characteristic, GattId, Service};
