//! States processing fixed-size payloads.

use zerocopy::FromBytes;

use crate::record::HeartRate;

/// State token to decode a measurement result or push.
#[derive(Debug)]
pub struct Measurement(pub(super) ());

impl Measurement {
    /// Transition out of the frame by decoding a measurement.
    ///
    /// Returns the measurement. Temperature is reported by the ring as a signed
    /// count of hundredths of a degree Celsius.
    pub fn advance(self, r: [u8; 6]) -> HeartRate {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct MeasurementPayload {
            wearing_status: u8,
            heart_rate: u8,
            hrv: u8,
            stress_index: u8,
            temperature: [u8; 2],
        }

        let MeasurementPayload {
            wearing_status,
            heart_rate,
            hrv,
            stress_index,
            temperature,
        } = zerocopy::transmute!(r);

        HeartRate {
            wearing_status,
            heart_rate,
            hrv,
            stress_index,
            temperature: f64::from(i16::from_le_bytes(temperature)) * 0.01,
        }
    }
}

/// State token to decode acquisition progress.
#[derive(Debug)]
pub struct Progress(pub(super) ());

impl Progress {
    /// Transition out of the frame by decoding acquisition progress.
    ///
    /// Returns the completed percentage.
    pub fn advance(self, r: [u8; 1]) -> u8 {
        r[0]
    }
}
