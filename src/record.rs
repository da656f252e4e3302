//! Records decoded from heart-rate frames.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zerocopy::TryFromBytes;

/// One decoded heart-rate frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Record {
    /// Result of a requested measurement.
    HeartRateResult(HeartRate),
    /// Acquisition progress, as a percentage.
    Progress(u8),
    /// PPG waveform and accelerometer samples.
    Waveform(Waveform),
    /// RR interval samples.
    RrInterval(RrIntervals),
    /// Measurement pushed by the ring without a request.
    HeartRatePush(HeartRate),
}

/// A heart-rate measurement, either requested or pushed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeartRate {
    /// Raw wearing status. See [`HeartRate::wearing_status`].
    pub wearing_status: u8,
    /// Beats per minute, or 0 if invalid.
    pub heart_rate: u8,
    /// Heart rate variability in milliseconds, or 0 if invalid.
    pub hrv: u8,
    /// Mental stress index reported by the ring.
    pub stress_index: u8,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl HeartRate {
    /// The wearing status, if the ring reported a known value.
    pub fn wearing_status(&self) -> Option<WearingStatus> {
        zerocopy::try_transmute!(self.wearing_status).ok()
    }

    /// Beats per minute, if valid.
    pub fn heart_rate_bpm(&self) -> Option<u8> {
        (self.heart_rate != 0).then_some(self.heart_rate)
    }

    /// Heart rate variability in milliseconds, if valid.
    pub fn hrv_ms(&self) -> Option<u8> {
        (self.hrv != 0).then_some(self.hrv)
    }
}

/// Whether, and how, the ring is being worn.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromBytes)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WearingStatus {
    /// Not on a finger (code 0).
    NotWorn = 0,
    /// On a finger (code 1).
    Worn = 1,
    /// On the charger (code 2).
    Charging = 2,
    /// Acquiring a measurement (code 3).
    Acquiring = 3,
    /// Busy with another task (code 4).
    Busy = 4,
}

/// A run of PPG samples, each paired with an accelerometer reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waveform {
    /// Sequence number of the frame within the measurement.
    pub seq: u8,
    /// Sample count stated by the frame. May exceed the samples present.
    pub declared_count: u8,
    pub ppg: Vec<i32>,
    /// X, Y and Z axes, one reading per entry of `ppg`.
    pub accel: Vec<[i16; 3]>,
}

/// A run of beat-to-beat intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RrIntervals {
    /// Sequence number of the frame within the measurement.
    pub seq: u8,
    /// Sample count stated by the frame. May exceed the samples present.
    pub declared_count: u8,
    /// Milliseconds.
    pub rr: Vec<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heart_rate(wearing_status: u8, heart_rate: u8, hrv: u8) -> HeartRate {
        HeartRate {
            wearing_status,
            heart_rate,
            hrv,
            stress_index: 0,
            temperature: 0.0,
        }
    }

    #[test]
    fn known_wearing_statuses() {
        assert_eq!(heart_rate(0, 0, 0).wearing_status(), Some(WearingStatus::NotWorn));
        assert_eq!(heart_rate(2, 0, 0).wearing_status(), Some(WearingStatus::Charging));
        assert_eq!(heart_rate(4, 0, 0).wearing_status(), Some(WearingStatus::Busy));
        assert_eq!(heart_rate(5, 0, 0).wearing_status(), None);
    }

    #[test]
    fn zero_marks_invalid() {
        let m = heart_rate(1, 0, 0);
        assert_eq!(m.heart_rate_bpm(), None);
        assert_eq!(m.hrv_ms(), None);

        let m = heart_rate(1, 72, 40);
        assert_eq!(m.heart_rate_bpm(), Some(72));
        assert_eq!(m.hrv_ms(), Some(40));
    }
}
