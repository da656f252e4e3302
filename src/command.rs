//! Encoders for frames sent to the ring.
//!
//! Outbound sub-commands reuse values that mean something else on inbound
//! frames, so they are defined separately from [`crate::sans::header::sub`].

use core::num::NonZeroU8;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zerocopy::{Immutable, IntoBytes};

use crate::sans::header::{HEART_RATE, Header, SINGLE_FRAME};

/// Request an active measurement.
pub const ACTIVE_MEASURE: u8 = 0x00;

/// Acknowledge a pushed measurement.
pub const PUSH_ACK: u8 = 0x03;

/// Parameters of a requested measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeasurementParams {
    /// Acquisition time in seconds.
    pub duration: u8,
    /// Sampling frequency in hertz.
    pub frequency: u8,
    pub upload_waveform: bool,
    pub upload_progress: bool,
    pub upload_rr_interval: bool,
}

impl Default for MeasurementParams {
    fn default() -> Self {
        Self {
            duration: 30,
            frequency: 50,
            upload_waveform: true,
            upload_progress: true,
            upload_rr_interval: true,
        }
    }
}

/// Produce frame IDs for outbound frames.
///
/// The ring does not echo a requested frame's ID in its responses, so IDs need
/// not be unique.
pub trait FrameIdSource {
    /// Take the next frame ID.
    fn next_frame_id(&mut self) -> NonZeroU8;
}

impl<F: FnMut() -> NonZeroU8> FrameIdSource for F {
    fn next_frame_id(&mut self) -> NonZeroU8 {
        self()
    }
}

/// A frame ID source counting upward from 1, wrapping past 255.
#[derive(Debug, Clone, Default)]
pub struct Sequential(u8);

impl Sequential {
    /// Create a source whose next ID follows `last`.
    pub fn after(last: u8) -> Self {
        Self(last)
    }
}

impl FrameIdSource for Sequential {
    fn next_frame_id(&mut self) -> NonZeroU8 {
        let next = NonZeroU8::new(self.0.wrapping_add(1)).unwrap_or(NonZeroU8::MIN);
        self.0 = next.get();
        next
    }
}

/// Encode a request to start a measurement.
///
/// Takes one frame ID from `ids`.
pub fn start_measurement(params: &MeasurementParams, ids: &mut impl FrameIdSource) -> [u8; 9] {
    #[repr(C)]
    #[derive(IntoBytes, Immutable)]
    struct StartMeasurement {
        header: Header,
        duration: u8,
        frequency: u8,
        upload_waveform: u8,
        upload_progress: u8,
        upload_rr_interval: u8,
    }

    let frame = StartMeasurement {
        header: Header {
            frame_type: SINGLE_FRAME,
            frame_id: ids.next_frame_id().get(),
            cmd: HEART_RATE,
            sub_cmd: ACTIVE_MEASURE,
        },
        duration: params.duration,
        frequency: params.frequency,
        upload_waveform: params.upload_waveform.into(),
        upload_progress: params.upload_progress.into(),
        upload_rr_interval: params.upload_rr_interval.into(),
    };

    tracing::debug!(
        "Start measurement frame {:#04x}: {}s at {}Hz",
        frame.header.frame_id,
        params.duration,
        params.frequency
    );

    zerocopy::transmute!(frame)
}

/// Encode an acknowledgement of a pushed measurement.
///
/// The ring expects this within two seconds of a push, carrying the push's
/// frame ID.
pub fn push_ack(frame_id: u8) -> [u8; 4] {
    zerocopy::transmute!(Header {
        frame_type: SINGLE_FRAME,
        frame_id,
        cmd: HEART_RATE,
        sub_cmd: PUSH_ACK,
    })
}
