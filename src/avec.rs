//! Convenience interfaces for decoding whole frames.
//!
//! The functions in this module suit a transport that hands over one complete
//! notification payload at a time. [`decode`] returns the record a frame
//! carries, if any; [`publish`] routes it to a [`Handler`] instead.
//!
//! Frames from other command families, unknown sub-commands and frames too
//! short for their layout all produce nothing. Use [`try_decode`] to learn
//! which of these occurred.

pub mod slice;

pub use slice::decode as try_decode;

use crate::record::{HeartRate, Record, RrIntervals, Waveform};

/// Decode the record carried by a single frame, if any.
pub fn decode(r: &[u8]) -> Option<Record> {
    match slice::decode(r) {
        Ok((_, record)) => Some(record),
        Err(err) => {
            tracing::trace!("Ignored frame of {} bytes: {}", r.len(), err);
            None
        }
    }
}

/// Decode a single frame, publishing its record to a receiver.
///
/// Returns whether the frame carried a record.
pub fn publish<O: Handler + ?Sized>(r: &[u8], o: &mut O) -> bool {
    let (header, record) = match slice::decode(r) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::trace!("Ignored frame of {} bytes: {}", r.len(), err);
            return false;
        }
    };

    match &record {
        Record::HeartRateResult(m) => o.on_heart_rate_result(m),
        Record::HeartRatePush(m) => o.on_heart_rate_push(header.frame_id, m),
        Record::Progress(p) => o.on_progress(*p),
        Record::Waveform(w) => o.on_waveform(w),
        Record::RrInterval(rr) => o.on_rr_interval(rr),
    }

    true
}

/// Receive decoded records.
///
/// The default implementation of each method ignores received values, so a
/// receiver need only implement those it is interested in.
#[allow(unused_variables)]
pub trait Handler {
    /// Receive the result of a requested measurement.
    fn on_heart_rate_result(&mut self, result: &HeartRate) {}
    /// Receive a measurement pushed by the ring.
    ///
    /// The ring expects a [`push_ack`](crate::command::push_ack) carrying the
    /// same frame ID. By default, pushes are forwarded to
    /// [`on_heart_rate_result`](Handler::on_heart_rate_result).
    fn on_heart_rate_push(&mut self, frame_id: u8, push: &HeartRate) {
        self.on_heart_rate_result(push);
    }
    /// Receive acquisition progress, as a percentage.
    fn on_progress(&mut self, percentage: u8) {}
    /// Receive PPG waveform and accelerometer samples.
    fn on_waveform(&mut self, waveform: &Waveform) {}
    /// Receive RR interval samples.
    fn on_rr_interval(&mut self, rr: &RrIntervals) {}
    /// Receive a failure reported by the transport.
    ///
    /// Decoding never calls this method.
    fn on_bluetooth_error(&mut self, error: &dyn core::error::Error) {}
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Progress(Vec<u8>);

    impl Handler for Progress {
        fn on_progress(&mut self, percentage: u8) {
            self.0.push(percentage);
        }
    }

    #[test]
    fn publishes_only_implemented_methods() {
        let mut o = Progress::default();

        assert!(publish(&[0x00, 0x01, 0x31, 0xFF, 0x32], &mut o));
        assert!(publish(
            &[0x00, 0x01, 0x31, 0x00, 0x01, 0x48, 0x05, 0x20, 0x42, 0x0E],
            &mut o
        ));
        assert!(!publish(&[0x00, 0x01, 0x31, 0xFF], &mut o));

        assert_eq!(o.0, [50]);
    }

    #[test]
    fn push_defaults_to_result() {
        #[derive(Default)]
        struct Results(Vec<u8>);

        impl Handler for Results {
            fn on_heart_rate_result(&mut self, result: &HeartRate) {
                self.0.push(result.heart_rate);
            }
        }

        let mut o = Results::default();
        assert!(publish(
            &[0x00, 0x22, 0x31, 0x03, 0x01, 0x50, 0x05, 0x20, 0x42, 0x0E],
            &mut o
        ));
        assert_eq!(o.0, [0x50]);
    }

    #[test]
    fn decode_discards_header() {
        let frame = [0x00, 0x01, 0x31, 0xFF, 0x64];
        assert_eq!(decode(&frame), Some(Record::Progress(100)));
        assert_eq!(try_decode(&frame).unwrap().0.frame_id, 0x01);
    }
}
