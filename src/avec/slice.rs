//! Slice-based decoder implementation.

use alloc::vec::Vec;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::{
    record::{Record, RrIntervals, Waveform},
    sans::{
        Decoder,
        header::{Body, Header, HeaderError},
        series::{SampleInner, SeriesHead},
    },
};

/// Reasons a frame produced no record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The frame is shorter than its header or fixed payload.
    #[error("Unexpectedly reached the end of the frame.")]
    EndOfFrame,
    /// The frame is not a recognised heart-rate frame.
    #[error("Unrecognised frame header: {0}")]
    Header(#[from] HeaderError),
}

/// Decode a single frame from a slice, reporting why no record was produced.
///
/// Repeated payloads holding fewer samples than they declare are truncated to
/// the complete samples present; this is not an error.
///
/// This method is also re-exported as `ringbeat::avec::try_decode`.
pub fn decode(r: &[u8]) -> Result<(Header, Record), Error> {
    let i = &mut 0; // Offset of the next unread byte.

    let (header, successor) = Decoder::advance(take(r, i)?)?;

    let record = match successor {
        Body::Result(state) => Record::HeartRateResult(state.advance(take(r, i)?)),
        Body::Push(state) => Record::HeartRatePush(state.advance(take(r, i)?)),
        Body::Progress(state) => Record::Progress(state.advance(take(r, i)?)),
        Body::Waveform(state) => {
            let (seq, declared_count, samples) = decode_series(state, r, i)?;
            let (ppg, accel) = samples.into_iter().unzip();

            Record::Waveform(Waveform {
                seq,
                declared_count,
                ppg,
                accel,
            })
        }
        Body::RrInterval(state) => {
            let (seq, declared_count, rr) = decode_series(state, r, i)?;

            Record::RrInterval(RrIntervals {
                seq,
                declared_count,
                rr,
            })
        }
    };

    Ok((header, record))
}

fn decode_series<T: SampleInner<From = [u8; N]>, const N: usize>(
    state: SeriesHead<T>,
    r: &[u8],
    i: &mut usize,
) -> Result<(u8, u8, Vec<T::Into>), Error> {
    let [seq] = take(r, i)?;
    // A frame cut off after the sequence number declares no samples.
    let declared_count = take::<1>(r, i).map_or(0, |[c]| c);

    let (seq, declared_count, successor) = state.advance([seq, declared_count]);

    let mut samples = Vec::new();

    if let Left(mut state) = successor {
        let available = r.len().saturating_sub(*i) / N;
        samples.reserve(available.min(state.remaining() as usize));

        // Stop at the first incomplete sample.
        while let Ok(bytes) = take(r, i) {
            let (value, successor) = state.advance(bytes);
            samples.push(value);

            state = match successor {
                Left(state) => state,
                Right(_) => break,
            };
        }
    }

    Ok((seq, declared_count, samples))
}

/// Take an exact number of bytes from an offset in a slice, advancing the
/// offset only on success.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    let bytes = r
        .get(s..s + N)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::EndOfFrame)?;
    *i = s + N;

    Ok(bytes)
}
