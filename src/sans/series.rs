//! States processing repeated sample payloads.

use core::marker::PhantomData;

use either::Either::{self, Left, Right};
use zerocopy::FromBytes;

/// State token to decode the sequence number and sample count of a repeated
/// payload of kind `T`.
#[derive(Debug)]
pub struct SeriesHead<T> {
    _phantom: PhantomData<T>,
}

impl<T> SeriesHead<T> {
    pub(super) fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Transition to another state by decoding the sequence number and the
    /// declared sample count.
    ///
    /// Returns the sequence number, the declared count, and a successor state
    /// token.
    pub fn advance(self, r: [u8; 2]) -> (u8, u8, Either<Sample<T>, SeriesEnd>) {
        let [seq, declared_count] = r;
        (seq, declared_count, Sample::successor(declared_count))
    }
}

/// State token to decode one sample of kind `T`.
#[derive(Debug)]
pub struct Sample<T> {
    remaining: u8,
    _phantom: PhantomData<T>,
}

impl<T> Sample<T> {
    fn successor(remaining: u8) -> Either<Self, SeriesEnd> {
        if remaining != 0 {
            Left(Self {
                remaining,
                _phantom: PhantomData,
            })
        } else {
            Right(SeriesEnd(()))
        }
    }

    /// Number of samples still declared, including this one.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}

impl<T: SampleInner> Sample<T> {
    /// Transition to another state by decoding one sample.
    ///
    /// Returns the sample, and a successor state token.
    pub fn advance(self, r: T::From) -> (T::Into, Either<Self, SeriesEnd>) {
        (T::decode(r), Self::successor(self.remaining - 1))
    }
}

/// State token marking that every declared sample has been decoded.
#[derive(Debug)]
pub struct SeriesEnd(pub(super) ());

pub trait SampleInner {
    /// The bytes storing one sample.
    type From;
    /// The value of one sample.
    type Into;

    /// Convert the bytes of one sample to its value.
    fn decode(r: Self::From) -> Self::Into;
}

/// A PPG sample with the accelerometer reading taken alongside it.
#[derive(Debug)]
pub struct Ppg;

impl SampleInner for Ppg {
    type From = [u8; 10];
    /// PPG value, then accelerometer X, Y and Z.
    type Into = (i32, [i16; 3]);

    fn decode(r: Self::From) -> Self::Into {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct PpgSample {
            ppg: [u8; 4],
            x: [u8; 2],
            y: [u8; 2],
            z: [u8; 2],
        }

        let PpgSample { ppg, x, y, z } = zerocopy::transmute!(r);

        (
            i32::from_le_bytes(ppg),
            [
                i16::from_le_bytes(x),
                i16::from_le_bytes(y),
                i16::from_le_bytes(z),
            ],
        )
    }
}

/// An RR interval in milliseconds.
#[derive(Debug)]
pub struct Rr;

impl SampleInner for Rr {
    type From = [u8; 2];
    type Into = u16;

    fn decode(r: Self::From) -> Self::Into {
        u16::from_le_bytes(r)
    }
}
