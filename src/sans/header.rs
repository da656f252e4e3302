//! States processing frame headers.

use thiserror::Error;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use super::{
    measurement::{Measurement, Progress},
    series::{Ppg, Rr, SeriesHead},
};

/// Command byte of the heart-rate command family.
pub const HEART_RATE: u8 = 0x31;

/// Frame type byte of a single, unfragmented frame.
pub const SINGLE_FRAME: u8 = 0x00;

/// Sub-command bytes of frames sent by the ring.
///
/// Outbound sub-commands share some of these values with a different meaning.
/// See [`crate::command`] for those.
pub mod sub {
    /// Result of a requested measurement.
    pub const RESULT: u8 = 0x00;
    /// PPG waveform and accelerometer samples.
    pub const WAVEFORM: u8 = 0x01;
    /// RR interval samples.
    pub const RR_INTERVAL: u8 = 0x02;
    /// Measurement pushed without a request.
    pub const PUSH: u8 = 0x03;
    /// Acquisition progress.
    pub const PROGRESS: u8 = 0xFF;
}

/// An error advancing over a frame header.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// The frame belongs to another command family.
    #[error("Not a heart-rate frame (command {0:#04x}).")]
    NotHeartRate(u8),
    /// Unknown heart-rate sub-command.
    #[error("Unknown heart-rate sub-command ({0:#04x}).")]
    UnknownSubCommand(u8),
}

/// The four byte header present at the start of every frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable)]
pub struct Header {
    /// Fragmentation marker; [`SINGLE_FRAME`] for every frame handled here.
    pub frame_type: u8,
    /// Opaque token chosen by the sender.
    pub frame_id: u8,
    /// Command family.
    pub cmd: u8,
    /// Payload selector within the command family.
    pub sub_cmd: u8,
}

/// State token for the payload following a frame header.
#[derive(Debug)]
pub enum Body {
    /// A measurement result (sub-command [`sub::RESULT`]).
    Result(Measurement),
    /// An unsolicited measurement (sub-command [`sub::PUSH`]).
    Push(Measurement),
    /// Acquisition progress (sub-command [`sub::PROGRESS`]).
    Progress(Progress),
    /// Waveform samples (sub-command [`sub::WAVEFORM`]).
    Waveform(SeriesHead<Ppg>),
    /// RR interval samples (sub-command [`sub::RR_INTERVAL`]).
    RrInterval(SeriesHead<Rr>),
}

/// State token to decode a frame header.
#[derive(Debug)]
pub struct FrameHeader;

impl FrameHeader {
    /// Transition to another state by decoding a frame header.
    ///
    /// Returns the header fields, and a successor state token for the payload.
    pub fn advance(r: [u8; 4]) -> Result<(Header, Body), HeaderError> {
        let header: Header = zerocopy::transmute!(r);

        if header.cmd != HEART_RATE {
            Err(HeaderError::NotHeartRate(header.cmd))?;
        }

        let successor = match header.sub_cmd {
            sub::RESULT => Body::Result(Measurement(())),
            sub::PUSH => Body::Push(Measurement(())),
            sub::PROGRESS => Body::Progress(Progress(())),
            sub::WAVEFORM => Body::Waveform(SeriesHead::new()),
            sub::RR_INTERVAL => Body::RrInterval(SeriesHead::new()),
            _ => Err(HeaderError::UnknownSubCommand(header.sub_cmd))?,
        };

        Ok((header, successor))
    }
}
