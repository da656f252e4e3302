//! Frame-level state tokens for implementing decoders.
//!
//! This module is intended for applications that read notification payloads
//! piecewise, or that need to inspect a frame header before committing to a
//! decode. See [`crate::avec`] for implementations covering whole frames held
//! in a slice.
//!
//! # Architecture
//!
//! All states are represented by a small, non-copy token. Once enough bytes are
//! ready, transition to another state by calling the token's `advance` method.
//! This will return any extracted data, along with a successor state token
//! where one exists.
//!
//! A frame begins with a four byte header. Advancing over it classifies the
//! frame by command and sub-command and yields a [`header::Body`] token for the
//! payload layout that follows. Fixed payloads are consumed in a single step;
//! repeated payloads (waveform and RR interval samples) are consumed one sample
//! at a time, with the token counting down the sample count declared by the
//! frame.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed.
//!
//! Some areas of the decoding process are not represented here and must be
//! carefully written:
//!
//! - Reading bytes from the correct offset in the frame.
//!
//! - Ending a repeated payload early when the frame holds fewer samples than it
//! declares. Frames are not reassembled, so this is expected and not an error.

pub mod header;
pub mod measurement;
pub mod series;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::FrameHeader;
