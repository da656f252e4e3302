#![no_std]

//! A decoder for the heart-rate command family (`0x31`) of a smart ring's
//! Bluetooth protocol.
//!
//! The ring reports measurement results, acquisition progress, raw PPG
//! waveforms and RR intervals as notifications on its command channel, and
//! accepts a "start measurement" command written to the same service. This
//! crate turns one notification payload into a typed [`record::Record`], and
//! builds the outbound command bytes. It performs no I/O: a transport hands it
//! complete frames and writes whatever it encodes.
//!
//! Most users should begin with [`avec::decode`] or [`avec::publish`] and the
//! [`avec::Handler`] trait. The state tokens in [`sans`] expose the underlying
//! frame layout for applications that read frames piecewise.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: implement `std` error traits and log through `std` (default).
//! - `serde`: derive `Serialize` and `Deserialize` for records and command
//!   parameters.

extern crate alloc;

pub mod avec;
pub mod command;
pub mod gatt;
pub mod record;
pub mod sans;
