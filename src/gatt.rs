//! GATT identifiers of the ring's vendor service.
//!
//! Frames encoded by [`crate::command`] are written to [`COMMAND`]; frames
//! decoded by [`crate::avec`] arrive as notifications on [`NOTIFY`].

/// Vendor service carrying both characteristics.
pub const SERVICE: u128 = uuid(0x0001);

/// Characteristic accepting command frames.
pub const COMMAND: u128 = uuid(0x0010);

/// Characteristic notifying response and push frames.
pub const NOTIFY: u128 = uuid(0x0011);

/// Expand a 16-bit identifier into the vendor's UUID base,
/// `BAE8xxxx-4F05-4503-8E65-3AF1F7329D1F`.
const fn uuid(short: u16) -> u128 {
    const BASE: u128 = 0xBAE8_0000_4F05_4503_8E65_3AF1F7329D1F;
    BASE | ((short as u128) << 96)
}
