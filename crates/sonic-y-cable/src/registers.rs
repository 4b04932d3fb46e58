//! Y-cable MUX register map.
//!
//! Byte offsets into the transceiver's EEPROM address space for the
//! cable-control registers of upper page 0x04 (starting at 640). These
//! offsets and the bit layouts documented on the decoders in
//! [`crate::protocol`] are the wire contract with the physical cable and
//! must not be changed.

/// Identifier byte in the lower page.
pub const IDENTIFIER_LOWER_PAGE: u16 = 0;

/// Identifier byte in the upper page.
pub const IDENTIFIER_UPPER_PAGE: u16 = 128;

/// Which side of the cable register reads are sourced from (upper page 4,
/// offset 128).
pub const DETERMINE_CABLE_READ_SIDE: u16 = 640;

/// Per-end link status bits (upper page 4, offset 129).
pub const CHECK_LINK_ACTIVE: u16 = 641;

/// MUX switch command register, write-only (upper page 4, offset 130).
pub const SWITCH_MUX_DIRECTION: u16 = 642;

/// MUX switch status register (upper page 4, offset 132).
pub const MUX_DIRECTION: u16 = 644;

/// TOR active indicator register (upper page 4, offset 133).
pub const ACTIVE_TOR_INDICATOR: u16 = 645;

/// Manual switch counter (upper page 4, offset 157).
pub const MANUAL_SWITCH_COUNT: u16 = 669;

/// Every decoder in this protocol reads exactly one byte.
pub const REGISTER_WIDTH: usize = 1;
