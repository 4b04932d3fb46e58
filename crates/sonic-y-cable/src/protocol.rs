//! Pure encode/decode logic for the Y-cable MUX registers.
//!
//! Every decoder takes the raw byte sequence returned by a one-byte EEPROM
//! read and produces a typed status. Decoders are total over their input:
//! a wrong-length read or an unenumerated bit pattern is a [`CableError`],
//! never a panic or a silently wrong status.
//!
//! Several registers can in principle report more than one indicator bit
//! set. The decoders resolve that with a fixed priority order (highest bit
//! checked first for read-side, TOR B before TOR A for the active-TOR
//! indicator) rather than rejecting the value; keep that ordering, it is
//! what deployed cables are interpreted against.

use crate::error::{CableError, CableResult};
use crate::registers;
use crate::types::{ActiveTor, MuxDirection, Side, SwitchCommand};

/// Command byte for a hard switch to TOR A: bit 1 set (switch regardless
/// of link status), bit 0 clear (target TOR #1).
const SWITCH_TO_TOR_A: u8 = 0x02;

/// Command byte for a hard switch to TOR B: bit 1 set (switch regardless
/// of link status), bit 0 set (target TOR #2).
const SWITCH_TO_TOR_B: u8 = 0x03;

/// Encodes a MUX switch command into the register write that performs it.
///
/// Encoding is pure and total: the same command always produces the same
/// `(offset, payload)` pair. Whether the switch took effect is known only
/// from the result of the EEPROM write itself.
pub fn encode_switch_command(command: SwitchCommand) -> (u16, [u8; 1]) {
    let payload = match command {
        SwitchCommand::ForceToTorA => SWITCH_TO_TOR_A,
        SwitchCommand::ForceToTorB => SWITCH_TO_TOR_B,
    };
    (registers::SWITCH_MUX_DIRECTION, [payload])
}

/// Decodes a switch-command payload back into the command it performs.
///
/// This is the device-side view of [`encode_switch_command`], used by the
/// simulator to apply a written command; unknown payloads (including soft
/// switches, which this protocol never issues) decode to `None`.
pub fn decode_switch_command(payload: &[u8]) -> Option<SwitchCommand> {
    match payload {
        [SWITCH_TO_TOR_A] => Some(SwitchCommand::ForceToTorA),
        [SWITCH_TO_TOR_B] => Some(SwitchCommand::ForceToTorB),
        _ => None,
    }
}

/// Extracts the single register byte from a raw read, enforcing the
/// one-byte width every decoder requires.
fn register_byte(raw: &[u8], offset: u16) -> CableResult<u8> {
    match raw {
        [value] => Ok(*value),
        _ => Err(CableError::MalformedRead {
            offset,
            len: raw.len(),
        }),
    }
}

/// Decodes which side of the cable register reads are being sourced from.
///
/// This is a property of the register-access bus itself, independent of
/// the data-plane MUX direction. Register layout (upper page 4, offset 128):
///
/// | Bits | Meaning                                  |
/// |------|------------------------------------------|
/// | 7-3  | Reserved                                 |
/// | 2    | Reading from TOR #1 side                 |
/// | 1    | Reading from TOR #2 side                 |
/// | 0    | Reading from NIC side                    |
///
/// Bits are checked highest first; a byte with no indicator bit set is an
/// unrecognized pattern.
pub fn decode_read_side(raw: &[u8]) -> CableResult<Side> {
    let offset = registers::DETERMINE_CABLE_READ_SIDE;
    let value = register_byte(raw, offset)?;
    if (value >> 2) & 0x01 != 0 {
        Ok(Side::TorA)
    } else if (value >> 1) & 0x01 != 0 {
        Ok(Side::TorB)
    } else if value & 0x01 != 0 {
        Ok(Side::Nic)
    } else {
        Err(CableError::UnrecognizedBitPattern { offset, value })
    }
}

/// Decodes which TOR leg the data-plane MUX currently points to,
/// irrespective of link or routing state.
///
/// Register layout (upper page 4, offset 132): `0x01` means the MUX points
/// at TOR #1; `0x00` means TOR #2. Note that TOR B is the all-zero case,
/// not a distinct flag bit; any other non-zero pattern is unrecognized.
/// This mapping is how deployed cables actually report, even though the
/// register prose documents TOR #1 as the default — do not "fix" it.
pub fn decode_mux_direction(raw: &[u8]) -> CableResult<MuxDirection> {
    let offset = registers::MUX_DIRECTION;
    let value = register_byte(raw, offset)?;
    if value & 0x01 != 0 {
        Ok(MuxDirection::TorA)
    } else if value == 0 {
        Ok(MuxDirection::TorB)
    } else {
        Err(CableError::UnrecognizedBitPattern { offset, value })
    }
}

/// Decodes which TOR leg is actively linked and routing frames.
///
/// Register layout (upper page 4, offset 133): bit 1 means TOR #2 is
/// linked and routing, bit 0 means TOR #1 is, and `0x00` means no side is
/// routing at all. TOR B takes priority when both bits are set.
pub fn decode_active_tor(raw: &[u8]) -> CableResult<ActiveTor> {
    let offset = registers::ACTIVE_TOR_INDICATOR;
    let value = register_byte(raw, offset)?;
    if (value >> 1) & 0x01 != 0 {
        Ok(ActiveTor::TorB)
    } else if value & 0x01 != 0 {
        Ok(ActiveTor::TorA)
    } else if value == 0 {
        Ok(ActiveTor::None)
    } else {
        Err(CableError::UnrecognizedBitPattern { offset, value })
    }
}

/// Decodes whether the link is up on the given cable end.
///
/// Register layout (upper page 4, offset 129): one link-status bit per
/// end, `0b1` is link up.
///
/// | Bits | End          |
/// |------|--------------|
/// | 7-3  | Reserved     |
/// | 2    | TOR #1 side  |
/// | 1    | TOR #2 side  |
/// | 0    | NIC side     |
///
/// A clear bit decodes to link-down; there is no unknown state beyond a
/// failed read.
pub fn decode_link_active(raw: &[u8], end: Side) -> CableResult<bool> {
    let value = register_byte(raw, registers::CHECK_LINK_ACTIVE)?;
    let bit = match end {
        Side::Nic => 0,
        Side::TorB => 1,
        Side::TorA => 2,
    };
    Ok((value >> bit) & 0x01 != 0)
}
