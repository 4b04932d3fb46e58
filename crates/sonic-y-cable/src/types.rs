//! Status and command types for the Y-cable MUX protocol.
//!
//! Every status enum carries the legacy integer code used by the original
//! platform API (`0`/`1`/`2`, with `-1` reserved for failures) so that
//! downstream consumers keep the same success/failure interpretation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical port number connected to the Y end of a Y-cable.
pub type PhysicalPort = u32;

/// Legacy integer code returned when an operation fails.
pub const CODE_UNKNOWN: i32 = -1;

/// A logical endpoint of the Y-cable.
///
/// The cable has one NIC leg and two TOR legs; the internal MUX routes
/// traffic between the NIC leg and exactly one TOR leg at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// NIC end of the cable.
    Nic,
    /// TOR A (TOR #1).
    TorA,
    /// TOR B (TOR #2).
    TorB,
}

impl Side {
    /// Legacy integer code: NIC is 0, TOR A is 1, TOR B is 2.
    pub const fn as_code(&self) -> i32 {
        match self {
            Side::Nic => 0,
            Side::TorA => 1,
            Side::TorB => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Nic => "NIC",
            Side::TorA => "TOR A",
            Side::TorB => "TOR B",
        };
        write!(f, "{}", s)
    }
}

/// Which TOR leg the data-plane MUX currently points to, regardless of
/// link or routing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuxDirection {
    /// MUX points to TOR A (TOR #1).
    TorA,
    /// MUX points to TOR B (TOR #2).
    TorB,
}

impl MuxDirection {
    /// Legacy integer code: TOR A is 1, TOR B is 2.
    pub const fn as_code(&self) -> i32 {
        match self {
            MuxDirection::TorA => 1,
            MuxDirection::TorB => 2,
        }
    }
}

impl fmt::Display for MuxDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuxDirection::TorA => write!(f, "TOR A"),
            MuxDirection::TorB => write!(f, "TOR B"),
        }
    }
}

/// Which TOR leg is actively linked and routing frames through the MUX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTor {
    /// No side is linked and routing.
    None,
    /// TOR A (TOR #1) is linked and routing.
    TorA,
    /// TOR B (TOR #2) is linked and routing.
    TorB,
}

impl ActiveTor {
    /// Legacy integer code: nothing routing is 0, TOR A is 1, TOR B is 2.
    pub const fn as_code(&self) -> i32 {
        match self {
            ActiveTor::None => 0,
            ActiveTor::TorA => 1,
            ActiveTor::TorB => 2,
        }
    }
}

impl fmt::Display for ActiveTor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveTor::None => write!(f, "none"),
            ActiveTor::TorA => write!(f, "TOR A"),
            ActiveTor::TorB => write!(f, "TOR B"),
        }
    }
}

/// A hard MUX switch command.
///
/// Hard means the target side is forced regardless of that side's link
/// status (bit 1 of the command byte is always set; bit 0 selects the
/// target TOR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchCommand {
    /// Force the MUX to TOR A (TOR #1).
    ForceToTorA,
    /// Force the MUX to TOR B (TOR #2).
    ForceToTorB,
}

impl SwitchCommand {
    /// The TOR leg this command switches to.
    pub const fn target(&self) -> MuxDirection {
        match self {
            SwitchCommand::ForceToTorA => MuxDirection::TorA,
            SwitchCommand::ForceToTorB => MuxDirection::TorB,
        }
    }
}

impl fmt::Display for SwitchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchCommand::ForceToTorA => write!(f, "force to TOR A"),
            SwitchCommand::ForceToTorB => write!(f, "force to TOR B"),
        }
    }
}
