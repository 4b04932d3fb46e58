//! Transport capability for per-port register access.

use crate::types::PhysicalPort;

/// Byte-level access to the EEPROM register space of one physical port's
/// transceiver.
///
/// This is the transport collaborator the protocol layer is built on: a
/// platform-backed implementation talks to real hardware, while
/// [`crate::sim::CableSimulator`] provides an in-memory implementation for
/// test harnesses. Which one a [`crate::YCable`] uses is decided once, at
/// construction.
///
/// Implementations own their error reporting at this boundary: a failed
/// read is `None` and a failed write is `false`. Retry policy, if any,
/// belongs here, not in the protocol layer.
#[cfg_attr(test, mockall::automock)]
pub trait PortRegisterAccessor: Send + Sync {
    /// Reads `num_bytes` bytes starting at `offset` from the port's EEPROM.
    ///
    /// Returns `None` if the read could not be performed.
    fn read_eeprom(&self, port: PhysicalPort, offset: u16, num_bytes: usize) -> Option<Vec<u8>>;

    /// Writes `data` starting at `offset` in the port's EEPROM.
    ///
    /// Returns whether the write succeeded.
    fn write_eeprom(&self, port: PhysicalPort, offset: u16, data: &[u8]) -> bool;
}
