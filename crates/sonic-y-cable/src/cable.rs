//! Y-cable driver: the public per-port operations.
//!
//! [`YCable`] binds the pure protocol logic in [`crate::protocol`] to a
//! [`PortRegisterAccessor`] transport. Its methods keep the legacy status
//! surface of the platform API: integer codes (`0`/`1`/`2`, `-1` on
//! failure) for the status checks and plain booleans for link checks and
//! MUX toggles, so existing orchestration consumers interpret results
//! unchanged. Failures are logged here, once per failed operation, and
//! never propagate as panics or errors.
//!
//! The driver holds no per-port state and takes the port number on every
//! call. Each call is one blocking register transaction; callers that
//! target the same physical port concurrently must serialize themselves,
//! the register set is a single shared hardware resource per port.

use crate::accessor::PortRegisterAccessor;
use crate::error::{CableError, CableResult};
use crate::protocol;
use crate::registers;
use crate::types::{PhysicalPort, Side, SwitchCommand, CODE_UNKNOWN};
use log::{error, info};
use std::sync::Arc;

/// Register-level driver for Y-cable MUX control and status.
pub struct YCable {
    accessor: Option<Arc<dyn PortRegisterAccessor>>,
}

impl YCable {
    /// Creates a driver backed by the given register accessor.
    pub fn new(accessor: Arc<dyn PortRegisterAccessor>) -> Self {
        YCable {
            accessor: Some(accessor),
        }
    }

    /// Creates a driver whose transport failed to initialize.
    ///
    /// Every operation on such a driver fails with its sentinel value
    /// without attempting a register transaction. This keeps a platform
    /// whose chassis failed to load degraded rather than crashed.
    pub fn without_accessor() -> Self {
        YCable { accessor: None }
    }

    /// Returns whether a register accessor is attached.
    pub fn has_accessor(&self) -> bool {
        self.accessor.is_some()
    }

    /// Hard-switches the MUX to TOR A regardless of TOR A's link state.
    ///
    /// After a successful toggle the cable forwards frames between TOR A
    /// and the NIC and drops frames from TOR B. Returns whether the
    /// register write succeeded.
    pub fn toggle_mux_to_tor_a(&self, port: PhysicalPort) -> bool {
        self.toggle_mux(port, SwitchCommand::ForceToTorA)
    }

    /// Hard-switches the MUX to TOR B regardless of TOR B's link state.
    ///
    /// After a successful toggle the cable forwards frames between TOR B
    /// and the NIC and drops frames from TOR A. Returns whether the
    /// register write succeeded.
    pub fn toggle_mux_to_tor_b(&self, port: PhysicalPort) -> bool {
        self.toggle_mux(port, SwitchCommand::ForceToTorB)
    }

    fn toggle_mux(&self, port: PhysicalPort, command: SwitchCommand) -> bool {
        let Some(accessor) = self.accessor.as_deref() else {
            error!(
                "accessor is not loaded, failed to toggle mux to {} for port {}",
                command.target(),
                port
            );
            return false;
        };

        let (offset, payload) = protocol::encode_switch_command(command);
        let ok = accessor.write_eeprom(port, offset, &payload);
        if ok {
            info!("toggled mux to {} for port {}", command.target(), port);
        } else {
            error!(
                "eeprom write failed toggling mux to {} for port {}",
                command.target(),
                port
            );
        }
        ok
    }

    /// Checks which side of the cable register reads are performed from.
    ///
    /// Returns 1 for TOR A, 2 for TOR B, 0 for NIC, or -1 on failure.
    pub fn check_read_side(&self, port: PhysicalPort) -> i32 {
        let result = self
            .read_register(port, registers::DETERMINE_CABLE_READ_SIDE)
            .and_then(|raw| protocol::decode_read_side(&raw));
        match result {
            Ok(side) => {
                info!("reading from {} side for port {}", side, port);
                side.as_code()
            }
            Err(err) => {
                error!("failed to check cable read side for port {}: {}", port, err);
                CODE_UNKNOWN
            }
        }
    }

    /// Checks which TOR leg the MUX currently points to, regardless of
    /// link or routing state.
    ///
    /// Returns 1 for TOR A, 2 for TOR B, or -1 on failure.
    pub fn check_mux_direction(&self, port: PhysicalPort) -> i32 {
        let result = self
            .read_register(port, registers::MUX_DIRECTION)
            .and_then(|raw| protocol::decode_mux_direction(&raw));
        match result {
            Ok(direction) => {
                info!("mux pointing to {} for port {}", direction, port);
                direction.as_code()
            }
            Err(err) => {
                error!("failed to check mux direction for port {}: {}", port, err);
                CODE_UNKNOWN
            }
        }
    }

    /// Checks which TOR leg is actively linked and routing frames.
    ///
    /// Returns 1 for TOR A, 2 for TOR B, 0 if no side is routing, or -1
    /// on failure.
    pub fn check_active_linked_tor_side(&self, port: PhysicalPort) -> i32 {
        let result = self
            .read_register(port, registers::ACTIVE_TOR_INDICATOR)
            .and_then(|raw| protocol::decode_active_tor(&raw));
        match result {
            Ok(active) => {
                info!(
                    "active linked and routing side is {} for port {}",
                    active, port
                );
                active.as_code()
            }
            Err(err) => {
                error!(
                    "failed to check active linked TOR side for port {}: {}",
                    port, err
                );
                CODE_UNKNOWN
            }
        }
    }

    /// Checks whether the NIC end's link is up.
    ///
    /// Returns `false` both for a down link and on failure; failures are
    /// distinguishable only in the log.
    pub fn check_if_link_is_active_for_nic(&self, port: PhysicalPort) -> bool {
        self.check_link_active(port, Side::Nic)
    }

    /// Checks whether the TOR A end's link is up.
    ///
    /// Returns `false` both for a down link and on failure.
    pub fn check_if_link_is_active_for_tor_a(&self, port: PhysicalPort) -> bool {
        self.check_link_active(port, Side::TorA)
    }

    /// Checks whether the TOR B end's link is up.
    ///
    /// Returns `false` both for a down link and on failure.
    pub fn check_if_link_is_active_for_tor_b(&self, port: PhysicalPort) -> bool {
        self.check_link_active(port, Side::TorB)
    }

    // Each view re-reads the register; a full picture of all three ends
    // costs three register transactions.
    fn check_link_active(&self, port: PhysicalPort, end: Side) -> bool {
        let result = self
            .read_register(port, registers::CHECK_LINK_ACTIVE)
            .and_then(|raw| protocol::decode_link_active(&raw, end));
        match result {
            Ok(up) => {
                if up {
                    info!("{} link is up for port {}", end, port);
                }
                up
            }
            Err(err) => {
                error!(
                    "failed to check if link is active on {} side for port {}: {}",
                    end, port, err
                );
                false
            }
        }
    }

    fn read_register(&self, port: PhysicalPort, offset: u16) -> CableResult<Vec<u8>> {
        let accessor = self
            .accessor
            .as_deref()
            .ok_or(CableError::TransportUnavailable)?;
        accessor
            .read_eeprom(port, offset, registers::REGISTER_WIDTH)
            .ok_or(CableError::ReadFailure { offset })
    }
}
