//! In-memory cable simulator.
//!
//! [`CableSimulator`] implements [`PortRegisterAccessor`] over a per-port
//! register map held in memory. It stands in for the platform transport
//! wherever real transceivers are unavailable: integration tests here, and
//! external harnesses that want to drive the protocol end to end. Writing
//! the MUX switch command applies the side effects a healthy cable would
//! show on its status registers, so a toggle followed by a status check
//! behaves like hardware.

use crate::accessor::PortRegisterAccessor;
use crate::protocol;
use crate::registers;
use crate::types::{PhysicalPort, SwitchCommand};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

type RegisterMap = HashMap<(PhysicalPort, u16), Vec<u8>>;

/// Simulated EEPROM register space for any number of ports.
#[derive(Debug, Default)]
pub struct CableSimulator {
    regs: Mutex<RegisterMap>,
    write_fault: AtomicBool,
}

impl CableSimulator {
    /// Creates a simulator with no cables attached. Reads against
    /// unseeded registers return `None`.
    pub fn new() -> Self {
        CableSimulator::default()
    }

    /// Attaches a healthy cable to `port`: all three links up, register
    /// reads sourced from TOR A, MUX pointing at and routing through
    /// TOR A.
    pub fn attach_cable(&self, port: PhysicalPort) {
        self.seed_register(port, registers::DETERMINE_CABLE_READ_SIDE, &[0x04]);
        self.seed_register(port, registers::CHECK_LINK_ACTIVE, &[0x07]);
        self.seed_register(port, registers::MUX_DIRECTION, &[0x01]);
        self.seed_register(port, registers::ACTIVE_TOR_INDICATOR, &[0x01]);
        self.seed_register(port, registers::MANUAL_SWITCH_COUNT, &[0x00]);
    }

    /// Seeds arbitrary bytes at a register, replacing any previous value.
    ///
    /// Seeding a wrong-length sequence is allowed so harnesses can stage
    /// malformed reads.
    pub fn seed_register(&self, port: PhysicalPort, offset: u16, value: &[u8]) {
        let mut regs = self.regs.lock().unwrap();
        regs.insert((port, offset), value.to_vec());
    }

    /// Returns the current bytes at a register, if seeded.
    pub fn register(&self, port: PhysicalPort, offset: u16) -> Option<Vec<u8>> {
        let regs = self.regs.lock().unwrap();
        regs.get(&(port, offset)).cloned()
    }

    /// Makes every subsequent write fail (or succeed again) until changed.
    pub fn set_write_fault(&self, enabled: bool) {
        self.write_fault.store(enabled, Ordering::SeqCst);
    }

    /// Applies the status-register side effects of a hard MUX switch.
    fn apply_switch(regs: &mut RegisterMap, port: PhysicalPort, command: SwitchCommand) {
        let (direction, active) = match command {
            SwitchCommand::ForceToTorA => (0x01, 0x01),
            SwitchCommand::ForceToTorB => (0x00, 0x02),
        };
        regs.insert((port, registers::MUX_DIRECTION), vec![direction]);
        regs.insert((port, registers::ACTIVE_TOR_INDICATOR), vec![active]);

        let count = regs
            .get(&(port, registers::MANUAL_SWITCH_COUNT))
            .and_then(|raw| raw.first().copied())
            .unwrap_or(0);
        regs.insert(
            (port, registers::MANUAL_SWITCH_COUNT),
            vec![count.wrapping_add(1)],
        );
    }
}

impl PortRegisterAccessor for CableSimulator {
    fn read_eeprom(&self, port: PhysicalPort, offset: u16, _num_bytes: usize) -> Option<Vec<u8>> {
        // Seeded bytes are returned as stored, even at the wrong length,
        // so decoders can be exercised against malformed reads.
        let regs = self.regs.lock().unwrap();
        regs.get(&(port, offset)).cloned()
    }

    fn write_eeprom(&self, port: PhysicalPort, offset: u16, data: &[u8]) -> bool {
        if self.write_fault.load(Ordering::SeqCst) {
            return false;
        }

        let mut regs = self.regs.lock().unwrap();
        regs.insert((port, offset), data.to_vec());

        if offset == registers::SWITCH_MUX_DIRECTION {
            if let Some(command) = protocol::decode_switch_command(data) {
                Self::apply_switch(&mut regs, port, command);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unseeded_register_reads_absent() {
        let sim = CableSimulator::new();
        assert_eq!(sim.read_eeprom(1, registers::MUX_DIRECTION, 1), None);
    }

    #[test]
    fn test_switch_write_updates_status_registers() {
        let sim = CableSimulator::new();
        sim.attach_cable(1);

        assert!(sim.write_eeprom(1, registers::SWITCH_MUX_DIRECTION, &[0x03]));
        assert_eq!(sim.register(1, registers::MUX_DIRECTION), Some(vec![0x00]));
        assert_eq!(
            sim.register(1, registers::ACTIVE_TOR_INDICATOR),
            Some(vec![0x02])
        );
        assert_eq!(
            sim.register(1, registers::MANUAL_SWITCH_COUNT),
            Some(vec![0x01])
        );
    }

    #[test]
    fn test_write_fault() {
        let sim = CableSimulator::new();
        sim.attach_cable(1);
        sim.set_write_fault(true);

        assert!(!sim.write_eeprom(1, registers::SWITCH_MUX_DIRECTION, &[0x02]));
        // Status registers are untouched by the failed write.
        assert_eq!(sim.register(1, registers::MUX_DIRECTION), Some(vec![0x01]));

        sim.set_write_fault(false);
        assert!(sim.write_eeprom(1, registers::SWITCH_MUX_DIRECTION, &[0x02]));
    }
}
