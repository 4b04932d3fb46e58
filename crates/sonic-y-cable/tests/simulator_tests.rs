//! End-to-end driver tests against the in-memory cable simulator.

use pretty_assertions::assert_eq;
use sonic_y_cable::{registers, CableSimulator, YCable};
use std::sync::Arc;

const PORT: u32 = 12;

fn simulated_cable() -> (Arc<CableSimulator>, YCable) {
    let sim = Arc::new(CableSimulator::new());
    sim.attach_cable(PORT);
    let cable = YCable::new(sim.clone());
    (sim, cable)
}

#[test]
fn healthy_cable_reports_full_status() {
    let (_sim, cable) = simulated_cable();

    assert_eq!(cable.check_read_side(PORT), 1);
    assert_eq!(cable.check_mux_direction(PORT), 1);
    assert_eq!(cable.check_active_linked_tor_side(PORT), 1);
    assert!(cable.check_if_link_is_active_for_nic(PORT));
    assert!(cable.check_if_link_is_active_for_tor_a(PORT));
    assert!(cable.check_if_link_is_active_for_tor_b(PORT));
}

#[test]
fn toggle_to_tor_b_round_trip() {
    let (sim, cable) = simulated_cable();

    assert!(cable.toggle_mux_to_tor_b(PORT));

    // A functioning cable reports 0x00 in the MUX direction register after
    // a switch to TOR B, which must decode to TOR B, never TOR A.
    assert_eq!(
        sim.register(PORT, registers::MUX_DIRECTION),
        Some(vec![0x00])
    );
    assert_eq!(cable.check_mux_direction(PORT), 2);
    assert_eq!(cable.check_active_linked_tor_side(PORT), 2);
}

#[test]
fn toggle_back_and_forth_counts_manual_switches() {
    let (sim, cable) = simulated_cable();

    assert!(cable.toggle_mux_to_tor_b(PORT));
    assert!(cable.toggle_mux_to_tor_a(PORT));
    assert!(cable.toggle_mux_to_tor_b(PORT));

    assert_eq!(cable.check_mux_direction(PORT), 2);
    assert_eq!(
        sim.register(PORT, registers::MANUAL_SWITCH_COUNT),
        Some(vec![0x03])
    );
}

#[test]
fn write_fault_leaves_mux_untouched() {
    let (sim, cable) = simulated_cable();
    sim.set_write_fault(true);

    assert!(!cable.toggle_mux_to_tor_b(PORT));
    assert_eq!(cable.check_mux_direction(PORT), 1);
}

#[test]
fn unplugged_port_fails_every_check() {
    let sim = Arc::new(CableSimulator::new());
    let cable = YCable::new(sim);

    assert_eq!(cable.check_read_side(PORT), -1);
    assert_eq!(cable.check_mux_direction(PORT), -1);
    assert_eq!(cable.check_active_linked_tor_side(PORT), -1);
    assert!(!cable.check_if_link_is_active_for_nic(PORT));
}

#[test]
fn malformed_register_reads_fail_the_check() {
    let (sim, cable) = simulated_cable();

    sim.seed_register(PORT, registers::DETERMINE_CABLE_READ_SIDE, &[0x04, 0x00]);
    assert_eq!(cable.check_read_side(PORT), -1);

    sim.seed_register(PORT, registers::ACTIVE_TOR_INDICATOR, &[]);
    assert_eq!(cable.check_active_linked_tor_side(PORT), -1);
}

#[test]
fn unrecognized_patterns_fail_the_check() {
    let (sim, cable) = simulated_cable();

    sim.seed_register(PORT, registers::DETERMINE_CABLE_READ_SIDE, &[0x00]);
    assert_eq!(cable.check_read_side(PORT), -1);

    sim.seed_register(PORT, registers::MUX_DIRECTION, &[0x02]);
    assert_eq!(cable.check_mux_direction(PORT), -1);

    sim.seed_register(PORT, registers::ACTIVE_TOR_INDICATOR, &[0x04]);
    assert_eq!(cable.check_active_linked_tor_side(PORT), -1);
}

#[test]
fn link_state_follows_seeded_register() {
    let (sim, cable) = simulated_cable();

    // Only the TOR B link up.
    sim.seed_register(PORT, registers::CHECK_LINK_ACTIVE, &[0x02]);
    assert!(!cable.check_if_link_is_active_for_nic(PORT));
    assert!(!cable.check_if_link_is_active_for_tor_a(PORT));
    assert!(cable.check_if_link_is_active_for_tor_b(PORT));
}

#[test]
fn ports_are_independent() {
    let sim = Arc::new(CableSimulator::new());
    sim.attach_cable(1);
    sim.attach_cable(2);
    let cable = YCable::new(sim);

    assert!(cable.toggle_mux_to_tor_b(1));
    assert_eq!(cable.check_mux_direction(1), 2);
    assert_eq!(cable.check_mux_direction(2), 1);
}
