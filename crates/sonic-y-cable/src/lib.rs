//! Register-level MUX control/status protocol for Y-cables.
//!
//! A Y-cable has two top-of-rack (TOR) legs and one NIC leg; its internal
//! multiplexer routes traffic between the NIC leg and exactly one TOR leg
//! at a time. This crate is the protocol contract with the cable's
//! transceiver: it encodes MUX switch commands into byte writes and
//! decodes MUX and link status from byte reads of the cable-control
//! registers in EEPROM upper page 0x04.
//!
//! # Register map
//!
//! | Offset | Register | Access |
//! |--------|----------|--------|
//! | 640 | Cable read side | read 1 byte |
//! | 641 | Per-end link active | read 1 byte |
//! | 642 | MUX switch command | write 1 byte |
//! | 644 | MUX direction | read 1 byte |
//! | 645 | Active TOR indicator | read 1 byte |
//! | 669 | Manual switch count | read 1 byte |
//!
//! # Architecture
//!
//! - [`protocol`]: pure encoders/decoders over raw register bytes
//! - [`accessor`]: the [`PortRegisterAccessor`] transport capability
//! - [`cable`]: the [`YCable`] driver, binding protocol to transport with
//!   the legacy integer-code/boolean result surface
//! - [`sim`]: an in-memory [`CableSimulator`] transport for test harnesses
//!
//! The driver performs one blocking register transaction per call and
//! holds no per-port state; callers serialize concurrent access to the
//! same physical port.
//!
//! # Example
//!
//! ```
//! use sonic_y_cable::{CableSimulator, YCable};
//! use std::sync::Arc;
//!
//! let sim = Arc::new(CableSimulator::new());
//! sim.attach_cable(1);
//!
//! let cable = YCable::new(sim);
//! assert!(cable.toggle_mux_to_tor_b(1));
//! assert_eq!(cable.check_mux_direction(1), 2);
//! ```

pub mod accessor;
pub mod cable;
pub mod error;
pub mod protocol;
pub mod registers;
pub mod sim;
pub mod types;

pub use accessor::PortRegisterAccessor;
pub use cable::YCable;
pub use error::{CableError, CableResult};
pub use sim::CableSimulator;
pub use types::{ActiveTor, MuxDirection, PhysicalPort, Side, SwitchCommand, CODE_UNKNOWN};
