//! Core types for reversible logic circuit synthesis
//!
//! This crate provides the fundamental types for building reversible
//! circuits over the classical gate basis (NOT, controlled-NOT,
//! doubly-controlled-NOT):
//! - [`WireId`]: type-safe wire addressing
//! - [`Register`]: named fixed-width wire groups with usage roles
//! - [`Gate`]: the elementary self-inverse gate set
//! - [`Circuit`]: gate sequences composable by wire-remapped splicing
//! - [`AncillaPool`]: lifecycle tracking for borrowed temporary wires
//!
//! # Example
//! ```
//! use revsynth_core::{Circuit, RegisterRole};
//!
//! let mut circuit = Circuit::new();
//! let a = circuit.add_register("a", 2, RegisterRole::Output).unwrap();
//! circuit.cflip(a.wire(0).unwrap(), a.wire(1).unwrap()).unwrap();
//! ```

pub mod ancilla;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod register;
pub mod wire;

// Re-exports for convenience
pub use ancilla::AncillaPool;
pub use circuit::Circuit;
pub use error::SynthError;
pub use gate::Gate;
pub use register::{Register, RegisterRole};
pub use wire::WireId;

/// Type alias for results in this workspace
pub type Result<T> = std::result::Result<T, SynthError>;
