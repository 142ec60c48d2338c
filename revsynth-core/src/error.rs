//! Error types for circuit synthesis

use crate::WireId;
use thiserror::Error;

/// Errors that can occur while constructing circuits
///
/// Every failure is raised eagerly, at construction time. A finished
/// [`crate::Circuit`] is inert data and carries no failure modes of its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// A width parameter outside the range a builder supports
    #[error("'{fragment}' requires a width in {}, got {width}", fmt_bounds(.min, .max))]
    InvalidWidth {
        fragment: &'static str,
        width: usize,
        min: usize,
        max: usize,
    },

    /// A gate whose target aliases one of its control wires
    #[error("{kind} gate targets its own control wire {wire}")]
    InvalidGate { kind: &'static str, wire: WireId },

    /// The same wire used twice as a control of one gate
    #[error("duplicate wire {0} in gate operation")]
    DuplicateWire(WireId),

    /// A wire index outside the addressed circuit or register
    #[error("invalid wire {wire}: only {num_wires} wires available")]
    InvalidWire { wire: WireId, num_wires: usize },

    /// A wire map whose length does not match the fragment being spliced
    #[error("wire map has {actual} entries, fragment declares {expected} wires")]
    RemapMismatch { expected: usize, actual: usize },

    /// A wire map binding the same host wire to two fragment wires
    #[error("wire map binds host wire {0} more than once")]
    WireAliased(WireId),

    /// An ancilla slot used outside its allocate/dirty/restore/release cycle
    ///
    /// This is a programming-logic fault: reusing a slot that is not
    /// provably zero silently corrupts the synthesized circuit, so the pool
    /// refuses immediately instead.
    #[error("ancilla wire {wire} misused: {reason}")]
    AncillaReuseViolation { wire: WireId, reason: &'static str },

    /// Structural validation failure on a finished circuit
    #[error("circuit validation failed: {0}")]
    Validation(String),
}

fn fmt_bounds(min: &usize, max: &usize) -> String {
    if *max == usize::MAX {
        format!("{}..", min)
    } else {
        format!("{}..={}", min, max)
    }
}

impl SynthError {
    /// Create an invalid width error bounded below by 1
    pub fn width_at_least_one(fragment: &'static str, width: usize) -> Self {
        Self::InvalidWidth {
            fragment,
            width,
            min: 1,
            max: usize::MAX,
        }
    }

    /// Create an invalid wire error
    pub fn invalid_wire(wire: WireId, num_wires: usize) -> Self {
        Self::InvalidWire { wire, num_wires }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_width_message() {
        let err = SynthError::width_at_least_one("adder", 0);
        let msg = format!("{}", err);
        assert!(msg.contains("adder"));
        assert!(msg.contains("0"));
    }

    #[test]
    fn test_invalid_wire_message() {
        let err = SynthError::invalid_wire(WireId::new(5), 3);
        let msg = format!("{}", err);
        assert!(msg.contains("w5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_ancilla_message() {
        let err = SynthError::AncillaReuseViolation {
            wire: WireId::new(2),
            reason: "released while still dirty",
        };
        assert!(format!("{}", err).contains("still dirty"));
    }
}
