//! Elementary reversible gate definitions

use crate::{Result, SynthError, WireId};
use smallvec::SmallVec;
use std::fmt;

/// An elementary reversible gate
///
/// The gate set is the classical reversible basis: bit-flip, controlled
/// bit-flip and doubly-controlled bit-flip. Controls carry a polarity:
/// `true` (the default) fires the gate on control = 1, `false` on
/// control = 0. Every gate is an involution, so a gate list applied and then
/// reapplied in reverse order is the identity; every uncomputation phase
/// built on top of this type rests on that property.
///
/// Constructors validate that the target never aliases a control; a
/// self-controlled flip has no defined semantics.
///
/// # Example
/// ```
/// use revsynth_core::{Gate, WireId};
///
/// let w = |i| WireId::new(i);
/// let g = Gate::ccflip(w(0), w(1), w(2)).unwrap();
/// assert_eq!(g.arity(), 3);
/// assert!(Gate::cflip(w(0), w(0)).is_err());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Gate {
    /// Unconditional bit-flip of `target`
    Flip { target: WireId },
    /// Bit-flip of `target` when `control` equals `polarity`
    CFlip {
        control: WireId,
        polarity: bool,
        target: WireId,
    },
    /// Bit-flip of `target` when both controls match their polarities
    CCFlip {
        controls: [WireId; 2],
        polarities: [bool; 2],
        target: WireId,
    },
}

impl Gate {
    /// Unconditional flip
    #[inline]
    pub const fn flip(target: WireId) -> Self {
        Self::Flip { target }
    }

    /// Controlled flip firing on control = 1
    pub fn cflip(control: WireId, target: WireId) -> Result<Self> {
        Self::cflip_if(control, true, target)
    }

    /// Controlled flip with explicit control polarity
    pub fn cflip_if(control: WireId, polarity: bool, target: WireId) -> Result<Self> {
        if control == target {
            return Err(SynthError::InvalidGate {
                kind: "CFlip",
                wire: target,
            });
        }
        Ok(Self::CFlip {
            control,
            polarity,
            target,
        })
    }

    /// Doubly-controlled flip firing on both controls = 1
    pub fn ccflip(c0: WireId, c1: WireId, target: WireId) -> Result<Self> {
        Self::ccflip_if(c0, true, c1, true, target)
    }

    /// Doubly-controlled flip with explicit control polarities
    pub fn ccflip_if(c0: WireId, p0: bool, c1: WireId, p1: bool, target: WireId) -> Result<Self> {
        if c0 == target || c1 == target {
            return Err(SynthError::InvalidGate {
                kind: "CCFlip",
                wire: target,
            });
        }
        if c0 == c1 {
            return Err(SynthError::DuplicateWire(c0));
        }
        Ok(Self::CCFlip {
            controls: [c0, c1],
            polarities: [p0, p1],
            target,
        })
    }

    /// The wire this gate flips
    #[inline]
    pub const fn target(&self) -> WireId {
        match self {
            Self::Flip { target }
            | Self::CFlip { target, .. }
            | Self::CCFlip { target, .. } => *target,
        }
    }

    /// Number of wires the gate touches
    #[inline]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Flip { .. } => 1,
            Self::CFlip { .. } => 2,
            Self::CCFlip { .. } => 3,
        }
    }

    /// All wires touched by the gate, controls first
    pub fn wires(&self) -> SmallVec<[WireId; 3]> {
        match *self {
            Self::Flip { target } => SmallVec::from_slice(&[target]),
            Self::CFlip {
                control, target, ..
            } => SmallVec::from_slice(&[control, target]),
            Self::CCFlip {
                controls, target, ..
            } => SmallVec::from_slice(&[controls[0], controls[1], target]),
        }
    }

    /// The inverse gate
    ///
    /// Every elementary reversible gate is its own inverse.
    #[inline]
    pub const fn inverse(&self) -> Self {
        *self
    }

    /// Copy of the gate with every wire passed through `map`
    ///
    /// Callers guarantee `map` covers every wire index the gate uses; this
    /// is internal plumbing for [`crate::Circuit::append`], which validates
    /// the map up front.
    pub(crate) fn remapped(&self, map: &[WireId]) -> Self {
        let m = |w: WireId| map[w.index()];
        match *self {
            Self::Flip { target } => Self::Flip { target: m(target) },
            Self::CFlip {
                control,
                polarity,
                target,
            } => Self::CFlip {
                control: m(control),
                polarity,
                target: m(target),
            },
            Self::CCFlip {
                controls,
                polarities,
                target,
            } => Self::CCFlip {
                controls: [m(controls[0]), m(controls[1])],
                polarities,
                target: m(target),
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pol = |p: bool| if p { "" } else { "!" };
        match self {
            Self::Flip { target } => write!(f, "X({})", target),
            Self::CFlip {
                control,
                polarity,
                target,
            } => write!(f, "CX({}{}, {})", pol(*polarity), control, target),
            Self::CCFlip {
                controls,
                polarities,
                target,
            } => write!(
                f,
                "CCX({}{}, {}{}, {})",
                pol(polarities[0]),
                controls[0],
                pol(polarities[1]),
                controls[1],
                target
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(i: usize) -> WireId {
        WireId::new(i)
    }

    #[test]
    fn test_flip() {
        let g = Gate::flip(w(3));
        assert_eq!(g.target(), w(3));
        assert_eq!(g.arity(), 1);
        assert_eq!(g.wires().into_vec(), vec![w(3)]);
    }

    #[test]
    fn test_cflip_rejects_self_control() {
        let err = Gate::cflip(w(1), w(1)).unwrap_err();
        assert!(matches!(err, SynthError::InvalidGate { kind: "CFlip", .. }));
    }

    #[test]
    fn test_ccflip_rejects_self_control() {
        assert!(Gate::ccflip(w(0), w(1), w(1)).is_err());
        assert!(Gate::ccflip(w(1), w(0), w(1)).is_err());
    }

    #[test]
    fn test_ccflip_rejects_duplicate_controls() {
        let err = Gate::ccflip(w(2), w(2), w(0)).unwrap_err();
        assert_eq!(err, SynthError::DuplicateWire(w(2)));
    }

    #[test]
    fn test_polarity_display() {
        let g = Gate::cflip_if(w(0), false, w(1)).unwrap();
        assert_eq!(format!("{}", g), "CX(!w0, w1)");
        let g = Gate::ccflip_if(w(0), true, w(1), false, w(2)).unwrap();
        assert_eq!(format!("{}", g), "CCX(w0, !w1, w2)");
    }

    #[test]
    fn test_inverse_is_identity_on_gate() {
        let g = Gate::ccflip(w(0), w(1), w(2)).unwrap();
        assert_eq!(g.inverse(), g);
    }

    #[test]
    fn test_remapped() {
        let map = [w(5), w(6), w(7)];
        let g = Gate::ccflip(w(0), w(2), w(1)).unwrap().remapped(&map);
        assert_eq!(
            g,
            Gate::ccflip(w(5), w(7), w(6)).unwrap()
        );
    }
}
