//! Reversible arithmetic fragment builders and long-division synthesis
//!
//! Builders in this crate produce [`revsynth_core::Circuit`] fragments over
//! the classical reversible gate basis:
//! - [`adder`] / [`ctrl_add`]: in-place ripple-carry addition
//! - [`uneql_add`] / [`ctrl_uneql_add`]: addition into a one-wire-wider
//!   accumulator
//! - [`cmpr`]: three-way magnitude comparison into two ancilla wires
//! - [`ctrl_eql_sbt`] / [`ctrl_uneql_sbt`]: controlled two's-complement
//!   subtraction
//! - [`long_division_divider`]: restoring division producing quotient and
//!   remainder
//!
//! Every builder is a pure function of its width parameters; fragments are
//! immutable values composed by [`revsynth_core::Circuit::append`]. Each
//! fragment restores every register it dirties except its declared outputs,
//! so fragments chain without leaking garbage bits.
//!
//! # Example
//! ```
//! use revsynth_arith::long_division_divider;
//!
//! let circuit = long_division_divider(4, 4).unwrap();
//! // quotient register and remainder register are both 4 wires
//! assert_eq!(circuit.register("r").unwrap().width(), 4);
//! assert_eq!(circuit.register("d").unwrap().width(), 4);
//! ```

pub mod adder;
pub mod comparator;
pub mod divider;
pub mod subtractor;

pub use adder::{adder, ctrl_add, ctrl_uneql_add, uneql_add};
pub use comparator::cmpr;
pub use divider::{
    long_division_divider, long_division_divider_with, AdderStyle, RippleCarry,
};
pub use subtractor::{ctrl_eql_sbt, ctrl_uneql_sbt};

use revsynth_core::{Result, SynthError};

/// Validate a builder width parameter
pub(crate) fn fragment_width(fragment: &'static str, width: usize) -> Result<usize> {
    if width == 0 {
        return Err(SynthError::width_at_least_one(fragment, 0));
    }
    Ok(width)
}
