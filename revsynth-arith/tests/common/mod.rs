//! Shared test helpers: a classical bit-vector evaluator for circuits
//!
//! The gate set is purely classical, so a fragment's semantics can be
//! checked by applying its gate list to a boolean state vector. This is
//! test tooling, not an execution backend.

#![allow(dead_code)]

use revsynth_core::{Circuit, Gate, WireId};

/// Apply a circuit's gate sequence to a classical state.
pub fn evaluate(circuit: &Circuit, bits: &mut [bool]) {
    assert_eq!(bits.len(), circuit.num_wires());
    for gate in circuit.gates() {
        match *gate {
            Gate::Flip { target } => bits[target.index()] ^= true,
            Gate::CFlip {
                control,
                polarity,
                target,
            } => {
                if bits[control.index()] == polarity {
                    bits[target.index()] ^= true;
                }
            }
            Gate::CCFlip {
                controls,
                polarities,
                target,
            } => {
                if bits[controls[0].index()] == polarities[0]
                    && bits[controls[1].index()] == polarities[1]
                {
                    bits[target.index()] ^= true;
                }
            }
        }
    }
}

/// The wires of a named register, in index order.
pub fn wires_of(circuit: &Circuit, name: &str) -> Vec<WireId> {
    circuit
        .register(name)
        .unwrap_or_else(|| panic!("no register named '{}'", name))
        .wires()
        .collect()
}

/// Write `value` little-endian across `wires`.
pub fn load(bits: &mut [bool], wires: &[WireId], value: u64) {
    for (i, w) in wires.iter().enumerate() {
        bits[w.index()] = (value >> i) & 1 == 1;
    }
}

/// Read the little-endian integer held across `wires`.
pub fn read(bits: &[bool], wires: &[WireId]) -> u64 {
    wires
        .iter()
        .enumerate()
        .fold(0, |acc, (i, w)| acc | (u64::from(bits[w.index()]) << i))
}

/// Zero state, named registers loaded, circuit applied.
pub fn run_loaded(circuit: &Circuit, loads: &[(&str, u64)]) -> Vec<bool> {
    let mut bits = vec![false; circuit.num_wires()];
    for (name, value) in loads {
        load(&mut bits, &wires_of(circuit, name), *value);
    }
    evaluate(circuit, &mut bits);
    bits
}
