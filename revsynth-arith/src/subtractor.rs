//! Controlled subtractor fragment builders
//!
//! Subtraction is the adder run inside a two's-complement sandwich on the
//! accumulator: `b - a = NOT(NOT(b) + a)`. Gating the sandwich's flips and
//! the inner adder on the same control wire yields a controlled subtractor
//! that is the exact identity when the control is off.

use crate::{ctrl_add, ctrl_uneql_add, fragment_width};
use revsynth_core::{Circuit, RegisterRole, Result, WireId};

/// Build a controlled subtractor over two equal-width registers
///
/// Maps `(a, b, c) → (a, b - a mod 2^width, c)` when `c = 1`, identity when
/// `c = 0`.
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
pub fn ctrl_eql_sbt(width: usize) -> Result<Circuit> {
    let n = fragment_width("ctrl_eql_sbt", width)?;
    let mut circuit = Circuit::new();
    let a: Vec<WireId> = circuit
        .add_register("a", n, RegisterRole::Scratch)?
        .wires()
        .collect();
    let b: Vec<WireId> = circuit
        .add_register("b", n, RegisterRole::Output)?
        .wires()
        .collect();
    let c = circuit
        .add_register("c", 1, RegisterRole::ReadOnly)?
        .wire(0)?;

    let add = ctrl_add(n)?;
    let map: Vec<WireId> = a.iter().chain(&b).chain(&[c]).copied().collect();

    for &w in &b {
        circuit.cflip(c, w)?;
    }
    circuit.append(&add, &map)?;
    for &w in &b {
        circuit.cflip(c, w)?;
    }
    Ok(circuit)
}

/// Build a controlled subtractor whose accumulator is one wire wider than
/// its operand
///
/// Maps `(a, y, c, z) → (a, y - a mod 2^{width+1}, c, z)` when `c = 1`,
/// identity when `c = 0`. The high accumulator wire doubles as a borrow
/// indicator when the caller keeps values below `2^width`, which is what
/// the long-division windows rely on. `z` is a borrowed ancilla wire,
/// zero in and zero out.
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
pub fn ctrl_uneql_sbt(width: usize) -> Result<Circuit> {
    let m = fragment_width("ctrl_uneql_sbt", width)?;
    let mut circuit = Circuit::new();
    let a: Vec<WireId> = circuit
        .add_register("a", m, RegisterRole::Scratch)?
        .wires()
        .collect();
    let y: Vec<WireId> = circuit
        .add_register("y", m + 1, RegisterRole::Output)?
        .wires()
        .collect();
    let c = circuit
        .add_register("c", 1, RegisterRole::ReadOnly)?
        .wire(0)?;
    let z = circuit
        .add_register("z", 1, RegisterRole::Scratch)?
        .wire(0)?;

    let add = ctrl_uneql_add(m)?;
    let map: Vec<WireId> = a.iter().chain(&y).chain(&[c, z]).copied().collect();

    for &w in &y {
        circuit.cflip(c, w)?;
    }
    circuit.append(&add, &map)?;
    for &w in &y {
        circuit.cflip(c, w)?;
    }
    Ok(circuit)
}
