//! Ripple-carry adder fragment builders
//!
//! All adders here follow the same in-place scheme: the operand register
//! doubles as the carry carrier. Half-sums are XORed into the accumulator,
//! the operand's own wires are pre-mixed so each can absorb a clean carry
//! bit, carries ripple upward through the operand, and a mirrored descending
//! phase writes the sums while unwinding the carries. The operand leaves the
//! fragment holding exactly its input value.

use crate::fragment_width;
use revsynth_core::{Circuit, RegisterRole, Result, WireId};

/// Build an adder over two equal-width registers
///
/// The produced circuit maps `(a, b) → (a, a + b mod 2^width)`. Register
/// `a` is dirtied by the carry chain and restored; `b` carries the sum.
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
///
/// # Example
/// ```
/// use revsynth_arith::adder;
///
/// let circuit = adder(4).unwrap();
/// assert_eq!(circuit.num_wires(), 8);
/// assert_eq!(circuit.register("a").unwrap().width(), 4);
/// ```
pub fn adder(width: usize) -> Result<Circuit> {
    let n = fragment_width("adder", width)?;
    let mut circuit = Circuit::new();
    let a: Vec<WireId> = circuit
        .add_register("a", n, RegisterRole::Scratch)?
        .wires()
        .collect();
    let b: Vec<WireId> = circuit
        .add_register("b", n, RegisterRole::Output)?
        .wires()
        .collect();

    if n == 1 {
        circuit.cflip(a[0], b[0])?;
        return Ok(circuit);
    }

    // half-sums
    for i in (1..n).rev() {
        circuit.cflip(a[i], b[i])?;
    }
    // pre-mix each carry slot with the operand bit below it
    for i in (1..n - 1).rev() {
        circuit.cflip(a[i], a[i + 1])?;
    }
    // carry ripple
    for i in 0..n - 1 {
        circuit.ccflip(a[i], b[i], a[i + 1])?;
    }
    // sums, unwinding each carry right after it is consumed
    for i in (1..n).rev() {
        circuit.cflip(a[i], b[i])?;
        circuit.ccflip(a[i - 1], b[i - 1], a[i])?;
    }
    // undo the pre-mix
    for i in 1..n - 1 {
        circuit.cflip(a[i], a[i + 1])?;
    }
    // fold the operand back out of the half-sums
    for i in 1..n {
        circuit.cflip(a[i], b[i])?;
    }
    circuit.cflip(a[0], b[0])?;
    Ok(circuit)
}

/// Build a controlled adder over two equal-width registers
///
/// Maps `(a, b, c) → (a, a + b mod 2^width, c)` when `c = 1` and is the
/// identity when `c = 0`. Only the writes that land the sum in `b` are
/// gated on `c`; the carry machinery inside `a` runs unconditionally and is
/// uncomputed either way, and the ungated half-sum XORs into `b` cancel
/// against the folding phase when the sum writes are skipped.
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
pub fn ctrl_add(width: usize) -> Result<Circuit> {
    let n = fragment_width("ctrl_add", width)?;
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

    if n == 1 {
        circuit.ccflip(c, a[0], b[0])?;
        return Ok(circuit);
    }

    for i in (1..n).rev() {
        circuit.cflip(a[i], b[i])?;
    }
    for i in (1..n - 1).rev() {
        circuit.cflip(a[i], a[i + 1])?;
    }
    for i in 0..n - 1 {
        circuit.ccflip(a[i], b[i], a[i + 1])?;
    }
    for i in (1..n).rev() {
        circuit.ccflip(c, a[i], b[i])?;
        circuit.ccflip(a[i - 1], b[i - 1], a[i])?;
    }
    for i in 1..n - 1 {
        circuit.cflip(a[i], a[i + 1])?;
    }
    for i in 1..n {
        circuit.cflip(a[i], b[i])?;
    }
    circuit.ccflip(c, a[0], b[0])?;
    Ok(circuit)
}

/// Build an adder whose accumulator is one wire wider than its operand
///
/// Maps `(a, y) → (a, a + y mod 2^{width+1})` for an operand `a` of
/// `width` wires and accumulator `y` of `width + 1` wires. The carry out of
/// the operand's top position lands directly on `y`'s spare high wire
/// (together with its pre-mix term), so no ancilla is needed.
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
pub fn uneql_add(width: usize) -> Result<Circuit> {
    let m = fragment_width("uneql_add", width)?;
    let mut circuit = Circuit::new();
    let a: Vec<WireId> = circuit
        .add_register("a", m, RegisterRole::Scratch)?
        .wires()
        .collect();
    let y: Vec<WireId> = circuit
        .add_register("y", m + 1, RegisterRole::Output)?
        .wires()
        .collect();

    if m == 1 {
        circuit.ccflip(a[0], y[0], y[1])?;
        circuit.cflip(a[0], y[0])?;
        return Ok(circuit);
    }

    for i in (1..m).rev() {
        circuit.cflip(a[i], y[i])?;
    }
    // the spare high wire takes the top pre-mix term in place of a[m]
    circuit.cflip(a[m - 1], y[m])?;
    for i in (1..m - 1).rev() {
        circuit.cflip(a[i], a[i + 1])?;
    }
    for i in 0..m - 1 {
        circuit.ccflip(a[i], y[i], a[i + 1])?;
    }
    // top carry goes straight onto the output high wire
    circuit.ccflip(a[m - 1], y[m - 1], y[m])?;
    for i in (1..m).rev() {
        circuit.cflip(a[i], y[i])?;
        circuit.ccflip(a[i - 1], y[i - 1], a[i])?;
    }
    for i in 1..m - 1 {
        circuit.cflip(a[i], a[i + 1])?;
    }
    for i in 1..m {
        circuit.cflip(a[i], y[i])?;
    }
    circuit.cflip(a[0], y[0])?;
    Ok(circuit)
}

/// Build the controlled form of [`uneql_add`]
///
/// Maps `(a, y, c, z) → (a, a + y mod 2^{width+1}, c, z)` when `c = 1`,
/// identity when `c = 0`; `z` is a single borrowed ancilla wire that must
/// enter at zero and leaves at zero.
///
/// The spare high wire of `y` is an output, so its carry cannot be written
/// unconditionally the way [`uneql_add`] does. Instead the top carry is
/// computed into `z`, copied onto `y`'s high wire under `c`, and uncomputed
/// in two steps: the product term while the carry chain is still live, the
/// pre-mix term after the operand has been fully restored.
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
pub fn ctrl_uneql_add(width: usize) -> Result<Circuit> {
    let m = fragment_width("ctrl_uneql_add", width)?;
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

    if m == 1 {
        circuit.ccflip(a[0], y[0], z)?;
        circuit.ccflip(c, z, y[1])?;
        circuit.ccflip(a[0], y[0], z)?;
        circuit.ccflip(c, a[0], y[0])?;
        return Ok(circuit);
    }

    for i in (1..m).rev() {
        circuit.cflip(a[i], y[i])?;
    }
    circuit.cflip(a[m - 1], z)?;
    for i in (1..m - 1).rev() {
        circuit.cflip(a[i], a[i + 1])?;
    }
    for i in 0..m - 1 {
        circuit.ccflip(a[i], y[i], a[i + 1])?;
    }
    circuit.ccflip(a[m - 1], y[m - 1], z)?;
    circuit.ccflip(c, z, y[m])?;
    circuit.ccflip(a[m - 1], y[m - 1], z)?;
    for i in (1..m).rev() {
        circuit.ccflip(c, a[i], y[i])?;
        circuit.ccflip(a[i - 1], y[i - 1], a[i])?;
    }
    for i in 1..m - 1 {
        circuit.cflip(a[i], a[i + 1])?;
    }
    // operand is whole again; clear the pre-mix term out of the ancilla
    circuit.cflip(a[m - 1], z)?;
    for i in 1..m {
        circuit.cflip(a[i], y[i])?;
    }
    circuit.ccflip(c, a[0], y[0])?;
    Ok(circuit)
}
