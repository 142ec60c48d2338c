//! Magnitude comparator fragment builder

use crate::{adder, fragment_width, uneql_add};
use revsynth_core::{Circuit, RegisterRole, Result, WireId};

/// Build a three-way magnitude comparator
///
/// Registers: `a[width]`, `b[width]` (both restored) and a two-wire `aux`
/// output encoding the ordering of the integers held in `a` and `b`:
///
/// | `aux[0]` | `aux[1]` | meaning  |
/// |----------|----------|----------|
/// | 0        | 0        | `a == b` |
/// | 1        | 0        | `a < b`  |
/// | 0        | 1        | `a > b`  |
///
/// Both aux wires must enter at zero.
///
/// The comparison is done arithmetically: widening `b` by `aux[0]` and
/// two's-complement subtracting `a` drops the borrow onto `aux[0]`, which is
/// published into `aux[1]` and then cleared by adding `a` back. The mirrored
/// pass subtracts `b` from the widened `a`, leaving `a < b` in `aux[0]`, and
/// a final equal-width add of `b` restores `a` without touching the
/// published sign (the equal-width adder discards its carry-out).
///
/// # Errors
/// [`revsynth_core::SynthError::InvalidWidth`] for width 0.
///
/// # Example
/// ```
/// use revsynth_arith::cmpr;
///
/// let circuit = cmpr(3).unwrap();
/// assert_eq!(circuit.register("aux").unwrap().width(), 2);
/// ```
pub fn cmpr(width: usize) -> Result<Circuit> {
    let n = fragment_width("cmpr", width)?;
    let mut circuit = Circuit::new();
    let a: Vec<WireId> = circuit
        .add_register("a", n, RegisterRole::Scratch)?
        .wires()
        .collect();
    let b: Vec<WireId> = circuit
        .add_register("b", n, RegisterRole::Scratch)?
        .wires()
        .collect();
    let aux = circuit.add_register("aux", 2, RegisterRole::Output)?;
    let lt = aux.wire(0)?;
    let gt = aux.wire(1)?;

    let widened = uneql_add(n)?;
    let equal = adder(n)?;

    let b_acc: Vec<WireId> = a.iter().chain(&b).chain(&[lt]).copied().collect();
    let a_acc: Vec<WireId> = b.iter().chain(&a).chain(&[lt]).copied().collect();

    // (b, lt) -= a: borrow lands in lt
    for &w in b.iter().chain(&[lt]) {
        circuit.flip(w)?;
    }
    circuit.append(&widened, &b_acc)?;
    for &w in b.iter().chain(&[lt]) {
        circuit.flip(w)?;
    }
    // publish a > b
    circuit.cflip(lt, gt)?;
    // (b, lt) += a: restores b, clears lt
    circuit.append(&widened, &b_acc)?;

    // (a, lt) -= b: lt = a < b, kept
    for &w in a.iter().chain(&[lt]) {
        circuit.flip(w)?;
    }
    circuit.append(&widened, &a_acc)?;
    for &w in a.iter().chain(&[lt]) {
        circuit.flip(w)?;
    }
    // restore a mod 2^n; the carry that would clear lt is discarded
    let restore: Vec<WireId> = b.iter().chain(&a).copied().collect();
    circuit.append(&equal, &restore)?;

    Ok(circuit)
}
