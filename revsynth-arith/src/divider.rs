//! Restoring long-division circuit synthesis
//!
//! The orchestrator wires the adder family into the classic
//! restoring-division loop: slide a window over the dividend, trial-subtract
//! the divisor, read the borrow off the window's top wire, undo the
//! subtraction when it underflowed, and record the opposite of the borrow
//! as the quotient bit for that position.

use crate::{adder, ctrl_add, ctrl_uneql_add, uneql_add};
use revsynth_core::{AncillaPool, Circuit, RegisterRole, Result, SynthError, WireId};

/// Source of adder fragments for the division orchestrator
///
/// The orchestrator is agnostic to how addition is synthesized; any style
/// exposing an add and a controlled add over an `operand_width`-wire operand
/// and `acc_width`-wire accumulator plugs in. Fragment wire-order contract:
/// operand wires first, accumulator wires next, then (for the controlled
/// form) the control wire, then any ancilla wires the style needs. A style
/// may instead declare [`control_first`](AdderStyle::control_first) to move
/// its control wire to the very front, and the orchestrator permutes the
/// spliced wire list to match.
pub trait AdderStyle {
    /// An adder fragment: accumulator += operand
    fn add(&self, operand_width: usize, acc_width: usize) -> Result<Circuit>;

    /// A singly-controlled adder fragment
    fn ctrl_add(&self, operand_width: usize, acc_width: usize) -> Result<Circuit>;

    /// Whether controlled fragments expect the control wire first rather
    /// than after the accumulator
    fn control_first(&self) -> bool {
        false
    }
}

/// The built-in ripple-carry adder style
///
/// Supports equal widths and one wire of accumulator headroom, the two
/// shapes the division loop uses. Control wires come last.
#[derive(Copy, Clone, Debug, Default)]
pub struct RippleCarry;

impl AdderStyle for RippleCarry {
    fn add(&self, operand_width: usize, acc_width: usize) -> Result<Circuit> {
        if acc_width == operand_width {
            adder(operand_width)
        } else if acc_width == operand_width + 1 {
            uneql_add(operand_width)
        } else {
            Err(SynthError::InvalidWidth {
                fragment: "ripple-carry accumulator",
                width: acc_width,
                min: operand_width,
                max: operand_width + 1,
            })
        }
    }

    fn ctrl_add(&self, operand_width: usize, acc_width: usize) -> Result<Circuit> {
        if acc_width == operand_width {
            ctrl_add(operand_width)
        } else if acc_width == operand_width + 1 {
            ctrl_uneql_add(operand_width)
        } else {
            Err(SynthError::InvalidWidth {
                fragment: "ripple-carry accumulator",
                width: acc_width,
                min: operand_width,
                max: operand_width + 1,
            })
        }
    }
}

/// Synthesize a restoring long-division circuit with ripple-carry adders
///
/// Registers of the produced circuit, in wire order:
/// - `d[num_dividend_wires]`: dividend in, remainder out;
/// - `q[num_divisor_wires]`: divisor, restored;
/// - `r`: quotient out, `num_dividend_wires` wires when the registers are
///   equal width and `num_dividend_wires - num_divisor_wires + 1` otherwise;
/// - `anc[1]` (narrow-divisor form only): borrowed scratch, zero in/out.
///
/// Caller contract on the loaded values: with equal-width registers the
/// divisor must not exceed `2^{num_dividend_wires - 1}` (one spare high bit
/// makes every window's top wire an exact borrow indicator); with a
/// narrower divisor register the quotient must fit `r`, which a normalized
/// divisor (`2^{M-1} ≤ divisor < 2^M`) always guarantees. The divisor must
/// be nonzero.
///
/// # Errors
/// [`SynthError::InvalidWidth`] when either width is 0 or the divisor
/// register is wider than the dividend register; no partial circuit is
/// constructed.
///
/// # Example
/// ```
/// use revsynth_arith::long_division_divider;
///
/// let circuit = long_division_divider(4, 4).unwrap();
/// assert_eq!(circuit.register("r").unwrap().width(), 4);
///
/// assert!(long_division_divider(3, 4).is_err());
/// ```
pub fn long_division_divider(
    num_dividend_wires: usize,
    num_divisor_wires: usize,
) -> Result<Circuit> {
    long_division_divider_with(num_dividend_wires, num_divisor_wires, &RippleCarry)
}

/// Synthesize a restoring long-division circuit with a caller-chosen
/// [`AdderStyle`]
///
/// Semantics and register surface match [`long_division_divider`]; only the
/// internal adder fragments (and therefore the gate sequence) differ. Styles
/// that expect their control wire first are adapted transparently.
pub fn long_division_divider_with(
    num_dividend_wires: usize,
    num_divisor_wires: usize,
    adders: &dyn AdderStyle,
) -> Result<Circuit> {
    let n = num_dividend_wires;
    let m = num_divisor_wires;
    if n == 0 {
        return Err(SynthError::width_at_least_one("long_division_divider", 0));
    }
    if m == 0 || m > n {
        return Err(SynthError::InvalidWidth {
            fragment: "long_division_divider",
            width: m,
            min: 1,
            max: n,
        });
    }

    let acc_width = if m == n { n } else { m + 1 };
    let add = adders.add(m, acc_width)?;
    let cadd = adders.ctrl_add(m, acc_width)?;
    let add_spare = spare_wires(&add, m + acc_width)?;
    let cadd_spare = spare_wires(&cadd, m + acc_width + 1)?;

    let mut circuit = Circuit::new();
    let d: Vec<WireId> = circuit
        .add_register("d", n, RegisterRole::Output)?
        .wires()
        .collect();
    let q: Vec<WireId> = circuit
        .add_register("q", m, RegisterRole::Scratch)?
        .wires()
        .collect();
    let iterations = if m == n { n } else { n - m + 1 };
    let r: Vec<WireId> = circuit
        .add_register("r", iterations, RegisterRole::Output)?
        .wires()
        .collect();

    let pool_width = add_spare.max(cadd_spare);
    let mut pool = if pool_width > 0 {
        let anc = circuit.add_register("anc", pool_width, RegisterRole::Scratch)?;
        AncillaPool::new(&anc)
    } else {
        AncillaPool::empty()
    };

    for i in 1..=iterations {
        let window: Vec<WireId> = if m == n {
            d[n - i..].iter().chain(&r[..n - i]).copied().collect()
        } else if i == 1 {
            d[n - m..].iter().chain(&r[..1]).copied().collect()
        } else {
            d[iterations - i..iterations - i + m + 1].to_vec()
        };
        let slot = r[iterations - i];
        let top = window[acc_width - 1];

        // trial subtraction: two's-complement the window around an add
        for &w in &window {
            circuit.flip(w)?;
        }
        let borrowed = acquire_scratch(&mut pool, add_spare)?;
        circuit.append(&add, &splice_map(&q, &window, None, &borrowed, false))?;
        return_scratch(&mut pool, &borrowed)?;
        for &w in &window {
            circuit.flip(w)?;
        }

        // the window top now reads 1 exactly when the divisor did not fit
        circuit.cflip(top, slot)?;

        // restore the window when it underflowed
        let borrowed = acquire_scratch(&mut pool, cadd_spare)?;
        circuit.append(
            &cadd,
            &splice_map(&q, &window, Some(slot), &borrowed, adders.control_first()),
        )?;
        return_scratch(&mut pool, &borrowed)?;

        // store the quotient convention: 1 = subtraction stands
        circuit.flip(slot)?;
    }

    circuit.check_roles()?;
    Ok(circuit)
}

/// Wires a fragment declares beyond its operand/accumulator/control surface
fn spare_wires(fragment: &Circuit, surface: usize) -> Result<usize> {
    fragment
        .num_wires()
        .checked_sub(surface)
        .ok_or(SynthError::RemapMismatch {
            expected: surface,
            actual: fragment.num_wires(),
        })
}

/// Assemble the host wire list for one adder fragment splice
fn splice_map(
    operand: &[WireId],
    acc: &[WireId],
    control: Option<WireId>,
    ancillas: &[WireId],
    control_first: bool,
) -> Vec<WireId> {
    let mut map = Vec::with_capacity(operand.len() + acc.len() + 1 + ancillas.len());
    if control_first {
        map.extend(control);
    }
    map.extend_from_slice(operand);
    map.extend_from_slice(acc);
    if !control_first {
        map.extend(control);
    }
    map.extend_from_slice(ancillas);
    map
}

fn acquire_scratch(pool: &mut AncillaPool, count: usize) -> Result<Vec<WireId>> {
    let mut wires = Vec::with_capacity(count);
    for _ in 0..count {
        let w = pool.acquire()?;
        pool.mark_dirty(w)?;
        wires.push(w);
    }
    Ok(wires)
}

fn return_scratch(pool: &mut AncillaPool, wires: &[WireId]) -> Result<()> {
    for &w in wires {
        pool.restore(w)?;
        pool.release(w)?;
    }
    Ok(())
}
