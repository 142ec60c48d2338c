//! End-to-end correctness tests for the long-division orchestrator

mod common;

use common::{read, run_loaded, wires_of};
use revsynth_arith::{
    long_division_divider, long_division_divider_with, AdderStyle, RippleCarry,
};
use revsynth_core::{Circuit, RegisterRole, Result, SynthError, WireId};

#[test]
fn test_equal_width_division_exhaustive() {
    // divisor contract: at most 2^{n-1}
    for n in 1..=6u32 {
        let circuit = long_division_divider(n as usize, n as usize).unwrap();
        for dividend in 0..1u64 << n {
            for divisor in 1..=1u64 << (n - 1) {
                let bits = run_loaded(&circuit, &[("d", dividend), ("q", divisor)]);
                assert_eq!(
                    read(&bits, &wires_of(&circuit, "q")),
                    divisor,
                    "divisor clobbered: n {} d {} q {}",
                    n,
                    dividend,
                    divisor
                );
                assert_eq!(
                    read(&bits, &wires_of(&circuit, "r")),
                    dividend / divisor,
                    "bad quotient: n {} d {} q {}",
                    n,
                    dividend,
                    divisor
                );
                assert_eq!(
                    read(&bits, &wires_of(&circuit, "d")),
                    dividend % divisor,
                    "bad remainder: n {} d {} q {}",
                    n,
                    dividend,
                    divisor
                );
            }
        }
    }
}

#[test]
fn test_narrow_divisor_division() {
    // divisor contract: quotient fits the n-m+1 wire result register
    for n in 2..=7usize {
        for m in 1..n {
            let k = n - m + 1;
            let circuit = long_division_divider(n, m).unwrap();
            for dividend in 0..1u64 << n {
                for divisor in 1..1u64 << m {
                    if dividend / divisor >= 1 << k {
                        continue;
                    }
                    let bits = run_loaded(&circuit, &[("d", dividend), ("q", divisor)]);
                    assert_eq!(read(&bits, &wires_of(&circuit, "q")), divisor);
                    assert_eq!(
                        read(&bits, &wires_of(&circuit, "anc")),
                        0,
                        "dirty ancilla: n {} m {} d {} q {}",
                        n,
                        m,
                        dividend,
                        divisor
                    );
                    assert_eq!(
                        read(&bits, &wires_of(&circuit, "r")),
                        dividend / divisor,
                        "bad quotient: n {} m {} d {} q {}",
                        n,
                        m,
                        dividend,
                        divisor
                    );
                    assert_eq!(
                        read(&bits, &wires_of(&circuit, "d")),
                        dividend % divisor,
                        "bad remainder: n {} m {} d {} q {}",
                        n,
                        m,
                        dividend,
                        divisor
                    );
                }
            }
        }
    }
}

#[test]
fn test_ten_divided_by_three() {
    // 1010 / 0011 = 0011 remainder 0001
    let circuit = long_division_divider(4, 4).unwrap();
    let bits = run_loaded(&circuit, &[("d", 10), ("q", 3)]);
    assert_eq!(read(&bits, &wires_of(&circuit, "r")), 3);
    assert_eq!(read(&bits, &wires_of(&circuit, "d")), 1);
}

#[test]
fn test_reconstruction_identity() {
    let circuit = long_division_divider(5, 5).unwrap();
    for dividend in 0..32u64 {
        for divisor in 1..=16u64 {
            let bits = run_loaded(&circuit, &[("d", dividend), ("q", divisor)]);
            let quotient = read(&bits, &wires_of(&circuit, "r"));
            let remainder = read(&bits, &wires_of(&circuit, "d"));
            assert_eq!(quotient * divisor + remainder, dividend);
            assert!(remainder < divisor);
        }
    }
}

#[test]
fn test_width_boundary_failure() {
    let err = long_division_divider(4, 5).unwrap_err();
    assert!(matches!(err, SynthError::InvalidWidth { .. }));
    assert!(long_division_divider(0, 1).is_err());
    assert!(long_division_divider(4, 0).is_err());
}

/// A style that wants its control wire spliced first: the ripple fragments
/// wrapped behind a permuted register declaration, as a Fourier-basis
/// collaborator would present them.
struct ControlFirst;

impl AdderStyle for ControlFirst {
    fn add(&self, operand_width: usize, acc_width: usize) -> Result<Circuit> {
        RippleCarry.add(operand_width, acc_width)
    }

    fn ctrl_add(&self, operand_width: usize, acc_width: usize) -> Result<Circuit> {
        let inner = RippleCarry.ctrl_add(operand_width, acc_width)?;
        let spare = inner.num_wires() - (operand_width + acc_width + 1);

        let mut wrapped = Circuit::new();
        let c = wrapped.add_register("c", 1, RegisterRole::ReadOnly)?;
        let a = wrapped.add_register("a", operand_width, RegisterRole::Scratch)?;
        let y = wrapped.add_register("y", acc_width, RegisterRole::Output)?;
        let mut map: Vec<WireId> = a.wires().chain(y.wires()).collect();
        map.push(c.wire(0)?);
        if spare > 0 {
            let z = wrapped.add_register("z", spare, RegisterRole::Scratch)?;
            map.extend(z.wires());
        }
        wrapped.append(&inner, &map)?;
        Ok(wrapped)
    }

    fn control_first(&self) -> bool {
        true
    }
}

#[test]
fn test_adder_style_substitution_equivalence() {
    for (n, m) in [(4, 4), (5, 5), (5, 3), (6, 2)] {
        let ripple = long_division_divider(n, m).unwrap();
        let permuted = long_division_divider_with(n, m, &ControlFirst).unwrap();
        // same register surface, different internal gate sequence
        assert_eq!(ripple.num_wires(), permuted.num_wires());
        let max_q = if m == n { 1 << (n - 1) } else { (1 << m) - 1 };
        let k = if m == n { n } else { n - m + 1 };
        for dividend in 0..1u64 << n {
            for divisor in 1..=max_q as u64 {
                if dividend / divisor >= 1 << k {
                    continue;
                }
                let lhs = run_loaded(&ripple, &[("d", dividend), ("q", divisor)]);
                let rhs = run_loaded(&permuted, &[("d", dividend), ("q", divisor)]);
                assert_eq!(
                    read(&lhs, &wires_of(&ripple, "r")),
                    read(&rhs, &wires_of(&permuted, "r")),
                    "n {} m {} d {} q {}",
                    n,
                    m,
                    dividend,
                    divisor
                );
                assert_eq!(
                    read(&lhs, &wires_of(&ripple, "d")),
                    read(&rhs, &wires_of(&permuted, "d")),
                );
            }
        }
    }
}
