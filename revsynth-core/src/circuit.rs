//! Composable reversible circuit representation

use crate::{Gate, Register, RegisterRole, Result, SynthError, WireId};

/// An ordered sequence of elementary gates over a set of declared registers
///
/// A circuit is pure data: building one performs no computation beyond
/// parameter validation. Fragments produced by builders are composed by
/// [`append`](Circuit::append), which splices a fragment's gate list into a
/// host circuit under an explicit wire remapping.
///
/// # Example
/// ```
/// use revsynth_core::{Circuit, RegisterRole};
///
/// let mut circuit = Circuit::new();
/// let a = circuit.add_register("a", 2, RegisterRole::Output).unwrap();
/// let a0 = a.wire(0).unwrap();
/// let a1 = a.wire(1).unwrap();
/// circuit.flip(a0).unwrap().cflip(a0, a1).unwrap();
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    registers: Vec<Register>,
    num_wires: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit with no registers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty circuit with pre-allocated gate capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registers: Vec::new(),
            num_wires: 0,
            gates: Vec::with_capacity(capacity),
        }
    }

    /// Declare a register of `width` fresh wires
    ///
    /// Wires are allocated contiguously after any existing registers, so a
    /// circuit's flat wire order is its register declaration order.
    ///
    /// # Errors
    /// Returns [`SynthError::InvalidWidth`] for a zero width.
    pub fn add_register(
        &mut self,
        name: impl Into<String>,
        width: usize,
        role: RegisterRole,
    ) -> Result<Register> {
        if width == 0 {
            return Err(SynthError::width_at_least_one("register", 0));
        }
        let reg = Register::new(name.into(), self.num_wires, width, role);
        self.num_wires += width;
        self.registers.push(reg.clone());
        Ok(reg)
    }

    /// Total number of wires across all registers
    #[inline]
    pub const fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// Number of gates
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit contains no gates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The declared registers, in declaration order
    #[inline]
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Look up a register by name
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.registers.iter().find(|r| r.name() == name)
    }

    /// Iterate over the gate sequence
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Append a validated gate
    ///
    /// # Errors
    /// Returns [`SynthError::InvalidWire`] if any wire is out of bounds.
    pub fn push(&mut self, gate: Gate) -> Result<&mut Self> {
        for w in gate.wires() {
            if w.index() >= self.num_wires {
                return Err(SynthError::invalid_wire(w, self.num_wires));
            }
        }
        self.gates.push(gate);
        Ok(self)
    }

    /// Emit an unconditional flip
    pub fn flip(&mut self, target: WireId) -> Result<&mut Self> {
        self.push(Gate::flip(target))
    }

    /// Emit a controlled flip firing on control = 1
    pub fn cflip(&mut self, control: WireId, target: WireId) -> Result<&mut Self> {
        self.push(Gate::cflip(control, target)?)
    }

    /// Emit a controlled flip with explicit polarity
    pub fn cflip_if(&mut self, control: WireId, polarity: bool, target: WireId) -> Result<&mut Self> {
        self.push(Gate::cflip_if(control, polarity, target)?)
    }

    /// Emit a doubly-controlled flip firing on both controls = 1
    pub fn ccflip(&mut self, c0: WireId, c1: WireId, target: WireId) -> Result<&mut Self> {
        self.push(Gate::ccflip(c0, c1, target)?)
    }

    /// Emit a doubly-controlled flip with explicit polarities
    pub fn ccflip_if(
        &mut self,
        c0: WireId,
        p0: bool,
        c1: WireId,
        p1: bool,
        target: WireId,
    ) -> Result<&mut Self> {
        self.push(Gate::ccflip_if(c0, p0, c1, p1, target)?)
    }

    /// Splice a fragment's gate sequence into this circuit
    ///
    /// `wire_map[i]` names the host wire that fragment wire `i` lands on.
    /// The map must cover every fragment wire, stay in bounds, and be
    /// injective: two fragment wires aliased onto one host wire would
    /// change the fragment's semantics silently.
    ///
    /// The fragment's register structure is not imported; only its gates
    /// are, rewritten onto the mapped wires. This is the single place wire
    /// index arithmetic happens during composition.
    ///
    /// # Errors
    /// [`SynthError::RemapMismatch`], [`SynthError::WireAliased`] or
    /// [`SynthError::InvalidWire`] on a malformed map. The host circuit is
    /// left untouched on error.
    pub fn append(&mut self, fragment: &Circuit, wire_map: &[WireId]) -> Result<&mut Self> {
        if wire_map.len() != fragment.num_wires() {
            return Err(SynthError::RemapMismatch {
                expected: fragment.num_wires(),
                actual: wire_map.len(),
            });
        }
        let mut bound = vec![false; self.num_wires];
        for &w in wire_map {
            if w.index() >= self.num_wires {
                return Err(SynthError::invalid_wire(w, self.num_wires));
            }
            if bound[w.index()] {
                return Err(SynthError::WireAliased(w));
            }
            bound[w.index()] = true;
        }
        self.gates
            .extend(fragment.gates.iter().map(|g| g.remapped(wire_map)));
        Ok(self)
    }

    /// The inverse circuit: same registers, gate list reversed
    ///
    /// Because every elementary gate is an involution, applying a circuit
    /// and then its reversal is the identity on every wire. Builders use
    /// this for uncomputation phases; tests use it to certify that
    /// [`RegisterRole::Scratch`] registers really are restored.
    pub fn reversed(&self) -> Circuit {
        Self {
            registers: self.registers.clone(),
            num_wires: self.num_wires,
            gates: self.gates.iter().rev().map(Gate::inverse).collect(),
        }
    }

    /// Check that no gate targets a wire of a read-only register
    ///
    /// # Errors
    /// Returns [`SynthError::Validation`] naming the offending gate.
    pub fn check_roles(&self) -> Result<()> {
        for (i, gate) in self.gates.iter().enumerate() {
            let target = gate.target();
            for reg in &self.registers {
                if reg.role() == RegisterRole::ReadOnly && reg.contains(target) {
                    return Err(SynthError::Validation(format!(
                        "gate {} ({}) targets read-only register '{}'",
                        i,
                        gate,
                        reg.name()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} wires, {} gates)",
            self.num_wires,
            self.len()
        )?;
        for (i, gate) in self.gates.iter().enumerate() {
            writeln!(f, "  {}: {}", i, gate)?;
        }
        Ok(())
    }
}
