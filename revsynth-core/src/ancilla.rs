//! Ancilla wire bookkeeping

use crate::{Register, Result, SynthError, WireId};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SlotState {
    Free,
    Allocated,
    Dirty,
    Restored,
}

/// A pool of temporary wires assumed to start at zero
///
/// The pool tracks every slot through the lifecycle
/// `acquire → mark_dirty → restore → release`. A slot released (or
/// re-acquired) while still dirty is a logic fault in the calling
/// orchestrator, and the produced circuit would silently compute garbage,
/// so the pool fails eagerly with
/// [`SynthError::AncillaReuseViolation`] instead of letting it pass.
///
/// Pools are scoped to a single circuit construction and accessed
/// sequentially: each slot's dirty/clean cycle completes, in program order,
/// before the slot is handed out again.
///
/// # Example
/// ```
/// use revsynth_core::{AncillaPool, Circuit, RegisterRole};
///
/// let mut circuit = Circuit::new();
/// let anc = circuit.add_register("anc", 1, RegisterRole::Scratch).unwrap();
/// let mut pool = AncillaPool::new(&anc);
///
/// let z = pool.acquire().unwrap();
/// pool.mark_dirty(z).unwrap();
/// // ... splice a fragment that dirties and then uncomputes z ...
/// pool.restore(z).unwrap();
/// pool.release(z).unwrap();
/// assert!(pool.all_free());
/// ```
#[derive(Debug)]
pub struct AncillaPool {
    wires: Vec<WireId>,
    states: Vec<SlotState>,
}

impl AncillaPool {
    /// Create a pool over the wires of a scratch register
    pub fn new(register: &Register) -> Self {
        let wires: Vec<WireId> = register.wires().collect();
        let states = vec![SlotState::Free; wires.len()];
        Self { wires, states }
    }

    /// Create a pool with no slots
    ///
    /// Useful when a construction only conditionally needs ancillas;
    /// acquiring from an empty pool fails like an exhausted one.
    pub fn empty() -> Self {
        Self {
            wires: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Number of slots in the pool
    #[inline]
    pub fn capacity(&self) -> usize {
        self.wires.len()
    }

    /// Whether every slot has completed its cycle
    pub fn all_free(&self) -> bool {
        self.states.iter().all(|&s| s == SlotState::Free)
    }

    /// Borrow a clean slot
    ///
    /// # Errors
    /// Fails with [`SynthError::AncillaReuseViolation`] when no clean slot
    /// remains, i.e. every candidate is still allocated or dirty.
    pub fn acquire(&mut self) -> Result<WireId> {
        if let Some(i) = self.states.iter().position(|&s| s == SlotState::Free) {
            self.states[i] = SlotState::Allocated;
            return Ok(self.wires[i]);
        }
        let wire = self.wires.first().copied().unwrap_or(WireId::new(0));
        Err(SynthError::AncillaReuseViolation {
            wire,
            reason: "no clean slot available",
        })
    }

    /// Record that a borrowed slot has been written
    pub fn mark_dirty(&mut self, wire: WireId) -> Result<()> {
        self.transition(wire, SlotState::Allocated, SlotState::Dirty, "marked dirty while not allocated")
    }

    /// Record that uncomputation returned the slot to zero
    pub fn restore(&mut self, wire: WireId) -> Result<()> {
        let i = self.slot(wire)?;
        match self.states[i] {
            SlotState::Allocated | SlotState::Dirty => {
                self.states[i] = SlotState::Restored;
                Ok(())
            }
            _ => Err(SynthError::AncillaReuseViolation {
                wire,
                reason: "restored while not in use",
            }),
        }
    }

    /// Return a restored slot to the pool
    ///
    /// # Errors
    /// Releasing a slot that was dirtied but never restored is the reuse
    /// violation this pool exists to catch.
    pub fn release(&mut self, wire: WireId) -> Result<()> {
        let i = self.slot(wire)?;
        match self.states[i] {
            SlotState::Allocated | SlotState::Restored => {
                self.states[i] = SlotState::Free;
                Ok(())
            }
            SlotState::Dirty => Err(SynthError::AncillaReuseViolation {
                wire,
                reason: "released while still dirty",
            }),
            SlotState::Free => Err(SynthError::AncillaReuseViolation {
                wire,
                reason: "released while free",
            }),
        }
    }

    fn transition(
        &mut self,
        wire: WireId,
        from: SlotState,
        to: SlotState,
        reason: &'static str,
    ) -> Result<()> {
        let i = self.slot(wire)?;
        if self.states[i] != from {
            return Err(SynthError::AncillaReuseViolation { wire, reason });
        }
        self.states[i] = to;
        Ok(())
    }

    fn slot(&self, wire: WireId) -> Result<usize> {
        self.wires
            .iter()
            .position(|&w| w == wire)
            .ok_or(SynthError::AncillaReuseViolation {
                wire,
                reason: "wire does not belong to this pool",
            })
    }
}
