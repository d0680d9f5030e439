//! The incremental sequence merger.
//!
//! [`SequenceMerger`] folds sequences one at a time into a running merged
//! order. Each input must be a valid linearization of the same underlying
//! DAG; the merger reconciles the running order against each new sequence
//! with a two-pointer walk over the longer side (the spine) and the shorter
//! side, using membership sets to decide, in O(1) per step, whether a
//! diverging item is still pending ahead on the other side.
//!
//! # Invariants
//!
//! - The merged order contains each item at most once.
//! - For every sequence merged so far, any two of its items keep their
//!   relative order in the merged order.
//! - Under [`MergeDiscipline::SharedTerminal`], the merged order's last item
//!   is the common terminal of every sequence merged so far.
//! - A failed merge leaves the merged order at its pre-call value.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MergeError, MergeResult};

/// How a merge step treats the ends of its two inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeDiscipline {
    /// No terminal constraint. After reconciling the overlapping prefix,
    /// any unconsumed tail of the spine is appended verbatim.
    #[default]
    FreeTail,
    /// Every sequence must end in the same item, and each merge step must
    /// exhaust both sides together. The shared terminal is guaranteed to be
    /// the last element of the merged order.
    SharedTerminal,
}

/// Incremental merger of DAG linearizations.
///
/// Owns the running merged order exclusively; callers only ever receive
/// copies via [`merged_order`]. The first merged sequence seeds the order
/// verbatim, and each later merge atomically replaces it with a freshly
/// reconciled order or fails leaving it untouched.
///
/// [`merged_order`]: SequenceMerger::merged_order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceMerger<T> {
    /// The single linearization consistent with every sequence merged so far.
    merged: Vec<T>,
    /// Merge rules, fixed at construction, changeable only via `reset`.
    discipline: MergeDiscipline,
}

impl<T> Default for SequenceMerger<T> {
    fn default() -> Self {
        Self::new(MergeDiscipline::default())
    }
}

impl<T> SequenceMerger<T> {
    /// Create an empty merger with the given discipline.
    pub fn new(discipline: MergeDiscipline) -> Self {
        Self {
            merged: Vec::new(),
            discipline,
        }
    }

    /// The discipline applied to subsequent merges.
    pub fn discipline(&self) -> MergeDiscipline {
        self.discipline
    }

    /// Number of items in the merged order.
    pub fn len(&self) -> usize {
        self.merged.len()
    }

    /// Returns `true` if no sequence has been merged since construction or
    /// the last reset.
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    /// Clear the merged order and set the discipline for subsequent merges.
    pub fn reset(&mut self, discipline: MergeDiscipline) {
        self.merged.clear();
        self.discipline = discipline;
    }
}

impl<T> SequenceMerger<T>
where
    T: Clone + Eq + Hash + Ord,
{
    /// A snapshot copy of the current merged order.
    pub fn merged_order(&self) -> Vec<T> {
        self.merged.clone()
    }

    // ---------------------------------------------------------------
    // Merging
    // ---------------------------------------------------------------

    /// Merge one sequence into the running order.
    ///
    /// `sequence` must be non-empty and contain distinct items. Under
    /// [`MergeDiscipline::SharedTerminal`] its last item must equal the
    /// running order's last item (the first sequence establishes the
    /// terminal). On any error the running order is left unchanged.
    pub fn merge(&mut self, sequence: &[T]) -> MergeResult<(), T> {
        if sequence.is_empty() {
            return Err(MergeError::EmptySequence);
        }

        if self.merged.is_empty() {
            self.merged = sequence.to_vec();
            debug!(items = self.merged.len(), "seeded merged order");
            return Ok(());
        }

        if self.discipline == MergeDiscipline::SharedTerminal {
            if let (Some(expected), Some(found)) = (self.merged.last(), sequence.last()) {
                if expected != found {
                    return Err(MergeError::TerminalMismatch {
                        expected: expected.clone(),
                        found: found.clone(),
                    });
                }
            }
        }

        // The longer side becomes the spine; ties keep the running order.
        // Selection only decides which side's tail survives under FreeTail.
        let (spine, short) = if sequence.len() > self.merged.len() {
            (sequence, self.merged.as_slice())
        } else {
            (self.merged.as_slice(), sequence)
        };

        let reconciled = Self::reconcile(spine, short, self.discipline)?;
        debug!(
            incoming = sequence.len(),
            merged = reconciled.len(),
            "merged sequence"
        );
        self.merged = reconciled;

        Ok(())
    }

    /// Merge several sequences in order, stopping at the first error.
    ///
    /// Equivalent to calling [`merge`](SequenceMerger::merge) once per
    /// sequence; a failure leaves the running order at the state reached by
    /// the last successful merge.
    pub fn merge_all<I, S>(&mut self, sequences: I) -> MergeResult<(), T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        for sequence in sequences {
            self.merge(sequence.as_ref())?;
        }
        Ok(())
    }

    /// Reconcile the spine against the shorter sequence, producing the new
    /// merged order.
    ///
    /// Walks both sides with one cursor each. Equal items are emitted once.
    /// At a divergence, the membership sets tell which cursor's item the
    /// other side is still waiting for; if each side is waiting for the
    /// other's item the combined partial order has a cycle. Items pending in
    /// neither remaining set are mutually incomparable and are emitted in
    /// ascending order, keeping the output deterministic.
    fn reconcile(
        spine: &[T],
        short: &[T],
        discipline: MergeDiscipline,
    ) -> MergeResult<Vec<T>, T> {
        let mut pending_spine: HashSet<&T> = spine.iter().collect();
        let mut pending_short: HashSet<&T> = short.iter().collect();

        let mut out = Vec::with_capacity(spine.len() + short.len());
        let mut i = 0;
        let mut j = 0;

        while i < spine.len() && j < short.len() {
            let a = &spine[i];
            let b = &short[j];

            if a == b {
                out.push(a.clone());
                pending_spine.remove(a);
                pending_short.remove(b);
                i += 1;
                j += 1;
                continue;
            }

            let b_ahead_in_spine = pending_spine.contains(b);
            let a_ahead_in_short = pending_short.contains(a);

            // Each side claims the other's current item must come later.
            if b_ahead_in_spine && a_ahead_in_short {
                return Err(MergeError::OrderConflict {
                    left: a.clone(),
                    right: b.clone(),
                });
            }

            if b_ahead_in_spine {
                // `a` never occurs in the short side: it is unconstrained
                // there and can be emitted now.
                out.push(a.clone());
                pending_spine.remove(a);
                i += 1;
            } else if a_ahead_in_short {
                out.push(b.clone());
                pending_short.remove(b);
                j += 1;
            } else {
                // Neither side will see the other's item again: mutually
                // incomparable, ordered by value.
                let (first, second) = if b < a { (b, a) } else { (a, b) };
                out.push(first.clone());
                out.push(second.clone());
                pending_spine.remove(a);
                pending_short.remove(b);
                i += 1;
                j += 1;
            }
        }

        // The shorter side must exhaust first or together with the spine;
        // leftovers here mean an input violated the distinctness precondition.
        if j < short.len() {
            return Err(MergeError::IncompleteMerge {
                unconsumed: short.len() - j,
            });
        }

        match discipline {
            MergeDiscipline::FreeTail => out.extend(spine[i..].iter().cloned()),
            MergeDiscipline::SharedTerminal => {
                if i < spine.len() {
                    return Err(MergeError::TerminalMismatch {
                        expected: spine[spine.len() - 1].clone(),
                        found: spine[i].clone(),
                    });
                }
            }
        }

        Ok(out)
    }
}
