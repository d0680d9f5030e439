//! Error types for sequence merging.

/// Errors that can occur while merging a sequence into the running order.
///
/// All variants are detected synchronously inside
/// [`merge`](crate::SequenceMerger::merge) and leave the running order at
/// its pre-call value. Retrying with the same inputs cannot change the
/// outcome.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MergeError<T> {
    /// A merge was attempted with a zero-length sequence.
    #[error("cannot merge an empty sequence")]
    EmptySequence,

    /// Under shared-terminal discipline, a sequence does not end together
    /// with the running order.
    #[error("terminal mismatch: running order ends in {expected:?}, sequence reaches {found:?}")]
    TerminalMismatch {
        /// The shared terminal established by the running order.
        expected: T,
        /// The incoming sequence's last item, or the first unconsumed spine
        /// item when the reconciliation loop ends with the spine unexhausted.
        found: T,
    },

    /// The two sequences assert contradictory relative orders for the same
    /// pair of items: a cycle in the combined partial order.
    #[error("ordering conflict: {left:?} and {right:?} each claim to precede the other")]
    OrderConflict {
        /// The spine cursor's item at the point of conflict.
        left: T,
        /// The other cursor's item at the point of conflict.
        right: T,
    },

    /// The shorter sequence was not fully consumed when reconciliation
    /// ended. Indicates a violated precondition elsewhere (e.g. duplicate
    /// items inside one input sequence), not a legitimate ordering conflict.
    #[error("incomplete merge: {unconsumed} item(s) of the shorter sequence left unconsumed")]
    IncompleteMerge {
        /// Number of items left unconsumed in the shorter sequence.
        unconsumed: usize,
    },
}

/// Convenience alias for merge results.
pub type MergeResult<R, T> = Result<R, MergeError<T>>;
