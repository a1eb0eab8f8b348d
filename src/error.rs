//! Engine error taxonomy.
//!
//! Per-attempt failures are recovered internally by the retry loop and
//! never surface here; routine scoring rejection is an `Option`, not an
//! error. Only terminal outcomes are represented.

use thiserror::Error;

/// Terminal failure of the assignment search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The requested group count is zero; no slot plan exists.
    #[error("cannot build a slot plan for zero groups")]
    InfeasibleSlotPlan,

    /// Every attempt in the budget failed to place all members.
    ///
    /// No partial assignment is returned. Usual causes are overly strict
    /// duplicate-name or leader-eligibility constraints, or a gender/slot
    /// combination that cannot balance.
    #[error(
        "no feasible assignment after {attempts} attempts \
         (usual causes: duplicate-name or leader-eligibility constraints, \
         or an infeasible gender/slot combination)"
    )]
    RetryBudgetExhausted {
        /// Number of attempts made.
        attempts: usize,
    },

    /// The caller's cancellation flag was observed between attempts.
    #[error("assignment cancelled after {attempts} attempts")]
    Cancelled {
        /// Number of attempts completed before cancellation.
        attempts: usize,
    },
}
