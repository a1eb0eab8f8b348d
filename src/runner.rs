//! Retry-loop orchestration.
//!
//! [`AssignRunner`] drives the outer search: shuffle a slot plan, run up to
//! four greedy passes, and either commit the attempt's result or discard
//! all of its state and try again.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::config::AssignConfig;
use crate::error::AssignError;
use crate::member::{Member, Roster};
use crate::pass::assign_pass;
use crate::slots::{gender_slots, SlotPlan};
use crate::status::GroupStatus;

/// Result of a successful assignment search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignResult {
    /// Member id → group id (1-based). Every input member appears once.
    pub assignments: HashMap<usize, usize>,

    /// Final per-group aggregates of the winning attempt, index `g - 1`
    /// for group `g`. Carries the counts and gender split for reporting.
    pub groups: Vec<GroupStatus>,

    /// 1-based number of the attempt that succeeded. Attempts rejected by
    /// the slot-balance check are included.
    pub attempts: usize,
}

/// Executes the randomized greedy search with restarts.
///
/// # Usage
///
/// ```ignore
/// let roster = Roster::new(members, 8, leader_years);
/// let config = AssignConfig::default().with_seed(42);
/// let result = AssignRunner::run(&roster, &config)?;
/// println!("placed in {} attempts", result.attempts);
/// ```
pub struct AssignRunner;

impl AssignRunner {
    /// Runs the assignment search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AssignConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(roster: &Roster, config: &AssignConfig) -> Result<AssignResult, AssignError> {
        Self::run_with_cancel(roster, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked between attempts; when set, the search stops
    /// and returns [`AssignError::Cancelled`]. There is no partial result
    /// to salvage because failed attempts discard all of their state.
    pub fn run_with_cancel(
        roster: &Roster,
        config: &AssignConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AssignResult, AssignError> {
        config.validate().expect("invalid AssignConfig");

        if roster.groups == 0 {
            return Err(AssignError::InfeasibleSlotPlan);
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Balanced capacity multisets; each attempt re-matches them to
        // group ids by shuffling.
        let mut male_slots = gender_slots(roster.male_count(), roster.groups);
        let mut female_slots = gender_slots(roster.female_count(), roster.groups);

        // Oldest-first (lowest year) order biases the most constrained
        // members toward still-empty groups.
        let mut order: Vec<&Member> = roster.members.iter().collect();
        order.sort_by_key(|m| m.birth_year);

        for attempt in 1..=config.max_attempts {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(AssignError::Cancelled {
                        attempts: attempt - 1,
                    });
                }
            }

            male_slots.shuffle(&mut rng);
            female_slots.shuffle(&mut rng);
            let plan = SlotPlan::new(male_slots.clone(), female_slots.clone());
            if !plan.is_balanced() {
                // Unlucky zip of the two shuffles; still consumes budget.
                continue;
            }

            let mut statuses = vec![GroupStatus::new(); roster.groups];
            let mut assignments = HashMap::with_capacity(roster.members.len());
            let mut pending = order.clone();

            // Two strict passes, then two with the age constraint relaxed.
            // A repeated pass gets fresh candidate shuffles, so it can
            // succeed where the previous one failed.
            for &ignore_age in &[false, false, true, true] {
                if pending.is_empty() {
                    break;
                }
                pending = assign_pass(
                    &pending,
                    &plan,
                    &roster.leader_years,
                    &config.weights,
                    ignore_age,
                    &mut statuses,
                    &mut assignments,
                    &mut rng,
                );
            }

            if pending.is_empty() {
                debug!(attempts = attempt, "roster fully assigned");
                return Ok(AssignResult {
                    assignments,
                    groups: statuses,
                    attempts: attempt,
                });
            }

            if attempt % 100 == 0 {
                debug!(attempt, unplaced = pending.len(), "attempt failed, retrying");
            }
        }

        Err(AssignError::RetryBudgetExhausted {
            attempts: config.max_attempts,
        })
    }
}
