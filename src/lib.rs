//! Constraint-aware roster-to-group assignment.
//!
//! Splits a roster of members into a fixed number of groups so that group
//! sizes, gender balance, and several soft fairness criteria (major
//! diversity, birth-year spread, clustering of a categorical new-arrival
//! tag, leader-age eligibility, duplicate-name avoidance) hold
//! simultaneously. The search is a randomized greedy assignment with
//! restarts:
//!
//! - **Slot plan**: per-gender capacities partitioned so counts deviate by
//!   at most one across groups, randomly re-matched to group ids each
//!   attempt.
//! - **Scoring**: a pure per-member, per-group desirability function with
//!   typed rejection for hard constraints (capacity, leader age, duplicate
//!   name, new-arrival cap).
//! - **Passes**: up to four greedy sweeps per attempt, the last two with the
//!   leader-age constraint relaxed, each re-trying only the members the
//!   previous sweep could not place.
//! - **Retry loop**: fresh attempt state every iteration until every member
//!   is placed or the attempt budget runs out.
//!
//! The engine is pure data in, pure data out: it consumes already-parsed
//! [`Member`] records and leader constraints and produces a member-to-group
//! mapping plus final per-group statistics. File parsing, normalization,
//! and presentation belong to the caller.
//!
//! # Example
//!
//! ```
//! use team_balancer::{AssignConfig, AssignRunner, Gender, LeaderYears, Member, Roster};
//!
//! let members = vec![
//!     Member::new(0, "Alice Kim", 2004, Gender::Female, "CS", 1),
//!     Member::new(1, "Bora Lee", 2005, Gender::Female, "EE", 1),
//!     Member::new(2, "Chan Park", 2004, Gender::Male, "ME", 2),
//!     Member::new(3, "Dong Choi", 2005, Gender::Male, "CS", 2),
//! ];
//! let roster = Roster::new(members, 2, LeaderYears::new());
//! let config = AssignConfig::default().with_seed(7);
//!
//! let result = AssignRunner::run(&roster, &config).unwrap();
//! assert_eq!(result.assignments.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod member;
pub mod pass;
pub mod runner;
pub mod score;
pub mod slots;
pub mod status;

pub use config::{AssignConfig, ScoreWeights};
pub use error::AssignError;
pub use member::{Gender, LeaderYears, Member, Roster};
pub use runner::{AssignResult, AssignRunner};
pub use score::NEW_ARRIVAL_CAP;
pub use slots::{GroupCaps, SlotPlan};
pub use status::GroupStatus;
