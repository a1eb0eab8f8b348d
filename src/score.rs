//! Placement scoring.
//!
//! [`score`] is the pure kernel of the search: given one member, one
//! candidate group's current state, and that group's capacity limits, it
//! either rejects the placement outright or returns a desirability score.
//! Rejection is a routine, high-frequency outcome, so it is expressed as
//! `None` rather than an error.

use crate::config::ScoreWeights;
use crate::member::{Gender, Member};
use crate::slots::GroupCaps;
use crate::status::GroupStatus;

/// Hard limit on members sharing one new-arrival tag in a group.
///
/// Applies regardless of weights and is never relaxed.
pub const NEW_ARRIVAL_CAP: usize = 3;

/// Scores placing `member` into a group, or returns `None` if ineligible.
///
/// Hard rejections, in order:
///
/// 1. The group is at its total capacity, or at the capacity for the
///    member's canonical gender ([`Gender::Other`] bypasses the gender cap
///    but not the total cap).
/// 2. The group's leader minimum year is set (`> 0`) and the member's
///    birth year is strictly below it. Skipped entirely when `ignore_age`.
/// 3. The member's duplicate-check key is already in the group.
/// 4. The group already holds [`NEW_ARRIVAL_CAP`] members with the
///    member's new-arrival tag.
///
/// Otherwise the soft score sums weighted penalties for each member
/// already sharing the group, its gender, its major, or its birth year,
/// plus the new-arrival clustering adjustment: exactly one same-tag
/// member present earns `cluster_bonus`, more than one earns
/// `exist_bonus`, none costs `scatter_penalty`. Higher is more desirable.
///
/// Never mutates `status`; the caller commits the winning placement.
pub fn score(
    member: &Member,
    status: &GroupStatus,
    caps: GroupCaps,
    leader_min_year: i32,
    weights: &ScoreWeights,
    ignore_age: bool,
) -> Option<f64> {
    if status.count() >= caps.total {
        return None;
    }
    match member.gender {
        Gender::Male => {
            if status.gender_count(&Gender::Male) >= caps.male {
                return None;
            }
        }
        Gender::Female => {
            if status.gender_count(&Gender::Female) >= caps.female {
                return None;
            }
        }
        Gender::Other(_) => {}
    }

    if !ignore_age && leader_min_year > 0 && member.birth_year < leader_min_year {
        return None;
    }

    if status.has_name(&member.name_key) {
        return None;
    }

    let same_tag = status.new_arrival_count(member.new_arrival);
    if same_tag >= NEW_ARRIVAL_CAP {
        return None;
    }

    let mut total = 0.0;
    total -= status.count() as f64 * weights.size;
    total -= status.gender_count(&member.gender) as f64 * weights.gender;
    total -= status.major_count(&member.major) as f64 * weights.major;
    total -= status.birth_year_count(member.birth_year) as f64 * weights.birth_year;

    if same_tag == 1 {
        total += weights.cluster_bonus;
    } else if same_tag > 1 {
        total += weights.exist_bonus;
    } else {
        total -= weights.scatter_penalty;
    }

    Some(total)
}
