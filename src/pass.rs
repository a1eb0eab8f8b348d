//! Single greedy assignment sweep.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ScoreWeights;
use crate::member::{LeaderYears, Member};
use crate::score::score;
use crate::slots::SlotPlan;
use crate::status::GroupStatus;

/// Assigns each member in `members` to its best-scoring eligible group.
///
/// Candidate group ids are freshly shuffled per member so exact score ties
/// carry no positional bias toward low-numbered groups; among equal scores
/// the candidate evaluated first wins (strict `>` comparison). A winning
/// placement is committed immediately: the mapping is recorded in
/// `assignments` and the group's [`GroupStatus`] updated, which is what
/// makes the sweep greedy.
///
/// Returns the members for which every group was ineligible; the caller
/// decides whether to retry them in a later sweep.
#[allow(clippy::too_many_arguments)]
pub fn assign_pass<'a, R: Rng>(
    members: &[&'a Member],
    plan: &SlotPlan,
    leader_years: &LeaderYears,
    weights: &ScoreWeights,
    ignore_age: bool,
    statuses: &mut [GroupStatus],
    assignments: &mut HashMap<usize, usize>,
    rng: &mut R,
) -> Vec<&'a Member> {
    let mut deferred = Vec::new();
    let mut candidates: Vec<usize> = (1..=plan.groups()).collect();

    for &member in members {
        candidates.shuffle(rng);

        let mut best: Option<(usize, f64)> = None;
        for &group in &candidates {
            let outcome = score(
                member,
                &statuses[group - 1],
                plan.caps(group),
                leader_years.min_year(group),
                weights,
                ignore_age,
            );
            if let Some(s) = outcome {
                if best.map_or(true, |(_, b)| s > b) {
                    best = Some((group, s));
                }
            }
        }

        match best {
            Some((group, _)) => {
                assignments.insert(member.id, group);
                statuses[group - 1].commit(member);
            }
            None => deferred.push(member),
        }
    }

    deferred
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Gender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn member(id: usize, name: &str, year: i32, gender: Gender, major: &str, tag: u32) -> Member {
        Member::new(id, name, year, gender, major, tag)
    }

    fn run_pass<'a>(
        members: &[&'a Member],
        plan: &SlotPlan,
        leader_years: &LeaderYears,
        ignore_age: bool,
        statuses: &mut [GroupStatus],
        assignments: &mut HashMap<usize, usize>,
    ) -> Vec<&'a Member> {
        let mut rng = StdRng::seed_from_u64(42);
        assign_pass(
            members,
            plan,
            leader_years,
            &ScoreWeights::default(),
            ignore_age,
            statuses,
            assignments,
            &mut rng,
        )
    }

    #[test]
    fn test_places_everyone_with_room() {
        let members = vec![
            member(0, "Aa A", 2004, Gender::Male, "CS", 1),
            member(1, "Bb B", 2005, Gender::Female, "EE", 1),
            member(2, "Cc C", 2004, Gender::Male, "ME", 2),
            member(3, "Dd D", 2005, Gender::Female, "PH", 2),
        ];
        let refs: Vec<&Member> = members.iter().collect();
        let plan = SlotPlan::new(vec![1, 1], vec![1, 1]);
        let mut statuses = vec![GroupStatus::new(); 2];
        let mut assignments = HashMap::new();

        let deferred = run_pass(
            &refs,
            &plan,
            &LeaderYears::new(),
            false,
            &mut statuses,
            &mut assignments,
        );

        assert!(deferred.is_empty());
        assert_eq!(assignments.len(), 4);
        for st in &statuses {
            assert_eq!(st.count(), 2);
            assert_eq!(st.male_count(), 1);
            assert_eq!(st.female_count(), 1);
        }
    }

    #[test]
    fn test_defers_when_capacity_exhausted() {
        let members = vec![
            member(0, "Aa A", 2004, Gender::Male, "CS", 1),
            member(1, "Bb B", 2004, Gender::Male, "EE", 2),
        ];
        let refs: Vec<&Member> = members.iter().collect();
        // One group, one male slot.
        let plan = SlotPlan::new(vec![1], vec![0]);
        let mut statuses = vec![GroupStatus::new(); 1];
        let mut assignments = HashMap::new();

        let deferred = run_pass(
            &refs,
            &plan,
            &LeaderYears::new(),
            false,
            &mut statuses,
            &mut assignments,
        );

        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].id, 1);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments.get(&0), Some(&1));
    }

    #[test]
    fn test_defers_duplicate_name_key() {
        let members = vec![
            member(0, "Kim Minsoo", 2004, Gender::Male, "CS", 1),
            member(1, "Lim Minsoo", 2004, Gender::Male, "EE", 2),
        ];
        let refs: Vec<&Member> = members.iter().collect();
        let plan = SlotPlan::new(vec![2], vec![0]);
        let mut statuses = vec![GroupStatus::new(); 1];
        let mut assignments = HashMap::new();

        let deferred = run_pass(
            &refs,
            &plan,
            &LeaderYears::new(),
            false,
            &mut statuses,
            &mut assignments,
        );

        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].name_key, "im Minsoo");
    }

    #[test]
    fn test_age_constraint_respected_then_relaxed() {
        let members = vec![member(0, "Aa A", 2004, Gender::Male, "CS", 1)];
        let refs: Vec<&Member> = members.iter().collect();
        let plan = SlotPlan::new(vec![1], vec![0]);
        let mut leader_years = LeaderYears::new();
        leader_years.set_min(1, 2010);

        let mut statuses = vec![GroupStatus::new(); 1];
        let mut assignments = HashMap::new();
        let deferred = run_pass(
            &refs,
            &plan,
            &leader_years,
            false,
            &mut statuses,
            &mut assignments,
        );
        assert_eq!(deferred.len(), 1);
        assert!(assignments.is_empty());

        let deferred = run_pass(
            &deferred,
            &plan,
            &leader_years,
            true,
            &mut statuses,
            &mut assignments,
        );
        assert!(deferred.is_empty());
        assert_eq!(assignments.get(&0), Some(&1));
    }

    #[test]
    fn test_prefers_emptier_group() {
        // Group 1 already holds two members; size penalty should steer the
        // next member to group 2 no matter the candidate order.
        let seed_members = vec![
            member(0, "Aa A", 2004, Gender::Male, "CS", 1),
            member(1, "Bb B", 2004, Gender::Male, "EE", 1),
        ];
        let plan = SlotPlan::new(vec![3, 3], vec![0, 0]);
        let mut statuses = vec![GroupStatus::new(); 2];
        let mut assignments = HashMap::new();
        for m in &seed_members {
            assignments.insert(m.id, 1);
            statuses[0].commit(m);
        }

        let next = member(2, "Cc C", 2005, Gender::Male, "ME", 2);
        let refs = vec![&next];
        let deferred = run_pass(
            &refs,
            &plan,
            &LeaderYears::new(),
            false,
            &mut statuses,
            &mut assignments,
        );

        assert!(deferred.is_empty());
        assert_eq!(assignments.get(&2), Some(&2));
    }
}
