//! Slot-capacity generation.
//!
//! Capacities are partitioned per gender so that any two groups differ by
//! at most one. The partition is a fixed multiset; the retry loop decides
//! which group id gets which capacity by shuffling.

/// Partitions `count` members over `groups` groups as evenly as possible.
///
/// Produces `count % groups` slots of `count / groups + 1` followed by the
/// remaining slots of `count / groups`. This is the unique balanced
/// multiset of capacities, not yet matched to specific group ids.
///
/// `groups` must be at least 1; the runner rejects zero-group rosters
/// before calling this.
///
/// ```
/// use team_balancer::slots::gender_slots;
///
/// // 105 members over 10 groups: five groups of 11, five of 10.
/// let slots = gender_slots(105, 10);
/// assert_eq!(slots.iter().filter(|&&c| c == 11).count(), 5);
/// assert_eq!(slots.iter().filter(|&&c| c == 10).count(), 5);
/// ```
pub fn gender_slots(count: usize, groups: usize) -> Vec<usize> {
    debug_assert!(groups > 0, "group count must be positive");
    let base = count / groups;
    let rem = count % groups;
    let mut slots = vec![base + 1; rem];
    slots.resize(groups, base);
    slots
}

/// Capacity limits of one group for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupCaps {
    /// Maximum total members.
    pub total: usize,
    /// Maximum members with canonical male gender.
    pub male: usize,
    /// Maximum members with canonical female gender.
    pub female: usize,
}

/// Per-group capacity triples for one attempt, group ids 1..=N.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPlan {
    male: Vec<usize>,
    female: Vec<usize>,
}

impl SlotPlan {
    /// Builds a plan from positionally-zipped gender capacities.
    ///
    /// Index `i` holds the capacities of group `i + 1`.
    ///
    /// # Panics
    /// Panics if the two vectors differ in length.
    pub fn new(male: Vec<usize>, female: Vec<usize>) -> Self {
        assert_eq!(
            male.len(),
            female.len(),
            "gender slot vectors must cover the same groups"
        );
        Self { male, female }
    }

    /// Number of groups covered by this plan.
    pub fn groups(&self) -> usize {
        self.male.len()
    }

    /// Capacity limits of group `group` (1-based).
    pub fn caps(&self, group: usize) -> GroupCaps {
        let i = group - 1;
        GroupCaps {
            total: self.male[i] + self.female[i],
            male: self.male[i],
            female: self.female[i],
        }
    }

    /// Whether total capacities deviate by at most one across groups.
    ///
    /// Each gender multiset is balanced by construction, but an unlucky
    /// zip of the two shuffles can still pair large with large; such plans
    /// are rejected by the retry loop.
    pub fn is_balanced(&self) -> bool {
        let mut min = usize::MAX;
        let mut max = 0;
        for (m, f) in self.male.iter().zip(&self.female) {
            let total = m + f;
            min = min.min(total);
            max = max.max(total);
        }
        self.male.is_empty() || max - min <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_split() {
        assert_eq!(gender_slots(20, 4), vec![5, 5, 5, 5]);
    }

    #[test]
    fn test_remainder_split() {
        let slots = gender_slots(105, 10);
        assert_eq!(slots.iter().filter(|&&c| c == 11).count(), 5);
        assert_eq!(slots.iter().filter(|&&c| c == 10).count(), 5);
        assert_eq!(slots.iter().sum::<usize>(), 105);
    }

    #[test]
    fn test_zero_count() {
        assert_eq!(gender_slots(0, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_fewer_members_than_groups() {
        let slots = gender_slots(2, 5);
        assert_eq!(slots, vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_single_group() {
        assert_eq!(gender_slots(17, 1), vec![17]);
    }

    #[test]
    fn test_caps_lookup() {
        let plan = SlotPlan::new(vec![3, 2], vec![2, 3]);
        assert_eq!(
            plan.caps(1),
            GroupCaps {
                total: 5,
                male: 3,
                female: 2
            }
        );
        assert_eq!(
            plan.caps(2),
            GroupCaps {
                total: 5,
                male: 2,
                female: 3
            }
        );
        assert_eq!(plan.groups(), 2);
    }

    #[test]
    fn test_balanced_plan() {
        let plan = SlotPlan::new(vec![3, 2, 3], vec![2, 3, 3]);
        assert!(plan.is_balanced());
    }

    #[test]
    fn test_unbalanced_plan() {
        // Large zipped with large: totals 6 and 4.
        let plan = SlotPlan::new(vec![3, 2], vec![3, 2]);
        assert!(!plan.is_balanced());
    }

    #[test]
    #[should_panic(expected = "same groups")]
    fn test_mismatched_lengths_panic() {
        SlotPlan::new(vec![1, 2], vec![1]);
    }

    proptest! {
        #[test]
        fn prop_slots_cover_count(count in 0usize..400, groups in 1usize..25) {
            let slots = gender_slots(count, groups);
            prop_assert_eq!(slots.len(), groups);
            prop_assert_eq!(slots.iter().sum::<usize>(), count);
        }

        #[test]
        fn prop_slots_deviate_by_at_most_one(count in 0usize..400, groups in 1usize..25) {
            let slots = gender_slots(count, groups);
            let min = *slots.iter().min().unwrap();
            let max = *slots.iter().max().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
