//! Per-group occupancy state for one attempt.

use std::collections::{HashMap, HashSet};

use crate::member::{Gender, Member};

/// Running aggregates for one group during one attempt.
///
/// Created fresh at the start of every attempt and mutated only through
/// [`commit`](GroupStatus::commit) after a placement is selected; scoring
/// reads it immutably. The final statuses of a successful attempt double
/// as the reporting statistics.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupStatus {
    count: usize,
    names: HashSet<String>,
    genders: HashMap<Gender, usize>,
    majors: HashMap<String, usize>,
    birth_years: HashMap<i32, usize>,
    new_arrivals: HashMap<u32, usize>,
}

impl GroupStatus {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed placement.
    pub fn commit(&mut self, member: &Member) {
        self.count += 1;
        self.names.insert(member.name_key.clone());
        *self.genders.entry(member.gender.clone()).or_insert(0) += 1;
        *self.majors.entry(member.major.clone()).or_insert(0) += 1;
        *self.birth_years.entry(member.birth_year).or_insert(0) += 1;
        *self.new_arrivals.entry(member.new_arrival).or_insert(0) += 1;
    }

    /// Current member count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether a duplicate-check key is already present.
    pub fn has_name(&self, key: &str) -> bool {
        self.names.contains(key)
    }

    /// Members of the given gender.
    pub fn gender_count(&self, gender: &Gender) -> usize {
        self.genders.get(gender).copied().unwrap_or(0)
    }

    /// Members of the given major.
    pub fn major_count(&self, major: &str) -> usize {
        self.majors.get(major).copied().unwrap_or(0)
    }

    /// Members with the given birth year.
    pub fn birth_year_count(&self, year: i32) -> usize {
        self.birth_years.get(&year).copied().unwrap_or(0)
    }

    /// Members with the given new-arrival tag.
    pub fn new_arrival_count(&self, tag: u32) -> usize {
        self.new_arrivals.get(&tag).copied().unwrap_or(0)
    }

    /// Members with canonical male gender, for reporting.
    pub fn male_count(&self) -> usize {
        self.gender_count(&Gender::Male)
    }

    /// Members with canonical female gender, for reporting.
    pub fn female_count(&self) -> usize {
        self.gender_count(&Gender::Female)
    }
}
