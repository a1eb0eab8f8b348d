//! Input data model: members, leader constraints, and the roster.
//!
//! All types here are produced by an external loader and are read-only for
//! the engine. Field normalization (gender tokens, birth-year parsing with
//! 0 as the unknown sentinel) happens before the data reaches this crate.

use std::collections::HashMap;

/// A member's gender after loader normalization.
///
/// Only the two canonical variants participate in gender-slot accounting.
/// Anything the loader could not normalize is carried through as
/// [`Other`](Gender::Other): such members bypass the per-gender capacity
/// check but remain bound by a group's total capacity, and they occupy no
/// slot in either gender multiset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
    /// Unrecognized gender token, passed through unchanged.
    Other(String),
}

/// Derives the surname-insensitive duplicate-check key for a name.
///
/// The first character of the trimmed name is stripped; names of one
/// character or less are used as-is.
///
/// ```
/// use team_balancer::member::name_key;
///
/// assert_eq!(name_key("Kim Minsoo"), "im Minsoo");
/// assert_eq!(name_key("X"), "X");
/// ```
pub fn name_key(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.chars().count() > 1 {
        trimmed.chars().skip(1).collect()
    } else {
        trimmed.to_string()
    }
}

/// One member of the roster.
///
/// `id` is a stable index into the source roster and is the key of the
/// final assignment mapping. `phone` and `school` are passthrough fields
/// the scoring never looks at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    /// Stable identifier (index into the source roster).
    pub id: usize,
    /// Full name as loaded.
    pub name: String,
    /// Derived duplicate-check key, see [`name_key`].
    pub name_key: String,
    /// Four-digit birth year; 0 when unknown.
    pub birth_year: i32,
    /// Normalized gender.
    pub gender: Gender,
    /// Free-form major / department category.
    pub major: String,
    /// Categorical new-arrival tag used for clustering.
    pub new_arrival: u32,
    /// Passthrough, not scored.
    pub phone: String,
    /// Passthrough, not scored.
    pub school: String,
}

impl Member {
    /// Creates a member with the duplicate-check key derived from `name`.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        birth_year: i32,
        gender: Gender,
        major: impl Into<String>,
        new_arrival: u32,
    ) -> Self {
        let name = name.into();
        let key = name_key(&name);
        Self {
            id,
            name,
            name_key: key,
            birth_year,
            gender,
            major: major.into(),
            new_arrival,
            phone: String::new(),
            school: String::new(),
        }
    }

    /// Sets the passthrough phone field.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the passthrough school field.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = school.into();
        self
    }
}

/// Minimum eligible birth year per group, derived from leader birth years.
///
/// Each group's constraint is the *younger* of its two leaders' birth years
/// (`min(y1, y2)`); a member whose birth year is strictly below it is
/// ineligible unless the age constraint is relaxed. A group with no entry
/// reads as 0, which disables the constraint.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderYears {
    min_years: HashMap<usize, i32>,
}

impl LeaderYears {
    /// Creates an empty (unconstrained) set of leader constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a group's constraint from its two leaders' birth years.
    pub fn set_pair(&mut self, group: usize, y1: i32, y2: i32) {
        self.min_years.insert(group, y1.min(y2));
    }

    /// Records a group's minimum eligible year directly.
    pub fn set_min(&mut self, group: usize, year: i32) {
        self.min_years.insert(group, year);
    }

    /// Returns the minimum eligible year for a group (0 = unconstrained).
    pub fn min_year(&self, group: usize) -> i32 {
        self.min_years.get(&group).copied().unwrap_or(0)
    }
}

/// The full engine input: members, target group count, leader constraints.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    /// Members to assign, in source order.
    pub members: Vec<Member>,
    /// Number of target groups, identified 1..=groups.
    pub groups: usize,
    /// Leader age-eligibility constraints.
    pub leader_years: LeaderYears,
}

impl Roster {
    /// Creates a roster.
    pub fn new(members: Vec<Member>, groups: usize, leader_years: LeaderYears) -> Self {
        Self {
            members,
            groups,
            leader_years,
        }
    }

    /// Number of members with canonical male gender.
    pub fn male_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.gender == Gender::Male)
            .count()
    }

    /// Number of members with canonical female gender.
    pub fn female_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.gender == Gender::Female)
            .count()
    }
}
