//! Engine configuration.
//!
//! [`AssignConfig`] controls the outer retry loop; [`ScoreWeights`] holds
//! the soft-scoring coefficients.

/// Weights for the soft part of the scoring function.
///
/// Penalties are applied per existing member sharing the attribute, so a
/// higher weight spreads that attribute harder across groups. The two
/// bonuses and the scatter penalty shape new-arrival clustering: pairs are
/// strongly encouraged, isolated singletons discouraged.
///
/// # Defaults
///
/// ```
/// use team_balancer::ScoreWeights;
///
/// let w = ScoreWeights::default();
/// assert_eq!(w.size, 100.0);
/// assert_eq!(w.cluster_bonus, 200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Penalty per member already in the group (keeps sizes level).
    pub size: f64,

    /// Penalty per same-gender member already in the group.
    pub gender: f64,

    /// Penalty per same-major member already in the group.
    pub major: f64,

    /// Penalty per same-birth-year member already in the group.
    pub birth_year: f64,

    /// Bonus when exactly one member with the same new-arrival tag is
    /// already in the group (forms a pair).
    pub cluster_bonus: f64,

    /// Smaller bonus when a same-tag cluster of two or more already exists.
    pub exist_bonus: f64,

    /// Penalty when no same-tag member is in the group yet (discourages
    /// starting an isolated singleton).
    pub scatter_penalty: f64,

    /// Reserved weight; not read by the current scoring formula.
    pub max_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            size: 100.0,
            gender: 50.0,
            major: 40.0,
            birth_year: 30.0,
            cluster_bonus: 200.0,
            exist_bonus: 20.0,
            scatter_penalty: 50.0,
            max_penalty: 100.0,
        }
    }
}

impl ScoreWeights {
    /// Sets the group-size weight.
    pub fn with_size(mut self, w: f64) -> Self {
        self.size = w;
        self
    }

    /// Sets the gender-balance weight.
    pub fn with_gender(mut self, w: f64) -> Self {
        self.gender = w;
        self
    }

    /// Sets the major-diversity weight.
    pub fn with_major(mut self, w: f64) -> Self {
        self.major = w;
        self
    }

    /// Sets the birth-year-spread weight.
    pub fn with_birth_year(mut self, w: f64) -> Self {
        self.birth_year = w;
        self
    }

    /// Sets the new-arrival pair-forming bonus.
    pub fn with_cluster_bonus(mut self, w: f64) -> Self {
        self.cluster_bonus = w;
        self
    }

    /// Sets the bonus for growing an existing new-arrival cluster.
    pub fn with_exist_bonus(mut self, w: f64) -> Self {
        self.exist_bonus = w;
        self
    }

    /// Sets the singleton-scatter penalty.
    pub fn with_scatter_penalty(mut self, w: f64) -> Self {
        self.scatter_penalty = w;
        self
    }

    /// Validates the weights.
    ///
    /// Returns `Err` with a description if any weight is negative or not
    /// finite.
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("size", self.size),
            ("gender", self.gender),
            ("major", self.major),
            ("birth_year", self.birth_year),
            ("cluster_bonus", self.cluster_bonus),
            ("exist_bonus", self.exist_bonus),
            ("scatter_penalty", self.scatter_penalty),
            ("max_penalty", self.max_penalty),
        ];
        for (name, w) in all {
            if !w.is_finite() {
                return Err(format!("weight {name} must be finite"));
            }
            if w < 0.0 {
                return Err(format!("weight {name} must be non-negative"));
            }
        }
        Ok(())
    }
}

/// Configuration for the assignment search.
///
/// # Builder Pattern
///
/// ```
/// use team_balancer::{AssignConfig, ScoreWeights};
///
/// let config = AssignConfig::default()
///     .with_max_attempts(500)
///     .with_seed(42)
///     .with_weights(ScoreWeights::default().with_major(60.0));
/// assert_eq!(config.max_attempts, 500);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignConfig {
    /// Maximum number of attempts (slot shuffle + up to four passes each)
    /// before the search gives up.
    ///
    /// Attempts whose shuffled slot plan fails the balance check still
    /// count against this budget.
    pub max_attempts: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Soft-scoring weights.
    pub weights: ScoreWeights,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2000,
            seed: None,
            weights: ScoreWeights::default(),
        }
    }
}

impl AssignConfig {
    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".into());
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssignConfig::default();
        assert_eq!(config.max_attempts, 2000);
        assert!(config.seed.is_none());
        assert_eq!(config.weights, ScoreWeights::default());
    }

    #[test]
    fn test_default_weights() {
        let w = ScoreWeights::default();
        assert_eq!(w.size, 100.0);
        assert_eq!(w.gender, 50.0);
        assert_eq!(w.major, 40.0);
        assert_eq!(w.birth_year, 30.0);
        assert_eq!(w.cluster_bonus, 200.0);
        assert_eq!(w.exist_bonus, 20.0);
        assert_eq!(w.scatter_penalty, 50.0);
        assert_eq!(w.max_penalty, 100.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AssignConfig::default()
            .with_max_attempts(100)
            .with_seed(7)
            .with_weights(
                ScoreWeights::default()
                    .with_size(10.0)
                    .with_gender(20.0)
                    .with_major(30.0)
                    .with_birth_year(40.0)
                    .with_cluster_bonus(50.0)
                    .with_exist_bonus(60.0)
                    .with_scatter_penalty(70.0),
            );

        assert_eq!(config.max_attempts, 100);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.weights.size, 10.0);
        assert_eq!(config.weights.gender, 20.0);
        assert_eq!(config.weights.major, 30.0);
        assert_eq!(config.weights.birth_year, 40.0);
        assert_eq!(config.weights.cluster_bonus, 50.0);
        assert_eq!(config.weights.exist_bonus, 60.0);
        assert_eq!(config.weights.scatter_penalty, 70.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AssignConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = AssignConfig::default().with_max_attempts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_weight() {
        let config =
            AssignConfig::default().with_weights(ScoreWeights::default().with_major(-1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_weight() {
        let config =
            AssignConfig::default().with_weights(ScoreWeights::default().with_size(f64::NAN));
        assert!(config.validate().is_err());
    }
}
