//! Two-sided evidence accumulation for a binary hypothesis.
//!
//! Under conditional independence the unnormalised weight of a hypothesis `H`
//! after observing binary findings `x_1..x_n` is
//!
//! ```text
//! w(H)  = P(H)     · Π P(x_i | H)
//! w(¬H) = (1-P(H)) · Π P(x_i | ¬H)
//! P(H | x) = w(H) / (w(H) + w(¬H))
//! ```
//!
//! The weights are kept as plain products rather than in the log domain: the
//! finding counts are small and callers compare the rounded posterior for
//! equality, so the multiplication order is part of the result.

/// Running products `w(H)` and `w(¬H)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryEvidence {
    numerator: f64,
    complement: f64,
}

impl BinaryEvidence {
    /// Start from the prior `P(H)`.
    pub fn from_prior(prior: f64) -> Self {
        Self {
            numerator: prior,
            complement: 1.0 - prior,
        }
    }

    /// Fold in one observed finding.
    ///
    /// `p_given_h` and `p_given_not_h` are the probabilities that the finding
    /// is present under each hypothesis; `present` is the observation.
    pub fn observe(&mut self, p_given_h: f64, p_given_not_h: f64, present: bool) {
        if present {
            self.numerator *= p_given_h;
            self.complement *= p_given_not_h;
        } else {
            self.numerator *= 1.0 - p_given_h;
            self.complement *= 1.0 - p_given_not_h;
        }
    }

    /// Unnormalised weight of the hypothesis.
    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    /// Unnormalised weight of the complement.
    pub fn complement(&self) -> f64 {
        self.complement
    }

    /// Normalised posterior `P(H | x)`.
    ///
    /// Returns `None` when both weights are zero (the evidence is impossible
    /// under both hypotheses) or when the total is not finite.
    pub fn posterior(&self) -> Option<f64> {
        let total = self.numerator + self.complement;
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        Some(self.numerator / total)
    }
}
