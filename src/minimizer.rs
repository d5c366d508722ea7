//! The minimization pipeline
//!
//! [`Minimizer`] validates its input once, up front. [`Minimizer::minimize`]
//! then runs prime generation, essential selection and cover selection in
//! order, each phase consuming the previous phase's output.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::cover::{select_cover, Cover};
use crate::error::{MinimizeError, TermKind};
use crate::essential::essential_primes;
use crate::implicant::{check_num_vars, check_term, Implicant};
use crate::labels::VariableLabels;
use crate::primes::prime_implicants;

/// Configuration for a minimization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Log phase statistics at `info` level
    ///
    /// **Default:** `false`
    pub summary: bool,

    /// Variable labels used when rendering, most-significant variable first
    ///
    /// Must contain exactly one distinct label per variable. `None` selects
    /// `A, B, C, …`.
    ///
    /// **Default:** `None`
    pub labels: Option<Vec<Arc<str>>>,
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// A validated minimization problem
#[derive(Debug, Clone)]
pub struct Minimizer {
    num_vars: usize,
    minterms: Vec<u32>,
    dont_cares: Vec<u32>,
    labels: VariableLabels,
    summary: bool,
}

impl Minimizer {
    /// Validate a problem with the default configuration
    ///
    /// Fails with [`MinimizeError::InvalidConfiguration`] unless
    /// `1 <= num_vars <= 8`, and with [`MinimizeError::OutOfRangeTerm`] for the
    /// first term outside `0..2^num_vars`. Duplicates are dropped.
    pub fn new(
        num_vars: usize,
        minterms: &[i64],
        dont_cares: &[i64],
    ) -> Result<Self, MinimizeError> {
        Self::with_config(num_vars, minterms, dont_cares, &MinimizerConfig::default())
    }

    /// Validate a problem with an explicit configuration
    pub fn with_config(
        num_vars: usize,
        minterms: &[i64],
        dont_cares: &[i64],
        config: &MinimizerConfig,
    ) -> Result<Self, MinimizeError> {
        check_num_vars(num_vars)?;
        let minterms = validate_terms(minterms, num_vars, TermKind::Minterm)?;
        let dont_cares = validate_terms(dont_cares, num_vars, TermKind::DontCare)?;
        let labels = match &config.labels {
            Some(labels) => VariableLabels::with_labels(num_vars, labels.clone())?,
            None => VariableLabels::alphabetic(num_vars),
        };

        Ok(Minimizer {
            num_vars,
            minterms,
            dont_cares,
            labels,
            summary: config.summary,
        })
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Deduplicated minterms, ascending
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    /// Deduplicated don't-care terms, ascending
    pub fn dont_cares(&self) -> &[u32] {
        &self.dont_cares
    }

    /// Variable labels used for rendering
    pub fn labels(&self) -> &VariableLabels {
        &self.labels
    }

    /// Run the minimization pipeline
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Minimizer;
    ///
    /// # fn main() -> Result<(), qmc_logic::MinimizeError> {
    /// let solution = Minimizer::new(3, &[0, 2, 4, 6], &[1, 5])?.minimize()?;
    /// assert_eq!(solution.to_string(), "C'");
    /// assert_eq!(solution.prime_implicants().len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize(&self) -> Result<Solution, MinimizeError> {
        let terms: Vec<u32> = self
            .minterms
            .iter()
            .chain(self.dont_cares.iter())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        debug!(
            "minimizing {} variables: {} minterms, {} don't-cares, {} distinct terms",
            self.num_vars,
            self.minterms.len(),
            self.dont_cares.len(),
            terms.len()
        );

        let primes = prime_implicants(self.num_vars, &terms);
        let essentials = essential_primes(&primes, &self.minterms);
        let cover = select_cover(&essentials, &primes, &self.minterms)?;

        let solution = Solution {
            num_vars: self.num_vars,
            labels: self.labels.clone(),
            primes,
            essentials,
            cover,
        };

        if self.summary {
            info!("prime implicants: {}", solution.primes.len());
            info!("essential primes: {}", solution.essentials.len());
            info!("cover terms:      {}", solution.cover.len());
            info!("expression:       {}", solution);
        }

        Ok(solution)
    }
}

/// Sort and deduplicate terms, rejecting the first out-of-range value
fn validate_terms(
    terms: &[i64],
    num_vars: usize,
    kind: TermKind,
) -> Result<Vec<u32>, MinimizeError> {
    let valid = terms
        .iter()
        .map(|&term| check_term(term, num_vars, kind))
        .collect::<Result<BTreeSet<u32>, _>>()?;
    Ok(valid.into_iter().collect())
}

/// The result of a minimization run
///
/// Keeps every intermediate phase result alongside the final cover. Renders
/// as the sum-of-products expression through [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct Solution {
    num_vars: usize,
    labels: VariableLabels,
    primes: Vec<Implicant>,
    essentials: Vec<Implicant>,
    cover: Cover,
}

impl Solution {
    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Variable labels used for rendering
    pub fn labels(&self) -> &VariableLabels {
        &self.labels
    }

    /// Every prime implicant, sorted by pattern
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.primes
    }

    /// Essential prime implicants, sorted by pattern
    pub fn essential_primes(&self) -> &[Implicant] {
        &self.essentials
    }

    /// The selected cover
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// The sum-of-products expression
    pub fn expression(&self) -> String {
        self.to_string()
    }

    /// Evaluate the minimized function on a truth-table row
    pub fn evaluate(&self, term: u32) -> bool {
        self.cover.evaluate(term)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cover.display(self.labels.as_slice()))
    }
}

/// Minimize a single-output function given by minterms and don't-cares
///
/// Returns the sum-of-products expression over variables `A, B, C, …`, or
/// `"0"` / `"1"` for the constant functions.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize;
///
/// assert_eq!(minimize(3, &[0, 2, 4, 6], &[1, 5]).unwrap(), "C'");
/// assert_eq!(minimize(2, &[0, 1, 2, 3], &[]).unwrap(), "1");
/// assert!(minimize(3, &[8], &[]).is_err());
/// ```
pub fn minimize(
    num_vars: usize,
    minterms: &[i64],
    dont_cares: &[i64],
) -> Result<String, MinimizeError> {
    Ok(Minimizer::new(num_vars, minterms, dont_cares)?
        .minimize()?
        .expression())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_validation_happens_before_minimization() {
        assert_eq!(
            Minimizer::new(0, &[], &[]).unwrap_err(),
            MinimizeError::InvalidConfiguration { num_vars: 0 }
        );
        assert_eq!(
            Minimizer::new(9, &[], &[]).unwrap_err(),
            MinimizeError::InvalidConfiguration { num_vars: 9 }
        );
    }

    #[test]
    fn test_out_of_range_identifies_term_and_kind() {
        assert_eq!(
            Minimizer::new(2, &[1], &[0, 4]).unwrap_err(),
            MinimizeError::OutOfRangeTerm {
                term: 4,
                kind: TermKind::DontCare,
                max: 3
            }
        );
        assert_eq!(
            Minimizer::new(2, &[-1], &[]).unwrap_err(),
            MinimizeError::OutOfRangeTerm {
                term: -1,
                kind: TermKind::Minterm,
                max: 3
            }
        );
    }

    #[test]
    fn test_terms_deduplicated() {
        let minimizer = Minimizer::new(3, &[5, 1, 5, 1], &[2, 2]).unwrap();
        assert_eq!(minimizer.minterms(), &[1, 5]);
        assert_eq!(minimizer.dont_cares(), &[2]);
    }

    #[test]
    fn test_solution_phases() {
        let solution = Minimizer::new(3, &[0, 2, 4, 6], &[1, 5])
            .unwrap()
            .minimize()
            .unwrap();
        assert_eq!(solution.prime_implicants().len(), 2);
        assert_eq!(solution.essential_primes().len(), 1);
        assert_eq!(solution.cover().len(), 1);
        assert_eq!(solution.expression(), "C'");
    }

    #[test]
    fn test_custom_labels() {
        let config = MinimizerConfig {
            labels: Some(vec![Arc::from("x"), Arc::from("y")]),
            ..Default::default()
        };
        let solution = Minimizer::with_config(2, &[2, 3], &[], &config)
            .unwrap()
            .minimize()
            .unwrap();
        assert_eq!(solution.to_string(), "x");
    }

    #[test]
    fn test_custom_label_count_checked() {
        let config = MinimizerConfig {
            labels: Some(vec![Arc::from("x")]),
            ..Default::default()
        };
        assert!(matches!(
            Minimizer::with_config(2, &[0], &[], &config),
            Err(MinimizeError::LabelCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_duplicate_custom_labels_rejected() {
        let config = MinimizerConfig {
            labels: Some(vec![Arc::from("x"), Arc::from("x")]),
            ..Default::default()
        };
        assert_eq!(
            Minimizer::with_config(2, &[3], &[], &config).unwrap_err(),
            MinimizeError::DuplicateLabel {
                label: Arc::from("x")
            }
        );
    }

    #[test]
    fn test_summary_does_not_change_result() {
        let config = MinimizerConfig {
            summary: true,
            ..Default::default()
        };
        let with_summary = Minimizer::with_config(3, &[3, 5, 6, 7], &[], &config)
            .unwrap()
            .minimize()
            .unwrap();
        assert_eq!(
            with_summary.expression(),
            minimize(3, &[3, 5, 6, 7], &[]).unwrap()
        );
    }
}
