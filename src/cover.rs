//! Cover selection
//!
//! Starts from the essential primes and greedily adds the remaining prime that
//! covers the most still-uncovered minterms. The greedy step is a heuristic: the
//! result always covers every minterm and contains every essential prime, but
//! it is not guaranteed to have the fewest possible terms.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::error::MinimizeError;
use crate::implicant::{Implicant, Pattern};

/// A set of implicants whose union covers every requested minterm
///
/// Implicants are kept sorted by pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    implicants: Vec<Implicant>,
}

impl Cover {
    /// Build a cover from implicants, sorting them by pattern
    pub fn new(mut implicants: Vec<Implicant>) -> Self {
        implicants.sort_by(|a, b| a.pattern().cmp(b.pattern()));
        Cover { implicants }
    }

    /// Implicants of this cover, sorted by pattern
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Number of product terms
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// True when the cover has no product terms (the constant-false function)
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// True when some implicant has every position eliminated
    pub fn is_tautology(&self) -> bool {
        self.implicants.iter().any(|i| i.pattern().is_tautology())
    }

    /// Evaluate the sum-of-products on a truth-table row
    pub fn evaluate(&self, term: u32) -> bool {
        self.implicants.iter().any(|i| i.covers(term))
    }
}

/// Choose a cover of `minterms` from the prime implicants
///
/// `essentials` must be a subset of `primes`. Fails with
/// [`MinimizeError::UnreachableCoverage`] if some minterm can't be covered by
/// any prime, which only happens if the primes were not generated from a term
/// set containing every minterm.
///
/// # Examples
///
/// ```
/// use qmc_logic::{essential_primes, prime_implicants, select_cover};
///
/// let minterms = [3, 5, 6, 7];
/// let primes = prime_implicants(3, &minterms);
/// let essentials = essential_primes(&primes, &minterms);
/// let cover = select_cover(&essentials, &primes, &minterms).unwrap();
/// assert_eq!(cover.len(), 3);
/// ```
pub fn select_cover(
    essentials: &[Implicant],
    primes: &[Implicant],
    minterms: &[u32],
) -> Result<Cover, MinimizeError> {
    let mut cover: Vec<Implicant> = essentials.to_vec();

    let mut uncovered: BTreeSet<u32> = minterms
        .iter()
        .copied()
        .filter(|&m| !essentials.iter().any(|e| e.covers(m)))
        .collect();

    if uncovered.is_empty() {
        return Ok(Cover::new(cover));
    }

    let essential_patterns: HashSet<&Pattern> =
        essentials.iter().map(Implicant::pattern).collect();
    let mut remaining: Vec<&Implicant> = primes
        .iter()
        .filter(|p| !essential_patterns.contains(p.pattern()))
        .collect();
    // Ties go to the first candidate, so keep candidates in pattern order
    remaining.sort_by(|a, b| a.pattern().cmp(b.pattern()));

    debug!(
        "{} minterms left after essentials, {} candidate primes",
        uncovered.len(),
        remaining.len()
    );

    while !uncovered.is_empty() {
        let best = remaining
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let count = uncovered.iter().filter(|&&m| candidate.covers(m)).count();
                (i, count)
            })
            .fold(None, |best: Option<(usize, usize)>, (i, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((i, count)),
            });

        let index = match best {
            Some((index, count)) if count > 0 => index,
            _ => {
                return Err(MinimizeError::UnreachableCoverage {
                    uncovered: uncovered.into_iter().collect(),
                })
            }
        };

        let chosen = remaining.remove(index);
        uncovered.retain(|&m| !chosen.covers(m));
        debug!(
            "picked {}, {} minterms still uncovered",
            chosen.pattern(),
            uncovered.len()
        );
        cover.push(chosen.clone());
    }

    Ok(Cover::new(cover))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::essential::essential_primes;
    use crate::primes::prime_implicants;
    use test_log::test;

    fn patterns(cover: &Cover) -> Vec<String> {
        cover
            .implicants()
            .iter()
            .map(|p| p.pattern().to_string())
            .collect()
    }

    fn solve(num_vars: usize, minterms: &[u32], dont_cares: &[u32]) -> Cover {
        let mut terms = minterms.to_vec();
        terms.extend_from_slice(dont_cares);
        let primes = prime_implicants(num_vars, &terms);
        let essentials = essential_primes(&primes, minterms);
        select_cover(&essentials, &primes, minterms).unwrap()
    }

    #[test]
    fn test_essentials_alone_suffice() {
        let cover = solve(3, &[0, 2, 4, 6], &[1, 5]);
        assert_eq!(patterns(&cover), ["--0"]);
    }

    #[test]
    fn test_greedy_tie_break_by_pattern() {
        // Cyclic: no essentials, every prime covers two minterms. After -01
        // and -10 only 0 and 7 are left, and 0-0 sorts ahead of 00-.
        let cover = solve(3, &[0, 1, 2, 5, 6, 7], &[]);
        assert_eq!(patterns(&cover), ["-01", "-10", "0-0", "1-1"]);
        for m in [0, 1, 2, 5, 6, 7] {
            assert!(cover.evaluate(m));
        }
        for m in [3, 4] {
            assert!(!cover.evaluate(m));
        }
    }

    #[test]
    fn test_greedy_after_essentials() {
        // -111 is the only cover of 15; the cyclic part on A = 0 is left to the
        // greedy step
        let minterms = [0, 1, 2, 5, 6, 7, 15];
        let cover = solve(4, &minterms, &[]);
        assert_eq!(patterns(&cover), ["-111", "0-01", "0-10", "00-0"]);
        for m in 0..16 {
            assert_eq!(cover.evaluate(m), minterms.contains(&m), "row {}", m);
        }
    }

    #[test]
    fn test_count_tie_prefers_eliminated_position() {
        let later = Implicant::new("00-".parse().unwrap(), [0, 1]);
        let earlier = Implicant::new("0-0".parse().unwrap(), [0, 2]);
        let cover = select_cover(&[], &[later, earlier], &[0]).unwrap();
        assert_eq!(patterns(&cover), ["0-0"]);
    }

    #[test]
    fn test_empty_minterms() {
        let cover = solve(3, &[], &[1, 2]);
        assert!(cover.is_empty());
    }

    #[test]
    fn test_tautology_cover() {
        let cover = solve(2, &[0, 1, 2, 3], &[]);
        assert!(cover.is_tautology());
        assert_eq!(cover.len(), 1);
    }

    #[test]
    fn test_unreachable_coverage_is_surfaced() {
        // Primes built without minterm 7
        let primes = prime_implicants(3, &[0, 1]);
        let essentials = essential_primes(&primes, &[0, 1]);
        let err = select_cover(&essentials, &primes, &[0, 1, 7]).unwrap_err();
        assert_eq!(err, MinimizeError::UnreachableCoverage { uncovered: vec![7] });
    }

    #[test]
    fn test_cover_sorted_by_pattern() {
        let cover = solve(4, &[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], &[]);
        let rendered = patterns(&cover);
        let mut sorted = rendered.clone();
        sorted.sort();
        assert_eq!(rendered, sorted);
    }
}
