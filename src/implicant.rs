//! Term and implicant representation
//!
//! This module provides the value types shared by every phase of the minimizer:
//! - [`Pattern`]: a row of the truth table with some positions eliminated (`-`)
//! - [`Implicant`]: a pattern together with the terms it was built from
//!
//! Both types are immutable once created. Positions are ordered most-significant
//! variable first, so pattern `10-` over variables `A, B, C` stands for `AB'`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{MinimizeError, TermKind, MAX_VARIABLES};

/// A fixed-width pattern over `{0, 1, -}`
///
/// Each position is `Some(false)` (`0`), `Some(true)` (`1`) or `None` (`-`).
/// The derived ordering compares positions left to right with
/// `None < Some(false) < Some(true)`, which is the same order as comparing the
/// rendered strings with `'-' < '0' < '1'`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Arc<[Option<bool>]>);

impl Pattern {
    /// Render `term` as a fully specified pattern of `num_vars` positions
    ///
    /// Callers must have validated `term < 2^num_vars`.
    pub(crate) fn from_term(term: u32, num_vars: usize) -> Self {
        (0..num_vars)
            .rev()
            .map(|bit| Some((term >> bit) & 1 == 1))
            .collect()
    }

    /// Number of positions (equal to the variable count)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-width pattern
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions of this pattern, most-significant variable first
    pub fn positions(&self) -> &[Option<bool>] {
        &self.0
    }

    /// Count of `1` positions; `-` positions are ignored
    pub fn popcount(&self) -> usize {
        self.0.iter().filter(|&&p| p == Some(true)).count()
    }

    /// True when every position is `-`
    pub fn is_tautology(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Index of the single position at which two patterns can be merged
    ///
    /// Returns `None` unless the patterns have the same length, agree on every
    /// `-` position, and differ in exactly one position.
    fn merge_position(&self, other: &Pattern) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        let mut position = None;
        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            // A differing `-` means the eliminated positions don't line up
            if a.is_none() || b.is_none() || position.is_some() {
                return None;
            }
            position = Some(i);
        }
        position
    }

    /// Check whether two patterns are bit-adjacent
    pub fn can_merge(&self, other: &Pattern) -> bool {
        self.merge_position(other).is_some()
    }

    /// Combine two bit-adjacent patterns, eliminating the differing position
    pub fn merge(&self, other: &Pattern) -> Option<Pattern> {
        let position = self.merge_position(other)?;
        let mut merged = self.0.to_vec();
        merged[position] = None;
        Some(Pattern(merged.into()))
    }

    /// Check whether `term` matches this pattern at every specified position
    pub fn covers(&self, term: u32) -> bool {
        let width = self.len();
        self.0.iter().enumerate().all(|(i, p)| match p {
            None => true,
            Some(bit) => ((term >> (width - 1 - i)) & 1 == 1) == *bit,
        })
    }

    /// Render this pattern as a product of literals
    ///
    /// `0` positions become complemented literals (`A'`), `1` positions plain
    /// literals (`A`), and `-` positions are dropped. An all-`-` pattern yields
    /// the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Pattern;
    ///
    /// let pattern: Pattern = "10-".parse().unwrap();
    /// assert_eq!(pattern.literal_term(&["A", "B", "C"]), "AB'");
    /// ```
    pub fn literal_term<S: AsRef<str>>(&self, labels: &[S]) -> String {
        let mut term = String::new();
        for (position, label) in self.0.iter().zip(labels.iter()) {
            match position {
                Some(false) => {
                    term.push_str(label.as_ref());
                    term.push('\'');
                }
                Some(true) => term.push_str(label.as_ref()),
                None => {}
            }
        }
        term
    }
}

impl FromIterator<Option<bool>> for Pattern {
    fn from_iter<I: IntoIterator<Item = Option<bool>>>(iter: I) -> Self {
        Pattern(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in self.0.iter() {
            let c = match position {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error returned when parsing a pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePatternError {
    /// The rejected character
    pub character: char,
    /// Its position in the string
    pub position: usize,
}

impl fmt::Display for ParsePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid pattern character '{}' at position {}. Expected '0', '1' or '-'.",
            self.character, self.position
        )
    }
}

impl std::error::Error for ParsePatternError {}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(ParsePatternError {
                    character,
                    position,
                }),
            })
            .collect()
    }
}

/// Validate `term` against `num_vars` and render it as a fully specified pattern
///
/// # Examples
///
/// ```
/// use qmc_logic::to_binary;
///
/// assert_eq!(to_binary(5, 4).unwrap().to_string(), "0101");
/// assert!(to_binary(16, 4).is_err());
/// ```
pub fn to_binary(term: i64, num_vars: usize) -> Result<Pattern, MinimizeError> {
    check_num_vars(num_vars)?;
    let term = check_term(term, num_vars, TermKind::Minterm)?;
    Ok(Pattern::from_term(term, num_vars))
}

pub(crate) fn check_num_vars(num_vars: usize) -> Result<(), MinimizeError> {
    if (1..=MAX_VARIABLES).contains(&num_vars) {
        Ok(())
    } else {
        Err(MinimizeError::InvalidConfiguration { num_vars })
    }
}

/// Largest valid term for `num_vars` (assumed already checked)
pub(crate) fn max_term(num_vars: usize) -> u32 {
    (1u32 << num_vars) - 1
}

pub(crate) fn check_term(term: i64, num_vars: usize, kind: TermKind) -> Result<u32, MinimizeError> {
    let max = max_term(num_vars);
    if (0..=i64::from(max)).contains(&term) {
        Ok(term as u32)
    } else {
        Err(MinimizeError::OutOfRangeTerm { term, kind, max })
    }
}

/// A product term together with the truth-table rows it subsumes
///
/// `terms` is always ascending and duplicate-free. It lists the input terms
/// (minterms and don't-cares) this implicant was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implicant {
    pattern: Pattern,
    terms: Arc<[u32]>,
}

impl Implicant {
    /// Base implicant for a single validated term
    pub(crate) fn from_term(term: u32, num_vars: usize) -> Self {
        Implicant {
            pattern: Pattern::from_term(term, num_vars),
            terms: vec![term].into(),
        }
    }

    /// Build an implicant from its parts
    ///
    /// `terms` is sorted and deduplicated.
    pub fn new(pattern: Pattern, terms: impl IntoIterator<Item = u32>) -> Self {
        let mut terms: Vec<u32> = terms.into_iter().collect();
        terms.sort_unstable();
        terms.dedup();
        Implicant {
            pattern,
            terms: terms.into(),
        }
    }

    /// The `{0, 1, -}` pattern
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Covered terms, ascending
    pub fn terms(&self) -> &[u32] {
        &self.terms
    }

    /// Count of `1` positions in the pattern
    pub fn popcount(&self) -> usize {
        self.pattern.popcount()
    }

    /// Check whether two implicants are bit-adjacent
    pub fn can_merge(&self, other: &Implicant) -> bool {
        self.pattern.can_merge(&other.pattern)
    }

    /// Merge two bit-adjacent implicants
    ///
    /// Returns `None` when the patterns can't be merged. The result covers the
    /// union of both parents' terms.
    pub fn merge(&self, other: &Implicant) -> Option<Implicant> {
        let pattern = self.pattern.merge(&other.pattern)?;
        Some(Implicant {
            pattern,
            terms: union_sorted(&self.terms, &other.terms).into(),
        })
    }

    /// Check whether this implicant covers `term`
    pub fn covers(&self, term: u32) -> bool {
        self.pattern.covers(term)
    }

    /// Combine the term sets of two implicants with the same pattern
    pub(crate) fn coalesce(&self, other: &Implicant) -> Implicant {
        debug_assert_eq!(self.pattern, other.pattern);
        Implicant {
            pattern: self.pattern.clone(),
            terms: union_sorted(&self.terms, &other.terms).into(),
        }
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.pattern, self.terms)
    }
}

/// Merge two ascending, duplicate-free slices
fn union_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_binary_msb_first() {
        assert_eq!(to_binary(6, 3).unwrap(), p("110"));
        assert_eq!(to_binary(1, 4).unwrap(), p("0001"));
        assert_eq!(to_binary(0, 1).unwrap(), p("0"));
    }

    #[test]
    fn test_to_binary_rejects_out_of_range() {
        assert!(matches!(
            to_binary(8, 3),
            Err(MinimizeError::OutOfRangeTerm { term: 8, max: 7, .. })
        ));
        assert!(matches!(
            to_binary(-1, 3),
            Err(MinimizeError::OutOfRangeTerm { term: -1, .. })
        ));
        assert!(matches!(
            to_binary(0, 9),
            Err(MinimizeError::InvalidConfiguration { num_vars: 9 })
        ));
    }

    #[test]
    fn test_popcount_ignores_dashes() {
        assert_eq!(p("1-1").popcount(), 2);
        assert_eq!(p("---").popcount(), 0);
        assert_eq!(p("0110").popcount(), 2);
    }

    #[test]
    fn test_can_merge_single_difference() {
        assert!(p("000").can_merge(&p("001")));
        assert!(p("0-0").can_merge(&p("1-0")));
        assert_eq!(p("0-0").merge(&p("1-0")), Some(p("--0")));
    }

    #[test]
    fn test_can_merge_rejects_mismatched_dashes() {
        // Differ only where one side has '-'
        assert!(!p("00-").can_merge(&p("000")));
        // Same single difference, but dash positions differ
        assert!(!p("00-").can_merge(&p("-01")));
    }

    #[test]
    fn test_can_merge_rejects_multiple_differences() {
        assert!(!p("000").can_merge(&p("011")));
        assert!(!p("000").can_merge(&p("000")));
        assert!(!p("00").can_merge(&p("000")));
    }

    #[test]
    fn test_covers() {
        let pattern = p("1-0");
        assert!(pattern.covers(0b100));
        assert!(pattern.covers(0b110));
        assert!(!pattern.covers(0b101));
        assert!(!pattern.covers(0b000));
        assert!(p("---").covers(5));
    }

    #[test]
    fn test_literal_term() {
        let labels = ["A", "B", "C"];
        assert_eq!(p("10-").literal_term(&labels), "AB'");
        assert_eq!(p("-11").literal_term(&labels), "BC");
        assert_eq!(p("000").literal_term(&labels), "A'B'C'");
        assert_eq!(p("---").literal_term(&labels), "");
    }

    #[test]
    fn test_pattern_ordering_matches_string_ordering() {
        let mut patterns = vec![p("1-"), p("0-"), p("-1"), p("-0"), p("10")];
        patterns.sort();
        let rendered: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, ["-0", "-1", "0-", "1-", "10"]);
    }

    #[test]
    fn test_parse_pattern_error() {
        let err = "01x".parse::<Pattern>().unwrap_err();
        assert_eq!(err.character, 'x');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_implicant_merge_unions_terms() {
        let a = Implicant::new(p("0-0"), [0, 2]);
        let b = Implicant::new(p("1-0"), [4, 6]);
        let merged = a.merge(&b).unwrap();
        assert_eq!(merged.pattern(), &p("--0"));
        assert_eq!(merged.terms(), &[0, 2, 4, 6]);
        assert_eq!(merged.popcount(), 0);
    }

    #[test]
    fn test_implicant_merge_rejects_non_adjacent() {
        let a = Implicant::from_term(0, 3);
        let b = Implicant::from_term(3, 3);
        assert!(!a.can_merge(&b));
        assert!(a.merge(&b).is_none());
    }

    #[test]
    fn test_implicant_new_sorts_and_dedups() {
        let implicant = Implicant::new(p("--"), [3, 1, 1, 0, 2]);
        assert_eq!(implicant.terms(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_union_sorted() {
        assert_eq!(union_sorted(&[0, 2, 4], &[1, 2, 5]), vec![0, 1, 2, 4, 5]);
        assert_eq!(union_sorted(&[], &[3]), vec![3]);
    }
}
