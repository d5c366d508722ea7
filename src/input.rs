//! Term-list input
//!
//! Reads problems in the interactive format of the classic Quine-McCluskey
//! console tools: the number of variables, then the minterms terminated by
//! `-1`, then the don't-care terms terminated by `-1`.
//!
//! ```text
//! # F(A,B,C) = Σ(0,2,4,6) + d(1,5)
//! 3
//! 0 2 4 6 -1
//! 1 5 -1
//! ```
//!
//! Tokens are whitespace separated and may be spread over any number of lines.
//! Lines starting with `#` are comments. If the input ends before a sentinel,
//! the list being read simply ends there.

pub(crate) mod error;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::MinimizeError;
use crate::minimizer::{Minimizer, MinimizerConfig};
use self::error::InputError;

/// Terminates the minterm and don't-care lists
pub const SENTINEL: i64 = -1;

/// An unvalidated minimization problem as read from input
///
/// Values are kept exactly as read; range checks happen when building a
/// [`Minimizer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermList {
    /// Number of variables
    pub num_vars: usize,
    /// Terms the function must be true on
    pub minterms: Vec<i64>,
    /// Terms whose value is unconstrained
    pub dont_cares: Vec<i64>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    VariableCount,
    Minterms,
    DontCares,
    Done,
}

impl TermList {
    /// Parse a term list from any `BufRead` implementation
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InputError> {
        let mut list = TermList::default();
        let mut section = Section::VariableCount;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }

            for token in trimmed.split_whitespace() {
                if section == Section::Done {
                    break;
                }
                let value = parse_token(token, index + 1)?;
                section = match section {
                    Section::VariableCount => {
                        list.num_vars = usize::try_from(value).map_err(|_| {
                            InputError::InvalidToken {
                                token: Arc::from(token),
                                line: index + 1,
                            }
                        })?;
                        Section::Minterms
                    }
                    Section::Minterms if value == SENTINEL => Section::DontCares,
                    Section::Minterms => {
                        list.minterms.push(value);
                        Section::Minterms
                    }
                    Section::DontCares if value == SENTINEL => Section::Done,
                    Section::DontCares => {
                        list.dont_cares.push(value);
                        Section::DontCares
                    }
                    Section::Done => Section::Done,
                };
            }

            if section == Section::Done {
                break;
            }
        }

        if section == Section::VariableCount {
            return Err(InputError::MissingVariableCount);
        }
        Ok(list)
    }

    /// Load a term list from a file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qmc_logic::TermList;
    ///
    /// let list = TermList::from_file("majority.txt").unwrap();
    /// println!("{} variables, {} minterms", list.num_vars, list.minterms.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate this problem with the default configuration
    pub fn minimizer(&self) -> Result<Minimizer, MinimizeError> {
        Minimizer::new(self.num_vars, &self.minterms, &self.dont_cares)
    }

    /// Validate this problem with an explicit configuration
    pub fn minimizer_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Minimizer, MinimizeError> {
        Minimizer::with_config(self.num_vars, &self.minterms, &self.dont_cares, config)
    }
}

impl FromStr for TermList {
    type Err = InputError;

    /// Parse a term list from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::TermList;
    ///
    /// let list: TermList = "3\n0 2 4 6 -1\n1 5 -1\n".parse().unwrap();
    /// assert_eq!(list.num_vars, 3);
    /// assert_eq!(list.minterms, [0, 2, 4, 6]);
    /// assert_eq!(list.dont_cares, [1, 5]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(Cursor::new(s.as_bytes()))
    }
}

fn parse_token(token: &str, line: usize) -> Result<i64, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        token: Arc::from(token),
        line,
    })
}

/// Parse a single list of terms separated by commas and/or whitespace
///
/// No sentinel is expected; every value is returned.
///
/// # Examples
///
/// ```
/// use qmc_logic::parse_term_list;
///
/// assert_eq!(parse_term_list("0, 2 4,6").unwrap(), [0, 2, 4, 6]);
/// assert!(parse_term_list("").unwrap().is_empty());
/// ```
pub fn parse_term_list(s: &str) -> Result<Vec<i64>, InputError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| parse_token(token, 1))
        .collect()
}
