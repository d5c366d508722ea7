//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes single-output Boolean functions of up to 8 variables
//! using the Quine-McCluskey tabulation method.
//!
//! ## Overview
//!
//! A function is given as a list of minterms (truth-table rows where it must be
//! true) and an optional list of don't-care terms (rows whose value doesn't
//! matter). The minimizer produces a sum-of-products expression that agrees
//! with the function on every specified row.
//!
//! Minimization runs as a strict pipeline:
//!
//! 1. **Validate** the variable count and every term
//! 2. **Generate primes** by repeatedly merging bit-adjacent implicants
//! 3. **Select essentials**, the primes that alone cover some minterm
//! 4. **Select a cover** greedily for the minterms the essentials miss
//! 5. **Format** the cover as a sum-of-products
//!
//! ## Quick Start
//!
//! ```
//! use qmc_logic::minimize;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! // F(A,B,C) = Σ(0,2,4,6) + d(1,5)
//! let expr = minimize(3, &[0, 2, 4, 6], &[1, 5])?;
//! assert_eq!(expr, "C'");
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting Intermediate Results
//!
//! [`Minimizer`] keeps the result of every phase in a [`Solution`]:
//!
//! ```
//! use qmc_logic::Minimizer;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! // Full adder carry: AB + AC + BC
//! let solution = Minimizer::new(3, &[3, 5, 6, 7], &[])?.minimize()?;
//!
//! for prime in solution.prime_implicants() {
//!     println!("prime {} covers {:?}", prime.pattern(), prime.terms());
//! }
//! assert_eq!(solution.essential_primes().len(), 3);
//! assert_eq!(solution.to_string(), "BC + AC + AB");
//! # Ok(())
//! # }
//! ```
//!
//! ## Output
//!
//! Expressions use `'` for complement and juxtaposition for conjunction, with
//! product terms joined by ` + `. Constant functions render as `0` and `1`.
//! A cover can also be written as a PLA table with [`PLAWriter`].
//!
//! ## Heuristic Cover
//!
//! The final cover always contains every essential prime and covers every
//! minterm, but the step that picks among the remaining primes is greedy. It is
//! not guaranteed to find the cover with the fewest terms or literals.
//!
//! ## Logging
//!
//! The library logs per-phase progress through the [`log`] facade at `debug`
//! level. Set [`MinimizerConfig::summary`] to also log phase statistics at
//! `info` level.

pub mod cover;
pub mod display;
pub mod error;
pub mod essential;
pub mod implicant;
pub mod input;
pub mod labels;
pub mod minimizer;
pub mod pla;
pub mod primes;

pub use cover::{select_cover, Cover};
pub use display::{format_sop, SopDisplay};
pub use error::{InputError, MinimizeError, TermKind, MAX_VARIABLES};
pub use essential::essential_primes;
pub use implicant::{to_binary, Implicant, ParsePatternError, Pattern};
pub use input::{parse_term_list, TermList, SENTINEL};
pub use labels::VariableLabels;
pub use minimizer::{minimize, Minimizer, MinimizerConfig, Solution};
pub use pla::PLAWriter;
pub use primes::prime_implicants;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimize_two_variables() {
        let expr = minimize(2, &[0, 1, 2], &[]).unwrap();
        assert!(expr == "A' + B'" || expr == "B' + A'");
    }

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Solution>();
        assert_send_sync::<Minimizer>();
        assert_send_sync::<MinimizeError>();
        assert_send_sync::<InputError>();
    }
}
