//! Sum-of-products rendering for covers

use std::fmt;

use crate::cover::Cover;

/// Borrowed view of a cover that renders as a sum-of-products
///
/// Created by [`Cover::display`]. Renders `0` for an empty cover, `1` when any
/// product term is the constant true, and otherwise the product terms joined
/// with ` + ` in pattern order.
pub struct SopDisplay<'a, S> {
    cover: &'a Cover,
    labels: &'a [S],
}

impl Cover {
    /// Render this cover with the given variable labels
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::{Cover, Implicant};
    ///
    /// let cover = Cover::new(vec![
    ///     Implicant::new("0-".parse().unwrap(), [0, 1]),
    ///     Implicant::new("-0".parse().unwrap(), [0, 2]),
    /// ]);
    /// assert_eq!(cover.display(&["A", "B"]).to_string(), "B' + A'");
    /// ```
    pub fn display<'a, S: AsRef<str>>(&'a self, labels: &'a [S]) -> SopDisplay<'a, S> {
        SopDisplay {
            cover: self,
            labels,
        }
    }
}

impl<S: AsRef<str>> fmt::Display for SopDisplay<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "0");
        }
        if self.cover.is_tautology() {
            return write!(f, "1");
        }

        let terms: Vec<String> = self
            .cover
            .implicants()
            .iter()
            .map(|i| i.pattern().literal_term(self.labels))
            .filter(|term| !term.is_empty())
            .collect();

        if terms.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

/// Render `cover` as a sum-of-products string
pub fn format_sop<S: AsRef<str>>(cover: &Cover, labels: &[S]) -> String {
    cover.display(labels).to_string()
}
