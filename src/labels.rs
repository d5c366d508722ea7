//! Variable label management
//!
//! Labels are only used when rendering a cover. By default variables are named
//! `A, B, C, …` in most-significant-first order.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::MinimizeError;

/// Ordered, distinct variable labels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableLabels {
    labels: Vec<Arc<str>>,
}

impl VariableLabels {
    /// Alphabetic labels `A, B, C, …` for `num_vars` variables
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::VariableLabels;
    ///
    /// let labels = VariableLabels::alphabetic(3);
    /// assert_eq!(labels.get(2).map(|l| l.as_ref()), Some("C"));
    /// ```
    pub fn alphabetic(num_vars: usize) -> Self {
        let labels = (b'A'..=b'Z')
            .take(num_vars)
            .map(|c| Arc::from((c as char).to_string().as_str()))
            .collect();
        Self { labels }
    }

    /// Custom labels, one per variable
    ///
    /// Fails if the count doesn't match `num_vars` or a label is repeated.
    pub fn with_labels(num_vars: usize, labels: Vec<Arc<str>>) -> Result<Self, MinimizeError> {
        if labels.len() != num_vars {
            return Err(MinimizeError::LabelCountMismatch {
                expected: num_vars,
                actual: labels.len(),
            });
        }
        if let Some(label) = first_duplicate(&labels) {
            return Err(MinimizeError::DuplicateLabel { label });
        }
        Ok(Self { labels })
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get label at position
    pub fn get(&self, index: usize) -> Option<&Arc<str>> {
        self.labels.get(index)
    }

    /// Get labels slice
    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.labels
    }
}

fn first_duplicate(labels: &[Arc<str>]) -> Option<Arc<str>> {
    let mut seen: HashSet<&str> = HashSet::new();
    labels
        .iter()
        .find(|&label| !seen.insert(&**label))
        .cloned()
}
