//! Prime implicant generation
//!
//! Implements the tabulation step of Quine-McCluskey: implicants are grouped by
//! the number of `1` positions in their pattern, and only implicants from
//! adjacent groups are compared. Each generation is finished completely before
//! primality is decided for its members.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::implicant::{Implicant, Pattern};

/// Implicants of one generation, keyed by popcount
type Groups = BTreeMap<usize, Vec<Implicant>>;

/// Prime implicants accumulated across generations, keyed by pattern
type PrimeSet = BTreeMap<Pattern, Implicant>;

/// Compute every prime implicant of the given terms
///
/// `terms` must already be validated against `num_vars`; duplicates are ignored.
/// The result is sorted by pattern (`'-' < '0' < '1'`).
///
/// # Examples
///
/// ```
/// use qmc_logic::prime_implicants;
///
/// let primes = prime_implicants(2, &[0, 1, 2]);
/// let patterns: Vec<String> = primes.iter().map(|p| p.pattern().to_string()).collect();
/// assert_eq!(patterns, ["-0", "0-"]);
/// ```
pub fn prime_implicants(num_vars: usize, terms: &[u32]) -> Vec<Implicant> {
    let terms: BTreeSet<u32> = terms.iter().copied().collect();
    let mut generation = group_by_popcount(
        terms
            .into_iter()
            .map(|term| Implicant::from_term(term, num_vars)),
    );

    let mut primes = PrimeSet::new();
    let mut index = 0;
    while !generation.is_empty() {
        let (next, merges) = next_generation(&generation, &mut primes);
        debug!(
            "generation {}: {} groups, {} implicants, {} merges, {} primes so far",
            index,
            generation.len(),
            generation.values().map(Vec::len).sum::<usize>(),
            merges,
            primes.len()
        );
        if merges == 0 {
            break;
        }
        generation = next;
        index += 1;
    }

    primes.into_values().collect()
}

/// Group implicants by popcount, coalescing identical patterns
fn group_by_popcount(implicants: impl IntoIterator<Item = Implicant>) -> Groups {
    let mut unique = PrimeSet::new();
    for implicant in implicants {
        insert_coalesced(&mut unique, implicant);
    }

    let mut groups = Groups::new();
    for implicant in unique.into_values() {
        groups
            .entry(implicant.popcount())
            .or_default()
            .push(implicant);
    }
    groups
}

fn insert_coalesced(set: &mut PrimeSet, implicant: Implicant) {
    match set.get(implicant.pattern()) {
        Some(existing) => {
            let merged = existing.coalesce(&implicant);
            set.insert(merged.pattern().clone(), merged);
        }
        None => {
            set.insert(implicant.pattern().clone(), implicant);
        }
    }
}

/// Run one generation of pairwise merging
///
/// Members of `generation` that merge with nothing are added to `primes`.
/// Returns the regrouped merge results and the number of successful merges.
fn next_generation(generation: &Groups, primes: &mut PrimeSet) -> (Groups, usize) {
    let mut merged = Vec::new();
    let mut used: BTreeSet<&Pattern> = BTreeSet::new();

    for (&key, lower) in generation {
        let Some(upper) = generation.get(&(key + 1)) else {
            continue;
        };
        for a in lower {
            for b in upper {
                if let Some(implicant) = a.merge(b) {
                    used.insert(a.pattern());
                    used.insert(b.pattern());
                    merged.push(implicant);
                }
            }
        }
    }

    // Promotion is decided only once every pair in the generation was tried
    for implicant in generation.values().flatten() {
        if !used.contains(implicant.pattern()) {
            insert_coalesced(primes, implicant.clone());
        }
    }

    let merges = merged.len();
    (group_by_popcount(merged), merges)
}
