//! Essential prime implicant selection

use std::collections::BTreeMap;

use log::debug;

use crate::implicant::{Implicant, Pattern};

/// Select the primes that are the only cover of some minterm
///
/// Don't-cares never make a prime essential, so only `minterms` are examined.
/// Essentials are identified by pattern and returned sorted by pattern.
///
/// # Examples
///
/// ```
/// use qmc_logic::{essential_primes, prime_implicants};
///
/// let primes = prime_implicants(2, &[0, 1, 2]);
/// let essentials = essential_primes(&primes, &[0, 1, 2]);
/// assert_eq!(essentials.len(), 2);
/// ```
pub fn essential_primes(primes: &[Implicant], minterms: &[u32]) -> Vec<Implicant> {
    let mut essentials: BTreeMap<&Pattern, &Implicant> = BTreeMap::new();

    for &minterm in minterms {
        let mut covering = primes.iter().filter(|prime| prime.covers(minterm));
        if let (Some(prime), None) = (covering.next(), covering.next()) {
            if essentials.insert(prime.pattern(), prime).is_none() {
                debug!("minterm {} makes {} essential", minterm, prime.pattern());
            }
        }
    }

    essentials.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::prime_implicants;
    use test_log::test;

    fn patterns(implicants: &[Implicant]) -> Vec<String> {
        implicants.iter().map(|p| p.pattern().to_string()).collect()
    }

    #[test]
    fn test_all_primes_essential() {
        let primes = prime_implicants(3, &[3, 5, 6, 7]);
        let essentials = essential_primes(&primes, &[3, 5, 6, 7]);
        assert_eq!(patterns(&essentials), ["-11", "1-1", "11-"]);
    }

    #[test]
    fn test_dont_cares_never_create_essentials() {
        // -0- only uniquely covers 1 and 5, which are don't-cares
        let primes = prime_implicants(3, &[0, 1, 2, 4, 5, 6]);
        let essentials = essential_primes(&primes, &[0, 2, 4, 6]);
        assert_eq!(patterns(&essentials), ["--0"]);
    }

    #[test]
    fn test_cyclic_function_has_no_essentials() {
        // Every minterm of this cyclic cover is covered by two primes
        let minterms = [0, 1, 2, 5, 6, 7];
        let primes = prime_implicants(3, &minterms);
        assert_eq!(primes.len(), 6);
        assert!(essential_primes(&primes, &minterms).is_empty());
    }

    #[test]
    fn test_essential_added_once() {
        let primes = prime_implicants(2, &[0, 1]);
        let essentials = essential_primes(&primes, &[0, 1, 0, 1]);
        assert_eq!(patterns(&essentials), ["0-"]);
    }

    #[test]
    fn test_essentials_uniquely_cover_a_minterm() {
        let minterms = [0, 1, 2, 5, 6, 7, 8, 9, 10, 14];
        let primes = prime_implicants(4, &minterms);
        for essential in essential_primes(&primes, &minterms) {
            let unique = minterms.iter().any(|&m| {
                essential.covers(m)
                    && primes
                        .iter()
                        .filter(|p| p.pattern() != essential.pattern())
                        .all(|p| !p.covers(m))
            });
            assert!(unique, "{} is not the sole cover of any minterm", essential);
        }
    }

    #[test]
    fn test_no_minterms() {
        let primes = prime_implicants(2, &[1, 3]);
        assert!(essential_primes(&primes, &[]).is_empty());
    }
}
