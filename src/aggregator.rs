//! Thread-safe accumulation of validated domains into the shared sets.

use std::collections::HashSet;
use tokio::sync::Mutex;

use crate::domain::Domain;

/// Which set a validated domain lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Blacklist,
    Whitelist,
}

/// Accumulates domains from concurrently running fetch tasks.
///
/// The two sets are guarded by independent locks, so blacklist inserts and
/// whitelist inserts never contend with each other. Inserts are idempotent
/// (set semantics) and append-only until [`Aggregator::into_sets`] freezes
/// the result.
#[derive(Debug, Default)]
pub struct Aggregator {
    blacklist: Mutex<HashSet<Domain>>,
    whitelist: Mutex<HashSet<Domain>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one validated domain into the destination set.
    ///
    /// Safe under any number of concurrent callers; no insert is lost or
    /// duplicated under any interleaving.
    pub async fn insert(&self, domain: Domain, destination: ListKind) {
        let set = match destination {
            ListKind::Blacklist => &self.blacklist,
            ListKind::Whitelist => &self.whitelist,
        };
        set.lock().await.insert(domain);
    }

    /// Move the finished sets out, consuming the aggregator.
    ///
    /// Taking `self` by value is the freeze after the join barrier: once
    /// this compiles, no fetch task can still hold a reference.
    pub fn into_sets(self) -> (HashSet<Domain>, HashSet<Domain>) {
        (self.blacklist.into_inner(), self.whitelist.into_inner())
    }
}

/// Derive the graylist: every blacklisted domain not present in the
/// whitelist.
///
/// Pure and single-threaded; runs strictly after the join barrier, so the
/// sets have no concurrent writers and plain references suffice.
pub fn graylist(blacklist: &HashSet<Domain>, whitelist: &HashSet<Domain>) -> HashSet<Domain> {
    blacklist.difference(whitelist).cloned().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate valid normalized domains
    fn domain_strategy() -> impl Strategy<Value = Domain> {
        "[a-z0-9]{1,8}(\\.[a-z0-9]{1,8}){0,3}".prop_map(|s| s.parse().unwrap())
    }

    /// Strategy to generate domain sets
    fn domain_set_strategy(max_size: usize) -> impl Strategy<Value = HashSet<Domain>> {
        prop::collection::hash_set(domain_strategy(), 0..max_size)
    }

    proptest! {
        /// d is in the graylist exactly when d is blacklisted and not whitelisted
        #[test]
        fn prop_graylist_membership(
            blacklist in domain_set_strategy(50),
            whitelist in domain_set_strategy(50)
        ) {
            let gray = graylist(&blacklist, &whitelist);
            for d in blacklist.union(&whitelist) {
                prop_assert_eq!(
                    gray.contains(d),
                    blacklist.contains(d) && !whitelist.contains(d)
                );
            }
        }

        /// The graylist is a subset of the blacklist and disjoint from the whitelist
        #[test]
        fn prop_graylist_structure(
            blacklist in domain_set_strategy(50),
            whitelist in domain_set_strategy(50)
        ) {
            let gray = graylist(&blacklist, &whitelist);
            prop_assert!(gray.is_subset(&blacklist));
            prop_assert!(gray.is_disjoint(&whitelist));
        }

        /// Whitelisting part of the blacklist removes exactly that part
        #[test]
        fn prop_graylist_removes_exactly_the_overlap(
            blacklist in domain_set_strategy(50),
            extra in domain_set_strategy(20)
        ) {
            let overlap: HashSet<Domain> =
                blacklist.iter().take(blacklist.len() / 2).cloned().collect();
            let whitelist: HashSet<Domain> = overlap.union(&extra).cloned().collect();

            let gray = graylist(&blacklist, &whitelist);
            for d in &blacklist {
                prop_assert_eq!(gray.contains(d), !whitelist.contains(d));
            }
        }

        /// An empty whitelist leaves the blacklist untouched
        #[test]
        fn prop_graylist_empty_whitelist_identity(blacklist in domain_set_strategy(50)) {
            let gray = graylist(&blacklist, &HashSet::new());
            prop_assert_eq!(gray, blacklist);
        }
    }
}
