//! Pairing renderer records across two containers by owner name.

use std::collections::BTreeSet;

use bundlecmp_extract::RendererRecord;

/// The set of owner names present in both record collections.
///
/// Exact string equality on `owner_name`. An empty intersection is a valid
/// terminal state, not an error. Duplicate names within one collection
/// count once.
pub fn match_names(a: &[RendererRecord], b: &[RendererRecord]) -> BTreeSet<String> {
    let names_b: BTreeSet<&str> = b.iter().map(|r| r.owner_name.as_str()).collect();
    a.iter()
        .filter(|r| names_b.contains(r.owner_name.as_str()))
        .map(|r| r.owner_name.clone())
        .collect()
}

/// The first record in `records` whose owner name equals `name`.
///
/// Duplicate owner names within one container shadow: later records with the
/// same name are never addressed by name lookup.
pub fn record_by_name<'a>(records: &'a [RendererRecord], name: &str) -> Option<&'a RendererRecord> {
    records.iter().find(|r| r.owner_name == name)
}

#[cfg(test)]
mod tests {
    use bundlecmp_types::ObjectRef;
    use proptest::prelude::*;

    use super::*;

    fn record(path_id: i64, owner: &str) -> RendererRecord {
        RendererRecord {
            renderer: ObjectRef::local(path_id),
            owner_name: owner.into(),
            bones: vec![],
            root_bone: ObjectRef::null(),
            materials: vec![],
            mesh: ObjectRef::null(),
        }
    }

    #[test]
    fn intersects_owner_names() {
        let a = vec![record(1, "Hero"), record(2, "Villain")];
        let b = vec![record(9, "Hero"), record(8, "Sidekick")];
        let matched = match_names(&a, &b);
        assert_eq!(matched.into_iter().collect::<Vec<_>>(), vec!["Hero"]);
    }

    #[test]
    fn disjoint_collections_match_nothing() {
        let a = vec![record(1, "Hero")];
        let b = vec![record(2, "Villain")];
        assert!(match_names(&a, &b).is_empty());
    }

    #[test]
    fn empty_collections_match_nothing() {
        assert!(match_names(&[], &[]).is_empty());
        assert!(match_names(&[record(1, "Hero")], &[]).is_empty());
    }

    #[test]
    fn duplicate_names_count_once() {
        let a = vec![record(1, "Hero"), record(2, "Hero")];
        let b = vec![record(3, "Hero")];
        assert_eq!(match_names(&a, &b).len(), 1);
    }

    #[test]
    fn lookup_by_name_returns_first_occurrence() {
        let records = vec![record(1, "Hero"), record(2, "Hero")];
        let found = record_by_name(&records, "Hero").unwrap();
        assert_eq!(found.renderer, ObjectRef::local(1));
    }

    #[test]
    fn lookup_by_unknown_name_returns_none() {
        let records = vec![record(1, "Hero")];
        assert!(record_by_name(&records, "Villain").is_none());
    }

    // -----------------------------------------------------------------------
    // Set laws
    // -----------------------------------------------------------------------

    fn records_strategy() -> impl Strategy<Value = Vec<RendererRecord>> {
        proptest::collection::vec("[A-Za-z]{1,6}", 0..12).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| record(i as i64 + 1, &name))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn match_is_commutative(a in records_strategy(), b in records_strategy()) {
            prop_assert_eq!(match_names(&a, &b), match_names(&b, &a));
        }

        #[test]
        fn self_match_yields_every_owner_name(a in records_strategy()) {
            let expected: BTreeSet<String> =
                a.iter().map(|r| r.owner_name.clone()).collect();
            prop_assert_eq!(match_names(&a, &a), expected);
        }

        #[test]
        fn matched_names_appear_on_both_sides(a in records_strategy(), b in records_strategy()) {
            for name in match_names(&a, &b) {
                prop_assert!(record_by_name(&a, &name).is_some());
                prop_assert!(record_by_name(&b, &name).is_some());
            }
        }
    }
}
