//! Tests for dependency table overlay semantics

use std::collections::BTreeMap;

use lazydep_domain::Descriptor;
use lazydep_infrastructure::di::DependencyTable;
use proptest::prelude::*;

fn snapshot(table: &DependencyTable) -> BTreeMap<String, u8> {
    table
        .iter()
        .map(|(name, d)| (name.to_string(), *d.literal::<u8>().unwrap()))
        .collect()
}

#[test]
fn test_lookup_missing_name() {
    let table: DependencyTable = [("foo", Descriptor::value(1_u8))].into_iter().collect();
    assert!(table.lookup("bar").is_none());
    assert!(table.contains("foo"));
}

#[test]
fn test_override_keeps_position() {
    let mut table: DependencyTable = [
        ("a", Descriptor::value(1_u8)),
        ("b", Descriptor::value(2_u8)),
        ("c", Descriptor::value(3_u8)),
    ]
    .into_iter()
    .collect();
    table.merge([("b", Descriptor::value(20_u8)), ("d", Descriptor::value(4_u8))]);

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    assert_eq!(table.lookup("b").unwrap().literal::<u8>(), Some(&20));
}

#[test]
fn test_copy_shares_descriptors() {
    let parent: DependencyTable = [("svc", Descriptor::provider(|| 5_u8))].into_iter().collect();
    let child = parent.copy_for_subclass();
    match (parent.lookup("svc"), child.lookup("svc")) {
        (Some(Descriptor::Provider(a)), Some(Descriptor::Provider(b))) => assert!(a.ptr_eq(b)),
        _ => panic!("Expected provider descriptors in both tables"),
    }
}

proptest! {
    #[test]
    fn test_merge_is_map_overlay(
        base in prop::collection::btree_map("[a-e]", any::<u8>(), 0..5),
        update in prop::collection::btree_map("[a-e]", any::<u8>(), 0..5),
    ) {
        let mut table: DependencyTable = base
            .iter()
            .map(|(k, v)| (k.clone(), Descriptor::value(*v)))
            .collect();
        table.merge(update.iter().map(|(k, v)| (k.clone(), Descriptor::value(*v))));

        let mut expected = base.clone();
        expected.extend(update.clone());
        prop_assert_eq!(snapshot(&table), expected);
    }
}
