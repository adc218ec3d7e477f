use invmap::collections::{InvertibleMap, InvertibleMapError};

#[test]
fn test_conflict_rejection() {
    let mut map = InvertibleMap::try_from([(1, "a")]).unwrap();

    let err = map.insert(2, "a").unwrap_err();
    assert_eq!(
        err,
        InvertibleMapError::NotInvertible {
            existing: 1,
            offending: 2,
            value: "a",
        }
    );

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Ok("a"));
    assert!(!map.contains_key(&2));
}

#[test]
fn test_idempotent_reset() {
    let mut map = InvertibleMap::try_from([(1, "a")]).unwrap();
    let before = map.deep_clone();

    assert_eq!(map.insert(1, "a"), Ok(Some("a")));
    assert_eq!(map, before);
    assert_eq!(map.inverse().get(&"a"), Ok(1));
}

#[test]
fn test_remap_updates_both_sides() {
    let mut map = InvertibleMap::try_from([(1, "a")]).unwrap();

    assert_eq!(map.insert(1, "b"), Ok(Some("a")));
    assert_eq!(map.inverse().get(&"b"), Ok(1));
    assert!(!map.inverse().contains_key("a"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_construction_failure() {
    let err = InvertibleMap::try_from([(1, "a"), (2, "a")]).unwrap_err();
    assert_eq!(
        err,
        InvertibleMapError::NotInvertible {
            existing: 1,
            offending: 2,
            value: "a",
        }
    );
}

#[test]
fn test_construction_from_std_maps() {
    let seed: std::collections::HashMap<_, _> = [(1, 'x'), (2, 'y')].into_iter().collect();
    let map = InvertibleMap::try_from(seed).unwrap();
    assert_eq!(map.inverse().get(&'y'), Ok(2));

    let seed: std::collections::HashMap<_, _> = [(1, 'x'), (2, 'x')].into_iter().collect();
    assert!(matches!(
        InvertibleMap::try_from(seed),
        Err(InvertibleMapError::NotInvertible { value: 'x', .. })
    ));

    let seed: indexmap::IndexMap<_, _> = [("one", 1), ("two", 2)].into_iter().collect();
    let map = InvertibleMap::try_from(seed).unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["one", "two"]);
}

#[test]
fn test_deletion_symmetry() {
    let mut map = InvertibleMap::try_from([(1, "a"), (2, "b")]).unwrap();

    assert_eq!(map.remove(&1), Ok("a"));
    assert!(!map.contains_key(&1));
    assert!(!map.inverse().contains_key("a"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.inverse().len(), 1);
}

#[test]
fn test_missing_keys() {
    let mut map: InvertibleMap<i32, &str> = InvertibleMap::new();

    assert_eq!(map.get(&1), Err(InvertibleMapError::KeyNotFound(1)));
    assert_eq!(map.remove(&1), Err(InvertibleMapError::KeyNotFound(1)));
    assert_eq!(map.try_get(&1), None);
    assert_eq!(map.pop(&1), None);
    assert_eq!(map.get_or(&1, "z"), "z");
    assert!(map.is_empty());
}

#[test]
fn test_clear_empties_both_sides() {
    let mut map = InvertibleMap::try_from([(1, "a"), (2, "b")]).unwrap();
    let inverse = map.inverse();

    map.clear();
    assert!(map.is_empty());
    assert!(inverse.is_empty());

    // values are free again
    map.insert(3, "a").unwrap();
    assert_eq!(inverse.get(&"a"), Ok(3));
}

#[test]
fn test_iteration_order() {
    let mut map = InvertibleMap::try_from([(3, 'c'), (1, 'a'), (2, 'b')]).unwrap();

    assert_eq!(map.keys().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(map.values().collect::<Vec<_>>(), vec!['c', 'a', 'b']);

    // a remapped key keeps its place, a removed key leaves no gap
    map.insert(1, 'z').unwrap();
    map.remove(&3).unwrap();
    assert_eq!(map.iter().collect::<Vec<_>>(), vec![(1, 'z'), (2, 'b')]);

    // a re-inserted key goes to the end
    map.insert(3, 'c').unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_iteration_is_restartable() {
    let map = InvertibleMap::try_from([(1, "a"), (2, "b")]).unwrap();

    let first: Vec<_> = (&map).into_iter().collect();
    let second: Vec<_> = (&map).into_iter().collect();
    assert_eq!(first, second);

    let mut count = 0;
    for (key, value) in &map {
        assert_eq!(map.get(&key), Ok(value));
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn test_mutation_during_iteration_does_not_panic() {
    let mut map = InvertibleMap::try_from([(1, 10), (2, 20), (3, 30)]).unwrap();
    let mut keys = map.keys();

    assert_eq!(keys.next(), Some(1));
    map.clear();
    assert_eq!(keys.next(), None);
}

#[test]
fn test_equality_ignores_order() {
    let a = InvertibleMap::try_from([(1, "a"), (2, "b")]).unwrap();
    let b = InvertibleMap::try_from([(2, "b"), (1, "a")]).unwrap();
    let c = InvertibleMap::try_from([(1, "a"), (2, "c")]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_string_keys_borrowed_lookup() {
    let map = InvertibleMap::try_from([("alpha".to_string(), 1u8)]).unwrap();

    assert!(map.contains_key("alpha"));
    assert_eq!(map.try_get("alpha"), Some(1));
    assert_eq!(map.inverse().try_get(&1u8), Some("alpha".to_string()));
}
