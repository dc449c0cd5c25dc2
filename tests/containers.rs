const NUM_OF_OPERATIONS: usize = 100_000;

macro_rules! container_set_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use comparative_collections::container::Container;
                use comparative_collections::$module_name::$type_name;
                use rand::Rng;
                use std::collections::BTreeSet;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn int_test_container() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let val = rng.gen_range(0, (NUM_OF_OPERATIONS / 2) as u32);
                        assert_eq!(set.insert(val), expected.insert(val));
                    }

                    assert_eq!(set.len(), expected.len());
                    assert_eq!(
                        set.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );

                    for _ in 0..NUM_OF_OPERATIONS {
                        let val = rng.gen_range(0, (NUM_OF_OPERATIONS / 2) as u32);
                        assert_eq!(set.search(&val).is_some(), expected.contains(&val));
                        assert_eq!(set.delete(&val), expected.take(&val));
                    }

                    assert_eq!(set.len(), expected.len());
                }
            }
        )*
    }
}

container_set_tests!(avl_tree: AvlSet, splay_tree: SplaySet);

mod hash_table {
    use comparative_collections::container::Container;
    use comparative_collections::hash_table::{CollisionBehavior, HashTable};
    use rand::Rng;
    use std::collections::HashMap;
    use super::NUM_OF_OPERATIONS;

    fn int_test_table(behavior: CollisionBehavior, coefficients: Option<(u64, u64)>) {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut table = HashTable::new(behavior, |value: &u32| *value, coefficients).unwrap();
        let mut expected = HashMap::new();

        for _ in 0..NUM_OF_OPERATIONS {
            let val = rng.gen_range(0, (NUM_OF_OPERATIONS / 2) as u32);
            assert_eq!(table.insert(val), expected.insert(val, val).is_none());
        }

        assert_eq!(table.len(), expected.len());

        for _ in 0..NUM_OF_OPERATIONS {
            let val = rng.gen_range(0, (NUM_OF_OPERATIONS / 2) as u32);
            assert_eq!(table.search(&val).is_some(), expected.contains_key(&val));
            assert_eq!(table.delete(&val), expected.remove(&val));
        }

        assert_eq!(table.len(), expected.len());
    }

    #[test]
    fn int_test_chaining() {
        int_test_table(CollisionBehavior::Chaining, None);
    }

    #[test]
    fn int_test_quadratic_probing() {
        int_test_table(CollisionBehavior::QuadraticProbing, Some((1, 3)));
    }
}
