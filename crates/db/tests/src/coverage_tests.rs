use proofreg_db_types::{errors::DbError, traits::CoverageDatabase};
use proofreg_primitives::{hash_proof, Address, Coverage, ProductId};

fn coverage(n: u64) -> Coverage {
    let content = format!("proof-{n}");
    Coverage::new(
        Address::repeat_byte(0xbb),
        format!("ipfs://proof{n}"),
        hash_proof(content.as_bytes()),
        1_700_000_000 + n,
        format!("note {n}"),
    )
}

pub fn test_append_and_get_coverage(db: &impl CoverageDatabase) {
    let id = ProductId::new(1);
    let entry = coverage(0);

    db.append_coverage(id, 0, entry.clone()).unwrap();

    assert_eq!(db.get_coverage_count(id).unwrap(), 1);
    assert_eq!(db.get_coverage(id, 0).unwrap(), Some(entry));
    assert_eq!(db.get_coverage(id, 1).unwrap(), None);
}

pub fn test_untouched_ledger_is_empty(db: &impl CoverageDatabase) {
    let id = ProductId::new(9);
    assert_eq!(db.get_coverage_count(id).unwrap(), 0);
    assert_eq!(db.get_coverage(id, 0).unwrap(), None);
    assert!(db.get_coverage_range(id, 0, 10).unwrap().is_empty());
}

pub fn test_append_out_of_order(db: &impl CoverageDatabase) {
    let id = ProductId::new(1);

    let res = db.append_coverage(id, 1, coverage(1));
    assert!(matches!(res, Err(DbError::OooInsert(_, 1))));

    db.append_coverage(id, 0, coverage(0)).unwrap();
    let res = db.append_coverage(id, 0, coverage(0));
    assert!(matches!(res, Err(DbError::OooInsert(_, 0))));

    assert_eq!(db.get_coverage_count(id).unwrap(), 1);
}

pub fn test_ledgers_are_per_product(db: &impl CoverageDatabase) {
    let a = ProductId::new(1);
    let b = ProductId::new(2);

    for idx in 0..3 {
        db.append_coverage(a, idx, coverage(idx)).unwrap();
    }
    db.append_coverage(b, 0, coverage(100)).unwrap();

    assert_eq!(db.get_coverage_count(a).unwrap(), 3);
    assert_eq!(db.get_coverage_count(b).unwrap(), 1);
    assert_eq!(db.get_coverage(b, 0).unwrap(), Some(coverage(100)));
    assert_eq!(db.get_coverage_range(a, 0, 10).unwrap().len(), 3);
}

pub fn test_coverage_range(db: &impl CoverageDatabase) {
    let id = ProductId::new(3);
    // cross a byte boundary to catch little-endian key ordering
    for idx in 0..300 {
        db.append_coverage(id, idx, coverage(idx)).unwrap();
    }
    db.append_coverage(ProductId::new(4), 0, coverage(999))
        .unwrap();

    let page = db.get_coverage_range(id, 250, 260).unwrap();
    let expected: Vec<_> = (250..260).map(coverage).collect();
    assert_eq!(page, expected);

    let tail = db.get_coverage_range(id, 295, 1_000).unwrap();
    assert_eq!(tail, (295..300).map(coverage).collect::<Vec<_>>());

    assert!(db.get_coverage_range(id, 300, 310).unwrap().is_empty());
    assert!(db.get_coverage_range(id, 5, 5).unwrap().is_empty());
    assert!(db.get_coverage_range(id, 10, 5).unwrap().is_empty());
}

#[macro_export]
macro_rules! coverage_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_append_and_get_coverage() {
            let db = $setup_expr;
            $crate::coverage_tests::test_append_and_get_coverage(&db);
        }

        #[test]
        fn test_untouched_ledger_is_empty() {
            let db = $setup_expr;
            $crate::coverage_tests::test_untouched_ledger_is_empty(&db);
        }

        #[test]
        fn test_append_out_of_order() {
            let db = $setup_expr;
            $crate::coverage_tests::test_append_out_of_order(&db);
        }

        #[test]
        fn test_ledgers_are_per_product() {
            let db = $setup_expr;
            $crate::coverage_tests::test_ledgers_are_per_product(&db);
        }

        #[test]
        fn test_coverage_range() {
            let db = $setup_expr;
            $crate::coverage_tests::test_coverage_range(&db);
        }
    };
}
