use proofreg_db_types::{errors::DbError, traits::ProductDatabase};
use proofreg_primitives::{Address, Product, ProductId};

fn owner() -> Address {
    Address::repeat_byte(0xaa)
}

fn product(id: u64, uri: &str) -> Product {
    Product::new(ProductId::new(id), owner(), uri.to_string())
}

pub fn test_put_and_get_product(db: &impl ProductDatabase) {
    let product = product(1, "ipfs://A");
    db.put_product(product.clone())
        .expect("test: insert first product");

    let stored = db.get_product(ProductId::new(1)).unwrap();
    assert_eq!(stored, Some(product));
}

pub fn test_empty_db_has_null_last_id(db: &impl ProductDatabase) {
    assert_eq!(db.get_last_product_id().unwrap(), ProductId::NULL);
    assert_eq!(db.get_product(ProductId::new(1)).unwrap(), None);
    assert_eq!(db.get_product(ProductId::NULL).unwrap(), None);
}

pub fn test_last_id_tracks_inserts(db: &impl ProductDatabase) {
    for id in 1..=300 {
        db.put_product(product(id, "ipfs://bulk")).unwrap();
        assert_eq!(db.get_last_product_id().unwrap(), ProductId::new(id));
    }
}

pub fn test_put_duplicate_product(db: &impl ProductDatabase) {
    db.put_product(product(1, "ipfs://A")).unwrap();

    let res = db.put_product(product(1, "ipfs://other"));
    assert!(matches!(res, Err(DbError::EntryAlreadyExists)));

    let stored = db.get_product(ProductId::new(1)).unwrap().unwrap();
    assert_eq!(stored.metadata_uri(), "ipfs://A");
}

pub fn test_put_out_of_order_product(db: &impl ProductDatabase) {
    let res = db.put_product(product(2, "ipfs://skip"));
    assert!(matches!(res, Err(DbError::OooInsert(_, 2))));

    let res = db.put_product(product(0, "ipfs://null"));
    assert!(matches!(res, Err(DbError::OooInsert(_, 0))));

    assert_eq!(db.get_last_product_id().unwrap(), ProductId::NULL);
}

pub fn test_set_product_metadata(db: &impl ProductDatabase) {
    db.put_product(product(1, "ipfs://A")).unwrap();

    db.set_product_metadata(ProductId::new(1), "ipfs://B".to_string())
        .unwrap();

    let stored = db.get_product(ProductId::new(1)).unwrap().unwrap();
    assert_eq!(stored.metadata_uri(), "ipfs://B");
    assert_eq!(stored.owner(), owner());
}

pub fn test_set_metadata_missing_product(db: &impl ProductDatabase) {
    let res = db.set_product_metadata(ProductId::new(5), "ipfs://B".to_string());
    assert!(matches!(res, Err(DbError::MissingProduct(id)) if id == ProductId::new(5)));
}

#[macro_export]
macro_rules! product_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_put_and_get_product() {
            let db = $setup_expr;
            $crate::product_tests::test_put_and_get_product(&db);
        }

        #[test]
        fn test_empty_db_has_null_last_id() {
            let db = $setup_expr;
            $crate::product_tests::test_empty_db_has_null_last_id(&db);
        }

        #[test]
        fn test_last_id_tracks_inserts() {
            let db = $setup_expr;
            $crate::product_tests::test_last_id_tracks_inserts(&db);
        }

        #[test]
        fn test_put_duplicate_product() {
            let db = $setup_expr;
            $crate::product_tests::test_put_duplicate_product(&db);
        }

        #[test]
        fn test_put_out_of_order_product() {
            let db = $setup_expr;
            $crate::product_tests::test_put_out_of_order_product(&db);
        }

        #[test]
        fn test_set_product_metadata() {
            let db = $setup_expr;
            $crate::product_tests::test_set_product_metadata(&db);
        }

        #[test]
        fn test_set_metadata_missing_product() {
            let db = $setup_expr;
            $crate::product_tests::test_set_metadata_missing_product(&db);
        }
    };
}
