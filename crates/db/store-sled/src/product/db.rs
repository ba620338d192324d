use proofreg_db_types::{errors::DbError, traits::ProductDatabase, DbResult};
use proofreg_primitives::{Product, ProductId};

use super::schemas::ProductSchema;
use crate::{define_sled_database, serialization_types::DBProduct};

define_sled_database!(
    pub struct ProductDBSled {
        product_tree: ProductSchema,
    }
);

impl ProductDatabase for ProductDBSled {
    fn put_product(&self, product: Product) -> DbResult<()> {
        let id = product.id();
        if self.product_tree.contains_key(&id)? {
            return Err(DbError::EntryAlreadyExists);
        }

        // ids are handed out densely, the last key doubles as the product counter
        let expected = self.get_last_product_id()?.next();
        if expected != Some(id) {
            return Err(DbError::OooInsert("ProductSchema", id.as_u64()));
        }

        self.product_tree
            .compare_and_swap(id, None, Some(DBProduct::from(product)))?;
        Ok(())
    }

    fn get_product(&self, id: ProductId) -> DbResult<Option<Product>> {
        Ok(self
            .product_tree
            .get(&id)?
            .map(|entry| entry.into_product(id)))
    }

    fn get_last_product_id(&self) -> DbResult<ProductId> {
        Ok(self
            .product_tree
            .last()?
            .map(|(id, _)| id)
            .unwrap_or(ProductId::NULL))
    }

    fn set_product_metadata(&self, id: ProductId, metadata_uri: String) -> DbResult<()> {
        let Some(old) = self.product_tree.get(&id)? else {
            return Err(DbError::MissingProduct(id));
        };

        let new = old.clone().with_metadata_uri(metadata_uri);
        self.product_tree.compare_and_swap(id, Some(old), Some(new))?;
        Ok(())
    }
}
