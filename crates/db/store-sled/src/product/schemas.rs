use proofreg_primitives::ProductId;

use crate::{define_table_with_seek_key_codec, serialization_types::DBProduct};

define_table_with_seek_key_codec!(
    /// A table to store registered products by id
    (ProductSchema) ProductId => DBProduct
);
