use proofreg_primitives::{CoverageIndex, ProductId};

use crate::{
    define_table_with_seek_key_codec, define_table_without_codec, impl_integer_value_codec,
    serialization_types::DBCoverage,
};

define_table_with_seek_key_codec!(
    /// A table to store coverage entries by product and position in its ledger
    (CoverageSchema) (ProductId, CoverageIndex) => DBCoverage
);

define_table_without_codec!(
    /// A table to store the coverage ledger length per product
    (CoverageCountSchema) u64 => u64
);
impl_integer_value_codec!(CoverageCountSchema, u64);
