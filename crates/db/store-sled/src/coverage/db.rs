use proofreg_db_types::{errors::DbError, traits::CoverageDatabase, DbResult};
use proofreg_primitives::{Coverage, CoverageIndex, ProductId};
use typed_sled::error::Error;

use super::schemas::{CoverageCountSchema, CoverageSchema};
use crate::{define_sled_database, serialization_types::DBCoverage};

define_sled_database!(
    pub struct CoverageDBSled {
        coverage_tree: CoverageSchema,
        coverage_count_tree: CoverageCountSchema,
    }
);

impl CoverageDatabase for CoverageDBSled {
    fn append_coverage(
        &self,
        id: ProductId,
        idx: CoverageIndex,
        coverage: Coverage,
    ) -> DbResult<()> {
        let count = self.get_coverage_count(id)?;
        if idx != count {
            return Err(DbError::OooInsert("CoverageSchema", idx));
        }
        let new_count = count
            .checked_add(1)
            .ok_or(DbError::CoverageCountOverflow(id))?;

        let key = (id, idx);
        let entry = DBCoverage::from(coverage);
        self.config.with_retry(
            (&self.coverage_tree, &self.coverage_count_tree),
            |(ct, cct)| {
                // NOTE: the count check above ran outside the txn, recheck the slot is free
                let current = cct.get(&id.as_u64())?.unwrap_or(0);
                check_free_slot(idx, current, ct.get(&key)?.is_some()).map_err(Error::abort)?;

                ct.insert(&key, &entry)?;
                cct.insert(&id.as_u64(), &new_count)?;
                Ok(())
            },
        )
    }

    fn get_coverage_count(&self, id: ProductId) -> DbResult<u64> {
        Ok(self.coverage_count_tree.get(&id.as_u64())?.unwrap_or(0))
    }

    fn get_coverage(&self, id: ProductId, idx: CoverageIndex) -> DbResult<Option<Coverage>> {
        Ok(self.coverage_tree.get(&(id, idx))?.map(Into::into))
    }

    fn get_coverage_range(
        &self,
        id: ProductId,
        start_idx: CoverageIndex,
        end_idx: CoverageIndex,
    ) -> DbResult<Vec<Coverage>> {
        if start_idx >= end_idx {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for item in self.coverage_tree.range((id, start_idx)..(id, end_idx))? {
            let (_, entry) = item?;
            result.push(entry.into());
        }
        Ok(result)
    }
}

/// Fails unless `idx` is the next index and nothing is stored there yet.
fn check_free_slot(idx: CoverageIndex, count: u64, occupied: bool) -> DbResult<()> {
    if idx != count || occupied {
        return Err(DbError::OooInsert("CoverageSchema", idx));
    }
    Ok(())
}
