//! Key-aligned feature reassembly.

use std::collections::BTreeMap;

use feature_core::error::EngineError;
use feature_core::types::{FeatureRow, FeatureSet, RowKey, TickerGroup};

/// Merges per-group feature series back into one table.
///
/// Every inserted feature value is stored under its `(ticker, date)` key
/// and looked up by key again during assembly, so the result does not
/// depend on the order groups were computed or inserted in. Concatenating
/// per-group output positionally would silently assume group-visit order
/// matches the original table's interleaving, which does not hold in
/// general.
#[derive(Debug, Default)]
pub struct FeatureAssembler {
    features: BTreeMap<RowKey, FeatureSet>,
}

impl FeatureAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one group's computed features, keyed by row identity.
    ///
    /// `features[i]` must belong to `group.rows()[i]`; a length mismatch
    /// means an indicator broke its alignment contract and fails the run.
    pub fn insert_group(
        &mut self,
        group: &TickerGroup,
        features: Vec<FeatureSet>,
    ) -> Result<(), EngineError> {
        if features.len() != group.len() {
            return Err(EngineError::LengthMismatch {
                ticker: group.ticker().to_string(),
                expected: group.len(),
                actual: features.len(),
            });
        }

        for (row, set) in group.iter().zip(features) {
            self.features.insert(row.key(), set);
        }

        Ok(())
    }

    /// Produce one `FeatureRow` per input row, in canonical order
    /// (ticker ascending, date ascending).
    ///
    /// Rows without a computed feature entry, or leftover entries that
    /// matched no row, indicate a partition/assembly defect and fail the
    /// run.
    pub fn assemble(mut self, groups: Vec<TickerGroup>) -> Result<Vec<FeatureRow>, EngineError> {
        let total: usize = groups.iter().map(TickerGroup::len).sum();
        let mut out = Vec::with_capacity(total);

        for group in groups {
            for row in group.into_rows() {
                let key = row.key();
                let features =
                    self.features
                        .remove(&key)
                        .ok_or_else(|| EngineError::MissingKey {
                            ticker: key.ticker.clone(),
                            date: key.date,
                        })?;
                out.push(FeatureRow::new(row, features));
            }
        }

        if !self.features.is_empty() {
            return Err(EngineError::UnmatchedFeatures {
                count: self.features.len(),
            });
        }

        Ok(out)
    }
}
