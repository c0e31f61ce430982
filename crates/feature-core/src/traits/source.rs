//! Panel source trait definitions.

use crate::error::DataError;
use crate::types::PanelRow;
use async_trait::async_trait;

/// Trait for sources that produce a cleaned multi-ticker panel.
#[async_trait]
pub trait PanelSource: Send + Sync {
    /// Load the full panel.
    ///
    /// # Returns
    /// All rows of the panel, already cleaned: no missing values in the
    /// required columns. Row order is unspecified; the engine sorts.
    async fn load(&self) -> Result<Vec<PanelRow>, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
