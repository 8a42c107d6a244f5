use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Assembly method used when building a compressed matrix from
/// another representation.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuildStrategy {
    /// one sorted insertion per source entry.  O(nnz) per insertion.
    #[default]
    Incremental,
    /// single counting pass over all source entries.  O(nnz + major_dim).
    Counting,
}

/// Settings for conversions between sparse formats.
///
/// ```
/// use sparsemat::algebra::*;
///
/// let settings = ConversionSettingsBuilder::default()
///     .strategy(BuildStrategy::Counting)
///     .build()
///     .unwrap();
/// assert!(!settings.check_format);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionSettings {
    ///assembly method for compressed targets
    #[builder(default = "BuildStrategy::Incremental")]
    pub strategy: BuildStrategy,

    ///verify the structure of every compressed result
    #[builder(default = "false")]
    pub check_format: bool,
}

impl Default for ConversionSettings {
    fn default() -> ConversionSettings {
        ConversionSettingsBuilder::default().build().unwrap()
    }
}
