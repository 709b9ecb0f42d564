use serde::{Deserialize, Serialize};

/// Sentinel display name for items whose name cannot be derived.
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// One equipped item.
///
/// `data` is the item's full tooltip-style description, trimmed but
/// otherwise verbatim from the source markup. `name` is a best-effort
/// display name derived from the line after the `Rarity: ` header; when
/// no such line exists it falls back to [`UNKNOWN_ITEM`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub data: String,
}
