use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::skill::SkillGroup;

/// A fully decoded character build — the stable output shape of the decoder.
///
/// Every decode converges on this record regardless of the source markup
/// dialect. It is a plain owned value: no handles, no cycles, constructed
/// fresh per decode and immutable once returned, so concurrent callers can
/// share it freely.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────┐
/// │ Field      │ Meaning                                          │
/// ├────────────┼──────────────────────────────────────────────────┤
/// │ character  │ Class, ascendancy, level and the stat table      │
/// │ skills     │ Socketed skill groups, in document order         │
/// │ items      │ Equipped items with derived display names        │
/// │ keystones  │ Names of allocated keystone passives             │
/// │ treeURL    │ Shareable passive-tree URL ("" when absent)      │
/// └────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub character: Character,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub keystones: Vec<String>,
    #[serde(rename = "treeURL", default)]
    pub tree_url: String,
}

/// Character identity and the stat table.
///
/// `level` and every stat value stay string-encoded — the source attributes
/// are numeric text, and keeping them as text avoids precision loss on the
/// way through.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "class")]
    pub class_name: String,
    pub ascendancy: String,
    pub level: String,
    #[serde(default)]
    pub stats: BTreeMap<String, String>,
}

impl Build {
    /// Default main-skill guess for presentation defaulting.
    ///
    /// Among active groups, prefer the one socketed in the body armour,
    /// then any weapon slot, then the first active group in document
    /// order. Returns `None` when no group is active (for example when
    /// every group is disabled or support-only).
    #[must_use]
    pub fn default_main_skill(&self) -> Option<&SkillGroup> {
        let active: Vec<&SkillGroup> = self.skills.iter().filter(|g| g.is_active()).collect();
        active
            .iter()
            .find(|g| g.slot == "Body Armour")
            .or_else(|| active.iter().find(|g| g.slot.contains("Weapon")))
            .copied()
            .or_else(|| active.first().copied())
    }
}
