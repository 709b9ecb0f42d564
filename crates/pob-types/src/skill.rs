use serde::{Deserialize, Serialize};

/// Lexical support-gem classification.
///
/// Support gems are recognized by naming convention: the gem's display name
/// contains the substring `"Support"`. There is no structural marker in the
/// share-code markup, so this is the classification rule for every consumer.
#[must_use]
pub fn is_support_gem(name: &str) -> bool {
    name.contains("Support")
}

/// One socketed skill group: a main gem plus its linked gems.
///
/// Field layout mirrors the serialized build shape consumers receive:
///
/// ```text
/// ┌──────────────┬────────────────────────────────────────────────┐
/// │ Field        │ Meaning                                        │
/// ├──────────────┼────────────────────────────────────────────────┤
/// │ mainSkillId  │ Name of the group's first gem                  │
/// │ slot         │ Socket slot label ("Unknown" when absent)      │
/// │ level        │ Main gem level, string-encoded integer         │
/// │ quality      │ Main gem quality, string-encoded integer       │
/// │ isEnabled    │ Group enabled flag from the source markup      │
/// │ links        │ Names of the remaining gems, in socket order   │
/// └──────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub main_skill_id: String,
    pub slot: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_quality")]
    pub quality: String,
    pub is_enabled: bool,
    #[serde(default)]
    pub links: Vec<String>,
}

impl SkillGroup {
    /// Whether this group drives an active skill.
    ///
    /// A group is active only if it is enabled and at least one of its gems
    /// (main or linked) is a non-support gem.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_enabled
            && (!is_support_gem(&self.main_skill_id)
                || self.links.iter().any(|link| !is_support_gem(link)))
    }
}

fn default_level() -> String {
    "1".to_string()
}

fn default_quality() -> String {
    "0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(main: &str, links: &[&str], enabled: bool) -> SkillGroup {
        SkillGroup {
            main_skill_id: main.to_string(),
            slot: "Body Armour".to_string(),
            level: "20".to_string(),
            quality: "0".to_string(),
            is_enabled: enabled,
            links: links.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn support_classification_is_lexical() {
        assert!(is_support_gem("Spell Echo Support"));
        assert!(is_support_gem("Awakened Supported Support"));
        assert!(!is_support_gem("Raise Spectre"));
        // Case-sensitive by convention.
        assert!(!is_support_gem("spell echo support"));
    }

    #[test]
    fn active_requires_enabled_flag() {
        assert!(group("Raise Spectre", &["Spell Echo Support"], true).is_active());
        assert!(!group("Raise Spectre", &["Spell Echo Support"], false).is_active());
    }

    #[test]
    fn support_only_group_is_never_active() {
        let g = group("Spell Echo Support", &["Unleash Support"], true);
        assert!(!g.is_active());
    }

    #[test]
    fn support_main_with_active_link_counts() {
        let g = group("Spell Echo Support", &["Raise Spectre"], true);
        assert!(g.is_active());
    }

    #[test]
    fn serializes_with_producer_casing() {
        let json = serde_json::to_value(group("Raise Spectre", &[], true)).unwrap();
        assert!(json.get("mainSkillId").is_some());
        assert!(json.get("isEnabled").is_some());
        assert!(json.get("main_skill_id").is_none());
    }

    #[test]
    fn missing_level_and_quality_take_defaults() {
        let g: SkillGroup = serde_json::from_str(
            r#"{"mainSkillId":"Raise Spectre","slot":"Body Armour","isEnabled":true}"#,
        )
        .unwrap();
        assert_eq!(g.level, "1");
        assert_eq!(g.quality, "0");
        assert!(g.links.is_empty());
    }
}
