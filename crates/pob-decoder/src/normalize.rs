use std::collections::BTreeMap;

use pob_types::{Build, Character, Item, SkillGroup, UNKNOWN_ITEM};

use crate::error::DecodeError;
use crate::markup::Element;

/// Intermediate gem record read off a `Gem` element.
///
/// Only the name survives into `links`; level and quality are carried
/// for the group's main gem.
struct Gem {
    name: Option<String>,
    level: String,
    quality: String,
}

impl Gem {
    fn from_element(el: &Element) -> Self {
        Self {
            name: el
                .attr("nameSpec")
                .or_else(|| el.attr("name"))
                .map(str::to_owned),
            level: el.attr("level").unwrap_or("1").to_owned(),
            quality: el.attr("quality").unwrap_or("0").to_owned(),
        }
    }
}

/// Normalize parsed markup into a [`Build`].
///
/// The `Build` element is located first — at the document root, or one
/// level under a wrapper root; both producer dialects converge here.
/// Its absence is the single structural fatal condition. Every section
/// lookup after that is optional: a missing `Skills`, `Items` or `Tree`
/// section yields an empty collection, never an error.
pub fn normalize(roots: &[Element]) -> Result<Build, DecodeError> {
    let (build_el, wrapper) = find_build(roots).ok_or(DecodeError::IncompleteBuild)?;

    let character = Character {
        class_name: attr_or(build_el, "className", ""),
        ascendancy: attr_or(build_el, "ascendancyName", ""),
        level: attr_or(build_el, "level", ""),
        stats: extract_stats(build_el),
    };

    let (keystones, tree_url) = extract_tree(section(build_el, wrapper, "Tree"));

    Ok(Build {
        character,
        skills: extract_skills(section(build_el, wrapper, "Skills")),
        items: extract_items(section(build_el, wrapper, "Items")),
        keystones,
        tree_url,
    })
}

/// Locate the `Build` element and, when nested, its wrapper.
fn find_build(roots: &[Element]) -> Option<(&Element, Option<&Element>)> {
    for root in roots {
        if root.name == "Build" {
            return Some((root, None));
        }
    }
    for root in roots {
        if let Some(child) = root.first_child("Build") {
            return Some((child, Some(root)));
        }
    }
    None
}

/// Locate a section element among the build's children, then among its
/// wrapper's children (the sibling dialect).
fn section<'a>(build: &'a Element, wrapper: Option<&'a Element>, name: &str) -> Option<&'a Element> {
    build
        .first_child(name)
        .or_else(|| wrapper.and_then(|w| w.first_child(name)))
}

/// Rule 1 — stats: every stat entry's `stat` attribute keys its `value`
/// attribute, both kept as strings.
fn extract_stats(build: &Element) -> BTreeMap<String, String> {
    let mut stats = BTreeMap::new();
    for entry in build
        .children
        .iter()
        .filter(|c| c.name == "Stat" || c.name == "PlayerStat")
    {
        if let (Some(stat), Some(value)) = (entry.attr("stat"), entry.attr("value")) {
            stats.insert(stat.to_owned(), value.to_owned());
        }
    }
    stats
}

/// Rule 2 — skills: first gem is the main gem, the rest are links.
///
/// A group with zero gems is skipped entirely, and a main gem without a
/// name attribute disqualifies its whole group. `enabled` must equal the
/// literal `"true"`, case-sensitive.
fn extract_skills(skills: Option<&Element>) -> Vec<SkillGroup> {
    let Some(skills) = skills else {
        return Vec::new();
    };
    let mut groups: Vec<&Element> = skills.children_named("Skill").collect();
    if groups.is_empty() {
        if let Some(set) = skills.first_child("SkillSet") {
            groups = set.children_named("Skill").collect();
        }
    }

    let mut out = Vec::new();
    for group in groups {
        let gems: Vec<Gem> = group.children_named("Gem").map(Gem::from_element).collect();
        let Some((main, links)) = gems.split_first() else {
            continue;
        };
        let Some(main_skill_id) = main.name.clone() else {
            continue;
        };
        out.push(SkillGroup {
            main_skill_id,
            slot: attr_or(group, "slot", "Unknown"),
            level: main.level.clone(),
            quality: main.quality.clone(),
            is_enabled: group.attr("enabled") == Some("true"),
            links: links.iter().filter_map(|gem| gem.name.clone()).collect(),
        });
    }
    out
}

/// Rule 3 — items: full text trimmed into `data`, display name derived
/// from the line after the `Rarity: ` header.
fn extract_items(items: Option<&Element>) -> Vec<Item> {
    let Some(items) = items else {
        return Vec::new();
    };
    items
        .children_named("Item")
        .map(|item| {
            let data = item.text.trim().to_owned();
            Item {
                name: item_name(&data),
                data,
            }
        })
        .collect()
}

/// Display name: the line immediately following the first line that
/// begins with `Rarity: `, or the sentinel when no such line exists.
fn item_name(data: &str) -> String {
    let mut lines = data.lines();
    while let Some(line) = lines.next() {
        if line.trim_start().starts_with("Rarity: ") {
            return match lines.next().map(str::trim) {
                Some(name) if !name.is_empty() => name.to_owned(),
                _ => UNKNOWN_ITEM.to_owned(),
            };
        }
    }
    UNKNOWN_ITEM.to_owned()
}

/// Rule 4 — tree: keystone names from the first `Spec`, plus the
/// optional shareable URL (`url` attribute on the spec, then on the
/// tree element, defaulting to empty).
fn extract_tree(tree: Option<&Element>) -> (Vec<String>, String) {
    let Some(tree) = tree else {
        return (Vec::new(), String::new());
    };
    let spec = tree.first_child("Spec");

    let mut keystones = Vec::new();
    if let Some(spec) = spec {
        for node in spec.children_named("Node") {
            if node.attr("isKeystone") == Some("true") {
                if let Some(name) = node.attr("name") {
                    keystones.push(name.to_owned());
                }
            }
        }
    }

    let tree_url = spec
        .and_then(|s| s.attr("url"))
        .or_else(|| tree.attr("url"))
        .unwrap_or_default()
        .to_owned();
    (keystones, tree_url)
}

fn attr_or(el: &Element, name: &str, default: &str) -> String {
    el.attr(name).unwrap_or(default).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;

    fn build_from(text: &str) -> Build {
        normalize(&markup::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn minimal_build_has_empty_sections() {
        let build = build_from(r#"<Build className="Witch" ascendancyName="Necromancer" level="90"/>"#);
        assert_eq!(build.character.class_name, "Witch");
        assert_eq!(build.character.ascendancy, "Necromancer");
        assert_eq!(build.character.level, "90");
        assert!(build.character.stats.is_empty());
        assert!(build.skills.is_empty());
        assert!(build.items.is_empty());
        assert!(build.keystones.is_empty());
        assert_eq!(build.tree_url, "");
    }

    #[test]
    fn missing_build_element_is_incomplete() {
        let roots = markup::parse("<Items></Items>").unwrap();
        assert!(matches!(
            normalize(&roots),
            Err(DecodeError::IncompleteBuild)
        ));
    }

    #[test]
    fn build_nested_under_wrapper_is_found() {
        let build = build_from(r#"<PathOfBuilding><Build className="Witch"/></PathOfBuilding>"#);
        assert_eq!(build.character.class_name, "Witch");
    }

    #[test]
    fn sibling_sections_under_wrapper_are_found() {
        let build = build_from(concat!(
            "<PathOfBuilding>",
            r#"<Build className="Witch"/>"#,
            r#"<Skills><Skill slot="Helmet" enabled="true"><Gem nameSpec="Vitality"/></Skill></Skills>"#,
            "</PathOfBuilding>",
        ));
        assert_eq!(build.skills.len(), 1);
        assert_eq!(build.skills[0].slot, "Helmet");
    }

    #[test]
    fn stats_accept_both_entry_dialects() {
        let build = build_from(concat!(
            "<Build>",
            r#"<Stat stat="Life" value="4230"/>"#,
            r#"<PlayerStat stat="TotalDPS" value="191000.5"/>"#,
            r#"<Stat stat="NoValue"/>"#,
            "</Build>",
        ));
        assert_eq!(build.character.stats.get("Life").unwrap(), "4230");
        assert_eq!(build.character.stats.get("TotalDPS").unwrap(), "191000.5");
        assert!(!build.character.stats.contains_key("NoValue"));
    }

    #[test]
    fn first_gem_is_main_rest_are_links() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill slot="Body Armour" enabled="true">"#,
            r#"<Gem nameSpec="Raise Spectre" level="21" quality="20"/>"#,
            r#"<Gem nameSpec="Spell Echo Support" level="20" quality="0"/>"#,
            r#"<Gem nameSpec="Minion Damage Support"/>"#,
            "</Skill>",
            "</Skills></Build>",
        ));
        let group = &build.skills[0];
        assert_eq!(group.main_skill_id, "Raise Spectre");
        assert_eq!(group.level, "21");
        assert_eq!(group.quality, "20");
        assert!(group.is_enabled);
        assert_eq!(
            group.links,
            vec!["Spell Echo Support", "Minion Damage Support"]
        );
    }

    #[test]
    fn empty_group_is_skipped_not_kept_empty() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill slot="Helmet" enabled="true"/>"#,
            r#"<Skill slot="Gloves" enabled="true"><Gem nameSpec="Vitality"/></Skill>"#,
            "</Skills></Build>",
        ));
        assert_eq!(build.skills.len(), 1);
        assert_eq!(build.skills[0].slot, "Gloves");
    }

    #[test]
    fn main_gem_without_name_disqualifies_group() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill slot="Helmet" enabled="true"><Gem level="20"/><Gem nameSpec="Vitality"/></Skill>"#,
            "</Skills></Build>",
        ));
        assert!(build.skills.is_empty());
    }

    #[test]
    fn unnamed_link_gem_is_dropped() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill enabled="true"><Gem nameSpec="Cyclone"/><Gem level="20"/></Skill>"#,
            "</Skills></Build>",
        ));
        assert_eq!(build.skills[0].links, Vec::<String>::new());
    }

    #[test]
    fn missing_slot_takes_unknown_sentinel() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill enabled="true"><Gem nameSpec="Cyclone"/></Skill>"#,
            "</Skills></Build>",
        ));
        assert_eq!(build.skills[0].slot, "Unknown");
    }

    #[test]
    fn enabled_literal_is_case_sensitive() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill enabled="True"><Gem nameSpec="Cyclone"/></Skill>"#,
            r#"<Skill enabled="false"><Gem nameSpec="Vitality"/></Skill>"#,
            r#"<Skill><Gem nameSpec="Clarity"/></Skill>"#,
            "</Skills></Build>",
        ));
        assert!(build.skills.iter().all(|g| !g.is_enabled));
    }

    #[test]
    fn gem_name_falls_back_to_name_attribute() {
        let build = build_from(concat!(
            "<Build><Skills>",
            r#"<Skill enabled="true"><Gem name="Cyclone"/></Skill>"#,
            "</Skills></Build>",
        ));
        assert_eq!(build.skills[0].main_skill_id, "Cyclone");
    }

    #[test]
    fn skill_set_dialect_is_accepted() {
        let build = build_from(concat!(
            "<Build><Skills><SkillSet>",
            r#"<Skill enabled="true"><Gem nameSpec="Cyclone"/></Skill>"#,
            "</SkillSet></Skills></Build>",
        ));
        assert_eq!(build.skills.len(), 1);
    }

    #[test]
    fn item_name_follows_rarity_header() {
        let build = build_from(concat!(
            "<Build><Items>",
            "<Item>\nRarity: UNIQUE\nBones of Ullr\nSilk Slippers\n</Item>",
            "<Item>no header here</Item>",
            "</Items></Build>",
        ));
        assert_eq!(build.items[0].name, "Bones of Ullr");
        assert_eq!(
            build.items[0].data,
            "Rarity: UNIQUE\nBones of Ullr\nSilk Slippers"
        );
        assert_eq!(build.items[1].name, UNKNOWN_ITEM);
    }

    #[test]
    fn rarity_header_with_no_following_line_is_unknown() {
        let build = build_from("<Build><Items><Item>Rarity: RARE</Item></Items></Build>");
        assert_eq!(build.items[0].name, UNKNOWN_ITEM);
    }

    #[test]
    fn keystones_come_from_first_spec_only() {
        let build = build_from(concat!(
            "<Build><Tree>",
            r#"<Spec url="https://pathofexile.com/passive-skill-tree/AAAA">"#,
            r#"<Node name="Elemental Overload" isKeystone="true"/>"#,
            r#"<Node name="Minor Node" isKeystone="false"/>"#,
            r#"<Node name="Case Variant" isKeystone="True"/>"#,
            r#"<Node isKeystone="true"/>"#,
            "</Spec>",
            r#"<Spec><Node name="Second Spec" isKeystone="true"/></Spec>"#,
            "</Tree></Build>",
        ));
        assert_eq!(build.keystones, vec!["Elemental Overload"]);
        assert_eq!(
            build.tree_url,
            "https://pathofexile.com/passive-skill-tree/AAAA"
        );
    }

    #[test]
    fn tree_url_falls_back_to_tree_element() {
        let build = build_from(r#"<Build><Tree url="tree-url"><Spec/></Tree></Build>"#);
        assert_eq!(build.tree_url, "tree-url");
    }
}
