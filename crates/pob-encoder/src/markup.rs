use std::fmt::Write;

use pob_types::Build;

/// Render a build into share-code markup.
///
/// The output is the nested dialect: one `Build` root carrying the
/// character attributes, with `Stat` entries and the `Skills`, `Items`
/// and `Tree` sections as children. Attribute order and whitespace are
/// not part of the contract — only that decoding the output reproduces
/// the build.
///
/// ```text
/// <Build className=".." ascendancyName=".." level="..">
///   <Stat stat=".." value=".."/>
///   <Skills>
///     <Skill slot=".." enabled="true|false">
///       <Gem nameSpec=".." level=".." quality=".."/>   ← main gem
///       <Gem nameSpec=".." level="1" quality="0"/>     ← links
///     </Skill>
///   </Skills>
///   <Items>
///     <Item>..tooltip text..</Item>
///   </Items>
///   <Tree>
///     <Spec url="..">
///       <Node name=".." isKeystone="true"/>
///     </Spec>
///   </Tree>
/// </Build>
/// ```
///
/// Empty sections are omitted entirely; the `url` attribute is only
/// written when non-empty. Item display names are not rendered — they
/// are derived from the tooltip text on decode.
#[must_use]
pub fn render(build: &Build) -> String {
    let mut out = String::new();
    let character = &build.character;
    let _ = writeln!(
        out,
        r#"<Build className="{}" ascendancyName="{}" level="{}">"#,
        xml_escape(&character.class_name),
        xml_escape(&character.ascendancy),
        xml_escape(&character.level),
    );

    for (stat, value) in &character.stats {
        let _ = writeln!(
            out,
            r#"  <Stat stat="{}" value="{}"/>"#,
            xml_escape(stat),
            xml_escape(value),
        );
    }

    if !build.skills.is_empty() {
        let _ = writeln!(out, "  <Skills>");
        for group in &build.skills {
            let _ = writeln!(
                out,
                r#"    <Skill slot="{}" enabled="{}">"#,
                xml_escape(&group.slot),
                if group.is_enabled { "true" } else { "false" },
            );
            let _ = writeln!(
                out,
                r#"      <Gem nameSpec="{}" level="{}" quality="{}"/>"#,
                xml_escape(&group.main_skill_id),
                xml_escape(&group.level),
                xml_escape(&group.quality),
            );
            for link in &group.links {
                let _ = writeln!(
                    out,
                    r#"      <Gem nameSpec="{}" level="1" quality="0"/>"#,
                    xml_escape(link),
                );
            }
            let _ = writeln!(out, "    </Skill>");
        }
        let _ = writeln!(out, "  </Skills>");
    }

    if !build.items.is_empty() {
        let _ = writeln!(out, "  <Items>");
        for item in &build.items {
            let _ = writeln!(out, "    <Item>{}</Item>", xml_escape(&item.data));
        }
        let _ = writeln!(out, "  </Items>");
    }

    if !build.keystones.is_empty() || !build.tree_url.is_empty() {
        let _ = writeln!(out, "  <Tree>");
        if build.tree_url.is_empty() {
            let _ = writeln!(out, "    <Spec>");
        } else {
            let _ = writeln!(out, r#"    <Spec url="{}">"#, xml_escape(&build.tree_url));
        }
        for keystone in &build.keystones {
            let _ = writeln!(
                out,
                r#"      <Node name="{}" isKeystone="true"/>"#,
                xml_escape(keystone),
            );
        }
        let _ = writeln!(out, "    </Spec>");
        let _ = writeln!(out, "  </Tree>");
    }

    out.push_str("</Build>");
    out
}

/// Escape markup special characters for attribute values and text.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
