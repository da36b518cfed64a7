//! Template renderer — five interchangeable presentations over one canonical
//! resume shape.
//!
//! The contract every variant honors: rendering is a pure function of the
//! data, and no field is silently dropped — every `PersonalInfo` field, the
//! summary, every experience entry (with one line per non-blank description
//! line, bullet prefix stripped), every education entry, and every skill
//! appear in the output. Variants differ only in visual arrangement.

pub mod handlers;

mod classic;
mod corporate;
mod creative;
mod minimalist;
mod modern;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// Rendered page width: 8.5in at 96dpi, matching the on-screen preview the
/// rasterizer reproduces.
pub const PAGE_WIDTH_PX: u32 = 816;

/// The closed set of templates. Numeric selectors 1..=5 map onto these;
/// anything out of range falls back to Classic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateId {
    Classic,
    Modern,
    Minimalist,
    Creative,
    Corporate,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::Corporate,
    ];

    pub fn from_selector(selector: u32) -> TemplateId {
        match selector {
            2 => TemplateId::Modern,
            3 => TemplateId::Minimalist,
            4 => TemplateId::Creative,
            5 => TemplateId::Corporate,
            _ => TemplateId::Classic,
        }
    }

    pub fn selector(&self) -> u32 {
        match self {
            TemplateId::Classic => 1,
            TemplateId::Modern => 2,
            TemplateId::Minimalist => 3,
            TemplateId::Creative => 4,
            TemplateId::Corporate => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Modern => "Modern",
            TemplateId::Minimalist => "Minimalist",
            TemplateId::Creative => "Creative",
            TemplateId::Corporate => "Corporate",
        }
    }
}

/// The fully laid-out document a template produces: a self-contained HTML
/// page, consumed by the rasterization collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct VisualDocument {
    pub template: TemplateId,
    pub page_width_px: u32,
    pub html: String,
}

/// A presentation strategy over the canonical data shape. Implementations
/// are side-effect-free and never mutate or reshape the data.
pub trait Template: Send + Sync {
    fn render(&self, data: &ResumeData) -> VisualDocument;
}

pub fn template_for(id: TemplateId) -> &'static dyn Template {
    match id {
        TemplateId::Classic => &classic::Classic,
        TemplateId::Modern => &modern::Modern,
        TemplateId::Minimalist => &minimalist::Minimalist,
        TemplateId::Creative => &creative::Creative,
        TemplateId::Corporate => &corporate::Corporate,
    }
}

pub fn render(data: &ResumeData, id: TemplateId) -> VisualDocument {
    template_for(id).render(data)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared rendering helpers
// ────────────────────────────────────────────────────────────────────────────

const BULLET: &str = "•";
/// What the bullet glyph looks like after a UTF-8 byte sequence has been
/// read as Latin-1. Descriptions edited through mis-encoded round trips
/// arrive with this prefix; it must never reach the page.
const BULLET_MOJIBAKE: &str = "â€¢";

/// Splits a description into its renderable lines: one line per newline
/// segment, whitespace-only lines omitted, one leading bullet glyph (clean
/// or corrupted) plus trailing whitespace stripped.
pub fn description_lines(description: &str) -> Vec<String> {
    description
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            Some(strip_bullet(line).to_string())
        })
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    for glyph in [BULLET, BULLET_MOJIBAKE] {
        if let Some(rest) = line.strip_prefix(glyph) {
            return rest.trim_start();
        }
    }
    line
}

/// Minimal HTML text escaping for field values interpolated into markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decorative fill width (60–100%) for the Creative proficiency bars,
/// derived from a hash of the skill name so renders stay pure. Cosmetic
/// only — it never feeds back into the data.
pub(crate) fn skill_bar_width(skill: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    skill.hash(&mut hasher);
    60 + hasher.finish() % 41
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeData;

    fn sample_data() -> ResumeData {
        ResumeData::starter()
    }

    // ── description_lines ───────────────────────────────────────────────────

    #[test]
    fn test_description_lines_strips_bullets_and_omits_blank_lines() {
        assert_eq!(description_lines("• A\n\n• B"), vec!["A", "B"]);
    }

    #[test]
    fn test_description_lines_whitespace_only_line_omitted() {
        assert_eq!(description_lines("• A\n   \n• B"), vec!["A", "B"]);
    }

    #[test]
    fn test_description_lines_strips_corrupted_bullet() {
        assert_eq!(
            description_lines("â€¢ Shipped the thing\nâ€¢Second"),
            vec!["Shipped the thing", "Second"]
        );
    }

    #[test]
    fn test_description_lines_without_bullets_pass_through() {
        assert_eq!(
            description_lines("Did work\nDid more work"),
            vec!["Did work", "Did more work"]
        );
    }

    // ── selector mapping ────────────────────────────────────────────────────

    #[test]
    fn test_selector_mapping_covers_all_five() {
        assert_eq!(TemplateId::from_selector(1), TemplateId::Classic);
        assert_eq!(TemplateId::from_selector(2), TemplateId::Modern);
        assert_eq!(TemplateId::from_selector(3), TemplateId::Minimalist);
        assert_eq!(TemplateId::from_selector(4), TemplateId::Creative);
        assert_eq!(TemplateId::from_selector(5), TemplateId::Corporate);
    }

    #[test]
    fn test_out_of_range_selector_renders_as_classic() {
        let data = sample_data();
        let fallback = render(&data, TemplateId::from_selector(99));
        let classic = render(&data, TemplateId::from_selector(1));
        assert_eq!(fallback.template, TemplateId::Classic);
        assert_eq!(fallback.html, classic.html);
    }

    // ── full-coverage contract ──────────────────────────────────────────────

    #[test]
    fn test_all_templates_render_every_field() {
        let data = sample_data();

        for id in TemplateId::ALL {
            let html = render(&data, id).html;
            let info = &data.personal_info;

            for field in [
                &info.name,
                &info.title,
                &info.email,
                &info.phone,
                &info.location,
                &info.website,
            ] {
                assert!(html.contains(field.as_str()), "{id:?} dropped '{field}'");
            }
            assert!(html.contains(&data.summary), "{id:?} dropped the summary");

            for exp in &data.experience {
                assert!(html.contains(&exp.title), "{id:?} dropped an experience title");
                assert!(html.contains(&exp.company), "{id:?} dropped a company");
                assert!(html.contains(&exp.start_date) && html.contains(&exp.end_date));
                for line in description_lines(&exp.description) {
                    assert!(
                        html.contains(&escape_html(&line)),
                        "{id:?} dropped description line '{line}'"
                    );
                }
            }

            for edu in &data.education {
                assert!(html.contains(&edu.institution));
                assert!(html.contains(&edu.degree));
                assert!(html.contains(&edu.start_date) && html.contains(&edu.end_date));
            }

            for skill in &data.skills {
                assert!(html.contains(skill.as_str()), "{id:?} dropped skill '{skill}'");
            }
        }
    }

    #[test]
    fn test_corrupted_bullet_never_reaches_the_page() {
        let mut data = sample_data();
        data.experience[0].description = "â€¢ Migrated the build\n• Kept the lights on".into();

        for id in TemplateId::ALL {
            let html = render(&data, id).html;
            assert!(!html.contains("â€¢"), "{id:?} rendered the corrupted glyph");
            assert!(html.contains("Migrated the build"));
            assert!(html.contains("Kept the lights on"));
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let data = sample_data();
        for id in TemplateId::ALL {
            assert_eq!(render(&data, id).html, render(&data, id).html);
        }
    }

    #[test]
    fn test_field_values_are_escaped() {
        let mut data = sample_data();
        data.personal_info.name = "Alex <Doe> & Co".into();

        for id in TemplateId::ALL {
            let html = render(&data, id).html;
            assert!(html.contains("Alex &lt;Doe&gt; &amp; Co"), "{id:?} failed to escape");
            assert!(!html.contains("Alex <Doe>"));
        }
    }

    // ── skill bars ──────────────────────────────────────────────────────────

    #[test]
    fn test_skill_bar_width_is_deterministic_and_in_range() {
        for skill in ["React", "TypeScript", "GraphQL", "x"] {
            let w = skill_bar_width(skill);
            assert!((60..=100).contains(&w), "width {w} out of range");
            assert_eq!(w, skill_bar_width(skill));
        }
    }
}
