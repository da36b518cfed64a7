//! Creative — teal sidebar with an initial-letter avatar and decorative
//! skill-proficiency bars, timeline-styled experience in the main column.
//!
//! The bars are capped at six; the remaining skills are listed beneath them
//! so every skill still appears on the page.

use super::{
    description_lines, escape_html, skill_bar_width, Template, TemplateId, VisualDocument,
    PAGE_WIDTH_PX,
};
use crate::models::resume::ResumeData;

pub struct Creative;

/// How many skills get a proficiency bar in the sidebar.
const BAR_COUNT: usize = 6;

const CSS: &str = "\
body{margin:0;background:#fff;font-family:Helvetica,Arial,sans-serif;}\
.page{width:816px;min-height:1122px;display:flex;box-sizing:border-box;}\
.sidebar{width:33%;box-sizing:border-box;background:#0f766e;color:#fff;padding:32px;}\
.avatar{width:128px;height:128px;border-radius:50%;background:#fff;color:#0f766e;\
border:4px solid #99f6e4;margin:16px auto;display:flex;align-items:center;\
justify-content:center;font-size:48px;font-weight:bold;}\
.who{text-align:center;}\
.who h1{font-size:28px;margin:0;}\
.who .title{font-size:16px;color:#99f6e4;margin:4px 0 0;}\
.sidebar h2{font-size:15px;text-transform:uppercase;letter-spacing:2px;\
border-bottom:2px solid #2dd4bf;padding-bottom:4px;margin:32px 0 12px;}\
.sidebar ul{list-style:none;margin:0;padding:0;font-size:13px;color:#ccfbf1;}\
.sidebar li{margin-bottom:10px;}\
.bar-row{margin-bottom:10px;font-size:13px;color:#ccfbf1;}\
.bar{background:#14b8a6;border-radius:999px;height:6px;margin-top:4px;}\
.bar-fill{background:#99f6e4;border-radius:999px;height:6px;}\
.more-skills{font-size:12px;color:#ccfbf1;margin:8px 0 0;}\
.main{width:67%;box-sizing:border-box;padding:40px;color:#1f2937;}\
.main h2{font-size:26px;color:#115e59;border-bottom:4px solid #99f6e4;\
padding-bottom:8px;margin:0 0 16px;}\
.main section{margin-bottom:32px;}\
.entry{margin-bottom:24px;padding-left:24px;border-left:2px solid #99f6e4;}\
.dates{font-size:13px;color:#6b7280;margin:0;}\
.entry h3{font-size:19px;margin:2px 0 0;}\
.org{font-size:16px;color:#374151;font-weight:500;margin:2px 0 0;}\
.entry ul{margin:8px 0 0;padding-left:20px;font-size:13px;color:#4b5563;}\
.entry li{margin-bottom:4px;}";

impl Template for Creative {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let initial = info.name.chars().next().map(String::from).unwrap_or_default();
        let mut html = String::new();

        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
        html.push_str(CSS);
        html.push_str("</style></head><body><div class=\"page\">");

        // Sidebar
        html.push_str("<div class=\"sidebar\">");
        html.push_str(&format!(
            "<div class=\"who\"><div class=\"avatar\">{}</div><h1>{}</h1><p class=\"title\">{}</p></div>",
            escape_html(&initial),
            escape_html(&info.name),
            escape_html(&info.title),
        ));

        html.push_str("<h2>Contact</h2><ul>");
        for value in [&info.email, &info.phone, &info.location, &info.website] {
            html.push_str(&format!("<li>{}</li>", escape_html(value)));
        }
        html.push_str("</ul>");

        html.push_str("<h2>Skills</h2>");
        for skill in data.skills.iter().take(BAR_COUNT) {
            html.push_str(&format!(
                "<div class=\"bar-row\">{}<div class=\"bar\">\
                 <div class=\"bar-fill\" style=\"width:{}%\"></div></div></div>",
                escape_html(skill),
                skill_bar_width(skill),
            ));
        }
        if data.skills.len() > BAR_COUNT {
            let rest = data.skills[BAR_COUNT..]
                .iter()
                .map(|s| escape_html(s))
                .collect::<Vec<_>>()
                .join(" · ");
            html.push_str(&format!("<p class=\"more-skills\">{rest}</p>"));
        }
        html.push_str("</div>");

        // Main column
        html.push_str("<div class=\"main\">");
        html.push_str(&format!(
            "<section><h2>Summary</h2><p>{}</p></section>",
            escape_html(&data.summary),
        ));

        html.push_str("<section><h2>Experience</h2>");
        for exp in &data.experience {
            html.push_str(&format!(
                "<div class=\"entry\"><p class=\"dates\">{} - {}</p><h3>{}</h3>\
                 <p class=\"org\">{}</p><ul>",
                escape_html(&exp.start_date),
                escape_html(&exp.end_date),
                escape_html(&exp.title),
                escape_html(&exp.company),
            ));
            for line in description_lines(&exp.description) {
                html.push_str(&format!("<li>{}</li>", escape_html(&line)));
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</section>");

        html.push_str("<section><h2>Education</h2>");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\"><p class=\"dates\">{} - {}</p><h3>{}</h3>\
                 <p class=\"org\">{}</p></div>",
                escape_html(&edu.start_date),
                escape_html(&edu.end_date),
                escape_html(&edu.institution),
                escape_html(&edu.degree),
            ));
        }
        html.push_str("</section></div>");

        html.push_str("</div></body></html>");

        VisualDocument {
            template: TemplateId::Creative,
            page_width_px: PAGE_WIDTH_PX,
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_beyond_the_bar_cap_still_appear() {
        let data = ResumeData::starter();
        assert!(data.skills.len() > BAR_COUNT);

        let html = Creative.render(&data).html;
        for skill in &data.skills[BAR_COUNT..] {
            assert!(html.contains(skill.as_str()), "skill '{skill}' missing");
        }
    }

    #[test]
    fn test_avatar_uses_first_letter_of_name() {
        let data = ResumeData::starter();
        let html = Creative.render(&data).html;
        assert!(html.contains("<div class=\"avatar\">A</div>"));
    }
}
