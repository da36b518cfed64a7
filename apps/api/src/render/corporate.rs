//! Corporate — left-aligned header, narrow contact/skills/education column
//! beside the summary and experience, serif section headings.

use super::{description_lines, escape_html, Template, TemplateId, VisualDocument, PAGE_WIDTH_PX};
use crate::models::resume::ResumeData;

pub struct Corporate;

const CSS: &str = "\
body{margin:0;background:#fff;color:#1f2937;font-family:Helvetica,Arial,sans-serif;}\
.page{width:816px;min-height:1122px;box-sizing:border-box;padding:40px;}\
header{margin-bottom:24px;}\
header h1{font-size:44px;color:#0f172a;letter-spacing:-1px;margin:0;}\
header .title{font-size:20px;color:#475569;margin:8px 0 0;\
border-bottom:2px solid #cbd5e1;padding-bottom:16px;}\
.columns{display:flex;gap:32px;}\
.side{width:33%;}\
.wide{width:67%;}\
.side h2{font-family:Georgia,'Times New Roman',serif;font-size:16px;font-weight:bold;\
text-transform:uppercase;letter-spacing:2px;color:#334155;\
border-bottom:1px solid #cbd5e1;padding-bottom:4px;margin:0 0 12px;}\
.side section{margin-bottom:32px;}\
.side ul{list-style:none;margin:0;padding:0;font-size:13px;color:#475569;}\
.side li{margin-bottom:4px;}\
.side .edu{margin-bottom:12px;}\
.side .edu h3{font-size:14px;color:#1e293b;margin:0;}\
.side .edu .inst{font-size:13px;color:#475569;margin:2px 0 0;}\
.side .edu .dates{font-size:12px;color:#64748b;margin:2px 0 0;}\
.wide h2{font-family:Georgia,'Times New Roman',serif;font-size:22px;color:#1e293b;\
border-bottom:2px solid #cbd5e1;padding-bottom:8px;margin:0 0 12px;}\
.wide section{margin-bottom:32px;}\
.wide .summary{line-height:1.6;color:#334155;margin:0;}\
.entry{margin-bottom:24px;}\
.entry-head{display:flex;justify-content:space-between;align-items:baseline;}\
.entry-head h3{font-size:19px;color:#1e293b;margin:0;}\
.dates{font-size:13px;font-weight:300;color:#64748b;}\
.org{font-size:16px;font-style:italic;color:#475569;margin:2px 0 0;}\
.entry ul{margin:8px 0 0;padding-left:20px;font-size:13px;color:#334155;}\
.entry li{margin-bottom:4px;}";

impl Template for Corporate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut html = String::new();

        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
        html.push_str(CSS);
        html.push_str("</style></head><body><div class=\"page\">");

        html.push_str(&format!(
            "<header><h1>{}</h1><p class=\"title\">{}</p></header>",
            escape_html(&info.name),
            escape_html(&info.title),
        ));

        html.push_str("<div class=\"columns\">");

        // Narrow column
        html.push_str("<div class=\"side\">");
        html.push_str("<section><h2>Contact</h2><ul>");
        for value in [&info.email, &info.phone, &info.location, &info.website] {
            html.push_str(&format!("<li>{}</li>", escape_html(value)));
        }
        html.push_str("</ul></section>");

        html.push_str("<section><h2>Skills</h2><ul>");
        for skill in &data.skills {
            html.push_str(&format!("<li>{}</li>", escape_html(skill)));
        }
        html.push_str("</ul></section>");

        html.push_str("<section><h2>Education</h2>");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"edu\"><h3>{}</h3><p class=\"inst\">{}</p>\
                 <p class=\"dates\">{} - {}</p></div>",
                escape_html(&edu.degree),
                escape_html(&edu.institution),
                escape_html(&edu.start_date),
                escape_html(&edu.end_date),
            ));
        }
        html.push_str("</section></div>");

        // Wide column
        html.push_str("<div class=\"wide\">");
        html.push_str(&format!(
            "<section><h2>Summary</h2><p class=\"summary\">{}</p></section>",
            escape_html(&data.summary),
        ));

        html.push_str("<section><h2>Experience</h2>");
        for exp in &data.experience {
            html.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3>\
                 <span class=\"dates\">{} - {}</span></div><p class=\"org\">{}</p><ul>",
                escape_html(&exp.title),
                escape_html(&exp.start_date),
                escape_html(&exp.end_date),
                escape_html(&exp.company),
            ));
            for line in description_lines(&exp.description) {
                html.push_str(&format!("<li>{}</li>", escape_html(&line)));
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</section></div>");

        html.push_str("</div></div></body></html>");

        VisualDocument {
            template: TemplateId::Corporate,
            page_width_px: PAGE_WIDTH_PX,
            html,
        }
    }
}
