//! Classic — single-column serif layout with a centered header and
//! pipe-separated contact line.

use super::{description_lines, escape_html, Template, TemplateId, VisualDocument, PAGE_WIDTH_PX};
use crate::models::resume::ResumeData;

pub struct Classic;

const CSS: &str = "\
body{margin:0;background:#fff;color:#1f2937;font-family:Georgia,'Times New Roman',serif;}\
.page{width:816px;min-height:1122px;box-sizing:border-box;padding:40px;}\
header{text-align:center;border-bottom:2px solid #9ca3af;padding-bottom:16px;margin-bottom:24px;}\
header h1{font-size:44px;letter-spacing:2px;margin:0;font-weight:bold;}\
header .title{font-size:20px;margin:8px 0 0;}\
.contact{text-align:center;font-size:13px;margin-bottom:32px;}\
.contact .sep{margin:0 8px;}\
section{margin-bottom:32px;}\
h2{font-size:24px;border-bottom:2px solid #d1d5db;padding-bottom:4px;margin:0 0 12px;}\
.entry{margin-bottom:16px;}\
.entry-head{display:flex;justify-content:space-between;align-items:baseline;}\
.entry-head h3{font-size:17px;margin:0;}\
.dates{font-size:13px;font-weight:300;}\
.org{font-style:italic;margin:2px 0 0;}\
ul{margin:8px 0 0;padding-left:20px;font-size:13px;}\
li{margin-bottom:4px;}\
.skills{font-size:15px;line-height:1.6;margin:0;}";

impl Template for Classic {
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

        let contact = [&info.email, &info.phone, &info.location, &info.website]
            .map(|v| escape_html(v))
            .join("<span class=\"sep\">|</span>");
        html.push_str(&format!("<div class=\"contact\">{contact}</div>"));

        html.push_str(&format!(
            "<section><h2>Summary</h2><p>{}</p></section>",
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
        html.push_str("</section>");

        html.push_str("<section><h2>Education</h2>");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3>\
                 <span class=\"dates\">{} - {}</span></div><p class=\"org\">{}</p></div>",
                escape_html(&edu.institution),
                escape_html(&edu.start_date),
                escape_html(&edu.end_date),
                escape_html(&edu.degree),
            ));
        }
        html.push_str("</section>");

        let skills = data
            .skills
            .iter()
            .map(|s| escape_html(s))
            .collect::<Vec<_>>()
            .join(" • ");
        html.push_str(&format!(
            "<section><h2>Skills</h2><p class=\"skills\">{skills}</p></section>"
        ));

        html.push_str("</div></body></html>");

        VisualDocument {
            template: TemplateId::Classic,
            page_width_px: PAGE_WIDTH_PX,
            html,
        }
    }
}
