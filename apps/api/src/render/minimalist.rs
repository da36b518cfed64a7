//! Minimalist — oversized light header, section labels in a narrow column
//! beside the content, skills as pills. Dashes instead of bullet glyphs.

use super::{description_lines, escape_html, Template, TemplateId, VisualDocument, PAGE_WIDTH_PX};
use crate::models::resume::ResumeData;

pub struct Minimalist;

const CSS: &str = "\
body{margin:0;background:#fff;color:#111827;font-family:Helvetica,Arial,sans-serif;}\
.page{width:816px;min-height:1122px;box-sizing:border-box;padding:48px;}\
header{margin-bottom:48px;}\
header h1{font-size:56px;font-weight:200;letter-spacing:-2px;margin:0;}\
header .title{font-size:22px;color:#6b7280;font-weight:300;margin:4px 0 0;}\
.contact{display:flex;gap:24px;font-size:13px;color:#4b5563;margin-top:16px;}\
.row{display:flex;margin-bottom:40px;}\
.label{width:25%;box-sizing:border-box;padding-right:24px;}\
.label h2{font-size:12px;font-weight:bold;text-transform:uppercase;\
letter-spacing:3px;color:#6b7280;margin:4px 0 0;}\
.content{width:75%;}\
.content p{margin:0;line-height:1.6;font-size:14px;}\
.entry{margin-bottom:24px;}\
.entry-head{display:flex;justify-content:space-between;align-items:baseline;}\
.entry-head h3{font-size:17px;margin:0;}\
.dates{font-size:13px;color:#6b7280;}\
.role{font-size:15px;color:#4b5563;margin:2px 0 0;}\
.lines{margin:8px 0 0;padding:0;list-style:none;font-size:13px;color:#374151;}\
.lines li{margin-bottom:4px;}\
.pills{display:flex;flex-wrap:wrap;gap:8px;}\
.pill{background:#e5e7eb;color:#1f2937;font-size:12px;font-weight:500;\
padding:4px 12px;border-radius:999px;}";

impl Template for Minimalist {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut html = String::new();

        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
        html.push_str(CSS);
        html.push_str("</style></head><body><div class=\"page\">");

        html.push_str(&format!(
            "<header><h1>{}</h1><p class=\"title\">{}</p><div class=\"contact\">\
             <span>{}</span><span>{}</span><span>{}</span><span>{}</span></div></header>",
            escape_html(&info.name),
            escape_html(&info.title),
            escape_html(&info.email),
            escape_html(&info.phone),
            escape_html(&info.location),
            escape_html(&info.website),
        ));

        html.push_str(&format!(
            "<div class=\"row\"><div class=\"label\"><h2>Summary</h2></div>\
             <div class=\"content\"><p>{}</p></div></div>",
            escape_html(&data.summary),
        ));

        html.push_str("<div class=\"row\"><div class=\"label\"><h2>Experience</h2></div><div class=\"content\">");
        for exp in &data.experience {
            html.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3>\
                 <span class=\"dates\">{} — {}</span></div><p class=\"role\">{}</p><ul class=\"lines\">",
                escape_html(&exp.company),
                escape_html(&exp.start_date),
                escape_html(&exp.end_date),
                escape_html(&exp.title),
            ));
            for line in description_lines(&exp.description) {
                html.push_str(&format!("<li>– {}</li>", escape_html(&line)));
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</div></div>");

        html.push_str("<div class=\"row\"><div class=\"label\"><h2>Education</h2></div><div class=\"content\">");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3>\
                 <span class=\"dates\">{} — {}</span></div><p class=\"role\">{}</p></div>",
                escape_html(&edu.institution),
                escape_html(&edu.start_date),
                escape_html(&edu.end_date),
                escape_html(&edu.degree),
            ));
        }
        html.push_str("</div></div>");

        html.push_str("<div class=\"row\"><div class=\"label\"><h2>Skills</h2></div><div class=\"content\"><div class=\"pills\">");
        for skill in &data.skills {
            html.push_str(&format!("<span class=\"pill\">{}</span>", escape_html(skill)));
        }
        html.push_str("</div></div></div>");

        html.push_str("</div></body></html>");

        VisualDocument {
            template: TemplateId::Minimalist,
            page_width_px: PAGE_WIDTH_PX,
            html,
        }
    }
}
