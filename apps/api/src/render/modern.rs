//! Modern — dark sidebar (contact, skills, education) beside a main column.

use super::{description_lines, escape_html, Template, TemplateId, VisualDocument, PAGE_WIDTH_PX};
use crate::models::resume::ResumeData;

pub struct Modern;

const CSS: &str = "\
body{margin:0;background:#fff;font-family:Helvetica,Arial,sans-serif;}\
.page{width:816px;min-height:1122px;display:flex;box-sizing:border-box;}\
.sidebar{width:33%;box-sizing:border-box;background:#1e293b;color:#fff;padding:32px;}\
.sidebar .who{text-align:center;margin-bottom:40px;}\
.sidebar h1{font-size:32px;margin:0;letter-spacing:-1px;}\
.sidebar .title{font-size:16px;color:#cbd5e1;margin:8px 0 0;}\
.sidebar h2{font-size:15px;text-transform:uppercase;letter-spacing:2px;\
border-bottom:2px solid #6366f1;padding-bottom:4px;margin:24px 0 12px;}\
.sidebar ul{margin:0;padding-left:18px;font-size:13px;color:#cbd5e1;}\
.sidebar li{margin-bottom:6px;}\
.sidebar .contact-list{list-style:none;padding-left:0;}\
.sidebar .edu{margin-bottom:12px;}\
.sidebar .edu h3{font-size:14px;margin:0;}\
.sidebar .edu p{font-size:12px;color:#94a3b8;margin:2px 0 0;}\
.main{width:67%;box-sizing:border-box;padding:40px;color:#1f2937;}\
.main h2{font-size:22px;text-transform:uppercase;letter-spacing:2px;color:#374151;\
border-bottom:4px solid #d1d5db;padding-bottom:8px;margin:0 0 16px;}\
.main section{margin-bottom:32px;}\
.entry{margin-bottom:24px;}\
.entry-head{display:flex;justify-content:space-between;align-items:baseline;}\
.entry-head h3{font-size:19px;margin:0;}\
.dates{font-size:13px;color:#6b7280;}\
.org{font-size:16px;color:#4b5563;font-weight:500;margin:2px 0 0;}\
.entry ul{margin:8px 0 0;padding-left:20px;font-size:13px;color:#4b5563;}\
.entry li{margin-bottom:4px;}";

impl Template for Modern {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut html = String::new();

        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
        html.push_str(CSS);
        html.push_str("</style></head><body><div class=\"page\">");

        // Sidebar
        html.push_str("<div class=\"sidebar\">");
        html.push_str(&format!(
            "<div class=\"who\"><h1>{}</h1><p class=\"title\">{}</p></div>",
            escape_html(&info.name),
            escape_html(&info.title),
        ));

        html.push_str("<h2>Contact</h2><ul class=\"contact-list\">");
        for (label, value) in [
            ("E:", &info.email),
            ("P:", &info.phone),
            ("A:", &info.location),
            ("W:", &info.website),
        ] {
            html.push_str(&format!("<li><b>{label}</b> {}</li>", escape_html(value)));
        }
        html.push_str("</ul>");

        html.push_str("<h2>Skills</h2><ul>");
        for skill in &data.skills {
            html.push_str(&format!("<li>{}</li>", escape_html(skill)));
        }
        html.push_str("</ul>");

        html.push_str("<h2>Education</h2>");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"edu\"><h3>{}</h3><p>{}</p><p>{} - {}</p></div>",
                escape_html(&edu.degree),
                escape_html(&edu.institution),
                escape_html(&edu.start_date),
                escape_html(&edu.end_date),
            ));
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

        html.push_str("</div></body></html>");

        VisualDocument {
            template: TemplateId::Modern,
            page_width_px: PAGE_WIDTH_PX,
            html,
        }
    }
}
