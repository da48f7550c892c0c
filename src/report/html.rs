// SPDX-License-Identifier: PMPL-1.0-or-later
//! Standalone HTML report.

use crate::finding::{Category, Finding};
use crate::scanner::{PageReport, ScanSummary};
use std::fmt::Write;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; background: #f5f5f5; margin: 0; padding: 0; }
    header { background: #003366; color: #ffffff; padding: 20px; }
    header h1 { margin: 0 0 10px 0; font-size: 24px; }
    header p { margin: 4px 0; font-size: 14px; }
    .container { max-width: 1200px; margin: 20px auto; padding: 0 15px 30px 15px; }
    .summary, .card { background: #ffffff; border-radius: 8px; padding: 15px 20px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.08); }
    .summary span { display: inline-block; margin-right: 20px; font-size: 14px; }
    .card h2 { margin-top: 0; font-size: 18px; word-break: break-all; }
    .source { font-size: 13px; color: #555555; margin-bottom: 5px; }
    .status-ok { color: #1b5e20; font-weight: bold; }
    .status-error { color: #b71c1c; font-weight: bold; }
    .tag { display: inline-block; padding: 2px 8px; border-radius: 12px; font-size: 11px; margin-right: 6px; }
    .tag-issues { background: #ffebee; color: #c62828; }
    .tag-ok { background: #e8f5e9; color: #1b5e20; }
    .tag-error { background: #fff3e0; color: #8a3b00; }
    h3 { margin-top: 15px; font-size: 15px; border-bottom: 1px solid #eeeeee; padding-bottom: 4px; }
    .wcag { font-size: 12px; color: #555555; }
    ul { margin-top: 5px; padding-left: 18px; font-size: 13px; }
    li { margin-bottom: 4px; }
    code { word-break: break-all; }
    .no-issues { font-size: 13px; color: #1b5e20; font-weight: bold; }
    footer { text-align: center; font-size: 11px; color: #555555; padding: 10px 0 20px 0; }
"#;

/// Builds the HTML report for a scan
pub struct HtmlReport<'a> {
    summary: &'a ScanSummary,
    generated_at: &'a str,
    out: String,
}

impl<'a> HtmlReport<'a> {
    pub fn new(summary: &'a ScanSummary, generated_at: &'a str) -> Self {
        Self {
            summary,
            generated_at,
            out: String::new(),
        }
    }

    /// Render the whole page
    pub fn render(mut self) -> String {
        self.head();
        self.summary_block();
        let summary = self.summary;
        for page in &summary.pages {
            self.page_card(page);
        }
        self.tail();
        self.out
    }

    fn head(&mut self) {
        let _ = write!(
            self.out,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <title>FinAccAI Accessibility Report</title>\n<style>{}</style>\n</head>\n<body>\n\
             <header>\n<h1>FinAccAI Accessibility Report</h1>\n<p>Generated: {}</p>\n</header>\n\
             <main class=\"container\">\n",
            STYLE,
            escape(self.generated_at)
        );
    }

    fn summary_block(&mut self) {
        let _ = write!(
            self.out,
            "<div class=\"summary\">\n\
             <span><strong>Total sites scanned:</strong> {}</span>\n\
             <span><strong>Sites with issues:</strong> {}</span>\n\
             <span><strong>Sites with errors:</strong> {}</span>\n\
             <span><strong>Total issues:</strong> {}</span>\n</div>\n",
            self.summary.pages_scanned(),
            self.summary.pages_with_issues(),
            self.summary.pages_with_errors(),
            self.summary.total_issues()
        );
    }

    fn page_card(&mut self, page: &PageReport) {
        let title = page.title.as_deref().unwrap_or("(no title)");
        let _ = write!(
            self.out,
            "<section class=\"card\">\n<h2>{}</h2>\n<div class=\"source\">{} &middot; WCAG {}</div>\n",
            escape(title),
            escape(&page.source),
            page.level
        );

        if let Some(ref error) = page.error {
            let _ = write!(
                self.out,
                "<div class=\"status-error\">Error checking page: {}</div>\n\
                 <span class=\"tag tag-error\">Scan error</span>\n</section>\n",
                escape(error)
            );
            return;
        }

        if page.has_issues() {
            self.out.push_str(
                "<div class=\"status-error\">Accessibility issues detected.</div>\n\
                 <span class=\"tag tag-issues\">Has issues</span>\n",
            );
        } else {
            self.out.push_str(
                "<div class=\"status-ok\">No issues detected by current checks.</div>\n\
                 <span class=\"tag tag-ok\">Clean</span>\n",
            );
        }

        for (category, findings) in page.issues.iter() {
            self.category_section(category, findings);
        }

        self.out.push_str("</section>\n");
    }

    fn category_section(&mut self, category: Category, findings: &[Finding]) {
        let _ = write!(
            self.out,
            "<h3>{} ({})</h3>\n<div class=\"wcag\">WCAG {}</div>\n",
            escape(category.title()),
            findings.len(),
            escape(category.wcag_criterion())
        );

        if findings.is_empty() {
            self.out
                .push_str("<div class=\"no-issues\">No issues in this category.</div>\n");
            return;
        }

        self.out.push_str("<ul>\n");
        for finding in findings {
            let _ = write!(self.out, "<li>{}", escape(&finding.message));
            if let Some(ref snippet) = finding.snippet {
                let _ = write!(self.out, "<br><code>{}</code>", escape(snippet));
            }
            self.out.push_str("</li>\n");
        }
        self.out.push_str("</ul>\n");
    }

    fn tail(&mut self) {
        self.out.push_str(
            "</main>\n<footer>\nFinAccAI &mdash; Rule-based HTML accessibility checks \
             (images, inputs, contrast, headings, and WCAG AAA text checks).\n</footer>\n\
             </body>\n</html>\n",
        );
    }
}

/// Escape text for HTML element and attribute content
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
