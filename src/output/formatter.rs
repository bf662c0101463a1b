//! Output formatters: console, JSON, markdown, and HTML presentation

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScanReport;
use askama::Template;
use colored::{Color, Colorize};
use serde_json;

/// Trait for formatting scan reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored keyword presence markers
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter rendering the keyword presence table
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Coordinates the formatters behind a single format dispatch
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Scan Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 700px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
        }
        th, td {
            text-align: left;
            padding: 8px 12px;
            border-bottom: 1px solid #e9ecef;
        }
        th {
            background: #f8f9fa;
            color: #007acc;
        }
        td.present-true { color: #28a745; font-weight: bold; }
        td.present-false { color: #dc3545; }
        .summary {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
            margin: 20px 0;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Scan Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <h2>Keywords ({{ keywords_present }}/{{ keyword_count }} present)</h2>
        <table>
            <thead>
                <tr><th>Keyword</th><th>Present</th></tr>
            </thead>
            <tbody>
                {{ keyword_rows_html | safe }}
            </tbody>
        </table>

        <h2>Summary</h2>
        <div class="summary">{{ summary }}</div>

        <div class="metadata">
            <p><strong>Endpoint:</strong> {{ endpoint }}</p>
            <p><strong>Job description:</strong> {{ job_source }} | <strong>Resume:</strong> {{ resume_source }}</p>
            <p>Generated by resume-scan v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlReportTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    keyword_count: usize,
    keywords_present: usize,
    keyword_rows_html: String,
    summary: String,
    endpoint: String,
    job_source: String,
    resume_source: String,
    version: String,
}

fn format_timestamp(time: std::time::SystemTime) -> String {
    chrono::DateTime::<chrono::Utc>::from(time)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_presence(&self, present: bool) -> String {
        if self.use_colors {
            if present {
                "✓".green().bold().to_string()
            } else {
                "✗".red().to_string()
            }
        } else if present {
            "[x]".to_string()
        } else {
            "[ ]".to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME SCAN RESULTS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report.metadata.generated_at),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header(
            &format!(
                "Keyword Coverage ({}/{} present)",
                report.metadata.keywords_present, report.metadata.keyword_count
            ),
            2,
        ));

        if report.analysis.keywords.is_empty() {
            output.push_str("  (no keywords returned)\n");
        }
        for keyword in &report.analysis.keywords {
            output.push_str(&format!(
                "  {} {}\n",
                self.format_presence(keyword.present),
                keyword.keyword
            ));
        }

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("{}\n", self.colorize(&report.analysis.summary, Color::Cyan)));

        if self.detailed {
            output.push_str(&self.format_header("Submission", 3));
            output.push_str(&format!("  • Job description: {}\n", report.metadata.job_source));
            output.push_str(&format!("  • Resume: {}\n", report.metadata.resume_source));
            output.push_str(&format!("  • Endpoint: {}\n", report.metadata.endpoint));
        }

        output.push_str(&format!(
            "\n{} Generated by resume-scan v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.client_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Scan Report\n\n");
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n\n",
            format_timestamp(report.metadata.generated_at),
            report.metadata.processing_time_ms
        ));

        output.push_str(&format!(
            "## Keywords ({}/{} present)\n\n",
            report.metadata.keywords_present, report.metadata.keyword_count
        ));
        output.push_str("| Keyword | Present |\n");
        output.push_str("| --- | --- |\n");
        for keyword in &report.analysis.keywords {
            output.push_str(&format!(
                "| {} | {} |\n",
                keyword.keyword.replace('|', "\\|"),
                keyword.present
            ));
        }

        output.push_str("\n## Summary\n\n");
        output.push_str(&report.analysis.summary);
        output.push('\n');

        if self.include_metadata {
            output.push_str("\n---\n");
            output.push_str(&format!(
                "Job description: {} | Resume: {}\n",
                report.metadata.job_source, report.metadata.resume_source
            ));
            output.push_str(&format!(
                "Endpoint: {} | resume-scan v{}\n",
                report.metadata.endpoint, report.metadata.client_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn keyword_rows(&self, report: &ScanReport) -> String {
        report
            .analysis
            .keywords
            .iter()
            .map(|k| {
                format!(
                    "<tr><td>{}</td><td class=\"present-{}\">{}</td></tr>",
                    escape_html(&k.keyword),
                    k.present,
                    k.present
                )
            })
            .collect::<Vec<_>>()
            .join("\n                ")
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let template = HtmlReportTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report.metadata.generated_at),
            processing_time: report.metadata.processing_time_ms,
            keyword_count: report.metadata.keyword_count,
            keywords_present: report.metadata.keywords_present,
            keyword_rows_html: self.keyword_rows(report),
            summary: report.analysis.summary.clone(),
            endpoint: report.metadata.endpoint.clone(),
            job_source: report.metadata.job_source.clone(),
            resume_source: report.metadata.resume_source.clone(),
            version: report.metadata.client_version.clone(),
        };

        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool, include_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(include_styles),
        }
    }

    pub fn format(&self, report: &ScanReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::{AnalysisResult, KeywordMatch};

    fn sample_report() -> ScanReport {
        ScanReport::new(
            AnalysisResult {
                keywords: vec![
                    KeywordMatch {
                        keyword: "SQL".to_string(),
                        present: true,
                    },
                    KeywordMatch {
                        keyword: "C++ <templates>".to_string(),
                        present: false,
                    },
                ],
                summary: "Good fit".to_string(),
            },
            "https://example.org/process".to_string(),
            "inline text (13 characters)".to_string(),
            "file: cv.pdf".to_string(),
            250,
        )
    }

    #[test]
    fn test_html_renders_keyword_table() {
        let formatter = HtmlFormatter::new(true);
        let html = formatter.format_report(&sample_report()).unwrap();

        assert!(html.contains("<td>SQL</td>"));
        assert!(html.contains("present-true\">true</td>"));
        assert!(html.contains("present-false\">false</td>"));
        assert!(html.contains("Good fit"));
        assert!(html.contains("1/2 present"));
    }

    #[test]
    fn test_html_escapes_keyword_text() {
        let formatter = HtmlFormatter::new(false);
        let html = formatter.format_report(&sample_report()).unwrap();

        assert!(html.contains("C++ &lt;templates&gt;"));
        assert!(!html.contains("<templates>"));
    }

    #[test]
    fn test_html_with_empty_keywords() {
        let formatter = HtmlFormatter::new(true);
        let report = ScanReport::new(
            AnalysisResult {
                keywords: vec![],
                summary: "No match".to_string(),
            },
            "https://example.org/process".to_string(),
            "inline text (1 characters)".to_string(),
            "inline text (1 characters)".to_string(),
            10,
        );

        let html = formatter.format_report(&report).unwrap();
        assert!(html.contains("<tbody>"));
        assert!(!html.contains("<tr><td>"));
        assert!(html.contains("No match"));
    }

    #[test]
    fn test_console_output_plain() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("[x] SQL"));
        assert!(output.contains("[ ] C++ <templates>"));
        assert!(output.contains("Good fit"));
    }

    #[test]
    fn test_console_detailed_includes_sources() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("file: cv.pdf"));
        assert!(output.contains("https://example.org/process"));
    }

    #[test]
    fn test_markdown_table() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("| Keyword | Present |"));
        assert!(output.contains("| SQL | true |"));
        assert!(output.contains("## Summary"));
    }

    #[test]
    fn test_json_round_trips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        let parsed: ScanReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.analysis.keywords.len(), 2);
        assert_eq!(parsed.metadata.keyword_count, 2);
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, false, true);
        let report = sample_report();

        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
        ] {
            let output = generator.format(&report, &format).unwrap();
            assert!(output.contains("SQL"), "{:?} output missing keyword", format);
        }
    }
}
