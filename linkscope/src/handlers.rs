use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use linkscope_analyzer::{AnalysisResult, LinkProbeResult, PageAnalyzer};
use clap::ArgMatches;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Inbound request descriptor as the (out-of-process) HTTP layer hands it
/// over: the method it saw and the `url` query value, when one was present.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub method: String,
    pub url: Option<String>,
}

/// Missing query values are carried as the literal string "undefined"
/// rather than an absent field. Historical payload compatibility.
pub fn fix_query_value(value: Option<&str>) -> String {
    value.unwrap_or("undefined").to_string()
}

/// The analysis endpoint only answers read-only queries.
pub fn is_read_only_method(method: &str) -> bool {
    method.eq_ignore_ascii_case("get")
}

/// Run one analysis for a boundary request and produce the status code and
/// JSON payload the HTTP layer writes back.
///
/// A non-GET method is rejected before any network activity happens.
pub async fn run_analysis(
    analyzer: &PageAnalyzer,
    request: &AnalyzeRequest,
) -> (u16, serde_json::Value) {
    if !is_read_only_method(&request.method) {
        return (
            404,
            json!({ "info": format!("Wrong request {}", request.method.to_lowercase()) }),
        );
    }

    let url = fix_query_value(request.url.as_deref());
    match analyzer.analyze(&url).await {
        Ok(analysis) => (200, json!(analysis)),
        Err(e) => (400, json!({ "info": e.to_string() })),
    }
}

/// Render a human-readable report for terminal display.
pub fn render_report(analysis: &AnalysisResult) -> String {
    let mut report = String::new();

    report.push_str("📊 Summary:\n");
    report.push_str(&format!("  Page: {}\n", analysis.url));
    report.push_str(&format!(
        "  Status: {} {}\n",
        analysis.response_code, analysis.response_message
    ));
    report.push_str(&format!("  Links probed: {}\n", analysis.total_links()));
    report.push_str(&format!(
        "  Internal: {}  External: {}\n",
        analysis.internal_links.len(),
        analysis.external_links.len()
    ));
    report.push_str(&format!(
        "  Duration: {}ms\n",
        analysis.analysis_duration_ms
    ));

    if !analysis.internal_links.is_empty() {
        report.push_str("\n🔗 Internal links:\n");
        for link in &analysis.internal_links {
            report.push_str(&render_link_line(link));
        }
    }

    if !analysis.external_links.is_empty() {
        report.push_str("\n🌐 External links:\n");
        for link in &analysis.external_links {
            report.push_str(&render_link_line(link));
        }
    }

    report
}

fn render_link_line(link: &LinkProbeResult) -> String {
    let (status_emoji, status_color) = match link.response_code {
        100..=199 => ("ℹ", "\x1b[37m"),
        200..=299 => ("✓", "\x1b[32m"),
        300..=399 => ("↪", "\x1b[36m"),
        400..=499 => ("⚠", "\x1b[33m"),
        500..=599 => ("✗", "\x1b[31m"),
        _ => ("?", "\x1b[37m"),
    };

    let lock = if link.secured { " 🔒" } else { "" };
    let shown_url = if link.parsed_url.is_empty() {
        "(empty href)"
    } else {
        &link.parsed_url
    };

    format!(
        "  {} {}{}{} {}{} ({}ms, {} bytes)\n",
        status_emoji,
        status_color,
        link.response_code,
        "\x1b[0m",
        shown_url,
        lock,
        link.total_access_duration_ms,
        link.content_length
    )
}

/// Write the JSON report to a file.
pub fn write_report(path: &Path, analysis: &AnalysisResult) -> anyhow::Result<()> {
    let payload = serde_json::to_string_pretty(analysis)?;
    std::fs::write(path, payload)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

pub async fn handle_analyze(sub_matches: &ArgMatches) {
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<Url>("url").unwrap();
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let as_json = sub_matches.get_flag("json");
    let output = sub_matches.get_one::<PathBuf>("output");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Analyzing {}...", url));

    let analyzer = PageAnalyzer::with_timeout(timeout);
    let analysis = match analyzer.analyze(url.as_str()).await {
        Ok(analysis) => analysis,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    spinner.finish_and_clear();
    println!("{} Analysis complete!\n", "✓".green().bold());

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).expect("report serializes")
        );
    } else {
        print!("{}", render_report(&analysis));
    }

    if let Some(path) = output {
        match write_report(path, &analysis) {
            Ok(()) => println!(
                "\n{} Report written to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            ),
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        }
    }
}
