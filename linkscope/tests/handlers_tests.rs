use linkscope::handlers::*;
use linkscope_analyzer::{AnalysisResult, LinkProbeResult, PageAnalyzer};
use tempfile::NamedTempFile;

fn sample_analysis() -> AnalysisResult {
    let mut analysis = AnalysisResult::new("https://site.example/".to_string());
    analysis.response_code = 200;
    analysis.response_message = "OK".to_string();
    analysis.analysis_duration_ms = 42;
    analysis.internal_links.push(LinkProbeResult {
        parsed_url: "https://site.example/about".to_string(),
        final_url: "https://site.example/about".to_string(),
        secured: true,
        reachable: true,
        redirected_urls: vec![],
        total_access_duration_ms: 12,
        content_length: 512,
        response_code: 200,
        response_message: "OK".to_string(),
    });
    analysis.external_links.push(LinkProbeResult {
        parsed_url: "ht!tp://bad".to_string(),
        final_url: String::new(),
        secured: false,
        reachable: true,
        redirected_urls: vec![],
        total_access_duration_ms: 1,
        content_length: 0,
        response_code: 400,
        response_message: "Bad request".to_string(),
    });
    analysis
}

#[test]
fn test_fix_query_value_present() {
    assert_eq!(
        fix_query_value(Some("https://site.example/")),
        "https://site.example/"
    );
}

#[test]
fn test_fix_query_value_missing_is_sentinel() {
    assert_eq!(fix_query_value(None), "undefined");
}

#[test]
fn test_is_read_only_method_case_insensitive() {
    assert!(is_read_only_method("get"));
    assert!(is_read_only_method("GET"));
    assert!(is_read_only_method("GeT"));
    assert!(!is_read_only_method("post"));
    assert!(!is_read_only_method("delete"));
}

#[tokio::test]
async fn test_run_analysis_rejects_wrong_method() {
    let analyzer = PageAnalyzer::new();
    let request = AnalyzeRequest {
        method: "POST".to_string(),
        url: Some("https://site.example/".to_string()),
    };

    let (status, payload) = run_analysis(&analyzer, &request).await;

    assert_eq!(status, 404);
    assert_eq!(payload["info"], "Wrong request post");
}

#[tokio::test]
async fn test_run_analysis_missing_url_sentinel() {
    let analyzer = PageAnalyzer::new();
    let request = AnalyzeRequest {
        method: "get".to_string(),
        url: None,
    };

    // "undefined" is not a parseable URL, so this fails before any fetch.
    let (status, payload) = run_analysis(&analyzer, &request).await;

    assert_eq!(status, 400);
    assert!(payload["info"].as_str().unwrap().contains("undefined"));
}

#[test]
fn test_render_report_contents() {
    let report = render_report(&sample_analysis());

    assert!(report.contains("https://site.example/"));
    assert!(report.contains("Links probed: 2"));
    assert!(report.contains("Internal: 1  External: 1"));
    assert!(report.contains("Duration: 42ms"));
    assert!(report.contains("https://site.example/about"));
    assert!(report.contains("ht!tp://bad"));
}

#[test]
fn test_write_report_round_trips_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp_file = NamedTempFile::new()?;
    write_report(temp_file.path(), &sample_analysis())?;

    let content = std::fs::read_to_string(temp_file.path())?;
    let parsed: serde_json::Value = serde_json::from_str(&content)?;

    // Wire names stay camelCase for payload compatibility.
    assert_eq!(parsed["analysisDurationMs"], 42);
    assert_eq!(parsed["internalLinks"][0]["parsedUrl"], "https://site.example/about");
    assert_eq!(parsed["internalLinks"][0]["secured"], true);
    assert!(parsed["internalLinks"][0]["redirectedURLs"].is_array());
    assert_eq!(parsed["externalLinks"][0]["responseCode"], 400);

    Ok(())
}
