// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for finaccai

use finaccai::config::{load_config, ScanConfig};
use finaccai::report::{generate_report, OutputFormat};
use finaccai::scanner;
use finaccai::{run_checks, Category, ConformanceLevel};
use std::fs;
use std::path::Path;

fn count(page: &scanner::PageReport, category: Category) -> usize {
    page.issues.get(category).map(|f| f.len()).unwrap_or(0)
}

#[test]
fn test_scan_accessible_fixture() {
    let page = scanner::scan_file(
        Path::new("tests/fixtures/accessible.html"),
        &ScanConfig::with_level(ConformanceLevel::AAA),
    )
    .expect("scan should succeed");

    assert_eq!(page.title.as_deref(), Some("Savings Account Overview"));
    assert_eq!(page.issues.category_count(), 9);
    assert!(
        page.issues.is_clean(),
        "Accessible fixture should have no findings, got {:?}",
        page.issues
    );
}

#[test]
fn test_scan_inaccessible_fixture() {
    let page = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &ScanConfig::with_level(ConformanceLevel::AAA),
    )
    .expect("scan should succeed");

    assert_eq!(count(&page, Category::Images), 2);
    assert_eq!(count(&page, Category::Inputs), 2);
    assert_eq!(count(&page, Category::Contrast), 1);
    assert_eq!(count(&page, Category::Headings), 1);
    assert_eq!(count(&page, Category::LanguageAttributes), 1);
    assert_eq!(count(&page, Category::LinkContext), 2);
    assert_eq!(count(&page, Category::SectionHeadings), 1);
    assert_eq!(count(&page, Category::Abbreviations), 2);
    assert_eq!(count(&page, Category::UnusualWords), 0);
    assert_eq!(page.total_issues(), 12);
    assert!(!page.issues.has_internal_errors());

    let images = page.issues.get(Category::Images).unwrap();
    assert_eq!(images[1].snippet.as_deref(), Some(r#"<img src="logo.png" alt="">"#));

    let abbreviations = page.issues.get(Category::Abbreviations).unwrap();
    assert!(abbreviations[0].message.contains("'APR' missing title"));
    assert_eq!(
        abbreviations[1].message,
        "AAA: Found potential abbreviations that should use <abbr> tag: PDF, UK, API"
    );
}

#[test]
fn test_inaccessible_fixture_at_aa() {
    let page = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &ScanConfig::with_level(ConformanceLevel::AA),
    )
    .expect("scan should succeed");

    let keys: Vec<Category> = page.issues.categories().collect();
    assert_eq!(keys, Category::BASELINE.to_vec());
    assert_eq!(page.total_issues(), 6);
}

#[test]
fn test_scan_partial_fixture() {
    let page = scanner::scan_file(
        Path::new("tests/fixtures/partial.html"),
        &ScanConfig::default(),
    )
    .expect("scan should succeed");

    assert_eq!(page.total_issues(), 1);
    let headings = page.issues.get(Category::Headings).unwrap();
    assert!(headings[0].message.starts_with("Skipped heading level: <h4> follows <h2>"));
}

#[test]
fn test_scan_site_directory() {
    let summary = scanner::scan_directory(Path::new("tests/fixtures/site"), &ScanConfig::default())
        .expect("scan should succeed");

    // node_modules and non-HTML files are skipped
    let sources: Vec<&str> = summary.pages.iter().map(|p| p.source.as_str()).collect();
    assert_eq!(sources.len(), 2, "unexpected pages: {:?}", sources);
    assert!(sources[0].ends_with("help.htm"));
    assert!(sources[1].ends_with("index.html"));
    assert_eq!(summary.pages_with_issues(), 1);
    assert_eq!(summary.total_issues(), 1);
    assert!(summary.has_failures());
}

#[test]
fn test_scan_fixtures_directory() {
    let summary = scanner::scan_directory(Path::new("tests/fixtures"), &ScanConfig::default())
        .expect("scan should succeed");

    assert_eq!(summary.pages_scanned(), 5);
    assert_eq!(summary.pages_with_errors(), 0);
    assert!(summary.total_issues() >= 14);
}

#[test]
fn test_scan_temp_directory_with_exclusions() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("build")).unwrap();
    fs::create_dir_all(root.join("pages")).unwrap();

    fs::write(root.join(".git/page.html"), "<img src=a.png>").unwrap();
    fs::write(root.join("build/out.html"), "<img src=a.png>").unwrap();
    fs::write(root.join("pages/About.XHTML"), r#"<html lang="en"><p>About us</p></html>"#).unwrap();
    fs::write(root.join("style.css"), "p { color: #777; }").unwrap();

    let summary = scanner::scan_directory(root, &ScanConfig::default()).unwrap();
    assert_eq!(summary.pages_scanned(), 1);
    assert!(summary.pages[0].source.ends_with("About.XHTML"));
    assert!(!summary.has_failures());
}

#[test]
fn test_scan_directory_records_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.html"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
    fs::write(dir.path().join("good.html"), r#"<html lang="en"><p>Fine</p></html>"#).unwrap();

    let summary = scanner::scan_directory(dir.path(), &ScanConfig::default()).unwrap();
    assert_eq!(summary.pages_scanned(), 2);
    assert_eq!(summary.pages_with_errors(), 1);
    assert!(summary.pages[0].error.is_some());
    assert!(summary.pages[1].error.is_none());
}

#[test]
fn test_config_file_drives_scan() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("finaccai.toml");
    fs::write(
        &config_path,
        "level = \"aa\"\nextensions = [\"html\"]\nexclude_dirs = [\"drafts\"]\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("drafts")).unwrap();
    fs::write(dir.path().join("drafts/wip.html"), "<img src=a.png>").unwrap();
    fs::write(dir.path().join("index.html"), r#"<a href="/x">here</a>"#).unwrap();
    fs::write(dir.path().join("legacy.htm"), "<img src=a.png>").unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.level, ConformanceLevel::AA);

    let summary = scanner::scan_directory(dir.path(), &config).unwrap();
    assert_eq!(summary.pages_scanned(), 1);
    // Vague link text is only an AAA concern
    assert!(!summary.has_failures());
    assert_eq!(summary.pages[0].issues.category_count(), 4);
}

#[test]
fn test_link_context_scenario() {
    let report = run_checks(
        r##"<html lang="en"><body>
            <a href="/products">click here</a>
            <a href="/checkout">go</a>
            <a href="#top">up</a>
            <a href="/about">About our bank</a>
        </body></html>"##,
        ConformanceLevel::AAA,
    )
    .unwrap();

    let links = report.get(Category::LinkContext).unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(
        links[0].message,
        "AAA: Link text 'click here' needs context. Link purpose should be clear from text alone | href='/products'"
    );
}

#[test]
fn test_levels_produce_expected_keys() {
    let html = r#"<img src="a.png"><p>text</p>"#;

    let aa = run_checks(html, ConformanceLevel::AA).unwrap();
    assert_eq!(aa.category_count(), 4);
    assert!(!aa.contains(Category::LanguageAttributes));

    let aaa = run_checks(html, ConformanceLevel::AAA).unwrap();
    assert_eq!(aaa.category_count(), 9);
    assert_eq!(aaa.get(Category::Images), aa.get(Category::Images));
}

#[test]
fn test_checks_are_idempotent() {
    let html = fs::read_to_string("tests/fixtures/inaccessible.html").unwrap();
    let first = run_checks(&html, ConformanceLevel::AAA).unwrap();
    let second = run_checks(&html, ConformanceLevel::AAA).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fragment_at_aaa_can_be_clean() {
    let report = run_checks(
        r#"<a href="/privacy">Read our privacy policy</a>"#,
        ConformanceLevel::AAA,
    )
    .unwrap();
    assert_eq!(report.category_count(), 9);
    assert!(report.is_clean(), "{:?}", report);
}

#[test]
fn test_empty_input_produces_empty_lists() {
    let report = run_checks("", ConformanceLevel::AA).unwrap();
    assert_eq!(report.category_count(), 4);
    assert!(report.is_clean());
}

#[test]
fn test_json_report_for_fixture() {
    let summary = scanner::scan_directory(Path::new("tests/fixtures/site"), &ScanConfig::default())
        .expect("scan should succeed");
    let report = generate_report(&summary, OutputFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    assert_eq!(parsed["summary"]["pages_scanned"], 2);
    assert_eq!(parsed["summary"]["total_issues"], 1);
    let issues = parsed["pages"][1]["issues"].as_object().unwrap();
    let keys: Vec<&str> = issues.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 9);
    assert!(keys.contains(&"language_attributes"));
    assert_eq!(issues["images"].as_array().unwrap().len(), 1);
}

#[test]
fn test_html_report_for_fixture() {
    let page = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &ScanConfig::default(),
    )
    .unwrap();
    let report = generate_report(&page.into(), OutputFormat::Html).unwrap();

    assert!(report.starts_with("<!DOCTYPE html>"));
    assert!(report.contains("<h2>Loan Offers</h2>"));
    assert!(report.contains("Images missing alt text (2)"));
    assert!(!report.contains("<img src=\"hero.jpg\">"));
}
