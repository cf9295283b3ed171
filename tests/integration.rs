use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn gallery_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gallery"))
}

/// 30 articles over three categories. Similarity is unique per article so
/// the default order is fully determined; ids are "1".."30".
fn sample_articles() -> serde_json::Value {
    let titles = ["Tech", "Sports", "World"];
    let articles: Vec<serde_json::Value> = (1..=30)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": titles[i % 3],
                "published_date": format!("2023-03-{:02}T08:00:00Z", i),
                "Similarity": (i * 37 % 101) as f64 + 0.5,
                "description": format!("Article number {} ", i).repeat(12),
                "urlToImage": format!("https://img.example/{}.jpg", i),
                "url": format!("https://news.example/articles/{}", i),
            })
        })
        .collect();
    serde_json::Value::Array(articles)
}

fn setup_test_env() -> (TempDir, PathBuf) {
    setup_with_data(&serde_json::to_string_pretty(&sample_articles()).unwrap())
}

fn setup_with_data(data: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("articles.json"), data).unwrap();

    let config_content = format!(
        r#"[data]
path = "{}/data/articles.json"

[view]
page_size = 12
excerpt_length = 100

[server]
bind = "127.0.0.1:7331"
"#,
        root.display()
    );

    let config_path = config_dir.join("gallery.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_gallery(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = gallery_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run gallery binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn list_json(config_path: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["list", "--json"];
    full.extend_from_slice(args);
    let (stdout, stderr, success) = run_gallery(config_path, &full);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("bad JSON ({}): {}", e, stdout))
}

fn card_ids(view: &serde_json::Value) -> Vec<String> {
    view["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

fn card_scores(view: &serde_json::Value) -> Vec<f64> {
    view["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["similarity"].as_str().unwrap().parse().unwrap())
        .collect()
}

#[test]
fn test_list_default_page() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_gallery(&config_path, &["list"]);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Home: 30 articles, sorted by Similarity:desc"));
    assert!(stdout.contains("Page 1 of 3"));
    assert!(stdout.starts_with("Home"));
}

#[test]
fn test_list_offset_past_end_reports_last_page() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_gallery(&config_path, &["list", "--offset", "99"]);
    assert!(success);
    assert!(stdout.contains("No articles."));
    assert!(stdout.contains("Page 3 of 3"), "stdout: {}", stdout);
}

#[test]
fn test_list_tolerates_null_text_fields() {
    let data = r#"[
        {"id": 1, "title": "Tech", "published_date": null, "Similarity": 50,
         "description": null, "urlToImage": null, "url": null}
    ]"#;
    let (_tmp, config_path) = setup_with_data(data);

    let view = list_json(&config_path, &[]);
    assert_eq!(card_ids(&view), vec!["1"]);
    assert_eq!(view["cards"][0]["excerpt"], "");
}

#[test]
fn test_list_default_order_is_similarity_desc() {
    let (_tmp, config_path) = setup_test_env();

    let view = list_json(&config_path, &[]);
    let scores = card_scores(&view);
    assert_eq!(scores.len(), 12);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);
    assert_eq!(view["page"]["total"], 30);
}

#[test]
fn test_list_category_filter() {
    let (_tmp, config_path) = setup_test_env();

    let view = list_json(&config_path, &["--category", "Tech"]);
    let cards = view["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 10);
    assert!(cards.iter().all(|c| c["title"] == "Tech"));
    assert_eq!(view["category_label"], "Tech");
}

#[test]
fn test_list_unknown_category_is_empty() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_gallery(&config_path, &["list", "--category", "Politics"]);
    assert!(success);
    assert!(stdout.contains("No articles."));
}

#[test]
fn test_list_sort_by_date() {
    let (_tmp, config_path) = setup_test_env();

    let view = list_json(&config_path, &["--sort", "published_date:asc"]);
    let ids = card_ids(&view);
    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_list_pages_cover_everything_once() {
    let (_tmp, config_path) = setup_test_env();

    let mut seen = Vec::new();
    for offset in ["0", "12", "24", "36"] {
        let view = list_json(
            &config_path,
            &["--sort", "title:asc", "--offset", offset, "--page-size", "12"],
        );
        seen.extend(card_ids(&view));
    }
    assert_eq!(seen.len(), 30);
    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 30, "pages overlapped: {:?}", seen);
}

#[test]
fn test_list_page_size_48() {
    let (_tmp, config_path) = setup_test_env();

    let view = list_json(&config_path, &["--page-size", "48"]);
    assert_eq!(card_ids(&view).len(), 30);
    assert_eq!(view["page"]["page_count"], 1);
}

#[test]
fn test_list_rejects_unknown_sort_field() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_gallery(&config_path, &["list", "--sort", "author:asc"]);
    assert!(!success);
    assert!(stderr.contains("Unknown sort field"), "stderr: {}", stderr);
}

#[test]
fn test_list_rejects_bad_page_size() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_gallery(&config_path, &["list", "--page-size", "10"]);
    assert!(!success);
    assert!(stderr.contains("must be one of 12, 24, 48"), "stderr: {}", stderr);
}

#[test]
fn test_excerpt_is_truncated() {
    let (_tmp, config_path) = setup_test_env();

    let view = list_json(&config_path, &[]);
    let excerpt = view["cards"][0]["excerpt"].as_str().unwrap();
    assert_eq!(excerpt.chars().count(), 103);
    assert!(excerpt.ends_with("..."));
}

#[test]
fn test_categories() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_gallery(&config_path, &["categories"]);
    assert!(success);
    for name in ["Tech", "Sports", "World"] {
        assert!(stdout.contains(name), "missing {} in: {}", name, stdout);
    }
    // First-seen order: id 1 is Sports, id 2 is World, id 3 is Tech.
    let sports = stdout.find("Sports").unwrap();
    let world = stdout.find("World").unwrap();
    let tech = stdout.find("Tech").unwrap();
    assert!(sports < world && world < tech);
}

#[test]
fn test_get_article() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_gallery(&config_path, &["get", "7"]);
    assert!(success, "get failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("--- Article ---"));
    assert!(stdout.contains("id:           7"));
    assert!(stdout.contains("url:          https://news.example/articles/7"));
    assert!(stdout.contains("--- Description ---"));
}

#[test]
fn test_get_missing_article_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_gallery(&config_path, &["get", "999"]);
    assert!(!success);
    assert!(stderr.contains("article not found: 999"), "stderr: {}", stderr);
}

#[test]
fn test_open_prints_url() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_gallery(&config_path, &["open", "3"]);
    assert!(success);
    assert_eq!(stdout.trim(), "https://news.example/articles/3");
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("nope.toml");

    let (_, stderr, success) = run_gallery(&config_path, &["list"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_data_fails() {
    let (_tmp, config_path) = setup_with_data("{ not json");

    let (_, stderr, success) = run_gallery(&config_path, &["list"]);
    assert!(!success);
    assert!(stderr.contains("Invalid data file"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_similarity_still_renders() {
    let data = r#"[
        {"id": 1, "title": "Tech", "published_date": "2023-01-01", "Similarity": "unknown",
         "description": "d", "urlToImage": "i", "url": "u"},
        {"id": 2, "title": "Tech", "published_date": "2023-01-02", "Similarity": 10,
         "description": "d", "urlToImage": "i", "url": "u"}
    ]"#;
    let (_tmp, config_path) = setup_with_data(data);

    let view = list_json(&config_path, &[]);
    assert_eq!(card_ids(&view), vec!["2", "1"]);
    assert_eq!(view["cards"][1]["severity"], "danger");
    assert_eq!(view["cards"][1]["similarity"], "-");
}
