use camino::Utf8PathBuf;
use get_cisa_vuln::catalog::{write_catalog, Catalog, ExportFormat, ExportTarget};
use serde_json::{json, Value};
use tempfile::TempDir;

fn sample_feed() -> Value {
    json!({
        "title": "CISA Catalog of Known Exploited Vulnerabilities",
        "catalogVersion": "2024.05.01",
        "dateReleased": "2024-05-01T15:00:27.3456Z",
        "count": 3,
        "vulnerabilities": [
            {
                "cveID": "CVE-2024-29988",
                "vendorProject": "Microsoft",
                "product": "SmartScreen Prompt",
                "knownRansomwareCampaignUse": "Unknown",
                "cwes": ["CWE-693"]
            },
            {
                "cveID": "CVE-2024-4671",
                "vendorProject": "Google",
                "product": "Chromium Visuals",
                "knownRansomwareCampaignUse": "Unknown",
                "cwes": []
            },
            {
                "cveID": "CVE-2023-7028",
                "vendorProject": "GitLab",
                "product": "GitLab CE/EE",
                "notes": "https://about.gitlab.com/releases/",
                "cwes": ["CWE-640"]
            }
        ]
    })
}

fn temp_path(temp_dir: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp_dir.path().join(name)).expect("Invalid UTF-8 in path")
}

#[test]
fn test_csv_export_rows_and_catalog_columns() {
    let temp_dir = TempDir::new().unwrap();
    let catalog: Catalog = serde_json::from_value(sample_feed()).unwrap();
    let target = ExportTarget::from_path(temp_path(&temp_dir, "kev.csv"));
    assert_eq!(target.format, ExportFormat::Csv);

    write_catalog(&catalog, &target).unwrap();

    let content = std::fs::read_to_string(&target.path).unwrap();
    assert_eq!(content.lines().count(), catalog.vulnerabilities.len() + 1);

    let mut reader = csv::Reader::from_path(&target.path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "cveID",
            "vendorProject",
            "product",
            "knownRansomwareCampaignUse",
            "cwes",
            "notes",
            "Catalog Version",
            "Catalog Date",
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);

    // Source order preserved
    assert_eq!(&rows[0][0], "CVE-2024-29988");
    assert_eq!(&rows[2][0], "CVE-2023-7028");

    for row in &rows {
        assert_eq!(&row[6], "2024.05.01");
        assert_eq!(&row[7], "2024-05-01T15:00:27.3456Z");
    }

    // Missing keys are blank, lists are JSON text
    assert_eq!(&rows[0][5], "");
    assert_eq!(&rows[2][3], "");
    assert_eq!(&rows[0][4], r#"["CWE-693"]"#);
    assert_eq!(&rows[1][4], "[]");
}

#[test]
fn test_csv_export_empty_catalog_writes_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let mut feed = sample_feed();
    feed["count"] = json!(0);
    feed["vulnerabilities"] = json!([]);
    let catalog: Catalog = serde_json::from_value(feed).unwrap();
    let target = ExportTarget::from_path(temp_path(&temp_dir, "empty.csv"));

    write_catalog(&catalog, &target).unwrap();

    let content = std::fs::read_to_string(&target.path).unwrap();
    assert_eq!(content, "Catalog Version,Catalog Date\n");
}

#[test]
fn test_json_export_is_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let mut feed = sample_feed();
    feed["feedNotice"] = json!("new metadata field");
    let catalog: Catalog = serde_json::from_value(feed.clone()).unwrap();
    let target = ExportTarget::from_path(temp_path(&temp_dir, "kev.json"));
    assert_eq!(target.format, ExportFormat::Json);

    write_catalog(&catalog, &target).unwrap();

    let content = std::fs::read_to_string(&target.path).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, feed);

    let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec![
            "title",
            "catalogVersion",
            "dateReleased",
            "count",
            "vulnerabilities",
            "feedNotice",
        ]
    );
    assert!(parsed["vulnerabilities"][0].get("Catalog Version").is_none());
}

#[test]
fn test_unknown_suffix_exports_csv() {
    let temp_dir = TempDir::new().unwrap();
    let catalog: Catalog = serde_json::from_value(sample_feed()).unwrap();
    let target = ExportTarget::from_path(temp_path(&temp_dir, "kev.txt"));

    assert_eq!(target.format, ExportFormat::Csv);
    assert_eq!(target.path, temp_path(&temp_dir, "kev.txt.csv"));

    write_catalog(&catalog, &target).unwrap();
    assert!(target.path.exists());
    assert!(!temp_path(&temp_dir, "kev.txt").exists());
}
