use clap::Parser;
use httpmock::prelude::*;
use httpmock::Method::HEAD;
use tempfile::TempDir;
use wcag_audit_stats::{AuditReportPipeline, CliConfig, LocalStorage, ReportEngine, ReportError};

const AUDIT_CSV: &str = "\
id;organisatie;1.1.1;1.4.3;2.4.7;x;onderbouwing;x;x;x;x;website
101;Gemeente Utrecht;0;1;0;;onderbouwing toereikend;;;;;https://www.utrecht.nl
102;Provincie Zeeland;0;0;1;;onderbouwing toereikend;;;;;https://www.zeeland.nl
103;Waterschap Rivierenland;0;0;0;;onderbouwing ontoereikend;;;;;https://www.wsrl.nl
";

fn cli_config(args: &[&str]) -> CliConfig {
    let mut argv = vec!["wcag-audit-stats"];
    argv.extend_from_slice(args);
    CliConfig::parse_from(argv)
}

fn engine_for(config: CliConfig) -> ReportEngine<AuditReportPipeline<LocalStorage, CliConfig>> {
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = AuditReportPipeline::new(storage, config).unwrap();
    ReportEngine::new(pipeline)
}

#[tokio::test]
async fn test_end_to_end_report_from_csv_url() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let csv_mock = server.mock(|when, then| {
        when.method(GET).path("/audits.csv");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(AUDIT_CSV);
    });

    let csv_url = server.url("/audits.csv");
    let config = cli_config(&[
        "--csv-url",
        &csv_url,
        "--output-path",
        &output_path,
        "--criteria",
        "1.1.1,1.4.3,2.4.7",
        "--no-annotate",
    ]);

    let result = engine_for(config).run().await;

    csv_mock.assert();
    let report_path = result.unwrap();
    assert!(report_path.ends_with("report.html"));

    let html = std::fs::read_to_string(temp_dir.path().join("report.html")).unwrap();
    assert!(html.contains("Gebaseerd op 2 gemeten audits"));
    assert!(html.contains("Gemeente Utrecht"));
    assert!(html.contains("Provincie Zeeland"));
    assert!(!html.contains("Waterschap Rivierenland"));
    assert!(html.contains(&format!(r#"<a href="{}" download>"#, csv_url)));

    // 1.1.1 fails twice and must be listed before 1.4.3 and 2.4.7.
    let first = html.find("sc-1-1-1-label").unwrap();
    let second = html.find("sc-1-4-3-label").unwrap();
    assert!(first < second);
    assert!(html.contains("100,0%"));
    assert!(html.contains("50,0%"));

    let summary: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("summary.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["qualifying_rows"], 2);
    assert_eq!(summary["adequacy_filter_applied"], true);
    assert_eq!(summary["criteria"][0]["id"], "1.1.1");
    assert_eq!(summary["criteria"][0]["failures"], 2);
    assert_eq!(summary["criteria"][1]["failures"], 1);
}

#[tokio::test]
async fn test_without_adequacy_filter_counts_every_audit() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/audits.csv");
        then.status(200).body(AUDIT_CSV);
    });

    let csv_url = server.url("/audits.csv");
    let config = cli_config(&[
        "--csv-url",
        &csv_url,
        "--output-path",
        &output_path,
        "--criteria",
        "1.1.1,2.4.7",
        "--no-adequacy-filter",
        "--no-annotate",
    ]);

    engine_for(config).run().await.unwrap();

    let html = std::fs::read_to_string(temp_dir.path().join("report.html")).unwrap();
    assert!(html.contains("Gebaseerd op 3 gemeten audits"));
    assert!(html.contains("Waterschap Rivierenland"));

    let summary: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("summary.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["adequacy_filter_applied"], false);
    assert_eq!(summary["criteria"][0]["failures"], 3);
}

#[tokio::test]
async fn test_csv_discovered_from_statistics_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/statistieken");
        then.status(200).header("Content-Type", "text/html").body(
            r#"<html><body><a href="/docs/overzicht.pdf">PDF</a>
<a href="/export/audits.csv" download>Download CSV</a></body></html>"#,
        );
    });
    let csv_mock = server.mock(|when, then| {
        when.method(GET).path("/export/audits.csv");
        then.status(200).body(AUDIT_CSV);
    });

    let page_url = server.url("/statistieken");
    let config = cli_config(&[
        "--page-url",
        &page_url,
        "--output-path",
        &output_path,
        "--criteria",
        "1.1.1",
        "--no-annotate",
    ]);

    engine_for(config).run().await.unwrap();

    page_mock.assert();
    csv_mock.assert();

    let summary: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("summary.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["source"], server.url("/export/audits.csv"));
}

#[tokio::test]
async fn test_page_without_csv_link_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/statistieken");
        then.status(200).body("<p>Geen export beschikbaar</p>");
    });

    let page_url = server.url("/statistieken");
    let config = cli_config(&["--page-url", &page_url, "--output-path", &output_path]);

    let err = engine_for(config).run().await.unwrap_err();
    assert!(matches!(err, ReportError::CsvLinkNotFound { .. }));
    assert!(!temp_dir.path().join("report.html").exists());
}

#[tokio::test]
async fn test_server_error_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let csv_mock = server.mock(|when, then| {
        when.method(GET).path("/audits.csv");
        then.status(500).body("Internal Server Error");
    });

    let csv_url = server.url("/audits.csv");
    let config = cli_config(&["--csv-url", &csv_url, "--output-path", &output_path]);

    let err = engine_for(config).run().await.unwrap_err();

    csv_mock.assert();
    assert!(matches!(err, ReportError::Network(_)));
    assert!(!temp_dir.path().join("report.html").exists());
    assert!(!temp_dir.path().join("summary.json").exists());
}

#[tokio::test]
async fn test_unbalanced_quotes_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/audits.csv");
        then.status(200)
            .body("id;org;1.1.1\n101;\"Gemeente Utrecht;0\n");
    });

    let csv_url = server.url("/audits.csv");
    let config = cli_config(&["--csv-url", &csv_url, "--output-path", &output_path]);

    let err = engine_for(config).run().await.unwrap_err();
    assert!(matches!(err, ReportError::UnbalancedQuotes { quotes: 1 }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_local_file_with_wcag22_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let csv_path = temp_dir.path().join("audits.csv");
    std::fs::write(
        &csv_path,
        "id;org;2.4.11;x;x;x;onderbouwing;x;x;x;x;website\n\
         201;Gemeente Delft;0;;;;onderbouwing toereikend;;;;;https://www.delft.nl\n",
    )
    .unwrap();

    let config = cli_config(&[
        "--csv-file",
        csv_path.to_str().unwrap(),
        "--output-path",
        output_path.to_str().unwrap(),
        "--wcag",
        "2.2",
        "--criteria",
        "2.4.11,4.1.1",
        "--no-annotate",
    ]);

    engine_for(config).run().await.unwrap();

    let html = std::fs::read_to_string(output_path.join("report.html")).unwrap();
    assert!(html.contains("Gemeente Delft"));
    assert!(html.contains("WCAG 2.2"));

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_path.join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["catalog_version"], "2.2");
    assert_eq!(summary["criteria"][0]["id"], "2.4.11");
    assert_eq!(summary["criteria"][1]["missing_column"], true);
    assert!(summary["criteria"][1]["title_nl"].is_null());
}

#[tokio::test]
async fn test_download_link_gets_size_label() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/audits.csv");
        then.status(200).body(AUDIT_CSV);
    });
    let head_mock = server.mock(|when, then| {
        when.method(HEAD).path("/audits.csv");
        then.status(200).header("Content-Length", "1234567");
    });

    let csv_url = server.url("/audits.csv");
    let config = cli_config(&[
        "--csv-url",
        &csv_url,
        "--output-path",
        &output_path,
        "--criteria",
        "1.1.1",
    ]);

    engine_for(config).run().await.unwrap();

    head_mock.assert();
    let html = std::fs::read_to_string(temp_dir.path().join("report.html")).unwrap();
    assert!(html.contains(r#"data-size="1,2 megabyte""#));
    assert!(html.contains("Gemeente Utrecht"));
}

#[tokio::test]
async fn test_report_is_written_when_size_probe_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/audits.csv");
        then.status(200).body(AUDIT_CSV);
    });
    let head_mock = server.mock(|when, then| {
        when.method(HEAD).path("/audits.csv");
        then.status(404);
    });

    let csv_url = server.url("/audits.csv");
    let config = cli_config(&[
        "--csv-url",
        &csv_url,
        "--output-path",
        &output_path,
        "--criteria",
        "1.1.1",
    ]);

    engine_for(config).run().await.unwrap();

    head_mock.assert();
    let html = std::fs::read_to_string(temp_dir.path().join("report.html")).unwrap();
    assert!(html.contains(&format!(r#"<a href="{}" download>"#, csv_url)));
    assert!(!html.contains("data-size"));
    assert!(temp_dir.path().join("summary.json").exists());
}
