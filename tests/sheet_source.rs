mod common;

use api_citas_excel::config::SourceConfig;
use api_citas_excel::error::PipelineError;
use api_citas_excel::excel::SheetSource;
use common::{XLSX_CONTENT_TYPE, citas_workbook, numbered_workbook};
use serde_json::json;

fn source(url: String) -> SheetSource {
    SheetSource::new(&SourceConfig { excel_url: url })
}

#[actix_web::test]
async fn test_record_count_matches_data_rows() {
    for rows in [0, 1, 7, 40] {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/sheet.xlsx")
            .with_status(200)
            .with_header("content-type", XLSX_CONTENT_TYPE)
            .with_body(numbered_workbook(rows).unwrap())
            .create_async()
            .await;

        let records = source(format!("{}/sheet.xlsx", server.url()))
            .load()
            .await
            .unwrap();

        assert_eq!(records.len(), rows as usize);
        for (i, record) in records.iter().enumerate() {
            let keys: Vec<&str> = record.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["Nombre", "Turno"]);
            assert_eq!(record["Turno"], json!(i + 1));
        }
    }
}

#[actix_web::test]
async fn test_blank_rows_do_not_count() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sheet.xlsx")
        .with_status(200)
        .with_body(citas_workbook().unwrap())
        .create_async()
        .await;

    let records = source(format!("{}/sheet.xlsx", server.url()))
        .load()
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["Nombre"], json!("Luis"));
}

#[actix_web::test]
async fn test_failures_keep_their_kind() {
    let err = source("http://127.0.0.1:1/sheet.xlsx".to_string())
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Network(_)));

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sheet.xlsx")
        .with_status(200)
        .with_body("not a spreadsheet")
        .create_async()
        .await;

    let err = source(format!("{}/sheet.xlsx", server.url()))
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Parse(_)));
}
