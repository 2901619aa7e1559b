//! End-to-end report persistence: dispatch a manual-only query, write the
//! report, and reload it byte-faithfully.

use patrimonio::{dispatch, handlers, report, QueryType, Report, SourceRegistry};
use tempfile::TempDir;

#[tokio::test]
async fn dispatched_report_round_trips_through_disk() {
    let registry = SourceRegistry::new();
    let client = handlers::http_client();

    // Name queries touch only reference-only handlers, so no network I/O.
    let original = dispatch::run(&client, &registry, "José Conceição", QueryType::Nome)
        .await
        .unwrap();

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("relatorio_nome.json");
    let written = report::save(&original, Some(&path)).unwrap();

    let raw = std::fs::read_to_string(&written).unwrap();
    assert!(raw.contains("José Conceição"), "Unicode must be stored literally");
    assert!(raw.contains("Consulta manual necessária"));

    let reloaded: Report = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded.identificador, original.identificador);
    assert_eq!(reloaded.tipo, original.tipo);
    assert_eq!(reloaded.timestamp, original.timestamp);
    assert_eq!(reloaded.fontes.len(), original.fontes.len());
    for (name, value) in &original.fontes {
        assert_eq!(&reloaded.fontes[name], value, "source '{}' changed in round trip", name);
    }
    assert_eq!(reloaded.urls_referencias, original.urls_referencias);
}

#[tokio::test]
async fn default_output_filename_is_timestamped_and_writable() {
    let registry = SourceRegistry::new();
    let client = handlers::http_client();
    let relatorio = dispatch::run(&client, &registry, "12.345.678-9", QueryType::Rg)
        .await
        .unwrap();

    // Derive the default name explicitly and anchor it in a scratch
    // directory; mutating the process working directory would race with the
    // other tests in this binary.
    let tmp = TempDir::new().unwrap();
    let default_name = report::default_filename();
    let name = default_name.to_string_lossy();
    assert!(name.starts_with("relatorio_patrimonio_"));
    assert!(name.ends_with(".json"));

    let path = tmp.path().join(&default_name);
    let written = report::save(&relatorio, Some(&path)).unwrap();
    assert_eq!(written, path);
    assert!(written.exists());
}
