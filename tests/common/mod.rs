#![allow(dead_code)]

use patrimonio::SourceRegistry;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Default registry with the two live API endpoints redirected to test URLs.
/// Manual-lookup sources keep their real portal URLs (never contacted).
pub fn registry_with_live_endpoints(receitaws_base: &str, bcb_base: &str) -> SourceRegistry {
    SourceRegistry::from_entries(SourceRegistry::new().iter().map(|(key, url)| {
        let url = match key {
            "receitaws_api" => receitaws_base,
            "bcb_api" => bcb_base,
            _ => url,
        };
        (key.to_string(), url.to_string())
    }))
}

/// Registry whose every URL points at `base`, for asserting that a code path
/// performs no HTTP calls at all (mount an `expect(0)` mock at `base`).
pub fn registry_all_pointing_at(base: &str) -> SourceRegistry {
    SourceRegistry::from_entries(
        SourceRegistry::new()
            .iter()
            .map(|(key, _)| (key.to_string(), format!("{}/{}", base, key))),
    )
}

/// Successful ReceitaWS response body for the given CNPJ digits.
pub fn receitaws_ok_body(cnpj: &str) -> Value {
    json!({
        "status": "OK",
        "cnpj": cnpj,
        "nome": "EMPRESA EXEMPLO LTDA",
        "fantasia": "Exemplo",
        "situacao": "ATIVA",
        "capital_social": "100000.00",
        "logradouro": "RUA DAS LARANJEIRAS",
        "numero": "100",
        "bairro": "CENTRO",
        "municipio": "SÃO PAULO",
        "uf": "SP",
        "cep": "01000-000",
        "atividade_principal": [{"code": "62.01-5-01", "text": "Desenvolvimento de programas"}],
        "atividades_secundarias": [],
        "qsa": [{"nome": "JOSÉ DA SILVA", "qual": "49-Sócio-Administrador"}]
    })
}

/// Mock a ReceitaWS lookup for `digits` responding with `template`.
pub async fn mock_receitaws(server: &MockServer, digits: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/cnpj/{}", digits)))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mock a BCB valores-a-receber lookup for `digits` responding with `template`.
pub async fn mock_bcb(server: &MockServer, digits: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/valoresAReceber/{}/1960-12-01", digits)))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Assert that a source result carries at least one way to trace its origin:
/// a direct URL key or a nested catalog of entries with `url` fields.
pub fn assert_traceable(name: &str, result: &Value) {
    let direct = ["url_fonte", "url_portal", "url_consulta", "url_info", "url_programas"]
        .iter()
        .any(|key| result.get(*key).and_then(Value::as_str).is_some());
    let nested = ["fontes_disponiveis", "ferramentas_disponiveis"].iter().any(|key| {
        result
            .get(*key)
            .and_then(Value::as_object)
            .map(|entries| {
                !entries.is_empty()
                    && entries
                        .values()
                        .all(|e| e.get("url").and_then(Value::as_str).is_some())
            })
            .unwrap_or(false)
    });
    assert!(
        direct || nested,
        "source result '{}' has no reference URL: {}",
        name,
        result
    );
}
