//! Company-registry lookup via the public ReceitaWS API.
//!
//! The only handler that maps an upstream response into a structured record:
//! `GET <receitaws_api><cnpj>` returns company identification, legal/trade
//! names, status, registered capital, address, activity codes and partners.

use crate::error::LookupError;
use crate::identifier;
use crate::registry::SourceRegistry;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// Fields of interest from the ReceitaWS response body. Everything is
/// optional: the API omits fields freely and error bodies carry only
/// `status`/`message`.
#[derive(Debug, Deserialize)]
struct ReceitaWsBody {
    status: Option<String>,
    message: Option<String>,
    cnpj: Option<String>,
    nome: Option<String>,
    fantasia: Option<String>,
    situacao: Option<String>,
    capital_social: Option<String>,
    logradouro: Option<String>,
    numero: Option<String>,
    bairro: Option<String>,
    municipio: Option<String>,
    uf: Option<String>,
    cep: Option<String>,
    #[serde(default)]
    atividade_principal: Value,
    #[serde(default)]
    atividades_secundarias: Value,
    #[serde(default)]
    qsa: Value,
}

/// Look up a company by CNPJ.
///
/// Identifiers whose digit count is not 14 are rejected locally with an
/// `erro` result and no network call. All upstream failures (non-200, body
/// status other than `"OK"`, transport errors, non-JSON bodies) are contained
/// as `erro` results carrying the attempted URL.
pub async fn lookup_cnpj(
    client: &reqwest::Client,
    registry: &SourceRegistry,
    cnpj: &str,
) -> Result<Value, LookupError> {
    let digits = identifier::normalize(cnpj);
    let base = registry.get("receitaws_api")?;

    if digits.len() != 14 {
        debug!("rejecting CNPJ with {} digits (expected 14)", digits.len());
        return Ok(json!({
            "erro": "CNPJ deve ter 14 dígitos",
            "url_fonte": base,
        }));
    }

    let url = format!("{}{}", base, digits);
    debug!("consulting ReceitaWS: {}", url);

    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            return Ok(json!({
                "erro": format!("Erro na requisição: {}", e),
                "url_fonte": url,
            }));
        }
    };

    let status = response.status();
    let body: ReceitaWsBody = match response.json().await {
        Ok(b) => b,
        Err(e) => {
            return Ok(json!({
                "erro": format!("Erro na requisição: {}", e),
                "url_fonte": url,
            }));
        }
    };

    if status.is_success() && body.status.as_deref() == Some("OK") {
        Ok(json!({
            "fonte": "ReceitaWS",
            "cnpj": body.cnpj,
            "razao_social": body.nome,
            "nome_fantasia": body.fantasia,
            "situacao": body.situacao,
            "capital_social": body.capital_social,
            "endereco": {
                "logradouro": body.logradouro,
                "numero": body.numero,
                "bairro": body.bairro,
                "municipio": body.municipio,
                "uf": body.uf,
                "cep": body.cep,
            },
            "atividade_principal": default_to_list(body.atividade_principal),
            "atividades_secundarias": default_to_list(body.atividades_secundarias),
            "socios": default_to_list(body.qsa),
            "url_fonte": url,
        }))
    } else {
        Ok(json!({
            "erro": body.message.unwrap_or_else(|| "Erro na consulta".to_string()),
            "url_fonte": url,
        }))
    }
}

/// The API encodes "no entries" as an absent field; report it as an empty
/// list so consumers always see an array.
fn default_to_list(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(vec![]),
        other => other,
    }
}
