//! "Valores a receber" lookup against the Banco Central public API.
//!
//! Unlike ReceitaWS, this endpoint's body has no stable schema worth mapping;
//! a successful response is passed through verbatim under `valores`.

use crate::error::LookupError;
use crate::identifier;
use crate::registry::SourceRegistry;
use serde_json::{json, Value};
use tracing::debug;

/// Cutoff date the API expects as the second path segment; a date this far
/// back covers every pending amount on record.
const CUTOFF_DATE: &str = "1960-12-01";

/// Look up amounts receivable for a CPF or CNPJ.
///
/// `200` + JSON body yields the body verbatim under `valores`; `200` with a
/// non-JSON body yields a descriptive `status` rather than an error; any
/// other status yields an `erro` record. Both the attempted API URL and the
/// human-facing portal URL are always included.
pub async fn lookup_amounts_receivable(
    client: &reqwest::Client,
    registry: &SourceRegistry,
    document: &str,
) -> Result<Value, LookupError> {
    let digits = identifier::normalize(document);
    let portal = registry.get("bcb_valores")?.to_string();
    let url = format!("{}{}/{}", registry.get("bcb_api")?, digits, CUTOFF_DATE);
    debug!("consulting BCB valores a receber: {}", url);

    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            return Ok(json!({
                "erro": format!("Erro na requisição: {}", e),
                "url_fonte": url,
                "url_portal": portal,
            }));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Ok(json!({
            "erro": format!("Status HTTP: {}", status.as_u16()),
            "url_fonte": url,
            "url_portal": portal,
        }));
    }

    match response.json::<Value>().await {
        Ok(data) => Ok(json!({
            "fonte": "Banco Central - Valores a Receber",
            "documento": digits,
            "valores": data,
            "url_fonte": url,
            "url_portal": portal,
        })),
        Err(_) => Ok(json!({
            "fonte": "Banco Central - Valores a Receber",
            "documento": digits,
            "status": "Resposta recebida mas não é JSON válido",
            "url_fonte": url,
            "url_portal": portal,
        })),
    }
}
