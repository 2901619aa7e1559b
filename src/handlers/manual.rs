//! Reference-only handlers for portals without a machine-readable API.
//!
//! These perform no network I/O: their job is to surface the correct portal
//! URL and the input context so a human operator can follow up. The uniform
//! ones are driven by a declarative table instead of near-identical
//! functions; the tax-authority and transparency-portal lookups carry a
//! person/company mode and get dedicated entry points.

use crate::error::LookupError;
use crate::identifier;
use crate::registry::SourceRegistry;
use serde_json::{json, Map, Value};

/// Status reported by every manual lookup (SINESP differs, see its entry).
pub const MANUAL_STATUS: &str = "Consulta manual necessária";

/// Whether a person or a company is being looked up; selects the portal URL
/// and labels for the two mode-aware sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Person,
    Company,
}

impl SubjectKind {
    fn label(self) -> &'static str {
        match self {
            SubjectKind::Person => "pessoa",
            SubjectKind::Company => "empresa",
        }
    }
}

/// Declarative description of one reference-only source.
pub struct ManualSource {
    /// Human-readable source name, reported as `fonte`.
    pub name: &'static str,
    /// JSON key under which the input is echoed back (`cpf`, `nome`, ...).
    pub input_key: &'static str,
    /// Whether the input is a numeric document that should be normalized
    /// before echoing, or free text passed through as-is.
    pub numeric_input: bool,
    /// `(result key, registry key)` pairs for the portal URL(s) to surface.
    pub urls: &'static [(&'static str, &'static str)],
    /// Status to report; almost always [`MANUAL_STATUS`].
    pub status: &'static str,
    /// Follow-up instruction for the operator.
    pub note: &'static str,
}

pub const CAIXA_BENEFICIOS: ManualSource = ManualSource {
    name: "Caixa Econômica Federal - Benefícios Sociais",
    input_key: "cpf",
    numeric_input: true,
    urls: &[
        ("url_programas", "caixa_programas"),
        ("url_beneficios", "caixa_beneficios"),
    ],
    status: MANUAL_STATUS,
    note: "Acessar os portais da Caixa para consulta manual",
};

pub const AUXILIO_EMERGENCIAL: ManualSource = ManualSource {
    name: "Auxílio Emergencial - Ministério da Cidadania",
    input_key: "cpf",
    numeric_input: true,
    urls: &[("url_consulta", "auxilio_emergencial")],
    status: MANUAL_STATUS,
    note: "Acessar o portal para consulta manual do auxílio",
};

pub const SP_POLICIA_RG: ManualSource = ManualSource {
    name: "Polícia Civil de São Paulo",
    input_key: "rg",
    numeric_input: false,
    urls: &[("url_consulta", "sp_policia_rg")],
    status: MANUAL_STATUS,
    note: "Acessar o portal da Polícia Civil de SP para consulta do RG",
};

pub const SP_TRANSPARENCIA: ManualSource = ManualSource {
    name: "Transparência São Paulo - Servidores",
    input_key: "nome",
    numeric_input: false,
    urls: &[("url_consulta", "sp_transparencia")],
    status: MANUAL_STATUS,
    note: "Acessar o portal para consulta de servidores públicos de SP",
};

pub const SINESP_CIDADAO: ManualSource = ManualSource {
    name: "SINESP Cidadão",
    input_key: "placa",
    numeric_input: false,
    urls: &[("url_info", "sinesp_cidadao")],
    status: "Aplicativo necessário",
    note: "Baixar o aplicativo SINESP Cidadão para consultas",
};

pub const FALECIDOS_BRASIL: ManualSource = ManualSource {
    name: "Falecidos no Brasil",
    input_key: "nome",
    numeric_input: false,
    urls: &[("url_consulta", "falecidos_brasil")],
    status: MANUAL_STATUS,
    note: "Acessar o site para consulta de registros de óbito",
};

pub const PESSOA_DESAPARECIDA: ManualSource = ManualSource {
    name: "Consulta Pessoa Desaparecida - Gov.br",
    input_key: "nome",
    numeric_input: false,
    urls: &[("url_consulta", "pessoa_desaparecida")],
    status: MANUAL_STATUS,
    note: "Acessar o portal gov.br para consulta de pessoas desaparecidas",
};

pub const DETRAN_PR: ManualSource = ManualSource {
    name: "DETRAN Paraná",
    input_key: "info",
    numeric_input: false,
    urls: &[("url_consulta", "detran_pr")],
    status: MANUAL_STATUS,
    note: "Acessar o portal do DETRAN-PR para consultas veiculares",
};

pub const PROCON_PR: ManualSource = ManualSource {
    name: "PROCON Paraná",
    input_key: "empresa",
    numeric_input: false,
    urls: &[("url_consulta", "procon_pr")],
    status: MANUAL_STATUS,
    note: "Acessar o portal do PROCON-PR para consultas sobre reclamações",
};

/// Produce the source result for one table-driven manual lookup.
pub fn lookup(
    registry: &SourceRegistry,
    source: &ManualSource,
    input: &str,
) -> Result<Value, LookupError> {
    let echoed = if source.numeric_input {
        identifier::normalize(input)
    } else {
        input.to_string()
    };

    let mut map = Map::new();
    map.insert("fonte".into(), json!(source.name));
    map.insert(source.input_key.into(), json!(echoed));
    map.insert("status".into(), json!(source.status));
    for (result_key, registry_key) in source.urls {
        map.insert((*result_key).into(), json!(registry.get(registry_key)?));
    }
    map.insert("observacao".into(), json!(source.note));
    Ok(Value::Object(map))
}

/// Tax-authority (Receita Federal) lookup: official portals only, selected
/// by subject kind.
pub fn lookup_receita_federal(
    registry: &SourceRegistry,
    document: &str,
    kind: SubjectKind,
) -> Result<Value, LookupError> {
    let url = match kind {
        SubjectKind::Company => registry.get("receita_cnpj_oficial")?,
        SubjectKind::Person => registry.get("receita_cpf")?,
    };
    Ok(json!({
        "fonte": "Receita Federal do Brasil",
        "documento": identifier::normalize(document),
        "tipo": match kind {
            SubjectKind::Company => "cnpj",
            SubjectKind::Person => "cpf",
        },
        "status": MANUAL_STATUS,
        "url_consulta": url,
        "observacao": "Acessar o portal da Receita Federal para consulta oficial",
    }))
}

/// Federal transparency-portal lookup. Free text: names are passed through
/// unnormalized, documents keep their raw form too since the portal's search
/// accepts both.
pub fn lookup_portal_transparencia(
    registry: &SourceRegistry,
    term: &str,
    kind: SubjectKind,
) -> Result<Value, LookupError> {
    Ok(json!({
        "fonte": "Portal da Transparência",
        "termo_busca": term,
        "tipo": kind.label(),
        "status": MANUAL_STATUS,
        "url_portal": registry.get("portal_transparencia")?,
        "observacao": "Acessar manualmente o portal para consultas específicas",
    }))
}
