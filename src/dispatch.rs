//! Query dispatcher: maps a query type to its fixed, ordered handler
//! sequence and assembles the aggregate report.

use crate::error::LookupError;
use crate::handlers::manual::{self, SubjectKind};
use crate::handlers::{bcb, listings, receitaws};
use crate::registry::SourceRegistry;
use crate::report::Report;
use serde_json::Map;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Recognized query types, matching the `--tipo` CLI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum QueryType {
    /// Company tax ID (14 digits).
    Cnpj,
    /// Person tax ID (11 digits).
    Cpf,
    /// Free-text person name.
    Nome,
    /// State-issued ID document number.
    Rg,
    /// Vehicle plate.
    Placa,
}

impl QueryType {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Cnpj => "cnpj",
            QueryType::Cpf => "cpf",
            QueryType::Nome => "nome",
            QueryType::Rg => "rg",
            QueryType::Placa => "placa",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cnpj" => Ok(QueryType::Cnpj),
            "cpf" => Ok(QueryType::Cpf),
            "nome" => Ok(QueryType::Nome),
            "rg" => Ok(QueryType::Rg),
            "placa" => Ok(QueryType::Placa),
            other => Err(LookupError::InvalidQueryType(other.to_string())),
        }
    }
}

/// Run every handler applicable to `query_type` against `identifier`,
/// strictly in sequence, and assemble the aggregate report.
///
/// Per-source failures are contained inside each source result; the only
/// `Err` paths here are registry wiring bugs. Every dispatch ends with the
/// two constant reference listings regardless of query type.
pub async fn run(
    client: &reqwest::Client,
    registry: &SourceRegistry,
    identifier: &str,
    query_type: QueryType,
) -> Result<Report, LookupError> {
    info!("Iniciando busca completa para {}: {}", query_type, identifier);

    let mut fontes = Map::new();

    match query_type {
        QueryType::Cnpj => {
            info!("Consultando CNPJ via ReceitaWS...");
            fontes.insert(
                "receitaws".into(),
                receitaws::lookup_cnpj(client, registry, identifier).await?,
            );

            info!("Consultando Receita Federal oficial...");
            fontes.insert(
                "receita_federal".into(),
                manual::lookup_receita_federal(registry, identifier, SubjectKind::Company)?,
            );

            info!("Consultando valores a receber BCB...");
            fontes.insert(
                "bcb_valores".into(),
                bcb::lookup_amounts_receivable(client, registry, identifier).await?,
            );

            info!("Consultando Portal da Transparência...");
            fontes.insert(
                "transparencia".into(),
                manual::lookup_portal_transparencia(registry, identifier, SubjectKind::Company)?,
            );
        }
        QueryType::Cpf => {
            info!("Consultando Receita Federal...");
            fontes.insert(
                "receita_federal".into(),
                manual::lookup_receita_federal(registry, identifier, SubjectKind::Person)?,
            );

            info!("Consultando valores a receber BCB...");
            fontes.insert(
                "bcb_valores".into(),
                bcb::lookup_amounts_receivable(client, registry, identifier).await?,
            );

            info!("Consultando benefícios Caixa...");
            fontes.insert(
                "caixa_beneficios".into(),
                manual::lookup(registry, &manual::CAIXA_BENEFICIOS, identifier)?,
            );

            info!("Consultando auxílio emergencial...");
            fontes.insert(
                "auxilio_emergencial".into(),
                manual::lookup(registry, &manual::AUXILIO_EMERGENCIAL, identifier)?,
            );

            info!("Consultando Portal da Transparência...");
            fontes.insert(
                "transparencia".into(),
                manual::lookup_portal_transparencia(registry, identifier, SubjectKind::Person)?,
            );
        }
        QueryType::Nome => {
            info!("Consultando transparência SP...");
            fontes.insert(
                "sp_transparencia".into(),
                manual::lookup(registry, &manual::SP_TRANSPARENCIA, identifier)?,
            );

            info!("Consultando falecidos Brasil...");
            fontes.insert(
                "falecidos".into(),
                manual::lookup(registry, &manual::FALECIDOS_BRASIL, identifier)?,
            );

            info!("Consultando pessoa desaparecida...");
            fontes.insert(
                "pessoa_desaparecida".into(),
                manual::lookup(registry, &manual::PESSOA_DESAPARECIDA, identifier)?,
            );
        }
        QueryType::Rg => {
            info!("Consultando RG SP...");
            fontes.insert(
                "sp_policia_rg".into(),
                manual::lookup(registry, &manual::SP_POLICIA_RG, identifier)?,
            );
        }
        QueryType::Placa => {
            info!("Consultando SINESP...");
            fontes.insert(
                "sinesp".into(),
                manual::lookup(registry, &manual::SINESP_CIDADAO, identifier)?,
            );

            info!("Consultando DETRAN-PR...");
            fontes.insert(
                "detran_pr".into(),
                manual::lookup(registry, &manual::DETRAN_PR, identifier)?,
            );
        }
    }

    info!("Listando fontes de dados abertos...");
    fontes.insert("dados_abertos".into(), listings::open_data_portals(registry)?);

    info!("Listando ferramentas OSINT...");
    fontes.insert("ferramentas_osint".into(), listings::osint_tools(registry)?);

    Ok(Report::new(identifier, query_type, fontes, registry))
}
