//! Constant reference listings appended to every report.
//!
//! Not lookups against the identifier: these enumerate open-data catalogs and
//! third-party OSINT tooling for operator convenience.

use crate::error::LookupError;
use crate::registry::SourceRegistry;
use serde_json::{json, Map, Value};

struct CatalogEntry {
    key: &'static str,
    registry_key: &'static str,
    name: &'static str,
    description: &'static str,
}

const OPEN_DATA_PORTALS: &[CatalogEntry] = &[
    CatalogEntry {
        key: "dados_gov",
        registry_key: "dados_gov",
        name: "Dados.gov.br",
        description: "Portal oficial de dados abertos do governo federal",
    },
    CatalogEntry {
        key: "brasil_io",
        registry_key: "brasil_io",
        name: "Brasil.io",
        description: "Datasets organizados sobre o Brasil",
    },
    CatalogEntry {
        key: "ibict_dados",
        registry_key: "ibict_dados",
        name: "IBICT Dados",
        description: "Instituto Brasileiro de Informação em Ciência e Tecnologia",
    },
    CatalogEntry {
        key: "bcb_dados",
        registry_key: "bcb_dados",
        name: "BCB Dados Abertos",
        description: "Dados abertos do Banco Central do Brasil",
    },
    CatalogEntry {
        key: "turismo_dados",
        registry_key: "turismo_dados",
        name: "Dados Turismo",
        description: "Dados do Ministério do Turismo",
    },
    CatalogEntry {
        key: "mj_dados",
        registry_key: "mj_dados",
        name: "Dados MJ",
        description: "Dados do Ministério da Justiça",
    },
    CatalogEntry {
        key: "sc_dados",
        registry_key: "sc_dados",
        name: "Dados SC",
        description: "Dados abertos do estado de Santa Catarina",
    },
];

const OSINT_TOOLS: &[CatalogEntry] = &[
    CatalogEntry {
        key: "scan_user",
        registry_key: "scan_user_repo",
        name: "Scan User",
        description: "Ferramenta para scan de usuários",
    },
    CatalogEntry {
        key: "osint_brasil",
        registry_key: "osint_brasil_repo",
        name: "OSINT Kit Brasil",
        description: "Kit de ferramentas OSINT focado no Brasil",
    },
    CatalogEntry {
        key: "omnisci_demo",
        registry_key: "omnisci_demo",
        name: "OmniSci Tweet Map",
        description: "Demo de visualização de dados de tweets",
    },
];

fn catalog(
    registry: &SourceRegistry,
    entries: &[CatalogEntry],
) -> Result<Value, LookupError> {
    let mut map = Map::new();
    for entry in entries {
        map.insert(
            entry.key.to_string(),
            json!({
                "nome": entry.name,
                "url": registry.get(entry.registry_key)?,
                "descricao": entry.description,
            }),
        );
    }
    Ok(Value::Object(map))
}

/// Enumerate the known open-data portals.
pub fn open_data_portals(registry: &SourceRegistry) -> Result<Value, LookupError> {
    let portals = catalog(registry, OPEN_DATA_PORTALS)?;
    let total = portals.as_object().map(|m| m.len()).unwrap_or(0);
    Ok(json!({
        "fonte": "Repositórios de Dados Abertos",
        "fontes_disponiveis": portals,
        "total_fontes": total,
    }))
}

/// Enumerate known third-party OSINT tools.
pub fn osint_tools(registry: &SourceRegistry) -> Result<Value, LookupError> {
    let tools = catalog(registry, OSINT_TOOLS)?;
    let total = tools.as_object().map(|m| m.len()).unwrap_or(0);
    Ok(json!({
        "fonte": "Ferramentas OSINT",
        "ferramentas_disponiveis": tools,
        "total_ferramentas": total,
    }))
}
