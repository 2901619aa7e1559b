//! Static registry of public data sources and portals.
//!
//! The registry is built once at startup and never mutated afterwards; if a
//! portal moves, the table is updated and the tool redeployed. Entries keep
//! their declaration order so `--listar-fontes` and the report's reference
//! section list sources the same way every run.

use crate::error::LookupError;
use serde_json::{Map, Value};

/// Default source table: stable key → portal/API base URL.
///
/// Keys ending in `_api` are machine endpoints used by live handlers; the
/// rest are human-facing portals surfaced in manual-lookup results.
const DEFAULT_SOURCES: &[(&str, &str)] = &[
    ("caixa_programas", "https://www.caixa.gov.br/programas-sociais/Paginas/default.aspx"),
    ("caixa_beneficios", "https://www.beneficiossociais.caixa.gov.br/consulta/beneficio/04.01.00-00_00.asp"),
    ("auxilio_emergencial", "https://consultaauxilio.cidadania.gov.br/consulta/#/"),
    ("receita_cnpj", "http://www.receita.fazenda.gov.br/PessoaJuridica/CNPJ/cnpjreva/Cnpjreva_Solicitacao.asp"),
    ("receitaws_api", "https://www.receitaws.com.br/v1/cnpj/"),
    ("bcb_valores", "https://valoresareceber.bcb.gov.br/publico/"),
    ("bcb_api", "https://valoresareceber.bcb.gov.br/publico/rest/valoresAReceber/"),
    ("omnisci_demo", "https://www.omnisci.com/demos/tweetmap"),
    ("scan_user_repo", "https://github.com/faciltech/scan-user"),
    ("osint_brasil_repo", "https://github.com/felipeluan20/OSINTKit-Brasil"),
    ("dados_gov", "https://dados.gov.br/home"),
    ("brasil_io", "https://brasil.io/datasets/"),
    ("ibict_dados", "https://dados.ibict.br/dataset"),
    ("bcb_dados", "https://dadosabertos.bcb.gov.br/dataset"),
    ("turismo_dados", "https://dados.turismo.gov.br/dataset/"),
    ("mj_dados", "https://dados.mj.gov.br/dataset"),
    ("sc_dados", "https://dados.sc.gov.br/"),
    ("sp_policia_rg", "https://www.policiacivil.sp.gov.br/portal/faces/pages_home/servicos/consultaSituacaoRG"),
    ("sp_transparencia", "https://www.transparencia.sp.gov.br/home/servidor"),
    ("receita_cnpj_oficial", "https://solucoes.receita.fazenda.gov.br/servicos/cnpjreva/cnpjreva_solicitacao.asp"),
    ("receita_cpf", "https://servicos.receita.fazenda.gov.br/Servicos/CPF/ConsultaSituacao/ConsultaPublica.asp"),
    ("sinesp_cidadao", "https://www.gov.br/pt-br/apps/sinesp-cidadao"),
    ("falecidos_brasil", "https://www.falecidosnobrasil.org.br/index.php"),
    ("pessoa_desaparecida", "https://www.gov.br/pt-br/servicos/consultar-pessoa-desaparecida"),
    ("portal_transparencia", "https://portaldatransparencia.gov.br/"),
    ("juntas_comerciais", "https://www.gov.br/empresas-e-negocios/pt-br/drei/juntas-comerciais"),
    ("bcb_oficial", "https://www.bcb.gov.br/"),
    ("detran_pr", "https://www.detran.pr.gov.br/"),
    ("procon_pr", "https://www.procon.pr.gov.br/"),
];

/// Immutable, ordered mapping from source key to URL.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    entries: Vec<(String, String)>,
}

impl SourceRegistry {
    /// Build the registry from the built-in source table.
    pub fn new() -> Self {
        Self::from_entries(
            DEFAULT_SOURCES
                .iter()
                .map(|(k, u)| (k.to_string(), u.to_string())),
        )
    }

    /// Build a registry from explicit entries.
    ///
    /// Used by tests to point live handlers at a local mock server instead
    /// of the real endpoints.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a source URL by key.
    ///
    /// Unknown keys indicate a wiring bug, not a runtime condition: every key
    /// a handler asks for is declared in the static table.
    pub fn get(&self, key: &str) -> Result<&str, LookupError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, url)| url.as_str())
            .ok_or_else(|| LookupError::UnknownSourceKey(key.to_string()))
    }

    /// Iterate `(key, url)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, u)| (k.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formatted listing of every entry, one `- key: url` line per source in
    /// declaration order. Backs `--listar-fontes`; pure, no I/O.
    pub fn listing_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, url)| format!("- {}: {}", key, url))
            .collect()
    }

    /// Snapshot of the full registry as a JSON object, embedded in every
    /// report so results stay traceable even after URLs change upstream.
    pub fn as_json(&self) -> Value {
        let mut map = Map::new();
        for (key, url) in self.iter() {
            map.insert(key.to_string(), Value::String(url.to_string()));
        }
        Value::Object(map)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
