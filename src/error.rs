//! Error taxonomy for the aggregation core.
//!
//! Per-source upstream failures (HTTP errors, timeouts, malformed bodies) are
//! deliberately NOT represented here: handlers contain them as `erro`/`status`
//! fields inside their source result so a single broken portal never aborts a
//! run. Only configuration-level problems surface as process errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Tipo de consulta inválido: '{0}' (esperado: cnpj, cpf, nome, rg ou placa)")]
    InvalidQueryType(String),

    #[error("Fonte desconhecida no registro: '{0}'")]
    UnknownSourceKey(String),

    #[error("Falha ao gravar o relatório em {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
