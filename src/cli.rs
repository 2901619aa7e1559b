use crate::dispatch::QueryType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patrimonio")]
#[command(about = "Consultor de Patrimônios em Fontes Públicas v2.0")]
#[command(version)]
pub struct Cli {
    /// CNPJ, CPF, Nome, RG ou Placa para consulta
    #[arg(required_unless_present = "listar_fontes")]
    pub identificador: Option<String>,

    /// Tipo de consulta
    #[arg(long, value_enum, required_unless_present = "listar_fontes")]
    pub tipo: Option<QueryType>,

    /// Arquivo de saída para o relatório (padrão: relatorio_patrimonio_<timestamp>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Modo verboso: imprime o relatório completo em JSON
    #[arg(short, long)]
    pub verbose: bool,

    /// Listar todas as fontes disponíveis e sair sem consultar
    #[arg(long)]
    pub listar_fontes: bool,
}
