use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod dispatch;
mod error;
mod handlers;
mod identifier;
mod registry;
mod report;

use cli::Cli;
use registry::SourceRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=".repeat(80));
    println!("CONSULTOR DE PATRIMÔNIOS PÚBLICOS v2.0");
    println!("Integração com múltiplas fontes governamentais");
    println!("{}", "=".repeat(80));

    let registry = SourceRegistry::new();

    if cli.listar_fontes {
        println!("\n[FONTES DISPONÍVEIS]");
        for line in registry.listing_lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    // Interrupt aborts the whole run; no partial report is salvaged.
    ctrlc::set_handler(|| {
        println!("\n[INTERROMPIDO] Consulta cancelada pelo usuário");
        std::process::exit(0);
    })?;

    // Both are guaranteed present by clap unless --listar-fontes was given.
    let identifier = cli.identificador.expect("identificador required by clap");
    let tipo = cli.tipo.expect("tipo required by clap");

    let client = handlers::http_client();

    println!("\n[INFO] Iniciando busca completa para {}: {}", tipo, identifier);
    let relatorio = dispatch::run(&client, &registry, &identifier, tipo).await?;

    if cli.verbose {
        println!("\n[RESULTADOS DETALHADOS]");
        println!("{}", relatorio.to_pretty_json()?);
    } else {
        println!("\n[RESUMO DOS RESULTADOS]");
        for (fonte, dados) in &relatorio.fontes {
            let status = dados
                .get("status")
                .and_then(|s| s.as_str())
                .unwrap_or("Consultado");
            println!("- {}: {}", fonte, status);
        }
    }

    let written = report::save(&relatorio, cli.output.as_deref())?;
    println!("[INFO] Relatório salvo em: {}", written.display());

    println!("\n[CONCLUÍDO] Consulta finalizada com sucesso!");
    println!("Total de fontes consultadas: {}", relatorio.source_count());

    Ok(())
}
