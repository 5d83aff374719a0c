use clap::Parser;
use mockdns_application::use_cases::LookupUseCase;
use mockdns_domain::CliOverrides;
use mockdns_infrastructure::dns::ZoneLoader;
use std::sync::Arc;
use tracing::{debug, info};

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "mockdns")]
#[command(version)]
#[command(about = "Answer DNS lookups from a static zone file")]
struct Cli {
    /// Zone file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Report CNAMEs without following them
    #[arg(long)]
    skip_cname: bool,

    /// Maximum CNAME links to follow
    #[arg(long)]
    max_cname_hops: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        skip_cname: cli.skip_cname.then_some(true),
        max_cname_hops: cli.max_cname_hops,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting mockdns v{}", env!("CARGO_PKG_VERSION"));

    let resolver = Arc::new(ZoneLoader::resolver_from_config(&config)?);
    let use_case = LookupUseCase::new(resolver);

    let request = cli.command.into_request()?;
    debug!(kind = request.kind(), subject = request.subject(), "Running lookup");

    let answer = use_case.execute(&request).await?;
    for line in answer.lines() {
        println!("{}", line);
    }

    Ok(())
}
