//! Command Line Interface for the yield portfolio optimizer.
mod output;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yield_opt_api::prelude::OptimizeResponse;
use yield_opt_api::{ApiServer, AppState, CatalogSource, ServerConfig};
use yield_opt_data::OpportunityProvider;
use yield_opt_domain::OptimizationRequest;
use yield_opt_domain::enums::{RiskTolerance, TimeHorizon};
use yield_opt_domain::value_objects::Constraints;
use yield_opt_optimization::Optimizer;

#[derive(Parser)]
#[command(name = "yield-opt")]
#[command(about = "Multi-chain DeFi yield portfolio optimizer", long_about = None)]
struct Cli {
    /// Catalog JSON file or URL; overrides YIELD_OPT_CATALOG
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an optimized portfolio
    Optimize {
        /// Request JSON file ("-" for stdin); the flags below are ignored when given
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Capital to deploy in USD
        #[arg(short, long, default_value = "10000")]
        size: Decimal,

        #[arg(long, value_enum, default_value_t = RiskArg::Moderate)]
        risk: RiskArg,

        #[arg(long, value_enum, default_value_t = HorizonArg::Medium)]
        horizon: HorizonArg,

        /// Comma-separated chains; all chains when omitted
        #[arg(long, value_delimiter = ',')]
        chains: Vec<String>,

        /// Largest single position in percent
        #[arg(long, default_value = "30")]
        max_position: Decimal,

        /// Minimum TVL in USD
        #[arg(long, default_value = "1000000")]
        min_liquidity: Decimal,

        /// Comma-separated protocols to exclude
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Drop opportunities with a risk score above 7
        #[arg(long)]
        require_audited: bool,

        /// Backtest seed; overrides YIELD_OPT_BACKTEST_SEED
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// List the opportunity catalog
    Catalog {
        /// Comma-separated chains; all chains when omitted
        #[arg(long, value_delimiter = ',')]
        chains: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Serve the HTTP API
    Serve {
        /// Bind host; overrides YIELD_OPT_HOST
        #[arg(long)]
        host: Option<String>,

        /// Bind port; overrides YIELD_OPT_PORT
        #[arg(short, long)]
        port: Option<u16>,

        /// Backtest seed; overrides YIELD_OPT_BACKTEST_SEED
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RiskArg {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<RiskArg> for RiskTolerance {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::Conservative => Self::Conservative,
            RiskArg::Moderate => Self::Moderate,
            RiskArg::Aggressive => Self::Aggressive,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HorizonArg {
    Short,
    Medium,
    Long,
}

impl From<HorizonArg> for TimeHorizon {
    fn from(arg: HorizonArg) -> Self {
        match arg {
            HorizonArg::Short => Self::Short,
            HorizonArg::Medium => Self::Medium,
            HorizonArg::Long => Self::Long,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("yield_opt=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_request(path: &PathBuf) -> Result<OptimizationRequest> {
    let raw = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("reading request from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading request {}", path.display()))?
    };
    serde_json::from_str(&raw).context("parsing optimization request")
}

fn provider(config: &ServerConfig) -> Result<Arc<dyn OpportunityProvider>> {
    config
        .catalog
        .provider()
        .context("building catalog provider")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(catalog) = &cli.catalog {
        config.catalog = CatalogSource::parse(catalog);
    }

    match cli.command {
        Commands::Optimize {
            request,
            size,
            risk,
            horizon,
            chains,
            max_position,
            min_liquidity,
            exclude,
            require_audited,
            seed,
            format,
        } => {
            let request = match request {
                Some(path) => read_request(&path)?,
                None => OptimizationRequest {
                    portfolio_size: size,
                    risk_tolerance: risk.into(),
                    time_horizon: horizon.into(),
                    preferred_chains: chains,
                    current_positions: vec![],
                    constraints: Constraints {
                        max_single_position: max_position,
                        min_liquidity,
                        exclude_protocols: exclude,
                        require_audited,
                    },
                },
            };

            let provider = provider(&config)?;
            let optimizer = Optimizer::default();
            let mut path = optimizer
                .backtest()
                .jittered_path(seed.or(config.backtest_seed))?;

            let report = match optimizer
                .optimize_from(provider.as_ref(), &request, &mut path)
                .await
            {
                Ok(report) => report,
                Err(e) if e.is_client_error() => bail!("invalid request: {e}"),
                Err(e) => return Err(e.into()),
            };

            match format {
                Format::Json => {
                    let response = OptimizeResponse::from(report);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Format::Table => {
                    println!(
                        "📊 Optimized portfolio for ${} ({} positions)",
                        request.portfolio_size,
                        report.portfolio.allocations.len()
                    );
                    output::allocation_table(&report).printstd();
                    for line in output::summary_lines(&report) {
                        println!("{line}");
                    }
                }
            }
        }
        Commands::Catalog { chains, format } => {
            let provider = provider(&config)?;
            let opportunities = provider.get_opportunities(&chains).await?;
            info!(provider = provider.name(), count = opportunities.len(), "Catalog loaded");

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&opportunities)?),
                Format::Table => {
                    println!("📡 {} opportunities", opportunities.len());
                    output::catalog_table(&opportunities).printstd();
                }
            }
        }
        Commands::Serve { host, port, seed } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if seed.is_some() {
                config.backtest_seed = seed;
            }

            let state = AppState::new(provider(&config)?, Optimizer::default())
                .with_backtest_seed(config.backtest_seed);
            ApiServer::new(config, state).run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_optimize_flags_parse() {
        let cli = Cli::try_parse_from([
            "yield-opt",
            "optimize",
            "--size",
            "25000",
            "--risk",
            "aggressive",
            "--chains",
            "Base,Optimism",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Optimize {
                size,
                risk,
                chains,
                format,
                ..
            } => {
                assert_eq!(size, Decimal::from(25000));
                assert!(matches!(risk, RiskArg::Aggressive));
                assert_eq!(chains, vec!["Base", "Optimism"]);
                assert!(matches!(format, Format::Json));
            }
            _ => panic!("expected optimize"),
        }
    }

    #[test]
    fn test_global_catalog_flag() {
        let cli = Cli::try_parse_from(["yield-opt", "catalog", "--catalog", "./c.json"]).unwrap();
        assert_eq!(cli.catalog.as_deref(), Some("./c.json"));
    }
}
