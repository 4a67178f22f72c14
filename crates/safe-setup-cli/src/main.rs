//! `setup-service`: registers the indexer's periodic tasks and seeds the
//! known Safe contract deployments for one network.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use safe_setup_core::config::{FixtureSelection, SetupConfig};
use safe_setup_core::models::{CoreError, Network};
use safe_setup_core::setup::{ContractSetup, ReconcileOutcome, SetupReport, run_setup};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Setup Transaction Service required tasks and Safe contract addresses.
#[derive(Parser)]
#[command(name = "setup-service", version)]
struct Cli {
    /// SQLite database shared with the scheduler and the indexer.
    #[arg(long, env = "SAFE_SETUP_DATABASE")]
    database: PathBuf,

    /// Network whose Safe deployments are seeded (name or chain id).
    #[arg(long, env = "SAFE_SETUP_NETWORK", conflicts_with = "local_fixture")]
    network: Option<Network>,

    /// Seed the single-address fixture used on developer chains.
    #[arg(long, env = "SAFE_SETUP_LOCAL_FIXTURE")]
    local_fixture: bool,

    /// Print the setup report as JSON instead of progress lines.
    #[arg(long)]
    json: bool,
}

enum Failure {
    Setup(CoreError),
    Output(std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match execute(cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Setup(err)) => {
            error!(kind = ?err.kind, "setup failed: {}", err.message);
            ExitCode::FAILURE
        }
        Err(Failure::Output(err)) => {
            error!("failed to write setup report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli, out: &mut impl Write) -> Result<(), Failure> {
    let json = cli.json;
    let report = run(cli).map_err(Failure::Setup)?;

    let written = if json {
        serde_json::to_writer_pretty(&mut *out, &report)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out))
    } else {
        write_progress(out, &report)
    };
    written.map_err(Failure::Output)
}

fn run(cli: Cli) -> Result<SetupReport, CoreError> {
    let config = SetupConfig {
        database_path: cli.database,
        fixtures: FixtureSelection::from_options(cli.network, cli.local_fixture)?,
    };

    run_setup(&config)
}

fn write_progress(out: &mut impl Write, report: &SetupReport) -> std::io::Result<()> {
    for task in &report.tasks {
        if task.created() {
            writeln!(out, "Created Periodic Task {}", task.task)?;
        } else {
            writeln!(out, "Task {} was already created", task.task)?;
        }
        if matches!(task.outcome, ReconcileOutcome::Updated { .. }) {
            writeln!(out, "Task {} now runs {}", task.task, task.interval)?;
        }
    }

    writeln!(out, "Setting up Safe Contract Addresses for {}", report.fixtures)?;
    for setup in &report.contracts.master_copies {
        write_contract(out, "Master copy", setup)?;
    }
    for setup in &report.contracts.proxy_factories {
        write_contract(out, "Proxy factory", setup)?;
    }
    Ok(())
}

fn write_contract(out: &mut impl Write, kind: &str, setup: &ContractSetup) -> std::io::Result<()> {
    match &setup.outcome {
        ReconcileOutcome::Created => writeln!(out, "{kind} {} created", setup.address),
        ReconcileOutcome::Updated { fields } => {
            writeln!(out, "{kind} {} updated: {}", setup.address, fields.join(", "))
        }
        ReconcileOutcome::Unchanged => writeln!(out, "{kind} {} already set up", setup.address),
    }
}
