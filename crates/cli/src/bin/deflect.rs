use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use deflect_planner::config::load_catalog;
use deflect_planner::export::{self, json, sweep as export_sweep};
use deflect_planner::mission::{
    Catalog, DesignEvent, DesignSession, MissionClock, Phase1Choice, sweep_impactor_mass,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[path = "deflect/dashboard.rs"]
mod dashboard;

/// Longest impact horizon accepted on the command line.
const MAX_DAYS_TO_IMPACT: f64 = 36_500.0;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Kinetic-impactor mission feasibility planner"
)]
struct Cli {
    /// Catalog directory with launch_vehicles/, propulsion/, materials/, trajectories/
    /// (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one mission design and print the dashboard
    Assess {
        #[command(flatten)]
        design: DesignArgs,

        /// Emit the assessment as JSON instead of the dashboard
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Evaluate the design across impactor masses and write CSV
    Sweep {
        #[command(flatten)]
        design: DesignArgs,

        /// Mass increment in kilograms
        #[arg(long, default_value_t = 500)]
        step: u32,

        /// Output path (`-` for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
    /// Write the trajectory-service launch request for a feasible design
    LaunchRequest {
        #[command(flatten)]
        design: DesignArgs,

        /// Output path (`-` for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
    /// List catalog entries
    Catalog,
}

#[derive(Args)]
struct DesignArgs {
    /// Launch vehicle key (defaults to the first catalog entry)
    #[arg(long)]
    vehicle: Option<String>,

    /// Propulsion system key (defaults to the first catalog entry)
    #[arg(long)]
    propulsion: Option<String>,

    /// Impactor material key (defaults to the first catalog entry)
    #[arg(long)]
    material: Option<String>,

    /// Impactor mass in kilograms (clamped to the material limit)
    #[arg(long, default_value_t = 0)]
    mass: u32,

    /// Trajectory option key
    #[arg(long)]
    trajectory: Option<String>,

    /// A characterization probe was flown before design (costs budget and 30 days)
    #[arg(long, default_value_t = false)]
    probe: bool,

    /// Days between impact confirmation and impact
    #[arg(
        long,
        default_value_t = 90.0,
        value_parser = parse_days_to_impact,
        conflicts_with_all = ["now", "impact"]
    )]
    days_to_impact: f64,

    /// Current simulated time (RFC 3339)
    #[arg(long, requires = "impact")]
    now: Option<String>,

    /// Confirmed impact time (RFC 3339)
    #[arg(long, requires = "now")]
    impact: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match &cli.catalog {
        Some(dir) => {
            let config = load_catalog(dir)
                .with_context(|| format!("loading catalog from {}", dir.display()))?;
            Catalog::from_config(&config)
        }
        None => Catalog::builtin(),
    };

    match cli.command {
        Command::Assess {
            design,
            json: as_json,
        } => {
            let session = open_session(catalog, &design)?;
            let assessment = session.assess();
            if as_json {
                let report = dashboard::Report::new(&session, &assessment);
                let mut writer = export::writer_for_path(std::path::Path::new("-"))?;
                json::write_pretty(&mut *writer, &report)?;
            } else {
                dashboard::print(&session, &assessment);
            }
        }
        Command::Sweep {
            design,
            step,
            output,
        } => {
            let session = open_session(catalog, &design)?;
            let rows = sweep_impactor_mass(&session.inputs(), step);
            let statuses: Vec<String> = rows
                .iter()
                .map(|row| row.assessment.status().to_string())
                .collect();
            let records: Vec<export_sweep::Record<'_>> = rows
                .iter()
                .zip(&statuses)
                .map(|(row, status)| export_sweep::Record {
                    impactor_mass_kg: row.impactor_mass_kg,
                    spacecraft_dry_mass_kg: row.assessment.spacecraft_dry_mass_kg,
                    propellant_mass_kg: row.assessment.propellant_mass_kg,
                    delta_v_m_s: row.assessment.delta_v_m_s,
                    total_prep_days: row.assessment.total_prep_days,
                    total_reliability: row.assessment.total_reliability,
                    total_mission_days: row.assessment.trajectory.map(|t| t.total_mission_days),
                    feasible: row.assessment.feasible,
                    status,
                })
                .collect();
            let mut writer = export::writer_for_path(&output)?;
            export_sweep::write_records(&mut *writer, &records)?;
            info!(rows = records.len(), output = %output.display(), "wrote mass sweep");
        }
        Command::LaunchRequest { design, output } => {
            let mut session = open_session(catalog, &design)?;
            let plan = session.launch()?;
            let mut writer = export::writer_for_path(&output)?;
            json::write_pretty(&mut *writer, &plan.request)?;
        }
        Command::Catalog => dashboard::print_catalog(&catalog),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "deflect=warn",
            1 => "deflect=info",
            _ => "deflect=debug",
        })
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn open_session(catalog: Catalog, args: &DesignArgs) -> anyhow::Result<DesignSession> {
    let mut clock = match (&args.now, &args.impact) {
        (Some(now), Some(impact)) => MissionClock::new(parse_time(now)?, parse_time(impact)?),
        _ => MissionClock::confirmed(Utc::now(), args.days_to_impact)?,
    };
    let choice = if args.probe {
        Phase1Choice::LaunchProbe
    } else {
        Phase1Choice::ProceedBlind
    };
    let mission = choice.commit(&mut clock)?;

    let mut session = DesignSession::new(catalog, mission, clock)?;
    let mut events = Vec::new();
    if let Some(key) = &args.vehicle {
        events.push(DesignEvent::SelectVehicle(key.clone()));
    }
    if let Some(key) = &args.propulsion {
        events.push(DesignEvent::SelectPropulsion(key.clone()));
    }
    if let Some(key) = &args.material {
        events.push(DesignEvent::SelectMaterial(key.clone()));
    }
    events.push(DesignEvent::SetImpactorMass(args.mass));
    if let Some(key) = &args.trajectory {
        events.push(DesignEvent::SelectTrajectory(key.clone()));
    }
    for event in events {
        session.apply(event)?;
    }
    Ok(session)
}

fn parse_days_to_impact(value: &str) -> Result<f64, String> {
    let days: f64 = value
        .parse()
        .map_err(|err| format!("not a number: {err}"))?;
    if days.is_finite() && (0.0..=MAX_DAYS_TO_IMPACT).contains(&days) {
        Ok(days)
    } else {
        Err(format!("expected 0 to {MAX_DAYS_TO_IMPACT} days"))
    }
}

fn parse_time(value: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|err| anyhow!("invalid timestamp '{}': {}", value, err))
}
