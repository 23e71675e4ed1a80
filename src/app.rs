//! Command line application: argument parsing and command dispatch.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fivethreeone::backup::{export_backup, import_backup};
use fivethreeone::history::{complete_week, log_session, plan_for, record_initial_training_maxes};
use fivethreeone::program::{
    epley_one_rep_max, round_weight, training_maxes, AssistanceConfig, CycleWeek, Lift, LiftMap,
    SessionPlan, SetKind,
};
use fivethreeone::settings::{TrainingSettings, Units};
use fivethreeone::storage::config::{self, AppConfig};
use fivethreeone::storage::{Database, SettingsStore};

#[derive(Parser)]
#[command(
    name = "fivethreeone",
    version,
    about = "5/3/1 strength training planner",
    long_about = "Plan 5/3/1 training weeks, log AMRAP sets and keep training maxes progressing."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file override
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Enter one-rep maxes and start the program
    Init {
        #[arg(long)]
        bench: f64,
        #[arg(long)]
        squat: f64,
        #[arg(long)]
        deadlift: f64,
        #[arg(long)]
        press: f64,
        /// Training max percentage (80-100)
        #[arg(long, default_value_t = 90.0)]
        percent: f64,
        /// Weights in pounds instead of kilograms
        #[arg(long)]
        lbs: bool,
        /// Enable Boring But Big assistance at this percentage of training max
        #[arg(long)]
        bbb: Option<f64>,
    },
    /// Show training maxes for the current cycle
    Tm,
    /// Show session plans
    Plan {
        /// Week to plan (defaults to the current week)
        #[arg(long)]
        week: Option<u8>,
        /// Only plan this lift
        #[arg(long)]
        lift: Option<Lift>,
    },
    /// Log a completed session at the current position
    Log {
        lift: Lift,
        /// Reps achieved on the AMRAP set
        #[arg(long)]
        reps: Option<u32>,
    },
    /// Finish the current week
    Advance,
    /// Write a JSON backup
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Restore a JSON backup, replacing stored data
    Import { path: PathBuf },
    /// Estimate a one-rep max from a rep set
    Estimate { weight: f64, reps: u32 },
}

/// Load configuration, honouring the `--config` override.
pub fn load_app_config(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => config::load_config().context("Failed to load config"),
    }
}

fn open_store(config: &AppConfig) -> Result<SettingsStore<Database>> {
    let path = config.database_path();
    let db = Database::open(&path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    Ok(SettingsStore::new(db))
}

fn require_onboarding(store: &SettingsStore<Database>) -> Result<()> {
    if !store.onboarding_complete()? {
        bail!("No training settings yet, run `fivethreeone init` first");
    }
    Ok(())
}

/// Run a parsed command.
pub fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Command::Estimate { weight, reps } => {
            let estimate = epley_one_rep_max(weight, reps);
            println!("Estimated 1RM: {}", round_weight(estimate));
        }
        Command::Init {
            bench,
            squat,
            deadlift,
            press,
            percent,
            lbs,
            bbb,
        } => {
            let mut store = open_store(&config)?;
            let units = if lbs { Units::Lbs } else { Units::Kg };
            let one_rep_max = LiftMap {
                bench_press: bench,
                squat,
                deadlift,
                overhead_press: press,
            };
            let mut settings = TrainingSettings::from_intake(one_rep_max, percent, units)?;
            if let Some(percentage) = bbb {
                settings.assistance = AssistanceConfig {
                    enabled: true,
                    percentage,
                };
                settings.validate()?;
            }

            store.clear()?;
            store.set_settings(&settings)?;
            store.set_onboarding_complete(true)?;
            record_initial_training_maxes(&mut store, Utc::now())?;
            tracing::info!("Program initialized");
            print_training_maxes(&store)?;
        }
        Command::Tm => {
            let store = open_store(&config)?;
            require_onboarding(&store)?;
            print_training_maxes(&store)?;
        }
        Command::Plan { week, lift } => {
            let store = open_store(&config)?;
            require_onboarding(&store)?;
            let settings = store.settings()?;
            let position = store.position()?;
            let week = match week {
                Some(n) => CycleWeek::try_from(n)?,
                None => position.week,
            };
            let tms = training_maxes(&settings, position.cycle);
            let lifts: Vec<Lift> = match lift {
                Some(lift) => vec![lift],
                None => Lift::ALL.to_vec(),
            };

            println!("Cycle {}, {}", position.cycle, week);
            for lift in lifts {
                let plan = SessionPlan::new(
                    lift,
                    *tms.get(lift),
                    week,
                    &settings.warmup,
                    &settings.assistance,
                );
                print_plan(&plan, &config, settings.units);
            }
        }
        Command::Log { lift, reps } => {
            let mut store = open_store(&config)?;
            require_onboarding(&store)?;
            let plan = plan_for(&store, lift)?;
            if plan.amrap_set().is_some() && reps.is_none() {
                bail!("{} has an AMRAP set this week, pass --reps", plan.week);
            }
            let outcome = log_session(&mut store, &plan, reps, Utc::now())?;
            println!("Logged {} ({} sets)", lift, outcome.session.sets.len());
            if let Some(record) = outcome.new_record {
                println!(
                    "New personal record: {} x {} (estimated 1RM {:.1})",
                    record.weight, record.reps, record.estimated_one_rep_max
                );
            }
            if outcome.replaced_previous {
                println!("Replaced the earlier {} log for this week", lift);
            }
            if outcome.amrap_missed {
                println!(
                    "AMRAP minimum missed, {} training max drops 10% next cycle",
                    lift
                );
            }
        }
        Command::Advance => {
            let mut store = open_store(&config)?;
            require_onboarding(&store)?;
            let completion = complete_week(&mut store, Utc::now())?;
            for lift in &completion.failed_lifts {
                println!("{} training max reduced by 10% after a missed AMRAP", lift);
            }
            println!("Now at {}", completion.position);
        }
        Command::Export { output } => {
            let store = open_store(&config)?;
            let json = export_backup(&store, Utc::now())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Backup written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Import { path } => {
            let mut store = open_store(&config)?;
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let document = import_backup(&mut store, &json)?;
            println!(
                "Imported backup from {} (cycle {}, week {})",
                path.display(),
                document.current_cycle,
                document.current_week
            );
        }
    }

    Ok(())
}

fn print_training_maxes(store: &SettingsStore<Database>) -> Result<()> {
    let settings = store.settings()?;
    let position = store.position()?;
    let tms = training_maxes(&settings, position.cycle);

    println!("Training maxes, cycle {}:", position.cycle);
    for (lift, tm) in tms.iter() {
        let failures = settings.failure_decreases.get(lift);
        if *failures > 0 {
            println!(
                "  {:<15} {:>7} {} ({} failure decreases)",
                lift.to_string(),
                tm,
                settings.units,
                failures
            );
        } else {
            println!("  {:<15} {:>7} {}", lift.to_string(), tm, settings.units);
        }
    }
    Ok(())
}

fn print_plan(plan: &SessionPlan, config: &AppConfig, units: Units) {
    println!("\n{} (training max {} {})", plan.lift, plan.training_max, units);
    for set in &plan.sets {
        let shown = match set.kind {
            SetKind::Warmup => config.display.show_warmups,
            SetKind::Assistance => config.display.show_assistance,
            SetKind::Working => true,
        };
        if !shown {
            continue;
        }
        let reps = if set.is_amrap {
            format!("{}+", set.reps)
        } else {
            set.reps.to_string()
        };
        println!(
            "  {:<8} {:>7} {} x {:<3} ({:.0}%)",
            set.kind.to_string(),
            set.weight,
            units,
            reps,
            set.percentage
        );
    }
}
