use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitlog::models::{Exercise, Routine};
use fitlog::{AppError, Config, Dashboard, RemoteClient};

#[derive(Parser)]
#[command(name = "fitlog", about = "Personal fitness tracker backed by a remote spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the stats dashboard
    Dashboard,
    /// List available routines
    Routines,
    /// Log a completed workout by routine name
    LogWorkout {
        routine: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Log a body-weight measurement in lbs
    LogWeight {
        weight: f64,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Create a new workout routine
    CreateRoutine {
        name: String,
        /// Exercise spec: "Name[,weight[,sets[,reps[,time]]]]"; repeatable
        #[arg(long = "exercise", required = true)]
        exercises: Vec<String>,
        /// Estimated calories burned per completion
        #[arg(long)]
        calories: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitlog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = RemoteClient::new(&config)?;

    match cli.command {
        Command::Dashboard => {
            let snapshot = client.fetch_snapshot().await?;
            print!("{}", Dashboard::build(&snapshot, today()).render());
        }
        Command::Routines => {
            let snapshot = client.fetch_snapshot().await?;
            if snapshot.routines.is_empty() {
                println!("No routines yet. Create one with `fitlog create-routine`.");
            }
            for routine in &snapshot.routines {
                let calories = routine
                    .est_calories
                    .map(|c| format!("{c} cal"))
                    .unwrap_or_else(|| "no estimate".to_string());
                println!(
                    "{}  ({} exercises, {})",
                    routine.name,
                    routine.exercises.len(),
                    calories
                );
            }
        }
        Command::LogWorkout { routine, date } => {
            let snapshot = client.fetch_snapshot().await?;
            let routine = snapshot.routine_by_name(&routine).ok_or_else(|| {
                AppError::BadRequest(format!("no routine named \"{routine}\""))
            })?;
            client.log_workout(date.unwrap_or_else(today), routine).await?;
            println!("Workout logged: {}", routine.name);
            refresh_dashboard(&client).await?;
        }
        Command::LogWeight { weight, date } => {
            client.log_weight(date.unwrap_or_else(today), weight).await?;
            println!("Weight logged: {weight} lbs");
            refresh_dashboard(&client).await?;
        }
        Command::CreateRoutine {
            name,
            exercises,
            calories,
        } => {
            let exercises = exercises
                .iter()
                .map(|spec| parse_exercise(spec))
                .collect::<fitlog::Result<Vec<_>>>()?;
            let routine = Routine {
                name,
                exercises,
                est_calories: calories,
            };
            client.create_routine(&routine).await?;
            println!("Routine saved: {}", routine.name);
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Writes re-fetch the full snapshot; nothing is applied locally.
async fn refresh_dashboard(client: &RemoteClient) -> fitlog::Result<()> {
    let snapshot = client.fetch_snapshot().await?;
    print!("{}", Dashboard::build(&snapshot, today()).render());
    Ok(())
}

/// Parse "Name[,weight[,sets[,reps[,time]]]]" into an exercise. Empty trailing
/// fields are allowed and omitted.
fn parse_exercise(spec: &str) -> fitlog::Result<Exercise> {
    let mut fields = spec.split(',').map(str::trim);
    let name = fields
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("exercise spec \"{spec}\" has no name")))?;

    let mut exercise = Exercise::new(name);
    let optional = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);
    exercise.weight = optional(fields.next());
    exercise.sets = optional(fields.next());
    exercise.reps = optional(fields.next());
    exercise.time = optional(fields.next());
    Ok(exercise)
}
