use clap::Parser;
use fitness_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Workout statistics reporter", long_about = None)]
struct Cli {
    /// Read workout packages from a JSON Lines file instead of the demo batch
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit each summary as a JSON object instead of the text template
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize logging
    fitness_core::logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let packages = match cli.input {
        Some(ref path) => read_packages(path)?,
        None => demo_packages(),
    };

    tracing::info!("Processing {} workout packages", packages.len());

    // First error aborts the whole batch
    for package in &packages {
        let workout = read_raw_package(package)?;
        let summary = workout.summary();

        if cli.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("{}", summary.message());
        }
    }

    Ok(())
}

/// Built-in demonstration batch: one package per supported activity
fn demo_packages() -> Vec<RawPackage> {
    vec![
        RawPackage {
            workout_type: "SWM".into(),
            data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        RawPackage {
            workout_type: "RUN".into(),
            data: vec![15000.0, 1.0, 75.0],
        },
        RawPackage {
            workout_type: "WLK".into(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
}
