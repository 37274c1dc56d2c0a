use clap::{Parser, Subcommand};
use guiar::cli;
use guiar::{build_tutorial, first_failing_step, tutorial_progress, validate_step};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "guiar")]
#[command(version, about = "Guided system-design tutorials: build steps, check architectures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the guided tutorial for a problem
    Steps {
        /// Problem definition JSON file
        #[arg(long)]
        problem: PathBuf,
    },

    /// Validate a system graph against a tutorial step
    Validate {
        /// Problem definition JSON file
        #[arg(long)]
        problem: PathBuf,

        /// System graph JSON file
        #[arg(long)]
        graph: PathBuf,

        /// Step number to check (1-based, defaults to the final step)
        #[arg(long)]
        step: Option<usize>,
    },

    /// Report completion percentage and the first failing step
    Progress {
        /// Problem definition JSON file
        #[arg(long)]
        problem: PathBuf,

        /// System graph JSON file
        #[arg(long)]
        graph: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize tracing
    let filter_layer = if args.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if args.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Guiar v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::Steps { problem } => {
            let problem = cli::load_problem(&problem)?;
            info!("building tutorial for '{}'", problem.id);
            let tutorial = build_tutorial(&problem);
            print!("{}", cli::format_tutorial(&tutorial));
        }
        Commands::Validate {
            problem,
            graph,
            step,
        } => {
            let problem = cli::load_problem(&problem)?;
            let graph = cli::load_graph(&graph)?;
            let tutorial = build_tutorial(&problem);
            let index = cli::resolve_step_index(&tutorial, step)?;
            let result = validate_step(&tutorial.steps[index], &graph);
            print!("{}", cli::format_validation(index + 1, &result));
            if !result.passed {
                std::process::exit(1);
            }
        }
        Commands::Progress { problem, graph } => {
            let problem = cli::load_problem(&problem)?;
            let graph = cli::load_graph(&graph)?;
            let tutorial = build_tutorial(&problem);
            let last = tutorial.total_steps.saturating_sub(1);
            let failing = first_failing_step(&tutorial.steps, &graph, last);
            let completed = failing.unwrap_or(tutorial.total_steps);
            let percent = tutorial_progress(completed, tutorial.total_steps);
            print!("{}", cli::format_progress(&tutorial, percent, failing));
        }
    }

    Ok(())
}
