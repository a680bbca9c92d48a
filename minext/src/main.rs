#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use std::{borrow::Cow, path::PathBuf, process};

use bootstrap::{AppConfig, init_logging, load_env_file};
use clap::{Parser, Subcommand};
use minext_application::{ExternalSolveService, MinExtError, MinExtProcessor, Session};
use minext_infrastructure::{DznModelDataWriter, GoodLpPlanSolver, TextDatasetParser};
use minext_presentation::{
    DatasetPresenter, ExternalSolvePresenter, ReportPresenter, format_error,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

#[derive(Parser)]
#[command(
    name = "minext",
    version,
    about = "Minimum-extremism opinion redistribution"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the contents of a dataset file
    Show {
        /// Dataset file
        file: PathBuf,
    },
    /// Solve the redistribution problem with the built-in ILP solver
    Solve {
        /// Dataset file
        file: PathBuf,
    },
    /// Write the dataset as a MiniZinc data file (DatosProyecto_<n>.dzn)
    Export {
        /// Dataset file
        file: PathBuf,
        /// Directory for the generated file
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Export the dataset and run the MiniZinc model on it
    Minizinc {
        /// Dataset file
        file: PathBuf,
        /// MiniZinc model file
        #[arg(long)]
        model: Option<PathBuf>,
        /// Wall-clock limit in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Solver name passed to `minizinc --solver`
        #[arg(long)]
        solver: Option<String>,
        /// Path to the minizinc executable
        #[arg(long)]
        bin: Option<String>,
        /// Directory for the generated data file
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() {
    load_env_file();
    init_logging();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = AppConfig::from_env();
    let processor = MinExtProcessor::new(&TextDatasetParser, &GoodLpPlanSolver);

    match cli.command {
        Commands::Show { file } => {
            let session = load(&processor, file)?;
            let dataset = session.require_dataset().map_err(describe)?;
            println!("{}", DatasetPresenter::render(dataset));
        }
        Commands::Solve { file } => {
            let session = load(&processor, file)?;
            let dataset = session.require_dataset().map_err(describe)?;
            println!("{}", DatasetPresenter::render(dataset));
            println!();
            let report = processor.solve(&session).map_err(describe)?;
            println!("{}", ReportPresenter::render(&report));
        }
        Commands::Export { file, out_dir } => {
            if let Some(out_dir) = out_dir {
                config.output_dir = out_dir;
            }
            let session = load(&processor, file)?;
            let runner = config.minizinc_runner();
            let service = ExternalSolveService::new(
                &DznModelDataWriter,
                &runner,
                &config.model_path,
                &config.output_dir,
            );
            let path = service.export(&session).map_err(describe)?;
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            println!("{}", minext_i18n::model_data_created(name));
        }
        Commands::Minizinc {
            file,
            model,
            timeout,
            solver,
            bin,
            out_dir,
        } => {
            if let Some(model) = model {
                config.model_path = model;
            }
            if let Some(seconds) = timeout {
                config.timeout = std::time::Duration::from_secs(seconds);
            }
            if let Some(solver) = solver {
                config.minizinc_solver = solver;
            }
            if let Some(bin) = bin {
                config.minizinc_bin = bin;
            }
            if let Some(out_dir) = out_dir {
                config.output_dir = out_dir;
            }

            let session = load(&processor, file)?;
            let runner = config.minizinc_runner();
            let service = ExternalSolveService::new(
                &DznModelDataWriter,
                &runner,
                &config.model_path,
                &config.output_dir,
            );
            let report = service.run(&session).map_err(describe)?;
            println!("{}", ExternalSolvePresenter::render(&report));
        }
    }

    Ok(())
}

fn load(processor: &MinExtProcessor<'_>, file: PathBuf) -> CliResult<Session> {
    processor
        .load_dataset(&Session::new(), &file)
        .map_err(describe)
}

fn describe(err: MinExtError) -> Cow<'static, str> {
    format_error(&err).into()
}
