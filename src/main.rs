use clap::Parser;
use handle_errors::{Error as CustomError, report_error};
use library_queries::{LibraryQueryRunner, Settings, catalog, queries};
use std::env;
use tracing_subscriber::fmt::format::FmtSpan;

/// Runs the library query catalog against the books collection.
#[derive(Parser, Debug)]
#[command(name = "library-queries")]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file, looked up with any supported extension
    #[arg(long, default_value = "setup")]
    config: String,

    /// Run only the named step; repeat to run several
    #[arg(long = "step")]
    steps: Vec<String>,

    /// Print the step names and exit without connecting
    #[arg(long)]
    list: bool,
}

// Setting log level; RUST_LOG wins over the settings
fn init_tracing(default_filter: String) {
    let log_filter = env::var("RUST_LOG").unwrap_or(default_filter);
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), CustomError> {
    let args = Args::parse();
    // Loading the env values
    dotenv::dotenv().ok();

    let settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(Settings::default().log_filter());
            report_error(&e);
            return Err(e);
        }
    };
    init_tracing(settings.log_filter());

    let steps = catalog(&settings);
    if args.list {
        for step in &steps {
            println!("{:<24} {}", step.name, step.label);
        }
        return Ok(());
    }

    let steps = match queries::select(steps, &args.steps) {
        Ok(steps) => steps,
        Err(e) => {
            report_error(&e);
            return Err(e);
        }
    };

    LibraryQueryRunner::new(settings, steps).run().await;
    Ok(())
}
