// stepviz: step-by-step algorithm and data-structure replay

use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never mix with --json output
    let filter = EnvFilter::try_from_env("STEPVIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = stepviz::cli::run_from_env() {
        eprintln!("Error: {}", error);
        std::process::exit(error.exit_code());
    }
}
