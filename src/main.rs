use sitestatus::cli;
use sitestatus::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and dispatch; this is the only place that decides the exit code.
    if let Err(err) = cli::run_from_args() {
        eprintln!("status error: {:#}", err);
        std::process::exit(1);
    }
}
