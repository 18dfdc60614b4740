use clap::Parser;
use grocer::cli::commands::Cli;
use grocer::cli::handlers;

fn main() {
    let cli = Cli::parse();
    grocer::logging::init(cli.verbose);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
