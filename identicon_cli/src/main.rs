use clap::Parser;

use identicon_adapters::logger::configure_logger;

mod cli;
use cli::Cli;

fn main() {
    let cli: Cli = Cli::parse();
    configure_logger(cli.log_level, &[]);

    if let Err(error) = cli.execute() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    };
}
