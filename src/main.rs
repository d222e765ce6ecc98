mod cmd;

use clap::Parser;
use cmd::Cli;

fn main() {
    let cli = Cli::parse();
    cmd::init_logging(cli.verbose);

    if let Err(e) = cmd::run(cli) {
        let (message, code) = cmd::report(&e);
        eprintln!("{message}");
        std::process::exit(code);
    }
}
