use std::process;

use imports_graph::{
    cli::{Args, Command},
    logging::init_logger,
};

fn main() {
    let args = Args::parse_args();

    // Logging is up before config loading so config problems are reported too
    init_logger(args.verbose, args.quiet, args.no_color);

    let exit_code = Command::from_args(args).run();

    process::exit(exit_code);
}
