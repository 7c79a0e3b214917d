use clap::Parser;

use cfgpatch::cli::{Cli, Commands};
use cfgpatch::commands::{run_auth, run_init, run_inspect, run_unauth, run_upgrade};
use cfgpatch::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Unauth(args) => run_unauth(args, &cli),
        Commands::Auth(args) => run_auth(args, &cli),
        Commands::Upgrade(args) => run_upgrade(args, &cli),
        Commands::Inspect(args) => run_inspect(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
