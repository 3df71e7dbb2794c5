use clap::Parser;

use consistency_guard::cli::{Cli, Commands};
use consistency_guard::commands::{run_fix, run_init, run_report, run_validate};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Fix(args) => run_fix(args, &cli),
        Commands::Report(args) => run_report(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
