use clap::Parser;

use kortex_chart::cli::{Cli, Commands};
use kortex_chart::commands::{
    run_batch, run_build, run_config, run_export, run_init, run_kinds, run_table,
};
use kortex_chart::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Kinds(args) => run_kinds(args),
        Commands::Build(args) => run_build(args, &cli),
        Commands::Table(args) => run_table(args),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Batch(args) => run_batch(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, cli.no_config),
    };

    std::process::exit(exit_code);
}
