use anyhow::Result;
use clap::Parser;
use invocation_bench::{
    cli::{list_strategies, run_benchmark, verify_strategies, Cli, Commands},
    logging::init_logging,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.subcommand() {
        Commands::Run(args) => {
            run_benchmark(&args, cli.verbose > 0)?;
        }
        Commands::Verify(args) => {
            verify_strategies(&args)?;
        }
        Commands::List => list_strategies(),
    }

    Ok(())
}
