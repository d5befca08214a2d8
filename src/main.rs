use clap::Parser;

use medwise::cli::{run_lookup, Cli, Command};
use medwise::logging::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    tracing::info!(base_url = %config.lookup.base_url, "configuration loaded");

    match cli.command {
        Some(Command::Lookup { name, json }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let output = runtime.block_on(run_lookup(&config, &name, json))?;
            print!("{}", output);
            if json {
                println!();
            }
            Ok(())
        }
        None => medwise::ui::runtime::run(config),
    }
}
