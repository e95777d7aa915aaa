use std::process::ExitCode;

use clap::Parser;
use cordform::cli::{self, output, Cli, Commands};
use cordform::config::Descriptor;
use cordform::error::Result;
use tracing::info;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let descriptor = Descriptor::load(&args.config)?;
    descriptor.logging.init();
    info!(
        path = %args.config.display(),
        nodes = descriptor.nodes.len(),
        "Loaded deployment descriptor"
    );

    match &args.command {
        Commands::Nodes => cli::nodes::execute(&descriptor),
        Commands::Render(render) => cli::render::execute(&descriptor, render),
        Commands::Check => cli::check::execute(&args.config, &descriptor),
    }
}
