use std::process::ExitCode;

use clap::Parser;
use docsite_cli::{CliArgs, DocsiteCli};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let result = match DocsiteCli::from_args("docsite", &args) {
        Ok(cli) => cli.run(args).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("docsite: {e}");
            ExitCode::FAILURE
        }
    }
}
