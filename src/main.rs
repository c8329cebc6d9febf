mod cli;
mod github;
mod http;
mod logger;
mod lookup;

use anyhow::{Context, Result};
use cli::Cli;
use github::{GithubClient, GITHUB_API_URL};
use std::{env, io, process::ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::try_parse_args(env::args_os()).unwrap_or_else(|err| err.exit());
    logger::init()?;

    let client = GithubClient::new(GITHUB_API_URL).context("Cannot create the http client")?;

    let outcome = lookup::run(&client, &cli.user, &cli.repo, &mut io::stdout()).await?;

    Ok(outcome.exit_code())
}
