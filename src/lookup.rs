use crate::{
    github::{tag::Tag, GithubClient},
    http::Error,
};
use anyhow::{Context, Result};
use std::{io::Write, process::ExitCode};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(Tag),
    RequestFailed { status: u16 },
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Found(_) => ExitCode::SUCCESS,
            Outcome::RequestFailed { status } => {
                log::debug!("exiting with 1 after status {}", status);
                ExitCode::from(1)
            }
        }
    }
}

pub async fn lookup(client: &GithubClient, owner: &str, repo: &str) -> Result<Tag, Error> {
    client.repo(owner, repo).releases().latest().await
}

/// Writes the tag as a single line to `out`. A non-200 status is an expected
/// outcome and leaves `out` untouched; other failures are returned as errors.
pub async fn run(
    client: &GithubClient,
    owner: &str,
    repo: &str,
    out: &mut impl Write,
) -> Result<Outcome> {
    match lookup(client, owner, repo).await {
        Ok(tag) => {
            log::debug!("{}/{}: latest release is {}", owner, repo, tag.value());
            writeln!(out, "{}", tag).context("Cannot write the tag name")?;
            Ok(Outcome::Found(tag))
        }
        Err(Error::RequestFailed { status }) => Ok(Outcome::RequestFailed { status }),
        Err(err) => Err(err)
            .with_context(|| format!("Cannot fetch the latest release of {}/{}", owner, repo)),
    }
}
