use clap::{builder::NonEmptyStringValueParser, Parser};
use std::ffi::OsString;

const LEGACY_USER_FLAG: &str = "-user";

/// Get tagname of latest GitHub release for a repository
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub Repository
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub repo: String,

    /// GitHub Username (`-user` is accepted as well)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub user: String,
}

impl Cli {
    /// Parses `args`, first rewriting the single-dash `-user` form to `--user`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(args.into_iter().map(Into::into).map(legacy_user_flag))
    }
}

fn legacy_user_flag(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(flag) if flag == LEGACY_USER_FLAG => OsString::from("--user"),
        Some(flag) => match flag.strip_prefix(LEGACY_USER_FLAG) {
            Some(value) if value.starts_with('=') => OsString::from(format!("--user{}", value)),
            _ => arg,
        },
        None => arg,
    }
}
