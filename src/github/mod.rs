pub mod github_client;
mod handler;
mod response;
pub mod tag;

pub use github_client::{GithubClient, GITHUB_API_URL};
