use super::{handler::repository_handler::RepositoryHandler, response::ReleaseResponse, tag::Tag};
use crate::http::{Error, HttpClient};

pub const GITHUB_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    base_url: String,
    http: HttpClient,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Ok(GithubClient {
            base_url: base_url.into(),
            http: HttpClient::new()?,
        })
    }

    pub fn repo(
        &self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    /// Owner and repo are interpolated as given, without percent-encoding.
    pub fn latest_release_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases/latest", self.base_url, owner, repo)
    }

    pub(super) async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Tag, Error> {
        let uri = self.latest_release_url(owner, repo);

        let release = self
            .http
            .get_json::<ReleaseResponse>(&uri)
            .await?
            .collect();

        match release.tag_name {
            Some(tag_name) => Ok(Tag::new(tag_name)),
            None => Err(Error::MissingField { field: "tag_name" }),
        }
    }
}
