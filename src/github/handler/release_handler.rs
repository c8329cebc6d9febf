use crate::{
    github::{github_client::GithubClient, tag::Tag},
    http::Error,
};

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn latest(&self) -> Result<Tag, Error> {
        self.client
            .get_latest_release(&self.owner, &self.repo)
            .await
    }
}
