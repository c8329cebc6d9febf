use serde::Deserialize;

/// Only `tag_name` is read; every other field of the release object is ignored.
/// A `null` tag is treated the same as a missing one.
#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    #[serde(default)]
    pub tag_name: Option<String>,
}
