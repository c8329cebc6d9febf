use super::Error;

use serde::de::DeserializeOwned;

const STATUS_OK: u16 = 200;

#[derive(Debug)]
pub struct Response<T> {
    pub payload: T,
}

impl<T> Response<T>
where
    T: DeserializeOwned,
{
    /// Accepts exactly `200 OK`; any other status, redirects and other 2xx
    /// codes included, is a `RequestFailed`. The body is read to the end
    /// before it is decoded.
    pub async fn from_reqwest(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status().as_u16();
        log::debug!("response status: {}", status);

        if status != STATUS_OK {
            return Err(Error::RequestFailed { status });
        }

        let text = value
            .text()
            .await
            .map_err(|cause| Error::NetworkError { cause })?;

        let payload =
            serde_json::from_str::<T>(&text).map_err(|cause| Error::DecodeError { cause })?;

        Ok(Response { payload })
    }

    pub fn collect(self) -> T {
        self.payload
    }
}
