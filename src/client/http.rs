use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response, Url,
};
use tracing::debug;

use crate::activity::{Activity, ActivityId, NewActivity};

use super::{ActivityCollaborator, ClientError};

pub const DEFAULT_SERVER_URL: &str = "https://nodeserver-v2.onrender.com/api";

/// [ActivityCollaborator] backed by the REST api:
///  - `GET /activities`
///  - `POST /activity`
///  - `PUT /activity/{id}`
pub struct HttpCollaborator {
    base_url: Url,
    client: Client,
}

impl HttpCollaborator {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: "url can't have a path".into(),
            });
        }
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base url. Each segment is percent-encoded, so ids containing
    /// `/`, `?` or `#` stay a single path segment.
    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// Sends a request and turns non 2xx statuses into [ClientError::Status].
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ActivityCollaborator for HttpCollaborator {
    async fn list_activities(&self) -> Result<Vec<Activity>, ClientError> {
        let response = self
            .execute(self.request(Method::GET, &["activities"]))
            .await?;
        Ok(response.json().await?)
    }

    async fn create_activity(&self, activity: &NewActivity) -> Result<(), ClientError> {
        self.execute(self.request(Method::POST, &["activity"]).json(activity))
            .await?;
        Ok(())
    }

    async fn close_activity(&self, id: &ActivityId) -> Result<(), ClientError> {
        self.execute(self.request(Method::PUT, &["activity", id.as_str()]))
            .await?;
        Ok(())
    }
}
