use std::future::Future;

use reqwest::{Client, StatusCode, Url};

use super::error::ApiError;
use super::types::Booking;

/// Connection settings for the booking service.
#[derive(Debug, Clone)]
pub struct ApiConfiguration {
    pub base_path: String,
    pub access_token: Option<String>,
}

impl ApiConfiguration {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// The booking service as seen by `BookingStore`.
pub trait BookingsApi: Send + Sync {
    fn get_booking(
        &self,
        booking_id: &str,
    ) -> impl Future<Output = Result<Booking, ApiError>> + Send;
}

/// `BookingsApi` over HTTP: `GET {base_path}/bookings/{booking_id}`.
#[derive(Debug, Clone)]
pub struct HttpBookingsApi {
    client: Client,
    configuration: ApiConfiguration,
}

impl HttpBookingsApi {
    pub fn new(configuration: ApiConfiguration) -> Self {
        Self::with_client(Client::new(), configuration)
    }

    pub fn with_client(client: Client, configuration: ApiConfiguration) -> Self {
        Self { client, configuration }
    }

    fn booking_url(&self, booking_id: &str) -> Result<Url, ApiError> {
        let base = &self.configuration.base_path;
        let mut url = Url::parse(base).map_err(|e| ApiError::InvalidBasePath(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidBasePath(base.clone()))?;
            segments.pop_if_empty().push("bookings").push(booking_id);
        }
        Ok(url)
    }
}

impl BookingsApi for HttpBookingsApi {
    async fn get_booking(&self, booking_id: &str) -> Result<Booking, ApiError> {
        let url = self.booking_url(booking_id)?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.configuration.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpBookingsApi {
        HttpBookingsApi::new(ApiConfiguration::new(base))
    }

    #[test]
    fn booking_url_appends_segments() {
        let url = api("http://localhost:8000").booking_url("b1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/bookings/b1");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let url = api("http://localhost:8000/api/").booking_url("b1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/bookings/b1");
    }

    #[test]
    fn booking_id_is_one_segment() {
        let url = api("http://localhost:8000").booking_url("a/b").unwrap();
        assert_eq!(url.path(), "/bookings/a%2Fb");
    }

    #[test]
    fn relative_base_path_is_rejected() {
        let err = api("/api").booking_url("b1").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBasePath(_)));
    }

    #[test]
    fn access_token_is_optional() {
        let config = ApiConfiguration::new("http://localhost").with_access_token("tok");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert!(ApiConfiguration::new("http://localhost").access_token.is_none());
    }
}
