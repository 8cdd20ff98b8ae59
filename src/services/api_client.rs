use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error as ThisError;
use url::Url;

use crate::config::api::ApiSettings;
use crate::models::common::ErrorBody;
use crate::models::game_match::{Match, NewMatch};
use crate::models::player::Player;
use crate::models::team::{NewTeam, Team};

#[derive(ThisError, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// The REST endpoints the front end talks to.
pub trait FantasyApi {
    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>, ApiError>> + Send;

    fn list_teams(&self) -> impl Future<Output = Result<Vec<Team>, ApiError>> + Send;

    fn list_matches(&self) -> impl Future<Output = Result<Vec<Match>, ApiError>> + Send;

    fn create_team(&self, team: &NewTeam) -> impl Future<Output = Result<Team, ApiError>> + Send;

    fn create_match(
        &self,
        new_match: &NewMatch,
    ) -> impl Future<Output = Result<Match, ApiError>> + Send;
}

#[derive(Clone, Debug)]
pub struct FantasyApiClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl FantasyApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&settings.base_url)?;
        // Url::join drops the last segment unless the path ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            timeout: settings.timeout(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_send_error)?;

        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_send_error)?;

        read_json(response).await
    }

    /// Health check for the backend
    pub async fn health_check(&self) -> bool {
        let url = match self.endpoint("backend_health") {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

fn map_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::NetworkError(e)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&error_text)
            .map(|body| body.message)
            .unwrap_or(error_text);
        tracing::error!("❌ Backend returned error {}: {}", status, message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::InvalidResponse(e.to_string())
        }
    })
}

impl FantasyApi for FantasyApiClient {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        self.get_json("players").await
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_json("teams").await
    }

    async fn list_matches(&self) -> Result<Vec<Match>, ApiError> {
        self.get_json("matches").await
    }

    async fn create_team(&self, team: &NewTeam) -> Result<Team, ApiError> {
        let created: Team = self.post_json("teams", team).await?;
        tracing::info!("✅ Created team '{}' ({})", created.name, created.id);
        Ok(created)
    }

    async fn create_match(&self, new_match: &NewMatch) -> Result<Match, ApiError> {
        let created: Match = self.post_json("matches", new_match).await?;
        tracing::info!("✅ Created match {}", created.id);
        Ok(created)
    }
}
