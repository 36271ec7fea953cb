//! HTTP client for the databank API.

use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::DatabankConfig;
use crate::core::dataset::Dataset;
use crate::error::{DatabankError, Result};

/// How an upload authenticates against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// A previously issued bearer token.
    Token(String),
    /// Login credentials, exchanged for a token before the upload.
    Login { email: String, password: String },
}

impl Credential {
    pub fn token<S: Into<String>>(token: S) -> Self {
        Self::Token(token.into())
    }

    pub fn login<S: Into<String>>(email: S, password: S) -> Self {
        Self::Login {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Outcome of an upload request that reached the server.
///
/// A rejection is an expected, caller-visible condition rather than an
/// error; transport and login failures are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// The databank accepted the dataset.
    Accepted,
    /// The databank answered with a non-success HTTP status.
    Rejected { status: u16 },
}

impl UploadStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Blocking client for the databank API.
#[derive(Debug, Clone)]
pub struct DatabankClient {
    config: DatabankConfig,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

impl DatabankClient {
    pub fn new(config: DatabankConfig) -> Self {
        Self { config }
    }

    /// Build a client against the base URL from the environment, falling
    /// back to the hosted service.
    pub fn from_env() -> Self {
        Self::new(DatabankConfig::default())
    }

    pub fn config(&self) -> &DatabankConfig {
        &self.config
    }

    fn http(&self) -> Result<HttpClient> {
        let http = HttpClient::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(http)
    }

    /// Exchange login credentials for an API access token.
    ///
    /// One blocking request, no retry. A non-success status fails with
    /// [`DatabankError::Auth`] carrying the status code; a success response
    /// without an `accessToken` field fails decoding.
    pub fn get_access_token(&self, email: &str, password: &str) -> Result<String> {
        let url = self.config.endpoint("/v1/auth/login");
        debug!(%url, "requesting access token");

        let response = self
            .http()?
            .post(&url)
            .form(&LoginRequest { email, password })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatabankError::Auth {
                status: status.as_u16(),
            });
        }

        let body: LoginResponse = response.json()?;
        Ok(body.access_token)
    }

    /// Upload a dataset to the databank.
    ///
    /// Resolves the credential to a bearer token first (a login failure is
    /// a hard error), serializes the dataset and POSTs it. A server
    /// response with a non-success status comes back as
    /// `Ok(UploadStatus::Rejected { .. })` so the caller decides what a
    /// rejection means.
    pub fn upload(&self, dataset: &Dataset, credential: &Credential) -> Result<UploadStatus> {
        let token = match credential {
            Credential::Token(token) => token.clone(),
            Credential::Login { email, password } => self.get_access_token(email, password)?,
        };

        let url = self.config.endpoint("/v1/datasets");
        debug!(
            %url,
            dataset = dataset.name(),
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "uploading dataset"
        );

        let response = self
            .http()?
            .post(&url)
            .bearer_auth(&token)
            .json(dataset)
            .send()?;

        let status = response.status();
        if status.is_success() {
            info!(dataset = dataset.name(), "dataset upload accepted");
            Ok(UploadStatus::Accepted)
        } else {
            warn!(
                dataset = dataset.name(),
                status = status.as_u16(),
                "dataset upload rejected"
            );
            Ok(UploadStatus::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
