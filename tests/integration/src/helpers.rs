//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use seraya_api::{create_app, create_app_state, run_server};
use seraya_common::{hash_password, AppConfig};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{AdminTokenResponse, LoginRequest, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Argon2 is slow in debug builds, so hash the test password once
fn admin_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).unwrap_or_default())
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with generous rate limits
    pub async fn start() -> Result<Self> {
        Self::start_with(&[]).await
    }

    /// Start a test server, overriding configuration variables
    pub async fn start_with(overrides: &[(&str, &str)]) -> Result<Self> {
        let config = test_config(overrides)?;

        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Log in as the configured admin and return the bearer token
    pub async fn admin_token(&self) -> Result<String> {
        let response = self
            .post(
                "/api/admin/login",
                &LoginRequest {
                    username: ADMIN_USERNAME.to_string(),
                    password: ADMIN_PASSWORD.to_string(),
                },
            )
            .await?;
        let token: AdminTokenResponse = assert_json(response, StatusCode::OK).await?;
        Ok(token.token)
    }
}

/// Create a test configuration from `DATABASE_URL` plus fixed test values
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut vars: HashMap<String, String> = HashMap::from([
        ("JWT_SECRET".to_string(), "integration-test-secret".to_string()),
        ("ADMIN_USERNAME".to_string(), ADMIN_USERNAME.to_string()),
        ("ADMIN_PASSWORD_HASH".to_string(), admin_password_hash().to_string()),
        ("RATE_LIMIT_GENERAL_PER_MINUTE".to_string(), "100000".to_string()),
        ("RATE_LIMIT_LOGIN_PER_15_MINUTES".to_string(), "100000".to_string()),
        ("RATE_LIMIT_SUBMIT_PER_HOUR".to_string(), "100000".to_string()),
    ]);
    if let Ok(url) = std::env::var("DATABASE_URL") {
        vars.insert("DATABASE_URL".to_string(), url);
    }
    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
