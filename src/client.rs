use reqwest::{
    Client, Method, Response, Url,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use serde::de::DeserializeOwned;
use statuspage_api_types::{Component, Incident};
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use crate::config::{LoadError, Settings};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error("Invalid component name")]
    UnknownComponent { fragment: String },
    #[error(
        "{value} is not a valid component status. Please pick one of the following: {valid}",
        valid = .valid.join(", ")
    )]
    InvalidStatus {
        value: String,
        valid: Vec<&'static str>,
    },
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error: {0}")]
    Server(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

/// Authenticated handle on one status page account.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
    pub account: String,
    pub token: String,
}

impl Ctx {
    pub fn new(account_url: &str, token: String) -> Result<Self, CliError> {
        let account = account_url.trim_end_matches('/').to_string();
        Url::parse(&account)?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            account,
            token,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("statuspage/", env!("CARGO_PKG_VERSION"))
    }

    pub fn auth_header(&self) -> Result<HeaderValue, CliError> {
        HeaderValue::from_str(&format!("OAuth {}", self.token))
            .map_err(|e| CliError::InvalidInput(e.to_string()))
    }

    pub fn url(&self, path: &str) -> Result<Url, CliError> {
        let joined = format!("{}/{}", self.account, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(CliError::Url)
    }

    /// Send one request relative to the account root and decode the JSON reply.
    ///
    /// `form` fields are sent url-encoded in the given order.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Option<&[(&str, &str)]>,
    ) -> Result<T, CliError> {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");

        let mut req = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header()?);
        if let Some(fields) = form {
            req = req
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encode_form(fields));
        }

        let resp = req.send().await?;
        Self::handle(resp).await
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, CliError> {
        let status = resp.status();
        let url = resp.url().clone();
        let bytes = resp.bytes().await?;
        debug!(%status, %url, bytes = bytes.len(), "received response");
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(CliError::Server(format!("status {status} body {text}")));
        }
        let val = serde_json::from_slice(&bytes)
            .map_err(|e| CliError::Server(format!("failed to parse body: {e}")))?;
        Ok(val)
    }

    pub async fn list_components(&self) -> Result<Vec<Component>, CliError> {
        self.send(Method::GET, "components.json", None).await
    }

    pub async fn list_incidents(&self) -> Result<Vec<Incident>, CliError> {
        self.send(Method::GET, "incidents.json", None).await
    }
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

pub fn build_ctx(settings: &Settings) -> Result<Ctx, CliError> {
    Ctx::new(&settings.account_url(), settings.token.clone())
}
