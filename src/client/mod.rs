use crate::{
    config::Config,
    query::{self, Args, Selection},
};
use log::{debug, trace, warn};
use reqwest::{header, Client as ReqwestClient};
use serde::Serialize;
use std::time::Duration;
use url::Url;

mod account;
mod activity_log;
mod board;
mod board_view;
mod column;
mod error;
mod folder;
mod group;
mod item;
mod response;
mod subitem;
mod update;
mod workspace;

pub use account::AccountClient;
pub use activity_log::ActivityLogClient;
pub use board::BoardClient;
pub use board_view::BoardViewClient;
pub use column::ColumnClient;
pub use error::{ApiError, Error, ErrorKind, Result};
pub use folder::FolderClient;
pub use group::GroupClient;
pub use item::ItemClient;
pub use response::Response;
pub use subitem::SubitemClient;
pub use update::UpdateClient;
pub use workspace::WorkspaceClient;

// Constants
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const HEADER_API_VERSION: &str = "api-version";

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Config,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, replacing anything set so far
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn version<S: Into<String>>(mut self, version: S) -> Self {
        self.config.version = Some(version.into());
        self
    }

    pub fn open_timeout(mut self, timeout: Duration) -> Self {
        self.config.open_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let endpoint = Url::parse(&self.config.host)?;
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut headers = header::HeaderMap::new();

        if let Some(token) = &self.config.token {
            // monday.com expects the bare token, no `Bearer` prefix
            let mut value = header::HeaderValue::from_str(token).map_err(|e| e.to_string())?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        if let Some(version) = &self.config.version {
            headers.insert(
                HEADER_API_VERSION,
                header::HeaderValue::from_str(version).map_err(|e| e.to_string())?,
            );
        }

        let client = ReqwestClient::builder()
            .user_agent(&user_agent)
            .default_headers(headers)
            .connect_timeout(self.config.open_timeout())
            .timeout(self.config.read_timeout())
            .build()?;

        Ok(Client {
            endpoint,
            config: self.config,
            client,
        })
    }
}

/// Client for the monday.com GraphQL API.
///
/// Each resource (boards, items, columns, ...) is reached through an accessor
/// such as [`Client::boards`]. Requests that fail, either with a non-2xx status
/// or with an error payload in a 2xx response, come back as [`Error::Api`].
#[derive(Debug)]
pub struct Client {
    /// Parsed `config.host`, the GraphQL endpoint every request is posted to
    endpoint: Url,

    config: Config,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    /// Client with the default config and the given API token
    pub fn new<S: Into<String>>(token: S) -> Result<Self> {
        ClientBuilder::new().token(token).build()
    }

    pub fn with_config(config: Config) -> Result<Self> {
        ClientBuilder::new().config(config).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a GraphQL document and return the response if it succeeded.
    ///
    /// A transport failure (including a timeout) is [`Error::Reqwest`], an
    /// undecodable body is [`Error::Json`], and anything the API reports as a
    /// failure is classified into [`Error::Api`].
    pub async fn make_request(&self, document: &str) -> Result<Response> {
        debug!("monday request: {}", document);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphqlRequest { query: document })
            .send()
            .await?;

        let response = Response::from_reqwest(response).await?;
        debug!("monday response status: {}", response.status());
        trace!("monday response body: {}", response.body());

        self.process_response(response)
    }

    // monday.com can return 200 with errors in the body, so success is decided
    // by `Response::is_success` rather than the status.
    fn process_response(&self, response: Response) -> Result<Response> {
        if response.is_success() {
            return Ok(response);
        }

        let error = ApiError::from_response(response);
        warn!(
            "monday request failed: {} (code {}): {}",
            error.kind(),
            error.code(),
            error.message()
        );

        Err(error.into())
    }

    /// Run `query { <name>(<args>) { <selection> } }`
    pub async fn query(
        &self,
        name: &str,
        args: &Args,
        selection: &[Selection],
    ) -> Result<Response> {
        self.make_request(&query::query(name, args, selection)).await
    }

    /// Run `mutation { <name>(<args>) { <selection> } }`, without the selection
    /// block when `selection` is `None`
    pub async fn mutation(
        &self,
        name: &str,
        args: &Args,
        selection: Option<&[Selection]>,
    ) -> Result<Response> {
        self.make_request(&query::mutation(name, args, selection)).await
    }

    pub fn account(&self) -> AccountClient {
        AccountClient::new(self)
    }

    pub fn activity_logs(&self) -> ActivityLogClient {
        ActivityLogClient::new(self)
    }

    pub fn boards(&self) -> BoardClient {
        BoardClient::new(self)
    }

    pub fn board_views(&self) -> BoardViewClient {
        BoardViewClient::new(self)
    }

    pub fn columns(&self) -> ColumnClient {
        ColumnClient::new(self)
    }

    pub fn folders(&self) -> FolderClient {
        FolderClient::new(self)
    }

    pub fn groups(&self) -> GroupClient {
        GroupClient::new(self)
    }

    pub fn items(&self) -> ItemClient {
        ItemClient::new(self)
    }

    pub fn subitems(&self) -> SubitemClient {
        SubitemClient::new(self)
    }

    pub fn updates(&self) -> UpdateClient {
        UpdateClient::new(self)
    }

    pub fn workspaces(&self) -> WorkspaceClient {
        WorkspaceClient::new(self)
    }
}

#[cfg(test)]
mod test {
    use super::{Client, Error};
    use crate::config::{Config, DEFAULT_HOST};
    use std::time::Duration;

    #[test]
    fn builder_overrides_config() {
        let client = Client::builder()
            .config(Config::default())
            .token("abc")
            .version("2024-01")
            .read_timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        assert_eq!(client.config().token.as_deref(), Some("abc"));
        assert_eq!(client.config().version.as_deref(), Some("2024-01"));
        assert_eq!(client.config().read_timeout(), Duration::from_secs(3));
        assert_eq!(client.config().host, DEFAULT_HOST);
    }

    #[test]
    fn sub_second_timeouts() {
        let client = Client::builder()
            .read_timeout(Duration::from_millis(500))
            .open_timeout(Duration::from_millis(750))
            .build()
            .unwrap();

        assert_eq!(client.config().read_timeout(), Duration::from_millis(500));
        assert_eq!(client.config().open_timeout(), Duration::from_millis(750));
    }

    #[test]
    fn invalid_host() {
        let err = Client::builder().host("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn invalid_token() {
        let err = Client::new("bad\ntoken").unwrap_err();
        assert!(matches!(err, Error::Message(_)));
    }
}
