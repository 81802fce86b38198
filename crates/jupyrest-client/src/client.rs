//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::api::{ContentsApi, KernelSpecsApi, KernelsApi, ServerApi, SessionsApi, TerminalsApi};
use crate::error::{Error, ErrorResponse, Result};

/// API root of a notebook server started with default settings.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/api";

/// Environment variable read by [`JupyterClient::from_env`].
pub const TOKEN_ENV_VAR: &str = "JUPYTERLAB_API_TOKEN";

/// Notebook server API client.
///
/// Cheap to clone; clones share one connection pool. Every method maps to
/// exactly one HTTP request.
///
/// # Example
///
/// ```no_run
/// use jupyrest_client::JupyterClient;
///
/// # async fn example() -> jupyrest_client::Result<()> {
/// let client = JupyterClient::builder()
///     .base_url("http://localhost:8888/api")
///     .auth_token("secret")
///     .build()?;
///
/// let kernels = client.kernels().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JupyterClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client carrying the auth and content-type headers.
    pub(crate) http: reqwest::Client,
    /// API root every request path is appended to.
    pub(crate) base_url: Url,
    /// Per-request timeout, if the caller configured one.
    pub(crate) timeout: Option<Duration>,
}

impl JupyterClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the default base URL, taking the token from
    /// `JUPYTERLAB_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::builder().token_env(TOKEN_ENV_VAR).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access version, status and identity endpoints.
    pub fn server(&self) -> ServerApi {
        ServerApi::new(self.clone())
    }

    /// Access the contents API.
    pub fn contents(&self) -> ContentsApi {
        ContentsApi::new(self.clone())
    }

    /// Access the sessions API.
    pub fn sessions(&self) -> SessionsApi {
        SessionsApi::new(self.clone())
    }

    /// Access the kernel specs API.
    pub fn kernel_specs(&self) -> KernelSpecsApi {
        KernelSpecsApi::new(self.clone())
    }

    /// Access the kernels API.
    pub fn kernels(&self) -> KernelsApi {
        KernelsApi::new(self.clone())
    }

    /// Access the terminals API.
    pub fn terminals(&self) -> TerminalsApi {
        TerminalsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    ///
    /// Each segment is percent-encoded on its own, so content paths with
    /// spaces or `?` and identifiers containing `/` reach the server intact.
    /// Empty, `.` and `..` segments are rejected: URL normalization would
    /// otherwise point the request at a different resource.
    pub(crate) fn url(&self, path: &ApiPath) -> Result<Url> {
        if let Some(bad) = path
            .segments
            .iter()
            .find(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(Error::InvalidPath(format!(
                "'{}' is not a valid segment of '{}'",
                bad, path
            )));
        }

        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!("base URL cannot carry a path: {}", self.inner.base_url))
            })?
            .pop_if_empty()
            .extend(&path.segments);
        Ok(url)
    }

    fn request(&self, method: Method, path: ApiPath) -> Result<reqwest::RequestBuilder> {
        let url = self.url(&path)?;
        debug!(%method, %url, "sending request");
        let request = self.inner.http.request(method, url);
        Ok(match self.inner.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        })
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: impl Into<ApiPath>) -> Result<T> {
        let response = self.execute(self.request(Method::GET, path.into())?).await?;
        Self::decode(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: impl Into<ApiPath>, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path.into())?.query(query);
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(self.with_body(Method::POST, path.into(), body)?).await?;
        Self::decode(response).await
    }

    /// Make a body-less POST request and decode the response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: impl Into<ApiPath>) -> Result<T> {
        let response = self.execute(self.request(Method::POST, path.into())?).await?;
        Self::decode(response).await
    }

    /// Make a body-less POST request whose response carries no content.
    pub(crate) async fn post_action(&self, path: impl Into<ApiPath>) -> Result<()> {
        self.execute(self.request(Method::POST, path.into())?).await?;
        Ok(())
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(self.with_body(Method::PATCH, path.into(), body)?).await?;
        Self::decode(response).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(self.with_body(Method::PUT, path.into(), body)?).await?;
        Self::decode(response).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: impl Into<ApiPath>) -> Result<()> {
        self.execute(self.request(Method::DELETE, path.into())?).await?;
        Ok(())
    }

    fn with_body<B>(&self, method: Method, path: ApiPath, body: &B) -> Result<reqwest::RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        Ok(self.request(method, path)?.body(body))
    }

    /// Send a request and reject any status outside 2xx.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "received response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::extract_error(response).await)
        }
    }

    /// Decode a JSON response body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Extract an error from a failed response.
    async fn extract_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        // Jupyter error documents look like {"message": ..., "reason": ...}
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.into_message(),
            Err(_) => None,
        };

        Error::Status {
            status,
            message: message.unwrap_or_else(|| format!("HTTP {}", status)),
        }
    }
}

/// Path below the API root, held as individual segments.
#[derive(Debug, Clone, Default)]
pub(crate) struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// A fixed route such as `kernels` or `kernelspecs`.
    pub(crate) fn new(route: &str) -> Self {
        Self::default().nested(route)
    }

    /// Append a `/`-separated path; empty segments are skipped.
    pub(crate) fn nested(mut self, path: &str) -> Self {
        self.segments.extend(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Append an opaque identifier as exactly one segment.
    pub(crate) fn id(mut self, id: &str) -> Self {
        self.segments.push(id.to_string());
        self
    }

    /// Append one fixed segment.
    pub(crate) fn action(mut self, action: &str) -> Self {
        self.segments.push(action.to_string());
        self
    }
}

impl From<&str> for ApiPath {
    fn from(route: &str) -> Self {
        Self::new(route)
    }
}

impl std::fmt::Display for ApiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Builder for creating a [`JupyterClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth_token: Option<String>,
    token_env: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            auth_token: None,
            token_env: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the API root (defaults to `http://localhost:8888/api`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the authentication token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Read the token from this environment variable when no explicit
    /// token was given.
    pub fn token_env(mut self, var: impl Into<String>) -> Self {
        self.token_env = Some(var.into());
        self
    }

    /// Set a per-request timeout. Without one, only transport defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    fn resolve_token(&self) -> Result<String> {
        if let Some(token) = self.auth_token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(token.clone());
        }

        if let Some(var) = &self.token_env {
            if let Ok(token) = std::env::var(var) {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            return Err(Error::Config(format!(
                "api token not defined, pass one explicitly or set {}",
                var
            )));
        }

        Err(Error::Config("api token not defined".to_string()))
    }

    /// Build the client.
    pub fn build(self) -> Result<JupyterClient> {
        let token = self.resolve_token()?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("Invalid auth token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("jupyrest-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(JupyterClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Never set in any test environment.
    const UNSET_VAR: &str = "JUPYREST_TEST_TOKEN_THAT_IS_NEVER_SET";

    #[test]
    fn test_builder_with_explicit_token() {
        let client = ClientBuilder::new().auth_token("faketoken").build().unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_token_wins_over_env() {
        let client = ClientBuilder::new()
            .auth_token("faketoken")
            .token_env(UNSET_VAR)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_requires_token() {
        let err = ClientBuilder::new().build().err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_env_token_is_config_error() {
        let err = ClientBuilder::new().token_env(UNSET_VAR).build().err().unwrap();
        match err {
            Error::Config(msg) => assert!(msg.contains(UNSET_VAR)),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_token_is_treated_as_missing() {
        let err = ClientBuilder::new().auth_token("").build().err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientBuilder::new()
            .auth_token("t")
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientBuilder::new()
            .auth_token("t")
            .base_url("mailto:someone@example.com")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8888/api")
            .auth_token("t")
            .build()
            .unwrap();

        let url = client.url(&"kernels".into()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api/kernels");

        let url = client.url(&"/kernels/abc/restart".into()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api/kernels/abc/restart");

        let url = client.url(&"".into()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api");
    }

    #[test]
    fn test_url_building_with_trailing_slash_base() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8888/api/")
            .auth_token("t")
            .build()
            .unwrap();

        let url = client.url(&"sessions".into()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api/sessions");
    }

    #[test]
    fn test_url_building_encodes_segments() {
        let client = ClientBuilder::new().auth_token("t").build().unwrap();

        let url = client.url(&"contents/my dir/what?.txt".into()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8888/api/contents/my%20dir/what%3F.txt"
        );
    }

    #[test]
    fn test_url_building_rejects_dot_segments() {
        let client = ClientBuilder::new().auth_token("t").build().unwrap();

        for path in ["contents/a/../b.txt", "contents/..", "contents/./b.txt"] {
            let err = client.url(&path.into()).unwrap_err();
            assert!(matches!(err, Error::InvalidPath(_)), "{path}: {err}");
        }

        // Dots inside a name are fine.
        let url = client.url(&"contents/..hidden/a.b.txt".into()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api/contents/..hidden/a.b.txt");
    }

    #[test]
    fn test_url_building_keeps_identifier_as_one_segment() {
        let client = ClientBuilder::new().auth_token("t").build().unwrap();

        let url = client.url(&ApiPath::new("kernels").id("a/b")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api/kernels/a%2Fb");

        let url = client
            .url(&ApiPath::new("kernels").id("abc").action("restart"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8888/api/kernels/abc/restart");

        for id in ["", ".", ".."] {
            let err = client.url(&ApiPath::new("kernels").id(id)).unwrap_err();
            assert!(matches!(err, Error::InvalidPath(_)), "{id:?}: {err}");
        }
    }
}
