//! Client layer: orchestrates validation, transport encoding and HTTP calls.

mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use url::Url;

pub use http::{
    BoxError, BoxFuture, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

use crate::domain::{
    BulkMessage, Message, Response, SearchNumberParams, SearchNumberResponse, SmsReportResponse,
    ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://api.infobip.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_USER_AGENT: &str = concat!("infobip-rs/", env!("CARGO_PKG_VERSION"));

const SINGLE_MESSAGE_PATH: &str = "sms/1/text/single";
const ADVANCED_MESSAGE_PATH: &str = "sms/1/text/advanced";
const AVAILABLE_NUMBERS_PATH: &str = "numbers/1/numbers/available";
const REPORTS_PATH: &str = "sms/1/reports";

#[derive(Clone, PartialEq, Eq)]
/// HTTP Basic credentials for the Infobip account.
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header.
    fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`InfobipClient`].
pub enum InfobipError {
    /// The payload failed validation; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    ///
    /// `status_line` reads like `500 Internal Server Error`. The body is kept
    /// verbatim (when not blank) and is never parsed.
    #[error("unexpected HTTP status: {status_line}")]
    HttpStatus {
        status: u16,
        status_line: String,
        body: Option<String>,
    },

    /// Response body could not be parsed as the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// Request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

#[derive(Clone)]
/// Builder for [`InfobipClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or
/// the HTTP transport itself.
pub struct InfobipClientBuilder {
    auth: BasicAuth,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for InfobipClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfobipClientBuilder")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl InfobipClientBuilder {
    /// Create a builder with the public Infobip base URL and a 5 second timeout.
    pub fn new(auth: BasicAuth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            transport: None,
        }
    }

    /// Override the base URL (e.g. your personal `https://xxxxx.api.infobip.com/`).
    ///
    /// A missing trailing `/` is added so endpoint paths land underneath it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Timeout applied to the entire request by the default transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send requests through a caller-provided transport instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`InfobipClient`].
    pub fn build(self) -> Result<InfobipClient, InfobipError> {
        let base_url = parse_base_url(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(|err| InfobipError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(InfobipClient {
            auth: self.auth,
            base_url,
            user_agent: self.user_agent,
            http,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}

#[derive(Clone)]
/// High-level Infobip SMS client.
///
/// This type orchestrates payload validation, JSON/query encoding and
/// response decoding. Every request is authenticated with HTTP Basic auth and
/// carries `Content-Type: application/json`, `Cache-Control: no-cache` and
/// the configured `User-Agent`.
pub struct InfobipClient {
    auth: BasicAuth,
    base_url: Url,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for InfobipClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfobipClient")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl InfobipClient {
    /// Create a client for the public Infobip base URL with default settings.
    ///
    /// For more customization, use [`InfobipClient::builder`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, InfobipError> {
        Self::builder(username, password).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> InfobipClientBuilder {
        InfobipClientBuilder::new(BasicAuth::new(username, password))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Send one message (to one or more recipients).
    ///
    /// Errors:
    /// - [`InfobipError::Validation`] if the message is rejected locally; nothing is sent,
    /// - [`InfobipError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`InfobipError::Parse`] when the body is not the expected JSON.
    pub async fn single_message(&self, message: &Message) -> Result<Response, InfobipError> {
        message
            .validate()
            .inspect_err(|err| tracing::debug!(%err, "message rejected before sending"))?;
        let body = crate::transport::encode_single_message_json(message)?;

        let response = self
            .execute(HttpMethod::Post, SINGLE_MESSAGE_PATH, Vec::new(), Some(body))
            .await?;

        crate::transport::decode_send_json_response(&response)
            .map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    /// Send several messages in one request.
    ///
    /// Messages are validated in order and the first failure is returned
    /// before anything is sent. Other errors as for [`InfobipClient::single_message`].
    pub async fn advanced_message(&self, bulk: &BulkMessage) -> Result<Response, InfobipError> {
        bulk.validate()
            .inspect_err(|err| tracing::debug!(%err, "bulk message rejected before sending"))?;
        let body = crate::transport::encode_bulk_message_json(bulk)?;

        let response = self
            .execute(
                HttpMethod::Post,
                ADVANCED_MESSAGE_PATH,
                Vec::new(),
                Some(body),
            )
            .await?;

        crate::transport::decode_send_json_response(&response)
            .map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    /// Search numbers available for purchase.
    pub async fn search_number(
        &self,
        params: &SearchNumberParams,
    ) -> Result<SearchNumberResponse, InfobipError> {
        let query = crate::transport::encode_search_number_query(params);

        let response = self
            .execute(HttpMethod::Get, AVAILABLE_NUMBERS_PATH, query, None)
            .await?;

        crate::transport::decode_search_number_json_response(&response)
            .map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    /// Fetch delivery reports for a sent message.
    pub async fn get_delivery_report(
        &self,
        message_id: &str,
    ) -> Result<SmsReportResponse, InfobipError> {
        let query = crate::transport::encode_delivery_report_query(message_id);

        let response = self
            .execute(HttpMethod::Get, REPORTS_PATH, query, None)
            .await?;

        crate::transport::decode_delivery_report_json_response(&response)
            .map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<String, InfobipError> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let request = HttpRequest {
            method,
            url: url.into(),
            headers: self.headers(),
            body,
        };

        tracing::debug!(?method, path, "sending Infobip request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(InfobipError::Transport)?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(?method, path, status = response.status, "Infobip request failed");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(InfobipError::HttpStatus {
                status: response.status,
                status_line: status_line(response.status),
                body,
            });
        }

        tracing::debug!(?method, path, status = response.status, "Infobip request succeeded");
        Ok(response.body)
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Authorization".to_owned(), self.auth.header_value()),
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Cache-Control".to_owned(), "no-cache".to_owned()),
            ("User-Agent".to_owned(), self.user_agent.clone()),
        ]
    }
}

fn status_line(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{Destination, ResponseMessage, ResponseStatus};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response: Result<HttpResponse, String>,
    }

    impl FakeTransport {
        fn new(status: u16, body: impl Into<String>) -> Self {
            Self::with_response(Ok(HttpResponse {
                status,
                body: body.into(),
            }))
        }

        fn failing(message: impl Into<String>) -> Self {
            Self::with_response(Err(message.into()))
        }

        fn with_response(response: Result<HttpResponse, String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response,
                })),
            }
        }

        fn last_request(&self) -> Option<HttpRequest> {
            self.state.lock().unwrap().requests.last().cloned()
        }

        fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    state.response.clone()
                };
                response.map_err(BoxError::from)
            })
        }
    }

    fn make_client(transport: FakeTransport) -> InfobipClient {
        InfobipClient::builder("foo", "bar")
            .base_url("https://example.invalid/")
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn valid_message() -> Message {
        Message::new("442071838750", "14155552671", "Foo bar")
    }

    #[tokio::test]
    async fn single_message_posts_json_with_basic_auth() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let response = client.single_message(&valid_message()).await.unwrap();
        assert_eq!(response, Response::default());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/sms/1/text/single");
        assert_eq!(request.header("Authorization"), Some("Basic Zm9vOmJhcg=="));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Cache-Control"), Some("no-cache"));
        assert_eq!(request.header("User-Agent"), Some(DEFAULT_USER_AGENT));

        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "from": "442071838750",
                "to": "14155552671",
                "text": "Foo bar"
            })
        );
    }

    #[tokio::test]
    async fn single_message_decodes_accepted_response() {
        let json = r#"{"messages": [{"to": "41793026727", "status": {"id": 0, "groupId": 0, "groupName": "ACCEPTED", "name": "MESSAGE_ACCEPTED", "description": "Message accepted"}, "smsCount": 1, "messageId": "2250be2d4219-3af1-78856-aabe-1362af1edfd2"}]}"#;
        let client = make_client(FakeTransport::new(200, json));

        let message = Message::new("company", "442071838750", "Foo bar");
        let response = client.single_message(&message).await.unwrap();
        assert_eq!(
            response.messages,
            vec![ResponseMessage {
                message_id: "2250be2d4219-3af1-78856-aabe-1362af1edfd2".to_owned(),
                to: "41793026727".to_owned(),
                status: ResponseStatus {
                    id: 0,
                    group_id: 0,
                    group_name: "ACCEPTED".to_owned(),
                    name: "MESSAGE_ACCEPTED".to_owned(),
                    description: "Message accepted".to_owned(),
                },
                sms_count: 1,
            }]
        );
    }

    #[tokio::test]
    async fn single_message_validation_short_circuits() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let err = client.single_message(&Message::default()).await.unwrap_err();
        assert!(matches!(
            err,
            InfobipError::Validation(ValidationError::NonAlphanumericFrom)
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn advanced_message_validation_short_circuits() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let bulk = BulkMessage::new(vec![Message::default()]);
        let err = client.advanced_message(&bulk).await.unwrap_err();
        assert!(matches!(
            err,
            InfobipError::Validation(ValidationError::NonAlphanumericFrom)
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn advanced_message_posts_to_advanced_endpoint() {
        let json = r#"{"bulkId": "BULK-1", "messages": [{"to": "41793026727", "messageId": "m-1", "smsCount": 1}, {"to": "41793026834", "messageId": "m-2", "smsCount": 2}]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let bulk = BulkMessage::new(vec![
            Message::to_destinations(
                "InfoSMS",
                vec![Destination::new("41793026727").with_message_id("m-1")],
                "one",
            ),
            Message::new("InfoSMS", "41793026834", "two"),
        ])
        .with_bulk_id("BULK-1");

        let response = client.advanced_message(&bulk).await.unwrap();
        assert_eq!(response.bulk_id.as_deref(), Some("BULK-1"));
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[1].sms_count, 2);

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/sms/1/text/advanced");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["bulkId"], "BULK-1");
        assert_eq!(body["messages"][0]["destinations"][0]["messageId"], "m-1");
    }

    #[tokio::test]
    async fn search_number_sends_only_set_params() {
        let json = r#"{"numberCount": 1, "numbers": [{"numberKey": "K1", "number": "447860041117", "country": "GB", "type": "VIRTUAL_LONG_NUMBER", "capabilities": ["SMS"]}]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let params = SearchNumberParams {
            capabilities: Some("SMS".to_owned()),
            country: Some("GB".to_owned()),
            limit: Some(10),
            ..Default::default()
        };
        let response = client.search_number(&params).await.unwrap();
        assert_eq!(response.number_count, 1);
        assert_eq!(response.numbers[0].number_type, "VIRTUAL_LONG_NUMBER");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://example.invalid/numbers/1/numbers/available?capabilities=SMS&country=GB&limit=10"
        );
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn search_number_without_params_has_no_query() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        client
            .search_number(&SearchNumberParams::default())
            .await
            .unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://example.invalid/numbers/1/numbers/available"
        );
    }

    #[tokio::test]
    async fn get_delivery_report_uses_message_id_query() {
        let json = r#"{"results": [{"messageId": "abc-123", "to": "41793026731", "price": {"pricePerMessage": 0.01, "currency": "EUR"}, "status": {"groupId": 3, "groupName": "DELIVERED"}}]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let response = client.get_delivery_report("abc-123").await.unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].price.currency, "EUR");
        assert_eq!(response.results[0].price.price_per_message.to_string(), "0.01");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://example.invalid/sms/1/reports?messageId=abc-123"
        );
        assert_eq!(request.header("Authorization"), Some("Basic Zm9vOmJhcg=="));
    }

    #[tokio::test]
    async fn get_delivery_report_encodes_message_id() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        client.get_delivery_report("a b&c").await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://example.invalid/sms/1/reports?messageId=a+b%26c"
        );
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_status_error() {
        let client = make_client(FakeTransport::new(500, r#"{"requestError": {}}"#));

        let err = client.get_delivery_report("abc-123").await.unwrap_err();
        match err {
            InfobipError::HttpStatus {
                status,
                status_line,
                body,
            } => {
                assert_eq!(status, 500);
                assert_eq!(status_line, "500 Internal Server Error");
                assert_eq!(body.as_deref(), Some(r#"{"requestError": {}}"#));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_failure_status_is_not_decoded() {
        let client = make_client(FakeTransport::new(401, "   "));

        let err = client.single_message(&valid_message()).await.unwrap_err();
        assert!(matches!(
            err,
            InfobipError::HttpStatus {
                status: 401,
                body: None,
                ..
            }
        ));
        assert_eq!(err.to_string(), "unexpected HTTP status: 401 Unauthorized");
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let client = make_client(FakeTransport::new(200, "{ not json }"));

        let err = client.single_message(&valid_message()).await.unwrap_err();
        assert!(matches!(err, InfobipError::Parse(_)));
    }

    #[tokio::test]
    async fn invalid_amount_maps_to_parse_error() {
        let json = r#"{"results": [{"price": {"pricePerMessage": "free"}}]}"#;
        let client = make_client(FakeTransport::new(200, json));

        let err = client.get_delivery_report("abc").await.unwrap_err();
        assert!(matches!(err, InfobipError::Parse(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let client = make_client(FakeTransport::failing("connection refused"));

        let err = client
            .search_number(&SearchNumberParams::default())
            .await
            .unwrap_err();
        match err {
            InfobipError::Transport(source) => {
                assert_eq!(source.to_string(), "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn builder_defaults() {
        let client = InfobipClient::new("foo", "bar").unwrap();
        assert_eq!(client.base_url(), "https://api.infobip.com/");
        assert_eq!(client.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn builder_appends_trailing_slash_to_base_url() {
        let client = InfobipClient::builder("foo", "bar")
            .base_url("https://xyz.api.infobip.com/api")
            .user_agent("my-app/1.0")
            .transport(Arc::new(FakeTransport::new(200, "{}")))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://xyz.api.infobip.com/api/");
        assert_eq!(client.user_agent, "my-app/1.0");
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_kept() {
        let transport = FakeTransport::new(200, "{}");
        let client = InfobipClient::builder("foo", "bar")
            .base_url("https://example.invalid/proxy")
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client.single_message(&valid_message()).await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://example.invalid/proxy/sms/1/text/single"
        );
    }

    #[test]
    fn builder_rejects_relative_base_url() {
        let result = InfobipClient::builder("foo", "bar")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(InfobipError::InvalidBaseUrl(_))));
    }

    #[test]
    fn debug_output_redacts_password() {
        let auth = BasicAuth::new("foo", "secret");
        let debug = format!("{auth:?}");
        assert!(debug.contains("foo"));
        assert!(!debug.contains("secret"));
        assert_eq!(auth.username(), "foo");
    }

    #[test]
    fn builder_debug_redacts_password() {
        let builder = InfobipClient::builder("foo", "secret")
            .base_url("https://xyz.api.infobip.com")
            .transport(Arc::new(FakeTransport::new(200, "{}")));
        let debug = format!("{builder:?}");
        assert!(debug.contains("foo"));
        assert!(debug.contains("https://xyz.api.infobip.com"));
        assert!(!debug.contains("secret"));

        let client = builder.build().unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("foo"));
        assert!(!debug.contains("secret"));
    }
}
