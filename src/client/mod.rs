//! Client layer: authenticates once, then dispatches operations over HTTP GET.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiId, Credentials, GatewayError, Operation, ParsedResponse, Password, SessionId,
    UnknownOperation, User, ValidationError,
};
use crate::transport::{
    DecodeError, decode_plain_text_response, encode_request_url, parse_base_url,
};

const DEFAULT_BASE_URL: &str = "https://api.clickatell.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("clickatell-rs/", env!("CARGO_PKG_VERSION"));

/// Empty parameter set, for operations such as `ping` or `getbalance`.
pub const NO_PARAMS: [(&str, &str); 0] = [];

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ClickatellClient`].
///
/// Gateway-reported failures (`ERR` lines) are kept apart from everything that
/// went wrong on the way there: transport failures, HTTP status codes, and
/// bodies that are not `Key: Value` text.
pub enum ClickatellError {
    /// The gateway answered with an `ERR` line.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not made of `Key: Value` lines.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// `http/auth` succeeded but did not hand out a usable `OK` session token.
    #[error("authentication response carried no session id")]
    MissingSessionId,

    /// The operation name is not part of the endpoint table.
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    /// The configured base URL cannot be parsed or joined with an operation path.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ClickatellError {
    /// Gateway error code, when the failure came from an `ERR` line that carried one.
    pub fn gateway_code(&self) -> Option<&str> {
        match self {
            Self::Gateway(err) => err.code.as_deref(),
            _ => None,
        }
    }
}

impl From<DecodeError> for ClickatellError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Gateway(err) => Self::Gateway(err),
            other => Self::Parse(Box::new(other)),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ClickatellClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ClickatellClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ClickatellClientBuilder {
    /// Create a builder with the public gateway URL and a 30 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the gateway base URL (operation paths are joined beneath it).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP timeout applied to each entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the HTTP client and authenticate against `http/auth`.
    ///
    /// This performs exactly one request. On success the returned client holds
    /// the session token for all later calls.
    pub fn connect(self) -> Result<ClickatellClient, ClickatellError> {
        let base_url = parse_base_url(&self.base_url)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|err| ClickatellError::Transport(Box::new(err)))?;

        ClickatellClient::authenticate(
            &self.credentials,
            base_url,
            Arc::new(ReqwestTransport { client }),
        )
    }
}

#[derive(Clone)]
/// Authenticated Clickatell HTTP API client.
///
/// A value of this type always holds a session token: construction calls
/// `http/auth` and fails if the gateway refuses the credentials. Every later
/// call sends that token as `session_id`.
///
/// Calls block until the gateway answers or the timeout expires. The client is
/// cheap to clone and can be shared between threads; each in-flight request
/// gets its own connection from the underlying HTTP client.
pub struct ClickatellClient {
    base_url: Url,
    session_id: SessionId,
    http: Arc<dyn HttpTransport>,
}

impl ClickatellClient {
    /// Validate credentials and authenticate against the public gateway.
    ///
    /// Blank values are rejected; everything else is sent to `http/auth` as given.
    ///
    /// For more customization, use [`ClickatellClient::builder`].
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        api_id: impl Into<String>,
    ) -> Result<Self, ClickatellError> {
        Self::connect(Credentials::parse(user, password, api_id)?)
    }

    /// Authenticate against the public gateway with prebuilt credentials.
    pub fn connect(credentials: Credentials) -> Result<Self, ClickatellError> {
        ClickatellClientBuilder::new(credentials).connect()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> ClickatellClientBuilder {
        ClickatellClientBuilder::new(credentials)
    }

    fn authenticate(
        credentials: &Credentials,
        base_url: Url,
        http: Arc<dyn HttpTransport>,
    ) -> Result<Self, ClickatellError> {
        let params = vec![
            (User::FIELD.to_owned(), credentials.user().as_str().to_owned()),
            (
                Password::FIELD.to_owned(),
                credentials.password().as_str().to_owned(),
            ),
            (ApiId::FIELD.to_owned(), credentials.api_id().as_str().to_owned()),
        ];

        let response = execute(http.as_ref(), &base_url, Operation::Auth, None, &params)?;
        let session_id = response
            .single("OK")
            .and_then(|token| SessionId::new(token).ok())
            .ok_or(ClickatellError::MissingSessionId)?;

        tracing::debug!(user = credentials.user().as_str(), "authenticated with gateway");

        Ok(Self {
            base_url,
            session_id,
            http,
        })
    }

    /// Session token obtained at construction.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Call `operation` with the given parameters.
    ///
    /// The session token is added as `session_id`. Parameter names and values
    /// are passed through unchecked; the gateway enforces its own contract.
    ///
    /// Errors:
    /// - [`ClickatellError::Gateway`] when the gateway answers with `ERR`,
    /// - [`ClickatellError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`ClickatellError::Transport`] when the request could not be completed,
    /// - [`ClickatellError::Parse`] when the body is not `Key: Value` text.
    pub fn call<I, K, V>(
        &self,
        operation: Operation,
        params: I,
    ) -> Result<ParsedResponse, ClickatellError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<Vec<_>>();

        execute(
            self.http.as_ref(),
            &self.base_url,
            operation,
            Some(&self.session_id),
            &params,
        )
    }

    /// Call an operation by its symbolic name (`"sendmsg"`, `"routeCoverage"`, ...).
    ///
    /// Unknown names fail with [`ClickatellError::UnknownOperation`] before any
    /// request is made.
    pub fn call_by_name<I, K, V>(
        &self,
        name: &str,
        params: I,
    ) -> Result<ParsedResponse, ClickatellError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let operation = Operation::from_name(name)?;
        self.call(operation, params)
    }
}

macro_rules! operation_methods {
    ($($(#[$meta:meta])* $method:ident => $operation:ident;)*) => {
        impl ClickatellClient {
            $(
                $(#[$meta])*
                pub fn $method<I, K, V>(&self, params: I) -> Result<ParsedResponse, ClickatellError>
                where
                    I: IntoIterator<Item = (K, V)>,
                    K: Into<String>,
                    V: Into<String>,
                {
                    self.call(Operation::$operation, params)
                }
            )*
        }
    };
}

operation_methods! {
    /// `http/delmsg`: stop delivery of a queued message.
    delmsg => DelMsg;
    /// `http/getbalance`: remaining account credit.
    getbalance => GetBalance;
    /// `http/getmsgcharge`: charge and status of a sent message.
    getmsgcharge => GetMsgCharge;
    /// `http/ping`: keep the session alive.
    ping => Ping;
    /// `http/sendmsg`: send one message (`to`, `text`, and optionally `from`, ...).
    sendmsg => SendMsg;
    /// `http/token_pay`: redeem a voucher.
    token_pay => TokenPay;
    /// `http/querymsg`: delivery status of a sent message.
    querymsg => QueryMsg;
    /// `http_batch/startbatch`: open a batch with a message template.
    startbatch => StartBatch;
    /// `http_batch/senditem`: send one item of an open batch.
    senditem => SendItem;
    /// `http_batch/quicksend`: send the batch template to many recipients.
    quicksend => QuickSend;
    /// `http_batch/endbatch`: close a batch.
    endbatch => EndBatch;
    /// `utils/routeCoverage.php`: whether a number prefix can be reached.
    route_coverage => RouteCoverage;
    /// `mms/ind_push.php`: MMS notification push.
    ind_push => IndPush;
    /// `mms/si_push`: WAP service indication push.
    si_push => SiPush;
}

fn execute(
    http: &dyn HttpTransport,
    base_url: &Url,
    operation: Operation,
    session_id: Option<&SessionId>,
    params: &[(String, String)],
) -> Result<ParsedResponse, ClickatellError> {
    let url = encode_request_url(base_url, operation, session_id, params)?;

    tracing::debug!(
        operation = operation.name(),
        path = operation.path(),
        "dispatching gateway request"
    );

    let response = http.get(&url).map_err(ClickatellError::Transport)?;

    if !(200..=299).contains(&response.status) {
        if let Err(DecodeError::Gateway(err)) = decode_plain_text_response(&response.body) {
            return Err(ClickatellError::Gateway(err));
        }
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(ClickatellError::HttpStatus {
            status: response.status,
            body,
        });
    }

    let parsed = decode_plain_text_response(&response.body)?;

    tracing::debug!(
        operation = operation.name(),
        keys = parsed.len(),
        "decoded gateway response"
    );

    Ok(parsed)
}
