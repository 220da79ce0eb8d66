//! Client connection.
//! Consists all websocket cofigurations.

use {
    super::{constants, error::RpcClientError},
    async_trait::async_trait,
    futures_util::stream::{SplitSink, SplitStream, StreamExt},
    log::{debug, warn},
    tokio::net::TcpStream,
    tokio_native_tls::native_tls,
    tokio_tungstenite::{
        tungstenite::{
            client::IntoClientRequest,
            handshake::client::Request,
            http::{header, HeaderValue},
            Message,
        },
        MaybeTlsStream, WebSocketStream,
    },
};

/// TLS or TCP Websocket connection connection.
pub type Websocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Dials websockets for the client. A client redials through the same
/// value when its connection is reopened.
#[async_trait]
pub trait RpcConn: Sized + Send + Sync {
    /// Creates a websocket connection and returns a websocket reader and a
    /// websocket write sink.
    async fn ws_split_stream(
        &self,
    ) -> Result<(SplitStream<Websocket>, SplitSink<Websocket, Message>), RpcClientError>;

    /// Websocket url dialed.
    fn url(&self) -> &str;

    fn disable_connect_on_new(&self) -> bool;
}

/// Describes the connection configuration parameters for the client.
#[derive(Debug, Clone)]
pub struct ConnConfig {
    /// Full websocket url, `ws://` or `wss://`, host, port and path.
    pub url: String,

    /// Username to authenticate to the RPC server. Basic authentication is
    /// only sent when either credential is set.
    pub user: String,

    /// Password to authenticate to the rpc server.
    pub password: String,

    /// PEM-encoded certificate added as a trusted root for `wss` urls. Empty
    /// uses the system roots only.
    pub certificates: String,

    /// Specifies that a websocket client connection should not be started
    /// when creating the client with `rpcclient::client::new`. Instead, the
    /// client is created and returned unconnected. `connect` method must be called
    /// to start the websocket.
    pub disable_connect_on_new: bool,
}

impl Default for ConnConfig {
    fn default() -> Self {
        ConnConfig {
            url: "ws://127.0.0.1:8546".to_string(),
            user: String::new(),
            password: String::new(),
            certificates: String::new(),
            disable_connect_on_new: false,
        }
    }
}

impl ConnConfig {
    /// Configuration dialing `url` with no credentials.
    pub fn with_url(url: impl Into<String>) -> Self {
        ConnConfig {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl RpcConn for ConnConfig {
    async fn ws_split_stream(
        &self,
    ) -> Result<(SplitStream<Websocket>, SplitSink<Websocket, Message>), RpcClientError> {
        let ws = self.dial_websocket().await?;

        // Split websocket to a sink which sends websocket messages to server and a stream which receives websocket messages.
        let (ws_send, ws_rcv) = ws.split();

        Ok((ws_rcv, ws_send))
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn disable_connect_on_new(&self) -> bool {
        self.disable_connect_on_new
    }
}

impl ConnConfig {
    /// Invokes a websocket stream to the node using optional TLS and basic authentication.
    async fn dial_websocket(&self) -> Result<Websocket, RpcClientError> {
        let request = self.handshake_request()?;

        let (host, port, secure) = match target(&request) {
            Some(target) => target,

            None => {
                warn!("Unsupported websocket url {}", self.url);
                return Err(RpcClientError::InvalidUrl(self.url.clone()));
            }
        };

        let stream = self.connect_stream(&host, port, secure).await?;

        match tokio_tungstenite::client_async(request, stream).await {
            Ok(websocket) => {
                debug!("Websocket handshake completed with {}", self.url);
                Ok(websocket.0)
            }

            Err(e) => {
                warn!("Error creating websocket handshake, error: {}", e);
                Err(RpcClientError::RpcHandshake(e))
            }
        }
    }

    /// Builds the upgrade request, attaching basic authentication if credentials are set.
    fn handshake_request(&self) -> Result<Request, RpcClientError> {
        let mut request = match self.url.as_str().into_client_request() {
            Ok(request) => request,

            Err(e) => {
                warn!("Error parsing websocket url {}, error: {}", self.url, e);
                return Err(RpcClientError::InvalidUrl(self.url.clone()));
            }
        };

        if self.user.is_empty() && self.password.is_empty() {
            return Ok(request);
        }

        let login = format!("{}:{}", self.user, self.password);
        let form = format!("Basic {}", base64::encode(login.as_bytes()));

        match HeaderValue::from_str(&form) {
            Ok(value) => {
                request.headers_mut().insert(header::AUTHORIZATION, value);
                Ok(request)
            }

            Err(e) => {
                warn!("Error building RPC authenticating request, error: {}.", e);
                Err(RpcClientError::RpcAuthenticationRequest)
            }
        }
    }

    /// Connects a tcp stream to `host:port`, upgrading it to TLS when `secure` is set.
    async fn connect_stream(
        &self,
        host: &str,
        port: u16,
        secure: bool,
    ) -> Result<MaybeTlsStream<TcpStream>, RpcClientError> {
        let tcp_stream = match TcpStream::connect((host, port)).await {
            Ok(tcp_stream) => tcp_stream,

            Err(e) => {
                warn!("Error connecting to tcp stream, error: {}", e);
                return Err(RpcClientError::TcpStream(e));
            }
        };

        if !secure {
            return Ok(MaybeTlsStream::Plain(tcp_stream));
        }

        let mut tls_connector_builder = native_tls::TlsConnector::builder();
        tls_connector_builder.min_protocol_version(native_tls::Protocol::Tlsv12.into());

        if !self.certificates.is_empty() {
            match native_tls::Certificate::from_pem(self.certificates.as_bytes()) {
                Ok(certificate) => {
                    tls_connector_builder.add_root_certificate(certificate);
                }

                Err(e) => {
                    warn!("Error parsing tls certificate, error: {}", e);
                    return Err(RpcClientError::WsTlsCertificate(e));
                }
            }
        }

        let wrapped_tls_stream = match tls_connector_builder.build() {
            Ok(tls_connector) => {
                tokio_native_tls::TlsConnector::from(tls_connector)
                    .connect(host, tcp_stream)
                    .await
            }

            Err(e) => {
                warn!("Error creating tls handshake, error: {}", e);
                return Err(RpcClientError::TlsHandshake(e));
            }
        };

        match wrapped_tls_stream {
            Ok(tls_stream) => Ok(MaybeTlsStream::NativeTls(tls_stream)),

            Err(e) => {
                warn!("Error creating tls stream, error: {}", e);
                Err(RpcClientError::TlsStream(e))
            }
        }
    }
}

/// Host, port and whether TLS is required for a `ws`/`wss` request.
fn target(request: &Request) -> Option<(String, u16, bool)> {
    let uri = request.uri();

    let (secure, default_port) = match uri.scheme_str() {
        Some("ws") => (false, constants::DEFAULT_WS_PORT),
        Some("wss") => (true, constants::DEFAULT_WSS_PORT),
        _ => return None,
    };

    let host = uri.host()?.trim_start_matches('[').trim_end_matches(']');

    Some((host.to_string(), uri.port_u16().unwrap_or(default_port), secure))
}
