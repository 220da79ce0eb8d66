/// Time allowed for the close frame to be flushed before the socket is dropped.
pub(super) const CLOSE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// Default websocket port of a node when the url carries none.
pub(super) const DEFAULT_WS_PORT: u16 = 80;
/// Default secure websocket port.
pub(super) const DEFAULT_WSS_PORT: u16 = 443;
