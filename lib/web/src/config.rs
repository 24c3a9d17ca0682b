use event_search::EndpointConfig;

/// The address the server listens on when nothing else is configured.
pub const DEFAULT_BIND: &str = "localhost:8000";

/// Holds the configuration for an event search web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// The SPARQL endpoint searches are evaluated against.
    pub endpoint: EndpointConfig,
    /// Whether CORS is enabled.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
            endpoint: EndpointConfig::default(),
            cors: false,
        }
    }
}
