use crate::{aggregate::Aggregator, config::Config, fetch::SourceClient, shorten::Shortener};
use std::sync::{
    atomic::AtomicU64,
    Arc,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub aggregator: Aggregator,
    pub shortener: Option<Shortener>,
    pub visitors: Arc<AtomicU64>,
    pub server_base_url: url::Url,
}

impl AppState {
    pub fn new(config: Config, server_base_url: url::Url) -> Self {
        let client = SourceClient::new();
        let aggregator = Aggregator::new(client, &config);
        let shortener = config.shortener.clone().map(Shortener::new);

        Self {
            config: Arc::new(config),
            aggregator,
            shortener,
            visitors: Arc::new(AtomicU64::new(0)),
            server_base_url,
        }
    }
}
