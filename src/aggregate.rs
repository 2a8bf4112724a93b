pub mod channel;
pub mod envelope;

pub use channel::{ChannelRecord, RawChannel};
pub use envelope::{ChannelEnvelope, HmacEnvelope};

use crate::{config::Config, fetch::SourceClient, Result};
use serde_json::Value;

/// Fetches the two upstream metadata documents and merges them into
/// normalized channel records.
#[derive(Clone)]
pub struct Aggregator {
    client: SourceClient,
    hmac_url: String,
    channels_url: String,
}

impl Aggregator {
    pub fn new(client: SourceClient, config: &Config) -> Self {
        Self {
            client,
            hmac_url: config.hmac_url.clone(),
            channels_url: config.channels_url.clone(),
        }
    }

    /// Fetch both documents and build the merged record list.
    ///
    /// The two fetches are independent and run concurrently. A failure of
    /// either is returned as an error; the caller decides whether to
    /// degrade to an empty playlist.
    pub async fn fetch_records(&self) -> Result<Vec<ChannelRecord>> {
        let (hmac_doc, channel_doc) = tokio::join!(
            self.client.fetch_json(&self.hmac_url),
            self.client.fetch_json(&self.channels_url),
        );

        let hma = HmacEnvelope::parse(hmac_doc?)?.hdntl_value()?;
        let entries = ChannelEnvelope::parse(channel_doc?)?.flatten();

        tracing::debug!("Merged {} channel entries", entries.len());

        Ok(build_records(&hma, entries))
    }
}

/// Merge step: normalize each flattened entry and broadcast the shared
/// hdntl value to every record. Order follows flattening order.
pub fn build_records(hma: &str, entries: Vec<Value>) -> Vec<ChannelRecord> {
    entries
        .into_iter()
        .map(|entry| {
            let raw: RawChannel = serde_json::from_value(entry).unwrap_or_default();
            ChannelRecord::from_raw(raw, hma)
        })
        .collect()
}
