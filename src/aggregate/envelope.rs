use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Remote HMAC metadata document: `{ "data": { "hdntl": { "value": "…" } } }`.
#[derive(Debug, Deserialize)]
pub struct HmacEnvelope {
    #[serde(default)]
    data: Option<HmacData>,
}

#[derive(Debug, Deserialize)]
struct HmacData {
    #[serde(default)]
    hdntl: Option<HdntlEntry>,
}

#[derive(Debug, Deserialize)]
struct HdntlEntry {
    #[serde(default)]
    value: Option<String>,
}

impl HmacEnvelope {
    pub fn parse(doc: Value) -> Result<Self> {
        serde_json::from_value(doc).map_err(|e| Error::InvalidShape {
            doc: "HMAC",
            reason: e.to_string(),
        })
    }

    /// Extract the hdntl cookie value. Absence at any nesting level is an
    /// error; the whole generation pass depends on this one value.
    pub fn hdntl_value(self) -> Result<String> {
        self.data
            .and_then(|d| d.hdntl)
            .and_then(|h| h.value)
            .ok_or(Error::InvalidShape {
                doc: "HMAC",
                reason: "missing data.hdntl.value".to_string(),
            })
    }
}

/// Remote channel metadata document: `{ "data": [...] }` where each entry is
/// either one channel object or a nested list of channel objects.
#[derive(Debug, Deserialize)]
pub struct ChannelEnvelope {
    data: Vec<ChannelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChannelEntry {
    // Group must come first so nested lists are not swallowed by Single.
    Group(Vec<Value>),
    Single(Value),
}

impl ChannelEnvelope {
    pub fn parse(doc: Value) -> Result<Self> {
        serde_json::from_value(doc).map_err(|e| Error::InvalidShape {
            doc: "channel",
            reason: e.to_string(),
        })
    }

    /// Collapse exactly one level of nesting, preserving order.
    pub fn flatten(self) -> Vec<Value> {
        let mut out = Vec::new();
        for entry in self.data {
            match entry {
                ChannelEntry::Group(items) => out.extend(items),
                ChannelEntry::Single(item) => out.push(item),
            }
        }
        out
    }
}
