use serde::Deserialize;
use serde_json::Value;

/// External channel shape. Every field is optional; a missing or mistyped
/// entry degrades to defaults instead of failing the batch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawChannel {
    pub id: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub logo: Option<String>,
    #[serde(rename = "initialUrl")]
    pub initial_url: Option<String>,
    pub license_url: Option<String>,
    pub manifest_headers: Option<serde_json::Map<String, Value>>,
    // Opaque passthrough fields; downstream players may inspect them.
    pub drm: Option<Value>,
    pub is_mpd: Option<Value>,
    pub kid_in_mpd: Option<Value>,
    pub hmac_required: Option<Value>,
    pub key_extracted: Option<Value>,
    pub pssh: Option<Value>,
    pub clearkeys_base64: Option<String>,
    pub licence1: Option<String>,
    pub licence2: Option<String>,
}

/// Normalized channel record. Built fresh per generation pass and held only
/// for the duration of one request.
#[derive(Debug, Clone)]
pub struct ChannelRecord {
    pub id: String,
    pub name: String,
    pub tvg_id: String,
    pub group_title: String,
    pub tvg_logo: String,
    pub stream_url: String,
    pub license_url: String,
    pub stream_headers: Option<String>,
    pub drm: Option<Value>,
    pub is_mpd: Option<Value>,
    pub kid_in_mpd: Option<Value>,
    pub hmac_required: Option<Value>,
    pub key_extracted: Option<Value>,
    pub pssh: Option<Value>,
    pub clearkey: Option<String>,
    /// The hdntl cookie value shared by every record of one pass.
    pub hma: String,
}

impl ChannelRecord {
    /// Apply the field-derivation rules to one raw channel, attaching the
    /// shared hdntl value.
    pub fn from_raw(raw: RawChannel, hma: &str) -> Self {
        let clearkey = non_empty(raw.clearkeys_base64).or_else(|| {
            match (non_empty(raw.licence1), non_empty(raw.licence2)) {
                (Some(l1), Some(l2)) => Some(format!("{l1}:{l2}")),
                _ => None,
            }
        });

        let stream_headers = raw.manifest_headers.map(|headers| {
            let user_agent = headers
                .get("User-Agent")
                .and_then(Value::as_str)
                .filter(|ua| !ua.is_empty())
                .map(str::to_string);
            match user_agent {
                Some(ua) => ua,
                None => Value::Object(headers).to_string(),
            }
        });

        Self {
            id: raw.id.clone().unwrap_or_default(),
            name: raw.title.unwrap_or_else(|| "Unknown Channel".to_string()),
            tvg_id: raw.id.unwrap_or_default(),
            group_title: raw.genre.unwrap_or_else(|| "Uncategorized".to_string()),
            tvg_logo: raw.logo.unwrap_or_default(),
            stream_url: raw.initial_url.unwrap_or_default(),
            license_url: raw.license_url.unwrap_or_default(),
            stream_headers,
            drm: raw.drm,
            is_mpd: raw.is_mpd,
            kid_in_mpd: raw.kid_in_mpd,
            hmac_required: raw.hmac_required,
            key_extracted: raw.key_extracted,
            pssh: raw.pssh,
            clearkey,
            hma: hma.to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(doc: Value) -> RawChannel {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn test_clearkey_prefers_base64() {
        let record = ChannelRecord::from_raw(
            raw(json!({ "clearkeys_base64": "X", "licence1": "A", "licence2": "B" })),
            "hma",
        );
        assert_eq!(record.clearkey.as_deref(), Some("X"));
    }

    #[test]
    fn test_clearkey_from_licence_pair() {
        let record =
            ChannelRecord::from_raw(raw(json!({ "licence1": "A", "licence2": "B" })), "hma");
        assert_eq!(record.clearkey.as_deref(), Some("A:B"));
    }

    #[test]
    fn test_clearkey_absent() {
        let record = ChannelRecord::from_raw(raw(json!({ "licence1": "A" })), "hma");
        assert_eq!(record.clearkey, None);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let record = ChannelRecord::from_raw(raw(json!({})), "hma");
        assert_eq!(record.id, "");
        assert_eq!(record.name, "Unknown Channel");
        assert_eq!(record.group_title, "Uncategorized");
        assert_eq!(record.tvg_logo, "");
        assert_eq!(record.stream_url, "");
        assert_eq!(record.stream_headers, None);
        assert_eq!(record.hma, "hma");
    }

    #[test]
    fn test_stream_headers_prefers_user_agent() {
        let record = ChannelRecord::from_raw(
            raw(json!({ "manifest_headers": { "User-Agent": "TiviMate", "Origin": "x" } })),
            "hma",
        );
        assert_eq!(record.stream_headers.as_deref(), Some("TiviMate"));
    }

    #[test]
    fn test_stream_headers_falls_back_to_full_map() {
        let record = ChannelRecord::from_raw(
            raw(json!({ "manifest_headers": { "Origin": "https://example.com" } })),
            "hma",
        );
        assert_eq!(
            record.stream_headers.as_deref(),
            Some(r#"{"Origin":"https://example.com"}"#)
        );
    }

    #[test]
    fn test_passthrough_fields_preserved() {
        let record = ChannelRecord::from_raw(
            raw(json!({ "drm": "widevine", "is_mpd": true, "pssh": "AAAA" })),
            "hma",
        );
        assert_eq!(record.drm, Some(json!("widevine")));
        assert_eq!(record.is_mpd, Some(json!(true)));
        assert_eq!(record.pssh, Some(json!("AAAA")));
        assert_eq!(record.kid_in_mpd, None);
    }
}
