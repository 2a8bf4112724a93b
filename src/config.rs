/// Runtime configuration, read once at startup. Defaults match the public
/// upstream deployment so the service runs with no environment set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream JSON document carrying the hdntl cookie value.
    pub hmac_url: String,
    /// Upstream JSON document carrying the channel list.
    pub channels_url: String,
    /// Program-guide URL embedded in the playlist header.
    pub epg_url: String,
    /// Image-proxy prefix wrapped around each channel logo URL.
    pub logo_proxy_prefix: String,
    /// Activation flag for the playlist endpoint.
    pub ts_active: bool,
    /// URL shortener credentials; None disables shortening on the page.
    pub shortener: Option<ShortenerConfig>,
}

#[derive(Debug, Clone)]
pub struct ShortenerConfig {
    pub api_base: String,
    pub token: String,
}

const DEFAULT_HMAC_URL: &str = "https://clearkeys.vercel.app/tataplay/hmac.json";
const DEFAULT_CHANNELS_URL: &str = "https://clearkeys.vercel.app/tataplay/fetcher.json";
const DEFAULT_EPG_URL: &str =
    "https://raw.githubusercontent.com/mitthu786/tvepg/main/tataplay/epg.xml.gz";
const DEFAULT_LOGO_PROXY_PREFIX: &str =
    "https://mediaready.videoready.tv/tatasky-epg/image/fetch/f_auto,fl_lossy,q_auto,h_250,w_250/";
const DEFAULT_SHORTENER_API: &str = "https://api-ssl.bitly.com/v4/shorten";

impl Config {
    pub fn from_env() -> Self {
        let shortener = std::env::var("BITLY_API_KEY").ok().map(|token| ShortenerConfig {
            api_base: env_or("BITLY_API_BASE", DEFAULT_SHORTENER_API),
            token,
        });

        Self {
            hmac_url: env_or("UPSTREAM_HMAC_URL", DEFAULT_HMAC_URL),
            channels_url: env_or("UPSTREAM_CHANNELS_URL", DEFAULT_CHANNELS_URL),
            epg_url: env_or("EPG_URL", DEFAULT_EPG_URL),
            logo_proxy_prefix: env_or("LOGO_PROXY_PREFIX", DEFAULT_LOGO_PROXY_PREFIX),
            ts_active: env_flag("TS_ACTIVE", true),
            shortener,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => !(v == "0" || v.eq_ignore_ascii_case("false")),
        Err(_) => default,
    }
}
