use serde::Deserialize;

/// Query parameters for the /api/getM3u endpoint. Player apps send these
/// for historical reasons; playlist generation ignores them.
#[derive(Debug, Deserialize)]
pub struct PlaylistParams {
    #[serde(default)]
    pub sid: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub sname: Option<String>,

    #[serde(default)]
    pub tkn: Option<String>,
}
