pub mod category;

use crate::aggregate::ChannelRecord;
use std::fmt::Write;

/// Serialize channel records into the extended M3U dialect understood by
/// the downstream player apps. Pure and total; empty input yields a
/// header-only document. Line layout is a compatibility contract, byte
/// for byte.
pub fn format_playlist(
    records: &[ChannelRecord],
    epg_url: &str,
    logo_proxy_prefix: &str,
) -> String {
    let mut sorted: Vec<&ChannelRecord> = records.iter().collect();
    // sort_by_key is stable; unknown categories keep their input order.
    sorted.sort_by_key(|r| category::priority(&r.group_title));

    let mut out = String::new();
    let _ = writeln!(out, "#EXTM3U x-tvg-url=\"{epg_url}\"");
    out.push('\n');

    for record in sorted {
        // A missing clearkey is embedded as the literal text `null`,
        // matching what the player apps already tolerate.
        let clearkey = record.clearkey.as_deref().unwrap_or("null");

        let _ = writeln!(
            out,
            "#EXTINF:-1 tvg-id=\"{}\" group-title=\"{}\", tvg-logo=\"{}{}\", {}",
            record.id, record.group_title, logo_proxy_prefix, record.tvg_logo, record.name
        );
        out.push_str("#KODIPROP:inputstream.adaptive.license_type=clearkey\n");
        let _ = writeln!(out, "#KODIPROP:inputstream.adaptive.license_key={clearkey}");
        out.push_str("#EXTVLCOPT:http-user-agent=Mozilla/5.0\n");
        let _ = writeln!(out, "#EXTHTTP:{{\"cookie\":\"{}\"}}", record.hma);
        let _ = writeln!(out, "{}|cookie:{}", record.stream_url, record.hma);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, group_title: &str) -> ChannelRecord {
        ChannelRecord {
            id: id.to_string(),
            name: format!("Channel {id}"),
            tvg_id: id.to_string(),
            group_title: group_title.to_string(),
            tvg_logo: format!("{id}.png"),
            stream_url: format!("https://cdn.example.com/{id}/master.mpd"),
            license_url: String::new(),
            stream_headers: None,
            drm: None,
            is_mpd: None,
            kid_in_mpd: None,
            hmac_required: None,
            key_extracted: None,
            pssh: None,
            clearkey: Some("a1:b2".to_string()),
            hma: "hdntl=exp=1~hmac=f00".to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let out = format_playlist(&[], "https://epg.example.com/epg.xml.gz", "P/");
        assert_eq!(out, "#EXTM3U x-tvg-url=\"https://epg.example.com/epg.xml.gz\"\n\n");
    }

    #[test]
    fn test_sorts_by_category_priority() {
        let records = vec![
            record("1", "Sports"),
            record("2", "News"),
            record("3", "Entertainment"),
        ];
        let out = format_playlist(&records, "E", "P/");
        let order: Vec<_> = out
            .lines()
            .filter(|l| l.starts_with("#EXTINF"))
            .map(|l| l.split("group-title=\"").nth(1).unwrap().split('"').next().unwrap())
            .collect();
        assert_eq!(order, ["Entertainment", "Sports", "News"]);
    }

    #[test]
    fn test_unknown_categories_keep_input_order() {
        let records = vec![
            record("1", "Regional"),
            record("2", "Music"),
            record("3", "Shopping"),
            record("4", "Regional"),
        ];
        let out = format_playlist(&records, "E", "P/");
        let ids: Vec<_> = out
            .lines()
            .filter(|l| l.starts_with("#EXTINF"))
            .map(|l| l.split("tvg-id=\"").nth(1).unwrap().split('"').next().unwrap())
            .collect();
        // Music is a known category; the unlisted three stay in input order.
        assert_eq!(ids, ["2", "1", "3", "4"]);
    }

    #[test]
    fn test_block_layout_is_byte_exact() {
        let mut r = record("101", "Sports");
        r.name = "Star Sports".to_string();
        r.tvg_logo = "logo.png".to_string();
        r.stream_url = "https://s.example.com/m.mpd".to_string();
        r.hma = "hdntl=x".to_string();
        r.clearkey = Some("k1:k2".to_string());

        let out = format_playlist(std::slice::from_ref(&r), "E", "P/");
        assert_eq!(
            out,
            "#EXTM3U x-tvg-url=\"E\"\n\
             \n\
             #EXTINF:-1 tvg-id=\"101\" group-title=\"Sports\", tvg-logo=\"P/logo.png\", Star Sports\n\
             #KODIPROP:inputstream.adaptive.license_type=clearkey\n\
             #KODIPROP:inputstream.adaptive.license_key=k1:k2\n\
             #EXTVLCOPT:http-user-agent=Mozilla/5.0\n\
             #EXTHTTP:{\"cookie\":\"hdntl=x\"}\n\
             https://s.example.com/m.mpd|cookie:hdntl=x\n\
             \n"
        );
    }

    #[test]
    fn test_missing_clearkey_embeds_literal_null() {
        let mut r = record("1", "Movies");
        r.clearkey = None;
        let out = format_playlist(std::slice::from_ref(&r), "E", "P/");
        assert!(out.contains("#KODIPROP:inputstream.adaptive.license_key=null\n"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let records = vec![record("1", "Regional"), record("2", "Kids")];
        let a = format_playlist(&records, "E", "P/");
        let b = format_playlist(&records, "E", "P/");
        assert_eq!(a, b);
    }
}
