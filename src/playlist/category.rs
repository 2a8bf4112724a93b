/// Fixed category priority, in viewing order. Group titles are matched
/// case-insensitively; titles not in this list sort after all known ones.
pub const CATEGORY_ORDER: [&str; 9] = [
    "entertainment",
    "movies",
    "kids",
    "sports",
    "infotainment",
    "news",
    "devotional",
    "educational",
    "music",
];

/// Sort rank of a group title. Unknown titles rank past the end so a
/// stable sort keeps their relative input order.
pub fn priority(group_title: &str) -> usize {
    let lower = group_title.to_lowercase();
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == lower)
        .unwrap_or(CATEGORY_ORDER.len())
}
