use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Entities decoded after tag removal. Anything outside this table
/// (e.g. `&ccedil;`) passes through unchanged.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Remove tag-like constructs and decode the fixed entity set.
/// Tags are not validated as markup; any `<...>` span goes.
pub fn strip(text: &str) -> String {
    let mut cleaned = TAG_RE.replace_all(text, "").into_owned();
    for (entity, literal) in ENTITIES {
        cleaned = cleaned.replace(entity, literal);
    }
    cleaned.trim().to_string()
}
