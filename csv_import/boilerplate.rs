use regex::Regex;
use std::sync::LazyLock;

/// Greeting and work-hours phrases, longer variants before their prefixes so
/// "iyi çalışmalar dilerim" is consumed before the bare "iyi çalışmalar".
const PHRASES: [&str; 10] = [
    r"\bmerhaba\b",
    r"\biyi çalışmalar dilerim\b",
    r"\biyi çalışmalar\b",
    r"\bmesai saatleri içinde sorabilirsiniz\b",
    r"\bmesai saatlerinde sorabilirsiniz\b",
    r"\bmesai saatleri\b",
    r"\bçalışma saatleri içinde\b",
    r"\bçalışma saatlerinde\b",
    r"\bsize yardımcı olabilirim\b",
    r"\byardımcı olabilirim\b",
];

static PHRASE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PHRASES
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
});

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,;!?]+\s*$").unwrap());

/// Delete every boilerplate phrase occurrence anywhere in the text, then
/// collapse whitespace runs and strip trailing punctuation.
pub fn remove(text: &str) -> String {
    let mut cleaned = text.to_string();
    for re in PHRASE_RES.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    let cleaned = WS_RE.replace_all(&cleaned, " ");
    let cleaned = TRAILING_PUNCT_RE.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_greeting_anywhere() {
        let out = remove("Merhaba, nasıl yardımcı olabilirim size bugün?");
        assert_eq!(out, ", nasıl size bugün");
        let lower = out.to_lowercase();
        assert!(!lower.contains("merhaba"));
        assert!(!lower.contains("yardımcı olabilirim"));
    }

    #[test]
    fn removes_work_hours_phrases() {
        let out = remove("Sorularınızı mesai saatleri içinde sorabilirsiniz.");
        assert_eq!(out, "Sorularınızı");
    }

    #[test]
    fn longer_phrase_wins_over_prefix() {
        // "iyi çalışmalar dilerim" must go as a whole, not leave "dilerim"
        let out = remove("Kurulum tamam, iyi çalışmalar dilerim.");
        assert_eq!(out, "Kurulum tamam,");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(remove("MERHABA dünya"), "dünya");
    }

    #[test]
    fn whole_word_only() {
        // "merhabalar" is a different word and stays
        let out = remove("merhabalar herkese");
        assert_eq!(out, "merhabalar herkese");
    }

    #[test]
    fn collapses_whitespace_and_trailing_punctuation() {
        assert_eq!(remove("a   b\t c .!?"), "a b c");
        assert_eq!(remove("iç punkt. korunur, son gider..."), "iç punkt. korunur, son gider");
    }

    #[test]
    fn empty_input() {
        assert_eq!(remove(""), "");
        assert_eq!(remove("merhaba"), "");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Merhaba, lisans anahtarı gerekli. İyi çalışmalar.",
            "düz metin",
            "  boşluk   dolu   metin  ",
        ];
        for input in inputs {
            let once = remove(input);
            assert_eq!(remove(&once), once);
        }
    }
}
