use serde::Serialize;
use serde_json::Value;

use crate::boilerplate;
use crate::keywords;
use crate::report::RunReport;
use crate::store::SourceRow;

/// Category assigned to every imported row.
pub const CATEGORY_FAQ: &str = "FAQ";

/// One knowledge-base record as persisted in the collection file.
#[derive(Debug, Clone, Serialize)]
pub struct KbEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub summary: String,
    pub category: String,
    pub keywords: Vec<String>,
}

/// Build entries for every qualifying source row.
///
/// Ids are `max_id` plus the 1-based source row position, so a disqualified
/// row leaves a gap rather than shifting later ids. The stored content keeps
/// any markup; only keyword extraction strips it.
pub fn build_batch(rows: &[SourceRow], max_id: i64, report: &mut RunReport) -> Vec<KbEntry> {
    let mut batch = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let title = row.title.trim();
        let content = row.content.trim();
        if title.is_empty() || content.is_empty() {
            report.record_skip();
            continue;
        }

        let cleaned = boilerplate::remove(content);
        let keyword_list = keywords::extract(&cleaned);
        report.record_row(content.len(), cleaned.len());

        batch.push(KbEntry {
            id: max_id + idx as i64 + 1,
            title: title.to_string(),
            content: cleaned,
            images: Vec::new(),
            summary: title.to_string(),
            category: CATEGORY_FAQ.to_string(),
            keywords: keyword_list,
        });
    }
    batch
}

/// Append the batch onto the loaded collection.
pub fn merge_into(collection: &mut Vec<Value>, batch: &[KbEntry]) -> serde_json::Result<()> {
    for entry in batch {
        collection.push(serde_json::to_value(entry)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, content: &str) -> SourceRow {
        SourceRow {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn builds_entry_from_qualifying_row() {
        let rows = vec![row(
            "Kurulum",
            "Merhaba, kurulum için lisans anahtarı gerekli. İyi çalışmalar.",
        )];
        let mut report = RunReport::default();
        let batch = build_batch(&rows, 42, &mut report);

        assert_eq!(batch.len(), 1);
        let entry = &batch[0];
        assert_eq!(entry.id, 43);
        assert_eq!(entry.title, "Kurulum");
        assert_eq!(entry.summary, "Kurulum");
        assert_eq!(entry.category, "FAQ");
        assert!(entry.images.is_empty());
        assert!(!entry.content.to_lowercase().contains("merhaba"));
        assert!(entry.keywords.contains(&"kurulum".to_string()));
        assert!(entry.keywords.contains(&"lisans".to_string()));
        assert!(!entry.keywords.contains(&"merhaba".to_string()));
        assert!(!entry.keywords.contains(&"için".to_string()));
    }

    #[test]
    fn skips_rows_missing_title_or_content() {
        let rows = vec![
            row("", "içerik var"),
            row("Başlık", ""),
            row("   ", "   "),
            row("Geçerli", "gerçek içerik"),
        ];
        let mut report = RunReport::default();
        let batch = build_batch(&rows, 0, &mut report);

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].title, "Geçerli");
        assert_eq!(report.rows_skipped, 3);
    }

    #[test]
    fn ids_follow_source_row_position() {
        let rows = vec![
            row("Bir", "ilk içerik"),
            row("", "başlıksız"),
            row("Üç", "üçüncü içerik"),
        ];
        let mut report = RunReport::default();
        let batch = build_batch(&rows, 10, &mut report);

        // skipped middle row leaves an id gap
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, 11);
        assert_eq!(batch[1].id, 13);
    }

    #[test]
    fn content_keeps_markup_but_keywords_do_not() {
        let rows = vec![row("Fiyat", "<b>fiyat</b> listesi fiyat bilgisi")];
        let mut report = RunReport::default();
        let batch = build_batch(&rows, 0, &mut report);

        assert!(batch[0].content.contains("<b>"));
        assert!(batch[0].keywords.contains(&"fiyat".to_string()));
        assert!(!batch[0].keywords.iter().any(|k| k.contains('<')));
    }

    #[test]
    fn merge_appends_in_order() {
        let mut collection = vec![serde_json::json!({"id": 1, "title": "Mevcut"})];
        let rows = vec![row("Yeni", "yeni içerik")];
        let mut report = RunReport::default();
        let batch = build_batch(&rows, 1, &mut report);

        merge_into(&mut collection, &batch).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection[1]["id"], 2);
        assert_eq!(collection[1]["title"], "Yeni");
        assert_eq!(collection[1]["category"], "FAQ");
    }
}
