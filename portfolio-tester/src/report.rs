use anyhow::Result;
use colored::Colorize;
use portfolio_i18n::{ConsistencyReport, Language, LeafShape, Translation, TranslationStore};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub key_counts: BTreeMap<Language, usize>,
    #[serde(flatten)]
    pub report: ConsistencyReport,
}

impl CheckSummary {
    #[must_use]
    pub fn collect(store: &TranslationStore, reference: Language) -> Self {
        let key_counts = Language::ALL
            .into_iter()
            .map(|lang| (lang, store.leaf_keys(lang).len()))
            .collect();
        Self {
            key_counts,
            report: store.check_consistency(reference),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Resolution {
    pub key: String,
    pub language: Language,
    pub found: bool,
    pub value: Translation,
}

pub fn write_check_console(out: &mut dyn Write, summary: &CheckSummary) -> Result<()> {
    writeln!(out, "{}", "📚 Catalog consistency".bright_cyan().bold())?;
    writeln!(out, "Reference language: {}", summary.report.reference)?;
    for (lang, count) in &summary.key_counts {
        writeln!(out, "  {lang}: {count} keys")?;
    }
    if summary.report.is_consistent() {
        writeln!(out, "{}", "✅ catalogs are consistent".green())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ {} defect(s)", summary.report.defects.len()).red()
        )?;
        for defect in &summary.report.defects {
            writeln!(out, "  - {defect}")?;
        }
    }
    Ok(())
}

pub fn write_keys_console(
    out: &mut dyn Write,
    keys: &BTreeMap<Language, BTreeMap<String, LeafShape>>,
) -> Result<()> {
    for (lang, entries) in keys {
        writeln!(out, "{}", format!("[{lang}]").bright_cyan().bold())?;
        for (key, shape) in entries {
            writeln!(out, "  {key:40} {shape}")?;
        }
    }
    Ok(())
}

pub fn write_resolution_console(out: &mut dyn Write, resolution: &Resolution) -> Result<()> {
    let status = if resolution.found {
        "✅ FOUND".green()
    } else {
        "❌ MISSING".red()
    };
    writeln!(out, "{status} {} [{}]", resolution.key, resolution.language)?;
    match &resolution.value {
        Translation::Text(text) => writeln!(out, "  {text}")?,
        Translation::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                writeln!(out, "  {}. {item}", idx + 1)?;
            }
        }
    }
    Ok(())
}

pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_check_lists_defects() {
        colored::control::set_override(false);
        let store = TranslationStore::from_catalogs([
            (Language::It, r#"{"a":"x"}"#),
            (Language::En, r#"{"a":"x","b":["y"]}"#),
        ])
        .unwrap();
        let summary = CheckSummary::collect(&store, Language::En);
        let mut buf = Vec::new();
        write_check_console(&mut buf, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 defect(s)"));
        assert!(text.contains("it: missing \"b\""));
        assert!(text.contains("en: 2 keys"));
    }

    #[test]
    fn json_check_flattens_report() {
        let summary = CheckSummary::collect(TranslationStore::builtin(), Language::En);
        let mut buf = Vec::new();
        write_json(&mut buf, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["reference"], "en");
        assert_eq!(value["defects"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["key_counts"]["it"], value["key_counts"]["en"]);
    }

    #[test]
    fn console_resolution_numbers_list_items() {
        colored::control::set_override(false);
        let resolution = Resolution {
            key: "k".into(),
            language: Language::En,
            found: true,
            value: Translation::List(vec!["a".into(), "b".into()]),
        };
        let mut buf = Vec::new();
        write_resolution_console(&mut buf, &resolution).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("FOUND k [en]"));
        assert!(text.contains("  2. b"));
    }
}
