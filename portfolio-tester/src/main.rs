mod output;
mod report;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use portfolio_i18n::{
    FALLBACK_LANGUAGE, Language, LanguageContext, MemoryStore, Translation, TranslationStore,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use output::OutputTarget;
use report::{CheckSummary, Resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "portfolio-tester", version)]
#[command(about = "Lint the bundled translation catalogs and resolve keys")]
struct Args {
    /// Compare every catalog against the fallback language (default action)
    #[arg(long, conflicts_with_all = ["keys", "resolve"])]
    check: bool,

    /// List every dotted key with its shape
    #[arg(long, conflicts_with = "resolve")]
    keys: bool,

    /// Resolve one dotted key, e.g. `projects.booleanFlix.features`
    #[arg(long, value_name = "KEY")]
    resolve: Option<String>,

    /// Locale tag to resolve under (`it`, `en-US`, ...); unsupported tags fall back
    #[arg(long, default_value = "en")]
    lang: String,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let store = TranslationStore::builtin();
    let mut out = OutputTarget::new(args.output.clone())?;

    let ok = if let Some(key) = args.resolve.as_deref() {
        run_resolve(&args, key, &mut out)?
    } else if args.keys {
        run_keys(&args, store, &mut out)?
    } else {
        run_check(&args, store, &mut out)?
    };
    out.flush()?;

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run_check(args: &Args, store: &TranslationStore, out: &mut dyn Write) -> Result<bool> {
    let summary = CheckSummary::collect(store, FALLBACK_LANGUAGE);
    log::debug!("checked {} defect(s)", summary.report.defects.len());
    match args.report {
        ReportFormat::Json => report::write_json(out, &summary)?,
        ReportFormat::Console => report::write_check_console(out, &summary)?,
    }
    Ok(summary.report.is_consistent())
}

fn run_keys(args: &Args, store: &TranslationStore, out: &mut dyn Write) -> Result<bool> {
    let keys: BTreeMap<_, _> = Language::ALL
        .into_iter()
        .map(|lang| (lang, store.leaf_keys(lang)))
        .collect();
    match args.report {
        ReportFormat::Json => report::write_json(out, &keys)?,
        ReportFormat::Console => report::write_keys_console(out, &keys)?,
    }
    Ok(true)
}

fn run_resolve(args: &Args, key: &str, out: &mut dyn Write) -> Result<bool> {
    let ctx = LanguageContext::initialize(MemoryStore::new(), Some(args.lang.as_str()));
    if args.verbose {
        eprintln!(
            "{}",
            format!("resolving under {} ({:?})", ctx.language(), ctx.source()).dimmed()
        );
    }
    let value = ctx.resolve(key);
    let found = value != Translation::Text(key.to_string());
    let resolution = Resolution {
        key: key.to_string(),
        language: ctx.language(),
        found,
        value,
    };
    match args.report {
        ReportFormat::Json => report::write_json(out, &resolution)?,
        ReportFormat::Console => report::write_resolution_console(out, &resolution)?,
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn check_and_resolve_conflict() {
        let parsed = Args::try_parse_from(["portfolio-tester", "--check", "--resolve", "nav.home"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn resolve_reports_missing_keys() {
        let args = Args::parse_from(["portfolio-tester", "--resolve", "nope", "--report", "json"]);
        let mut buf = Vec::new();
        let found = run_resolve(&args, "nope", &mut buf).unwrap();
        assert!(!found);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["value"], "nope");
        assert_eq!(value["found"], false);
    }

    #[test]
    fn resolve_uses_locale_tag() {
        let args = Args::parse_from(["portfolio-tester", "--lang", "it-IT", "--report", "json"]);
        let mut buf = Vec::new();
        assert!(run_resolve(&args, "contact.send", &mut buf).unwrap());
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["language"], "it");
        assert_eq!(value["value"], "Invia Messaggio");
    }

    #[test]
    fn builtin_catalogs_pass_check() {
        let args = Args::parse_from(["portfolio-tester"]);
        let mut buf = Vec::new();
        assert!(run_check(&args, TranslationStore::builtin(), &mut buf).unwrap());
    }
}
