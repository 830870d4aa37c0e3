// data directory maintenance: status and manifest generation

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::data::{Catalog, Manifest, SchoolSource, SCHOOLS_DIR};
use crate::theme;

pub fn status(catalog: &Catalog) {
    let report = &catalog.report;

    println!();
    theme::heading("Data");

    let dir = report
        .data_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "(not set, using bundled fallback list)".to_string());
    print_value("data dir", &dir);

    let source = match report.source {
        SchoolSource::Bundled => "bundled",
        SchoolSource::Manifest => "schools.manifest",
        SchoolSource::DirectoryScan => "directory scan (no manifest)",
    };
    print_value("school order", source);
    print_value("schools with curriculum", &catalog.schools.len().to_string());
    print_value("indexed schools", &catalog.index.len().to_string());
    print_value("job postings", &catalog.jobs.len().to_string());
    if let Some(latest) = catalog.latest_collection() {
        print_value("latest collection", &latest.to_string());
    }

    for file in &report.missing {
        println!(
            "  {} listed but missing: {}",
            theme::yellow().paint("warning:"),
            theme::text().paint(file)
        );
    }
    for file in &report.hash_mismatches {
        println!(
            "  {} changed since manifest: {}",
            theme::yellow().paint("warning:"),
            theme::text().paint(file)
        );
    }
    if report.source == SchoolSource::DirectoryScan && !report.loaded.is_empty() {
        println!(
            "  {} pin the order with {}",
            theme::sapphire().paint("note:"),
            theme::sapphire().paint("mbaindex data manifest")
        );
    }
    println!();
}

/// write schools.manifest from a sorted scan of `<dir>/schools`
pub fn write_manifest(dir: Option<&Path>) -> Result<()> {
    let Some(dir) = dir else {
        bail!("no data directory set (use --data-dir, $MBAINDEX_DATA_DIR or data_dir in config)");
    };

    let manifest = Manifest::generate(&dir.join(SCHOOLS_DIR))
        .with_context(|| format!("failed to scan {}", dir.display()))?;
    manifest
        .save(dir)
        .with_context(|| format!("failed to write manifest in {}", dir.display()))?;

    println!(
        "{} manifest with {} schools in {}",
        theme::bold(theme::green()).paint("Wrote"),
        manifest.entries.len(),
        dir.display()
    );
    for entry in &manifest.entries {
        println!("  {} {}", theme::green().paint("listed"), entry.file);
    }
    Ok(())
}

fn print_value(key: &str, value: &str) {
    println!(
        "    {} {}",
        theme::subtext0().paint(format!("{:<26}", format!("{}:", key))),
        theme::text().paint(value)
    );
}
