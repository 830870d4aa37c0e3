// static data: loaded once at start, read-only afterwards

mod error;
pub mod manifest;
mod model;
pub mod seed;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use time::macros::format_description;
use time::Date;

use crate::engine::{DedupMode, IndexBuilder, SchoolIndex};

pub use error::DataError;
pub use manifest::Manifest;
pub use model::{JobPosting, RankingRecord, School, SkillScore};
#[cfg(test)]
pub use model::Course;

pub const SCHOOLS_DIR: &str = "schools";
pub const JOBS_FILE: &str = "jobs.json";

/// where the school list came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchoolSource {
    /// no data directory: fallback list only
    #[default]
    Bundled,
    Manifest,
    DirectoryScan,
}

/// what happened while loading, for `data status`
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub data_dir: Option<PathBuf>,
    pub source: SchoolSource,
    pub loaded: Vec<String>,
    pub missing: Vec<String>,
    pub hash_mismatches: Vec<String>,
}

/// everything the views read from
#[derive(Debug, Clone)]
pub struct Catalog {
    pub schools: Vec<School>,
    pub jobs: Vec<JobPosting>,
    pub rankings: Vec<RankingRecord>,
    pub skills: Vec<SkillScore>,
    pub index: SchoolIndex,
    pub report: LoadReport,
}

impl Catalog {
    /// seed data only
    pub fn bundled(dedup: DedupMode) -> Self {
        Self::assemble(Vec::new(), Vec::new(), dedup, LoadReport::default())
    }

    /// read `schools/` (manifest order) and `jobs.json` from `dir`
    pub fn load(dir: &Path, dedup: DedupMode) -> Result<Self, DataError> {
        if !dir.is_dir() {
            return Err(DataError::io(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "data directory does not exist"),
            ));
        }

        let (schools, mut report) = load_schools(dir)?;
        let jobs = load_jobs(dir)?;
        report.data_dir = Some(dir.to_path_buf());

        tracing::info!(
            schools = schools.len(),
            jobs = jobs.len(),
            dir = %dir.display(),
            "catalog loaded"
        );

        Ok(Self::assemble(schools, jobs, dedup, report))
    }

    fn assemble(
        schools: Vec<School>,
        jobs: Vec<JobPosting>,
        dedup: DedupMode,
        report: LoadReport,
    ) -> Self {
        let index = IndexBuilder::new(dedup)
            .source(schools.iter().map(|s| s.name.as_str()))
            .source(seed::FALLBACK_SCHOOLS.iter().copied())
            .build();

        Self {
            schools,
            jobs,
            rankings: seed::rankings(),
            skills: seed::skills(),
            index,
            report,
        }
    }

    /// first `limit` postings, optionally restricted to a searched location
    pub fn feed(&self, limit: usize, location: Option<&str>) -> Vec<&JobPosting> {
        let needle = location.map(str::to_lowercase);
        self.jobs
            .iter()
            .filter(|job| match &needle {
                Some(needle) => job.location_searched.to_lowercase().contains(needle),
                None => true,
            })
            .take(limit)
            .collect()
    }

    /// most recent parseable `date_collected`
    pub fn latest_collection(&self) -> Option<Date> {
        self.jobs
            .iter()
            .filter_map(|job| parse_collection_date(&job.date_collected))
            .max()
    }
}

pub fn parse_collection_date(raw: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    // scrapers sometimes append a time component
    let day = raw.trim().get(..10)?;
    Date::parse(day, &format).ok()
}

fn load_schools(dir: &Path) -> Result<(Vec<School>, LoadReport), DataError> {
    let schools_dir = dir.join(SCHOOLS_DIR);
    let mut report = LoadReport::default();

    let entries = match Manifest::load(dir)? {
        Some(manifest) => {
            report.source = SchoolSource::Manifest;
            manifest.entries
        }
        None => {
            report.source = SchoolSource::DirectoryScan;
            let files = manifest::scan_school_files(&schools_dir)?;
            if !files.is_empty() {
                tracing::warn!(
                    dir = %dir.display(),
                    "no {} found, loading schools in file-name order (run `mbaindex data manifest`)",
                    manifest::MANIFEST_FILE
                );
            }
            files
                .into_iter()
                .map(|file| manifest::ManifestEntry { file, hash: None })
                .collect()
        }
    };

    let mut schools = Vec::new();
    for entry in entries {
        let path = schools_dir.join(&entry.file);
        if !path.exists() {
            tracing::warn!(file = %entry.file, "listed in manifest but missing, skipping");
            report.missing.push(entry.file);
            continue;
        }

        let bytes = fs::read(&path).map_err(|e| DataError::io(&path, e))?;
        if let Some(expected) = &entry.hash {
            if manifest::hash_content(&bytes) != *expected {
                tracing::warn!(file = %entry.file, "contents changed since the manifest was written");
                report.hash_mismatches.push(entry.file.clone());
            }
        }

        let school: School =
            serde_json::from_slice(&bytes).map_err(|e| DataError::json(&path, e))?;
        tracing::debug!(file = %entry.file, school = %school.name, courses = school.curriculum.len(), "school loaded");
        report.loaded.push(entry.file);
        schools.push(school);
    }

    Ok((schools, report))
}

fn load_jobs(dir: &Path) -> Result<Vec<JobPosting>, DataError> {
    let path = dir.join(JOBS_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no job feed");
        return Ok(Vec::new());
    }
    let bytes = fs::read(&path).map_err(|e| DataError::io(&path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| DataError::json(&path, e))
}
