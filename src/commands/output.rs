// --json renderings for scripting

use anyhow::Result;
use serde::Serialize;

use crate::data::{Catalog, JobPosting, RankingRecord};
use crate::engine::rankings::{self, SortKey};
use crate::engine::{parse_course, resolve};

#[derive(Serialize)]
pub struct SearchOutput<'a> {
    pub query: &'a str,
    pub matches: &'a [&'a str],
}

#[derive(Serialize)]
pub struct SchoolOutput<'a> {
    pub school: &'a str,
    pub has_curriculum: bool,
    pub courses: Vec<CourseOutput<'a>>,
}

#[derive(Serialize)]
pub struct CourseOutput<'a> {
    pub code: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Serialize)]
pub struct RankingsOutput {
    pub sort: String,
    pub records: Vec<RankingRecord>,
}

#[derive(Serialize)]
pub struct JobsOutput<'a> {
    pub total: usize,
    pub latest_collection: Option<String>,
    pub jobs: Vec<&'a JobPosting>,
}

pub fn search_json(query: &str, matches: &[&str]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SearchOutput { query, matches })?)
}

pub fn school_json(catalog: &Catalog, name: &str) -> Result<String> {
    let school = resolve(&catalog.schools, name);
    let courses = school
        .curriculum
        .iter()
        .map(|course| {
            let parsed = parse_course(&course.course);
            CourseOutput {
                code: parsed.code,
                title: parsed.title,
                description: &course.description,
            }
        })
        .collect();

    Ok(serde_json::to_string_pretty(&SchoolOutput {
        school: &school.name,
        has_curriculum: school.has_curriculum(),
        courses,
    })?)
}

pub fn rankings_json(catalog: &Catalog, key: SortKey) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RankingsOutput {
        sort: key.to_string(),
        records: rankings::sort_by_key(&catalog.rankings, key),
    })?)
}

pub fn jobs_json(catalog: &Catalog, limit: usize, location: Option<&str>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JobsOutput {
        total: catalog.jobs.len(),
        latest_collection: catalog.latest_collection().map(|d| d.to_string()),
        jobs: catalog.feed(limit, location),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Course, School};
    use crate::engine::DedupMode;

    #[test]
    fn test_school_json_parses_courses() {
        let mut catalog = Catalog::bundled(DedupMode::Exact);
        catalog.schools.push(School {
            name: "Test School".to_string(),
            curriculum: vec![Course {
                course: "BUS101: Intro to Strategy".to_string(),
                description: "Frameworks.".to_string(),
            }],
        });

        let json: serde_json::Value =
            serde_json::from_str(&school_json(&catalog, "Test School").unwrap()).unwrap();
        assert_eq!(json["has_curriculum"], true);
        assert_eq!(json["courses"][0]["code"], "BUS101");
        assert_eq!(json["courses"][0]["title"], " Intro to Strategy");
    }

    #[test]
    fn test_unknown_school_json_is_empty() {
        let catalog = Catalog::bundled(DedupMode::Exact);
        let json: serde_json::Value =
            serde_json::from_str(&school_json(&catalog, "Nowhere U").unwrap()).unwrap();
        assert_eq!(json["school"], "Nowhere U");
        assert_eq!(json["courses"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_rankings_json_order() {
        let catalog = Catalog::bundled(DedupMode::Exact);
        let key: SortKey = "lowest-national".parse().unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&rankings_json(&catalog, key).unwrap()).unwrap();
        assert_eq!(json["sort"], "lowest-national");
        assert_eq!(json["records"][0]["rank"], 5);
    }
}
