// records loaded from the data directory and the bundled seed

use serde::{Deserialize, Serialize};

/// a school and its required curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    #[serde(rename = "school_name")]
    pub name: String,
    #[serde(default)]
    pub curriculum: Vec<Course>,
}

impl School {
    /// a school with no curriculum data
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            curriculum: Vec::new(),
        }
    }

    pub fn has_curriculum(&self) -> bool {
        !self.curriculum.is_empty()
    }
}

/// one curriculum entry, e.g. "BUS101: Intro to Strategy"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course: String,
    #[serde(default)]
    pub description: String,
}

/// a scraped job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "job_title_actual")]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_collected: String,
    #[serde(default)]
    pub location_searched: String,
}

/// a leaderboard row; `rank` is an identifier and survives re-sorting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingRecord {
    pub rank: u32,
    pub school: String,
    pub national_score: u32,
    pub logistics: u32,
    pub strategy: u32,
    pub decision: u32,
}

/// one managerial competency on the comparison chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    pub skill: &'static str,
    pub full_name: &'static str,
    pub school: u32,
    pub market: u32,
}
