// bundled constants: fallback schools, leaderboard seed, skill profile, methodology

use super::model::{RankingRecord, SkillScore};

/// always appended after scraped schools so the index is never empty
pub const FALLBACK_SCHOOLS: &[&str] = &[
    "Northwestern University Kellogg",
    "Harvard Business School",
    "Stanford Graduate School of Business",
    "MIT Sloan School of Management",
    "Wharton School (UPenn)",
];

// rank, school, national, logistics, strategy, decision
const RANKING_ROWS: &[(u32, &str, u32, u32, u32, u32)] = &[
    (1, "MIT Sloan School of Management", 94, 98, 92, 90),
    (2, "Stanford Graduate School of Business", 92, 89, 96, 94),
    (3, "Northwestern University Kellogg", 89, 85, 94, 91),
    (4, "Harvard Business School", 88, 82, 93, 92),
    (5, "Wharton School (UPenn)", 87, 84, 90, 89),
];

pub fn rankings() -> Vec<RankingRecord> {
    RANKING_ROWS
        .iter()
        .map(
            |&(rank, school, national_score, logistics, strategy, decision)| RankingRecord {
                rank,
                school: school.to_string(),
                national_score,
                logistics,
                strategy,
                decision,
            },
        )
        .collect()
}

/// Rubin & Dierdoff managerial competencies, school supply vs market demand
pub fn skills() -> Vec<SkillScore> {
    vec![
        skill("Decision-Making", "Managing Decision-Making Processes", 65, 85),
        skill("Human Capital", "Managing Human Capital", 72, 78),
        skill("Strategy & Innovation", "Managing Strategy and Innovation", 88, 82),
        skill("Task Environment", "Managing the Task Environment", 58, 90),
        skill("Admin & Control", "Managing Administration and Control", 45, 68),
        skill("Logistics & Tech", "Managing Logistics and Technology", 38, 92),
    ]
}

fn skill(skill: &'static str, full_name: &'static str, school: u32, market: u32) -> SkillScore {
    SkillScore {
        skill,
        full_name,
        school,
        market,
    }
}

/// a stage of the data pipeline shown by /method
pub struct PipelineStep {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub struct ScoringMetric {
    pub title: &'static str,
    pub description: &'static str,
    pub formula: &'static str,
}

pub const PIPELINE: &[PipelineStep] = &[
    PipelineStep {
        number: "01",
        title: "THE SENSOR",
        subtitle: "Real-Time Scraping",
        description: "Daily scans of Indeed and LinkedIn for management roles, capturing live postings and their competency requirements.",
        details: &[
            "Automated scraping every 24 hours",
            "Coverage: 50+ management job titles",
            "Sources: Indeed, LinkedIn, Glassdoor",
            "Duplicate postings removed before scoring",
        ],
    },
    PipelineStep {
        number: "02",
        title: "THE BRAIN",
        subtitle: "NLP Extraction",
        description: "Job descriptions are parsed for managerial competencies using market-driven skills extraction (Boshkoska et al.).",
        details: &[
            "Named entity recognition for competencies",
            "Context-aware parsing of skill requirements",
            "Mapping to the Rubin & Dierdoff competency framework",
            "Weighted scoring based on frequency",
        ],
    },
    PipelineStep {
        number: "03",
        title: "THE LIBRARY",
        subtitle: "Curriculum Ingestion",
        description: "MBA course catalogs are digitized and mapped to the six managerial competencies.",
        details: &[
            "Manual and automated catalog parsing",
            "Coverage: top 50 business schools",
            "Updated quarterly with new course offerings",
            "Skills mapped to a standardized competency taxonomy",
        ],
    },
    PipelineStep {
        number: "04",
        title: "THE MATCH",
        subtitle: "Gap Analysis",
        description: "Market demand is overlaid on curricula to show where schools under-teach what employers ask for.",
        details: &[
            "Demand index: frequency in job postings",
            "Supply index: coverage in MBA curricula",
            "Gap score: market demand minus school supply",
            "Benchmarked against the Rubin & Dierdoff baseline",
        ],
    },
];

pub const SCORING: &[ScoringMetric] = &[
    ScoringMetric {
        title: "Market Alignment Score",
        description: "Points for curriculum coverage in each competency, weighted by market demand.",
        formula: "Points = (Market Demand %) x (Curriculum Coverage %)",
    },
    ScoringMetric {
        title: "Competency Gap Penalty",
        description: "Points lost for under-teaching competencies in high demand (>50%).",
        formula: "Penalty = -(Gap %) x (Market Demand %)",
    },
    ScoringMetric {
        title: "Regional Relevance Bonus",
        description: "Bonus for aligning with local job market needs.",
        formula: "Bonus = (Local Demand - National Demand) x 10",
    },
];
