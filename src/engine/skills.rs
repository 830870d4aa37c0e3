// curriculum supply vs market demand per competency

use serde::Serialize;

use crate::data::SkillScore;

/// demand above this share makes an under-taught competency a penalty
const HIGH_DEMAND: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub skill: &'static str,
    pub full_name: &'static str,
    pub school: u32,
    pub market: u32,
    /// market minus school; negative when the school over-teaches
    pub gap: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignmentSummary {
    pub points: f64,
    pub penalty: f64,
    pub score: f64,
}

pub fn gaps(profile: &[SkillScore]) -> Vec<SkillGap> {
    profile
        .iter()
        .map(|s| SkillGap {
            skill: s.skill,
            full_name: s.full_name,
            school: s.school,
            market: s.market,
            gap: i64::from(s.market) - i64::from(s.school),
        })
        .collect()
}

/// widest gap first; equal gaps keep chart order
pub fn gaps_by_size(profile: &[SkillScore]) -> Vec<SkillGap> {
    let mut gaps = gaps(profile);
    gaps.sort_by(|a, b| b.gap.cmp(&a.gap));
    gaps
}

pub fn alignment(profile: &[SkillScore]) -> AlignmentSummary {
    let mut points = 0.0;
    let mut penalty = 0.0;

    for gap in gaps(profile) {
        let market = f64::from(gap.market);
        points += market * f64::from(gap.school) / 100.0;
        if gap.market > HIGH_DEMAND && gap.gap > 0 {
            penalty += gap.gap as f64 * market / 100.0;
        }
    }

    AlignmentSummary {
        points,
        penalty,
        score: points - penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    fn score(skill: &'static str, school: u32, market: u32) -> SkillScore {
        SkillScore {
            skill,
            full_name: skill,
            school,
            market,
        }
    }

    #[test]
    fn test_gap_is_market_minus_school() {
        let gaps = gaps(&seed::skills());
        let logistics = gaps.iter().find(|g| g.skill == "Logistics & Tech").unwrap();
        assert_eq!(logistics.gap, 54);
        let strategy = gaps.iter().find(|g| g.skill == "Strategy & Innovation").unwrap();
        assert_eq!(strategy.gap, -6);
    }

    #[test]
    fn test_gaps_by_size_is_stable() {
        let profile = vec![score("a", 50, 60), score("b", 10, 80), score("c", 40, 50)];
        let order: Vec<&str> = gaps_by_size(&profile).iter().map(|g| g.skill).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_alignment_penalises_only_high_demand_gaps() {
        let profile = vec![score("high", 40, 80), score("low", 10, 50), score("over", 90, 70)];
        let summary = alignment(&profile);

        // 32 + 5 + 63
        assert!((summary.points - 100.0).abs() < 1e-9);
        // only "high": 40 * 0.8
        assert!((summary.penalty - 32.0).abs() < 1e-9);
        assert!((summary.score - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_profile() {
        let summary = alignment(&[]);
        assert_eq!(summary.points, 0.0);
        assert_eq!(summary.score, 0.0);
    }
}
