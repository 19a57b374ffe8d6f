//! Pure scoring functions over an [`Assessment`]: sub-domain aggregation,
//! overall score, risk banding and the weekly care-hours estimate.

mod care_hours;

pub use care_hours::{
    CareHoursAdjustment, CareHoursEstimate, HOURS_PER_SCORE_POINT, MAX_WEEKLY_HOURS,
    REFERENCE_AGE,
};

use serde::{Deserialize, Serialize};

use crate::assessment::{Assessment, DomainKind};

/// One `(score, weight)` pair fed to [`aggregate`]. Either side may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedEntry {
    pub score: Option<f64>,
    pub weight: Option<f64>,
}

impl WeightedEntry {
    pub fn new(score: f64, weight: f64) -> Self {
        Self {
            score: Some(score),
            weight: Some(weight),
        }
    }
}

/// Weighted mean of the entries that carry both a score and a weight.
///
/// Entries missing either side are skipped entirely; an empty or zero-weight
/// input yields `0.0`.
pub fn aggregate<I>(entries: I) -> f64
where
    I: IntoIterator<Item = WeightedEntry>,
{
    let (weighted_sum, weight_sum) = entries
        .into_iter()
        .filter_map(|entry| Some((entry.score?, entry.weight?)))
        .fold((0.0, 0.0), |(weighted, total), (score, weight)| {
            (weighted + score * weight, total + weight)
        });

    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

/// Weighted mean of the five domain `weightedScore`s.
///
/// Unlike [`aggregate`], a domain without a recorded `weightedScore`
/// contributes zero while its weight still counts toward the denominator.
pub fn overall_score(assessment: &Assessment) -> f64 {
    let (weighted_sum, weight_sum) =
        DomainKind::ordered()
            .into_iter()
            .fold((0.0, 0.0), |(weighted, total), kind| {
                let weight = assessment.domain_weight(kind);
                let score = assessment.domain_weighted_score(kind).unwrap_or(0.0);
                (weighted + weight * score, total + weight)
            });

    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

/// Estimated weekly care hours, rounded to two decimal places.
pub fn care_hours(assessment: &Assessment) -> f64 {
    CareHoursEstimate::for_assessment(assessment).weekly_hours
}

/// Rounds to `places` decimals, halves toward positive infinity.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor + 0.5).floor() / factor
}

/// Risk band derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_overall_score(score: f64) -> Self {
        if score > 3.0 {
            RiskLevel::High
        } else if score > 2.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Per-domain view used in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainBreakdown {
    pub domain: DomainKind,
    pub weight: f64,
    pub weighted_score: Option<f64>,
    pub sub_domain_aggregate: f64,
}

pub fn domain_breakdown(assessment: &Assessment) -> Vec<DomainBreakdown> {
    DomainKind::ordered()
        .into_iter()
        .map(|domain| DomainBreakdown {
            domain,
            weight: assessment.domain_weight(domain),
            weighted_score: assessment.domain_weighted_score(domain),
            sub_domain_aggregate: assessment.aggregate_domain(domain),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::sample_assessment;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn aggregate_is_weighted_mean() {
        let mean = aggregate([WeightedEntry::new(3.0, 1.05), WeightedEntry::new(1.0, 1.1)]);
        assert!(approx(mean, (3.0 * 1.05 + 1.0 * 1.1) / 2.15));
    }

    #[test]
    fn aggregate_skips_incomplete_entries() {
        let mean = aggregate([
            WeightedEntry::new(4.0, 1.0),
            WeightedEntry {
                score: None,
                weight: Some(5.0),
            },
            WeightedEntry {
                score: Some(0.0),
                weight: None,
            },
        ]);
        assert!(approx(mean, 4.0));
    }

    #[test]
    fn aggregate_of_nothing_is_zero() {
        assert_eq!(aggregate(Vec::<WeightedEntry>::new()), 0.0);
        assert_eq!(aggregate([WeightedEntry::new(5.0, 0.0)]), 0.0);
    }

    #[test]
    fn overall_score_of_sample() {
        let assessment = sample_assessment().expect("sample parses");
        assert!(approx(overall_score(&assessment), 1.4675));
    }

    #[test]
    fn overall_score_counts_weight_of_missing_weighted_score() {
        let mut assessment = sample_assessment().expect("sample parses");
        assessment.biological.weighted_score = None;

        // Biological still contributes 0.35 to the denominator.
        let expected = (0.25 * 1.33 + 0.2 * 1.5 + 0.15 * 1.15 + 0.05 * 1.0) / 1.0;
        assert!(approx(overall_score(&assessment), expected));
    }

    #[test]
    fn overall_score_with_zero_weights_is_zero() {
        let mut assessment = sample_assessment().expect("sample parses");
        assessment.biological.weight = Some(0.0);
        assessment.psychological.weight = Some(0.0);
        assessment.social.weight = Some(0.0);
        assessment.clinical.weight = Some(0.0);
        assessment.safety_resource.weight = Some(0.0);
        assert_eq!(overall_score(&assessment), 0.0);
    }

    #[test]
    fn care_hours_of_sample() {
        let assessment = sample_assessment().expect("sample parses");
        assert_eq!(care_hours(&assessment), 13.15);
    }

    #[test]
    fn care_hours_cap_precedes_adjustments() {
        let mut assessment = sample_assessment().expect("sample parses");
        for kind_score in [
            &mut assessment.biological.weighted_score,
            &mut assessment.psychological.weighted_score,
            &mut assessment.social.weighted_score,
            &mut assessment.clinical.weighted_score,
            &mut assessment.safety_resource.weighted_score,
        ] {
            *kind_score = Some(5.0);
        }
        assessment.age = Some(400.0);
        assessment.triggers.end_of_life_planning = true;

        let estimate = CareHoursEstimate::for_assessment(&assessment);
        assert_eq!(estimate.base_hours, MAX_WEEKLY_HOURS);
        assert_eq!(estimate.weekly_hours, 252.0);
    }

    #[test]
    fn every_adjustment_compounds_on_the_capped_base() {
        let mut assessment = sample_assessment().expect("sample parses");
        for kind_score in [
            &mut assessment.biological.weighted_score,
            &mut assessment.psychological.weighted_score,
            &mut assessment.social.weighted_score,
            &mut assessment.clinical.weighted_score,
            &mut assessment.safety_resource.weighted_score,
        ] {
            *kind_score = Some(5.0);
        }
        assessment.age = Some(400.0);
        assessment.triggers.clinically_complex = true;
        assessment.triggers.wandering_risk = true;
        assessment.triggers.high_adl_dependency = true;
        assessment.triggers.end_of_life_planning = true;

        let estimate = CareHoursEstimate::for_assessment(&assessment);

        assert_eq!(estimate.base_hours, MAX_WEEKLY_HOURS);
        assert_eq!(estimate.adjustments, CareHoursAdjustment::ordered().to_vec());
        // 168 x 1.3 x 1.2 x 1.4 x 1.5 = 168 x 3.276
        assert_eq!(estimate.weekly_hours, 550.37);
        assert_eq!(care_hours(&assessment), 550.37);
    }

    #[test]
    fn care_hours_is_zero_when_every_weight_is_zero() {
        let mut assessment = sample_assessment().expect("sample parses");
        assessment.biological.weight = Some(0.0);
        assessment.psychological.weight = Some(0.0);
        assessment.social.weight = Some(0.0);
        assessment.clinical.weight = Some(0.0);
        assessment.safety_resource.weight = Some(0.0);
        assessment.triggers.clinically_complex = true;
        assert_eq!(care_hours(&assessment), 0.0);
    }

    #[test]
    fn risk_bands_use_strict_thresholds() {
        assert_eq!(RiskLevel::from_overall_score(3.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_overall_score(3.01), RiskLevel::High);
        assert_eq!(RiskLevel::from_overall_score(2.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_overall_score(2.5), RiskLevel::Moderate);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to_places(13.1488, 2), 13.15);
        assert_eq!(round_to_places(2.5, 0), 3.0);
        assert_eq!(round_to_places(-2.5, 0), -2.0);
    }

    #[test]
    fn breakdown_lists_every_domain_in_order() {
        let assessment = sample_assessment().expect("sample parses");
        let breakdown = domain_breakdown(&assessment);
        let domains: Vec<DomainKind> = breakdown.iter().map(|entry| entry.domain).collect();
        assert_eq!(domains, DomainKind::ordered().to_vec());
        assert_eq!(breakdown[0].weighted_score, Some(1.75));
    }
}
