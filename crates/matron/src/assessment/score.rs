use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer rating on the MATRON 0-5 scale (0 = no issues, 5 = critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Score(u8);

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("score {0} is outside the 0-5 scale")]
    OutOfRange(i64),
    #[error("score {0} is not a whole number")]
    NotWhole(f64),
}

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ScoreError> {
        Self::try_from(i64::from(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "No issues / Fully independent",
            1 => "Minimal issues / Slight assistance needed",
            2 => "Mild issues / Some assistance needed",
            3 => "Moderate issues / Regular assistance needed",
            4 => "High issues / Highly dependent",
            _ => "Critical issues / Completely dependent",
        }
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }
}

/// Whole numbers written as `3.0` are accepted.
impl TryFrom<f64> for Score {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0.0 {
            return Err(ScoreError::NotWhole(value));
        }
        if (f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScoreError::OutOfRange(value as i64))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Describes a raw rating, falling back to `"Invalid score"` off the scale.
pub fn describe_score(raw: i64) -> &'static str {
    Score::try_from(raw)
        .map(Score::description)
        .unwrap_or("Invalid score")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_values_off_the_scale() {
        assert_eq!(Score::try_from(6_i64), Err(ScoreError::OutOfRange(6)));
        assert_eq!(Score::try_from(-1_i64), Err(ScoreError::OutOfRange(-1)));
        assert_eq!(Score::new(5).map(Score::value), Ok(5));
    }

    #[test]
    fn deserializes_only_integers_within_range() {
        let score: Score = serde_json::from_str("3").expect("valid score");
        assert_eq!(score.value(), 3);
        assert!(serde_json::from_str::<Score>("7").is_err());
        assert!(serde_json::from_str::<Score>("2.5").is_err());
    }

    #[test]
    fn accepts_whole_numbers_written_as_floats() {
        let score: Score = serde_json::from_str("3.0").expect("whole float score");
        assert_eq!(score.value(), 3);
        assert_eq!(serde_json::to_string(&score).expect("serialize"), "3");

        assert_eq!(Score::try_from(2.5), Err(ScoreError::NotWhole(2.5)));
        assert_eq!(Score::try_from(7.0), Err(ScoreError::OutOfRange(7)));
        assert!(matches!(Score::try_from(f64::NAN), Err(ScoreError::NotWhole(_))));
    }

    #[test]
    fn describes_each_rating() {
        assert_eq!(describe_score(0), "No issues / Fully independent");
        assert_eq!(describe_score(5), "Critical issues / Completely dependent");
        assert_eq!(describe_score(9), "Invalid score");
    }
}
