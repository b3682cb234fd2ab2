//! Five-tier letter grades.
//!
//! Every scoring function in the workspace reports `{score, grade,
//! grade_desc}`; only the thresholds and the description wording differ
//! between engines.

use serde::Serialize;

use crate::stats::round_score;

/// Letter grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

/// All grades in order (index 0 = S).
pub const ALL_GRADES: [Grade; 5] = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D];

impl Grade {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// 0-based index in [`ALL_GRADES`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds for S, A, B and C (anything below the last is D), plus one
/// description per grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScale {
    pub thresholds: [f64; 4],
    pub descriptions: [&'static str; 5],
}

impl GradeScale {
    /// Natal Saju overall score.
    pub const SAJU: GradeScale = GradeScale {
        thresholds: [85.0, 70.0, 55.0, 40.0],
        descriptions: [
            "A very favourable chart.",
            "A favourable chart.",
            "An average chart.",
            "A chart that calls for care.",
            "A chart that needs supplementing.",
        ],
    };

    /// Western natal chart score.
    pub const ASTRO: GradeScale = GradeScale {
        thresholds: [80.0, 65.0, 50.0, 35.0],
        descriptions: [
            "A very harmonious chart.",
            "Strong positive energy.",
            "A balanced chart.",
            "Plenty of room for growth.",
            "Strong challenging energy.",
        ],
    };

    /// Themed (love, wealth, ...) fortunes.
    pub const THEMED: GradeScale = GradeScale {
        thresholds: [85.0, 70.0, 55.0, 40.0],
        descriptions: [
            "Very good",
            "Good",
            "Fair",
            "Caution",
            "Effort needed",
        ],
    };

    /// Two-person compatibility.
    pub const COMPATIBILITY: GradeScale = GradeScale {
        thresholds: [85.0, 70.0, 55.0, 40.0],
        descriptions: [
            "A match made in heaven",
            "A good match",
            "A steady match",
            "Effort needed",
            "Much effort needed",
        ],
    };

    /// Final East/West synthesis grade.
    pub const SYNTHESIS: GradeScale = GradeScale {
        thresholds: [85.0, 70.0, 55.0, 40.0],
        descriptions: [
            "Very harmonious energy. Bold challenges are favoured.",
            "A good flow of energy. A good time to act on plans.",
            "A stable state. Steady effort bears fruit.",
            "Caution is needed. Careful judgement matters.",
            "A time to recharge. Focus on inner growth.",
        ],
    };

    /// Grade for an already clamped score.
    pub fn grade(&self, score: f64) -> Grade {
        ALL_GRADES[..4]
            .iter()
            .zip(self.thresholds)
            .find(|(_, min)| score >= *min)
            .map_or(Grade::D, |(g, _)| *g)
    }

    pub fn description(&self, grade: Grade) -> &'static str {
        self.descriptions[grade.index()]
    }

    /// Rounds and clamps `raw` to [0, 100], then grades it.
    pub fn score(&self, raw: f64) -> ScoreGrade {
        let score = round_score(raw);
        let grade = self.grade(f64::from(score));
        ScoreGrade {
            score,
            grade,
            grade_desc: self.description(grade),
        }
    }
}

/// A graded score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreGrade {
    pub score: u8,
    pub grade: Grade,
    pub grade_desc: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saju_thresholds() {
        let s = GradeScale::SAJU;
        assert_eq!(s.grade(85.0), Grade::S);
        assert_eq!(s.grade(84.0), Grade::A);
        assert_eq!(s.grade(70.0), Grade::A);
        assert_eq!(s.grade(55.0), Grade::B);
        assert_eq!(s.grade(40.0), Grade::C);
        assert_eq!(s.grade(39.0), Grade::D);
    }

    #[test]
    fn astro_thresholds_are_lower() {
        let s = GradeScale::ASTRO;
        assert_eq!(s.grade(80.0), Grade::S);
        assert_eq!(s.grade(65.0), Grade::A);
        assert_eq!(s.grade(50.0), Grade::B);
        assert_eq!(s.grade(35.0), Grade::C);
        assert_eq!(s.grade(34.0), Grade::D);
    }

    #[test]
    fn score_rounds_and_clamps() {
        let g = GradeScale::SAJU.score(84.5);
        assert_eq!(g.score, 85);
        assert_eq!(g.grade, Grade::S);
        assert_eq!(GradeScale::SAJU.score(-40.0).score, 0);
        assert_eq!(GradeScale::SAJU.score(1e9).score, 100);
        assert_eq!(GradeScale::SAJU.score(f64::NEG_INFINITY).grade, Grade::D);
    }

    #[test]
    fn description_follows_grade() {
        let g = GradeScale::COMPATIBILITY.score(90.0);
        assert_eq!(g.grade_desc, "A match made in heaven");
        assert_eq!(GradeScale::THEMED.description(Grade::D), "Effort needed");
    }

    #[test]
    fn grades_order_best_first() {
        assert!(Grade::S < Grade::D);
        assert_eq!(Grade::B.to_string(), "B");
    }
}
