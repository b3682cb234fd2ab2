//! Period projections against a natal chart: year, month and day.
//!
//! Each period pillar is read against the natal day pillar: Ten Gods for
//! its stem and branch, the 12-stage of its branch in the day-branch row,
//! and whether it clashes or six-combines with the natal day branch.

mod daily;
mod monthly;
mod yearly;

pub use daily::{DailyFortune, LuckyColor, LuckyHour, daily_fortune, lucky_hours};
pub use monthly::{KeyDate, KeyDates, MonthlyFortune, monthly_fortune};
pub use yearly::{YearlyFortune, five_year_fortune, yearly_fortune};

use saju_math::Grade;

use crate::branch::Branch;
use crate::relations::{clashes, six_combination};
use crate::twelve_stages::{LifeStage, life_stage};

/// How a period branch meets the natal day branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DayBranchContact {
    pub stage: LifeStage,
    pub clash: bool,
    pub combination: bool,
}

impl DayBranchContact {
    pub fn new(natal_day: Branch, period: Branch) -> Self {
        Self {
            stage: life_stage(natal_day, period),
            clash: clashes(natal_day, period),
            combination: six_combination(natal_day, period).is_some(),
        }
    }

    /// 50, +15 on a good stage or −10 on a bad one, −15 for a clash, +20 for
    /// a six-combination.
    pub fn base_score(&self) -> f64 {
        let mut score = 50.0;
        score += if self.stage.is_good() { 15.0 } else { -10.0 };
        if self.clash {
            score -= 15.0;
        }
        if self.combination {
            score += 20.0;
        }
        score
    }
}

/// Three-tier grade used by the daily and monthly projections.
pub fn period_grade(score: u8) -> Grade {
    match score {
        70.. => Grade::A,
        50..=69 => Grade::B,
        _ => Grade::C,
    }
}
