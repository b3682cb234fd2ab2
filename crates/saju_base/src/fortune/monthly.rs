use serde::Serialize;

use saju_math::{Grade, round_score};
use saju_time::{CivilDate, days_in_month};

use super::{DayBranchContact, daily_fortune, period_grade};
use crate::calendar::{FourPillars, month_pillar, year_pillar};
use crate::element::Element;
use crate::error::SajuError;
use crate::sexagenary::Pillar;
use crate::ten_gods::{TenGodPair, ten_gods};
use crate::twelve_stages::StageInfo;

const MAX_KEY_DATES: usize = 5;

/// A notable day of the month and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDate {
    pub day: u32,
    pub score: u8,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyDates {
    /// Days scoring 75 or more.
    pub good: Vec<KeyDate>,
    /// Days scoring 35 or less, or clashing with the natal day branch.
    pub caution: Vec<KeyDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFortune {
    pub year: i32,
    pub month: u32,
    pub pillar: Pillar,
    pub ten_gods: TenGodPair,
    pub stage: StageInfo,
    pub has_clash: bool,
    pub has_combination: bool,
    pub score: u8,
    pub grade: Grade,
    pub key_dates: KeyDates,
    pub interpretation: String,
    pub advice: [&'static str; 2],
}

fn month_advice(score: u8) -> [&'static str; 2] {
    match score {
        70.. => [
            "A good time to be active.",
            "Well suited to new beginnings and important decisions.",
        ],
        50..=69 => [
            "Push your plans forward steadily.",
            "Steady effort without overreaching brings good results.",
        ],
        _ => [
            "Act with care.",
            "Use the month to prepare rather than to decide in haste.",
        ],
    }
}

fn key_dates(pillars: &FourPillars, yongsin: Element, year: i32, month: u32) -> KeyDates {
    let mut dates = KeyDates::default();
    for day in 1..=days_in_month(i64::from(year), month) {
        let date = CivilDate { year, month, day };
        let f = daily_fortune(pillars, yongsin, date);
        if f.score >= 75 {
            dates.good.push(KeyDate {
                day,
                score: f.score,
                reason: f.stage.stage.korean().to_string(),
            });
        } else if f.score <= 35 || f.has_clash {
            let reason = if f.has_clash {
                "clash".to_string()
            } else {
                f.stage.stage.korean().to_string()
            };
            dates.caution.push(KeyDate {
                day,
                score: f.score,
                reason,
            });
        }
    }
    dates.good.truncate(MAX_KEY_DATES);
    dates.caution.truncate(MAX_KEY_DATES);
    dates
}

/// Fortune for one calendar month, read from its pillar on the 15th.
///
/// Fails with [`SajuError::InvalidInput`] when `month` is outside 1..=12.
pub fn monthly_fortune(
    pillars: &FourPillars,
    yongsin: Element,
    year: i32,
    month: u32,
) -> Result<MonthlyFortune, SajuError> {
    if !(1..=12).contains(&month) {
        return Err(SajuError::InvalidInput {
            field: "month",
            value: i64::from(month),
        });
    }

    let year_p = year_pillar(year, month, 15);
    let pillar = month_pillar(month, 15, year_p.stem());
    let gods = ten_gods(&pillars.day, &pillar);
    let contact = DayBranchContact::new(pillars.day.branch(), pillar.branch());
    let score = round_score(contact.base_score());

    let interpretation = format!(
        "This month the {} energy is strong. {} {} ({}): {}.",
        gods.stem,
        gods.stem.influence(),
        contact.stage.korean(),
        contact.stage.meaning(),
        contact.stage.description()
    );

    Ok(MonthlyFortune {
        year,
        month,
        pillar,
        ten_gods: gods,
        stage: contact.stage.into(),
        has_clash: contact.clash,
        has_combination: contact.combination,
        score,
        grade: period_grade(score),
        key_dates: key_dates(pillars, yongsin, year, month),
        interpretation,
        advice: month_advice(score),
    })
}
