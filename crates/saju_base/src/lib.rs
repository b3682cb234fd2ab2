//! Four Pillars (saju) engine.
//!
//! This crate provides:
//! - The ten stems, twelve branches and the sexagenary cycle
//! - Year/month/day/hour pillars from Gregorian birth facts
//! - Ten Gods, hidden stems, element distribution and 12-stage tables
//! - Void branches and the stem/branch relation scanner
//! - Ten-year luck pillars and yearly, monthly and daily projections
//! - Overall scoring, themed fortunes and two-chart compatibility
//!
//! Every table is compile-time data and every analysis is a pure function
//! of its inputs. "Current year" outputs take the reference year as an
//! explicit argument.

pub mod analysis;
pub mod branch;
pub mod calendar;
pub mod compatibility;
pub mod daeun;
pub mod day_master;
pub mod element;
pub mod element_analysis;
pub mod error;
pub mod fortune;
pub mod hidden_stems;
pub mod relations;
pub mod score;
pub mod sexagenary;
pub mod stem;
pub mod ten_gods;
pub mod themed;
pub mod twelve_stages;
pub mod void;

pub use analysis::{SajuResult, calculate};
pub use branch::{ALL_BRANCHES, Branch};
pub use calendar::{
    ALL_POSITIONS, BirthFacts, FourPillars, Gender, PillarPosition, SajuChart, day_pillar,
    hour_branch, hour_pillar, month_pillar, year_pillar,
};
pub use compatibility::{Compatibility, analyze_compatibility};
pub use daeun::{Daeun, Direction, LuckPillar, daeun, daeun_direction, daeun_start_age};
pub use day_master::{DayMasterProfile, LuckyGuide, SajuSummary, day_master_profile, lucky_guide};
pub use element::{ALL_ELEMENTS, Element, PerElement, Polarity};
pub use element_analysis::{ElementAnalysis, ElementCount, analyze_elements};
pub use error::SajuError;
pub use fortune::{
    DailyFortune, MonthlyFortune, YearlyFortune, daily_fortune, five_year_fortune,
    monthly_fortune, yearly_fortune,
};
pub use hidden_stems::{HiddenStemTier, PillarHiddenStems, analyze_hidden_stems, hidden_stems};
pub use relations::{RelationKind, RelationSet, analyze_relations};
pub use score::{OverallScore, ScoreBreakdown, overall_score};
pub use sexagenary::{Pillar, SEXAGENARY_CYCLE, pillar_at};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{ChartTenGods, TenGod, TenGodCategory, TenGodPair, ten_gods};
pub use themed::{ALL_THEMES, Theme, ThemeLevel, ThemedFortune, all_themed_fortunes, themed_fortune};
pub use twelve_stages::{LifeStage, StageInfo, TwelveStages, life_stage, twelve_stages};
pub use void::{VoidSet, void_branches, void_set};
