//! One-call analysis of a chart.

use serde::Serialize;
use tracing::info;

use crate::calendar::SajuChart;
use crate::daeun::{Daeun, LuckPillar, daeun};
use crate::day_master::{
    DayMasterProfile, LuckyGuide, SajuSummary, day_master_profile, lucky_guide, summarize,
};
use crate::element::Element;
use crate::element_analysis::{ElementAnalysis, analyze_elements};
use crate::fortune::{YearlyFortune, five_year_fortune, yearly_fortune};
use crate::hidden_stems::{PillarHiddenStems, analyze_hidden_stems};
use crate::relations::{RelationSet, analyze_relations};
use crate::score::{OverallScore, overall_score};
use crate::ten_gods::ChartTenGods;
use crate::twelve_stages::{TwelveStages, twelve_stages};
use crate::void::{VoidSet, void_set};

/// Every derived structure of a chart, relative to a reference year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SajuResult {
    pub chart: SajuChart,
    pub ten_gods: ChartTenGods,
    pub hidden_stems: Vec<PillarHiddenStems>,
    pub elements: ElementAnalysis,
    pub stages: TwelveStages,
    pub void: VoidSet,
    pub relations: RelationSet,
    pub daeun: Daeun,
    pub reference_year: i32,
    /// Luck pillar covering the reference year.
    pub current_daeun: Option<LuckPillar>,
    pub yearly_fortune: YearlyFortune,
    pub five_year_fortune: Vec<YearlyFortune>,
    pub day_master: DayMasterProfile,
    pub overall_score: OverallScore,
    pub lucky_guide: LuckyGuide,
    pub summary: SajuSummary,
}

/// Runs every analysis over `chart`. "Current year" outputs are taken at
/// `reference_year`.
pub fn calculate(chart: &SajuChart, reference_year: i32) -> SajuResult {
    let pillars = &chart.pillars;
    let elements = analyze_elements(pillars);
    let stages = twelve_stages(pillars);
    let relations = analyze_relations(pillars);
    let luck = daeun(chart);
    let score = overall_score(&stages, &relations, &elements);

    info!(
        day = %pillars.day,
        score = score.grade.score,
        grade = %score.grade.grade,
        "saju analysis complete"
    );

    SajuResult {
        chart: *chart,
        ten_gods: ChartTenGods::of(pillars),
        hidden_stems: analyze_hidden_stems(pillars),
        void: void_set(pillars),
        current_daeun: luck.current(reference_year).copied(),
        daeun: luck,
        reference_year,
        yearly_fortune: yearly_fortune(reference_year, pillars),
        five_year_fortune: five_year_fortune(reference_year, pillars),
        day_master: day_master_profile(pillars.day_master()),
        overall_score: score,
        lucky_guide: lucky_guide(elements.yongsin),
        summary: summarize(pillars.day_master(), &elements),
        elements,
        stages,
        relations,
    }
}

impl SajuResult {
    pub fn yongsin(&self) -> Element {
        self.elements.yongsin
    }
}
