//! One-call entry points over the installed configuration.

use astro_base::{AstroChart, YearlyTransit};
use saju_base::{
    Compatibility, DailyFortune, FourPillars, MonthlyFortune, SajuResult, Theme, ThemedFortune,
    all_themed_fortunes, analyze_compatibility, analyze_elements, daily_fortune,
    monthly_fortune, themed_fortune,
};
use saju_synthesis::{QueryType, SynthesisResult};
use saju_time::CivilDate;
use serde::Serialize;
use tracing::info;

use crate::error::SajuRsError;
use crate::global::{config, reference_year};
use crate::input::BirthInput;

/// Both charts and their synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub saju: SajuResult,
    pub astro: AstroChart,
    pub synthesis: SynthesisResult,
}

pub fn pillars(birth: &BirthInput) -> Result<FourPillars, SajuRsError> {
    Ok(birth.saju_chart()?.pillars)
}

/// Saju analysis relative to the configured reference year.
pub fn saju(birth: &BirthInput) -> Result<SajuResult, SajuRsError> {
    saju_for_year(birth, reference_year())
}

pub fn saju_for_year(birth: &BirthInput, reference_year: i32) -> Result<SajuResult, SajuRsError> {
    let chart = birth.saju_chart()?;
    Ok(saju_base::calculate(&chart, reference_year))
}

/// Western chart with the configured aspect set and fallback location.
pub fn astro(birth: &BirthInput) -> Result<AstroChart, SajuRsError> {
    let cfg = config();
    Ok(astro_base::calculate(&birth.astro_input(cfg.location), cfg.aspect_set)?)
}

/// Runs both engines and blends them for `query_type`.
pub fn analyze(birth: &BirthInput, query_type: QueryType) -> Result<Analysis, SajuRsError> {
    let saju = saju(birth)?;
    let astro = astro(birth)?;
    let synthesis = saju_synthesis::synthesize(&saju, &astro, query_type)?;
    info!(
        birth = %birth.datetime,
        reference_year = saju.reference_year,
        score = synthesis.overall_grade.grade.score,
        "analysis complete"
    );
    Ok(Analysis {
        saju,
        astro,
        synthesis,
    })
}

pub fn synthesize(
    birth: &BirthInput,
    query_type: QueryType,
) -> Result<SynthesisResult, SajuRsError> {
    Ok(analyze(birth, query_type)?.synthesis)
}

pub fn daily(birth: &BirthInput, date: CivilDate) -> Result<DailyFortune, SajuRsError> {
    let chart = birth.saju_chart()?;
    let yongsin = analyze_elements(&chart.pillars).yongsin;
    Ok(daily_fortune(&chart.pillars, yongsin, date))
}

pub fn monthly(birth: &BirthInput, year: i32, month: u32) -> Result<MonthlyFortune, SajuRsError> {
    let chart = birth.saju_chart()?;
    let yongsin = analyze_elements(&chart.pillars).yongsin;
    Ok(monthly_fortune(&chart.pillars, yongsin, year, month)?)
}

pub fn themed(birth: &BirthInput, theme: Theme) -> Result<ThemedFortune, SajuRsError> {
    Ok(themed_fortune(&saju(birth)?, theme))
}

pub fn themed_all(birth: &BirthInput) -> Result<Vec<ThemedFortune>, SajuRsError> {
    Ok(all_themed_fortunes(&saju(birth)?))
}

pub fn compatibility(
    first: &BirthInput,
    second: &BirthInput,
) -> Result<Compatibility, SajuRsError> {
    let year = reference_year();
    Ok(analyze_compatibility(
        &saju_for_year(first, year)?,
        &saju_for_year(second, year)?,
    ))
}

/// Transits of `year` against the natal chart.
pub fn transit(birth: &BirthInput, year: i32) -> Result<YearlyTransit, SajuRsError> {
    Ok(astro(birth)?.yearly_transit(year))
}
