//! One birth, as both engines need it.

use std::str::FromStr;

use astro_base::AstroInput;
use saju_base::{BirthFacts, Gender, SajuChart, SajuError};
use saju_time::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::date::BirthDateTime;
use crate::error::SajuRsError;

/// Birth date, time, gender and optional place.
///
/// Without a location the Western chart falls back to the configured
/// reference location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub datetime: BirthDateTime,
    pub gender: Gender,
    #[serde(default)]
    pub location: Option<GeoLocation>,
}

impl BirthInput {
    pub fn new(datetime: BirthDateTime, gender: Gender) -> Self {
        Self {
            datetime,
            gender,
            location: None,
        }
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn birth_facts(&self) -> BirthFacts {
        let dt = self.datetime;
        let facts = BirthFacts::new(dt.year, dt.month, dt.day, dt.hour).with_minute(dt.minute);
        match self.location {
            Some(location) => facts.with_location(location),
            None => facts,
        }
    }

    /// Validates the birth facts and computes the four pillars.
    pub fn saju_chart(&self) -> Result<SajuChart, SajuError> {
        SajuChart::new(self.birth_facts(), self.gender)
    }

    /// Chart input at the birth place, or at `fallback` when none was given.
    pub fn astro_input(&self, fallback: GeoLocation) -> AstroInput {
        let dt = self.datetime;
        AstroInput::new(dt.year, dt.month, dt.day)
            .at(dt.hour, dt.minute)
            .with_location(self.location.unwrap_or(fallback))
    }

    /// Runs both engines' range checks without building anything.
    pub fn validate(&self) -> Result<(), SajuRsError> {
        self.birth_facts().validate()?;
        self.astro_input(GeoLocation::default()).validate()?;
        Ok(())
    }
}

impl FromStr for BirthInput {
    type Err = SajuRsError;

    /// `<date-time> <gender>`, e.g. `1990-05-15T14:00 male`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (datetime, gender) = s.rsplit_once(char::is_whitespace).ok_or_else(|| {
            SajuRsError::Parse {
                what: "birth input",
                input: s.to_string(),
            }
        })?;
        Ok(Self::new(datetime.parse()?, gender.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_gender() {
        let b: BirthInput = "1990-05-15 14:30 female".parse().unwrap();
        assert_eq!(b.datetime, BirthDateTime::new(1990, 5, 15, 14, 30));
        assert_eq!(b.gender, Gender::Female);
        assert_eq!(b.location, None);
        assert!("1990-05-15T14:00".parse::<BirthInput>().is_err());
        assert!(matches!(
            "1990-05-15T14:00 other".parse::<BirthInput>(),
            Err(SajuRsError::Saju(SajuError::UnknownGender(_)))
        ));
    }

    #[test]
    fn location_falls_back() {
        let b = BirthInput::new(BirthDateTime::new(1990, 5, 15, 14, 0), Gender::Male);
        let busan = GeoLocation::new(35.1796, 129.0756);
        assert_eq!(b.astro_input(busan).location, busan);
        assert_eq!(b.birth_facts().location, None);

        let tokyo = GeoLocation::new(35.6762, 139.6503);
        let b = b.with_location(tokyo);
        assert_eq!(b.astro_input(busan).location, tokyo);
        assert_eq!(b.birth_facts().location, Some(tokyo));
    }

    #[test]
    fn validation_covers_both_engines() {
        let ok = BirthInput::new(BirthDateTime::new(1990, 2, 30, 23, 59), Gender::Male);
        assert!(ok.validate().is_ok());
        let bad = BirthInput::new(BirthDateTime::new(1990, 5, 15, 24, 0), Gender::Male);
        assert!(matches!(bad.validate(), Err(SajuRsError::Saju(_))));
        let bad = ok.with_location(GeoLocation::new(0.0, 200.0));
        assert!(bad.validate().is_err());
    }
}
