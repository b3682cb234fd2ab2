//! Element and quality tally over the chart bodies.
//!
//! Each body adds one to its sign's element and one to its quality. The
//! dominant entry is the first maximum in tally order (fire, earth, air,
//! water; cardinal, fixed, mutable).

use serde::{Serialize, Serializer};

use saju_math::population_variance;

use crate::zodiac::{ALL_ASTRO_ELEMENTS, ALL_QUALITIES, AstroElement, Quality, ZodiacSign};

/// Count per Western element, serialised as a name-keyed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts(pub [u32; 4]);

impl ElementCounts {
    pub fn get(&self, element: AstroElement) -> u32 {
        self.0[element.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AstroElement, u32)> + '_ {
        ALL_ASTRO_ELEMENTS.iter().map(|e| (*e, self.0[e.index()]))
    }

    pub fn as_f64(&self) -> [f64; 4] {
        self.0.map(f64::from)
    }

    /// Element with the fewest bodies (first minimum in tally order).
    pub fn weakest(&self) -> (AstroElement, u32) {
        self.iter()
            .fold(None, |best: Option<(AstroElement, u32)>, (e, c)| match best {
                Some((_, min)) if c >= min => best,
                _ => Some((e, c)),
            })
            .unwrap_or((AstroElement::Fire, 0))
    }
}

impl Serialize for ElementCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(4))?;
        for (e, c) in self.iter() {
            map.serialize_entry(e.name(), &c)?;
        }
        map.end()
    }
}

/// Count per quality, serialised as a name-keyed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityCounts(pub [u32; 3]);

impl QualityCounts {
    pub fn get(&self, quality: Quality) -> u32 {
        self.0[quality.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quality, u32)> + '_ {
        ALL_QUALITIES.iter().map(|q| (*q, self.0[q.index()]))
    }
}

impl Serialize for QualityCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(3))?;
        for (q, c) in self.iter() {
            map.serialize_entry(q.name(), &c)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DominantElement {
    pub element: AstroElement,
    pub korean: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DominantQuality {
    pub quality: Quality,
    pub korean: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementTally {
    pub elements: ElementCounts,
    pub qualities: QualityCounts,
    pub dominant: DominantElement,
    pub dominant_quality: DominantQuality,
}

impl ElementTally {
    /// Population variance of the four element counts.
    pub fn variance(&self) -> f64 {
        population_variance(&self.elements.as_f64())
    }
}

/// First index holding the maximum value.
fn first_max(values: &[u32]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0, |best, (i, v)| if *v > values[best] { i } else { best })
}

/// Tallies the signs occupied by the chart bodies.
pub fn tally_elements(signs: impl IntoIterator<Item = ZodiacSign>) -> ElementTally {
    let mut elements = ElementCounts::default();
    let mut qualities = QualityCounts::default();
    for sign in signs {
        elements.0[sign.element().index()] += 1;
        qualities.0[sign.quality().index()] += 1;
    }

    let element = ALL_ASTRO_ELEMENTS[first_max(&elements.0)];
    let quality = ALL_QUALITIES[first_max(&qualities.0)];

    ElementTally {
        dominant: DominantElement {
            element,
            korean: element.korean(),
            count: elements.get(element),
        },
        dominant_quality: DominantQuality {
            quality,
            korean: quality.korean(),
            count: qualities.get(quality),
        },
        elements,
        qualities,
    }
}
