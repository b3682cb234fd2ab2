//! Five-element distribution of a chart.
//!
//! `distribution` counts each pillar's stem and branch primary element (8
//! slots). `detailed` adds every hidden stem weighted by `ratio / 100` on
//! top of that, so it always sums to 12.
//!
//! Strongest/weakest take the first strict extreme in wood, fire, earth,
//! metal, water order. Elements sharing the extreme count are listed in
//! the `*_tied` fields so multi-way ties stay visible.

use serde::Serialize;

use saju_math::population_variance;

use crate::calendar::FourPillars;
use crate::element::{ALL_ELEMENTS, Element, PerElement};
use crate::hidden_stems::hidden_stems;

/// An element and its slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementCount {
    pub element: Element,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementAnalysis {
    pub distribution: PerElement<u32>,
    pub detailed: PerElement<f64>,
    pub strongest: ElementCount,
    pub weakest: ElementCount,
    pub strongest_tied: Vec<Element>,
    pub weakest_tied: Vec<Element>,
    /// The element to reinforce: simply the weakest one.
    pub yongsin: Element,
}

impl ElementAnalysis {
    /// Population variance of the five slot counts.
    pub fn variance(&self) -> f64 {
        population_variance(&self.distribution.as_f64())
    }

    pub fn count(&self, element: Element) -> u32 {
        self.distribution.get(element)
    }
}

/// Tallies the chart's elements.
pub fn analyze_elements(pillars: &FourPillars) -> ElementAnalysis {
    let mut distribution = PerElement::<u32>::default();
    let mut detailed = PerElement::<f64>::default();

    for (_, pillar) in pillars.iter() {
        let stem = pillar.stem().element();
        let branch = pillar.branch().element();
        distribution.add(stem, 1);
        distribution.add(branch, 1);
        detailed.add(stem, 1.0);
        detailed.add(branch, 1.0);
        for h in hidden_stems(pillar.branch()) {
            detailed.add(h.stem.element(), f64::from(h.ratio) / 100.0);
        }
    }

    let mut strongest = ElementCount {
        element: Element::Wood,
        count: distribution.get(Element::Wood),
    };
    let mut weakest = strongest;
    for (element, count) in distribution.iter().skip(1) {
        if count > strongest.count {
            strongest = ElementCount { element, count };
        }
        if count < weakest.count {
            weakest = ElementCount { element, count };
        }
    }

    let tied = |target: u32| -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| distribution.get(*e) == target)
            .collect()
    };

    ElementAnalysis {
        strongest_tied: tied(strongest.count),
        weakest_tied: tied(weakest.count),
        yongsin: weakest.element,
        distribution,
        detailed,
        strongest,
        weakest,
    }
}
