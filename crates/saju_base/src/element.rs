//! Five elements (오행) and yin/yang polarity.
//!
//! Generating cycle: wood → fire → earth → metal → water → wood.
//! Controlling cycle: wood → earth → water → fire → metal → wood.

use serde::{Serialize, Serializer};

/// One of the five elements, in the fixed order used for every tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in tally order (index 0 = wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Hanja (木 火 土 金 水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Hangul reading (목 화 토 금 수).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// 0-based index in [`ALL_ELEMENTS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The element this one produces.
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[(self.index() + 1) % 5]
    }

    /// The element this one overcomes.
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[(self.index() + 2) % 5]
    }

    /// `"목(木)"` style label.
    pub fn label(self) -> String {
        format!("{}({})", self.korean(), self.hanja())
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Hangul label (양 / 음).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

impl Serialize for Polarity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.korean())
    }
}

/// A value per element, indexed in [`ALL_ELEMENTS`] order.
///
/// Serialises as a map keyed by element hanja.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerElement<T>(pub [T; 5]);

impl<T: Copy> PerElement<T> {
    pub fn get(&self, element: Element) -> T {
        self.0[element.index()]
    }

    /// `(element, value)` pairs in tally order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, T)> + '_ {
        ALL_ELEMENTS.iter().map(|e| (*e, self.0[e.index()]))
    }
}

impl<T: Copy + std::ops::AddAssign> PerElement<T> {
    pub fn add(&mut self, element: Element, amount: T) {
        self.0[element.index()] += amount;
    }
}

impl PerElement<u32> {
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn as_f64(&self) -> [f64; 5] {
        self.0.map(f64::from)
    }
}

impl PerElement<f64> {
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T: Serialize> Serialize for PerElement<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, v) in ALL_ELEMENTS.iter().zip(self.0.iter()) {
            map.serialize_entry(e.hanja(), v)?;
        }
        map.end()
    }
}
