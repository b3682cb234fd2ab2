//! Ten Gods (십신): how each stem or branch relates to the day master.
//!
//! The element relation picks one of five categories; matching polarity
//! picks the "partial" (偏) member, differing polarity the "proper" (正)
//! member. Branches are classified by their primary element and polarity.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::calendar::{FourPillars, PillarPosition};
use crate::element::{Element, Polarity};
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// Element relation of a target to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGodCategory {
    /// Same element (비겁).
    Peer,
    /// The day master generates it (식상).
    Output,
    /// The day master controls it (재성).
    Wealth,
    /// It controls the day master (관성).
    Authority,
    /// It generates the day master (인성).
    Resource,
}

impl TenGodCategory {
    /// Category of `target` relative to a day master of element `day`.
    pub fn of(day: Element, target: Element) -> TenGodCategory {
        if target == day {
            Self::Peer
        } else if day.generates() == target {
            Self::Output
        } else if day.controls() == target {
            Self::Wealth
        } else if target.controls() == day {
            Self::Authority
        } else {
            Self::Resource
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Peer => "비겁",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Authority => "관성",
            Self::Resource => "인성",
        }
    }

    /// Member for matching (`true`) or differing polarity.
    pub const fn member(self, same_polarity: bool) -> TenGod {
        match (self, same_polarity) {
            (Self::Peer, true) => TenGod::Bigyeon,
            (Self::Peer, false) => TenGod::Geopjae,
            (Self::Output, true) => TenGod::Siksin,
            (Self::Output, false) => TenGod::Sanggwan,
            (Self::Wealth, true) => TenGod::Pyeonjae,
            (Self::Wealth, false) => TenGod::Jeongjae,
            (Self::Authority, true) => TenGod::Pyeongwan,
            (Self::Authority, false) => TenGod::Jeonggwan,
            (Self::Resource, true) => TenGod::Pyeonin,
            (Self::Resource, false) => TenGod::Jeongin,
        }
    }
}

/// One of the ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

/// All ten, grouped by category.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

impl TenGod {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geopjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Bigyeon => "Companion",
            Self::Geopjae => "Rob Wealth",
            Self::Siksin => "Eating God",
            Self::Sanggwan => "Hurting Officer",
            Self::Pyeonjae => "Indirect Wealth",
            Self::Jeongjae => "Direct Wealth",
            Self::Pyeongwan => "Seven Killings",
            Self::Jeonggwan => "Direct Officer",
            Self::Pyeonin => "Indirect Resource",
            Self::Jeongin => "Direct Resource",
        }
    }

    pub const fn category(self) -> TenGodCategory {
        match self {
            Self::Bigyeon | Self::Geopjae => TenGodCategory::Peer,
            Self::Siksin | Self::Sanggwan => TenGodCategory::Output,
            Self::Pyeonjae | Self::Jeongjae => TenGodCategory::Wealth,
            Self::Pyeongwan | Self::Jeonggwan => TenGodCategory::Authority,
            Self::Pyeonin | Self::Jeongin => TenGodCategory::Resource,
        }
    }

    /// Conventionally supportive gods (정재, 정관, 정인, 식신).
    pub const fn is_supportive(self) -> bool {
        matches!(
            self,
            Self::Jeongjae | Self::Jeonggwan | Self::Jeongin | Self::Siksin
        )
    }

    /// Gods that call for caution (상관, 겁재, 편관).
    pub const fn needs_caution(self) -> bool {
        matches!(self, Self::Sanggwan | Self::Geopjae | Self::Pyeongwan)
    }

    /// How this god colours a period or a relationship.
    pub const fn influence(self) -> &'static str {
        match self {
            Self::Bigyeon => {
                "Competitiveness and independence grow stronger. Siblings and peers come into focus."
            }
            Self::Geopjae => "Ambition and drive grow stronger. Money needs careful handling.",
            Self::Siksin => {
                "Expression and creativity are abundant. Food and speech are highlighted."
            }
            Self::Sanggwan => "A reforming, rebellious streak that challenges the existing order.",
            Self::Pyeonjae => "A feel for investment and business. Large sums pass through.",
            Self::Jeongjae => "Steady wealth built up through diligent effort.",
            Self::Pyeongwan => "A drive for power and control with strong charisma.",
            Self::Jeonggwan => "Discipline and responsibility. Social honour matters.",
            Self::Pyeonin => "Unusual scholarly talent and original thinking.",
            Self::Jeongin => "A strong thirst for learning. Close ties with one's mother.",
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.korean())
    }
}

/// Ten God of something with `element` and `polarity`, seen from `day_master`.
pub fn classify(day_master: Stem, element: Element, polarity: Polarity) -> TenGod {
    TenGodCategory::of(day_master.element(), element).member(day_master.polarity() == polarity)
}

/// Ten Gods of a pillar's stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodPair {
    pub stem: TenGod,
    pub branch: TenGod,
}

/// Ten Gods of `target` relative to the day pillar's stem.
pub fn ten_gods(day: &Pillar, target: &Pillar) -> TenGodPair {
    let dm = day.stem();
    TenGodPair {
        stem: classify(dm, target.stem().element(), target.stem().polarity()),
        branch: classify(dm, target.branch().element(), target.branch().polarity()),
    }
}

/// Ten Gods of the year, month and hour pillars. The day pillar is the
/// reference itself and serialises as `"self"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTenGods {
    pub year: TenGodPair,
    pub month: TenGodPair,
    pub hour: TenGodPair,
}

impl ChartTenGods {
    pub fn of(pillars: &FourPillars) -> Self {
        Self {
            year: ten_gods(&pillars.day, &pillars.year),
            month: ten_gods(&pillars.day, &pillars.month),
            hour: ten_gods(&pillars.day, &pillars.hour),
        }
    }

    /// `None` for the day pillar.
    pub const fn get(&self, position: PillarPosition) -> Option<TenGodPair> {
        match position {
            PillarPosition::Year => Some(self.year),
            PillarPosition::Month => Some(self.month),
            PillarPosition::Day => None,
            PillarPosition::Hour => Some(self.hour),
        }
    }

    /// `(position, pair)` for year, month, hour.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, TenGodPair)> {
        [
            (PillarPosition::Year, self.year),
            (PillarPosition::Month, self.month),
            (PillarPosition::Hour, self.hour),
        ]
        .into_iter()
    }
}

impl Serialize for ChartTenGods {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ChartTenGods", 4)?;
        st.serialize_field("year", &self.year)?;
        st.serialize_field("month", &self.month)?;
        st.serialize_field("day", "self")?;
        st.serialize_field("hour", &self.hour)?;
        st.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;
    use crate::sexagenary::pillar_at;
    use crate::stem::ALL_STEMS;

    #[test]
    fn total_over_all_combinations() {
        for day in ALL_ELEMENTS {
            for target in ALL_ELEMENTS {
                for same in [true, false] {
                    let god = TenGodCategory::of(day, target).member(same);
                    assert!(ALL_TEN_GODS.contains(&god));
                }
            }
        }
    }

    #[test]
    fn each_category_reached_once_per_day_element() {
        for day in ALL_ELEMENTS {
            let cats: std::collections::HashSet<_> = ALL_ELEMENTS
                .iter()
                .map(|t| TenGodCategory::of(day, *t))
                .collect();
            assert_eq!(cats.len(), 5, "day element {day}");
        }
    }

    #[test]
    fn wood_day_master_table() {
        let dm = Stem::Gap;
        assert_eq!(classify(dm, Element::Wood, Polarity::Yang), TenGod::Bigyeon);
        assert_eq!(classify(dm, Element::Wood, Polarity::Yin), TenGod::Geopjae);
        assert_eq!(classify(dm, Element::Fire, Polarity::Yang), TenGod::Siksin);
        assert_eq!(classify(dm, Element::Earth, Polarity::Yin), TenGod::Jeongjae);
        assert_eq!(classify(dm, Element::Metal, Polarity::Yang), TenGod::Pyeongwan);
        assert_eq!(classify(dm, Element::Water, Polarity::Yin), TenGod::Jeongin);
    }

    #[test]
    fn stem_against_itself_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(classify(s, s.element(), s.polarity()), TenGod::Bigyeon);
        }
    }

    #[test]
    fn pillar_pair() {
        // 庚辰 day, 庚午 year: stem 비견; 午 fire yang controls metal → 편관
        let pair = ten_gods(&pillar_at(16), &pillar_at(6));
        assert_eq!(pair.stem, TenGod::Bigyeon);
        assert_eq!(pair.branch, TenGod::Pyeongwan);
    }

    #[test]
    fn category_round_trip() {
        for g in ALL_TEN_GODS {
            let same = matches!(
                g,
                TenGod::Bigyeon
                    | TenGod::Siksin
                    | TenGod::Pyeonjae
                    | TenGod::Pyeongwan
                    | TenGod::Pyeonin
            );
            assert_eq!(g.category().member(same), g);
        }
    }
}
