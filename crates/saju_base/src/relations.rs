//! Stem and branch interactions (합·충·형·파·해).
//!
//! Pair relations are scanned over the six position pairs `(i, j)`, `i < j`,
//! of the four stems or branches. Triad and directional groups match by
//! subset: all three members present is a full group, two is partial.

use serde::Serialize;

use crate::branch::Branch;
use crate::calendar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::element::Element;
use crate::stem::Stem;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Element produced by a stem combination (甲己 土, 乙庚 金, 丙辛 水,
/// 丁壬 木, 戊癸 火).
pub const fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    let (lo, hi) = if a.index() < b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    if hi != lo + 5 {
        return None;
    }
    Some(match lo {
        0 => Element::Earth,
        1 => Element::Metal,
        2 => Element::Water,
        3 => Element::Wood,
        _ => Element::Fire,
    })
}

/// Element produced by a six-combination (子丑 土, 寅亥 木, 卯戌 火,
/// 辰酉 金, 巳申 水, 午未 土).
pub const fn six_combination(a: Branch, b: Branch) -> Option<Element> {
    use Branch::*;
    match (a, b) {
        (Ja, Chuk) | (Chuk, Ja) => Some(Element::Earth),
        (In, Hae) | (Hae, In) => Some(Element::Wood),
        (Myo, Sul) | (Sul, Myo) => Some(Element::Fire),
        (Jin, Yu) | (Yu, Jin) => Some(Element::Metal),
        (Sa, Sin) | (Sin, Sa) => Some(Element::Water),
        (O, Mi) | (Mi, O) => Some(Element::Earth),
        _ => None,
    }
}

/// Opposite branches clash (子午, 丑未, 寅申, 卯酉, 辰戌, 巳亥).
pub const fn clashes(a: Branch, b: Branch) -> bool {
    (a.index() + 6) % 12 == b.index()
}

/// Punishment: the 寅巳申 and 丑戌未 triangles, 子卯, and the self
/// punishments 辰辰, 午午, 酉酉, 亥亥.
pub const fn punishes(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        (a, b),
        (In, Sa | Sin)
            | (Sa, In | Sin)
            | (Sin, In | Sa)
            | (Chuk, Sul | Mi)
            | (Sul, Chuk | Mi)
            | (Mi, Chuk | Sul)
            | (Ja, Myo)
            | (Myo, Ja)
            | (Jin, Jin)
            | (O, O)
            | (Yu, Yu)
            | (Hae, Hae)
    )
}

/// Destruction (子酉, 丑辰, 寅亥, 卯午, 巳申, 未戌).
pub const fn destroys(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        (a, b),
        (Ja, Yu)
            | (Yu, Ja)
            | (Chuk, Jin)
            | (Jin, Chuk)
            | (In, Hae)
            | (Hae, In)
            | (Myo, O)
            | (O, Myo)
            | (Sa, Sin)
            | (Sin, Sa)
            | (Mi, Sul)
            | (Sul, Mi)
    )
}

/// Harm (子未, 丑午, 寅巳, 卯辰, 申亥, 酉戌).
pub const fn harms(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        (a, b),
        (Ja, Mi)
            | (Mi, Ja)
            | (Chuk, O)
            | (O, Chuk)
            | (In, Sa)
            | (Sa, In)
            | (Myo, Jin)
            | (Jin, Myo)
            | (Sin, Hae)
            | (Hae, Sin)
            | (Yu, Sul)
            | (Sul, Yu)
    )
}

/// A three-branch combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchGroup {
    pub members: [Branch; 3],
    pub result: Element,
    pub name: &'static str,
}

/// Triad combinations (삼합).
pub const TRIADS: [BranchGroup; 4] = [
    BranchGroup {
        members: [Branch::In, Branch::O, Branch::Sul],
        result: Element::Fire,
        name: "화국",
    },
    BranchGroup {
        members: [Branch::Sa, Branch::Yu, Branch::Chuk],
        result: Element::Metal,
        name: "금국",
    },
    BranchGroup {
        members: [Branch::Sin, Branch::Ja, Branch::Jin],
        result: Element::Water,
        name: "수국",
    },
    BranchGroup {
        members: [Branch::Hae, Branch::Myo, Branch::Mi],
        result: Element::Wood,
        name: "목국",
    },
];

/// Directional combinations (방합).
pub const DIRECTIONALS: [BranchGroup; 4] = [
    BranchGroup {
        members: [Branch::In, Branch::Myo, Branch::Jin],
        result: Element::Wood,
        name: "동방목국",
    },
    BranchGroup {
        members: [Branch::Sa, Branch::O, Branch::Mi],
        result: Element::Fire,
        name: "남방화국",
    },
    BranchGroup {
        members: [Branch::Sin, Branch::Yu, Branch::Sul],
        result: Element::Metal,
        name: "서방금국",
    },
    BranchGroup {
        members: [Branch::Hae, Branch::Ja, Branch::Chuk],
        result: Element::Water,
        name: "북방수국",
    },
];

// ---------------------------------------------------------------------------
// Scan results
// ---------------------------------------------------------------------------

/// Kind of interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    StemCombination,
    SixCombination,
    Triad,
    Directional,
    Clash,
    Punishment,
    Destruction,
    Harm,
}

impl RelationKind {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::StemCombination => "천간합",
            Self::SixCombination => "육합",
            Self::Triad => "삼합",
            Self::Directional => "방합",
            Self::Clash => "충",
            Self::Punishment => "형",
            Self::Destruction => "파",
            Self::Harm => "해",
        }
    }

    /// Combinations are favourable; the other four are not.
    pub const fn is_favourable(self) -> bool {
        matches!(
            self,
            Self::StemCombination | Self::SixCombination | Self::Triad | Self::Directional
        )
    }
}

/// An interaction between two positions of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRelation {
    pub kind: RelationKind,
    pub first: PillarPosition,
    pub second: PillarPosition,
    /// Korean slot labels, e.g. `["년지", "일지"]`.
    pub labels: [&'static str; 2],
    /// Element produced, for combinations.
    pub result: Option<Element>,
    pub description: String,
}

/// A triad or directional group found among the four branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRelation {
    pub kind: RelationKind,
    pub name: &'static str,
    /// Members present, in table order.
    pub members: Vec<Branch>,
    pub full: bool,
    pub result: Element,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationSummary {
    pub good: u32,
    pub bad: u32,
    pub description: String,
}

/// Every interaction among the four pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationSet {
    pub stem_combinations: Vec<PairRelation>,
    pub six_combinations: Vec<PairRelation>,
    pub triads: Vec<GroupRelation>,
    pub directionals: Vec<GroupRelation>,
    pub clashes: Vec<PairRelation>,
    pub punishments: Vec<PairRelation>,
    pub destructions: Vec<PairRelation>,
    pub harms: Vec<PairRelation>,
    pub summary: RelationSummary,
}

impl RelationSet {
    /// All pair relations in scan order.
    pub fn pairs(&self) -> impl Iterator<Item = &PairRelation> {
        self.stem_combinations
            .iter()
            .chain(&self.six_combinations)
            .chain(&self.clashes)
            .chain(&self.punishments)
            .chain(&self.destructions)
            .chain(&self.harms)
    }
}

fn position_pairs() -> impl Iterator<Item = (PillarPosition, PillarPosition)> {
    (0..4).flat_map(|i| (i + 1..4).map(move |j| (ALL_POSITIONS[i], ALL_POSITIONS[j])))
}

fn scan_branch_pairs(
    pillars: &FourPillars,
    kind: RelationKind,
    test: impl Fn(Branch, Branch) -> Option<Option<Element>>,
) -> Vec<PairRelation> {
    position_pairs()
        .filter_map(|(a, b)| {
            let result = test(pillars.get(a).branch(), pillars.get(b).branch())?;
            Some(pair(kind, a, b, a.branch_label(), b.branch_label(), result))
        })
        .collect()
}

fn pair(
    kind: RelationKind,
    first: PillarPosition,
    second: PillarPosition,
    first_label: &'static str,
    second_label: &'static str,
    result: Option<Element>,
) -> PairRelation {
    let description = match result {
        Some(e) => format!("{first_label}-{second_label} {} → {e}", kind.korean()),
        None => format!("{first_label}-{second_label} {}", kind.korean()),
    };
    PairRelation {
        kind,
        first,
        second,
        labels: [first_label, second_label],
        result,
        description,
    }
}

fn flagged(test: fn(Branch, Branch) -> bool) -> impl Fn(Branch, Branch) -> Option<Option<Element>> {
    move |a, b| test(a, b).then_some(None)
}

fn scan_groups(
    branches: &[Branch; 4],
    kind: RelationKind,
    table: &[BranchGroup; 4],
) -> Vec<GroupRelation> {
    table
        .iter()
        .filter_map(|group| {
            let members: Vec<Branch> = group
                .members
                .iter()
                .copied()
                .filter(|m| branches.contains(m))
                .collect();
            if members.len() < 2 {
                return None;
            }
            let full = members.len() == 3;
            let joined: Vec<&str> = members.iter().map(|b| b.hanja()).collect();
            let description = if full {
                format!("{} complete ({})", group.name, joined.join("-"))
            } else {
                format!("{} partial ({})", group.name, joined.join("-"))
            };
            Some(GroupRelation {
                kind,
                name: group.name,
                members,
                full,
                result: group.result,
                description,
            })
        })
        .collect()
}

/// Scans the chart for every stem and branch interaction.
pub fn analyze_relations(pillars: &FourPillars) -> RelationSet {
    let stem_combinations = position_pairs()
        .filter_map(|(a, b)| {
            let e = stem_combination(pillars.get(a).stem(), pillars.get(b).stem())?;
            Some(pair(
                RelationKind::StemCombination,
                a,
                b,
                a.stem_label(),
                b.stem_label(),
                Some(e),
            ))
        })
        .collect();
    let six_combinations = scan_branch_pairs(pillars, RelationKind::SixCombination, |a, b| {
        six_combination(a, b).map(Some)
    });
    let clash_list = scan_branch_pairs(pillars, RelationKind::Clash, flagged(clashes));
    let punishments = scan_branch_pairs(pillars, RelationKind::Punishment, flagged(punishes));
    let destructions = scan_branch_pairs(pillars, RelationKind::Destruction, flagged(destroys));
    let harm_list = scan_branch_pairs(pillars, RelationKind::Harm, flagged(harms));

    let branches = pillars.branches();
    let triads = scan_groups(&branches, RelationKind::Triad, &TRIADS);
    let directionals = scan_groups(&branches, RelationKind::Directional, &DIRECTIONALS);

    let mut set = RelationSet {
        stem_combinations,
        six_combinations,
        triads,
        directionals,
        clashes: clash_list,
        punishments,
        destructions,
        harms: harm_list,
        summary: RelationSummary {
            good: 0,
            bad: 0,
            description: String::new(),
        },
    };
    let good = (set.stem_combinations.len()
        + set.six_combinations.len()
        + set.triads.len()
        + set.directionals.len()) as u32;
    let bad = (set.clashes.len() + set.punishments.len() + set.destructions.len() + set.harms.len())
        as u32;
    set.summary = RelationSummary {
        good,
        bad,
        description: format!("{good} combinations, {bad} clashes/punishments/destructions/harms"),
    };
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::sexagenary::Pillar;
    use crate::stem::ALL_STEMS;

    fn chart(names: [&str; 4]) -> FourPillars {
        let [y, m, d, h] = names.map(|n| Pillar::from_name(n).unwrap());
        FourPillars {
            year: y,
            month: m,
            day: d,
            hour: h,
        }
    }

    #[test]
    fn pair_tables_are_symmetric() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(six_combination(a, b), six_combination(b, a));
                assert_eq!(clashes(a, b), clashes(b, a));
                assert_eq!(punishes(a, b), punishes(b, a));
                assert_eq!(destroys(a, b), destroys(b, a));
                assert_eq!(harms(a, b), harms(b, a));
            }
        }
        for a in ALL_STEMS {
            for b in ALL_STEMS {
                assert_eq!(stem_combination(a, b), stem_combination(b, a));
            }
        }
    }

    #[test]
    fn each_branch_has_one_partner_per_table() {
        for a in ALL_BRANCHES {
            let count = |f: &dyn Fn(Branch) -> bool| ALL_BRANCHES.iter().filter(|b| f(**b)).count();
            assert_eq!(count(&|b| six_combination(a, b).is_some()), 1, "{a}");
            assert_eq!(count(&|b| clashes(a, b)), 1, "{a}");
            assert_eq!(count(&|b| destroys(a, b)), 1, "{a}");
            assert_eq!(count(&|b| harms(a, b)), 1, "{a}");
        }
    }

    #[test]
    fn stem_combination_results() {
        assert_eq!(stem_combination(Stem::Gap, Stem::Gi), Some(Element::Earth));
        assert_eq!(stem_combination(Stem::Gyeong, Stem::Eul), Some(Element::Metal));
        assert_eq!(stem_combination(Stem::Byeong, Stem::Sin), Some(Element::Water));
        assert_eq!(stem_combination(Stem::Jeong, Stem::Im), Some(Element::Wood));
        assert_eq!(stem_combination(Stem::Mu, Stem::Gye), Some(Element::Fire));
        assert_eq!(stem_combination(Stem::Gap, Stem::Gap), None);
    }

    #[test]
    fn scenario_1990_05_15() {
        // 庚午 辛巳 庚辰 癸未
        let r = analyze_relations(&FourPillars::compute(1990, 5, 15, 14));
        // 午未 six-combination (year-hour)
        assert_eq!(r.six_combinations.len(), 1);
        assert_eq!(r.six_combinations[0].labels, ["년지", "시지"]);
        assert_eq!(r.six_combinations[0].result, Some(Element::Earth));
        // 巳午未 southern directional, complete
        assert_eq!(r.directionals.len(), 1);
        assert!(r.directionals[0].full);
        assert_eq!(r.directionals[0].members, vec![Branch::Sa, Branch::O, Branch::Mi]);
        assert!(r.clashes.is_empty());
        assert!(r.stem_combinations.is_empty());
        assert_eq!(r.summary.good, 2);
        assert_eq!(r.summary.bad, 0);
    }

    #[test]
    fn clash_and_self_punishment() {
        // 午 in year and day: self punishment; 子 month clashes both
        let set = analyze_relations(&chart(["甲午", "丙子", "戊午", "庚申"]));
        assert_eq!(set.clashes.len(), 2);
        assert_eq!(set.punishments.len(), 1);
        assert_eq!(set.punishments[0].labels, ["년지", "일지"]);
        // 申子 from the 申子辰 triad: partial
        assert_eq!(set.triads.len(), 1);
        assert!(!set.triads[0].full);
        assert_eq!(set.triads[0].members, vec![Branch::Sin, Branch::Ja]);
        assert_eq!(set.summary.bad, 3);
    }

    #[test]
    fn stem_combination_labels() {
        let set = analyze_relations(&chart(["甲子", "己巳", "丙寅", "辛卯"]));
        assert_eq!(set.stem_combinations.len(), 2);
        assert_eq!(set.stem_combinations[0].labels, ["년간", "월간"]);
        assert_eq!(set.stem_combinations[0].description, "년간-월간 천간합 → 土");
        assert_eq!(set.stem_combinations[1].result, Some(Element::Water));
    }
}
