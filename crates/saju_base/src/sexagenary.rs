//! The sexagenary (60 갑자) cycle and the stem-branch `Pillar`.
//!
//! Cycle index `i` pairs stem `i mod 10` with branch `i mod 12`. Only pairs
//! of equal polarity occur, so a `Pillar` can only be built from a cycle
//! index or from a checked stem/branch pair.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::stem::Stem;

/// A stem-branch pair from the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

const fn build_cycle() -> [Pillar; 60] {
    let mut out = [Pillar {
        stem: Stem::Gap,
        branch: Branch::Ja,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar {
            stem: Stem::from_index(i as i64),
            branch: Branch::from_index(i as i64),
        };
        i += 1;
    }
    out
}

/// All 60 pillars in cycle order (index 0 = 甲子).
pub const SEXAGENARY_CYCLE: [Pillar; 60] = build_cycle();

/// Pillar at any integer cycle index, wrapped into 0..60.
pub const fn pillar_at(index: i64) -> Pillar {
    SEXAGENARY_CYCLE[index.rem_euclid(60) as usize]
}

impl Pillar {
    /// Builds a pillar, rejecting pairs that never occur in the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, SajuError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(SajuError::InvalidPillar { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Parses a two-character name such as `"甲子"` or `"갑자"`.
    pub fn from_name(name: &str) -> Result<Self, SajuError> {
        let mut chars = name.chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SajuError::UnknownName(name.to_string()));
        };
        let stem = Stem::from_name(s.encode_utf8(&mut [0; 4]))
            .ok_or_else(|| SajuError::UnknownName(name.to_string()))?;
        let branch = Branch::from_name(b.encode_utf8(&mut [0; 4]))
            .ok_or_else(|| SajuError::UnknownName(name.to_string()))?;
        Self::new(stem, branch)
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// Position in the 60-cycle (0..60).
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)`: `i = (6s − 5b) mod 60`.
    pub const fn cycle_index(&self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// The pillar `steps` positions further along the cycle.
    pub const fn offset(&self, steps: i64) -> Pillar {
        pillar_at(self.cycle_index() as i64 + steps)
    }

    /// Hanja name, e.g. `"庚午"`.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Hangul name, e.g. `"경오"`.
    pub fn korean(&self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Pillar", 4)?;
        st.serialize_field("stem", &self.stem)?;
        st.serialize_field("branch", &self.branch)?;
        st.serialize_field("name", &self.name())?;
        st.serialize_field("korean", &self.korean())?;
        st.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cycle_has_sixty_distinct_pairs() {
        let set: HashSet<_> = SEXAGENARY_CYCLE.iter().collect();
        assert_eq!(set.len(), 60);
    }

    #[test]
    fn cycle_closure() {
        for i in -180..180 {
            assert_eq!(pillar_at(i), pillar_at(i + 60), "index {i}");
        }
    }

    #[test]
    fn cycle_index_inverts_pillar_at() {
        for (i, p) in SEXAGENARY_CYCLE.iter().enumerate() {
            assert_eq!(p.cycle_index() as usize, i);
            assert_eq!(p.stem().index() as usize, i % 10);
            assert_eq!(p.branch().index() as usize, i % 12);
        }
    }

    #[test]
    fn known_names() {
        assert_eq!(pillar_at(0).name(), "甲子");
        assert_eq!(pillar_at(10).name(), "甲戌");
        assert_eq!(pillar_at(6).korean(), "경오");
        assert_eq!(pillar_at(59).name(), "癸亥");
    }

    #[test]
    fn rejects_mixed_polarity() {
        assert!(Pillar::new(Stem::Gap, Branch::Chuk).is_err());
        assert_eq!(Pillar::new(Stem::Gap, Branch::In).unwrap(), pillar_at(50));
    }

    #[test]
    fn parse_names() {
        assert_eq!(Pillar::from_name("庚辰").unwrap(), pillar_at(16));
        assert_eq!(Pillar::from_name("갑자").unwrap(), pillar_at(0));
        assert!(Pillar::from_name("甲").is_err());
        assert!(Pillar::from_name("甲丑").is_err());
    }

    #[test]
    fn offset_walks_the_cycle() {
        assert_eq!(pillar_at(59).offset(1), pillar_at(0));
        assert_eq!(pillar_at(0).offset(-1), pillar_at(59));
    }
}
