//! Void branches (공망).
//!
//! Each ten-day decade of the cycle (甲子..癸酉, 甲戌..癸未, ...) pairs ten
//! stems with ten branches; the two branches left over are void for every
//! day pillar in that decade.

use serde::Serialize;

use crate::branch::Branch;
use crate::calendar::{FourPillars, PillarPosition};
use crate::sexagenary::Pillar;

const VOID_BY_DECADE: [[Branch; 2]; 6] = [
    [Branch::Sul, Branch::Hae],
    [Branch::Sin, Branch::Yu],
    [Branch::O, Branch::Mi],
    [Branch::Jin, Branch::Sa],
    [Branch::In, Branch::Myo],
    [Branch::Ja, Branch::Chuk],
];

/// The two void branches for a day pillar.
pub const fn void_branches(day: &Pillar) -> [Branch; 2] {
    VOID_BY_DECADE[(day.cycle_index() / 10) as usize]
}

/// A pillar whose branch is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoidFlag {
    pub position: PillarPosition,
    pub label: &'static str,
    pub branch: Branch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoidSet {
    pub branches: [Branch; 2],
    /// `"술(戌)"` style labels.
    pub labels: [String; 2],
    pub affected: Vec<VoidFlag>,
    pub has_void: bool,
    pub description: String,
}

/// Void branches of the day pillar and the year/month/hour pillars they hit.
pub fn void_set(pillars: &FourPillars) -> VoidSet {
    let branches = void_branches(&pillars.day);
    let affected: Vec<VoidFlag> = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Hour,
    ]
    .into_iter()
    .filter_map(|position| {
        let branch = pillars.get(position).branch();
        branches.contains(&branch).then_some(VoidFlag {
            position,
            label: position.branch_label(),
            branch,
        })
    })
    .collect();

    let description = if affected.is_empty() {
        "No void branches in the chart.".to_string()
    } else {
        let names: Vec<&str> = affected.iter().map(|f| f.position.name()).collect();
        format!("Void falls on the {} branch.", names.join(", "))
    };

    VoidSet {
        labels: branches.map(|b| format!("{}({})", b.korean(), b.hanja())),
        has_void: !affected.is_empty(),
        branches,
        affected,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::{SEXAGENARY_CYCLE, pillar_at};

    #[test]
    fn two_distinct_void_branches_for_every_day_pillar() {
        for day in SEXAGENARY_CYCLE {
            let [a, b] = void_branches(&day);
            assert_ne!(a, b);
            // Void branches never appear among the decade's own branches
            let start = (day.cycle_index() / 10) as i64 * 10;
            for i in start..start + 10 {
                let br = pillar_at(i).branch();
                assert!(br != a && br != b, "{day}: {br} is in its own decade");
            }
        }
    }

    #[test]
    fn decade_heads() {
        assert_eq!(void_branches(&pillar_at(0)), [Branch::Sul, Branch::Hae]);
        assert_eq!(void_branches(&pillar_at(10)), [Branch::Sin, Branch::Yu]);
        assert_eq!(void_branches(&pillar_at(59)), [Branch::Ja, Branch::Chuk]);
    }

    #[test]
    fn scenario_flags_hour() {
        // Day 庚辰 (decade 甲戌): 申酉 void; hour 未 is not void
        let v = void_set(&FourPillars::compute(1990, 5, 15, 14));
        assert_eq!(v.branches, [Branch::Sin, Branch::Yu]);
        assert!(!v.has_void);
        assert_eq!(v.description, "No void branches in the chart.");

        // Same day at 16:00 lands in the 申 hour
        let v = void_set(&FourPillars::compute(1990, 5, 15, 16));
        assert!(v.has_void);
        assert_eq!(v.affected[0].position, PillarPosition::Hour);
        assert_eq!(v.affected[0].label, "시지");
        assert_eq!(v.description, "Void falls on the hour branch.");
    }
}
