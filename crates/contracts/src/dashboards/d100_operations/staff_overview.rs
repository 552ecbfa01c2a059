//! Виджет «Статус сотрудников»

use crate::shared::display::{CodedEnum, StatusMeta, Tone};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Status set of the overview widget; it has no off-duty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapshotStatus {
    Active,
    EnRoute,
    Idle,
}

impl CodedEnum for SnapshotStatus {
    const KIND: &'static str = "staff snapshot status";

    fn code(&self) -> &'static str {
        match self {
            SnapshotStatus::Active => "active",
            SnapshotStatus::EnRoute => "en-route",
            SnapshotStatus::Idle => "idle",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            SnapshotStatus::Active => StatusMeta::new("Active", Tone::Success),
            SnapshotStatus::EnRoute => StatusMeta::new("En Route", Tone::Primary),
            SnapshotStatus::Idle => StatusMeta::new("Idle", Tone::Neutral),
        }
    }

    fn all() -> &'static [Self] {
        &[SnapshotStatus::Active, SnapshotStatus::EnRoute, SnapshotStatus::Idle]
    }
}

crate::impl_code_conversions!(SnapshotStatus);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSnapshot {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub assigned_orders: u32,
    pub assigned_stores: u32,
    pub status: SnapshotStatus,
    pub current_location: Option<String>,
}

static SNAPSHOTS: Lazy<Vec<StaffSnapshot>> = Lazy::new(|| {
    use SnapshotStatus::*;

    vec![
        snapshot("1", "Tanaka", "T", 12, 4, EnRoute, Some("Shibuya District")),
        snapshot("2", "Suzuki", "S", 8, 3, Active, Some("Shinjuku Station")),
        snapshot("3", "Yamamoto", "Y", 15, 5, EnRoute, Some("Ginza Area")),
        snapshot("4", "Watanabe", "W", 6, 2, Idle, None),
        snapshot("5", "Ito", "I", 10, 4, Active, Some("Akihabara")),
    ]
});

fn snapshot(
    id: &str,
    name: &str,
    avatar: &str,
    assigned_orders: u32,
    assigned_stores: u32,
    status: SnapshotStatus,
    current_location: Option<&str>,
) -> StaffSnapshot {
    StaffSnapshot {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        assigned_orders,
        assigned_stores,
        status,
        current_location: current_location.map(str::to_string),
    }
}

pub fn staff_snapshots() -> &'static [StaffSnapshot] {
    &SNAPSHOTS
}

pub struct StaffOverviewStats;

impl StaffOverviewStats {
    /// The widget counts everyone who is not idle.
    pub fn active_today(snapshots: &[StaffSnapshot]) -> usize {
        snapshots
            .iter()
            .filter(|s| s.status != SnapshotStatus::Idle)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_today_excludes_idle() {
        assert_eq!(StaffOverviewStats::active_today(staff_snapshots()), 4);
        assert_eq!(StaffOverviewStats::active_today(&[]), 0);
    }
}
