use crate::shared::display::{CodedEnum, StatusMeta, Tone};
use serde::{Deserialize, Serialize};

/// Статус маршрута сотрудника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl CodedEnum for RouteStatus {
    const KIND: &'static str = "route status";

    fn code(&self) -> &'static str {
        match self {
            RouteStatus::NotStarted => "not-started",
            RouteStatus::InProgress => "in-progress",
            RouteStatus::Completed => "completed",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            RouteStatus::NotStarted => StatusMeta::new("Not Started", Tone::Neutral),
            RouteStatus::InProgress => StatusMeta::new("In Progress", Tone::Primary),
            RouteStatus::Completed => StatusMeta::new("Completed", Tone::Success),
        }
    }

    fn all() -> &'static [Self] {
        &[
            RouteStatus::NotStarted,
            RouteStatus::InProgress,
            RouteStatus::Completed,
        ]
    }
}

crate::impl_code_conversions!(RouteStatus);

/// Статус отдельной остановки (независим от статуса маршрута)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopStatus {
    Pending,
    Current,
    Completed,
}

impl CodedEnum for StopStatus {
    const KIND: &'static str = "stop status";

    fn code(&self) -> &'static str {
        match self {
            StopStatus::Pending => "pending",
            StopStatus::Current => "current",
            StopStatus::Completed => "completed",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            StopStatus::Pending => StatusMeta::new("Pending", Tone::Neutral),
            StopStatus::Current => StatusMeta::new("Current", Tone::Primary),
            StopStatus::Completed => StatusMeta::new("Completed", Tone::Success),
        }
    }

    fn all() -> &'static [Self] {
        &[StopStatus::Pending, StopStatus::Current, StopStatus::Completed]
    }
}

crate::impl_code_conversions!(StopStatus);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub id: String,
    pub store_name: String,
    pub address: String,
    pub orders: u32,
    /// Planned arrival, "HH:MM"
    pub estimated_time: String,
    pub status: StopStatus,
}

/// Маршрут сотрудника на день
///
/// `stops` is the visitation order. `total_stops` and `completed_stops` are
/// authored figures and are not recomputed from `stops`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRoute {
    pub id: String,
    pub staff_name: String,
    pub staff_avatar: String,
    pub status: RouteStatus,
    pub total_stops: u32,
    pub completed_stops: u32,
    pub estimated_duration: String,
    pub stops: Vec<RouteStop>,
}
