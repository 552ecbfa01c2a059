use crate::shared::display::{CodedEnum, StatusMeta, Tone};
use serde::{Deserialize, Serialize};

/// Рабочий статус сотрудника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    EnRoute,
    Idle,
    OffDuty,
}

impl CodedEnum for StaffStatus {
    const KIND: &'static str = "staff status";

    fn code(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::EnRoute => "en-route",
            StaffStatus::Idle => "idle",
            StaffStatus::OffDuty => "off-duty",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            StaffStatus::Active => StatusMeta::new("Active", Tone::Success),
            StaffStatus::EnRoute => StatusMeta::new("En Route", Tone::Primary),
            StaffStatus::Idle => StatusMeta::new("Idle", Tone::Warning),
            StaffStatus::OffDuty => StatusMeta::new("Off Duty", Tone::Neutral),
        }
    }

    fn all() -> &'static [Self] {
        &[
            StaffStatus::Active,
            StaffStatus::EnRoute,
            StaffStatus::Idle,
            StaffStatus::OffDuty,
        ]
    }
}

crate::impl_code_conversions!(StaffStatus);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffRole {
    Buyer,
    Supervisor,
    Admin,
}

impl CodedEnum for StaffRole {
    const KIND: &'static str = "staff role";

    fn code(&self) -> &'static str {
        match self {
            StaffRole::Buyer => "buyer",
            StaffRole::Supervisor => "supervisor",
            StaffRole::Admin => "admin",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            StaffRole::Buyer => StatusMeta::new("Buyer", Tone::Neutral),
            StaffRole::Supervisor => StatusMeta::new("Supervisor", Tone::Primary),
            StaffRole::Admin => StatusMeta::new("Admin", Tone::Warning),
        }
    }

    fn all() -> &'static [Self] {
        &[StaffRole::Buyer, StaffRole::Supervisor, StaffRole::Admin]
    }
}

crate::impl_code_conversions!(StaffRole);

/// Сотрудник-закупщик
///
/// Counters are static figures; they are not derived from the order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// One or two glyphs shown in the avatar circle
    pub avatar: String,
    pub role: StaffRole,
    pub assigned_orders: u32,
    pub assigned_stores: u32,
    pub completed_today: u32,
    pub status: StaffStatus,
    pub start_location: String,
    pub current_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_codes() {
        assert_eq!(StaffStatus::EnRoute.code(), "en-route");
        assert_eq!("off-duty".parse::<StaffStatus>(), Ok(StaffStatus::OffDuty));
        assert_eq!(serde_json::to_string(&StaffStatus::OffDuty).unwrap(), "\"off-duty\"");
    }

    #[test]
    fn test_every_status_has_a_label() {
        let labels: Vec<&str> = StaffStatus::all().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Active", "En Route", "Idle", "Off Duty"]);
        let roles: Vec<&str> = StaffRole::all().iter().map(|r| r.label()).collect();
        assert_eq!(roles, vec!["Buyer", "Supervisor", "Admin"]);
    }
}
