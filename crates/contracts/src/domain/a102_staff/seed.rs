//! Демо-данные сотрудников

use super::aggregate::{StaffMember, StaffRole, StaffStatus};
use once_cell::sync::Lazy;

static STAFF: Lazy<Vec<StaffMember>> = Lazy::new(|| {
    use StaffRole::*;
    use StaffStatus::*;

    vec![
        member("1", "Tanaka Hiroshi", "tanaka", "090-1234-5678", "T", Buyer, (12, 4, 8), EnRoute, "Office (Roppongi)", Some("Shibuya District")),
        member("2", "Suzuki Yuki", "suzuki", "090-2345-6789", "S", Buyer, (8, 3, 5), Active, "Office (Roppongi)", Some("Shinjuku Station")),
        member("3", "Yamamoto Ken", "yamamoto", "090-3456-7890", "Y", Supervisor, (15, 5, 10), EnRoute, "Home (Ikebukuro)", Some("Ginza Area")),
        member("4", "Watanabe Mei", "watanabe", "090-4567-8901", "W", Buyer, (6, 2, 6), Idle, "Office (Roppongi)", None),
        member("5", "Ito Takeshi", "ito", "090-5678-9012", "I", Buyer, (10, 4, 7), Active, "Office (Roppongi)", Some("Akihabara")),
        member("6", "Sato Kenji", "sato", "090-6789-0123", "SK", Buyer, (0, 0, 0), OffDuty, "Office (Roppongi)", None),
    ]
});

/// `counts` is (assigned orders, assigned stores, completed today).
#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    mailbox: &str,
    phone: &str,
    avatar: &str,
    role: StaffRole,
    counts: (u32, u32, u32),
    status: StaffStatus,
    start_location: &str,
    current_location: Option<&str>,
) -> StaffMember {
    let (assigned_orders, assigned_stores, completed_today) = counts;
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{mailbox}@company.com"),
        phone: phone.to_string(),
        avatar: avatar.to_string(),
        role,
        assigned_orders,
        assigned_stores,
        completed_today,
        status,
        start_location: start_location.to_string(),
        current_location: current_location.map(str::to_string),
    }
}

pub fn staff() -> &'static [StaffMember] {
    &STAFF
}

#[cfg(test)]
pub fn find_staff_member(id: &str) -> Option<&'static StaffMember> {
    STAFF.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        assert_eq!(staff().len(), 6);
        let sato = find_staff_member("6").unwrap();
        assert_eq!(sato.avatar, "SK");
        assert_eq!(sato.status, StaffStatus::OffDuty);
        assert_eq!(sato.current_location, None);
        assert_eq!(find_staff_member("1").unwrap().email, "tanaka@company.com");
    }
}
