use super::aggregate::{StaffMember, StaffStatus};

/// Summary row of the Staff view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaffStats {
    pub total: usize,
    /// Everyone not off duty
    pub active_today: usize,
    pub en_route: usize,
    pub completed_orders: u32,
}

impl StaffStats {
    pub fn compute(staff: &[StaffMember]) -> Self {
        Self {
            total: staff.len(),
            active_today: staff
                .iter()
                .filter(|s| s.status != StaffStatus::OffDuty)
                .count(),
            en_route: staff
                .iter()
                .filter(|s| s.status == StaffStatus::EnRoute)
                .count(),
            completed_orders: staff.iter().map(|s| s.completed_today).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a102_staff::seed::staff;

    #[test]
    fn test_seed_stats() {
        let stats = StaffStats::compute(staff());
        assert_eq!(
            stats,
            StaffStats {
                total: 6,
                active_today: 5,
                en_route: 2,
                completed_orders: 36,
            }
        );
    }

    #[test]
    fn test_active_today_matches_recount() {
        let direct = staff()
            .iter()
            .filter(|s| s.status.to_string() != "off-duty")
            .count();
        assert_eq!(StaffStats::compute(staff()).active_today, direct);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(StaffStats::compute(&[]), StaffStats::default());
    }
}
