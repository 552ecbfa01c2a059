use super::aggregate::{Store, StoreStatus};

/// Summary row of the Stores view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub total: usize,
    pub open_now: usize,
    /// Stores with at least one order today
    pub to_visit_today: usize,
    pub total_orders: u32,
}

impl StoreStats {
    pub fn compute(stores: &[Store]) -> Self {
        Self {
            total: stores.len(),
            open_now: stores
                .iter()
                .filter(|s| s.status == StoreStatus::Open)
                .count(),
            to_visit_today: stores.iter().filter(|s| s.has_orders_today()).count(),
            total_orders: stores.iter().map(|s| s.orders_today).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a103_store::seed::stores;

    #[test]
    fn test_seed_stats() {
        assert_eq!(
            StoreStats::compute(stores()),
            StoreStats {
                total: 8,
                open_now: 7,
                to_visit_today: 8,
                total_orders: 49,
            }
        );
    }

    #[test]
    fn test_unknown_status_is_not_open() {
        let mut list = stores().to_vec();
        list[0].status = StoreStatus::Unknown;
        list[1].orders_today = 0;
        let stats = StoreStats::compute(&list);
        assert_eq!(stats.open_now, 6);
        assert_eq!(stats.to_visit_today, 7);
        assert_eq!(stats.total_orders, 44);
    }
}
