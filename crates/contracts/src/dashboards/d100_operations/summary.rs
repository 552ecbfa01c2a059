/// Headline figures of the dashboard for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryFigures {
    pub total_orders: u32,
    /// Percent change against the previous day
    pub orders_trend: i32,
    pub stores_to_visit: u32,
    pub districts: u32,
    pub active_staff: u32,
    pub assigned_staff: u32,
    pub completed_items: u32,
    pub completion_trend: i32,
    pub pending_assignment: u32,
    pub in_progress: u32,
    pub failed: u32,
}

pub const SUMMARY: SummaryFigures = SummaryFigures {
    total_orders: 147,
    orders_trend: 12,
    stores_to_visit: 38,
    districts: 5,
    active_staff: 5,
    assigned_staff: 6,
    completed_items: 101,
    completion_trend: 5,
    pending_assignment: 23,
    in_progress: 46,
    failed: 8,
};

impl SummaryFigures {
    /// Whole percent of completed items, rounded down.
    pub fn completion_percent(&self) -> u32 {
        if self.total_orders == 0 {
            0
        } else {
            self.completed_items * 100 / self.total_orders
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_percent() {
        assert_eq!(SUMMARY.completion_percent(), 68);
    }

    #[test]
    fn test_completion_percent_without_orders() {
        let empty = SummaryFigures {
            total_orders: 0,
            completed_items: 0,
            ..SUMMARY
        };
        assert_eq!(empty.completion_percent(), 0);
    }
}
