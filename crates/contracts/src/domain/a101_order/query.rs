use super::aggregate::{Order, OrderStatus};
use crate::shared::filter::{filter_records, SelectFilter};

/// Orders view filter state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderQuery {
    pub search: String,
    pub status: SelectFilter<OrderStatus>,
}

impl OrderQuery {
    pub fn new(search: impl Into<String>, status: SelectFilter<OrderStatus>) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }
}

/// Фильтрует заказы по названию/SKU/номеру и статусу
pub fn filter_orders(orders: &[Order], query: &OrderQuery) -> Vec<Order> {
    filter_records(orders, &query.search, |o| query.status.accepts(&o.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_order::seed::orders;

    fn ids(list: &[Order]) -> Vec<&str> {
        list.iter().map(|o| o.id.as_str()).collect()
    }

    fn queries() -> Vec<OrderQuery> {
        let mut out = Vec::new();
        for search in ["", "sku", "premium", "ginza", "ord-00", "xyz"] {
            out.push(OrderQuery::new(search, SelectFilter::All));
            for status in [OrderStatus::Pending, OrderStatus::Assigned, OrderStatus::Failed] {
                out.push(OrderQuery::new(search, SelectFilter::Only(status)));
            }
        }
        out
    }

    #[test]
    fn test_default_query_returns_everything_in_order() {
        let result = filter_orders(orders(), &OrderQuery::default());
        assert_eq!(result, orders().to_vec());
    }

    #[test]
    fn test_exact_id_finds_record() {
        for order in orders() {
            let result = filter_orders(orders(), &OrderQuery::new(order.id.clone(), SelectFilter::All));
            assert!(result.contains(order), "{} not found by its id", order.id);
        }
    }

    #[test]
    fn test_search_ignores_case() {
        let lower = filter_orders(orders(), &OrderQuery::new("sku-12345", SelectFilter::All));
        let upper = filter_orders(orders(), &OrderQuery::new("SKU-12345", SelectFilter::All));
        assert_eq!(lower, upper);
        assert_eq!(ids(&lower), vec!["ORD-001"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        for query in queries() {
            let once = filter_orders(orders(), &query);
            let twice = filter_orders(&once, &query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_status_filter_narrows_both_ways() {
        for query in queries() {
            let result = filter_orders(orders(), &query);
            let search_only = filter_orders(orders(), &OrderQuery::new(query.search.clone(), SelectFilter::All));
            let status_only = filter_orders(orders(), &OrderQuery::new("", query.status.clone()));
            assert!(result.iter().all(|o| search_only.contains(o)));
            assert!(result.iter().all(|o| status_only.contains(o)));
        }
    }

    #[test]
    fn test_headphones_search() {
        let result = filter_orders(orders(), &OrderQuery::new("headphones", SelectFilter::All));
        assert_eq!(ids(&result), vec!["ORD-001"]);
    }

    #[test]
    fn test_pending_filter() {
        let result = filter_orders(orders(), &OrderQuery::new("", SelectFilter::Only(OrderStatus::Pending)));
        assert_eq!(ids(&result), vec!["ORD-002", "ORD-006"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let result = filter_orders(orders(), &OrderQuery::new("premium", SelectFilter::Only(OrderStatus::Failed)));
        assert!(result.is_empty());
    }
}
