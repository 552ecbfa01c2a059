//! Демо-данные заказов (встроены в сборку)

use super::aggregate::{Order, OrderPriority, OrderStatus};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    use OrderPriority::*;
    use OrderStatus::*;

    vec![
        order("ORD-001", "SKU-12345", "Premium Wireless Headphones Sony WH-1000XM5", 2, "Electronics Plaza Shibuya", "Tanaka", Assigned, High),
        order("ORD-002", "SKU-67890", "Organic Matcha Green Tea Set Premium", 5, "Gourmet Market Ginza", "Suzuki", Pending, Normal),
        order("ORD-003", "SKU-11111", "Anker PowerCore 20000mAh Portable Charger", 3, "Tech Hub Akihabara", "Yamamoto", Purchased, Normal),
        order("ORD-004", "SKU-22222", "Blue Bottle Single Origin Coffee Beans 1kg", 4, "Specialty Foods Daikanyama", "Watanabe", Failed, Low),
        order("ORD-005", "SKU-33333", "Muji Bamboo Desk Organizer Large", 1, "Muji Shinjuku", "Ito", Assigned, High),
        order("ORD-006", "SKU-44444", "Nintendo Switch OLED Model White", 1, "Bic Camera Yurakucho", "", Pending, High),
        order("ORD-007", "SKU-55555", "Uniqlo Heattech Ultra Warm Set", 6, "Uniqlo Ginza", "Tanaka", Discontinued, Normal),
        order("ORD-008", "SKU-66666", "Pilot Kakuno Fountain Pen Set", 10, "Itoya Stationery", "Suzuki", Restocking, Low),
    ]
});

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    sku: &str,
    product_name: &str,
    quantity: u32,
    store: &str,
    assigned_to: &str,
    status: OrderStatus,
    priority: OrderPriority,
) -> Order {
    Order {
        id: id.to_string(),
        sku: sku.to_string(),
        product_name: product_name.to_string(),
        quantity,
        store: store.to_string(),
        assigned_to: assigned_to.to_string(),
        status,
        order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        priority,
    }
}

/// All orders in authored order.
pub fn orders() -> &'static [Order] {
    &ORDERS
}

#[cfg(test)]
pub fn find_order(id: &str) -> Option<&'static Order> {
    ORDERS.iter().find(|o| o.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_authored_order() {
        let ids: Vec<&str> = orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ORD-001", "ORD-002", "ORD-003", "ORD-004", "ORD-005", "ORD-006", "ORD-007", "ORD-008"]
        );
    }

    #[test]
    fn test_find_order() {
        let order = find_order("ORD-006").unwrap();
        assert!(!order.is_assigned());
        assert_eq!(order.order_date.to_string(), "2024-01-15");
        assert!(find_order("ORD-999").is_none());
    }
}
