//! Виджет «Заказы на сегодня»
//!
//! The widget has its own four-state status, narrower than the Orders view.

use crate::shared::display::{CodedEnum, StatusMeta, Tone};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodayOrderStatus {
    Pending,
    Assigned,
    Purchased,
    Failed,
}

impl CodedEnum for TodayOrderStatus {
    const KIND: &'static str = "today order status";

    fn code(&self) -> &'static str {
        match self {
            TodayOrderStatus::Pending => "pending",
            TodayOrderStatus::Assigned => "assigned",
            TodayOrderStatus::Purchased => "purchased",
            TodayOrderStatus::Failed => "failed",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            TodayOrderStatus::Pending => StatusMeta::new("Pending", Tone::Neutral),
            TodayOrderStatus::Assigned => StatusMeta::new("Assigned", Tone::Primary),
            TodayOrderStatus::Purchased => StatusMeta::new("Purchased", Tone::Success),
            TodayOrderStatus::Failed => StatusMeta::new("Failed", Tone::Error),
        }
    }

    fn all() -> &'static [Self] {
        &[
            TodayOrderStatus::Pending,
            TodayOrderStatus::Assigned,
            TodayOrderStatus::Purchased,
            TodayOrderStatus::Failed,
        ]
    }
}

crate::impl_code_conversions!(TodayOrderStatus);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayOrder {
    pub id: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub store: String,
    pub assigned_to: String,
    pub status: TodayOrderStatus,
    pub order_date: NaiveDate,
}

static TODAY_ORDERS: Lazy<Vec<TodayOrder>> = Lazy::new(|| {
    use TodayOrderStatus::*;

    vec![
        today_order("ORD-001", "SKU-12345", "Premium Wireless Headphones", 2, "Electronics Plaza", "Tanaka", Assigned),
        today_order("ORD-002", "SKU-67890", "Organic Green Tea Set", 5, "Gourmet Market", "Suzuki", Pending),
        today_order("ORD-003", "SKU-11111", "Portable Charger 20000mAh", 3, "Tech Hub", "Yamamoto", Purchased),
        today_order("ORD-004", "SKU-22222", "Artisan Coffee Beans 1kg", 4, "Specialty Foods", "Watanabe", Failed),
        today_order("ORD-005", "SKU-33333", "Bamboo Desk Organizer", 1, "Home Goods Plus", "Ito", Assigned),
    ]
});

fn today_order(
    id: &str,
    sku: &str,
    product_name: &str,
    quantity: u32,
    store: &str,
    assigned_to: &str,
    status: TodayOrderStatus,
) -> TodayOrder {
    TodayOrder {
        id: id.to_string(),
        sku: sku.to_string(),
        product_name: product_name.to_string(),
        quantity,
        store: store.to_string(),
        assigned_to: assigned_to.to_string(),
        status,
        order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
    }
}

pub fn today_orders() -> &'static [TodayOrder] {
    &TODAY_ORDERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_status_set_is_narrower() {
        assert_eq!(TodayOrderStatus::all().len(), 4);
        assert!("discontinued".parse::<TodayOrderStatus>().is_err());
        assert_eq!(today_orders().len(), 5);
    }
}
