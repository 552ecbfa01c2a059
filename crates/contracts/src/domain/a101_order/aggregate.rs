use crate::shared::display::{CodedEnum, StatusMeta, Tone};
use crate::shared::filter::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Статус заказа на закупку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Assigned,
    Purchased,
    Failed,
    Discontinued,
    Restocking,
}

impl CodedEnum for OrderStatus {
    const KIND: &'static str = "order status";

    fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Assigned => "assigned",
            OrderStatus::Purchased => "purchased",
            OrderStatus::Failed => "failed",
            OrderStatus::Discontinued => "discontinued",
            OrderStatus::Restocking => "restocking",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            OrderStatus::Pending => StatusMeta::new("Pending", Tone::Neutral),
            OrderStatus::Assigned => StatusMeta::new("Assigned", Tone::Primary),
            OrderStatus::Purchased => StatusMeta::new("Purchased", Tone::Success),
            OrderStatus::Failed => StatusMeta::new("Failed", Tone::Error),
            OrderStatus::Discontinued => StatusMeta::new("Discontinued", Tone::Error),
            OrderStatus::Restocking => StatusMeta::new("Restocking", Tone::Warning),
        }
    }

    fn all() -> &'static [Self] {
        &[
            OrderStatus::Pending,
            OrderStatus::Assigned,
            OrderStatus::Purchased,
            OrderStatus::Failed,
            OrderStatus::Discontinued,
            OrderStatus::Restocking,
        ]
    }
}

crate::impl_code_conversions!(OrderStatus);

/// Приоритет заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderPriority {
    High,
    Normal,
    Low,
}

impl CodedEnum for OrderPriority {
    const KIND: &'static str = "order priority";

    fn code(&self) -> &'static str {
        match self {
            OrderPriority::High => "high",
            OrderPriority::Normal => "normal",
            OrderPriority::Low => "low",
        }
    }

    fn meta(&self) -> StatusMeta {
        match self {
            OrderPriority::High => StatusMeta::new("High", Tone::Warning),
            OrderPriority::Normal => StatusMeta::new("Normal", Tone::Primary),
            OrderPriority::Low => StatusMeta::new("Low", Tone::Neutral),
        }
    }

    fn all() -> &'static [Self] {
        &[OrderPriority::High, OrderPriority::Normal, OrderPriority::Low]
    }
}

crate::impl_code_conversions!(OrderPriority);

/// Заказ на закупку
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub store: String,
    /// Empty when nobody has been assigned yet
    pub assigned_to: String,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub priority: OrderPriority,
}

impl Order {
    pub fn is_assigned(&self) -> bool {
        !self.assigned_to.is_empty()
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.sku.as_str(), self.id.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_roundtrip_through_from_str() {
        for status in OrderStatus::all() {
            assert_eq!(status.code().parse::<OrderStatus>(), Ok(*status));
        }
    }

    #[test]
    fn test_unknown_status_code_is_rejected() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown order status code: 'shipped'");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Discontinued).unwrap(),
            "\"discontinued\""
        );
        let priority: OrderPriority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(priority, OrderPriority::Low);
    }

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::Restocking.label(), "Restocking");
        assert_eq!(OrderStatus::Purchased.tone(), Tone::Success);
    }
}
