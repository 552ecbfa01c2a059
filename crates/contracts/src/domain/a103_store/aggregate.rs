use crate::shared::display::{CodedEnum, StatusMeta, Tone};
use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreStatus {
    Open,
    Closed,
    Unknown,
}

impl CodedEnum for StoreStatus {
    const KIND: &'static str = "store status";

    fn code(&self) -> &'static str {
        match self {
            StoreStatus::Open => "open",
            StoreStatus::Closed => "closed",
            StoreStatus::Unknown => "unknown",
        }
    }

    /// Anything that is not known to be open is shown as closed.
    fn meta(&self) -> StatusMeta {
        match self {
            StoreStatus::Open => StatusMeta::new("Open", Tone::Success),
            StoreStatus::Closed => StatusMeta::new("Closed", Tone::Error),
            StoreStatus::Unknown => StatusMeta::new("Closed", Tone::Error),
        }
    }

    fn all() -> &'static [Self] {
        &[StoreStatus::Open, StoreStatus::Closed, StoreStatus::Unknown]
    }
}

crate::impl_code_conversions!(StoreStatus);

/// Магазин из справочника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub district: String,
    pub category: String,
    pub operating_hours: String,
    /// Distance from the office, display text ("2.3 km")
    pub distance: String,
    /// Visit rank, 1 is most important
    pub priority: u8,
    pub orders_today: u32,
    pub status: StoreStatus,
}

impl Store {
    pub fn has_orders_today(&self) -> bool {
        self.orders_today > 0
    }
}

impl Searchable for Store {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.district.as_str()]
    }
}
