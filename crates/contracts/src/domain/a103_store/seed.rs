//! Демо-справочник магазинов

use super::aggregate::{Store, StoreStatus};
use once_cell::sync::Lazy;

static STORES: Lazy<Vec<Store>> = Lazy::new(|| {
    use StoreStatus::*;

    vec![
        store("1", "Electronics Plaza Shibuya", "1-21-3 Jinnan, Shibuya-ku", "Shibuya", "Electronics", "10:00 - 21:00", "2.3 km", 1, 8, Open),
        store("2", "Bic Camera Yurakucho", "1-11-1 Yurakucho, Chiyoda-ku", "Chiyoda", "Electronics", "10:00 - 22:00", "4.1 km", 2, 5, Open),
        store("3", "Gourmet Market Ginza", "4-6-16 Ginza, Chuo-ku", "Ginza", "Food & Beverage", "09:00 - 20:00", "3.8 km", 1, 12, Open),
        store("4", "Tech Hub Akihabara", "1-15-4 Sotokanda, Chiyoda-ku", "Akihabara", "Electronics", "11:00 - 20:00", "5.2 km", 3, 3, Open),
        store("5", "Muji Shinjuku", "3-15-15 Shinjuku, Shinjuku-ku", "Shinjuku", "Home & Lifestyle", "10:00 - 21:00", "3.0 km", 2, 6, Open),
        store("6", "Specialty Foods Daikanyama", "17-6 Sarugakucho, Shibuya-ku", "Daikanyama", "Food & Beverage", "10:00 - 19:00", "2.8 km", 2, 4, Open),
        store("7", "Uniqlo Ginza", "5-7-7 Ginza, Chuo-ku", "Ginza", "Fashion", "11:00 - 21:00", "4.0 km", 1, 9, Open),
        store("8", "Itoya Stationery", "2-7-15 Ginza, Chuo-ku", "Ginza", "Stationery", "10:00 - 20:00", "3.9 km", 3, 2, Closed),
    ]
});

#[allow(clippy::too_many_arguments)]
fn store(
    id: &str,
    name: &str,
    address: &str,
    district: &str,
    category: &str,
    operating_hours: &str,
    distance: &str,
    priority: u8,
    orders_today: u32,
    status: StoreStatus,
) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        district: district.to_string(),
        category: category.to_string(),
        operating_hours: operating_hours.to_string(),
        distance: distance.to_string(),
        priority,
        orders_today,
        status,
    }
}

pub fn stores() -> &'static [Store] {
    &STORES
}

#[cfg(test)]
pub fn find_store(id: &str) -> Option<&'static Store> {
    STORES.iter().find(|s| s.id == id)
}
