//! Демо-маршруты на сегодня

use super::aggregate::{RouteStatus, RouteStop, StaffRoute, StopStatus};
use once_cell::sync::Lazy;

static ROUTES: Lazy<Vec<StaffRoute>> = Lazy::new(|| {
    use StopStatus::*;

    vec![
        route(
            "1",
            "Tanaka Hiroshi",
            "T",
            RouteStatus::InProgress,
            (4, 2),
            "2h 45m",
            vec![
                stop("1-1", "Electronics Plaza Shibuya", "Shibuya", 3, "10:30", Completed),
                stop("1-2", "Muji Shinjuku", "Shinjuku", 2, "11:15", Completed),
                stop("1-3", "Bic Camera Ikebukuro", "Ikebukuro", 4, "12:30", Current),
                stop("1-4", "Uniqlo Ginza", "Ginza", 3, "14:00", Pending),
            ],
        ),
        route(
            "2",
            "Suzuki Yuki",
            "S",
            RouteStatus::InProgress,
            (3, 1),
            "2h 00m",
            vec![
                stop("2-1", "Gourmet Market Ginza", "Ginza", 5, "10:00", Completed),
                stop("2-2", "Specialty Foods Daikanyama", "Daikanyama", 2, "11:30", Current),
                stop("2-3", "Itoya Stationery", "Ginza", 1, "12:30", Pending),
            ],
        ),
        route(
            "3",
            "Yamamoto Ken",
            "Y",
            RouteStatus::NotStarted,
            (5, 0),
            "3h 15m",
            vec![
                stop("3-1", "Tech Hub Akihabara", "Akihabara", 6, "10:00", Pending),
                stop("3-2", "Electronics Plaza Akihabara", "Akihabara", 3, "10:45", Pending),
                stop("3-3", "Camera Store Shinjuku", "Shinjuku", 2, "12:00", Pending),
                stop("3-4", "Audio Shop Shibuya", "Shibuya", 2, "13:15", Pending),
                stop("3-5", "Home Goods Meguro", "Meguro", 2, "14:30", Pending),
            ],
        ),
    ]
});

/// `stop_counts` is (total stops, completed stops) as shown on the card.
fn route(
    id: &str,
    staff_name: &str,
    staff_avatar: &str,
    status: RouteStatus,
    stop_counts: (u32, u32),
    estimated_duration: &str,
    stops: Vec<RouteStop>,
) -> StaffRoute {
    let (total_stops, completed_stops) = stop_counts;
    StaffRoute {
        id: id.to_string(),
        staff_name: staff_name.to_string(),
        staff_avatar: staff_avatar.to_string(),
        status,
        total_stops,
        completed_stops,
        estimated_duration: estimated_duration.to_string(),
        stops,
    }
}

fn stop(
    id: &str,
    store_name: &str,
    address: &str,
    orders: u32,
    estimated_time: &str,
    status: StopStatus,
) -> RouteStop {
    RouteStop {
        id: id.to_string(),
        store_name: store_name.to_string(),
        address: address.to_string(),
        orders,
        estimated_time: estimated_time.to_string(),
        status,
    }
}

pub fn routes() -> &'static [StaffRoute] {
    &ROUTES
}
