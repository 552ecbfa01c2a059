pub mod a101_order;
pub mod a102_staff;
pub mod a103_store;
pub mod a104_route;
