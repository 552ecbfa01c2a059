pub mod badge;
pub mod button;
pub mod input;
pub mod select;

pub use badge::{Badge, StatusBadge};
pub use button::Button;
pub use input::SearchInput;
pub use select::Select;
