pub mod menu;

pub use menu::{MenuItemPayload, MenuItemResponse};
