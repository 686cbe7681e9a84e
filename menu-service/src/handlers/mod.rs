pub mod error;
pub mod health;
pub mod menu;
pub mod payload;

pub use error::MenuError;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use menu::{create_menu_item, delete_menu_item, update_menu_item};
pub use payload::JsonOrEmpty;
