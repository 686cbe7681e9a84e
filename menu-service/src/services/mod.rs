pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoMenuStore;
pub use memory::InMemoryMenuStore;
pub use self::metrics::{get_metrics, init_metrics, observe_store};
pub use store::{parse_id, MenuStore, StoreError, UnavailableStore};
