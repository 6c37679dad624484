pub mod model;
pub mod service;
pub mod store;

pub use model::stats::TodoStats;
pub use model::todo::Todo;
pub use model::user::User;
pub use service::todo_service::TodoService;
pub use service::user_service::UserService;
pub use store::{Record, RecordStore};
