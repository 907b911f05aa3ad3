pub mod health;
pub mod posts;

pub use health::health;
pub use posts::{CreateArgs, DeleteArgs, EditArgs, ShowArgs, create, delete, edit, list, show};
