pub mod models;

pub use models::catalog;
pub use models::Joke;
