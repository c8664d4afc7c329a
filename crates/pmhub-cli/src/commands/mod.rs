pub mod auth;
pub mod books;
pub mod case_studies;
mod dispatch;
pub mod schema;

pub use dispatch::{dispatch, logged};
