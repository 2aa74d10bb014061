pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;
pub mod view;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use state::*;
pub use store::*;
pub use view::*;
