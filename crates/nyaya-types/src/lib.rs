pub mod actions;
pub mod calendar;
pub mod case;
pub mod common;
pub mod config;
pub mod error;
pub mod listing;
pub mod login;
pub mod person;
pub mod petition;
pub mod reports;
pub mod search;
pub mod settings;
pub mod store;

pub use actions::*;
pub use calendar::*;
pub use case::*;
pub use common::*;
pub use config::*;
pub use error::*;
pub use listing::*;
pub use login::*;
pub use person::*;
pub use petition::*;
pub use search::*;
pub use settings::*;
pub use store::*;
