mod error;
mod field;
mod language;
mod outcome;
mod updater;

pub mod config;
pub mod logging;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use field::{Field, FieldPath};
pub use language::Language;
pub use outcome::{Applied, Outcome, Resolution};
pub use updater::{select_target, UpdateRequest, Updater};

pub use mongodb::bson;

pub const DATABASE_NAME: &str = "Hull_Schemes";

pub const COLLECTION_NAME: &str = "All_agri";

/// Record that wins when several records share a slug and no `--id` was given.
pub const PREFERRED_RECORD_ID: &str = "775a846c8c5442458ea4860111b28c57";
