//! Subcommand implementations.
//!
//! Commands write user-facing output to the given writer and take settings
//! and collaborators as arguments, so they run unchanged under test.

pub mod card;
pub mod find;
pub mod init;

pub use card::{card_path, new_card, open_card, remove_card};
pub use find::find_cards;
pub use init::init_settings;
