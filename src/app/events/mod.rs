//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.
//!
//! Intents beschreiben, was der Nutzer getan hat; Commands, was am State
//! passiert. Die Übersetzung liegt in `intent_mapping`.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
