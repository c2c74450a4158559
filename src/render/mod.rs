pub mod cards;

pub use cards::{EntryCard, render_entries, render_entry};
