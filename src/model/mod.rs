pub mod config;
pub mod entry;
pub mod id;

pub use config::{PlannerConfig, UiConfig};
pub use entry::{CalendarDay, ChronologicalWeek, Month, Nt90Day, ReadingEntry};
pub use id::{ParsedId, PlanKind};
