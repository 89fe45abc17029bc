pub mod coach_detail;
pub mod coach_list;
pub mod fetch;
pub mod navigation;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use coach_detail::{CoachDetailView, CoachPage, CoachSnapshot, DetailPage};
pub use coach_list::CoachListView;
pub use navigation::{PrintNavigator, RecordingNavigator, Route};
pub use table::{OutputFormat, Table};
