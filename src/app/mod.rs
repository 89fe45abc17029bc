pub mod runner;

pub use runner::{CoachDetailRequest, CoachListRequest, PageAction, RosterApp};
