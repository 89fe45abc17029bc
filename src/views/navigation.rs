use crate::domain::model::Identifier;
use crate::domain::ports::Navigator;
use std::fmt;

/// Destinations the coaching views can request from the host router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Summary,
    CoachDetails(Identifier),
    StudentSubjects(Identifier),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard?tab=dashboard".to_string(),
            Route::Summary => "/summary?tab=summary".to_string(),
            Route::CoachDetails(id) => format!("/programs/coach-details/{}", id),
            Route::StudentSubjects(id) => format!("/programs/student-subjects/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub routes: Vec<Route>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Route> {
        self.routes.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.routes.push(route);
    }
}

/// Writes the requested path to stdout for the CLI host.
#[derive(Debug, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&mut self, route: Route) {
        tracing::info!("Navigating to {}", route);
        println!("→ {}", route);
    }
}
