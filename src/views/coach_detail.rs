use crate::domain::filter::filter_students;
use crate::domain::model::{Coach, Student, YearFilter};
use crate::domain::ports::{CoachApi, Navigator};
use crate::utils::error::{AppError, Result};
use crate::views::fetch::{FetchTicket, Generation};
use crate::views::navigation::Route;
use crate::views::table::Table;

pub const HEADING: &str = "Curriculum Coach";
pub const ROLE: &str = "Curriculum Coach";
pub const LOADING: &str = "Loading...";
pub const SEARCH_PLACEHOLDER: &str = "Search Students here...";
pub const HEADERS: [&str; 3] = ["Student Name", "Student ID", "Email"];

/// A coach together with the students projected from its assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachSnapshot {
    pub coach: Coach,
    pub students: Vec<Student>,
}

impl TryFrom<Coach> for CoachSnapshot {
    type Error = AppError;

    fn try_from(coach: Coach) -> Result<Self> {
        let students = coach.students()?;
        Ok(Self { coach, students })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoachPage {
    pub heading: &'static str,
    pub name: String,
    pub role: &'static str,
    /// Size of the whole caseload, independent of search and year filter.
    pub assigned_count: usize,
    pub table: Table,
}

impl CoachPage {
    pub fn assigned_label(&self) -> String {
        format!("No. of assigned students {} Students", self.assigned_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPage {
    Loading,
    Ready(CoachPage),
}

#[derive(Debug)]
pub struct CoachDetailView {
    coach_id: String,
    snapshot: Option<CoachSnapshot>,
    search: String,
    year: YearFilter,
    generation: Generation,
}

impl CoachDetailView {
    pub fn new(coach_id: impl Into<String>) -> Self {
        Self {
            coach_id: coach_id.into(),
            snapshot: None,
            search: String::new(),
            year: YearFilter::All,
            generation: Generation::default(),
        }
    }

    pub async fn mount<A: CoachApi + ?Sized>(&mut self, api: &A) {
        self.refresh(api).await;
    }

    /// Issues exactly one fetch per change of id. The previous coach is
    /// dropped right away so the page shows the loading placeholder until the
    /// new record lands.
    pub async fn set_coach_id<A: CoachApi + ?Sized>(
        &mut self,
        coach_id: impl Into<String>,
        api: &A,
    ) {
        let coach_id = coach_id.into();
        if coach_id == self.coach_id {
            return;
        }
        self.coach_id = coach_id;
        self.snapshot = None;
        self.refresh(api).await;
    }

    async fn refresh<A: CoachApi + ?Sized>(&mut self, api: &A) {
        let (ticket, coach_id) = self.begin_fetch();
        let result = api.get_coach(&coach_id).await;
        self.apply(ticket, result);
    }

    pub fn begin_fetch(&mut self) -> (FetchTicket, String) {
        (self.generation.issue(), self.coach_id.clone())
    }

    /// Failures, including a record without assignments, leave the snapshot
    /// untouched.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Coach>) {
        if !self.generation.is_current(ticket) {
            tracing::debug!("Discarding stale coach response {:?}", ticket);
            return;
        }
        match result.and_then(CoachSnapshot::try_from) {
            Ok(snapshot) => {
                tracing::debug!(
                    "Loaded coach {} with {} students",
                    snapshot.coach.id,
                    snapshot.students.len()
                );
                self.snapshot = Some(snapshot);
            }
            Err(e) => tracing::error!("Error fetching coach details: {}", e),
        }
    }

    pub fn coach_id(&self) -> &str {
        &self.coach_id
    }

    pub fn snapshot(&self) -> Option<&CoachSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn year_filter(&self) -> YearFilter {
        self.year
    }

    pub fn set_year_filter(&mut self, year: YearFilter) {
        self.year = year;
    }

    pub fn year_filter_options(&self) -> Vec<(&'static str, &'static str)> {
        YearFilter::options()
    }

    pub fn assigned_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.students.len())
    }

    pub fn visible_students(&self) -> Vec<&Student> {
        match &self.snapshot {
            Some(snapshot) => filter_students(&snapshot.students, &self.search, self.year),
            None => Vec::new(),
        }
    }

    pub fn render(&self) -> DetailPage {
        let Some(snapshot) = &self.snapshot else {
            return DetailPage::Loading;
        };

        let mut table = Table::new(&HEADERS);
        for student in self.visible_students() {
            table.push_row(vec![
                student.full_name(),
                student
                    .student_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                student.email.clone(),
            ]);
        }

        DetailPage::Ready(CoachPage {
            heading: HEADING,
            name: snapshot.coach.full_name(),
            role: ROLE,
            assigned_count: snapshot.students.len(),
            table,
        })
    }

    /// `row` indexes the visible (filtered) roster.
    pub fn view_subjects<N: Navigator + ?Sized>(
        &self,
        row: usize,
        navigator: &mut N,
    ) -> Result<()> {
        let visible = self.visible_students();
        let student = visible.get(row).ok_or(AppError::InvalidRow {
            row,
            len: visible.len(),
        })?;
        navigator.navigate(Route::StudentSubjects(student.id.clone()));
        Ok(())
    }

    pub fn go_to_dashboard<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(Route::Dashboard);
    }

    pub fn view_summary<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(Route::Summary);
    }
}
