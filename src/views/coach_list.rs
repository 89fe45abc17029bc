use crate::domain::filter::filter_coaches;
use crate::domain::model::{Coach, Program, SemesterSchoolYear};
use crate::domain::ports::{CoachApi, Navigator};
use crate::utils::error::{AppError, Result};
use crate::views::fetch::{FetchTicket, Generation};
use crate::views::navigation::Route;
use crate::views::table::Table;

pub const TITLE: &str = "List of Curriculum Coaches";
pub const SEARCH_PLACEHOLDER: &str = "Search coaches here...";
pub const NO_COACHES_MESSAGE: &str = "No coaches found for this program.";
pub const HEADERS: [&str; 3] = ["Coach Name", "Coach No.", "Email"];

/// Coaches of one program, searchable by name or coach number.
#[derive(Debug, Default)]
pub struct CoachListView {
    program_id: Option<String>,
    programs: Vec<Program>,
    coaches: Vec<Coach>,
    search: String,
    semester: SemesterSchoolYear,
    programs_generation: Generation,
    coaches_generation: Generation,
}

impl CoachListView {
    /// An empty program id counts as absent.
    pub fn new(program_id: Option<String>) -> Self {
        Self {
            program_id: program_id.filter(|id| !id.is_empty()),
            ..Self::default()
        }
    }

    pub async fn mount<A: CoachApi + ?Sized>(&mut self, api: &A) {
        let ticket = self.begin_programs_fetch();
        let result = api.list_programs().await;
        self.apply_programs(ticket, result);

        self.refresh_coaches(api).await;
    }

    /// Re-fetches coaches when the id changes to a present value. Any request
    /// still in flight for the previous id is discarded when it lands.
    pub async fn set_program_id<A: CoachApi + ?Sized>(
        &mut self,
        program_id: Option<String>,
        api: &A,
    ) {
        let program_id = program_id.filter(|id| !id.is_empty());
        if program_id == self.program_id {
            return;
        }
        self.program_id = program_id;
        self.coaches_generation.invalidate();
        self.refresh_coaches(api).await;
    }

    async fn refresh_coaches<A: CoachApi + ?Sized>(&mut self, api: &A) {
        let Some((ticket, program_id)) = self.begin_coaches_fetch() else {
            tracing::debug!("No program id, skipping coach fetch");
            return;
        };
        let result = api.list_coaches(&program_id).await;
        self.apply_coaches(ticket, result);
    }

    pub fn begin_programs_fetch(&mut self) -> FetchTicket {
        self.programs_generation.issue()
    }

    pub fn apply_programs(&mut self, ticket: FetchTicket, result: Result<Vec<Program>>) {
        if !self.programs_generation.is_current(ticket) {
            tracing::debug!("Discarding stale programs response {:?}", ticket);
            return;
        }
        match result {
            Ok(programs) => {
                tracing::debug!("Loaded {} programs", programs.len());
                self.programs = programs;
            }
            Err(e) => tracing::error!("Error fetching programs: {}", e),
        }
    }

    /// `None` when there is no program id to scope the request by.
    pub fn begin_coaches_fetch(&mut self) -> Option<(FetchTicket, String)> {
        let program_id = self.program_id.clone()?;
        Some((self.coaches_generation.issue(), program_id))
    }

    pub fn apply_coaches(&mut self, ticket: FetchTicket, result: Result<Vec<Coach>>) {
        if !self.coaches_generation.is_current(ticket) {
            tracing::debug!("Discarding stale coaches response {:?}", ticket);
            return;
        }
        match result {
            Ok(coaches) => {
                tracing::debug!("Loaded {} coaches", coaches.len());
                self.coaches = coaches;
            }
            Err(e) => tracing::error!("Error fetching coaches: {}", e),
        }
    }

    pub fn program_id(&self) -> Option<&str> {
        self.program_id.as_deref()
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn semester(&self) -> SemesterSchoolYear {
        self.semester
    }

    /// Selection is kept for display; the roster does not depend on it.
    pub fn set_semester(&mut self, semester: SemesterSchoolYear) {
        self.semester = semester;
    }

    pub fn semester_options(&self) -> impl Iterator<Item = SemesterSchoolYear> {
        SemesterSchoolYear::options()
    }

    pub fn visible_coaches(&self) -> Vec<&Coach> {
        filter_coaches(&self.coaches, &self.search)
    }

    pub fn render(&self) -> Table {
        let mut table = Table::new(&HEADERS).with_empty_message(NO_COACHES_MESSAGE);
        for coach in self.visible_coaches() {
            table.push_row(vec![
                coach.full_name(),
                coach.coach_id.to_string(),
                coach.email.clone(),
            ]);
        }
        table
    }

    /// `row` indexes the visible (filtered) roster.
    pub fn view_details<N: Navigator + ?Sized>(
        &self,
        row: usize,
        navigator: &mut N,
    ) -> Result<()> {
        let visible = self.visible_coaches();
        let coach = visible.get(row).ok_or(AppError::InvalidRow {
            row,
            len: visible.len(),
        })?;
        navigator.navigate(Route::CoachDetails(coach.id.clone()));
        Ok(())
    }

    pub fn go_to_dashboard<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(Route::Dashboard);
    }

    pub fn view_summary<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(Route::Summary);
    }
}
