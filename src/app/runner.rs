use crate::domain::model::{SemesterSchoolYear, YearFilter};
use crate::domain::ports::{CoachApi, Navigator};
use crate::utils::error::Result;
use crate::views::coach_detail::{self, CoachDetailView, DetailPage};
use crate::views::coach_list::{self, CoachListView};
use crate::views::table::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    OpenRow(usize),
    Dashboard,
    Summary,
}

#[derive(Debug, Clone, Default)]
pub struct CoachListRequest {
    pub program_id: Option<String>,
    pub search: String,
    pub semester: SemesterSchoolYear,
    pub actions: Vec<PageAction>,
}

#[derive(Debug, Clone, Default)]
pub struct CoachDetailRequest {
    pub coach_id: String,
    pub search: String,
    pub year: YearFilter,
    pub actions: Vec<PageAction>,
}

/// Mounts one view against the backend, applies the requested inputs and
/// renders the resulting page as text.
pub struct RosterApp<A: CoachApi, N: Navigator> {
    api: A,
    navigator: N,
    format: OutputFormat,
}

impl<A: CoachApi, N: Navigator> RosterApp<A, N> {
    pub fn new(api: A, navigator: N, format: OutputFormat) -> Self {
        Self {
            api,
            navigator,
            format,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub async fn coach_list(&mut self, request: CoachListRequest) -> Result<String> {
        let mut view = CoachListView::new(request.program_id);
        view.mount(&self.api).await;
        view.set_search(request.search);
        view.set_semester(request.semester);

        tracing::info!(
            "Showing {} of {} coaches",
            view.visible_coaches().len(),
            view.coaches().len()
        );

        for action in request.actions {
            match action {
                PageAction::OpenRow(row) => view.view_details(row, &mut self.navigator)?,
                PageAction::Dashboard => view.go_to_dashboard(&mut self.navigator),
                PageAction::Summary => view.view_summary(&mut self.navigator),
            }
        }

        let table = view.render().render(self.format)?;
        if self.format != OutputFormat::Text {
            return Ok(table);
        }

        let mut lines = vec![coach_list::TITLE.to_string()];
        if view.search().is_empty() {
            lines.push(format!("Search: ({})", coach_list::SEARCH_PLACEHOLDER));
        } else {
            lines.push(format!("Search: {}", view.search()));
        }
        lines.push(format!("Semester: {}", view.semester().label()));
        lines.push(String::new());
        lines.push(table);
        Ok(lines.join("\n"))
    }

    pub async fn coach_detail(&mut self, request: CoachDetailRequest) -> Result<String> {
        let mut view = CoachDetailView::new(request.coach_id);
        view.mount(&self.api).await;

        if view.is_loading() {
            tracing::warn!("Coach {} did not load", view.coach_id());
            return Ok(coach_detail::LOADING.to_string());
        }
        view.set_search(request.search);
        view.set_year_filter(request.year);
        let DetailPage::Ready(page) = view.render() else {
            return Ok(coach_detail::LOADING.to_string());
        };

        for action in request.actions {
            match action {
                PageAction::OpenRow(row) => view.view_subjects(row, &mut self.navigator)?,
                PageAction::Dashboard => view.go_to_dashboard(&mut self.navigator),
                PageAction::Summary => view.view_summary(&mut self.navigator),
            }
        }

        let table = page.table.render(self.format)?;
        if self.format != OutputFormat::Text {
            return Ok(table);
        }

        let mut lines = vec![
            page.heading.to_string(),
            format!("{} ({})", page.name, page.role),
            page.assigned_label(),
        ];
        if view.search().is_empty() {
            lines.push(format!("Search: ({})", coach_detail::SEARCH_PLACEHOLDER));
        } else {
            lines.push(format!("Search: {}", view.search()));
        }
        lines.push(format!("Year: {}", view.year_filter().label()));
        lines.push(String::new());
        lines.push(table);
        Ok(lines.join("\n"))
    }
}
