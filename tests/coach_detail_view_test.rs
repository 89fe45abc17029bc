use anyhow::Result;
use coach_roster::domain::model::YearFilter;
use coach_roster::views::{DetailPage, RecordingNavigator, Route};
use coach_roster::{CoachDetailView, HttpCoachApi, MemoryTokenStore};
use httpmock::prelude::*;
use std::sync::Arc;

fn api_for(server: &MockServer) -> HttpCoachApi {
    HttpCoachApi::new(
        server.base_url(),
        Arc::new(MemoryTokenStore::with_access_token("coach-token")),
    )
}

fn coach_body(id: i64, students: serde_json::Value) -> serde_json::Value {
    let assignments: Vec<serde_json::Value> = students
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, student)| serde_json::json!({"id": i, "student": student}))
        .collect();
    serde_json::json!({
        "id": id,
        "coachId": 100 + id,
        "firstName": "Ana",
        "lastName": "Cruz",
        "email": "ana@school.edu",
        "assignments": assignments
    })
}

fn students_body() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "firstName": "Jo", "lastName": "Lee", "studentId": "2024-0001", "email": "jo@school.edu", "yearLevel": "second"},
        {"id": 2, "firstName": "Mia", "lastName": "Santos", "studentId": "2024-0002", "email": "mia@school.edu", "yearLevel": "FIRST"},
        {"id": 3, "firstName": "Leo", "lastName": "Reyes", "studentId": 20240003, "email": "leo@school.edu", "yearLevel": "Second"},
        {"id": 1, "firstName": "Jo", "lastName": "Lee", "studentId": "2024-0001", "email": "jo@school.edu", "yearLevel": "second"}
    ])
}

#[tokio::test]
async fn test_detail_page_filters_and_counts() -> Result<()> {
    let server = MockServer::start();
    let coach_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/coaches/8")
            .header("authorization", "Bearer coach-token");
        then.status(200).json_body(coach_body(8, students_body()));
    });

    let api = api_for(&server);
    let mut view = CoachDetailView::new("8");
    view.mount(&api).await;
    coach_mock.assert();

    let DetailPage::Ready(page) = view.render() else {
        panic!("coach should be loaded");
    };
    assert_eq!(page.name, "Ana Cruz");
    // duplicate assignments stay in the roster
    assert_eq!(page.assigned_count, 4);
    assert_eq!(page.table.rows[2][1], "20240003");

    view.set_year_filter("SECOND".parse::<YearFilter>()?);
    view.set_search("LEE");
    let DetailPage::Ready(page) = view.render() else {
        panic!("coach should be loaded");
    };
    assert_eq!(page.table.rows.len(), 2);
    assert_eq!(page.assigned_count, 4);

    let mut nav = RecordingNavigator::new();
    view.view_subjects(1, &mut nav)?;
    view.go_to_dashboard(&mut nav);
    assert_eq!(
        nav.routes.iter().map(Route::path).collect::<Vec<_>>(),
        vec!["/programs/student-subjects/1", "/dashboard?tab=dashboard"]
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_stays_on_loading_placeholder() -> Result<()> {
    let server = MockServer::start();
    let coach_mock = server.mock(|when, then| {
        when.method(GET).path("/coaches/8");
        then.status(401);
    });

    let api = api_for(&server);
    let mut view = CoachDetailView::new("8");
    view.mount(&api).await;

    coach_mock.assert_hits(1);
    assert_eq!(view.render(), DetailPage::Loading);
    assert!(view.snapshot().is_none());
    Ok(())
}

#[tokio::test]
async fn test_coach_change_replaces_snapshot() -> Result<()> {
    let server = MockServer::start();
    let first_mock = server.mock(|when, then| {
        when.method(GET).path("/coaches/8");
        then.status(200).json_body(coach_body(8, students_body()));
    });
    let second_mock = server.mock(|when, then| {
        when.method(GET).path("/coaches/9");
        then.status(200).json_body(coach_body(
            9,
            serde_json::json!([
                {"id": 7, "firstName": "Kai", "lastName": "Tan", "studentId": "2024-0007", "email": "kai@school.edu", "yearLevel": "THIRD"}
            ]),
        ));
    });

    let api = api_for(&server);
    let mut view = CoachDetailView::new("8");
    view.mount(&api).await;
    view.set_coach_id("9", &api).await;

    first_mock.assert_hits(1);
    second_mock.assert_hits(1);
    let snapshot = view.snapshot().expect("second coach loaded");
    assert_eq!(snapshot.coach.id.to_string(), "9");
    assert_eq!(snapshot.students.len(), 1);
    assert_eq!(view.assigned_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_null_student_columns_still_render() -> Result<()> {
    let server = MockServer::start();
    let coach_mock = server.mock(|when, then| {
        when.method(GET).path("/coaches/1");
        then.status(200).json_body(coach_body(
            1,
            serde_json::json!([
                {"id": 5, "firstName": "Jo", "lastName": "Lee", "studentId": "2024-0005", "email": null, "yearLevel": null}
            ]),
        ));
    });

    let api = api_for(&server);
    let mut view = CoachDetailView::new("1");
    view.set_year_filter(YearFilter::All);
    view.mount(&api).await;
    coach_mock.assert();

    let DetailPage::Ready(page) = view.render() else {
        panic!("coach with null columns should load");
    };
    assert_eq!(page.assigned_count, 1);
    assert_eq!(
        page.table.rows,
        vec![vec!["Jo Lee".to_string(), "2024-0005".to_string(), String::new()]]
    );

    view.set_year_filter("FIRST".parse::<YearFilter>()?);
    assert!(view.visible_students().is_empty());
    Ok(())
}
