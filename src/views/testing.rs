use crate::domain::model::{Assignment, Coach, Identifier, Program, Student};
use crate::domain::ports::CoachApi;
use crate::utils::error::{AppError, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn coach(id: i64, first: &str, last: &str, number: i64) -> Coach {
    Coach {
        id: Identifier::Number(id),
        coach_id: Identifier::Number(number),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@school.edu", first.to_lowercase()),
        assignments: None,
    }
}

pub fn student(id: i64, first: &str, last: &str, year: &str) -> Student {
    Student {
        id: Identifier::Number(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        student_id: Some(Identifier::Text(format!("2024-{:04}", id))),
        email: format!("{}.{}@school.edu", first.to_lowercase(), last.to_lowercase()),
        year_level: year.to_string(),
    }
}

pub fn coach_with_students(id: i64, students: Vec<Student>) -> Coach {
    let mut c = coach(id, "Ana", "Cruz", 100 + id);
    c.assignments = Some(
        students
            .into_iter()
            .enumerate()
            .map(|(i, student)| Assignment {
                id: Some(Identifier::Number(i as i64)),
                student,
            })
            .collect(),
    );
    c
}

/// In-memory backend that records every call.
#[derive(Default)]
pub struct FakeApi {
    coaches: Vec<Coach>,
    program_calls: AtomicUsize,
    coach_list_calls: Mutex<Vec<String>>,
    coach_calls: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coaches(mut self, coaches: Vec<Coach>) -> Self {
        self.coaches = coaches;
        self
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn program_calls(&self) -> usize {
        self.program_calls.load(Ordering::SeqCst)
    }

    pub fn coach_list_calls(&self) -> Vec<String> {
        self.coach_list_calls.lock().unwrap().clone()
    }

    pub fn coach_calls(&self) -> Vec<String> {
        self.coach_calls.lock().unwrap().clone()
    }

    fn check(&self, url: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::HttpStatus {
                status: 500,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CoachApi for FakeApi {
    async fn list_programs(&self) -> Result<Vec<Program>> {
        self.program_calls.fetch_add(1, Ordering::SeqCst);
        self.check("/programs")?;
        Ok(vec![Program {
            id: Identifier::Number(4),
            name: Some("BS Computer Science".to_string()),
            attributes: Default::default(),
        }])
    }

    async fn list_coaches(&self, program_id: &str) -> Result<Vec<Coach>> {
        self.coach_list_calls.lock().unwrap().push(program_id.to_string());
        self.check("/coaches")?;
        Ok(self.coaches.clone())
    }

    async fn get_coach(&self, coach_id: &str) -> Result<Coach> {
        self.coach_calls.lock().unwrap().push(coach_id.to_string());
        self.check("/coaches/{id}")?;
        self.coaches
            .iter()
            .find(|c| c.id.to_string() == coach_id)
            .cloned()
            .ok_or_else(|| AppError::HttpStatus {
                status: 404,
                url: format!("/coaches/{}", coach_id),
            })
    }
}
