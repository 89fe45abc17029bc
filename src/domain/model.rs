use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Backend identifiers arrive either as JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Text(String::new())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

/// Backend columns may be `null`; treat that like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Identifier,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Identifier,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub student_id: Option<Identifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year_level: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub id: Option<Identifier>,
    pub student: Student,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: Identifier,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coach_id: Identifier,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub assignments: Option<Vec<Assignment>>,
}

impl Coach {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// One student per assignment, in assignment order. Duplicates are kept.
    pub fn students(&self) -> Result<Vec<Student>> {
        let assignments = self
            .assignments
            .as_ref()
            .ok_or_else(|| AppError::MissingAssignments {
                coach_id: self.id.to_string(),
            })?;
        Ok(assignments.iter().map(|a| a.student.clone()).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearLevel {
    First,
    Second,
    Third,
    Fourth,
}

impl YearLevel {
    pub const ALL: [YearLevel; 4] = [
        YearLevel::First,
        YearLevel::Second,
        YearLevel::Third,
        YearLevel::Fourth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            YearLevel::First => "FIRST",
            YearLevel::Second => "SECOND",
            YearLevel::Third => "THIRD",
            YearLevel::Fourth => "FOURTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YearLevel::First => "1st Year",
            YearLevel::Second => "2nd Year",
            YearLevel::Third => "3rd Year",
            YearLevel::Fourth => "4th Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Level(YearLevel),
}

impl YearFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            YearFilter::All => "ALL",
            YearFilter::Level(level) => level.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YearFilter::All => "All Years",
            YearFilter::Level(level) => level.label(),
        }
    }

    /// Selector options in display order: (value, label).
    pub fn options() -> Vec<(&'static str, &'static str)> {
        std::iter::once(YearFilter::All)
            .chain(YearLevel::ALL.into_iter().map(YearFilter::Level))
            .map(|f| (f.as_str(), f.label()))
            .collect()
    }

    /// The raw `yearLevel` from the backend is upper-cased before comparing.
    pub fn accepts(&self, year_level: &str) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Level(level) => year_level.to_uppercase() == level.as_str(),
        }
    }
}

impl FromStr for YearFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        if upper == "ALL" {
            return Ok(YearFilter::All);
        }
        YearLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == upper)
            .map(YearFilter::Level)
            .ok_or_else(|| AppError::InvalidConfigValueError {
                field: "year".to_string(),
                value: s.to_string(),
                reason: "Allowed values: ALL, FIRST, SECOND, THIRD, FOURTH".to_string(),
            })
    }
}

/// Semester / school-year selector values, newest first. Display only.
pub const SEMESTER_SCHOOL_YEARS: [&str; 16] = [
    "ALL",
    "1st Sem. S/Y 2024–2025",
    "2nd Sem. S/Y 2024–2025",
    "Summer 2025",
    "1st Sem. S/Y 2023–2024",
    "2nd Sem. S/Y 2023–2024",
    "Summer 2024",
    "1st Sem. S/Y 2022–2023",
    "2nd Sem. S/Y 2022–2023",
    "Summer 2023",
    "1st Sem. S/Y 2021–2022",
    "2nd Sem. S/Y 2021–2022",
    "Summer 2022",
    "1st Sem. S/Y 2020–2021",
    "2nd Sem. S/Y 2020–2021",
    "Summer 2021",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterSchoolYear(&'static str);

impl SemesterSchoolYear {
    pub fn value(&self) -> &'static str {
        self.0
    }

    pub fn label(&self) -> &'static str {
        if self.0 == "ALL" {
            "All Semesters"
        } else {
            self.0
        }
    }

    pub fn options() -> impl Iterator<Item = SemesterSchoolYear> {
        SEMESTER_SCHOOL_YEARS.into_iter().map(SemesterSchoolYear)
    }
}

impl Default for SemesterSchoolYear {
    fn default() -> Self {
        SemesterSchoolYear(SEMESTER_SCHOOL_YEARS[0])
    }
}

impl FromStr for SemesterSchoolYear {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        // 允許以一般連字號輸入學年
        let normalized = s.trim().replace('-', "–");
        SEMESTER_SCHOOL_YEARS
            .into_iter()
            .find(|v| *v == normalized)
            .map(SemesterSchoolYear)
            .ok_or_else(|| AppError::InvalidConfigValueError {
                field: "semester".to_string(),
                value: s.to_string(),
                reason: "Not one of the listed semester / school-year options".to_string(),
            })
    }
}
