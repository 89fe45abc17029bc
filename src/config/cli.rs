use crate::config::toml_config::TomlConfig;
use crate::config::{Settings, DEFAULT_BASE_URL, DEFAULT_TOKEN_STORE};
use crate::domain::model::{SemesterSchoolYear, YearFilter};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use crate::views::table::OutputFormat;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "coach-roster")]
#[command(about = "Browse curriculum coaches and their assigned students")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_TOKEN_STORE,
        help = "JSON key-value file holding access_token"
    )]
    pub token_store: String,

    #[arg(long, global = true, help = "TOML file overriding connection settings")]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, default_value = "text", help = "text, csv or tsv")]
    pub format: String,

    #[arg(long, global = true, default_value = "text", help = "text or json")]
    pub log_format: String,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// List the curriculum coaches of a program
    Coaches {
        #[arg(long)]
        program: Option<String>,

        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value = "ALL")]
        semester: String,

        #[command(flatten)]
        actions: PageActions,
    },
    /// Show one coach and the students assigned to them
    Coach {
        id: String,

        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value = "ALL")]
        year: String,

        #[command(flatten)]
        actions: PageActions,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Args)]
pub struct PageActions {
    #[arg(long, help = "Open the row with this index (0-based, after filtering)")]
    pub open: Option<usize>,

    #[arg(long, help = "Go to the coach dashboard")]
    pub dashboard: bool,

    #[arg(long, help = "Go to the coaching summary")]
    pub summary: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// CLI values, overridden by the TOML file when one is given.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings {
            base_url: self.base_url.clone(),
            token_store: self.token_store.clone(),
            timeout_seconds: self.timeout_seconds,
        };
        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            file.apply_to(&mut settings);
        }
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.output_format()?;
        validation::validate_one_of("log_format", &self.log_format, &["text", "json"])?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }

        match &self.command {
            Command::Coaches { semester, .. } => {
                semester.parse::<SemesterSchoolYear>()?;
            }
            Command::Coach { id, year, .. } => {
                validation::validate_non_empty_string("id", id)?;
                year.parse::<YearFilter>()?;
            }
        }

        self.settings()?.validate()
    }
}
