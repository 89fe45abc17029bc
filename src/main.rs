use clap::Parser;
use coach_roster::app::{CoachDetailRequest, CoachListRequest, PageAction};
use coach_roster::config::cli::PageActions;
use coach_roster::domain::ports::ConfigProvider;
use coach_roster::utils::{logger, validation::Validate};
use coach_roster::views::PrintNavigator;
use coach_roster::{AppError, CliConfig, Command, FileTokenStore, HttpCoachApi, RosterApp};
use std::sync::Arc;

fn page_actions(actions: &PageActions) -> Vec<PageAction> {
    let mut out = Vec::new();
    if let Some(row) = actions.open {
        out.push(PageAction::OpenRow(row));
    }
    if actions.dashboard {
        out.push(PageAction::Dashboard);
    }
    if actions.summary {
        out.push(PageAction::Summary);
    }
    out
}

async fn run(config: CliConfig) -> coach_roster::Result<String> {
    let settings = config.settings()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let tokens = Arc::new(FileTokenStore::new(settings.token_store_path()));
    let api = HttpCoachApi::from_config(&settings, tokens)?;
    let mut app = RosterApp::new(api, PrintNavigator, config.output_format()?);

    match config.command {
        Command::Coaches {
            program,
            search,
            semester,
            actions,
        } => {
            app.coach_list(CoachListRequest {
                program_id: program,
                search,
                semester: semester.parse()?,
                actions: page_actions(&actions),
            })
            .await
        }
        Command::Coach {
            id,
            search,
            year,
            actions,
        } => {
            app.coach_detail(CoachDetailRequest {
                coach_id: id,
                search,
                year: year.parse()?,
                actions: page_actions(&actions),
            })
            .await
        }
    }
}

fn report(e: &AppError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_format == "json" {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting coach-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        report(&e);
    }

    match run(config).await {
        Ok(page) => println!("{}", page),
        Err(e) => report(&e),
    }
}
