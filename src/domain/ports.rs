use crate::domain::model::{Coach, Program};
use crate::utils::error::Result;
use crate::views::navigation::Route;
use async_trait::async_trait;
use std::time::Duration;

pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Read-only view of the persisted key-value store holding credentials.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }
}

#[async_trait]
pub trait CoachApi: Send + Sync {
    async fn list_programs(&self) -> Result<Vec<Program>>;
    async fn list_coaches(&self, program_id: &str) -> Result<Vec<Coach>>;
    async fn get_coach(&self, coach_id: &str) -> Result<Coach>;
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token_store_path(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
