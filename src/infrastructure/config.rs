use crate::domain::calendar::first_puzzle_date;
use crate::error::{Result, SolutionsError};
use crate::utils::config::EnvConfig;
use chrono::NaiveDate;
use directories::ProjectDirs;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://www.nytimes.com/svc/wordle/v2";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
pub const SOLUTIONS_FILE_NAME: &str = "solutions.txt";

/// 実行時に解決された設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub solutions_path: PathBuf,
    pub base_url: String,
    pub start_date: NaiveDate,
    pub fetch_timeout: Duration,
}

/// データディレクトリ。作成はしない（書き込み時に作る）
fn data_dir(env: &EnvConfig) -> Result<PathBuf> {
    if let Some(xdg_data_home) = &env.xdg_data_home {
        return Ok(PathBuf::from(xdg_data_home).join("wordle_solutions"));
    }

    let proj = ProjectDirs::from("com", "user", "wordle_solutions").ok_or_else(|| {
        SolutionsError::ConfigInitError("cannot resolve platform dirs".to_string())
    })?;
    Ok(proj.data_local_dir().to_path_buf())
}

impl AppConfig {
    pub fn from_env(env: &EnvConfig) -> Result<Self> {
        let solutions_path = match &env.solutions_path {
            Some(p) => PathBuf::from(p),
            None => data_dir(env)?.join(SOLUTIONS_FILE_NAME),
        };

        Ok(Self {
            solutions_path,
            base_url: env
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            start_date: first_puzzle_date(),
            fetch_timeout: FETCH_TIMEOUT,
        })
    }
}
