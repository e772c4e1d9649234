use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::Level;

mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use app::App;
use config::DashboardConfig;

const LOG_LEVEL_ENV: &str = "DASHBOARD_LOG";

fn main() {
    init_logging();
    let config = DashboardConfig::from_env();
    launch(config);
}

fn init_logging() {
    let level = log_level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("failed to initialize logger: {err}");
    }
}

fn log_level_from(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

#[cfg(feature = "desktop")]
fn launch(config: DashboardConfig) {
    let mut desktop_cfg = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Dashboard"));
    match default_webview_data_dir() {
        Ok(dir) => desktop_cfg = desktop_cfg.with_data_directory(dir),
        Err(err) => tracing::warn!("using default webview data directory: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: DashboardConfig) {
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "dashboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

pub fn default_dataset_name_mmdd() -> String {
    format!("dataset-{}", chrono::Local::now().format("%m%d"))
}

pub fn dataset_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(default_dataset_name_mmdd)
}

/// Whole numbers print without a fraction; others keep up to six
/// decimals with trailing zeros trimmed.
pub fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

pub fn format_number_with_commas(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 12px; gap: 12px; box-sizing: border-box; font-family: sans-serif; background: #f6f7f9;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #bbb; border-radius: 6px; background: #fff;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; background: #f0f0f0; border: 1px solid #bbb; padding: 6px; text-align: left; cursor: pointer; user-select: none; white-space: nowrap;"
}

pub fn table_cell_style(alignment: &str) -> String {
    format!("border: 1px solid #bbb; padding: 4px 6px; text-align: {alignment};")
}

pub fn card_style() -> &'static str {
    "min-width: 140px; padding: 10px 14px; border: 1px solid #d0d4da; border-radius: 8px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.08);"
}
