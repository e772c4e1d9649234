use std::time::Duration;

use tracing::warn;

pub const PAGE_SIZE: usize = 10;
pub const PAGE_STRIP_WIDTH: usize = 5;
pub const TOOLTIP_SHOW_DELAY_MS: u64 = 200;
pub const OVERLAY_OFFSET: f64 = 8.0;
pub const VIEWPORT_MARGIN: f64 = 8.0;

const PAGE_SIZE_ENV: &str = "DASHBOARD_PAGE_SIZE";
const TOOLTIP_DELAY_ENV: &str = "DASHBOARD_TOOLTIP_DELAY_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub page_size: usize,
    pub page_strip_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            page_strip_width: PAGE_STRIP_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    pub show_delay: Duration,
    pub offset: f64,
    pub margin: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(TOOLTIP_SHOW_DELAY_MS),
            offset: OVERLAY_OFFSET,
            margin: VIEWPORT_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardConfig {
    pub table: TableConfig,
    pub tooltip: TooltipConfig,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(page_size) = positive_setting(&lookup, PAGE_SIZE_ENV) {
            config.table.page_size = page_size as usize;
        }
        if let Some(delay_ms) = positive_setting(&lookup, TOOLTIP_DELAY_ENV) {
            config.tooltip.show_delay = Duration::from_millis(delay_ms);
        }
        config
    }
}

fn positive_setting<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!("ignoring {key}={raw:?}: expected a positive integer");
            None
        }
    }
}
