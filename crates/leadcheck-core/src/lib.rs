//! Shared domain types and configuration for the lead verification service.

mod analysis;
mod app_config;
mod config;
mod lead;
mod signals;

pub use analysis::{AnalysisResult, CompanyProfile, Confidence, ScoreBreakdown, Verdict};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use lead::{
    is_well_formed_email, FieldError, HistoryWindow, LeadData, ProfileLinks, ValidationError,
};
pub use signals::{PlatformSignals, SignalMap, PLATFORMS};
