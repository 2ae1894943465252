pub mod app_config;
pub mod row_appender_config;
