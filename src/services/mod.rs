pub mod estimate_mapper;
pub mod estimation_error;
pub mod estimation_report;
pub mod estimation_yaml;
pub mod session;
pub mod time_projector;
pub mod workdays;
