//! Application services - Business logic orchestration

pub mod checker_service;

pub use checker_service::CheckerService;
