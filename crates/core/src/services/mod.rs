pub mod auth_service;
pub mod context_service;
pub mod portfolio_service;
pub mod profile_service;
