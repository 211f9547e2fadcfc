/// Use cases module containing application business logic orchestration
mod build_dashboard;

pub use build_dashboard::BuildDashboardUseCase;
