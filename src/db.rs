pub mod user_repo;
pub use user_repo::UserRepository;
pub mod branch_repo;
pub use branch_repo::BranchRepository;
pub mod barber_repo;
pub use barber_repo::BarberRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod appointment_repo;
pub mod cash_repo;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;

pub use cash_repo::CashRepository;

pub use appointment_repo::AppointmentRepository;
