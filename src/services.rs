pub mod auth;
pub use auth::AuthService;
pub mod availability;
pub mod ledger;
pub mod appointment_service;
pub use appointment_service::AppointmentService;
pub mod cash_service;
pub use cash_service::CashService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod whatsapp;
pub use whatsapp::WhatsappService;
pub mod barber_service;
pub use barber_service::BarberService;
pub mod branch_service;
pub use branch_service::BranchService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod client_service;
pub use client_service::ClientService;
