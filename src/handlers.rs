pub mod appointments;
pub mod auth;
pub mod barbers;
pub mod branches;
pub mod cash;
pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod whatsapp;
