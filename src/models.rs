pub mod appointment;
pub mod auth;
pub mod barber;
pub mod branch;
pub mod cash;
pub mod catalog;
pub mod client;
pub mod dashboard;
pub mod whatsapp;
