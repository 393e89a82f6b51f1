//! Servicios de dominio

pub mod auth_service;
pub mod constants;
