//! Backend de gestión de combustible de la flota municipal
//!
//! API REST sobre el esquema relacional heredado: vehículos, generadores,
//! registros de combustible, facturas, estaciones, usuarios, inventario y
//! el almacén de constantes que respalda todos los campos codificados.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
