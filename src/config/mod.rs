//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración
//! del almacén de entidades.

pub mod environment;

pub use environment::*;
