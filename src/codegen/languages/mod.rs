//! Per-language snippet emitters

pub mod csharp;
pub mod curl;
pub mod go;
pub mod java;
pub mod javascript;
pub mod php;
pub mod python;
pub mod ruby;
pub mod rust;
