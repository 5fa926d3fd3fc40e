//! Command handlers for the `mspass` binary.
//!
//! Each submodule takes plain inputs and returns dedicated DTOs or string
//! errors; argument parsing and terminal I/O stay in `main.rs`.

pub mod options;
pub mod password_generator;
