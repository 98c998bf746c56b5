//! Roleboard: a single-screen terminal form that looks up a team role
//! by seat number, gated on a remote "is published" check.

pub mod action;
pub mod app;
pub mod checker;
pub mod config;
pub mod roles;
pub mod ui;
pub mod verdict;
