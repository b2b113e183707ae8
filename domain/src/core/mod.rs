//! Core value objects shared across the domain

pub mod domain;
pub mod question;
