// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod pages;
pub mod posts;
pub mod site;
