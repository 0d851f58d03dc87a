// src/lib.rs

//! school-meta: school lookup and identity guessing library

pub mod error;
pub mod handler;
pub mod models;
pub mod services;
pub mod utils;
