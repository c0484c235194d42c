//! HTTP request handlers

pub mod vehicles;
