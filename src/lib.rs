pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod registry;
pub mod storage;
pub mod web;
