pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod generate;
pub mod init;
pub mod list;
pub mod log;
pub mod pages;
pub mod set;
pub mod stats;
