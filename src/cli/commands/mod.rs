pub mod columns;
pub mod config;
pub mod convert;
pub mod init;
