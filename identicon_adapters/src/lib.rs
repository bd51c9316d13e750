pub mod files;
pub mod init;
pub mod logger;
