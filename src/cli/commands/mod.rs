pub mod attendance;
pub mod class;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod period;
pub mod serve;
pub mod student;
