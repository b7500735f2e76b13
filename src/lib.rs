pub mod errors;
pub mod http_executor;
pub mod log_reader;
pub mod log_record;
pub mod log_writer;
pub mod menu;
