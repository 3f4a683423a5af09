pub mod app;
pub mod controls;
pub mod diagram;
pub mod logger;
pub mod status;
