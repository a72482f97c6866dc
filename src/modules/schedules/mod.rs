pub mod hooks;
pub mod service;

pub use service::ScheduleService;
