pub mod report;
pub mod server;

pub use report::ReportService;
pub use server::ServerService;
