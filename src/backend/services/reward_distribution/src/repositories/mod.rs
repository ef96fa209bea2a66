pub mod memory;
pub mod traits;

pub use memory::InMemoryCycleReportRepository;
