pub mod admission_queue;
pub mod disbursement_cycle;
pub mod disbursement_service;
pub mod score_engine;
pub mod vault;
