pub mod supervisor;
pub mod worker;

pub use supervisor::{ShutdownSummary, Supervisor, SHUTDOWN_GRACE};
pub use worker::{ProbeWorker, WorkerState};
