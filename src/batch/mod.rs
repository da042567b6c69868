pub mod pacer;
pub mod report;
pub mod runner;

pub use pacer::{Pacer, TokioPacer};
pub use report::{BatchEvent, ConsoleReporter, MemoryReporter, Reporter};
pub use runner::BatchRunner;
