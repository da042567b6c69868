pub mod batch;
pub mod message;
pub mod recruiter;

pub use batch::BatchResult;
pub use message::{Attachment, OutboundMessage};
pub use recruiter::RecruiterRecord;
