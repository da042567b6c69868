use serde::Deserialize;

/// One row of the recruiter list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecruiterRecord {
    pub name: String,
    /// Destination address
    pub email: String,
    pub company: String,
    pub position: String,
}
