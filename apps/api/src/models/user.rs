use serde::{Deserialize, Serialize};

/// Read-only projection of a user exposed alongside their resume.
/// Never carries password material or role flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerSummary {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}
