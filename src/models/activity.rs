use serde::{Deserialize, Serialize};

/// One extracurricular offering and its current roster.
///
/// `participants` keeps signup order. `max_participants` is carried for the
/// frontend's "spots left" display; no capacity rule is enforced server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}
