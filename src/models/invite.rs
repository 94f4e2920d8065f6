use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Revoked,
    Expired,
}

impl InviteStatus {
    /// Only invites still waiting for an answer can be extended or revoked.
    pub fn is_open(self) -> bool {
        matches!(self, InviteStatus::Pending)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub code: String,
    pub status: InviteStatus,
}

/// Invites split by whether they still await an answer.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InviteBoard {
    pub open: Vec<Invite>,
    pub closed: Vec<Invite>,
}
