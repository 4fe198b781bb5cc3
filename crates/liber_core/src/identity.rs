//! Caller identity for a single request/response cycle.

use serde::{Deserialize, Serialize};

/// Who is asking. A present `member_id` means the caller is a registered
/// member; absent means guest. Built once per request, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberContext {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl MemberContext {
    pub fn member(name: &str, member_id: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: Some(member_id.to_string()),
        }
    }

    pub fn guest(name: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: None,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.member_id.is_some()
    }
}
