//! Request/response bodies for the hub REST API.

use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};
use crate::event::{AnswerParams, ParticipationType};
use crate::member::MemberStatus;

/// Body of `POST /api/1/events/answer`.
///
/// The constructor enforces the parameter contract: late-join and early-leave
/// answers carry a clock time; join and absent carry no params. The backend's
/// response to this request is the authoritative event and fully supersedes
/// any local copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub event: EventRef,
    #[serde(rename = "type")]
    pub kind: ParticipationType,
    pub params: Option<AnswerParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRef {
    pub id: String,
}

impl AnswerRequest {
    pub fn new(event_id: &str, kind: ParticipationType, time: Option<String>) -> HubResult<Self> {
        let params = match (kind.requires_time(), time) {
            (true, Some(time)) => Some(AnswerParams { time: Some(time) }),
            (true, None) => return Err(HubError::MissingTime(kind.to_string())),
            (false, _) => None,
        };
        Ok(Self {
            event: EventRef {
                id: event_id.to_string(),
            },
            kind,
            params,
        })
    }
}

/// Response of `POST /api/1/events/{id}/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    pub id: String,
    pub ok: bool,
}

/// Body of `POST /api/1/members/{id}/props`. Only the provided fields are
/// sent; the backend leaves the rest untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}
