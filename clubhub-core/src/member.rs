//! Roster member wire models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// A team member as returned by the backend. The workspace-user object under
/// `slack` is owned by the backend's chat-workspace sync; the client only
/// reads it and occasionally patches `status` and `number`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub slack: SlackUser,

    /// Jersey number. Zero is a valid number, hence the option rather than a
    /// zero-means-unset sentinel.
    #[serde(default)]
    pub number: Option<u32>,

    #[serde(default)]
    pub status: MemberStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<SlackTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub profile: SlackProfile,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub image_512: String,
    /// Free-text position title, e.g. "QB/WR". Fed to the position classifier.
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackTeam {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: String,
}

/// Lifecycle status. Departure is tracked by `SlackUser::deleted`, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    /// Partial participation; not expected to answer RSVPs.
    Limited,
    /// Dormant; not expected to answer RSVPs.
    Inactive,
    /// Present on the wire but unused; `SlackUser::deleted` is authoritative.
    Deleted,
}

impl Member {
    pub fn id(&self) -> &str {
        &self.slack.id
    }

    /// Display name precedence: top-level real name, then profile real name,
    /// then profile display name.
    pub fn name(&self) -> &str {
        if let Some(n) = self.slack.real_name.as_deref().filter(|n| !n.is_empty()) {
            return n;
        }
        if !self.slack.profile.real_name.is_empty() {
            return &self.slack.profile.real_name;
        }
        &self.slack.profile.display_name
    }

    /// The free-text position title from the member's profile.
    pub fn position_title(&self) -> &str {
        &self.slack.profile.title
    }

    /// Limited, inactive, and departed members are not expected to answer.
    pub fn is_expected_to_rsvp(&self) -> bool {
        !self.slack.deleted
            && !matches!(
                self.status,
                MemberStatus::Limited | MemberStatus::Inactive | MemberStatus::Deleted
            )
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Limited => "limited",
            Self::Inactive => "inactive",
            Self::Deleted => "deleted",
        };
        write!(f, "{s}")
    }
}

impl FromStr for MemberStatus {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "limited" => Ok(Self::Limited),
            "inactive" => Ok(Self::Inactive),
            other => Err(HubError::UnknownStatus(other.to_string())),
        }
    }
}
