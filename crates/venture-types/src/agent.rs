//! Agent identity types for the simulated startup team.
//!
//! Personas are a closed set of role variants carrying template data,
//! not separate types. The team directory is the static relationship
//! table feeding the relationship diagram.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of personas in the simulated startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Ceo,
    Developer,
    Marketer,
}

impl AgentRole {
    /// Short display name used as the transcript speaker label.
    pub fn name(&self) -> &'static str {
        match self {
            AgentRole::Ceo => "CEO",
            AgentRole::Developer => "Developer",
            AgentRole::Marketer => "Marketer",
        }
    }

    /// Full job title used inside prompts.
    pub fn title(&self) -> &'static str {
        match self {
            AgentRole::Ceo => "Chief Executive Officer",
            AgentRole::Developer => "Technical Lead",
            AgentRole::Marketer => "Marketing Lead",
        }
    }

    /// All roles, in team-directory order.
    pub fn all() -> [AgentRole; 3] {
        [AgentRole::Ceo, AgentRole::Developer, AgentRole::Marketer]
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of an agent: display name plus job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub title: String,
}

impl From<AgentRole> for AgentProfile {
    fn from(role: AgentRole) -> Self {
        Self {
            name: role.name().to_string(),
            title: role.title().to_string(),
        }
    }
}

/// One entry in an agent's append-only memory log.
///
/// Inspection only -- memory is never read back into subsequent prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub context: String,
    pub response: String,
}

/// A directed relationship between two team members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub from: AgentRole,
    pub to: AgentRole,
    pub kind: String,
}

/// The static org chart of the simulated team.
///
/// Fixed at compile time; rendered into the relationship diagram.
pub fn team_directory() -> Vec<Relation> {
    vec![
        Relation {
            from: AgentRole::Ceo,
            to: AgentRole::Developer,
            kind: "directs".to_string(),
        },
        Relation {
            from: AgentRole::Ceo,
            to: AgentRole::Marketer,
            kind: "directs".to_string(),
        },
        Relation {
            from: AgentRole::Developer,
            to: AgentRole::Marketer,
            kind: "collaborates".to_string(),
        },
        Relation {
            from: AgentRole::Marketer,
            to: AgentRole::Ceo,
            kind: "reports to".to_string(),
        },
    ]
}
