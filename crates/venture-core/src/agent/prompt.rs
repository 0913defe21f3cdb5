//! Prompt templates for the three personas and the dialogue protocol.
//!
//! Personas differ only in the fixed instruction template wrapped around
//! the task text; the template is data selected by [`AgentRole`], not a
//! separate agent type per role.

use venture_types::agent::{AgentProfile, AgentRole};

/// Wrap a task in the role-specific instruction template.
pub fn role_prompt(role: AgentRole, task: &str) -> String {
    match role {
        AgentRole::Ceo => format!(
            "You are the CEO of a promising tech startup with a vision for \
             innovation and growth.\n\n\
             Your role: {title}\n\
             Task: {task}\n\n\
             Provide a decisive, balanced assessment considering business \
             impact, market opportunity, resources, and risk. Focus on both \
             short-term execution and long-term strategic positioning. Keep \
             your response under 200 words and provide clear reasoning for \
             your choices.",
            title = role.title(),
        ),
        AgentRole::Developer => format!(
            "You are a senior software engineer with full-stack development \
             expertise.\n\n\
             Your role: {title}\n\
             Task: {task}\n\n\
             Provide a technical assessment focusing on modern best \
             practices, scalability, and efficiency. Consider trade-offs \
             between development speed, technical debt, and scalability. \
             Keep your response under 200 words and be specific about \
             technologies where appropriate.",
            title = role.title(),
        ),
        AgentRole::Marketer => format!(
            "You are a marketing expert with experience in SaaS and tech \
             products.\n\n\
             Your role: {title}\n\
             Task: {task}\n\n\
             Provide a concise, data-driven response with market insights \
             and strategic recommendations. Focus on target audience, market \
             trends, and competitive positioning. Keep your response under \
             200 words.",
            title = role.title(),
        ),
    }
}

/// Prompt for the initiator's opening message of a dialogue.
pub fn dialogue_opening(initiator: &AgentProfile, responder: &AgentProfile, topic: &str) -> String {
    format!(
        "You are {a_name}, the {a_title}.\n\
         You're starting a conversation with {b_name}, the {b_title}, about {topic}.\n\
         Provide your initial thoughts or questions about {topic}.\n\
         Keep your response under 100 words and be professional.",
        a_name = initiator.name,
        a_title = initiator.title,
        b_name = responder.name,
        b_title = responder.title,
    )
}

/// Prompt for a reply turn, quoting the other speaker's latest message
/// verbatim.
pub fn dialogue_reply(
    speaker: &AgentProfile,
    other: &AgentProfile,
    topic: &str,
    last_message: &str,
) -> String {
    format!(
        "You are {s_name}, the {s_title}.\n\
         You're in a conversation with {o_name}, the {o_title}, about {topic}.\n\n\
         This is what {o_name} just said:\n\
         \"{last_message}\"\n\n\
         Respond to their points, advancing the discussion about {topic}.\n\
         Keep your response under 100 words and be professional.",
        s_name = speaker.name,
        s_title = speaker.title,
        o_name = other.name,
        o_title = other.title,
    )
}
