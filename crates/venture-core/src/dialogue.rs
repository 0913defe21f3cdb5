//! Bounded alternating dialogue between two agents.
//!
//! The initiator opens with a message about the topic; the participants
//! then strictly alternate for a fixed number of exchanges, each reply
//! prompt carrying the other side's latest message verbatim. The only
//! state is whose turn it is. No early termination, no convergence
//! detection, no persistence across invocations.

use tracing::debug;

use venture_types::dialogue::Transcript;
use venture_types::llm::LlmError;

use crate::agent::{Agent, prompt};

/// Run a dialogue of `turns` exchanges after the opening message.
///
/// The completed transcript holds exactly `2 * turns + 1` entries:
/// the opening, then `2 * turns` replies alternating starting with the
/// responder. With `turns = 0` only the opening message is produced.
///
/// Calls happen strictly in program order on the shared provider handle;
/// the first failed call aborts the dialogue and propagates.
pub async fn run_dialogue(
    initiator: &mut Agent,
    responder: &mut Agent,
    topic: &str,
    turns: usize,
) -> Result<Transcript, LlmError> {
    let initiator_profile = initiator.profile().clone();
    let responder_profile = responder.profile().clone();

    debug!(
        initiator = %initiator_profile.name,
        responder = %responder_profile.name,
        topic,
        turns,
        "starting dialogue"
    );

    let opening_prompt = prompt::dialogue_opening(&initiator_profile, &responder_profile, topic);
    let opening = initiator.respond(&opening_prompt).await?;

    let mut transcript = Transcript::new();
    transcript.push(initiator_profile.name.clone(), opening.clone());

    // 1-bit toggle: even iterations are the responder's turn.
    let mut context = opening;
    for i in 0..turns * 2 {
        let (speaker, speaker_profile, other_profile) = if i % 2 == 0 {
            (&mut *responder, &responder_profile, &initiator_profile)
        } else {
            (&mut *initiator, &initiator_profile, &responder_profile)
        };

        let reply_prompt =
            prompt::dialogue_reply(speaker_profile, other_profile, topic, &context);
        let message = speaker.respond(&reply_prompt).await?;

        transcript.push(speaker_profile.name.clone(), message.clone());
        context = message;
    }

    Ok(transcript)
}
