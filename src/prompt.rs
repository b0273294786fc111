//! Prompt assembly: system instruction followed by the raw user text.

use crate::persona::system_instruction_for;
use crate::types::Message;

/// Build the two-message conversation sent to the model.
///
/// The user text is passed through untouched: no trimming, truncation or
/// escaping happens here.
pub fn assemble(instruction: &str, user_text: &str) -> Vec<Message> {
    vec![Message::system(instruction), Message::user(user_text)]
}

/// Resolve `persona_label` and assemble the conversation in one step.
pub fn assemble_for_persona(persona_label: &str, user_text: &str) -> Vec<Message> {
    assemble(system_instruction_for(persona_label), user_text)
}
