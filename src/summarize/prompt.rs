use serde::{Deserialize, Serialize};

pub const SYSTEM_INSTRUCTION: &str = "You are a world-class summarizer.";

/// Markdown sections every summary must contain, in order
pub const SUMMARY_SECTIONS: [&str; 5] = [
    "TL;DR",
    "Key Points",
    "Action Items",
    "Risks/Blocks",
    "Next Steps",
];

/// Sampling temperature; kept low so summaries stay close to the transcript
pub const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// What gets sent to a completion provider for one summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

fn instruction_block(custom: Option<&str>) -> String {
    let mut lines = vec![
        "You are a helpful meeting notes assistant.".to_string(),
        "Return a clean, structured Markdown summary with sections:".to_string(),
        "1) TL;DR  2) Key Points  3) Action Items (owners & deadlines)  4) Risks/Blocks  5) Next Steps"
            .to_string(),
        "Be concise and faithful to the transcript.".to_string(),
    ];

    if let Some(custom) = custom.map(str::trim).filter(|c| !c.is_empty()) {
        lines.push(format!("Custom instruction: \"{}\"", custom));
    }

    lines.join("\n")
}

/// Build the system + user messages for a transcript
pub fn build_messages(transcript: &str, custom: Option<&str>) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::System,
            content: SYSTEM_INSTRUCTION.to_string(),
        },
        ChatMessage {
            role: Role::User,
            content: format!(
                "{}\n\nTranscript:\n{}",
                instruction_block(custom),
                transcript
            ),
        },
    ]
}
