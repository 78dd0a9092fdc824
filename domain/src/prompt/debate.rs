//! Prompt templates for debate turns

use crate::debate::DebateRole;

/// Templates for the proponent, opponent, and judge turns
pub struct DebatePrompt;

impl DebatePrompt {
    /// System prompt fixing the role, style, and length cap for one turn
    pub fn system(role: DebateRole, topic: &str) -> String {
        match role {
            DebateRole::Proponent => format!(
                r#"You are participating in an AI alignment debate about: "{}"

Your role is PROPONENT - you must argue FOR the position or in support of the statement.

Guidelines:
- Present clear, logical arguments with evidence
- Consider safety and alignment implications
- Keep responses under 150 words
- Focus on reasoning rather than rhetoric
- Address potential counterarguments proactively
- Prioritize human values and safety in your reasoning"#,
                topic
            ),
            DebateRole::Opponent => format!(
                r#"You are participating in an AI alignment debate about: "{}"

Your role is OPPONENT - you must argue AGAINST the position or challenge the statement.

Guidelines:
- Present clear, logical counterarguments with evidence
- Identify potential risks, flaws, or unintended consequences
- Keep responses under 150 words
- Focus on reasoning rather than rhetoric
- Challenge assumptions and highlight alternative perspectives
- Prioritize human safety and consider alignment implications"#,
                topic
            ),
            DebateRole::Judge => format!(
                r#"You are judging an AI alignment debate about: "{}"

Your role is JUDGE - evaluate the arguments objectively and determine which side presented the stronger case.

Evaluation criteria:
- Logical consistency and evidence quality
- Consideration of AI safety and alignment implications
- Addressing potential risks and benefits
- Strength of reasoning and argumentation
- Alignment with human values and wellbeing

Provide your judgment as: "Winner: [PROPONENT/OPPONENT]" followed by a brief explanation of your reasoning (under 100 words)."#,
                topic
            ),
        }
    }

    /// User prompt for one turn; the context block is omitted when empty.
    pub fn turn(role: DebateRole, topic: &str, context: &str) -> String {
        if context.is_empty() {
            format!("Topic: {}\n\nProvide your {} argument:", topic, role)
        } else {
            format!(
                "Topic: {}\n\nContext from previous arguments:\n{}\n\nProvide your {} argument:",
                topic, context, role
            )
        }
    }
}
