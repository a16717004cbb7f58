use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

// Request bodies. Field names follow the camelCase JSON the frontend sends.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateRequest {
    pub motion: String,
    pub role: String,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl DebateRequest {
    /// Prior turns supplied by the caller; absent and `null` both mean none.
    pub fn history(&self) -> &[Message] {
        self.messages.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize)]
pub struct TopicKnowledgeRequest {
    pub motion: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepMaterialsRequest {
    pub motion: String,
    pub user_team: String,
    pub format: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSpeechRequest {
    pub motion: String,
    pub speaker_role: String,
    pub speech_type: String,
    pub team_side: String,
    pub format: String,
    pub debate_history: String,
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeSpeechRequest {
    pub speaker: String,
    pub speech_type: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalRfdRequest {
    pub motion: String,
    pub format: String,
    pub all_speeches: String,
}

// Response bodies

#[derive(Debug, Serialize, Deserialize)]
pub struct DebateResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicKnowledgeResponse {
    pub knowledge: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrepMaterialsResponse {
    pub materials: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub speech: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinalRfdResponse {
    pub rfd: String,
}

/// Scores returned by the judging endpoint. The completion text must decode
/// into exactly this shape.
///
/// Scores keep the provider's numeric form, so `80` is echoed as `80` and
/// `72.5` as `72.5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeScore {
    pub content: serde_json::Number,
    pub style: serde_json::Number,
    pub strategy: serde_json::Number,
    pub comments: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
