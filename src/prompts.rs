//! Prompt construction for each debate task.
//!
//! Every builder is a pure function from request fields to a finished
//! [`CompletionRequest`]. Caller text is interpolated verbatim.

use crate::model::CompletionRequest;
use crate::web::models::{
    DebateRequest, FinalRfdRequest, GenerateSpeechRequest, JudgeSpeechRequest, Message,
    PrepMaterialsRequest, TopicKnowledgeRequest,
};

pub const DEBATE_MAX_TOKENS: u32 = 500;
pub const DEBATE_TEMPERATURE: f32 = 0.8;
pub const TOPIC_KNOWLEDGE_MAX_TOKENS: u32 = 800;
pub const TOPIC_KNOWLEDGE_TEMPERATURE: f32 = 0.7;
pub const PREP_MATERIALS_MAX_TOKENS: u32 = 600;
pub const PREP_MATERIALS_TEMPERATURE: f32 = 0.8;
pub const SPEECH_MAX_TOKENS: u32 = 700;
pub const SPEECH_TEMPERATURE: f32 = 0.8;
pub const JUDGE_MAX_TOKENS: u32 = 300;
pub const JUDGE_TEMPERATURE: f32 = 0.7;
pub const FINAL_RFD_MAX_TOKENS: u32 = 1000;
pub const FINAL_RFD_TEMPERATURE: f32 = 0.7;

/// Side of the house a team code sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Government,
    Opposition,
}

impl Side {
    /// `OG` and `CG` are government benches; every other code is opposition.
    pub fn from_team_code(code: &str) -> Self {
        match code {
            "OG" | "CG" => Side::Government,
            _ => Side::Opposition,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Government => "Government",
            Side::Opposition => "Opposition",
        }
    }
}

/// Objective wording for a speech type. Unknown types get an empty description.
pub fn speech_role_description(speech_type: &str) -> &'static str {
    match speech_type {
        "constructive" => {
            "You are delivering a constructive speech. Your objective is to define the key terms, \
             set up your team's framing, and present your strongest substantive arguments."
        }
        "extension" => {
            "You are delivering an extension speech. Your objective is to bring new material that \
             goes beyond your opening partners, deepening the analysis without contradicting them."
        }
        "rebuttal" => {
            "You are delivering a rebuttal speech. Your objective is to summarize the key clashes, \
             refute your opponents' best points, and explain why your side has won the debate."
        }
        _ => "",
    }
}

pub fn debate(req: &DebateRequest) -> CompletionRequest {
    let system = req
        .system_prompt
        .clone()
        .filter(|prompt| !prompt.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "You are a competitive debater speaking as {} on the motion \"{}\". \
                 Argue persuasively, respond directly to your opponent, and keep each reply focused.",
                req.role, req.motion
            )
        });

    let history = req.history();
    let mut messages = Vec::with_capacity(history.len().max(1) + 1);
    messages.push(Message::system(system));
    if history.is_empty() {
        messages.push(Message::user(format!("Debate the motion: {}", req.motion)));
    } else {
        messages.extend(history.iter().cloned());
    }

    // Zero is not a usable token budget
    CompletionRequest::new(
        messages,
        req.max_tokens.filter(|&n| n > 0).unwrap_or(DEBATE_MAX_TOKENS),
        req.temperature.unwrap_or(DEBATE_TEMPERATURE),
    )
}

pub fn topic_knowledge(req: &TopicKnowledgeRequest) -> CompletionRequest {
    let prompt = format!(
        "Provide comprehensive research material for the debate motion: \"{motion}\"

Organize your answer into the following sections:
1. Key Definitions: define the important terms and concepts in the motion.
2. Arguments for Each Side: the strongest arguments supporting and opposing the motion.
3. Real-World Examples: relevant case studies, precedents, and current events.
4. Statistics and Evidence: data points and research findings that debaters can cite.
5. Common Rebuttals: typical responses to the main arguments on each side.

Be specific and balanced so that speakers on either side can use this material.",
        motion = req.motion
    );

    CompletionRequest::new(
        vec![Message::user(prompt)],
        TOPIC_KNOWLEDGE_MAX_TOKENS,
        TOPIC_KNOWLEDGE_TEMPERATURE,
    )
}

pub fn prep_materials(req: &PrepMaterialsRequest) -> CompletionRequest {
    let side = Side::from_team_code(&req.user_team);
    let prompt = format!(
        "Create preparation notes for a debater on the {side} side of the motion: \"{motion}\"
Debate format: {format}

Include the following sections:
1. Case Strategy: the overall framing and the burden the {side} should take on.
2. Key Arguments: three to four main arguments with their mechanisms and impacts.
3. Anticipated Counterarguments: the arguments the other side is likely to run and how to respond.
4. Speaking Tips: advice on structure, prioritization, and delivery for this format.

Keep the notes concise and usable during a short preparation period.",
        side = side.label(),
        motion = req.motion,
        format = req.format
    );

    CompletionRequest::new(
        vec![Message::user(prompt)],
        PREP_MATERIALS_MAX_TOKENS,
        PREP_MATERIALS_TEMPERATURE,
    )
}

pub fn generate_speech(req: &GenerateSpeechRequest) -> CompletionRequest {
    let prompt = format!(
        "{role_description}

You are speaking as {speaker} for the {side}.
Motion: \"{motion}\"
Debate format: {format}

Speeches so far in this debate:
{history}

Instructions:
- Signpost clearly so the judge can follow your structure.
- Make mechanized arguments: explain how and why each claim is true, step by step.
- Explain the impacts of your arguments and why they matter most in this debate.
- Directly address and respond to the points made by your opponents.
- Support your claims with examples and evidence where possible.

Deliver the speech in a style appropriate for a {difficulty} level debater.",
        role_description = speech_role_description(&req.speech_type),
        speaker = req.speaker_role,
        side = req.team_side,
        motion = req.motion,
        format = req.format,
        history = req.debate_history,
        difficulty = req.difficulty
    );

    CompletionRequest::new(vec![Message::user(prompt)], SPEECH_MAX_TOKENS, SPEECH_TEMPERATURE)
}

pub fn judge_speech(req: &JudgeSpeechRequest) -> CompletionRequest {
    let prompt = format!(
        "You are an experienced debate adjudicator. Evaluate the following {speech_type} speech \
         given by {speaker}.

Speech:
{content}

Score the speech from 0 to 100 in each of these categories:
- content: quality of arguments, analysis, and evidence
- style: clarity, structure, and persuasiveness of delivery
- strategy: prioritization, engagement with opponents, and role fulfilment

Respond with ONLY a JSON object in exactly this format, with integer scores and no other text:
{{\"content\": <number>, \"style\": <number>, \"strategy\": <number>, \"comments\": \"<brief feedback>\"}}",
        speech_type = req.speech_type,
        speaker = req.speaker,
        content = req.content
    );

    CompletionRequest::new(vec![Message::user(prompt)], JUDGE_MAX_TOKENS, JUDGE_TEMPERATURE)
}

pub fn final_rfd(req: &FinalRfdRequest) -> CompletionRequest {
    let prompt = format!(
        "You are the chair adjudicator for a {format} debate on the motion: \"{motion}\"

Full transcript of the speeches:
{speeches}

Write a reason for decision (RFD) covering:
1. Case and Strategy Analysis: how each team framed and approached the debate.
2. Clash Resolution: the key points of clash and who won each of them.
3. Impact Weighing: whose impacts mattered most and why.
4. Team Rankings: the final ranking of the teams with a justification for each placement.
5. Speaker Feedback: specific, constructive feedback for each speaker.",
        format = req.format,
        motion = req.motion,
        speeches = req.all_speeches
    );

    CompletionRequest::new(
        vec![Message::user(prompt)],
        FINAL_RFD_MAX_TOKENS,
        FINAL_RFD_TEMPERATURE,
    )
}
