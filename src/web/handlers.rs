use std::fmt::Display;

use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};
use serde_json::json;

use crate::judge::parse_judge_score;
use crate::model::{CompletionRequest, GatewayError};
use crate::prompts;
use crate::web::models::{
    DebateRequest, DebateResponse, ErrorResponse, FinalRfdRequest, FinalRfdResponse,
    GenerateSpeechRequest, JudgeSpeechRequest, PrepMaterialsRequest, PrepMaterialsResponse,
    SpeechResponse, TopicKnowledgeRequest, TopicKnowledgeResponse,
};
use crate::AppState;

pub const DEBATE_ERROR: &str = "Failed to get AI response";
pub const TOPIC_KNOWLEDGE_ERROR: &str = "Failed to generate topic knowledge";
pub const PREP_MATERIALS_ERROR: &str = "Failed to generate prep materials";
pub const GENERATE_SPEECH_ERROR: &str = "Failed to generate speech";
pub const JUDGE_SPEECH_ERROR: &str = "Failed to judge speech";
pub const FINAL_RFD_ERROR: &str = "Failed to generate RFD";

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Log the real cause server-side and answer with the fixed message only.
fn failure(message: &str, cause: impl Display) -> HttpResponse {
    error!("{}: {}", message, cause);
    HttpResponse::InternalServerError().json(ErrorResponse::new(message))
}

async fn complete(data: &AppState, request: CompletionRequest) -> Result<String, GatewayError> {
    debug!("Prompt messages: {:?}", request.messages);
    data.gateway.complete(request).await
}

pub async fn debate(data: web::Data<AppState>, req: web::Json<DebateRequest>) -> impl Responder {
    info!(
        "Debate turn as {} ({} prior message(s))",
        req.role,
        req.history().len()
    );

    match complete(&data, prompts::debate(&req)).await {
        Ok(reply) => HttpResponse::Ok().json(DebateResponse { reply }),
        Err(e) => failure(DEBATE_ERROR, e),
    }
}

pub async fn topic_knowledge(
    data: web::Data<AppState>,
    req: web::Json<TopicKnowledgeRequest>,
) -> impl Responder {
    info!("Topic knowledge for motion: {}", req.motion);

    match complete(&data, prompts::topic_knowledge(&req)).await {
        Ok(knowledge) => HttpResponse::Ok().json(TopicKnowledgeResponse { knowledge }),
        Err(e) => failure(TOPIC_KNOWLEDGE_ERROR, e),
    }
}

pub async fn prep_materials(
    data: web::Data<AppState>,
    req: web::Json<PrepMaterialsRequest>,
) -> impl Responder {
    info!("Prep materials for team {} ({})", req.user_team, req.format);

    match complete(&data, prompts::prep_materials(&req)).await {
        Ok(materials) => HttpResponse::Ok().json(PrepMaterialsResponse { materials }),
        Err(e) => failure(PREP_MATERIALS_ERROR, e),
    }
}

pub async fn generate_speech(
    data: web::Data<AppState>,
    req: web::Json<GenerateSpeechRequest>,
) -> impl Responder {
    info!(
        "Generating {} speech for {} ({}, difficulty: {})",
        req.speech_type, req.speaker_role, req.team_side, req.difficulty
    );

    match complete(&data, prompts::generate_speech(&req)).await {
        Ok(speech) => HttpResponse::Ok().json(SpeechResponse { speech }),
        Err(e) => failure(GENERATE_SPEECH_ERROR, e),
    }
}

pub async fn judge_speech(
    data: web::Data<AppState>,
    req: web::Json<JudgeSpeechRequest>,
) -> impl Responder {
    info!("Judging {} speech by {}", req.speech_type, req.speaker);

    let text = match complete(&data, prompts::judge_speech(&req)).await {
        Ok(text) => text,
        Err(e) => return failure(JUDGE_SPEECH_ERROR, e),
    };

    match parse_judge_score(&text) {
        Ok(score) => HttpResponse::Ok().json(score),
        Err(e) => {
            debug!("Unparseable judge output: {}", text);
            failure(JUDGE_SPEECH_ERROR, e)
        }
    }
}

pub async fn final_rfd(data: web::Data<AppState>, req: web::Json<FinalRfdRequest>) -> impl Responder {
    info!("Final RFD for motion: {} ({})", req.motion, req.format);

    match complete(&data, prompts::final_rfd(&req)).await {
        Ok(rfd) => HttpResponse::Ok().json(FinalRfdResponse { rfd }),
        Err(e) => failure(FINAL_RFD_ERROR, e),
    }
}
