//! Decoding of adjudicator scores from free-form completion text.

use serde_json::Number;
use thiserror::Error;

use crate::web::models::JudgeScore;

const SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

#[derive(Error, Debug)]
pub enum JudgeParseError {
    #[error("Completion text is not a valid score object: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Score for {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: Number },
}

/// Parse the provider's reply into a [`JudgeScore`].
///
/// A surrounding Markdown code fence is tolerated; anything else must be the
/// bare JSON object.
pub fn parse_judge_score(text: &str) -> Result<JudgeScore, JudgeParseError> {
    let score: JudgeScore = serde_json::from_str(strip_code_fence(text))?;

    for (field, value) in [
        ("content", &score.content),
        ("style", &score.style),
        ("strategy", &score.strategy),
    ] {
        if !value.as_f64().is_some_and(|v| SCORE_RANGE.contains(&v)) {
            return Err(JudgeParseError::OutOfRange {
                field,
                value: value.clone(),
            });
        }
    }

    Ok(score)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    match inner.split_once('\n') {
        Some((tag, body)) if !tag.trim_start().starts_with('{') => body.trim(),
        _ => inner.trim(),
    }
}
