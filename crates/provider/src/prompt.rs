//! `generateContent` request/response shapes and the shader prompt.

use crate::ProviderError;
use serde::{Deserialize, Serialize};

/// Tells the model which runtime the shader has to fit.
pub const SYSTEM_INSTRUCTION: &str = "You write WebGL 1.0 (GLSL ES 1.00) fragment shaders. \
Always declare exactly these lines at the top: \
`precision mediump float;`, `uniform float u_time;`, `uniform vec2 u_resolution;`, \
`uniform vec2 u_mouse;`, `varying vec2 fragCoord;`. \
Write the final color to gl_FragColor inside void main(). \
Define every helper function you call. \
Answer with shader code only: no explanations and no markdown fences.";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

pub fn user_prompt(description: &str) -> String {
    format!("Create a fragment shader for the following effect: {description}")
}

pub fn request_body(description: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content::text(SYSTEM_INSTRUCTION),
        contents: vec![Content::text(user_prompt(description))],
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a success body.
pub fn extract_text(body: &[u8]) -> Result<String, ProviderError> {
    let response: GenerateContentResponse =
        serde_json::from_slice(body).map_err(|err| ProviderError::contract(err.to_string()))?;
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| ProviderError::contract("response carries no candidate text"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_body_carries_system_instruction_and_prompt() {
        let body = serde_json::to_value(request_body("ocean waves")).unwrap();
        assert_eq!(
            body["system_instruction"]["parts"][0]["text"],
            json!(SYSTEM_INSTRUCTION)
        );
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("ocean waves"));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "void main() {}"}], "role": "model"}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"totalTokenCount": 10}
        });
        let text = extract_text(body.to_string().as_bytes()).unwrap();
        assert_eq!(text, "void main() {}");
    }

    #[test]
    fn unexpected_shapes_are_contract_errors() {
        for body in [
            "not json".to_string(),
            json!({}).to_string(),
            json!({"candidates": []}).to_string(),
            json!({"candidates": [{"content": {"parts": []}}]}).to_string(),
            json!({"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}).to_string(),
            json!({"error": {"code": 400}}).to_string(),
        ] {
            let err = extract_text(body.as_bytes()).unwrap_err();
            assert!(matches!(err, ProviderError::Contract(_)), "{body}: {err}");
        }
    }
}
