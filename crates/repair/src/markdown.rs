//! Removes markdown wrapping that text providers put around code.
//!
//! Every pattern is anchored to the start or end of the buffer; backticks or
//! language names inside the shader body are never touched.

use crate::ShaderSource;
use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*```[A-Za-z0-9_+.\-]*[ \t]*(?:\r?\n|$)").expect("valid fence-open regex")
});

static FENCE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n)?[ \t]*```\s*$").expect("valid fence-close regex"));

static LANGUAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:glsl|webgl|frag|hlsl)[ \t]*(?:\r?\n|$)")
        .expect("valid language-line regex")
});

static CONTENT_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:fragment[ \t]+shader|fragment|shader)[ \t]*:?[ \t]*(?:\r?\n|$)")
        .expect("valid content-word regex")
});

/// Strips fences, a leading language tag line and a leading content-type word,
/// then trims. Repeats until nothing changes, so nested wrappers also go.
pub fn strip(source: ShaderSource) -> ShaderSource {
    let mut text = source.into_string();
    loop {
        let next = strip_once(&text);
        if next == text {
            return ShaderSource::from(next);
        }
        text = next;
    }
}

fn strip_once(text: &str) -> String {
    let text = FENCE_OPEN.replace(text, "");
    let text = FENCE_CLOSE.replace(&text, "");
    let text = LANGUAGE_LINE.replace(&text, "");
    let text = CONTENT_WORD.replace(&text, "");
    text.trim().to_string()
}
