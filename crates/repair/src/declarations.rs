//! Guarantees the five scaffold declarations the renderer binds against.

use crate::anchor;
use crate::ShaderSource;

pub const PRECISION: &str = "precision mediump float;";
pub const U_TIME: &str = "uniform float u_time;";
pub const U_RESOLUTION: &str = "uniform vec2 u_resolution;";
pub const U_MOUSE: &str = "uniform vec2 u_mouse;";
pub const VARYING: &str = "varying vec2 fragCoord;";

/// Canonical order of the required declarations.
pub const REQUIRED_DECLARATIONS: [&str; 5] = [PRECISION, U_TIME, U_RESOLUTION, U_MOUSE, VARYING];

pub(crate) const UNIFORMS: [&str; 3] = [U_TIME, U_RESOLUTION, U_MOUSE];

// Where the varying line goes when it is missing; u_mouse is always present by then.
const VARYING_ANCHORS: [&str; 4] = [U_MOUSE, U_RESOLUTION, U_TIME, PRECISION];

/// Declarations from `candidates` that do not occur verbatim in `text`, in order.
pub(crate) fn absent(text: &str, candidates: &[&'static str]) -> Vec<&'static str> {
    candidates
        .iter()
        .copied()
        .filter(|decl| !text.contains(decl))
        .collect()
}

/// Adds whichever required declarations are missing.
///
/// At most one branch of the precision → `u_time` → `u_resolution` → `u_mouse`
/// chain fires: the first missing declaration is inserted next to its canonical
/// predecessor, together with every missing uniform that follows it. The varying
/// line is checked independently afterwards. Declarations already present are
/// never moved or duplicated.
pub fn normalize(source: ShaderSource) -> ShaderSource {
    let text = ensure_header(source.into_string());
    ShaderSource::from(ensure_varying(text))
}

fn ensure_header(text: String) -> String {
    if !text.contains(PRECISION) {
        let mut block = vec![PRECISION];
        block.extend(absent(&text, &UNIFORMS));
        log::debug!("prepending scaffold: {}", block.join(" "));
        return anchor::prepend(&text, &block.join("\n"));
    }

    let Some(first_missing) = UNIFORMS.iter().position(|decl| !text.contains(decl)) else {
        return text;
    };
    let predecessor = match first_missing {
        0 => PRECISION,
        n => UNIFORMS[n - 1],
    };
    let block = absent(&text, &UNIFORMS[first_missing..]);
    log::debug!("inserting {} after `{predecessor}`", block.join(" "));
    let block = block.join("\n");
    match anchor::split_after_line(&text, predecessor) {
        Some(split) => split.splice(&block),
        None => anchor::prepend(&text, &block),
    }
}

fn ensure_varying(text: String) -> String {
    if text.contains(VARYING) {
        return text;
    }
    match anchor::locate(&text, &VARYING_ANCHORS) {
        Some(split) => {
            log::debug!("inserting varying after `{}`", split.anchor);
            split.splice(VARYING)
        }
        None => anchor::prepend(&text, VARYING),
    }
}
