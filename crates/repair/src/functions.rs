//! Supplies helper functions that a shader calls but never defines.
//!
//! Each [`FunctionFamily`] pairs a trigger token (usage) with an
//! already-defined marker. A family's canonical body is spliced in when the
//! trigger occurs and the marker does not. Families run in catalog order and
//! each one sees the buffer as left by the previous ones.

use crate::anchor;
use crate::declarations::{self, PRECISION, REQUIRED_DECLARATIONS, U_MOUSE, VARYING};
use crate::ShaderSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionFamily {
    pub name: &'static str,
    /// Substring that signals the shader uses the family.
    pub trigger: &'static str,
    /// Substring that signals a definition already exists.
    pub marker: &'static str,
    pub body: &'static str,
}

impl FunctionFamily {
    pub fn is_needed(&self, text: &str) -> bool {
        text.contains(self.trigger) && !text.contains(self.marker)
    }
}

/// Bodies contain their own marker exactly once and no other family's trigger.
pub const FUNCTION_CATALOG: [FunctionFamily; 5] = [
    FunctionFamily {
        name: "box_sdf",
        trigger: "sdBox",
        marker: "float sdBox",
        body: SD_BOX,
    },
    FunctionFamily {
        name: "sphere_sdf",
        trigger: "sdSphere",
        marker: "float sdSphere",
        body: SD_SPHERE,
    },
    FunctionFamily {
        name: "plane_sdf",
        trigger: "sdPlane",
        marker: "float sdPlane",
        body: SD_PLANE,
    },
    FunctionFamily {
        name: "noise",
        trigger: "noise",
        marker: "float noise",
        body: NOISE,
    },
    FunctionFamily {
        name: "rotation",
        trigger: "rotate",
        marker: "vec3 rotate",
        body: ROTATION,
    },
];

/// Injection point: after the varying line, else `u_mouse`, else precision.
pub const INJECTION_ANCHORS: [&str; 3] = [VARYING, U_MOUSE, PRECISION];

const SD_BOX: &str = "float sdBox(vec3 p, vec3 b) {
    vec3 q = abs(p) - b;
    return length(max(q, 0.0)) + min(max(q.x, max(q.y, q.z)), 0.0);
}";

const SD_SPHERE: &str = "float sdSphere(vec3 p, float s) {
    return length(p) - s;
}";

const SD_PLANE: &str = "float sdPlane(vec3 p, vec3 n, float h) {
    return dot(p, n) + h;
}";

const NOISE: &str = "float hash(vec2 p) {
    return fract(sin(dot(p, vec2(127.1, 311.7))) * 43758.5453123);
}

float noise(vec2 p) {
    vec2 i = floor(p);
    vec2 f = fract(p);
    vec2 u = f * f * (3.0 - 2.0 * f);
    return mix(mix(hash(i), hash(i + vec2(1.0, 0.0)), u.x),
               mix(hash(i + vec2(0.0, 1.0)), hash(i + vec2(1.0, 1.0)), u.x), u.y);
}";

const ROTATION: &str = "mat3 rotateX(float a) {
    float c = cos(a);
    float s = sin(a);
    return mat3(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c);
}

mat3 rotateY(float a) {
    float c = cos(a);
    float s = sin(a);
    return mat3(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c);
}

mat3 rotateZ(float a) {
    float c = cos(a);
    float s = sin(a);
    return mat3(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0);
}

vec3 rotate(vec3 p, vec3 angles) {
    return rotateZ(angles.z) * rotateY(angles.y) * rotateX(angles.x) * p;
}";

/// Splices in every family the shader references without defining.
pub fn inject(source: ShaderSource) -> ShaderSource {
    let text = FUNCTION_CATALOG
        .iter()
        .fold(source.into_string(), |text, family| {
            if family.is_needed(&text) {
                splice_family(text, family)
            } else {
                text
            }
        });
    ShaderSource::from(text)
}

fn splice_family(text: String, family: &FunctionFamily) -> String {
    log::debug!("injecting {} helpers", family.name);
    match anchor::locate(&text, &INJECTION_ANCHORS) {
        Some(split) if split.anchor == PRECISION => {
            // Nothing after precision to hang the body on; rebuild the scaffold first.
            let mut block = declarations::absent(&text, &REQUIRED_DECLARATIONS[1..]);
            block.push(family.body);
            split.splice(&block.join("\n"))
        }
        Some(split) => split.splice(family.body),
        None => {
            let mut block = declarations::absent(&text, &REQUIRED_DECLARATIONS);
            block.push(family.body);
            anchor::prepend(&text, &block.join("\n"))
        }
    }
}
