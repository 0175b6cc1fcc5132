//! # Shaderforge Repair
//!
//! Normalizes machine-generated GLSL fragment shaders so they satisfy a fixed
//! runtime contract: the five scaffold declarations exist, helper functions that
//! are referenced but never defined are supplied, and markdown fences left by the
//! text provider are gone.
//!
//! ## Architecture
//!
//! ```text
//! raw text
//!     │
//!     ├──> Markdown Stripper      (unwrap fences before anything is prepended)
//!     │
//!     ├──> Declaration Normalizer (precision, uniforms, varying)
//!     │         └─> Anchor Locator
//!     │
//!     ├──> Function Injector      (sdBox, sdSphere, sdPlane, noise, rotate)
//!     │         └─> Anchor Locator
//!     │
//!     └──> Markdown Stripper      (final pass + trim)
//! ```
//!
//! Every stage is a total function over an owned [`ShaderSource`]; nothing here
//! can fail and nothing performs I/O.
//!
//! ## Example
//!
//! ```rust
//! use shaderforge_repair::repair;
//!
//! let repaired = repair("```glsl\nvoid main() { gl_FragColor = vec4(noise(fragCoord)); }\n```");
//! assert!(repaired.starts_with("precision mediump float;"));
//! assert!(repaired.contains("float noise(vec2 p)"));
//! assert!(!repaired.contains("```"));
//! ```

pub mod anchor;
pub mod declarations;
pub mod functions;
pub mod markdown;
mod pipeline;
mod source;

pub use anchor::{locate, AnchorSplit};
pub use declarations::{normalize, REQUIRED_DECLARATIONS};
pub use functions::{inject, FunctionFamily, FUNCTION_CATALOG};
pub use markdown::strip;
pub use pipeline::{repair, repair_source, Stage, REPAIR_ORDER};
pub use source::ShaderSource;
