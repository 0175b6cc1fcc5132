use crate::{declarations, functions, markdown, ShaderSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StripMarkdown,
    NormalizeDeclarations,
    InjectFunctions,
}

impl Stage {
    pub fn apply(self, source: ShaderSource) -> ShaderSource {
        match self {
            Self::StripMarkdown => markdown::strip(source),
            Self::NormalizeDeclarations => declarations::normalize(source),
            Self::InjectFunctions => functions::inject(source),
        }
    }
}

/// Stage order used by [`repair`].
///
/// Fences are unwrapped once up front so a prepended precision line cannot push
/// an opening fence away from the start of the buffer. The final strip stays
/// last because the provider may wrap the whole answer, declarations included.
pub const REPAIR_ORDER: [Stage; 4] = [
    Stage::StripMarkdown,
    Stage::NormalizeDeclarations,
    Stage::InjectFunctions,
    Stage::StripMarkdown,
];

pub fn repair_source(source: ShaderSource) -> ShaderSource {
    let repaired = REPAIR_ORDER
        .iter()
        .fold(source, |source, stage| stage.apply(source));
    ShaderSource::from(repaired.as_str().trim())
}

/// Repairs raw provider output into a shader that satisfies the runtime contract.
pub fn repair(raw: &str) -> String {
    repair_source(ShaderSource::from(raw)).into_string()
}
