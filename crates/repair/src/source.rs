use std::fmt;

/// Owned fragment-shader text flowing through the repair stages.
///
/// Stages consume a `ShaderSource` and hand back a new one; the buffer is never
/// shared between stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShaderSource(String);

impl ShaderSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ShaderSource {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ShaderSource {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<ShaderSource> for String {
    fn from(source: ShaderSource) -> Self {
        source.0
    }
}

impl AsRef<str> for ShaderSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
