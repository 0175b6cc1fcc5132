//! Insertion-point lookup for spliced text.
//!
//! An anchor chain is an ordered list of literal substrings; the first one that
//! occurs in the buffer decides where new lines go. When an anchor occurs more
//! than once, the first occurrence wins. The split lands at the end of the line
//! holding that occurrence, so inserted text always starts on a fresh line.

/// A buffer cut in two right after the line that holds `anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSplit<'s> {
    pub anchor: &'static str,
    pub before: &'s str,
    pub after: &'s str,
}

impl AnchorSplit<'_> {
    /// Rebuilds the buffer with `block` on its own line(s) after the anchor line.
    pub fn splice(&self, block: &str) -> String {
        let mut out = String::with_capacity(self.before.len() + block.len() + self.after.len() + 1);
        out.push_str(self.before);
        out.push('\n');
        out.push_str(block);
        out.push_str(self.after);
        out
    }
}

/// Walks `chain` in order and splits at the first anchor present in `source`.
///
/// Returns `None` when no anchor of the chain occurs; callers fall back to
/// [`prepend`].
pub fn locate<'s>(source: &'s str, chain: &[&'static str]) -> Option<AnchorSplit<'s>> {
    chain
        .iter()
        .find_map(|&anchor| split_after_line(source, anchor))
}

/// Splits after the line containing the first occurrence of `anchor`.
pub fn split_after_line<'s>(source: &'s str, anchor: &'static str) -> Option<AnchorSplit<'s>> {
    if anchor.is_empty() {
        return None;
    }
    let start = source.find(anchor)?;
    let match_end = start + anchor.len();
    let line_end = source[match_end..]
        .find(['\r', '\n'])
        .map_or(source.len(), |offset| match_end + offset);
    Some(AnchorSplit {
        anchor,
        before: &source[..line_end],
        after: &source[line_end..],
    })
}

/// Places `block` on its own line(s) ahead of everything in `source`.
pub fn prepend(source: &str, block: &str) -> String {
    let mut out = String::with_capacity(block.len() + source.len() + 1);
    out.push_str(block);
    out.push('\n');
    out.push_str(source);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHAIN: &[&str] = &["varying vec2 fragCoord;", "uniform vec2 u_mouse;"];

    #[test]
    fn first_anchor_in_chain_wins() {
        let source = "uniform vec2 u_mouse;\nvarying vec2 fragCoord;\nvoid main() {}";
        let split = locate(source, CHAIN).expect("anchor");
        assert_eq!(split.anchor, "varying vec2 fragCoord;");
        assert_eq!(split.before, "uniform vec2 u_mouse;\nvarying vec2 fragCoord;");
        assert_eq!(split.after, "\nvoid main() {}");
    }

    #[test]
    fn falls_through_to_next_anchor_when_absent() {
        let source = "uniform vec2 u_mouse;\nvoid main() {}";
        let split = locate(source, CHAIN).expect("anchor");
        assert_eq!(split.anchor, "uniform vec2 u_mouse;");
        assert_eq!(split.before, "uniform vec2 u_mouse;");
    }

    #[test]
    fn reports_none_without_any_anchor() {
        assert_eq!(locate("void main() {}", CHAIN), None);
        assert_eq!(locate("", CHAIN), None);
    }

    #[test]
    fn repeated_anchor_splits_at_first_occurrence() {
        let source = "uniform vec2 u_mouse;\nfloat a;\nuniform vec2 u_mouse;\n";
        let split = locate(source, CHAIN).expect("anchor");
        assert_eq!(split.before, "uniform vec2 u_mouse;");
        assert_eq!(split.after, "\nfloat a;\nuniform vec2 u_mouse;\n");
    }

    #[test]
    fn split_keeps_trailing_comment_on_anchor_line() {
        let source = "uniform vec2 u_mouse; // pointer\r\nvoid main() {}";
        let split = locate(source, CHAIN).expect("anchor");
        assert_eq!(split.before, "uniform vec2 u_mouse; // pointer");
        assert_eq!(
            split.splice("float x;"),
            "uniform vec2 u_mouse; // pointer\nfloat x;\r\nvoid main() {}"
        );
    }

    #[test]
    fn splice_at_end_of_buffer_appends_block() {
        let split = locate("varying vec2 fragCoord;", CHAIN).expect("anchor");
        assert_eq!(split.after, "");
        assert_eq!(split.splice("float x;"), "varying vec2 fragCoord;\nfloat x;");
    }

    #[test]
    fn prepend_puts_block_on_its_own_line() {
        assert_eq!(prepend("void main() {}", "a;\nb;"), "a;\nb;\nvoid main() {}");
    }
}
