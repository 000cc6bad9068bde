//! Tag-context tracking for ignorable elements.

use std::cell::Cell;

use super::options::NestedMode;

/// Elements whose character data is excluded from extracted text.
const IGNORED_TAGS: [&str; 2] = ["style", "script"];

/// Tracks whether the tokenizer position is inside an ignorable element.
///
/// Uses interior mutability because the html5ever tokenizer hands tokens to
/// the sink through a shared reference.
pub struct TagContext {
    mode: NestedMode,
    ignore: Cell<bool>,
    depth: Cell<u32>,
}

impl TagContext {
    /// Create a tracker in the `Normal` (not ignoring) state.
    pub fn new(mode: NestedMode) -> Self {
        Self {
            mode,
            ignore: Cell::new(false),
            depth: Cell::new(0),
        }
    }

    /// Record a start tag. Only `style` and `script` have any effect.
    pub fn on_start_tag(&self, name: &str) {
        if !is_ignored_tag(name) {
            return;
        }
        match self.mode {
            NestedMode::Flag => self.ignore.set(true),
            NestedMode::Depth => self.depth.set(self.depth.get() + 1),
        }
    }

    /// Record an end tag. Only `style` and `script` have any effect.
    ///
    /// In [`NestedMode::Flag`], a stray end tag clears the ignore state even
    /// when no matching start tag was seen.
    pub fn on_end_tag(&self, name: &str) {
        if !is_ignored_tag(name) {
            return;
        }
        match self.mode {
            NestedMode::Flag => self.ignore.set(false),
            NestedMode::Depth => self.depth.set(self.depth.get().saturating_sub(1)),
        }
    }

    /// Whether character data at the current position must be discarded.
    pub fn in_ignored(&self) -> bool {
        match self.mode {
            NestedMode::Flag => self.ignore.get(),
            NestedMode::Depth => self.depth.get() > 0,
        }
    }
}

/// Whether the tag name belongs to an ignorable element.
pub fn is_ignored_tag(name: &str) -> bool {
    IGNORED_TAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mode_transitions() {
        let ctx = TagContext::new(NestedMode::Flag);
        assert!(!ctx.in_ignored());

        ctx.on_start_tag("script");
        assert!(ctx.in_ignored());

        ctx.on_end_tag("script");
        assert!(!ctx.in_ignored());
    }

    #[test]
    fn test_other_tags_have_no_effect() {
        let ctx = TagContext::new(NestedMode::Flag);
        ctx.on_start_tag("div");
        assert!(!ctx.in_ignored());

        ctx.on_start_tag("style");
        ctx.on_end_tag("p");
        assert!(ctx.in_ignored());
    }

    #[test]
    fn test_flag_mode_stray_end_tag_clears() {
        let ctx = TagContext::new(NestedMode::Flag);
        ctx.on_start_tag("script");
        ctx.on_start_tag("script");
        ctx.on_end_tag("script");
        // Flag tracking has no memory of the second start tag.
        assert!(!ctx.in_ignored());
    }

    #[test]
    fn test_depth_mode_nested() {
        let ctx = TagContext::new(NestedMode::Depth);
        ctx.on_start_tag("script");
        ctx.on_start_tag("script");
        ctx.on_end_tag("script");
        assert!(ctx.in_ignored());
        ctx.on_end_tag("script");
        assert!(!ctx.in_ignored());
    }

    #[test]
    fn test_depth_mode_stray_end_tag_saturates() {
        let ctx = TagContext::new(NestedMode::Depth);
        ctx.on_end_tag("script");
        assert!(!ctx.in_ignored());
        ctx.on_start_tag("style");
        assert!(ctx.in_ignored());
    }
}
