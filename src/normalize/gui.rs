//! Fixed rewrite table for the GUI/runtime export.
//!
//! These rules exist for a handful of well-known compound identifiers the cart
//! runtime expects in a particular shape. They run after the general reference
//! normalizer and are not a general rule.

use super::references::split_instance_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiRewrite {
    /// `<base>_<word>_<n>` becomes `<base>_<n>_<word>`.
    RelocateInstance { word: &'static str },
    /// `<base>_<anchor>_<rest>` becomes `<base>_<anchor>`, keeping a trailing `_<n>`.
    TruncateAtAnchor { anchor: &'static str },
}

pub const GUI_REWRITES: [GuiRewrite; 4] = [
    GuiRewrite::TruncateAtAnchor { anchor: "amount" },
    GuiRewrite::TruncateAtAnchor { anchor: "date" },
    GuiRewrite::RelocateInstance { word: "yes" },
    GuiRewrite::RelocateInstance { word: "no" },
];

impl GuiRewrite {
    pub fn apply(self, identifier: &str) -> Option<String> {
        match self {
            GuiRewrite::RelocateInstance { word } => {
                let (base, index) = split_instance_index(identifier);
                let index = index?;
                let stem = base.strip_suffix(word)?.strip_suffix('_')?;
                (!stem.is_empty()).then(|| format!("{}_{}_{}", stem, index, word))
            }
            GuiRewrite::TruncateAtAnchor { anchor } => {
                let (base, index) = split_instance_index(identifier);
                let marker = format!("_{}_", anchor);
                let cut = base.find(&marker)? + marker.len() - 1;
                let truncated = &base[..cut];
                Some(match index {
                    Some(index) => format!("{}_{}", truncated, index),
                    None => truncated.to_string(),
                })
            }
        }
    }
}

/// Runs every rule of the table in order.
pub fn apply_gui_rewrites(identifier: &str) -> String {
    GUI_REWRITES
        .iter()
        .fold(identifier.to_string(), |current, rule| {
            rule.apply(&current).unwrap_or(current)
        })
}
