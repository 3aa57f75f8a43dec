use super::record::{IdentifierTier, ResolutionTrace};
use crate::identifier::PrefixAction;

/// Formats resolution traces into human-readable explanations.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a resolution trace as one line per decision.
    pub fn format_trace(trace: &ResolutionTrace) -> String {
        let mut lines = vec![format!("{} -> {}", trace.node, trace.identifier)];

        match (&trace.found, trace.tier) {
            (Some(found), IdentifierTier::ManualEdit) => {
                lines.push(format!("  base: '{}' ({})", found, trace.tier.describe()));
            }
            (Some(found), IdentifierTier::StoredIdentifier | IdentifierTier::NameAttribute) => {
                lines.push(format!("  base: '{}' from {}", trace.base, trace.tier.describe()));
                if !trace.stripped.is_empty() {
                    lines.push(format!(
                        "  stripped {} from '{}'",
                        Self::format_prefixes(&trace.stripped),
                        found
                    ));
                }
            }
            (found, tier) => {
                if let Some(rejected) = found {
                    lines.push(format!("  '{}' was unusable", rejected));
                }
                lines.push(format!("  base: '{}' from {}", trace.base, tier.describe()));
                if !trace.stripped.is_empty() {
                    lines.push(format!("  stripped {}", Self::format_prefixes(&trace.stripped)));
                }
            }
        }

        match &trace.document {
            Some(document) => lines.push(format!("  document: '{}'", document)),
            None => lines.push("  document: none".to_string()),
        }

        if let Some(action) = &trace.prefix {
            lines.push(format!("  prefix: {}", Self::format_action(action)));
        } else {
            lines.push("  prefix: policy not applied".to_string());
        }
        lines.join("\n")
    }

    fn format_action(action: &PrefixAction) -> String {
        match action {
            PrefixAction::Added { prefix, replaced } if replaced.is_empty() => {
                format!("added '{}'", prefix)
            }
            PrefixAction::Added { prefix, replaced } => format!(
                "added '{}' in place of {}",
                prefix,
                Self::format_prefixes(replaced)
            ),
            PrefixAction::AlreadyPresent { prefix } => format!("'{}' already present", prefix),
            PrefixAction::Stripped { removed } => {
                format!("stripped {}", Self::format_prefixes(removed))
            }
            PrefixAction::Unchanged => "unchanged".to_string(),
        }
    }

    fn format_prefixes(prefixes: &[String]) -> String {
        prefixes
            .iter()
            .map(|p| format!("'{}_'", p))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
