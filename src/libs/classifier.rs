//! Window-to-state inference.
//!
//! Decides from a process name whether LibreOffice has focus, and from the
//! window title which application and document are open. All matching is
//! case-insensitive substring matching; the document name comes from stripping
//! the "— LibreOffice Writer" style tail off the title.

use super::profile::{AppProfile, BASE, CALC, DEFAULT_APP_KEY, DRAW, IMPRESS, MATH, WRITER};
use once_cell::sync::Lazy;
use regex::Regex;

/// Process-name markers of the LibreOffice suite, lowercase.
const PROCESS_MARKERS: [&str; 2] = ["soffice", "libreoffice"];

/// One classification rule: any trigger found in the title selects `profile`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub profile: &'static AppProfile,
    pub triggers: &'static [&'static str],
}

impl Rule {
    fn matches(&self, title_lower: &str) -> bool {
        self.triggers.iter().any(|trigger| title_lower.contains(trigger))
    }
}

/// Classification rules, evaluated top to bottom. The first match wins.
///
/// The order is an invariant: triggers overlap (a title can mention both
/// "draw" and "database"), so reordering changes results. Titles that match
/// nothing fall through to [`DEFAULT_APP_KEY`].
pub const RULES: [Rule; 6] = [
    Rule { profile: &WRITER, triggers: &["writer", ".odt", ".doc"] },
    Rule { profile: &CALC, triggers: &["calc", ".ods", ".xls"] },
    Rule { profile: &IMPRESS, triggers: &["impress", ".odp", ".ppt"] },
    Rule { profile: &DRAW, triggers: &["draw", ".odg"] },
    Rule { profile: &BASE, triggers: &["base", ".odb"] },
    Rule { profile: &MATH, triggers: &["math", ".odf"] },
];

/// Title tails stripped to recover the document name, tried in order.
static SUFFIX_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"^(.*?)\s*[-–—]\s*LibreOffice\s+\w+$").expect("suffix pattern with app name should compile"),
        Regex::new(r"^(.*?)\s*[-–—]\s*LibreOffice.*$").expect("generic suffix pattern should compile"),
    ]
});

/// Returns `true` if the process belongs to the LibreOffice suite.
///
/// ```rust
/// use office_presence::libs::classifier::is_tracked;
///
/// assert!(is_tracked("soffice.bin"));
/// assert!(!is_tracked("firefox"));
/// ```
pub fn is_tracked(process_name: &str) -> bool {
    let lower = process_name.to_lowercase();
    PROCESS_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Returns the key of the application a window title belongs to.
pub fn classify(window_title: &str) -> &'static str {
    let title_lower = window_title.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&title_lower))
        .map(|rule| rule.profile.key)
        .unwrap_or(DEFAULT_APP_KEY)
}

/// Extracts the document name from a LibreOffice window title.
///
/// "Report — LibreOffice Writer" becomes "Report". A pattern whose captured
/// prefix is empty (a title that is only the suffix) does not count as a
/// match. Titles without a known tail are returned trimmed.
pub fn extract_document_name(window_title: &str) -> String {
    for pattern in SUFFIX_PATTERNS.iter() {
        if let Some(prefix) = pattern.captures(window_title).and_then(|caps| caps.get(1)) {
            let name = prefix.as_str().trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }

    window_title.trim().to_string()
}

/// Shortens `s` to at most `max_len` characters, ending in "..." when cut.
///
/// Length is counted in `char`s, so multi-byte text is never split inside a
/// character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_matches_profiles() {
        let keys: Vec<_> = RULES.iter().map(|rule| rule.profile.key).collect();
        assert_eq!(keys, ["swriter", "scalc", "simpress", "sdraw", "sbase", "smath"]);
    }

    #[test]
    fn triggers_are_lowercase() {
        for rule in RULES.iter() {
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }

    #[test]
    fn truncate_tiny_limit() {
        assert_eq!(truncate("abcdef", 2), "...");
    }
}
