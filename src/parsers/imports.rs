//! Lexical extraction of import and export statements from JS/TS source
//!
//! This is a pattern-based approximation of the module syntax, not a parser.
//! Statements the patterns do not recognise are skipped: a missing edge is
//! preferred over a wrong one.

use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// `import X from "p"`, `import {A, B as C} from "p"`, `import * as N from "p"`,
/// `import X, {A} from "p"`, `export {A} from "p"`, `export * from "p"`.
///
/// The binding clause only admits identifiers, `as`, `*`, commas and a braced
/// list so a match never runs across unrelated statements.
const STATIC_PATTERN: &str = r#"(?m)^[ \t]*(import|export)\b\s*(?:type\s+)?((?:[\w$]+(?:\s+as\s+[\w$]+)?(?:\s*,\s*(?:\*\s*as\s+[\w$]+|\{[^{}"'`;=()]*\}))?)|\*(?:\s*as\s+[\w$]+)?|\{[^{}"'`;=()]*\})\s*from\s*["']([^"'\r\n]+)["']"#;

/// `import "p"`
const SIDE_EFFECT_PATTERN: &str = r#"(?m)^[ \t]*import\s*["']([^"'\r\n]+)["']"#;

/// `import("p")`, optionally destructured as `const {A, B} = await import("p")`
const DYNAMIC_PATTERN: &str =
    r#"(?:\{([^{}]*)\}\s*=\s*await\s+)?\bimport\s*\(\s*["']([^"'\r\n]+)["']\s*\)"#;

static STATIC_REGEX: OnceLock<Regex> = OnceLock::new();
static SIDE_EFFECT_REGEX: OnceLock<Regex> = OnceLock::new();
static DYNAMIC_REGEX: OnceLock<Regex> = OnceLock::new();

fn static_regex() -> &'static Regex {
    STATIC_REGEX.get_or_init(|| Regex::new(STATIC_PATTERN).expect("invalid static import pattern"))
}

fn side_effect_regex() -> &'static Regex {
    SIDE_EFFECT_REGEX
        .get_or_init(|| Regex::new(SIDE_EFFECT_PATTERN).expect("invalid side-effect import pattern"))
}

fn dynamic_regex() -> &'static Regex {
    DYNAMIC_REGEX
        .get_or_init(|| Regex::new(DYNAMIC_PATTERN).expect("invalid dynamic import pattern"))
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Syntactic form of an import statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `import ... from "p"`
    Static,
    /// `export ... from "p"`
    ReExport,
    /// `import "p"`
    SideEffect,
    /// `import("p")`
    Dynamic,
}

/// One recognised statement referencing another module by string literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub kind: ImportKind,
    /// The module path exactly as written between the quotes
    pub source: String,
    /// Label fragments; never empty, but a fragment may be the empty string
    pub fragments: Vec<String>,
    /// Byte offset of the statement in the file
    pub offset: usize,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract every recognised import statement of a file, in source order
pub fn extract_imports(content: &str) -> Vec<ImportStatement> {
    let mut statements = Vec::new();

    for caps in static_regex().captures_iter(content) {
        let (Some(whole), Some(keyword), Some(clause), Some(source)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        let kind = if keyword.as_str() == "export" {
            ImportKind::ReExport
        } else {
            ImportKind::Static
        };
        statements.push(ImportStatement {
            kind,
            source: source.as_str().to_string(),
            fragments: clause_fragments(clause.as_str()),
            offset: whole.start(),
        });
    }

    for caps in side_effect_regex().captures_iter(content) {
        let (Some(whole), Some(source)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        statements.push(ImportStatement {
            kind: ImportKind::SideEffect,
            source: source.as_str().to_string(),
            fragments: vec![String::new()],
            offset: whole.start(),
        });
    }

    for caps in dynamic_regex().captures_iter(content) {
        let (Some(whole), Some(source)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let fragments = match caps.get(1) {
            Some(names) => name_list(names.as_str()),
            None => vec![String::new()],
        };
        statements.push(ImportStatement {
            kind: ImportKind::Dynamic,
            source: source.as_str().to_string(),
            fragments,
            offset: whole.start(),
        });
    }

    statements.sort_by_key(|statement| statement.offset);
    statements
}

/// Split a binding clause (`X, {A, type B as C}`) into label fragments
fn clause_fragments(clause: &str) -> Vec<String> {
    name_list(&clause.replace(['{', '}'], ","))
}

/// Comma separated names, whitespace collapsed, inline `type` modifiers dropped
fn name_list(names: &str) -> Vec<String> {
    let fragments: Vec<String> = names
        .split(',')
        .map(|item| item.split_whitespace().collect::<Vec<_>>().join(" "))
        .map(|item| match item.strip_prefix("type ") {
            Some(rest) => rest.to_string(),
            None => item,
        })
        .filter(|item| !item.is_empty())
        .collect();

    if fragments.is_empty() {
        vec![String::new()]
    } else {
        fragments
    }
}
