//! Multi-pass grapheme substitution.
//!
//! The word is held as a sequence of [`Segment`]s. Every pass scans only the
//! `Raw` segments, splitting them around the graphemes it resolves, so a code
//! emitted by an earlier pass is never read back as script text.

pub mod explain;

use tracing::{debug, debug_span};

use crate::glyphs::{GlyphEntry, GlyphTable, GlyphTables};
use crate::normalize::strip_scaffolding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Script text not yet resolved.
    Raw(String),
    /// A resolved code; never rescanned.
    Code(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Raw(s) | Segment::Code(s) => s,
        }
    }
}

/// Matcher passes in execution order. Longer units go first so a compound is
/// never split into its member consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    ModifiedCompounds,
    Compounds,
    ModifiedBases,
    Consonants,
    Vowels,
    Chillus,
    Modifiers,
}

impl Pass {
    pub const ORDER: [Pass; 7] = [
        Pass::ModifiedCompounds,
        Pass::Compounds,
        Pass::ModifiedBases,
        Pass::Consonants,
        Pass::Vowels,
        Pass::Chillus,
        Pass::Modifiers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::ModifiedCompounds => "modified-compounds",
            Pass::Compounds => "compounds",
            Pass::ModifiedBases => "modified-consonants-vowels",
            Pass::Consonants => "consonants",
            Pass::Vowels => "vowels",
            Pass::Chillus => "chillus",
            Pass::Modifiers => "modifiers",
        }
    }
}

/// Run all passes over already-normalized text and return the final segments.
pub fn resolve(tables: &GlyphTables, text: &str) -> Vec<Segment> {
    resolve_observed(tables, text, |_, _, _| {})
}

/// Like [`resolve`], calling `observe(pass, resolved, segments)` after each pass.
pub fn resolve_observed<F>(tables: &GlyphTables, text: &str, mut observe: F) -> Vec<Segment>
where
    F: FnMut(Pass, usize, &[Segment]),
{
    let _span = debug_span!("resolve", chars = text.chars().count()).entered();

    let mut segments = if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Raw(text.to_string())]
    };
    for pass in Pass::ORDER {
        let (next, resolved) = apply_pass(tables, pass, segments);
        segments = next;
        debug!(pass = pass.name(), resolved, "pass done");
        observe(pass, resolved, &segments);
    }
    segments
}

/// Apply one pass, returning the new segments and how many units it resolved.
pub fn apply_pass(
    tables: &GlyphTables,
    pass: Pass,
    segments: Vec<Segment>,
) -> (Vec<Segment>, usize) {
    match pass {
        Pass::ModifiedCompounds => {
            resolve_modified(&[&tables.compounds], &tables.modifiers, segments)
        }
        Pass::Compounds => resolve_plain(&tables.compounds, segments),
        Pass::ModifiedBases => resolve_modified(
            &[&tables.consonants, &tables.vowels],
            &tables.modifiers,
            segments,
        ),
        Pass::Consonants => resolve_plain(&tables.consonants, segments),
        Pass::Vowels => resolve_plain(&tables.vowels, segments),
        Pass::Chillus => resolve_plain(&tables.chillus, segments),
        Pass::Modifiers => resolve_plain(&tables.modifiers, segments),
    }
}

/// Replace each base glyph immediately followed by one modifier with a single
/// `Code(base + modifier)`. Bases without a trailing modifier stay raw.
pub fn resolve_modified(
    bases: &[&GlyphTable],
    modifiers: &GlyphTable,
    segments: Vec<Segment>,
) -> (Vec<Segment>, usize) {
    rewrite_raw(segments, |rest| {
        let mut candidates: Vec<&GlyphEntry> =
            bases.iter().flat_map(|t| t.prefixes(rest)).collect();
        candidates.sort_by_key(|e| std::cmp::Reverse(e.grapheme.chars().count()));
        candidates.into_iter().find_map(|base| {
            let after = &rest[base.grapheme.len()..];
            modifiers.longest_prefix(after).map(|m| {
                (
                    base.grapheme.len() + m.grapheme.len(),
                    format!("{}{}", base.code, m.code),
                )
            })
        })
    })
}

/// Replace each grapheme of `table` with its code. Empty codes simply delete
/// the grapheme.
pub fn resolve_plain(table: &GlyphTable, segments: Vec<Segment>) -> (Vec<Segment>, usize) {
    rewrite_raw(segments, |rest| {
        table
            .longest_prefix(rest)
            .map(|e| (e.grapheme.len(), e.code.clone()))
    })
}

/// Scan every raw segment left to right. `hit` gets the unscanned remainder
/// and returns `(bytes consumed, code)` on a match.
fn rewrite_raw<F>(segments: Vec<Segment>, mut hit: F) -> (Vec<Segment>, usize)
where
    F: FnMut(&str) -> Option<(usize, String)>,
{
    let mut out = Vec::with_capacity(segments.len());
    let mut resolved = 0;

    for segment in segments {
        let text = match segment {
            Segment::Raw(text) => text,
            code => {
                out.push(code);
                continue;
            }
        };

        let mut start = 0;
        let mut pos = 0;
        while pos < text.len() {
            let Some((len, code)) = hit(&text[pos..]) else {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
                continue;
            };
            if start < pos {
                out.push(Segment::Raw(text[start..pos].to_string()));
            }
            if !code.is_empty() {
                out.push(Segment::Code(code));
            }
            resolved += 1;
            pos += len;
            start = pos;
        }
        if start < text.len() {
            out.push(Segment::Raw(text[start..].to_string()));
        }
    }

    (out, resolved)
}

/// Concatenate segments and drop everything that is not part of a code,
/// including raw script no table recognised.
pub fn render(segments: &[Segment]) -> String {
    let joined: String = segments.iter().map(Segment::as_str).collect();
    strip_scaffolding(&joined)
}
