use std::fmt::Write as _;

use serde::Serialize;

use crate::exception::correct_with;
use crate::glyphs::GlyphTables;
use crate::keys::derive;
use crate::normalize::strip_foreign;
use crate::settings::{settings, ExceptionSettings};

use super::{render, resolve_observed, Segment};

/// Full diagnostic result for a single word.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub normalized: String,
    pub passes: Vec<ExplainPass>,
    /// Rendered key before the exception correction.
    pub uncorrected: String,
    pub keys: [String; 3],
}

/// Segment state after one matcher pass.
#[derive(Debug, Serialize)]
pub struct ExplainPass {
    pub pass: &'static str,
    pub resolved: usize,
    pub segments: Vec<ExplainSegment>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ExplainSegment {
    Raw(String),
    Code(String),
}

impl From<&Segment> for ExplainSegment {
    fn from(s: &Segment) -> Self {
        match s {
            Segment::Raw(t) => ExplainSegment::Raw(t.clone()),
            Segment::Code(c) => ExplainSegment::Code(c.clone()),
        }
    }
}

impl ExplainResult {
    /// Human-readable multi-line rendering. Codes are shown in braces.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "input:      {}", self.input);
        let _ = writeln!(out, "normalized: {}", self.normalized);
        for p in &self.passes {
            let shown: String = p
                .segments
                .iter()
                .map(|s| match s {
                    ExplainSegment::Raw(t) => t.clone(),
                    ExplainSegment::Code(c) => format!("{{{c}}}"),
                })
                .collect();
            let _ = writeln!(out, "  {:<28} {:>2}  {}", p.pass, p.resolved, shown);
        }
        let _ = writeln!(out, "rendered:   {}", self.uncorrected);
        let [key0, key1, key2] = &self.keys;
        let _ = writeln!(out, "keys:       {key0} / {key1} / {key2}");
        out
    }
}

/// Run the pipeline and record the segments after every pass.
pub fn explain(word: &str) -> ExplainResult {
    explain_with(GlyphTables::global(), &settings().exception, word)
}

pub fn explain_with(tables: &GlyphTables, rule: &ExceptionSettings, word: &str) -> ExplainResult {
    let normalized = strip_foreign(word);
    let mut passes = Vec::new();
    let segments = resolve_observed(tables, &normalized, |pass, resolved, segs| {
        passes.push(ExplainPass {
            pass: pass.name(),
            resolved,
            segments: segs.iter().map(ExplainSegment::from).collect(),
        });
    });
    let uncorrected = render(&segments);
    let key2 = correct_with(rule, &uncorrected);
    let (key0, key1) = derive(&key2);

    ExplainResult {
        input: word.to_string(),
        normalized,
        passes,
        uncorrected,
        keys: [key0, key1, key2],
    }
}
