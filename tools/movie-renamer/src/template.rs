//! Naming templates.
//!
//! `{key}` is replaced by the record attribute with that JSON key. A `[...]`
//! section is kept only if every placeholder inside it renders non-empty, so
//! `{title}[ ({year})]` renders `Brave (2012)` or just `Brave`.

use anyhow::{Result, bail};
use relparse_core::ReleaseRecord;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(String),
    Optional(Vec<Segment>),
}

/// A parsed naming template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template, rejecting unbalanced `{}` and `[]`.
    ///
    /// Placeholders that name no record attribute are accepted with a warning
    /// and render empty.
    pub fn parse(source: &str) -> Result<Self> {
        let mut chars = source.chars();
        let segments = parse_segments(&mut chars, false)?;

        let known: Vec<&str> = ReleaseRecord::default()
            .attributes()
            .iter()
            .map(|a| a.key)
            .collect();
        for key in field_keys(&segments) {
            if !known.contains(&key) {
                warn!(template = source, placeholder = key, "unknown placeholder renders empty");
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the template against a parsed release.
    pub fn render(&self, record: &ReleaseRecord) -> String {
        render_segments(&self.segments, record).0
    }
}

fn parse_segments(chars: &mut std::str::Chars<'_>, nested: bool) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut text = String::new();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c @ ('{' | '[' | ']')) => {
                            bail!("unexpected '{c}' inside placeholder")
                        }
                        Some(c) => key.push(c),
                        None => bail!("unclosed placeholder '{{{key}'"),
                    }
                }
                let key = key.trim();
                if key.is_empty() {
                    bail!("empty placeholder '{{}}'");
                }
                flush_text(&mut text, &mut segments);
                segments.push(Segment::Field(key.to_string()));
            }
            '}' => bail!("unmatched '}}'"),
            '[' => {
                flush_text(&mut text, &mut segments);
                segments.push(Segment::Optional(parse_segments(chars, true)?));
            }
            ']' if nested => {
                flush_text(&mut text, &mut segments);
                return Ok(segments);
            }
            ']' => bail!("unmatched ']'"),
            c => text.push(c),
        }
    }

    if nested {
        bail!("unclosed optional section '['");
    }
    flush_text(&mut text, &mut segments);
    Ok(segments)
}

fn flush_text(text: &mut String, segments: &mut Vec<Segment>) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

fn field_keys(segments: &[Segment]) -> Vec<&str> {
    let mut keys = Vec::new();
    for segment in segments {
        match segment {
            Segment::Field(key) => keys.push(key.as_str()),
            Segment::Optional(inner) => keys.extend(field_keys(inner)),
            Segment::Text(_) => {}
        }
    }
    keys
}

/// Rendered text plus whether every placeholder produced a value.
fn render_segments(segments: &[Segment], record: &ReleaseRecord) -> (String, bool) {
    let mut out = String::new();
    let mut complete = true;

    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Field(key) => {
                let value = record.attribute(key).unwrap_or_default();
                if value.is_empty() {
                    complete = false;
                }
                out.push_str(&value);
            }
            Segment::Optional(inner) => {
                let (text, inner_complete) = render_segments(inner, record);
                if inner_complete {
                    out.push_str(&text);
                }
            }
        }
    }

    (out, complete)
}
