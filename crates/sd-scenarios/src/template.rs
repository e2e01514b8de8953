//! Response templates with `{dotted.path}` placeholders.
//!
//! `{{` and `}}` produce literal braces. Templates carry no logic: rendering
//! only substitutes placeholders with scalar values from the context.

use serde_json::Value;

use crate::error::{RenderError, TemplateError};
use crate::path::FieldPath;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(FieldPath),
}

/// A parsed response template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, next)| next == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, next)| next == '}').is_some() => literal.push('}'),
                '}' => return Err(TemplateError::UnmatchedClose { offset }),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) | None => return Err(TemplateError::Unclosed { offset }),
                            Some((_, ch)) => name.push(ch),
                        }
                    }
                    let path = FieldPath::parse(&name)
                        .ok_or_else(|| TemplateError::InvalidPlaceholder(name.clone()))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(path));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholder paths in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &FieldPath> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(path) => Some(path),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder from `context`.
    ///
    /// Fails on the first placeholder that does not resolve to a string,
    /// number or boolean.
    pub fn render(&self, context: &Value) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(path) => {
                    let value = path.resolve(context).ok_or_else(|| RenderError::Unresolved {
                        placeholder: path.to_string(),
                    })?;
                    match value {
                        Value::String(s) => out.push_str(s),
                        Value::Number(n) => out.push_str(&n.to_string()),
                        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                        _ => {
                            return Err(RenderError::NotScalar {
                                placeholder: path.to_string(),
                            });
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse and render `template` in one step.
pub fn render(template: &str, context: &Value) -> Result<String, RenderError> {
    Template::parse(template)?.render(context)
}
