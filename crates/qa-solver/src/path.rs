//! Access paths from the declared variable to an assertable value.
//!
//! A path is a chain of segments rooted at the variable's identifier:
//! `model.Orders.FirstOrDefault().Lines.Count`. Member segments are plain
//! property reads; invocation segments are parameterless method calls used to
//! sample collections.

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

pub const COUNT: &str = "Count";
pub const FIRST_OR_DEFAULT: &str = "FirstOrDefault";
pub const LAST_OR_DEFAULT: &str = "LastOrDefault";
pub const VALUE: &str = "Value";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// `.Name`
    Member(String),
    /// `.Name()`
    Invocation(String),
}

impl PathSegment {
    pub fn name(&self) -> &str {
        match self {
            PathSegment::Member(name) | PathSegment::Invocation(name) => name,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Member(name) => f.write_str(name),
            PathSegment::Invocation(name) => write!(f, "{name}()"),
        }
    }
}

/// Which boundary element of a container a path samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessorSuffix {
    /// `FirstOrDefault()`
    FirstElement,
    /// `LastOrDefault()`
    LastElement,
    /// `FirstOrDefault().Value`
    FirstEntryValue,
    /// `LastOrDefault().Value`
    LastEntryValue,
}

impl AccessorSuffix {
    /// Samples taken from sequences and arrays, in emission order.
    pub const ELEMENTS: [AccessorSuffix; 2] =
        [AccessorSuffix::FirstElement, AccessorSuffix::LastElement];

    /// Samples taken from maps, in emission order. Keys are never sampled.
    pub const ENTRY_VALUES: [AccessorSuffix; 2] =
        [AccessorSuffix::FirstEntryValue, AccessorSuffix::LastEntryValue];

    fn sampler(self) -> &'static str {
        match self {
            AccessorSuffix::FirstElement | AccessorSuffix::FirstEntryValue => FIRST_OR_DEFAULT,
            AccessorSuffix::LastElement | AccessorSuffix::LastEntryValue => LAST_OR_DEFAULT,
        }
    }

    fn reads_entry_value(self) -> bool {
        matches!(
            self,
            AccessorSuffix::FirstEntryValue | AccessorSuffix::LastEntryValue
        )
    }

    /// Source form of the suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessorSuffix::FirstElement => "FirstOrDefault()",
            AccessorSuffix::LastElement => "LastOrDefault()",
            AccessorSuffix::FirstEntryValue => "FirstOrDefault().Value",
            AccessorSuffix::LastEntryValue => "LastOrDefault().Value",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathParseError {
    Empty,
    /// A segment is empty (`a..b`) or not an identifier.
    InvalidSegment { index: usize, text: String },
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathParseError::Empty => f.write_str("access path is empty"),
            PathParseError::InvalidSegment { index, text } => {
                write!(f, "segment {index} (`{text}`) is not an identifier")
            }
        }
    }
}

impl std::error::Error for PathParseError {}

/// Immutable access path. Extending a path returns a new one, so sibling
/// branches never observe each other's segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccessPath {
    segments: SmallVec<[PathSegment; 6]>,
}

impl AccessPath {
    pub fn root(identifier: impl Into<String>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(PathSegment::Member(identifier.into()));
        Self { segments }
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// `self.name`
    pub fn member(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Member(name.into()))
    }

    /// `self.name()`
    pub fn invoke(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Invocation(name.into()))
    }

    /// `self.<suffix>`
    pub fn sampled(&self, suffix: AccessorSuffix) -> Self {
        let sampled = self.invoke(suffix.sampler());
        if suffix.reads_entry_value() {
            sampled.member(VALUE)
        } else {
            sampled
        }
    }

    /// Identifier of the declared variable.
    pub fn root_name(&self) -> &str {
        self.segments.first().map(PathSegment::name).unwrap_or("")
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse the dotted form, e.g. `model.Items.FirstOrDefault().Name`.
    ///
    /// A segment ending in `()` becomes an invocation. Every segment must be a
    /// C# identifier (an `@` prefix is allowed for keywords).
    pub fn parse(text: &str) -> Result<Self, PathParseError> {
        if text.trim().is_empty() {
            return Err(PathParseError::Empty);
        }
        let mut segments = SmallVec::new();
        for (index, raw) in text.split('.').enumerate() {
            let raw = raw.trim();
            let (name, invoked) = match raw.strip_suffix("()") {
                Some(name) => (name, true),
                None => (raw, false),
            };
            if !is_identifier(name) || (invoked && index == 0) {
                return Err(PathParseError::InvalidSegment {
                    index,
                    text: raw.to_string(),
                });
            }
            segments.push(if invoked {
                PathSegment::Invocation(name.to_string())
            } else {
                PathSegment::Member(name.to_string())
            });
        }
        Ok(Self { segments })
    }
}

/// C# identifier check: `[@]?[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(text: &str) -> bool {
    let body = text.strip_prefix('@').unwrap_or(text);
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for AccessPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
