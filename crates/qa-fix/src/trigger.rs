//! When the fix is offered.
//!
//! The host describes the local declaration under the cursor as a
//! [`DeclarationSite`]. Assertions are offered when every declarator has an
//! initializer and the enclosing method carries an attribute whose simple
//! name contains `test` in any casing (`[TestMethod]`, `[Test]`,
//! `[TestCase]`, ...). The declared identifier must be a plain identifier,
//! since every generated path starts with it.

use qa_common::{DiagnosticDescriptor, QuickAssertsError};
use qa_solver::TypeId;
use qa_solver::path::is_identifier;
use serde::Serialize;
use tracing::trace;

/// Method enclosing the declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub name: String,
    /// Attribute names as written, without brackets or arguments.
    pub attributes: Vec<String>,
}

impl MethodInfo {
    pub fn new<S: Into<String>>(name: impl Into<String>, attributes: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// First attribute that marks this method as a test.
    pub fn test_attribute(&self) -> Option<&str> {
        self.attributes
            .iter()
            .map(String::as_str)
            .find(|name| is_test_attribute(name))
    }
}

/// A local variable declaration as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationSite {
    pub file_name: String,
    /// Identifier of the declared variable.
    pub identifier: String,
    /// `None` when the host could not resolve the declared type.
    pub declared_type: Option<TypeId>,
    /// Every declarator in the statement has an initializer.
    pub initialized: bool,
    pub enclosing_method: Option<MethodInfo>,
    /// 1-based line the declaration statement starts on.
    pub line: u32,
    /// 1-based line the statement ends on, when it spans several lines
    /// (e.g. an object initializer).
    pub end_line: Option<u32>,
    /// Leading whitespace of the declaration line.
    pub indentation: String,
}

impl DeclarationSite {
    pub fn new(file_name: impl Into<String>, identifier: impl Into<String>, declared_type: TypeId) -> Self {
        Self {
            file_name: file_name.into(),
            identifier: identifier.into(),
            declared_type: Some(declared_type),
            initialized: true,
            enclosing_method: None,
            line: 1,
            end_line: None,
            indentation: String::new(),
        }
    }

    pub fn in_method(mut self, method: MethodInfo) -> Self {
        self.enclosing_method = Some(method);
        self
    }

    pub fn at_line(mut self, line: u32, indentation: impl Into<String>) -> Self {
        self.line = line;
        self.indentation = indentation.into();
        self
    }

    pub fn ending_at(mut self, end_line: u32) -> Self {
        self.end_line = Some(end_line);
        self
    }

    /// Last line of the declaration statement.
    pub fn last_line(&self) -> u32 {
        self.end_line.map_or(self.line, |end| end.max(self.line))
    }

    pub fn uninitialized(mut self) -> Self {
        self.initialized = false;
        self
    }

    pub fn unresolved(mut self) -> Self {
        self.declared_type = None;
        self
    }
}

/// Why the fix is not offered for a site.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TriggerRejection {
    #[error("declaration has a declarator without an initializer")]
    MissingInitializer,
    #[error("declaration is not inside a method with a test attribute")]
    NotInTestMethod,
    #[error("`{identifier}` is not a variable identifier")]
    InvalidIdentifier { identifier: String },
    #[error("type of `{identifier}` could not be resolved")]
    UnresolvedDeclaration { identifier: String },
}

impl From<TriggerRejection> for QuickAssertsError {
    fn from(rejection: TriggerRejection) -> Self {
        QuickAssertsError::NotApplicable {
            reason: rejection.to_string(),
        }
    }
}

/// An eligible site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerMatch {
    pub identifier: String,
    pub root: TypeId,
    /// The attribute that made the method a test.
    pub attribute: String,
}

impl TriggerMatch {
    /// Diagnostic to report at the declaration.
    pub const fn descriptor(&self) -> &'static DiagnosticDescriptor {
        &DiagnosticDescriptor::QUICK_ASSERTS
    }
}

/// Simple identifier containing `test`, case-insensitively. Qualified names
/// such as `NUnit.Framework.Test` do not qualify.
pub fn is_test_attribute(name: &str) -> bool {
    is_identifier(name) && name.to_ascii_lowercase().contains("test")
}

pub fn check_trigger(site: &DeclarationSite) -> Result<TriggerMatch, TriggerRejection> {
    if !site.initialized {
        return Err(TriggerRejection::MissingInitializer);
    }
    let attribute = site
        .enclosing_method
        .as_ref()
        .and_then(MethodInfo::test_attribute)
        .ok_or(TriggerRejection::NotInTestMethod)?;
    if !is_identifier(&site.identifier) {
        return Err(TriggerRejection::InvalidIdentifier {
            identifier: site.identifier.clone(),
        });
    }
    let root = site
        .declared_type
        .ok_or_else(|| TriggerRejection::UnresolvedDeclaration {
            identifier: site.identifier.clone(),
        })?;
    trace!(identifier = %site.identifier, attribute, "trigger matched");
    Ok(TriggerMatch {
        identifier: site.identifier.clone(),
        root,
        attribute: attribute.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/trigger_tests.rs"]
mod tests;
