//! The "Create assertions" code fix.
//!
//! [`AssertionFix`] runs the pipeline for one declaration site:
//! trigger check, property traversal, assertion synthesis, and delivery of
//! the statements to an [`AssertionSink`]. Hosts either implement the sink
//! over their own syntax tree or use [`TextChangeSink`] to get a
//! serialisable [`CodeFixInfo`] with a plain text insertion.

use crate::config::FixOptions;
use crate::trigger::{DeclarationSite, check_trigger};
use qa_common::{CancellationToken, Result, TraversalNote};
use qa_emitter::{AssertionStatement, AssertionSynthesizer, Clock, IRPrinter};
use qa_solver::{PropertyTraverser, TypeDatabase};
use serde::Serialize;
use tracing::{Level, debug, span};

pub const FIX_NAME: &str = "createAssertions";
pub const FIX_DESCRIPTION: &str = "Create assertions";

/// Code fix in the shape LSP-style hosts expect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixInfo {
    pub fix_name: String,
    pub description: String,
    pub changes: Vec<CodeFixFileChange>,
    /// Commands to run after applying the fix. Always empty.
    pub commands: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixFileChange {
    pub file_name: String,
    pub text_changes: Vec<CodeFixTextChange>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixTextChange {
    pub start: CodeFixPosition,
    pub end: CodeFixPosition,
    pub new_text: String,
}

/// 1-based line and offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeFixPosition {
    pub line: u32,
    pub offset: u32,
}

/// Where generated statements go: directly after the declaration statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPoint {
    pub file_name: String,
    /// 1-based line of the anchoring declaration.
    pub after_line: u32,
    /// Prefix for every inserted line.
    pub indentation: String,
}

impl InsertionPoint {
    /// Falls back to `default_indent` when the host did not report the
    /// declaration's indentation.
    pub fn after(site: &DeclarationSite, default_indent: &str) -> Self {
        let indentation = if site.indentation.is_empty() {
            default_indent
        } else {
            &site.indentation
        };
        Self {
            file_name: site.file_name.clone(),
            after_line: site.last_line(),
            indentation: indentation.to_string(),
        }
    }
}

/// Receives the generated statements, in order.
pub trait AssertionSink {
    fn insert(&mut self, point: &InsertionPoint, statements: &[AssertionStatement]) -> Result<()>;
}

/// Keeps every insertion in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub insertions: Vec<(InsertionPoint, Vec<AssertionStatement>)>,
}

impl AssertionSink for CollectingSink {
    fn insert(&mut self, point: &InsertionPoint, statements: &[AssertionStatement]) -> Result<()> {
        self.insertions.push((point.clone(), statements.to_vec()));
        Ok(())
    }
}

/// Renders insertions as text changes.
#[derive(Debug, Default)]
pub struct TextChangeSink {
    changes: Vec<CodeFixFileChange>,
}

impl TextChangeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[CodeFixFileChange] {
        &self.changes
    }

    pub fn into_code_fix(self) -> CodeFixInfo {
        CodeFixInfo {
            fix_name: FIX_NAME.to_string(),
            description: FIX_DESCRIPTION.to_string(),
            changes: self.changes,
            commands: Vec::new(),
            fix_id: None,
        }
    }
}

impl AssertionSink for TextChangeSink {
    fn insert(&mut self, point: &InsertionPoint, statements: &[AssertionStatement]) -> Result<()> {
        // The declaration's indentation is printed as one indent unit.
        let mut printer = IRPrinter::with_indent(&point.indentation);
        printer.set_indent_level(1);
        printer.emit_statements(statements.iter().map(|s| &s.node));

        let position = CodeFixPosition {
            line: point.after_line + 1,
            offset: 1,
        };
        let text_change = CodeFixTextChange {
            start: position,
            end: position,
            new_text: printer.take_output(),
        };
        match self
            .changes
            .iter_mut()
            .find(|change| change.file_name == point.file_name)
        {
            Some(change) => change.text_changes.push(text_change),
            None => self.changes.push(CodeFixFileChange {
                file_name: point.file_name.clone(),
                text_changes: vec![text_change],
            }),
        }
        Ok(())
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub insertion_point: InsertionPoint,
    pub statements: Vec<AssertionStatement>,
    pub notes: Vec<TraversalNote>,
}

impl FixOutcome {
    /// Statements as source lines, without indentation.
    pub fn source_lines(&self) -> Vec<String> {
        self.statements
            .iter()
            .map(AssertionStatement::to_source)
            .collect()
    }
}

pub struct AssertionFix<'a> {
    db: &'a dyn TypeDatabase,
    clock: &'a dyn Clock,
    options: FixOptions,
    cancellation: CancellationToken,
}

impl<'a> AssertionFix<'a> {
    pub fn new(db: &'a dyn TypeDatabase, clock: &'a dyn Clock) -> Self {
        Self {
            db,
            clock,
            options: FixOptions::default(),
            cancellation: CancellationToken::none(),
        }
    }

    pub fn with_options(mut self, options: FixOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn options(&self) -> &FixOptions {
        &self.options
    }

    /// Generate the statements for `site` without delivering them.
    pub fn generate(&self, site: &DeclarationSite) -> Result<FixOutcome> {
        let _span = span!(Level::DEBUG, "create_assertions", identifier = %site.identifier).entered();
        let matched = check_trigger(site)?;

        let traverser = PropertyTraverser::new(self.db)
            .with_options(self.options.traversal)
            .with_cancellation(self.cancellation.clone());
        let traversal = if self.options.parallel {
            traverser.traverse_parallel(matched.root, &matched.identifier)?
        } else {
            traverser.traverse(matched.root, &matched.identifier)?
        };

        let synthesizer =
            AssertionSynthesizer::from_clock(self.clock).with_style(self.options.style.clone());
        let statements = synthesizer.synthesize(&traversal.properties);
        debug!(
            statements = statements.len(),
            notes = traversal.notes.len(),
            "generated assertions"
        );
        Ok(FixOutcome {
            insertion_point: InsertionPoint::after(site, &self.options.indent),
            statements,
            notes: traversal.notes,
        })
    }

    /// Generate and hand the statements to `sink`.
    ///
    /// A cancelled run returns `Err(Cancelled)` without touching the sink.
    /// An empty result is not delivered.
    pub fn apply(&self, site: &DeclarationSite, sink: &mut dyn AssertionSink) -> Result<FixOutcome> {
        let outcome = self.generate(site)?;
        self.cancellation.check()?;
        if outcome.statements.is_empty() {
            debug!("nothing to insert");
            return Ok(outcome);
        }
        sink.insert(&outcome.insertion_point, &outcome.statements)?;
        Ok(outcome)
    }

    /// Run the fix and describe it as a text change.
    pub fn code_fix(&self, site: &DeclarationSite) -> Result<CodeFixInfo> {
        let mut sink = TextChangeSink::new();
        self.apply(site, &mut sink)?;
        Ok(sink.into_code_fix())
    }
}

#[cfg(test)]
#[path = "tests/code_action_tests.rs"]
mod tests;
