//! Fix options.
//!
//! Hosts pass options as camelCase JSON; every field is optional and the
//! defaults reproduce MSTest output with four-space indentation:
//!
//! ```json
//! {
//!   "style": { "target": "Assert.Equal", "argumentOrder": "expectedFirst" },
//!   "traversal": { "profile": "shallow", "includeInherited": true },
//!   "indent": "\t",
//!   "parallel": false
//! }
//! ```

use qa_common::{QuickAssertsError, Result};
use qa_emitter::AssertionStyle;
use qa_emitter::ir_printer::DEFAULT_INDENT;
use qa_solver::{AccessPath, PathSegment, RecursionProfile, TraversalOptions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixOptions {
    pub style: AssertionStyle,
    pub traversal: TraversalOptions,
    /// Indent unit used when the declaration's own indentation is unknown.
    pub indent: String,
    /// Expand top-level properties on the rayon pool.
    pub parallel: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            style: AssertionStyle::default(),
            traversal: TraversalOptions::default(),
            indent: DEFAULT_INDENT.to_string(),
            parallel: false,
        }
    }
}

impl FixOptions {
    /// Parse and validate options JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: FixOptions =
            serde_json::from_str(text).map_err(|err| config_error(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| config_error(err.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let target = AccessPath::parse(&self.style.target)
            .map_err(|err| config_error(format!("assertion target: {err}")))?;
        if target
            .segments()
            .iter()
            .any(|segment| matches!(segment, PathSegment::Invocation(_)))
        {
            return Err(config_error(format!(
                "assertion target `{}` must be a member name, not a call",
                self.style.target
            )));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(config_error("indent may only contain spaces and tabs"));
        }
        if let RecursionProfile::Custom { max_depth, max_expansions } = self.traversal.profile
            && (max_depth == 0 || max_expansions == 0)
        {
            return Err(config_error("custom recursion limits must be positive"));
        }
        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> QuickAssertsError {
    QuickAssertsError::Config {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_emitter::ArgumentOrder;

    #[test]
    fn empty_json_is_the_default() {
        assert_eq!(FixOptions::from_json_str("{}").unwrap(), FixOptions::default());
    }

    #[test]
    fn nested_options_parse() {
        let options = FixOptions::from_json_str(
            r#"{
                "style": { "target": "Assert.Equal" },
                "traversal": {
                    "profile": { "custom": { "maxDepth": 4, "maxExpansions": 50 } },
                    "includeInherited": true
                },
                "indent": "\t",
                "parallel": true
            }"#,
        )
        .unwrap();
        assert_eq!(options.style.target, "Assert.Equal");
        assert_eq!(options.style.argument_order, ArgumentOrder::ExpectedFirst);
        assert_eq!(
            options.traversal.profile,
            RecursionProfile::Custom {
                max_depth: 4,
                max_expansions: 50
            }
        );
        assert!(options.traversal.include_inherited);
        assert_eq!(options.indent, "\t");
        assert!(options.parallel);
    }

    #[test]
    fn named_profiles_parse() {
        let options =
            FixOptions::from_json_str(r#"{ "traversal": { "profile": "shallow" } }"#).unwrap();
        assert_eq!(options.traversal.profile, RecursionProfile::Shallow);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = FixOptions::from_json_str("{ \"indent\": 4 }").unwrap_err();
        assert!(matches!(err, QuickAssertsError::Config { .. }));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for json in [
            r#"{ "style": { "target": "" } }"#,
            r#"{ "style": { "target": "Assert.AreEqual()" } }"#,
            r#"{ "indent": "xx" }"#,
            r#"{ "traversal": { "profile": { "custom": { "maxDepth": 0, "maxExpansions": 5 } } } }"#,
        ] {
            assert!(
                matches!(
                    FixOptions::from_json_str(json),
                    Err(QuickAssertsError::Config { .. })
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = FixOptions {
            parallel: true,
            traversal: TraversalOptions {
                profile: RecursionProfile::Shallow,
                ..TraversalOptions::default()
            },
            ..FixOptions::default()
        };
        let json = options.to_json_string().unwrap();
        assert_eq!(FixOptions::from_json_str(&json).unwrap(), options);
    }
}
