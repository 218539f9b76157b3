//! Code Fix
//!
//! Everything between the host editor and the generator:
//! - **Trigger**: decides whether a declaration gets the fix
//! - **Options**: camelCase JSON configuration
//! - **Code action**: runs the pipeline and delivers statements to a sink
pub mod code_action;
pub mod config;
pub mod trigger;

pub use code_action::{
    AssertionFix, AssertionSink, CodeFixFileChange, CodeFixInfo, CodeFixPosition,
    CodeFixTextChange, CollectingSink, FIX_DESCRIPTION, FIX_NAME, FixOutcome, InsertionPoint,
    TextChangeSink,
};
pub use config::FixOptions;
pub use trigger::{
    DeclarationSite, MethodInfo, TriggerMatch, TriggerRejection, check_trigger, is_test_attribute,
};
