//! Assertion Emitter
//!
//! Converts traversal leaves into C# assertion statements:
//! - **IR**: small expression/statement tree built by the synthesizer
//! - **Printer**: renders IR as source text
//! - **Clock**: injected source of the `DateTime` placeholder year
pub mod clock;
pub mod ir;
pub mod ir_printer;
pub mod synthesize;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ir::IRNode;
pub use ir_printer::IRPrinter;
pub use synthesize::{
    ArgumentOrder, AssertionStatement, AssertionStyle, AssertionSynthesizer, actual_expression,
    render_statements,
};
