use super::*;
use crate::trigger::MethodInfo;
use qa_common::{NoteKind, QuickAssertsError};
use qa_emitter::{AssertionStyle, FixedClock};
use qa_solver::{TypeId, TypeStore};

const CLOCK: FixedClock = FixedClock(2026);

fn order_model(store: &mut TypeStore) -> TypeId {
    let line = store.class("OrderLine", &[("Sku", TypeId::STRING), ("Quantity", TypeId::INT32)]);
    let lines = store.list_of(line);
    store.class(
        "Order",
        &[("Id", TypeId::INT64), ("Lines", lines), ("Placed", TypeId::DATE_TIME)],
    )
}

fn site(root: TypeId) -> DeclarationSite {
    DeclarationSite::new("OrderTests.cs", "order", root)
        .in_method(MethodInfo::new("Builds_order", ["TestMethod"]))
        .at_line(12, "        ")
}

#[test]
fn test_apply_delivers_statements_in_order() {
    let mut store = TypeStore::new();
    let root = order_model(&mut store);
    let mut sink = CollectingSink::default();

    let outcome = AssertionFix::new(&store, &CLOCK)
        .apply(&site(root), &mut sink)
        .unwrap();

    assert_eq!(
        outcome.source_lines(),
        vec![
            "Assert.AreEqual(0, order.Id);",
            "Assert.AreEqual(0, order.Lines.Count);",
            "Assert.AreEqual(\"\", order.Lines.FirstOrDefault().Sku);",
            "Assert.AreEqual(0, order.Lines.FirstOrDefault().Quantity);",
            "Assert.AreEqual(\"\", order.Lines.LastOrDefault().Sku);",
            "Assert.AreEqual(0, order.Lines.LastOrDefault().Quantity);",
            "Assert.AreEqual(new DateTime(2026, 1, 1), order.Placed);",
        ]
    );
    assert_eq!(sink.insertions.len(), 1);
    let (point, statements) = &sink.insertions[0];
    assert_eq!(point.after_line, 12);
    assert_eq!(point.indentation, "        ");
    assert_eq!(statements, &outcome.statements);
}

#[test]
fn test_cancelled_run_never_reaches_the_sink() {
    let mut store = TypeStore::new();
    let root = order_model(&mut store);
    let token = CancellationToken::new();
    token.cancel();
    let mut sink = CollectingSink::default();

    let result = AssertionFix::new(&store, &CLOCK)
        .with_cancellation(token)
        .apply(&site(root), &mut sink);

    assert_eq!(result.unwrap_err(), QuickAssertsError::Cancelled);
    assert!(sink.insertions.is_empty());
}

#[test]
fn test_rejected_site_is_not_applicable() {
    let mut store = TypeStore::new();
    let root = order_model(&mut store);
    let mut sink = CollectingSink::default();
    let site = DeclarationSite::new("OrderTests.cs", "order", root)
        .in_method(MethodInfo::new("Helper", ["Obsolete"]));

    let err = AssertionFix::new(&store, &CLOCK)
        .apply(&site, &mut sink)
        .unwrap_err();

    assert!(matches!(err, QuickAssertsError::NotApplicable { .. }));
    assert!(sink.insertions.is_empty());
}

#[test]
fn test_unresolved_root_inserts_nothing() {
    let store = TypeStore::new();
    let mut sink = CollectingSink::default();

    let outcome = AssertionFix::new(&store, &CLOCK)
        .apply(&site(TypeId(4_242)), &mut sink)
        .unwrap();

    assert!(outcome.statements.is_empty());
    assert_eq!(outcome.notes.len(), 1);
    assert_eq!(outcome.notes[0].kind, NoteKind::UnresolvedType);
    assert!(sink.insertions.is_empty());
}

#[test]
fn test_sink_errors_propagate() {
    struct ReadOnlyDocument;
    impl AssertionSink for ReadOnlyDocument {
        fn insert(&mut self, _: &InsertionPoint, _: &[AssertionStatement]) -> Result<()> {
            Err(QuickAssertsError::NotApplicable {
                reason: "document is read-only".into(),
            })
        }
    }

    let mut store = TypeStore::new();
    let root = order_model(&mut store);
    let err = AssertionFix::new(&store, &CLOCK)
        .apply(&site(root), &mut ReadOnlyDocument)
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot create assertions here: document is read-only");
}

#[test]
fn test_text_change_inserts_after_declaration_line() {
    let mut store = TypeStore::new();
    let root = store.class("Flag", &[("On", TypeId::BOOLEAN), ("Name", TypeId::STRING)]);

    let fix = AssertionFix::new(&store, &CLOCK).code_fix(&site(root)).unwrap();

    assert_eq!(fix.fix_name, "createAssertions");
    assert_eq!(fix.description, "Create assertions");
    assert_eq!(fix.changes.len(), 1);
    let change = &fix.changes[0];
    assert_eq!(change.file_name, "OrderTests.cs");
    assert_eq!(change.text_changes.len(), 1);
    let text = &change.text_changes[0];
    assert_eq!(text.start, CodeFixPosition { line: 13, offset: 1 });
    assert_eq!(text.start, text.end);
    assert_eq!(
        text.new_text,
        "        Assert.AreEqual(false, order.On);\n        Assert.AreEqual(\"\", order.Name);\n"
    );
}

#[test]
fn test_multi_line_declaration_inserts_after_its_last_line() {
    let mut store = TypeStore::new();
    let root = store.class("Flag", &[("On", TypeId::BOOLEAN)]);
    let fix = AssertionFix::new(&store, &CLOCK);

    // var order = new Flag
    // {
    //     On = true
    // };
    let info = fix.code_fix(&site(root).ending_at(15)).unwrap();
    let text = &info.changes[0].text_changes[0];
    assert_eq!(text.start, CodeFixPosition { line: 16, offset: 1 });

    // An end before the start is ignored.
    let info = fix.code_fix(&site(root).ending_at(3)).unwrap();
    assert_eq!(
        info.changes[0].text_changes[0].start,
        CodeFixPosition { line: 13, offset: 1 }
    );
}

#[test]
fn test_text_changes_group_by_file() {
    let mut store = TypeStore::new();
    let root = store.class("Flag", &[("On", TypeId::BOOLEAN)]);
    let fix = AssertionFix::new(&store, &CLOCK);
    let mut sink = TextChangeSink::new();

    fix.apply(&site(root), &mut sink).unwrap();
    fix.apply(&site(root).at_line(30, "    "), &mut sink).unwrap();
    let mut other = site(root);
    other.file_name = "OtherTests.cs".into();
    fix.apply(&other, &mut sink).unwrap();

    let changes = sink.changes();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].text_changes.len(), 2);
    assert_eq!(changes[0].text_changes[1].start.line, 31);
    assert_eq!(changes[0].text_changes[1].new_text, "    Assert.AreEqual(false, order.On);\n");
    assert_eq!(changes[1].file_name, "OtherTests.cs");
}

#[test]
fn test_missing_indentation_uses_configured_indent() {
    let mut store = TypeStore::new();
    let root = store.class("Flag", &[("On", TypeId::BOOLEAN)]);
    let options = FixOptions {
        indent: "\t".into(),
        ..FixOptions::default()
    };
    let site = site(root).at_line(3, "");

    let outcome = AssertionFix::new(&store, &CLOCK)
        .with_options(options)
        .generate(&site)
        .unwrap();
    assert_eq!(outcome.insertion_point.indentation, "\t");
}

#[test]
fn test_options_select_style_and_parallel_traversal() {
    let mut store = TypeStore::new();
    let root = order_model(&mut store);
    let options = FixOptions {
        style: AssertionStyle::xunit(),
        parallel: true,
        ..FixOptions::default()
    };

    let sequential = AssertionFix::new(&store, &CLOCK)
        .with_options(FixOptions {
            style: AssertionStyle::xunit(),
            ..FixOptions::default()
        })
        .generate(&site(root))
        .unwrap();
    let parallel = AssertionFix::new(&store, &CLOCK)
        .with_options(options)
        .generate(&site(root))
        .unwrap();

    assert_eq!(sequential.source_lines(), parallel.source_lines());
    assert_eq!(parallel.source_lines()[0], "Assert.Equal(0, order.Id);");
}
