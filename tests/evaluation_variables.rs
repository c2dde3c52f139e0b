use regcheck_rs::{Check, Descriptor, Evaluation, FnCheck, Range, Value, Variable, VariableFrame};

fn int(n: i64) -> Value {
    Value::Int(n)
}

#[test]
fn variable_when_whole_element_is_bound_then_back_reference_matches_it() {
    let v = Variable::named("first");
    let grammar: Vec<Descriptor<Value>> = vec![
        v.bind().into(),
        Check::of_type("int").into(),
        Check::any().into(),
        v.compare().into(),
    ];
    let evaluation = Evaluation::new(grammar).expect("evaluation should build");

    assert!(
        evaluation
            .check(&[int(7), int(0), int(7)])
            .expect("check should finish")
    );
    assert!(
        !evaluation
            .check(&[int(7), int(0), int(8)])
            .expect("check should finish")
    );
    assert_eq!(evaluation.last_failure_details().furthest_index, 2);
}

#[test]
fn variable_when_bound_by_consuming_bind_then_cursor_advances() {
    let v = Variable::new();
    let grammar: Vec<Descriptor<Value>> = vec![v.bind().consuming().into(), v.compare().into()];
    let evaluation = Evaluation::new(grammar).expect("evaluation should build");

    assert!(
        evaluation
            .check(&[int(3), int(3)])
            .expect("check should finish")
    );
    assert!(!evaluation.check(&[int(3)]).expect("check should finish"));
}

#[test]
fn variable_when_rebound_inside_range_then_latest_iteration_wins() {
    let v = Variable::named("last");
    let range: Range<Value> =
        Range::zero_or_more(vec![v.bind().into(), Check::any().into()]).expect("range should build");
    let evaluation = Evaluation::new(vec![range.into(), v.compare().into()])
        .expect("evaluation should build");

    assert!(
        evaluation
            .check(&[int(1), int(2), int(2)])
            .expect("check should finish")
    );
    assert!(
        !evaluation
            .check(&[int(1), int(2), int(1)])
            .expect("check should finish")
    );
}

#[test]
fn variable_when_sibling_branch_binds_then_other_branch_does_not_see_it() {
    let v = Variable::named("v");
    let optional_bind: Range<Value> =
        Range::new(0, Some(1), vec![v.bind().consuming().into()]).expect("range should build");
    let unbound = FnCheck::new("v is unbound", {
        let v = v.clone();
        move |_: &Value, frame: &mut VariableFrame<Value>| !frame.is_bound(&v)
    })
    .non_consuming();

    let evaluation = Evaluation::new(vec![
        optional_bind.into(),
        unbound.into(),
        Check::of_type("int").into(),
    ])
    .expect("evaluation should build");

    // only the branch that skipped the bind can pass the lookahead
    assert!(evaluation.check(&[int(5)]).expect("check should finish"));
    assert!(!evaluation.check(&[int(5), int(6)]).expect("check should finish"));
}

#[test]
fn variable_when_compared_before_binding_then_reports_unbound() {
    let v = Variable::named("late");
    let grammar: Vec<Descriptor<Value>> = vec![v.compare().into(), v.bind().into()];
    let evaluation = Evaluation::new(grammar).expect("evaluation should build");

    assert!(!evaluation.check(&[int(1)]).expect("check should finish"));
    assert_eq!(
        evaluation.last_failure_details().reason.as_deref(),
        Some("variable late is not bound")
    );
}
