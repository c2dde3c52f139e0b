use regcheck_rs::{Check, Descriptor, Evaluation, GrammarError, Range, Value, Variable};

fn check(type_name: &str) -> Descriptor<Value> {
    Check::of_type(type_name).into()
}

fn seq(types: &str) -> Vec<Value> {
    types
        .chars()
        .map(|c| Value::record(c.to_string()).into())
        .collect()
}

fn evaluation(descriptors: Vec<Descriptor<Value>>) -> Evaluation<Value> {
    Evaluation::new(descriptors).expect("evaluation should build")
}

#[test]
fn range_when_bounded_then_accepts_counts_between_min_and_max() {
    let range = Range::new(2, Some(5), vec![check("A")]).expect("range should build");
    let evaluation = evaluation(vec![range.into()]);

    for count in 0..=6 {
        let sequence = seq(&"A".repeat(count));
        let matched = evaluation.check(&sequence).expect("check should finish");
        assert_eq!(matched, (2..=5).contains(&count), "count {count}");
    }
}

#[test]
fn range_when_one_or_more_then_requires_at_least_one_iteration() {
    let range = Range::one_or_more(vec![check("A")]).expect("range should build");
    let evaluation = evaluation(vec![range.into(), check("B")]);

    assert!(!evaluation.check(&seq("B")).expect("check should finish"));
    assert!(evaluation.check(&seq("AB")).expect("check should finish"));
    assert!(
        evaluation
            .check(&seq(&format!("{}B", "A".repeat(40))))
            .expect("check should finish")
    );
}

#[test]
fn range_when_zero_or_more_then_accepts_empty_repetition() {
    let range = Range::zero_or_more(vec![check("A")]).expect("range should build");
    let evaluation = evaluation(vec![check("B"), range.into()]);

    assert!(evaluation.check(&seq("B")).expect("check should finish"));
    assert!(evaluation.check(&seq("BAAA")).expect("check should finish"));
    assert!(!evaluation.check(&seq("BAAC")).expect("check should finish"));
    assert_eq!(evaluation.last_failure_details().furthest_index, 3);
}

#[test]
fn range_when_exact_then_rejects_neighbouring_counts() {
    let range = Range::exactly(3, vec![check("A"), check("B")]).expect("range should build");
    let evaluation = evaluation(vec![range.into()]);

    assert!(evaluation.check(&seq("ABABAB")).expect("check should finish"));
    assert!(!evaluation.check(&seq("ABAB")).expect("check should finish"));
    assert!(!evaluation.check(&seq("ABABABAB")).expect("check should finish"));
}

#[test]
fn range_when_optional_then_element_may_be_skipped() {
    let evaluation = evaluation(vec![
        check("A"),
        Range::<Value>::optional(Check::of_type("B")).into(),
        check("C"),
    ]);

    assert!(evaluation.check(&seq("AC")).expect("check should finish"));
    assert!(evaluation.check(&seq("ABC")).expect("check should finish"));
    assert!(!evaluation.check(&seq("ABBC")).expect("check should finish"));
}

#[test]
fn range_when_nested_then_inner_counts_restart_per_outer_iteration() {
    let inner = Range::new(1, Some(2), vec![check("B")]).expect("inner range should build");
    let outer =
        Range::one_or_more(vec![check("A"), inner.into()]).expect("outer range should build");
    let evaluation = evaluation(vec![outer.into()]);

    assert!(evaluation.check(&seq("AB")).expect("check should finish"));
    assert!(evaluation.check(&seq("ABBABAB")).expect("check should finish"));
    assert!(!evaluation.check(&seq("ABBB")).expect("check should finish"));
    assert!(!evaluation.check(&seq("AAB")).expect("check should finish"));
}

#[test]
fn range_when_body_consumes_nothing_then_search_terminates() {
    let v = Variable::named("v");
    let range: Range<Value> = Range::zero_or_more(vec![v.bind().into()]).expect("range should build");
    let evaluation = evaluation(vec![range.into(), check("A")]);

    assert!(evaluation.check(&seq("A")).expect("check should finish"));
    assert!(!evaluation.check(&seq("B")).expect("check should finish"));
}

#[test]
fn range_when_iteration_only_binds_then_next_iteration_may_consume() {
    let v = Variable::named("v");
    let body = || -> Vec<Descriptor<Value>> {
        vec![
            Range::<Value>::optional(v.compare()).into(),
            v.bind().into(),
        ]
    };
    let unbounded = Range::zero_or_more(body()).expect("range should build");
    let bounded = Range::new(0, Some(5), body()).expect("range should build");

    let sequence = seq("A");
    assert!(
        evaluation(vec![bounded.into()])
            .check(&sequence)
            .expect("check should finish")
    );
    assert!(
        evaluation(vec![unbounded.into()])
            .check(&sequence)
            .expect("check should finish")
    );
}

#[test]
fn range_when_bounds_are_invalid_then_construction_fails() {
    match Range::<Value>::new(3, Some(2), vec![check("A")]) {
        Err(GrammarError::InvertedBounds { min, max }) => assert_eq!((min, max), (3, 2)),
        other => panic!("expected inverted bounds error, got {other:?}"),
    }
    match Range::<Value>::new(0, Some(1), Vec::new()) {
        Err(GrammarError::EmptyRange) => {}
        other => panic!("expected empty range error, got {other:?}"),
    }
}
