//! End-to-end classification tests.
//!
//! Tests verify:
//! - Every row lands in at most one of {bucket, failed}
//! - Same input = same output
//! - Input order kept inside a bucket
//! - First matching signal decides the component
//! - Report numbering runs High → Medium → Low per component

use tcsort_common::classifier::placeholder_id;
use tcsort_common::report::ReportRow;
use tcsort_common::{
    classify, Cell, ClassificationContext, Priority, Report, SignalComponentMap, Table,
    TestCaseRow, UnmatchedPolicy,
};

const HEADER: &str =
    "Test Case ID,Test Priority,Test Type,Description,Preconditions,Test Steps,Expected Results";

fn keywords() -> SignalComponentMap {
    let table = Table::read_csv("Signal,Component\nlogin,Auth\nsubmit,Form\nlogout,Auth\n".as_bytes())
        .unwrap();
    SignalComponentMap::load(&table).unwrap()
}

/// Build input rows from `id,priority,steps` triples
fn input(rows: &[(&str, &str, &str)]) -> Vec<TestCaseRow> {
    let mut csv = format!("{}\n", HEADER);
    for (id, priority, steps) in rows {
        csv.push_str(&format!("{},{},Functional,d,p,{},e\n", id, priority, steps));
    }
    let table = Table::read_csv(csv.as_bytes()).unwrap();
    TestCaseRow::rows_from_table(&table).unwrap()
}

fn refs(rows: &[TestCaseRow]) -> Vec<String> {
    rows.iter().map(|r| r.reference.to_string()).collect()
}

#[test]
fn test_scenario_login_then_submit() {
    let out = classify(input(&[("TC1", "High", "user clicks login then submit")]), &keywords())
        .unwrap();

    let auth = out.components.get("Auth").expect("Auth component");
    assert_eq!(auth.high.len(), 1);
    assert_eq!(auth.high[0].test_case_id, Cell::text("TC-Auth-"));
    assert_eq!(auth.high[0].test_case_id.to_string(), placeholder_id("Auth"));
    assert!(out.components.get("Form").is_none());
    assert!(out.failed.is_empty());
}

#[test]
fn test_each_row_in_at_most_one_place() {
    let rows = input(&[
        ("A", "High", "login"),
        ("B", "Low", ""),
        ("C", "Medium", "click nothing"),
        ("D", "Low", "submit form"),
    ]);
    let total = rows.len();
    let out = classify(rows, &keywords()).unwrap();

    let mut seen: Vec<String> = refs(&out.failed);
    for (_, buckets) in out.components.iter() {
        seen.extend(buckets.iter().map(|(_, r)| r.reference.to_string()));
    }
    seen.sort();
    let before = seen.len();
    seen.dedup();
    assert_eq!(before, seen.len(), "row counted twice");

    assert_eq!(seen, vec!["A", "B", "D"]);
    assert_eq!(out.dropped, 1);
    assert_eq!(out.components.row_count() + out.failed.len() + out.dropped, total);
}

#[test]
fn test_unmatched_rows_can_be_reported_as_failed() {
    let map = keywords();
    let out = ClassificationContext::new(&map)
        .with_unmatched(UnmatchedPolicy::Fail)
        .classify(input(&[("C", "Medium", "click nothing"), ("B", "Low", "")]))
        .unwrap();
    assert_eq!(refs(&out.failed), vec!["C", "B"]);
    assert_eq!(out.dropped, 0);
}

#[test]
fn test_classification_is_deterministic() {
    let rows = input(&[
        ("A", "High", "login"),
        ("B", "Low", "submit"),
        ("C", "High", "logout now"),
        ("D", "Medium", "x"),
    ]);
    let first = classify(rows.clone(), &keywords()).unwrap();
    let second = classify(rows, &keywords()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        Report::build(&first.components, &first.failed),
        Report::build(&second.components, &second.failed)
    );
}

#[test]
fn test_bucket_order_follows_input() {
    let out = classify(
        input(&[
            ("A1", "High", "login"),
            ("A2", "Low", "logout"),
            ("A3", "High", "press login"),
            ("A4", "High", "logout"),
        ]),
        &keywords(),
    )
    .unwrap();
    let auth = out.components.get("Auth").unwrap();
    assert_eq!(refs(auth.bucket(Priority::High)), vec!["A1", "A3", "A4"]);
    assert_eq!(refs(auth.bucket(Priority::Low)), vec!["A2"]);
    assert!(auth.bucket(Priority::Medium).is_empty());
}

#[test]
fn test_numeric_steps_fail() {
    let table = Table::new(
        HEADER.split(',').map(String::from).collect(),
        vec![vec![
            Cell::text("N1"),
            Cell::text("High"),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Number(3.0),
            Cell::Empty,
        ]],
    );
    let rows = TestCaseRow::rows_from_table(&table).unwrap();
    let out = classify(rows, &keywords()).unwrap();
    assert_eq!(refs(&out.failed), vec!["N1"]);
    assert_eq!(out.failed[0].test_steps, Cell::Number(3.0));
    assert!(out.components.is_empty());
}

#[test]
fn test_report_numbering_high_to_low() {
    let out = classify(
        input(&[("r2", "Low", "login"), ("r1", "High", "login"), ("f1", "Medium", "submit")]),
        &keywords(),
    )
    .unwrap();
    let report = Report::build(&out.components, &out.failed);

    let flat: Vec<String> = report
        .rows
        .iter()
        .map(|r| match r {
            ReportRow::Header(c) => format!("# {}", c),
            ReportRow::Detail(d) => format!("{} {}", d.reference, d.test_case_id),
        })
        .collect();
    assert_eq!(
        flat,
        vec!["# Auth", "r1 TC-Auth-1", "r2 TC-Auth-2", "# Form", "f1 TC-Form-1"]
    );
}
