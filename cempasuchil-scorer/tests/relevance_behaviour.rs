#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for relevance filtering.

use std::cell::RefCell;

use cempasuchil_core::{Dataset, FacilityFilter, FacilityRecord, SelectionMode};
use cempasuchil_scorer::RelevanceFilter;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const XRAY_FACILITY: usize = 6;

/// Outcome of a filter run, detached from the borrowed dataset.
#[derive(Debug, Clone)]
pub struct Outcome {
    mode: SelectionMode,
    ranked: Vec<(usize, Option<u32>)>,
}

/// Shared state for the relevance scenarios.
pub struct TestContext {
    filter: RelevanceFilter,
    dataset: RefCell<Dataset>,
    outcome: RefCell<Option<Outcome>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        filter: RelevanceFilter::default(),
        dataset: RefCell::new(Dataset::default()),
        outcome: RefCell::new(None),
    }
}

#[given("a dataset with one X-Ray facility among nine others")]
fn xray_among_others(context: &TestContext) {
    let dataset: Dataset = (0..10)
        .map(|n| {
            let equipment = if n == XRAY_FACILITY {
                "Portable X-Ray Unit"
            } else {
                "Beds and Stretchers"
            };
            FacilityRecord::new(format!("Facility {n}"))
                .with_city("Koforidua")
                .with_capacity("10")
                .with_specialties("General Medicine")
                .with_equipment(equipment)
        })
        .collect();
    *context.dataset.borrow_mut() = dataset;
}

#[given("a dataset of twenty facilities with distinct capacities")]
fn twenty_capacities(context: &TestContext) {
    let dataset: Dataset = (0..20)
        .map(|n| {
            // Interleave small and large capacities so input order differs from rank.
            let capacity = if n % 2 == 0 { n } else { 100 + n };
            FacilityRecord::new(format!("Site {n}")).with_capacity(capacity.to_string())
        })
        .collect();
    *context.dataset.borrow_mut() = dataset;
}

#[when("I ask where to find X-Ray facilities")]
fn ask_for_xray(context: &TestContext) {
    run_query(context, "Where can I find X-Ray facilities?");
}

#[when("I ask where the hospital is")]
fn ask_stopwords(context: &TestContext) {
    run_query(context, "Where is the hospital?");
}

#[when("I ask where to find dialysis")]
fn ask_for_dialysis(context: &TestContext) {
    run_query(context, "Where can I find dialysis?");
}

#[then("the X-Ray facility is ranked first")]
fn xray_first(context: &TestContext) {
    let outcome = recorded(context);
    assert_eq!(outcome.mode, SelectionMode::Ranked);
    let (index, relevance) = outcome.ranked.first().copied().expect("a ranked row");
    assert_eq!(index, XRAY_FACILITY);
    assert!(relevance.is_some_and(|value| value > 0));
}

#[then("the fifteen largest facilities are returned by capacity")]
fn fifteen_largest(context: &TestContext) {
    let outcome = recorded(context);
    assert_eq!(outcome.mode, SelectionMode::DefaultView);
    let indices: Vec<usize> = outcome.ranked.iter().map(|(index, _)| *index).collect();
    let expected: Vec<usize> = vec![19, 17, 15, 13, 11, 9, 7, 5, 3, 1, 18, 16, 14, 12, 10];
    assert_eq!(indices, expected);
}

#[then("no facilities are returned")]
fn nothing_returned(context: &TestContext) {
    let outcome = recorded(context);
    assert_eq!(outcome.mode, SelectionMode::NoMatches);
    assert!(outcome.ranked.is_empty());
}

fn run_query(context: &TestContext, query: &str) {
    let dataset = context.dataset.borrow();
    let selection = context.filter.select(&dataset, query);
    let outcome = Outcome {
        mode: selection.mode(),
        ranked: selection
            .hits()
            .iter()
            .map(|hit| (hit.index, hit.relevance))
            .collect(),
    };
    *context.outcome.borrow_mut() = Some(outcome);
}

fn recorded(context: &TestContext) -> Outcome {
    context
        .outcome
        .borrow()
        .clone()
        .expect("outcome should be recorded")
}

#[scenario(path = "tests/features/relevance.feature", index = 0)]
fn xray_question(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/relevance.feature", index = 1)]
fn stopword_question(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/relevance.feature", index = 2)]
fn unmatched_question(context: TestContext) {
    let _ = context;
}
