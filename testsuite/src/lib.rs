//! Conformance checks that pit two [`RdfFactory`] implementations against each other.

pub mod evaluator;
pub mod scenarios;

use crate::evaluator::TestEvaluator;
use anyhow::Result;
use rdf_interop_model::RdfFactory;

#[allow(clippy::panic_in_result_fn)]
pub fn check_testsuite<A: RdfFactory, B: RdfFactory>(
    a: &A,
    b: &B,
    ignored_tests: &[&str],
) -> Result<()> {
    let results = TestEvaluator::new().evaluate(a, b);
    let test_count = results.len();

    let mut errors = Vec::default();
    for result in results {
        if let Err(error) = &result.outcome {
            if !ignored_tests.contains(&result.test.as_str()) {
                errors.push(format!("{}: failed with error {error:?}", result.test))
            }
        }
    }

    assert!(
        errors.is_empty(),
        "{} tests failing from {} tests:\n{}\n",
        errors.len(),
        test_count,
        errors.join("\n")
    );
    Ok(())
}
