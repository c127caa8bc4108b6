use crate::scenarios::scenarios;
use anyhow::Result;
use rdf_interop_model::RdfFactory;

/// The outcome of one scenario.
#[derive(Debug)]
pub struct TestResult {
    pub test: String,
    pub outcome: Result<()>,
}

/// Runs every scenario against a pair of factories.
#[derive(Debug, Default)]
pub struct TestEvaluator;

impl TestEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate<A: RdfFactory, B: RdfFactory>(&self, a: &A, b: &B) -> Vec<TestResult> {
        scenarios::<A, B>()
            .into_iter()
            .map(|(test, scenario)| TestResult {
                test: test.to_owned(),
                outcome: scenario(a, b),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_interop_model::SimpleRdf;

    #[test]
    fn reports_every_scenario() {
        let results = TestEvaluator::new().evaluate(&SimpleRdf::new(), &SimpleRdf::new());
        assert_eq!(results.len(), scenarios::<SimpleRdf, SimpleRdf>().len());
        for result in results {
            assert!(result.outcome.is_ok(), "{}: {:?}", result.test, result.outcome);
        }
    }
}
