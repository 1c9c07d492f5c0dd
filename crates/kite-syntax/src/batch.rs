//! Parallel batch processing of independent sources.

use rayon::ThreadPoolBuildError;
use rayon::prelude::*;

use crate::{Frontend, LexError, Result, Statement, Token};

/// Runs the front end over many sources on a rayon thread pool.
///
/// Sources are processed independently; a failure in one does not affect
/// the others. Results come back in input order.
pub struct ParallelFrontend {
    frontend: Frontend,
    /// Thread pool for CPU-bound work
    pool: rayon::ThreadPool,
}

impl ParallelFrontend {
    /// Creates a parallel front end with the default tables and the default
    /// number of threads.
    pub fn new() -> std::result::Result<Self, ThreadPoolBuildError> {
        Self::build(Frontend::new(), rayon::ThreadPoolBuilder::new())
    }

    /// Creates a parallel front end with a specific number of threads.
    pub fn with_threads(num_threads: usize) -> std::result::Result<Self, ThreadPoolBuildError> {
        Self::with_frontend(Frontend::new(), num_threads)
    }

    /// Creates a parallel front end around an existing [`Frontend`].
    pub fn with_frontend(
        frontend: Frontend,
        num_threads: usize,
    ) -> std::result::Result<Self, ThreadPoolBuildError> {
        Self::build(
            frontend,
            rayon::ThreadPoolBuilder::new().num_threads(num_threads),
        )
    }

    fn build(
        frontend: Frontend,
        builder: rayon::ThreadPoolBuilder,
    ) -> std::result::Result<Self, ThreadPoolBuildError> {
        let pool = builder.thread_name(|i| format!("kite-syntax-{i}")).build()?;
        tracing::debug!(threads = pool.current_num_threads(), "built parser pool");
        Ok(Self { frontend, pool })
    }

    /// Returns the wrapped front end.
    pub fn frontend(&self) -> &Frontend {
        &self.frontend
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Parses multiple sources in parallel.
    ///
    /// Returns one result per source, in the same order as `sources`.
    pub fn parse_sources(&self, sources: &[&str]) -> Vec<Result<Vec<Statement>>> {
        self.pool.install(|| {
            sources
                .par_iter()
                .map(|source| self.frontend.parse_source(source))
                .collect()
        })
    }

    /// Tokenizes and normalizes multiple sources in parallel.
    pub fn lex_sources(&self, sources: &[&str]) -> Vec<std::result::Result<Vec<Token>, LexError>> {
        self.pool.install(|| {
            sources
                .par_iter()
                .map(|source| self.frontend.lex(source))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_results_keep_input_order() {
        let batch = ParallelFrontend::with_threads(4).unwrap();
        let sources: Vec<String> = (0..64).map(|i| format!("x{i}: {i}")).collect();
        let refs: Vec<&str> = sources.iter().map(String::as_str).collect();

        let results = batch.parse_sources(&refs);
        assert_eq!(results.len(), 64);
        for (i, result) in results.into_iter().enumerate() {
            let statements = result.unwrap();
            let Statement::Assignment(assignment) = &statements[0] else {
                panic!("Expected assignment");
            };
            assert_eq!(assignment.target.name, format!("x{i}"));
        }
    }

    #[test]
    fn test_failures_are_independent() {
        let batch = ParallelFrontend::with_threads(2).unwrap();
        let results = batch.parse_sources(&["a: 1", "\"open", "foo(1, 2", "b"]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::Lex(_))));
        assert!(matches!(results[2], Err(Error::Parse(_))));
        assert!(results[3].is_ok());
    }

    #[test]
    fn test_deep_nesting_is_an_isolated_failure() {
        let batch = ParallelFrontend::with_threads(2).unwrap();
        let deep = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
        let results = batch.parse_sources(&["a: 1", &deep, "b: 2"]);
        assert!(results[0].is_ok());
        let Err(Error::Parse(err)) = &results[1] else {
            panic!("Expected parse error");
        };
        assert_eq!(err.kind, crate::ParseErrorKind::NestingTooDeep);
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_matches_sequential_frontend() {
        let batch = ParallelFrontend::new().unwrap();
        let sources = ["{ foo(); bar(); }", "f: (a: int) -> a * 2", "[1, 2]"];
        let parallel = batch.parse_sources(&sources);
        for (source, result) in sources.iter().zip(parallel) {
            assert_eq!(result, batch.frontend().parse_source(source));
        }
    }

    #[test]
    fn test_lex_sources() {
        let batch = ParallelFrontend::with_threads(1).unwrap();
        assert_eq!(batch.num_threads(), 1);
        let results = batch.lex_sources(&["a b", "'c'"]);
        assert_eq!(results[0].as_ref().unwrap().len(), 3);
        assert_eq!(results[1].as_ref().unwrap()[0].lexeme, "c");
    }
}
