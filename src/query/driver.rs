//! Batch query driver
//!
//! Normalizes each query string, dispatches it to a [`PrefixTree`] and writes
//! one answer per search or prefix query, in input order.

use super::{Operation, Query, QueryReader};
use crate::model::Word;
use crate::trie::{PrefixTree, TrieStats};
use crate::{Error, Result};
use serde::Serialize;
use std::io::{BufRead, Write};

/// How answers are written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Literal `true` / `false`, one per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Driver options
#[derive(Clone, Debug)]
pub struct DriverConfig {
    pub format: OutputFormat,
    /// Lower-case ASCII letters before handing strings to the tree
    pub fold_case: bool,
    /// Skip queries with out-of-alphabet symbols instead of aborting
    pub skip_invalid: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            format: OutputFormat::Text,
            fold_case: true,
            skip_invalid: false,
        }
    }
}

/// Counters for one driver run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub inserted: usize,
    pub searches: usize,
    pub prefix_queries: usize,
    /// Queries skipped for invalid symbols
    pub rejected: usize,
    pub stats: TrieStats,
}

/// Runs query batches against an owned prefix tree
pub struct QueryDriver {
    tree: PrefixTree,
    config: DriverConfig,
}

impl QueryDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self::with_tree(PrefixTree::new(), config)
    }

    /// Drive an existing tree, e.g. one pre-loaded with a word list
    pub fn with_tree(tree: PrefixTree, config: DriverConfig) -> Self {
        QueryDriver { tree, config }
    }

    pub fn tree(&self) -> &PrefixTree {
        &self.tree
    }

    pub fn into_tree(self) -> PrefixTree {
        self.tree
    }

    /// Apply the driver-side normalization to a query string
    pub fn normalize(&self, text: &str) -> String {
        if self.config.fold_case {
            text.to_ascii_lowercase()
        } else {
            text.to_string()
        }
    }

    /// Execute one query, returning the answer for search and prefix queries
    pub fn execute(&mut self, query: &Query) -> Result<Option<bool>> {
        let word = Word::parse(&self.normalize(&query.text))?;
        let answer = match query.op {
            Operation::Insert => {
                self.tree.insert_word(&word);
                None
            }
            Operation::Search => Some(self.tree.search_word(&word)),
            Operation::StartsWith => Some(self.tree.starts_with_word(&word)),
        };
        Ok(answer)
    }

    /// Read a whole batch from `input` and write answers to `output`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for query in QueryReader::new(input) {
            let query = query?;
            let answer = match self.execute(&query) {
                Ok(answer) => answer,
                Err(Error::InvalidAlphabetSymbol { symbol, position })
                    if self.config.skip_invalid =>
                {
                    tracing::warn!(
                        op = %query.op,
                        text = %query.text,
                        symbol = ?symbol,
                        position,
                        "skipping query with invalid symbol"
                    );
                    summary.rejected += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match query.op {
                Operation::Insert => summary.inserted += 1,
                Operation::Search => summary.searches += 1,
                Operation::StartsWith => summary.prefix_queries += 1,
            }

            if let Some(result) = answer {
                self.write_answer(&mut output, &query, result)?;
            }
        }

        output.flush()?;
        summary.stats = self.tree.stats();
        tracing::debug!(?summary, "query batch finished");
        Ok(summary)
    }

    fn write_answer<W: Write>(&self, output: &mut W, query: &Query, result: bool) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => writeln!(output, "{}", result)?,
            OutputFormat::Json => {
                let line = serde_json::json!({
                    "op": query.op,
                    "text": self.normalize(&query.text),
                    "result": result
                });
                serde_json::to_writer(&mut *output, &line)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

impl Default for QueryDriver {
    fn default() -> Self {
        QueryDriver::new(DriverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(config: DriverConfig, input: &str) -> Result<(String, RunSummary)> {
        let mut driver = QueryDriver::new(config);
        let mut out = Vec::new();
        let summary = driver.run(input.as_bytes(), &mut out)?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    #[test]
    fn test_run_text_output() {
        let input = "7\n1 apple\n1 app\n2 app\n2 appl\n3 appl\n2 apple\n3 b\n";
        let (out, summary) = run_with(DriverConfig::default(), input).unwrap();

        assert_eq!(out, "true\nfalse\ntrue\ntrue\nfalse\n");
        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.searches, 3);
        assert_eq!(summary.prefix_queries, 2);
        assert_eq!(summary.stats.words, 2);
        assert_eq!(summary.stats.nodes, 6);
    }

    #[test]
    fn test_run_folds_case() {
        let (out, _) = run_with(DriverConfig::default(), "2\n1 Hello\n2 hELLO\n").unwrap();
        assert_eq!(out, "true\n");
    }

    #[test]
    fn test_run_without_folding_rejects_uppercase() {
        let config = DriverConfig {
            fold_case: false,
            ..DriverConfig::default()
        };
        let err = run_with(config, "1\n1 Hello\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAlphabetSymbol { symbol: 'H', position: 0 }
        ));
    }

    #[test]
    fn test_run_fails_fast_on_invalid_symbol() {
        let mut driver = QueryDriver::default();
        let mut out = Vec::new();
        let err = driver
            .run("3\n1 ok\n1 no1\n1 later\n".as_bytes(), &mut out)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidAlphabetSymbol { symbol: '1', .. }));
        assert!(driver.tree().search("ok").unwrap());
        assert!(!driver.tree().starts_with("n").unwrap());
        assert!(!driver.tree().search("later").unwrap());
    }

    #[test]
    fn test_run_skip_invalid() {
        let config = DriverConfig {
            skip_invalid: true,
            ..DriverConfig::default()
        };
        let input = "5\n1 good\n1 bad-word\n2 bad-word\n2 good\n3 ba\n";
        let (out, summary) = run_with(config, input).unwrap();

        assert_eq!(out, "true\nfalse\n");
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.searches, 1);
        assert_eq!(summary.prefix_queries, 1);
    }

    #[test]
    fn test_run_skip_invalid_non_utf8() {
        let config = DriverConfig {
            skip_invalid: true,
            ..DriverConfig::default()
        };
        let mut driver = QueryDriver::new(config);
        let mut out = Vec::new();
        let summary = driver
            .run(&b"3\n1 good\n1 b\xffd\n2 good\n"[..], &mut out)
            .unwrap();

        assert_eq!(out, b"true\n");
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.searches, 1);
    }

    #[test]
    fn test_run_non_utf8_is_invalid_symbol() {
        let mut driver = QueryDriver::default();
        let mut out = Vec::new();
        let err = driver
            .run(&b"2\n1 ok\n1 b\xffd\n"[..], &mut out)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidAlphabetSymbol { symbol: '\u{FFFD}', position: 1 }
        ));
        assert!(driver.tree().search("ok").unwrap());
        assert_eq!(driver.tree().len(), 1);
    }

    #[test]
    fn test_run_json_output() {
        let config = DriverConfig {
            format: OutputFormat::Json,
            ..DriverConfig::default()
        };
        let (out, _) = run_with(config, "3\n1 Cat\n2 CAT\n3 ca\n").unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            serde_json::json!({"op": "search", "text": "cat", "result": true})
        );
        assert_eq!(lines[1]["op"], "starts_with");
        assert_eq!(lines[1]["result"], true);
    }

    #[test]
    fn test_run_empty_input() {
        let (out, summary) = run_with(DriverConfig::default(), "").unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.stats.words, 0);
    }

    #[test]
    fn test_execute_on_preloaded_tree() {
        let tree = PrefixTree::from_words(["seed"]).unwrap();
        let mut driver = QueryDriver::with_tree(tree, DriverConfig::default());

        let answer = driver
            .execute(&Query::new(Operation::Search, "SEED"))
            .unwrap();
        assert_eq!(answer, Some(true));
        assert_eq!(
            driver
                .execute(&Query::new(Operation::Insert, "sea"))
                .unwrap(),
            None
        );
        assert_eq!(driver.into_tree().len(), 2);
    }
}
