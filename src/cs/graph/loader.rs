//! Adjacency-list input.
//!
//! Each line starts with a vertex label followed by the labels of its neighbors, all
//! separated by whitespace:
//!
//! ```text
//! 1 2 4
//! 2 1 3
//! 3 2 4
//! 4 1 3
//! ```
//!
//! An edge is kept only from the line of its lower endpoint, so listing a neighbor on
//! both lines does not duplicate it. Neighbors that never get a line of their own are
//! still added as vertices.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cs::graph::undirected::{Graph, GraphBuilder};
use crate::error::{Error, Result};

/// What to do with tokens that are not vertex labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Skip them. A line whose first token is malformed is skipped entirely.
    #[default]
    Lenient,
    /// Fail with [`Error::MalformedToken`] on the first one.
    Strict,
}

/// Reads adjacency lists into a [`Graph`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphLoader {
    policy: ParsePolicy,
}

impl GraphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Graph> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = self.read(BufReader::new(file), path)?;
        log::info!(
            "loaded {}: {} vertices, {} edges",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Graph> {
        self.read(reader, Path::new("<reader>"))
    }

    pub fn parse_str(&self, input: &str) -> Result<Graph> {
        self.load_reader(input.as_bytes())
    }

    fn read<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Graph> {
        let mut builder = GraphBuilder::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            self.parse_line(&mut builder, number + 1, &line)?;
        }
        Ok(builder.build())
    }

    fn parse_line(&self, builder: &mut GraphBuilder, line: usize, text: &str) -> Result<()> {
        let mut tokens = text.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(());
        };
        let Some(vertex) = self.label(line, first)? else {
            log::debug!("line {line}: no vertex label, skipping line");
            return Ok(());
        };
        builder.add_vertex(vertex);

        for token in tokens {
            let Some(neighbor) = self.label(line, token)? else {
                continue;
            };
            if neighbor > vertex {
                builder.add_edge(vertex, neighbor)?;
            } else if neighbor == vertex {
                log::debug!("line {line}: ignoring self-loop on {vertex}");
            }
        }
        Ok(())
    }

    fn label(&self, line: usize, token: &str) -> Result<Option<u32>> {
        match token.parse::<u32>() {
            Ok(label) => Ok(Some(label)),
            Err(_) => match self.policy {
                ParsePolicy::Lenient => {
                    log::debug!("line {line}: skipping malformed token {token:?}");
                    Ok(None)
                }
                ParsePolicy::Strict => Err(Error::MalformedToken {
                    line,
                    token: token.to_string(),
                }),
            },
        }
    }
}

/// Loads the adjacency list at `path`, skipping malformed tokens.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    GraphLoader::new().load_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "1 2 4\n2 1 3\n3 2 4\n4 1 3\n";

    fn labels(graph: &Graph) -> Vec<(u32, u32)> {
        graph
            .edges()
            .iter()
            .map(|e| (graph.label_of(e.source()), graph.label_of(e.dest())))
            .collect()
    }

    #[test]
    fn test_parse_square() {
        let graph = GraphLoader::new().parse_str(SQUARE).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(labels(&graph), vec![(1, 2), (1, 4), (2, 3), (3, 4)]);
        assert!(graph.is_connected());
        assert!(graph.registry().is_reset());
    }

    #[test]
    fn test_lower_neighbors_ignored() {
        // 3 lists 1 but 1 does not list 3, so the edge is never recorded.
        let graph = GraphLoader::new().parse_str("1 2\n2\n3 1\n").unwrap();
        assert_eq!(labels(&graph), vec![(1, 2)]);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.components(), 2);
    }

    #[test]
    fn test_unlisted_neighbor_becomes_vertex() {
        let graph = GraphLoader::new().parse_str("1 5\n").unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.index_of(5).is_some());
        assert_eq!(labels(&graph), vec![(1, 5)]);
    }

    #[test]
    fn test_lenient_skips_garbage() {
        let input = "1 two 2 -3 3\n\n   \nfoo 1 2\n2 1 x\n2 3\n";
        let graph = GraphLoader::new().parse_str(input).unwrap();
        assert_eq!(labels(&graph), vec![(1, 2), (1, 3), (2, 3)]);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_self_reference_skipped() {
        let graph = GraphLoader::new().parse_str("1 1 2\n").unwrap();
        assert_eq!(labels(&graph), vec![(1, 2)]);
    }

    #[test]
    fn test_strict_reports_line_and_token() {
        let loader = GraphLoader::new().policy(ParsePolicy::Strict);
        let err = loader.parse_str("1 2\n2 1 x3\n").unwrap_err();
        match err {
            Error::MalformedToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(loader.parse_str(SQUARE).is_ok());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_graph("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_empty_input() {
        let graph = GraphLoader::new().parse_str("").unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
