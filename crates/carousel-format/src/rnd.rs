//! `.rnd` graph file parser.
//!
//! Layout: the first line is a header/comment and is skipped; the second
//! line holds three integers `n m a` (vertex count, edge count, auxiliary
//! value — unused); exactly `m` lines `u v` follow, with 1-indexed edge
//! endpoints. Endpoint range, self-loops and count mismatches are rejected
//! here, before the graph reaches the solver core.

use carousel_base::{Error, Graph, Result};
use std::io::{BufRead, BufReader, Read};

/// Parses a graph from `.rnd` text read from `reader`.
pub fn read_graph<R: Read>(reader: R) -> Result<Graph> {
    let mut lines = BufReader::new(reader).lines();

    // Header line, content ignored.
    if lines.next().transpose()?.is_none() {
        return Err(Error::GraphFormat("empty file".to_string()));
    }

    let counts = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::GraphFormat("missing 'n m a' counts line".to_string()))?;
    let mut fields = counts.split_whitespace();
    let n = parse_count(fields.next(), "vertex count")?;
    let m = parse_count(fields.next(), "edge count")?;
    let _aux = parse_count(fields.next(), "auxiliary value")?;

    let mut edges = Vec::with_capacity(m);
    for line in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let u = parse_count(fields.next(), "edge endpoint")?;
        let v = parse_count(fields.next(), "edge endpoint")?;
        if fields.next().is_some() {
            return Err(Error::GraphFormat(format!(
                "edge line has trailing tokens: {line:?}"
            )));
        }
        edges.push((u, v));
    }

    if edges.len() != m {
        return Err(Error::GraphFormat(format!(
            "declared {m} edges but found {}",
            edges.len()
        )));
    }

    Graph::new(n, edges)
}

/// Parses a graph from an in-memory `.rnd` string.
pub fn parse_graph(text: &str) -> Result<Graph> {
    read_graph(text.as_bytes())
}

fn parse_count(field: Option<&str>, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| Error::GraphFormat(format!("missing {what}")))?;
    field
        .parse()
        .map_err(|e| Error::GraphFormat(format!("invalid {what} {field:?}: {e}")))
}
