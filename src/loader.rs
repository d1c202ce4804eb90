//! Populates graphs from the plain-text description format.
//!
//! ```text
//! <vertex count>
//! <edge count>
//! <id> <weight>                          one line per vertex
//! <id> <endpoint> <endpoint> <weight>    one line per edge
//! ```
//!
//! Malformed vertex and edge lines are skipped and reported, the rest of the
//! file still loads. Only an unreadable file or a broken header stops the
//! load, and even then the graph keeps whatever was inserted before.
//! Bytes that are not valid UTF-8 are replaced, never fatal.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::graphs::graph::Graph;

/// A vertex or edge line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

/// Outcome of a load that got past the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub expected_vertices: usize,
    pub expected_edges: usize,
    pub vertices_loaded: usize,
    pub edges_loaded: usize,
    pub malformed: Vec<MalformedLine>,
    /// The input ended before all announced lines were read.
    pub truncated: bool,
}

impl LoadReport {
    /// True when every announced vertex and edge made it into the graph.
    pub fn is_complete(&self) -> bool {
        !self.truncated
            && self.malformed.is_empty()
            && self.vertices_loaded == self.expected_vertices
            && self.edges_loaded == self.expected_edges
    }

    fn skip(&mut self, line: usize, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(line, %reason, "skipping malformed graph line");
        self.malformed.push(MalformedLine { line, reason });
    }
}

/// Loads the description file at `path` into `graph`.
pub fn load_graph<G: Graph>(graph: &mut G, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = read_graph(graph, BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = report.vertices_loaded,
        edges = report.edges_loaded,
        complete = report.is_complete(),
        "graph file loaded"
    );
    Ok(report)
}

/// Reads a graph description from any buffered reader into `graph`.
///
/// Vertices and edges are added through the graph's own insertion rules, so
/// a duplicate vertex id, an unknown endpoint, or a link the undirected
/// variant refuses are all reported as malformed lines.
pub fn read_graph<G: Graph, R: BufRead>(graph: &mut G, reader: R) -> Result<LoadReport, LoadError> {
    let mut lines = TextLines::new(reader);

    let mut report = LoadReport {
        expected_vertices: read_count(lines.next(), 1)?,
        expected_edges: read_count(lines.next(), 2)?,
        ..LoadReport::default()
    };

    for _ in 0..report.expected_vertices {
        let Some(next) = lines.next() else {
            report.truncated = true;
            break;
        };
        let (line, text) = next?;

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let [id, weight] = tokens[..] else {
            report.skip(line, format!("expected `id weight`, found {} fields", tokens.len()));
            continue;
        };
        let Ok(weight) = weight.parse::<f64>() else {
            report.skip(line, format!("invalid vertex weight `{weight}`"));
            continue;
        };

        if graph.add_vertex(id, weight) {
            report.vertices_loaded += 1;
        } else {
            report.skip(line, format!("duplicate vertex `{id}`"));
        }
    }

    if !report.truncated {
        for _ in 0..report.expected_edges {
            let Some(next) = lines.next() else {
                report.truncated = true;
                break;
            };
            let (line, text) = next?;

            let tokens: Vec<&str> = text.split_whitespace().collect();
            let [id, u, v, weight] = tokens[..] else {
                report.skip(
                    line,
                    format!("expected `id endpoint endpoint weight`, found {} fields", tokens.len()),
                );
                continue;
            };
            let Ok(weight) = weight.parse::<f64>() else {
                report.skip(line, format!("invalid edge weight `{weight}`"));
                continue;
            };

            if !graph.has_vertex(u) || !graph.has_vertex(v) {
                let missing = if graph.has_vertex(u) { v } else { u };
                report.skip(line, format!("edge `{id}` refers to unknown vertex `{missing}`"));
            } else if graph.add_edge(id, weight, u, v) {
                report.edges_loaded += 1;
            } else {
                report.skip(line, format!("edge `{id}` rejected between `{u}` and `{v}`"));
            }
        }
    }

    if report.truncated {
        warn!(
            expected_vertices = report.expected_vertices,
            expected_edges = report.expected_edges,
            vertices = report.vertices_loaded,
            edges = report.edges_loaded,
            "graph description ended early"
        );
    }

    Ok(report)
}

/// Numbered lines of a text stream, decoded leniently.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD and the line is logged,
/// so one badly encoded name does not stop a load. `\n` and `\r\n`
/// terminators are stripped. Only a failing reader yields an error.
pub(crate) struct TextLines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> TextLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = Result<(usize, String), LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        self.line += 1;
        let line = self.line;

        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                let text = match String::from_utf8_lossy(&self.buf) {
                    Cow::Borrowed(text) => text.to_owned(),
                    Cow::Owned(text) => {
                        warn!(line, "invalid UTF-8 replaced");
                        text
                    }
                };
                Some(Ok((line, text)))
            }
            Err(source) => Some(Err(LoadError::Read { line, source })),
        }
    }
}

fn read_count(
    next: Option<Result<(usize, String), LoadError>>,
    line: usize,
) -> Result<usize, LoadError> {
    let (line, text) = next.ok_or_else(|| LoadError::MalformedHeader {
        line,
        reason: "missing count".to_owned(),
    })??;

    text.trim()
        .parse()
        .map_err(|_| LoadError::MalformedHeader {
            line,
            reason: format!("`{}` is not a count", text.trim()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Cursor, Write};

    use crate::graphs::digraph::DirectedGraph;
    use crate::graphs::directed::Directed;
    use crate::graphs::edges::Edge;
    use crate::graphs::ungraph::UndirectedGraph;

    const CHAIN: &str = "3\n2\n0 1.5\n1 0\n2 -2\na 0 1 0.25\nb 1 2 3\n";

    #[test]
    fn loads_a_well_formed_description() {
        let mut g = DirectedGraph::new();
        let report = read_graph(&mut g, Cursor::new(CHAIN)).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.vertices_loaded, 3);
        assert_eq!(report.edges_loaded, 2);

        assert_eq!(g.vertex("0").unwrap().weight(), 1.5);
        assert_eq!(g.vertex("2").unwrap().weight(), -2.0);
        assert!(g.has_edge("0", "1"));
        assert!(!g.has_edge("1", "0"));
        assert_eq!(g.edge("a").unwrap().weight(), 0.25);
        assert_eq!(g.out_degree("1").unwrap(), 1);
    }

    #[test]
    fn malformed_lines_are_skipped_and_reported() {
        let text = "3\n3\n0 1\nbroken\n2 x\na 0 9 1\nb 0\nc 0 0 1\n";
        let mut g = DirectedGraph::new();
        let report = read_graph(&mut g, Cursor::new(text)).unwrap();

        assert!(!report.is_complete());
        assert!(!report.truncated);
        let lines: Vec<usize> = report.malformed.iter().map(|m| m.line).collect();
        assert_eq!(lines, vec![4, 5, 6, 7]);

        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("0", "0"));
    }

    #[test]
    fn undirected_duplicates_are_reported() {
        let text = "2\n2\nu 0\nv 0\ne u v 1\nf v u 1\n";
        let mut g = UndirectedGraph::new();
        let report = read_graph(&mut g, Cursor::new(text)).unwrap();

        assert_eq!(report.edges_loaded, 1);
        assert_eq!(report.malformed.len(), 1);
        assert_eq!(report.malformed[0].line, 6);
        assert!(g.has_edge("v", "u"));
    }

    #[test]
    fn duplicate_vertex_lines_are_reported() {
        let text = "2\n0\nu 0\nu 1\n";
        let mut g = UndirectedGraph::new();
        let report = read_graph(&mut g, Cursor::new(text)).unwrap();
        assert_eq!(report.vertices_loaded, 1);
        assert_eq!(g.vertex("u").unwrap().weight(), 0.0);
        assert!(!report.is_complete());
    }

    #[test]
    fn invalid_utf8_does_not_stop_the_load() {
        let bytes: &[u8] = b"2\n1\nRen\xe9e 0\nb 1\r\ne Ren\xe9e b 2\n";
        let mut g = UndirectedGraph::new();
        let report = read_graph(&mut g, Cursor::new(bytes)).unwrap();

        assert!(report.is_complete());
        assert!(g.has_vertex("Ren\u{FFFD}e"));
        assert_eq!(g.vertex("b").unwrap().weight(), 1.0);
        assert!(g.has_edge("b", "Ren\u{FFFD}e"));
    }

    #[test]
    fn text_lines_strip_terminators_and_number_from_one() {
        let lines: Vec<(usize, String)> = TextLines::new(Cursor::new("a\r\n\nb"))
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            lines,
            vec![(1, "a".to_owned()), (2, String::new()), (3, "b".to_owned())]
        );
    }

    #[test]
    fn short_input_is_marked_truncated() {
        let text = "3\n1\n0 0\n1 0\n";
        let mut g = DirectedGraph::new();
        let report = read_graph(&mut g, Cursor::new(text)).unwrap();

        assert!(report.truncated);
        assert!(!report.is_complete());
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn broken_header_stops_the_load() {
        let mut g = DirectedGraph::new();
        let err = read_graph(&mut g, Cursor::new("three\n0\n")).unwrap_err();
        assert!(matches!(err, LoadError::MalformedHeader { line: 1, .. }));

        let err = read_graph(&mut g, Cursor::new("1\n")).unwrap_err();
        assert!(matches!(err, LoadError::MalformedHeader { line: 2, .. }));
        assert!(g.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = UndirectedGraph::new();
        let err = load_graph(&mut g, dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(g.is_empty());
    }

    #[test]
    fn spaced_ids_do_not_survive_the_text_form() {
        let mut original = UndirectedGraph::new();
        original.add_vertex("Kevin Bacon (I)", 0.0);
        original.add_vertex("X", 0.0);
        original.add_edge("M1-X", 0.0, "Kevin Bacon (I)", "X");
        assert!(!original.has_plain_ids());

        let mut reloaded = UndirectedGraph::new();
        let report = read_graph(&mut reloaded, Cursor::new(original.to_string())).unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.vertices_loaded, 1);
        assert_eq!(report.edges_loaded, 0);
        assert_eq!(report.malformed.len(), 2);
    }

    #[test]
    fn canonical_text_round_trips_through_a_file() {
        let mut original = UndirectedGraph::new();
        original.add_vertex("a", 0.1);
        original.add_vertex("b", 1.0 / 3.0);
        original.add_vertex("c", 7.0);
        original.add_edge("ab", 2.5, "a", "b");
        original.add_edge("bc", -0.75, "b", "c");

        assert!(original.has_plain_ids());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{original}").unwrap();

        let mut reloaded = UndirectedGraph::new();
        let report = load_graph(&mut reloaded, file.path()).unwrap();
        assert!(report.is_complete());

        assert_eq!(reloaded.vertex_count(), original.vertex_count());
        assert_eq!(reloaded.edge_count(), original.edge_count());
        for (left, right) in original.vertices().iter().zip(reloaded.vertices()) {
            assert_eq!(left.id(), right.id());
            assert!((left.weight() - right.weight()).abs() < 1e-9);
        }
        for (left, right) in original.edges().iter().zip(reloaded.edges()) {
            assert_eq!(left.id(), right.id());
            assert_eq!(original.endpoint_ids(left), reloaded.endpoint_ids(right));
            assert!((left.weight() - right.weight()).abs() < 1e-9);
        }
    }
}
