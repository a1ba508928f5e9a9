//! CLI command implementations.
//!
//! Each command loads the edge list, builds the requested graph variant and
//! writes its answer to `out`, as plain text or JSON. Lists are sorted so
//! output is stable across runs.

use std::io::Write;
use std::path::Path;

use crate::graph::{DirectedGraph, Graph, UndirectedGraph};

use super::{CliError, CliResult, EdgeList};

/// A graph loaded from an edge-list file.
pub enum LoadedGraph {
    /// Built with `--directed` unset.
    Undirected(UndirectedGraph<String>),
    /// Built with `--directed`.
    Directed(DirectedGraph<String>),
}

impl LoadedGraph {
    /// Read `path` and build the requested variant.
    pub fn load(path: &Path, directed: bool) -> CliResult<Self> {
        let list = EdgeList::read_from_file(path)?;
        if directed {
            Ok(Self::Directed(list.into_directed()))
        } else {
            Ok(Self::Undirected(list.into_undirected()?))
        }
    }
}

fn sorted_nodes<G: Graph<Node = String>>(graph: &G) -> Vec<&String> {
    let mut nodes: Vec<&String> = graph.nodes().iter().collect();
    nodes.sort();
    nodes
}

fn sorted_edges<'a, G: Graph<Node = String>>(graph: &'a G) -> Vec<(&'a String, &'a String)> {
    let mut edges: Vec<(&String, &String)> = graph
        .edges()
        .into_iter()
        .map(|(u, v)| {
            // Canonical orientation for undirected edges.
            if !graph.is_directed() && v < u {
                (v, u)
            } else {
                (u, v)
            }
        })
        .collect();
    edges.sort();
    edges
}

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> CliResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn info<G: Graph<Node = String>>(graph: &G, out: &mut impl Write, json: bool) -> CliResult<()> {
    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    if json {
        write_json(
            out,
            &serde_json::json!({
                "kind": kind,
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
            }),
        )
    } else {
        writeln!(out, "Kind: {}", kind)?;
        writeln!(out, "Nodes: {}", graph.node_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        Ok(())
    }
}

fn list_nodes<G: Graph<Node = String>>(
    graph: &G,
    out: &mut impl Write,
    json: bool,
) -> CliResult<()> {
    let nodes = sorted_nodes(graph);
    if json {
        write_json(out, &serde_json::json!(nodes))
    } else {
        for node in nodes {
            writeln!(out, "{}", node)?;
        }
        Ok(())
    }
}

fn list_edges<G: Graph<Node = String>>(
    graph: &G,
    out: &mut impl Write,
    json: bool,
) -> CliResult<()> {
    let edges = sorted_edges(graph);
    if json {
        let pairs: Vec<[&String; 2]> = edges.iter().map(|&(u, v)| [u, v]).collect();
        write_json(out, &serde_json::json!(pairs))
    } else {
        for (u, v) in edges {
            writeln!(out, "{} {}", u, v)?;
        }
        Ok(())
    }
}

fn write_label_set<'a, I>(out: &mut impl Write, labels: I, json: bool) -> CliResult<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut labels: Vec<&String> = labels.into_iter().collect();
    labels.sort();
    if json {
        write_json(out, &serde_json::json!(labels))
    } else {
        for label in labels {
            writeln!(out, "{}", label)?;
        }
        Ok(())
    }
}

/// Print the graph kind, node count and edge count.
pub fn cmd_info(path: &Path, directed: bool, out: &mut impl Write, json: bool) -> CliResult<()> {
    match LoadedGraph::load(path, directed)? {
        LoadedGraph::Undirected(graph) => info(&graph, out, json),
        LoadedGraph::Directed(graph) => info(&graph, out, json),
    }
}

/// Print every node, sorted.
pub fn cmd_nodes(path: &Path, directed: bool, out: &mut impl Write, json: bool) -> CliResult<()> {
    match LoadedGraph::load(path, directed)? {
        LoadedGraph::Undirected(graph) => list_nodes(&graph, out, json),
        LoadedGraph::Directed(graph) => list_nodes(&graph, out, json),
    }
}

/// Print every edge, sorted.
pub fn cmd_edges(path: &Path, directed: bool, out: &mut impl Write, json: bool) -> CliResult<()> {
    match LoadedGraph::load(path, directed)? {
        LoadedGraph::Undirected(graph) => list_edges(&graph, out, json),
        LoadedGraph::Directed(graph) => list_edges(&graph, out, json),
    }
}

/// Print the neighbors (successors, when directed) of a node.
pub fn cmd_neighbors(
    path: &Path,
    directed: bool,
    node: &str,
    out: &mut impl Write,
    json: bool,
) -> CliResult<()> {
    let node = node.to_string();
    match LoadedGraph::load(path, directed)? {
        LoadedGraph::Undirected(graph) => write_label_set(out, graph.neighbors(&node)?, json),
        LoadedGraph::Directed(graph) => write_label_set(out, graph.successors(&node)?, json),
    }
}

/// Print the predecessors of a node. Directed graphs only.
pub fn cmd_predecessors(
    path: &Path,
    directed: bool,
    node: &str,
    out: &mut impl Write,
    json: bool,
) -> CliResult<()> {
    let node = node.to_string();
    match LoadedGraph::load(path, directed)? {
        LoadedGraph::Undirected(_) => Err(CliError::DirectedOnly("predecessors")),
        LoadedGraph::Directed(graph) => write_label_set(out, graph.predecessors(&node)?, json),
    }
}

/// Report whether the edge `(u, v)` exists.
pub fn cmd_has_edge(
    path: &Path,
    directed: bool,
    u: &str,
    v: &str,
    out: &mut impl Write,
    json: bool,
) -> CliResult<()> {
    let present = match LoadedGraph::load(path, directed)? {
        LoadedGraph::Undirected(graph) => graph.edges().contains(u, v),
        LoadedGraph::Directed(graph) => graph.edges().contains(u, v),
    };
    if json {
        write_json(
            out,
            &serde_json::json!({"u": u, "v": v, "present": present}),
        )
    } else {
        writeln!(out, "{}", present)?;
        Ok(())
    }
}
