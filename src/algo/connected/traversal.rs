use crate::{
    core::{Neighbors, VertexSet},
    visit::{Bfs, Color, Dfs},
};

use super::{Algo, Connected};

pub fn traverse<G>(
    graph: &G,
    start: Option<&G::VertexId>,
    between: Option<(&G::VertexId, &G::VertexId)>,
    algo: Algo,
) -> Connected<G>
where
    G: Neighbors + VertexSet,
{
    if let Some((from, to)) = between {
        return path(graph, from, to, algo);
    }

    if graph.vertex_count() <= 1 {
        return Connected {
            disconnected_any: None,
            visited: graph.vertex_count(),
        };
    }

    let start = match start {
        Some(start) => start.clone(),
        None => match graph.vertices_by_id().next() {
            Some(start) => start,
            None => {
                return Connected {
                    disconnected_any: None,
                    visited: 0,
                }
            }
        },
    };

    let (visited, unvisited) = match algo {
        Algo::Dfs => {
            let mut dfs = Dfs::new(graph).start(start.clone());
            let visited = dfs.by_ref().count();
            let unvisited = first_white(graph, |v| dfs.color(v));
            (visited, unvisited)
        }
        Algo::Bfs => {
            let mut bfs = Bfs::new(graph).start(start.clone());
            let visited = bfs.by_ref().count();
            let unvisited = first_white(graph, |v| bfs.color(v));
            (visited, unvisited)
        }
    };

    tracing::debug!(?algo, visited, total = graph.vertex_count(), "connectivity");

    Connected {
        disconnected_any: unvisited.map(|v| (start, v)),
        visited,
    }
}

fn path<G>(graph: &G, from: &G::VertexId, to: &G::VertexId, algo: Algo) -> Connected<G>
where
    G: Neighbors + VertexSet,
{
    if from == to && graph.contains_vertex(from) {
        // A vertex is trivially connected with itself.
        return Connected {
            disconnected_any: None,
            visited: 1,
        };
    }

    let mut visited = 0;
    let found = match algo {
        Algo::Dfs => Dfs::new(graph)
            .start(from.clone())
            .inspect(|_| visited += 1)
            .any(|v| &v == to),
        Algo::Bfs => Bfs::new(graph)
            .start(from.clone())
            .inspect(|_| visited += 1)
            .any(|v| &v == to),
    };

    Connected {
        disconnected_any: (!found).then(|| (from.clone(), to.clone())),
        visited,
    }
}

fn first_white<G, F>(graph: &G, color: F) -> Option<G::VertexId>
where
    G: VertexSet,
    F: Fn(&G::VertexId) -> Color,
{
    graph
        .vertices_by_id()
        .find(|v| color(v) == Color::White)
}
