use fastrand::Rng;
use petgraph::prelude::*;
use trellis::{
    algo::{is_connected, is_cyclic_undirected, Matching, MaxFlow, SpanningTree},
    core::{
        id::{IntegerIdType, VertexId},
        marker::{Directed, EdgeType, Undirected},
        GraphAdd,
    },
    storage::AdjList,
};

const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

fn main() {
    divan::main();
}

// Endpoints and weights of random edges, the number of edges is the given
// fraction of all vertex pairs.
fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, u32)> {
    let pairs = vertex_count * vertex_count.saturating_sub(1) / 2;
    let edge_count = (pairs as f32 * density) as usize;

    (0..edge_count)
        .map(|_| {
            (
                rng.usize(..vertex_count),
                rng.usize(..vertex_count),
                rng.u32(1..100),
            )
        })
        .collect()
}

fn trellis_random<Ty: EdgeType>(vertex_count: usize, density: f32) -> AdjList<(), u32, Ty> {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = AdjList::new();

    for _ in 0..vertex_count {
        graph.add_vertex(());
    }

    for (u, v, w) in random_edges(vertex_count, density, &mut rng) {
        graph.add_edge(&VertexId::from_usize(u), &VertexId::from_usize(v), w);
    }

    graph
}

fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
) -> petgraph::Graph<(), u32, Ty> {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v, w) in random_edges(vertex_count, density, &mut rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }

    graph
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn trellis_boruvka_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Undirected>(N, density);

    bencher.bench(|| SpanningTree::on(&graph).boruvka().run());
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn trellis_prim_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Undirected>(N, density);

    bencher.bench(|| SpanningTree::on(&graph).prim().run());
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn trellis_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Undirected>(N, density);

    bencher.bench(|| SpanningTree::on(&graph).kruskal().run());
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn petgraph_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Undirected>(N, density);

    bencher.bench(|| petgraph::algo::min_spanning_tree(&graph).count());
}

#[divan::bench(consts = [1000, 10000], args = [0.0005, 0.01])]
fn trellis_is_cyclic_undirected<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Undirected>(N, density);

    bencher.bench(|| is_cyclic_undirected(&graph));
}

#[divan::bench(consts = [1000, 10000], args = [0.0005, 0.01])]
fn petgraph_is_cyclic_undirected<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Undirected>(N, density);

    bencher.bench(|| petgraph::algo::is_cyclic_undirected(&graph));
}

#[divan::bench(consts = [1000, 10000], args = [0.0005, 0.01])]
fn trellis_is_connected<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Undirected>(N, density);

    bencher.bench(|| is_connected(&graph));
}

#[divan::bench(consts = [1000, 10000], args = [0.0005, 0.01])]
fn petgraph_connected_components<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Undirected>(N, density);

    bencher.bench(|| petgraph::algo::connected_components(&graph) == 1);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn trellis_hopcroft_karp_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Undirected>(N, density);
    // Even and odd vertices form the sides, edges within a side are ignored.
    let left = (0..N)
        .step_by(2)
        .map(VertexId::from_usize)
        .collect::<Vec<_>>();

    bencher.bench(|| Matching::on(&graph).left(left.iter().copied()).run());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn petgraph_maximum_matching_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut graph = petgraph_random::<petgraph::Undirected>(N, density);
    graph.retain_edges(|g, e| {
        let (u, v) = g.edge_endpoints(e).unwrap();
        u.index() % 2 != v.index() % 2
    });

    bencher.bench(|| petgraph::algo::maximum_matching(&graph).len());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn trellis_dinic_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = trellis_random::<Directed>(N, density);
    let source = VertexId::from_usize(0);
    let sink = VertexId::from_usize(N - 1);

    bencher.bench(|| MaxFlow::on(&graph).run(&source, &sink));
}
