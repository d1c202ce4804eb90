use tracing::{debug, warn};

use crate::bacon::credits::Filmography;
use crate::graphs::graph::Graph;
use crate::graphs::ungraph::UndirectedGraph;

/// Builds the collaboration graph of a filmography.
///
/// Every actor becomes a vertex with weight 0, in first-appearance order.
/// For each actor, each of their movies and each other cast member, a link
/// `"<title>-<actor>:<partner>"` is offered to the graph. The graph keeps the
/// first link per pair of actors and refuses the rest, so two actors sharing
/// several movies end up joined once, through the movie that comes first.
/// Names may contain `-` and `:`, so two different triples can spell the same
/// id. The later one is then stored as `"<title>|<actor>|<partner>"`.
pub fn collaboration_graph(films: &Filmography) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for actor in films.actors() {
        graph.add_vertex(actor.name(), 0.0);
    }

    let mut offered = 0usize;
    for actor in films.actors() {
        for movie in films.movies_of(actor) {
            for partner in films.cast_of(movie) {
                if partner.name() == actor.name() {
                    continue;
                }
                offered += 1;
                let id = format!("{}-{}:{}", movie.title(), actor.name(), partner.name());
                if graph.add_edge(id.as_str(), 0.0, actor.name(), partner.name())
                    || graph.has_edge(actor.name(), partner.name())
                {
                    continue;
                }

                // The id is taken by an unrelated pair. Credit fields never
                // contain `|`, so this form is unique per triple.
                let fallback = format!("{}|{}|{}", movie.title(), actor.name(), partner.name());
                warn!(link = %id, %fallback, "collaboration link id collides, renaming");
                graph.add_edge(fallback, 0.0, actor.name(), partner.name());
            }
        }
    }

    debug!(
        actors = graph.vertex_count(),
        links = graph.edge_count(),
        offered,
        "collaboration graph built"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::graphs::edges::Edge;
    use crate::graphs::undirected::Undirected;

    fn build(text: &str) -> UndirectedGraph {
        collaboration_graph(&Filmography::from_reader(Cursor::new(text)).unwrap())
    }

    #[test]
    fn co_stars_are_linked() {
        let g = build("A|M1\nB|M1\nC|M2\n");
        let ids: Vec<&str> = g.vertices().into_iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert!(g.vertices().iter().all(|v| v.weight() == 0.0));

        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("A", "B"));
        assert!(!g.has_edge("A", "C"));
        assert_eq!(g.degree("C").unwrap(), 0);
    }

    #[test]
    fn first_shared_movie_names_the_link() {
        let g = build("A|M1\nB|M1\nA|M2\nB|M2\n");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.link_between("B", "A").unwrap().id(), "M1-A:B");
    }

    #[test]
    fn whole_cast_is_a_clique() {
        let g = build("A|M\nB|M\nC|M\nD|M\n");
        assert_eq!(g.edge_count(), 6);
        for v in ["A", "B", "C", "D"] {
            assert_eq!(g.degree(v).unwrap(), 3);
        }
    }

    #[test]
    fn colliding_link_ids_keep_both_collaborations() {
        // "T-A" + "B" and "T" + "A-B" both spell "T-A-B:C".
        let g = build("B|T-A\nA-B|T\nC|T-A\nC|T\n");
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge("B", "C"));
        assert!(g.has_edge("A-B", "C"));
        assert_eq!(g.link_between("B", "C").unwrap().id(), "T-A-B:C");
        assert_eq!(g.link_between("A-B", "C").unwrap().id(), "T|A-B|C");
    }

    #[test]
    fn large_overlapping_casts_link_each_pair_once() {
        // 300 movies of 12 actors drawn from a pool of 900, so casts overlap.
        let mut text = String::new();
        let mut pairs = std::collections::HashSet::new();
        for m in 0..300usize {
            let cast: Vec<usize> = (0..12).map(|k| (m * 7 + k * 61) % 900).collect();
            for &a in &cast {
                text.push_str(&format!("P{a}|M{m}\n"));
                for &b in &cast {
                    if a < b {
                        pairs.insert((a, b));
                    }
                }
            }
        }

        let g = build(&text);
        assert_eq!(g.edge_count(), pairs.len());
        let degrees: usize = g
            .vertices()
            .iter()
            .map(|v| g.degree(v.id()).unwrap())
            .sum();
        assert_eq!(degrees, 2 * pairs.len());
    }

    #[test]
    fn solo_credits_give_isolated_vertices() {
        let g = build("A|M1\nB|M2\n");
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }
}
