use std::hash::Hash;

use crate::analyze::SMALL_TABLE_CAPACITY;
use crate::collections::{ChainMap, ChainSet};
use crate::document::Document;

/// Builds the link graph of a corpus in adjacency-map form: document id to
/// the set of its outbound links.
///
/// The graph is self-contained: links to ids outside the corpus are dropped,
/// as are self-links. Every input document becomes exactly one vertex, even
/// with no surviving outbound links.
pub fn build_link_graph<K>(documents: &[Document<K>]) -> ChainMap<K, ChainSet<K>>
where
    K: Eq + Hash + Clone,
{
    let mut corpus_ids = ChainSet::new();
    for document in documents {
        corpus_ids.insert(document.id.clone());
    }

    let mut graph = ChainMap::new();
    for document in documents {
        let mut adjacent = ChainSet::with_capacity(SMALL_TABLE_CAPACITY);
        for link in &document.links {
            if *link != document.id && corpus_ids.contains(link) {
                adjacent.insert(link.clone());
            }
        }
        graph.insert(document.id.clone(), adjacent);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, links: &[&str]) -> Document<String> {
        Document::new(
            id.to_string(),
            links.iter().map(|l| l.to_string()).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn every_document_becomes_a_vertex() {
        let docs = vec![doc("a", &["b"]), doc("b", &[]), doc("c", &["a", "b"])];
        let graph = build_link_graph(&docs);
        assert_eq!(graph.len(), 3);
        assert!(graph.contains_key(&"b".to_string()));
    }

    #[test]
    fn self_links_are_dropped() {
        let docs = vec![doc("a", &["a", "b"]), doc("b", &[])];
        let graph = build_link_graph(&docs);
        let adjacent = graph.get(&"a".to_string()).unwrap();
        assert!(!adjacent.contains(&"a".to_string()));
        assert!(adjacent.contains(&"b".to_string()));
        assert_eq!(adjacent.len(), 1);
    }

    #[test]
    fn links_outside_the_corpus_are_dropped() {
        let docs = vec![doc("a", &["b", "elsewhere", "nowhere"]), doc("b", &["missing"])];
        let graph = build_link_graph(&docs);
        assert_eq!(graph.get(&"a".to_string()).unwrap().len(), 1);
        assert!(graph.get(&"b".to_string()).unwrap().is_empty());
    }

    #[test]
    fn duplicate_links_collapse_into_the_set() {
        let docs = vec![doc("a", &["b", "b", "b"]), doc("b", &[])];
        let graph = build_link_graph(&docs);
        assert_eq!(graph.get(&"a".to_string()).unwrap().len(), 1);
    }
}
