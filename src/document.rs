use serde::{Deserialize, Serialize};

/// A parsed document as handed to the analyzers by the crawl/parse layer.
///
/// `K` is the document-key type (e.g. `String`, a URL newtype, `usize`).
/// Links refer to other documents by the same key type; words are the
/// document body in order, already tokenized.
///
/// Documents are plain data: the analyzers take a slice of them, derive
/// everything they need eagerly, and never look at them again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<K> {
    pub id: K,
    pub links: Vec<K>,
    pub words: Vec<String>,
}

impl<K> Document<K> {
    pub fn new(id: K, links: Vec<K>, words: Vec<String>) -> Self {
        Document { id, links, words }
    }
}
