//! Ranking core for a small search engine.
//!
//! Two analyzers — a PageRank importance scorer over the corpus link graph
//! and a TF-IDF relevance scorer over document word lists — built on a small
//! family of in-memory containers: a chained hash dictionary and set, a
//! 4-ary min-heap, and a doubly linked sequence. A heap-based top-k selector
//! rounds out the toolkit.
//!
//! Crawling, parsing, persistence and the blending of the two scores into a
//! final result list are all the caller's business: the inputs here are
//! already-parsed [`Document`] records, and the outputs are plain numbers.
//! Everything is single-threaded and deterministic for a given corpus; once
//! built, the analyzers are immutable and can be read from any number of
//! threads.
pub mod analyze;
pub mod collections;
pub mod document;
pub mod error;
pub mod topk;

/// A parsed document: an id, outbound link ids, and the body as an ordered
/// word list. The unit of input for both analyzers.
pub use document::Document;

/// PageRank importance scorer.
/// Builds the corpus link graph (self-links and out-of-corpus links
/// dropped), then power-iterates rank mass until the largest per-vertex
/// change falls under `epsilon` or the iteration limit cuts it off.
/// Dangling vertices redistribute their mass uniformly, so the total always
/// sums to one.
pub use analyze::{PageRankAnalyzer, PageRankConfig};

/// TF-IDF relevance scorer.
/// Fixes inverse document frequencies over the whole corpus once, caches a
/// TF-IDF weight vector per document, and scores queries by cosine
/// similarity against those vectors.
pub use analyze::TfIdfAnalyzer;

/// Link-graph builder shared with the PageRank analyzer, usable standalone
/// when a caller wants the adjacency map itself.
pub use analyze::build_link_graph;

/// The k largest elements of a sequence, ascending, via a bounded min-heap;
/// independent of the analyzers.
pub use topk::top_k;

/// The containers the analyzers are built on. `ChainMap` chains entries into
/// `ArrayMap` buckets (or any other [`collections::Map`] implementation) and
/// grows through a fixed prime-capacity table at a 0.70 load factor.
pub use collections::{ArrayMap, ChainMap, ChainSet, DoublyLinkedList, QuadHeap};

/// Failure taxonomy for the whole crate, plus its `Result` alias.
pub use error::{Error, Result};
