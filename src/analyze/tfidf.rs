use std::hash::Hash;

use tracing::debug;

use crate::analyze::SMALL_TABLE_CAPACITY;
use crate::collections::{ChainMap, ChainSet};
use crate::document::Document;
use crate::error::Result;

/// Relevance scores for documents against word queries, vector-space style.
///
/// Construction walks the corpus twice: once to fix the IDF of every word
/// ever seen (`ln(N / docFrequency)`), once to cache a TF-IDF weight vector
/// per document. Both tables are read-only afterward, so a built analyzer is
/// freely shareable across threads.
#[derive(Debug, Clone)]
pub struct TfIdfAnalyzer<K> {
    idf_scores: ChainMap<Box<str>, f64>,
    document_vectors: ChainMap<K, ChainMap<Box<str>, f64>>,
}

impl<K> TfIdfAnalyzer<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(documents: &[Document<K>]) -> Self {
        let idf_scores = compute_idf_scores(documents);
        let mut document_vectors = ChainMap::new();
        for document in documents {
            document_vectors.insert(document.id.clone(), weigh(&document.words, &idf_scores));
        }
        debug!(
            documents = documents.len(),
            vocabulary = idf_scores.len(),
            "tf-idf vectors built"
        );
        TfIdfAnalyzer {
            idf_scores,
            document_vectors,
        }
    }

    /// Cosine similarity in `[0, 1]` between the query's TF-IDF vector and
    /// the document's cached one.
    ///
    /// The query vector is weighed with the corpus-trained IDF table; words
    /// the corpus never saw weigh 0.0 rather than failing. Returns 0.0 when
    /// either vector has zero norm. Fails with
    /// [`Error::KeyNotFound`](crate::error::Error) for an unknown `id`.
    pub fn relevance<S>(&self, query: &[S], id: &K) -> Result<f64>
    where
        S: AsRef<str>,
    {
        let document_vector = self.document_vectors.get(id)?;
        let query_vector = weigh(query, &self.idf_scores);

        let mut numerator = 0.0;
        for (word, &query_weight) in query_vector.iter() {
            let document_weight = document_vector.get(word).map(|w| *w).unwrap_or(0.0);
            numerator += document_weight * query_weight;
        }
        let denominator = norm(document_vector) * norm(&query_vector);
        if denominator == 0.0 {
            return Ok(0.0);
        }
        Ok(numerator / denominator)
    }

    /// The cached TF-IDF vector of every corpus document.
    pub fn document_vectors(&self) -> &ChainMap<K, ChainMap<Box<str>, f64>> {
        &self.document_vectors
    }

    /// Number of vectorized documents.
    pub fn len(&self) -> usize {
        self.document_vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document_vectors.is_empty()
    }
}

/// IDF of every word in the corpus: `ln(N / docFrequency)`. Document
/// frequency counts distinct appearances, so it is never zero for a word
/// that made it into the table, and a word present in all N documents
/// scores exactly 0.
fn compute_idf_scores<K>(documents: &[Document<K>]) -> ChainMap<Box<str>, f64> {
    let total = documents.len() as f64;
    let mut doc_frequency: ChainMap<Box<str>, usize> = ChainMap::new();
    for document in documents {
        let mut seen: ChainSet<Box<str>> = ChainSet::with_capacity(SMALL_TABLE_CAPACITY);
        for word in &document.words {
            let word: Box<str> = word.as_str().into();
            if seen.contains(&word) {
                continue;
            }
            seen.insert(word.clone());
            match doc_frequency.get_mut(&word) {
                Ok(count) => *count += 1,
                Err(_) => {
                    doc_frequency.insert(word, 1);
                }
            }
        }
    }

    let mut scores = ChainMap::new();
    for (word, &frequency) in doc_frequency.iter() {
        scores.insert(word.clone(), (total / frequency as f64).ln());
    }
    scores
}

/// TF-IDF vector of a word list: bag-of-words term frequencies scaled by the
/// given IDF table, one entry per distinct word. Words absent from the table
/// weigh 0.0.
fn weigh<S>(words: &[S], idf_scores: &ChainMap<Box<str>, f64>) -> ChainMap<Box<str>, f64>
where
    S: AsRef<str>,
{
    let total = words.len() as f64;
    let mut counts: ChainMap<Box<str>, usize> = ChainMap::with_capacity(SMALL_TABLE_CAPACITY);
    for word in words {
        let word: Box<str> = word.as_ref().into();
        match counts.get_mut(&word) {
            Ok(count) => *count += 1,
            Err(_) => {
                counts.insert(word, 1);
            }
        }
    }

    let mut vector = ChainMap::with_capacity(SMALL_TABLE_CAPACITY);
    for (word, count) in counts {
        let idf = idf_scores.get(&word).map(|idf| *idf).unwrap_or(0.0);
        vector.insert(word, (count as f64 / total) * idf);
    }
    vector
}

fn norm(vector: &ChainMap<Box<str>, f64>) -> f64 {
    let mut sum = 0.0;
    for (_, &weight) in vector.iter() {
        sum += weight * weight;
    }
    sum.sqrt()
}
