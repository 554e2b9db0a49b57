use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::RwLock;

use crate::domain::{
    ports::VectorStore, similarity, DomainError, Embedding, ScoredRecord, VectorRecord,
};

/// Append-only store scanned linearly on every query.
pub struct InMemoryVectorStore {
    records: RwLock<Vec<VectorRecord>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Descending by score, NaN after every number.
fn by_score_desc(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn insert(&self, record: VectorRecord) -> Result<(), DomainError> {
        let mut store = self
            .records
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        store.push(record);
        Ok(())
    }

    async fn search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredRecord>, DomainError> {
        let store = self
            .records
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let mut results = Vec::with_capacity(store.len());
        for record in store.iter() {
            if !similarity::same_dimension(query.as_slice(), record.embedding.as_slice()) {
                return Err(DomainError::internal(format!(
                    "embedding dimension mismatch for record '{}': query has {}, record has {}",
                    record.id,
                    query.dimension(),
                    record.embedding.dimension()
                )));
            }
            let score = query.cosine_similarity(&record.embedding);
            results.push(ScoredRecord::from_record(record, score));
        }

        // `sort_by` is stable, so equal scores keep insertion order.
        results.sort_by(|a, b| by_score_desc(a.score, b.score));
        results.truncate(top_k);

        Ok(results)
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let store = self
            .records
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, vec: Vec<f32>) -> VectorRecord {
        VectorRecord::new(id, format!("text {id}"), Embedding::new(vec))
    }

    #[tokio::test]
    async fn test_insert_and_search() {
        let store = InMemoryVectorStore::new();
        store.insert(record("a", vec![1.0, 0.0, 0.0])).await.unwrap();

        let query = Embedding::new(vec![1.0, 0.0, 0.0]);
        let results = store.search(&query, 1).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
        assert!((results[0].score - 1.0).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_search_orders_by_descending_score() {
        let store = InMemoryVectorStore::new();
        store.insert(record("far", vec![0.0, 1.0])).await.unwrap();
        store.insert(record("near", vec![1.0, 0.1])).await.unwrap();
        store.insert(record("mid", vec![1.0, 1.0])).await.unwrap();

        let results = store
            .search(&Embedding::new(vec![1.0, 0.0]), 10)
            .await
            .unwrap();

        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid", "far"]);
    }

    #[tokio::test]
    async fn test_ties_keep_insertion_order() {
        let store = InMemoryVectorStore::new();
        for id in ["first", "second", "third"] {
            store.insert(record(id, vec![2.0, 2.0])).await.unwrap();
        }

        let results = store
            .search(&Embedding::new(vec![1.0, 1.0]), 3)
            .await
            .unwrap();

        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_coexist() {
        let store = InMemoryVectorStore::new();
        store.insert(record("dup", vec![1.0, 0.0])).await.unwrap();
        store.insert(record("dup", vec![0.0, 1.0])).await.unwrap();

        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_nan_scores_sort_last() {
        let store = InMemoryVectorStore::new();
        store.insert(record("zero", vec![0.0, 0.0])).await.unwrap();
        store.insert(record("unit", vec![0.0, 1.0])).await.unwrap();

        let results = store
            .search(&Embedding::new(vec![1.0, 0.0]), 2)
            .await
            .unwrap();

        assert_eq!(results[0].id, "unit");
        assert!(results[1].score.is_nan());
    }

    #[tokio::test]
    async fn test_top_k_zero_and_empty_store() {
        let store = InMemoryVectorStore::new();
        let query = Embedding::new(vec![1.0]);
        assert!(store.search(&query, 3).await.unwrap().is_empty());

        store.insert(record("a", vec![1.0])).await.unwrap();
        assert!(store.search(&query, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dimension_mismatch_is_error() {
        let store = InMemoryVectorStore::new();
        store.insert(record("a", vec![1.0, 0.0])).await.unwrap();

        let err = store
            .search(&Embedding::new(vec![1.0, 0.0, 0.0]), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
