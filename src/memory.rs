use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::store::DocumentDataStore;
use crate::types::{BlobKind, DocumentDataId, DocumentDataRecord};
use crate::BlobResult;

/// Simple in-memory document-data store for tests and demos
#[derive(Clone, Default)]
pub struct MemoryDocumentDataStore {
    records: Arc<Mutex<HashMap<String, DocumentDataRecord>>>,
}

impl MemoryDocumentDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<DocumentDataRecord> {
        self.records.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> Vec<DocumentDataRecord> {
        self.records.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl DocumentDataStore for MemoryDocumentDataStore {
    async fn create(&self, kind: BlobKind, payload: String) -> BlobResult<DocumentDataRecord> {
        let record = DocumentDataRecord {
            id: DocumentDataId::new(),
            kind,
            payload,
            created_at: chrono::Utc::now().timestamp(),
        };

        let mut records = self.records.lock().unwrap();
        records.insert(record.id.to_string(), record.clone());

        Ok(record)
    }
}
