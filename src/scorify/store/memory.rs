use super::DataStore;
use crate::error::Result;
use crate::formats::json;
use crate::model::Sale;

/// In-memory storage for testing.
///
/// Holds the serialized document rather than the sales themselves so tests can seed
/// malformed content and observe exactly what a save produced.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }

    pub fn with_sales(sales: &[Sale]) -> Result<Self> {
        Ok(Self::with_document(json::to_string(sales)?))
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load_sales(&self) -> Result<Option<Vec<Sale>>> {
        self.document.as_deref().map(json::from_str).transpose()
    }

    fn save_sales(&mut self, sales: &[Sale]) -> Result<()> {
        self.document = Some(json::to_string(sales)?);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
