//! Sentence-embedding providers. The vector representation is a black
//! box to the scorer; any backend producing comparable embeddings works.

use std::sync::Arc;

use anyhow::Result;

#[cfg(feature = "embeddings")]
use std::sync::Mutex;

#[cfg(feature = "embeddings")]
use anyhow::anyhow;

#[cfg(feature = "embeddings")]
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

/// Trait for sentence-embedding implementations.
pub trait Embedder: Send + Sync {
    /// Encode each text into a fixed-length dense vector.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;
}

/// Deterministic character-trigram hashing embedder.
///
/// Stands in for the pretrained model when the `embeddings` feature is
/// disabled, so the pipeline and tests run without a model download.
/// Captures surface overlap only, not semantics.
pub struct HashedEmbedder {
    dim: usize,
}

impl HashedEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(256)
    }
}

impl Embedder for HashedEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| hash_trigrams(text, self.dim)).collect())
    }
}

fn hash_trigrams(text: &str, dim: usize) -> Vec<f32> {
    let mut vector = vec![0.0f32; dim];
    let normalised = text.trim().to_lowercase();
    if normalised.is_empty() {
        return vector;
    }
    let padded: Vec<char> = format!(" {normalised} ").chars().collect();
    for window in padded.windows(3) {
        let gram: String = window.iter().collect();
        let slot = (fnv1a(gram.as_bytes()) % dim as u64) as usize;
        vector[slot] += 1.0;
    }
    vector
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(feature = "embeddings")]
struct MiniLmEmbedder {
    // fastembed's embed takes &mut self; the pipeline is sequential so
    // the lock is uncontended.
    model: Mutex<TextEmbedding>,
}

#[cfg(feature = "embeddings")]
impl Embedder for MiniLmEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| anyhow!("embedding model lock poisoned"))?;
        Ok(model.embed(texts.to_vec(), None)?)
    }
}

/// Load the MiniLM sentence-embedding model.
#[cfg(feature = "embeddings")]
pub fn load_model() -> Result<Arc<dyn Embedder>> {
    let model = TextEmbedding::try_new(
        InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
    )?;
    Ok(Arc::new(MiniLmEmbedder {
        model: Mutex::new(model),
    }) as Arc<dyn Embedder>)
}

/// Load the hashing fallback when the pretrained model is disabled.
#[cfg(not(feature = "embeddings"))]
pub fn load_model() -> Result<Arc<dyn Embedder>> {
    Ok(Arc::new(HashedEmbedder::default()) as Arc<dyn Embedder>)
}
