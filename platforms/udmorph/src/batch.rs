use udmorph_epe::{DecodeError, EpeDecoder};
use udmorph_protocol::{Sentence, SentenceId};
use udmorph_session::Annotator;

use crate::error::BatchError;

/// Runs an ordered collection of texts through one annotator and decoder.
///
/// Sentences are numbered by their 1-based position in the batch.
pub struct BatchProcessor<A> {
    annotator: A,
    decoder: EpeDecoder,
}

impl<A: Annotator> BatchProcessor<A> {
    pub fn new(annotator: A) -> Self {
        Self::with_decoder(annotator, EpeDecoder::default())
    }

    pub fn with_decoder(annotator: A, decoder: EpeDecoder) -> Self {
        Self { annotator, decoder }
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    pub fn into_annotator(self) -> A {
        self.annotator
    }

    /// Annotates every text in order, or fails on the first error.
    ///
    /// Texts after a failing one are never submitted and no partial result is
    /// returned.
    pub fn annotate_batch<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<Vec<Sentence>, BatchError> {
        tracing::info!(texts = texts.len(), "annotating batch");

        let mut sentences = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            match self.process(index, text.as_ref()) {
                Ok(sentence) => sentences.push(sentence),
                Err(e) => {
                    tracing::warn!(index, error = %e, "batch aborted");
                    return Err(e);
                }
            }
        }

        tracing::info!(sentences = sentences.len(), "batch complete");
        Ok(sentences)
    }

    /// Annotates every text, keeping one outcome per text.
    ///
    /// Unlike [`Self::annotate_batch`] a failure does not stop the batch.
    pub fn annotate_each<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<Result<Sentence, BatchError>> {
        tracing::info!(texts = texts.len(), "annotating texts independently");

        texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let outcome = self.process(index, text.as_ref());
                if let Err(e) = &outcome {
                    tracing::warn!(index, error = %e, "text failed");
                }
                outcome
            })
            .collect()
    }

    fn process(&mut self, index: usize, text: &str) -> Result<Sentence, BatchError> {
        let raw = self
            .annotator
            .annotate(text)
            .map_err(|source| BatchError::Annotation { index, source })?;

        // usize never exceeds 64 bits on supported targets, so positions stay distinct.
        let id = SentenceId::new(index as u64 + 1);

        if raw.trim().is_empty() {
            if text.trim().is_empty() {
                return Ok(Sentence::empty(id));
            }
            return Err(BatchError::Decode {
                index,
                source: DecodeError::EmptyRecord,
            });
        }

        let mut sentence = self
            .decoder
            .decode(&raw)
            .map_err(|source| BatchError::Decode { index, source })?;
        sentence.id = id;

        tracing::debug!(index, nodes = sentence.nodes.len(), "text annotated");
        Ok(sentence)
    }
}
