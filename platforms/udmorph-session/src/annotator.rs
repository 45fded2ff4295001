use crate::error::AnnotationError;

/// An exclusively owned handle on an annotation engine.
///
/// Implementations carry a fixed pipeline configuration; the same text always
/// goes through the same stages and comes back in the same encoding.
/// `annotate` takes `&mut self` because one engine instance serves one caller
/// at a time. Run one session per worker for parallel throughput.
pub trait Annotator {
    /// Annotates one text and returns the engine's raw EPE output.
    ///
    /// Empty text is valid input. Errors are reserved for failures inside the
    /// engine itself.
    fn annotate(&mut self, text: &str) -> Result<String, AnnotationError>;
}

impl<A: Annotator + ?Sized> Annotator for &mut A {
    fn annotate(&mut self, text: &str) -> Result<String, AnnotationError> {
        (**self).annotate(text)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&mut self, text: &str) -> Result<String, AnnotationError> {
        (**self).annotate(text)
    }
}
