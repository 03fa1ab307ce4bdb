/// Failures that end a single analysis request
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No text to analyze")]
    EmptyInput,

    #[error("Analysis service request failed: {0}")]
    FetchFailure(String),

    #[error("Failed to insert analysis: {0}")]
    InsertionFailure(String),
}
