pub mod analyzer;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod result;

pub use analyzer::PageAnalyzer;
pub use error::AnalyzeError;
pub use extract::extract_links;
pub use fetch::{LinkFetcher, ProbeOutcome};
pub use result::{AnalysisResult, LinkProbeResult};
