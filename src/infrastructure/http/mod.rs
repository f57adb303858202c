pub mod analysis_rest_client;
pub mod dto;

pub use analysis_rest_client::AnalysisApiClient;
