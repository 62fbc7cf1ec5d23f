pub mod analysis_results;
