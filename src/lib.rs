pub mod logger;
pub mod noise_pipeline;
