mod fact_extractor_port;

pub use fact_extractor_port::FactExtractorPort;
