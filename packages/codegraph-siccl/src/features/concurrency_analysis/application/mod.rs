mod extract_facts;

pub use extract_facts::ExtractFactsUseCase;
