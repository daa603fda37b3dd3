pub mod stateless_llm;
pub mod stateless_llm_factory;

pub use stateless_llm_factory::StatelessLLMFactory;
