// Job-description enrichment: one chat completion per request, plus prefix cleanup.
// All LLM calls go through llm_client, never a direct HTTP call from here.

pub mod cleanup;
pub mod enricher;
pub mod handlers;
pub mod prompts;
