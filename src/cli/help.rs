//! Help text for CLI commands.

/// Get help text for CLI commands.
#[must_use]
pub const fn help_text() -> &'static str {
    r#"bias-lens: cognitive-bias detection and correction

Commands:

  detect TEXT         Detect biases in TEXT

  correct TEXT [options]
                      Rewrite TEXT with hedged wording
    --biases, -b K1,K2  Kinds to address (default: detect first)

  analyze TEXT        Detect, then correct when anything was found

  generate [N] [options]
                      Generate N synthetic examples into the corpus (default: 100)
    --seed, -s SEED     Seed for reproducible output
    --no-save           Keep the examples in memory only

  stats               Show statistics for the persisted corpus

  evaluate            Run detection over the persisted corpus and report recall

  help                Show this text

Bias kinds:
  confirmation_bias, availability_heuristic, anchoring_bias,
  survivorship_bias, recency_bias, groupthink

Environment:
  CORPUS_PATH, LOG_LEVEL, CATALOG_PATH, SEMANTIC_THRESHOLD, EMBEDDING_URL,
  EMBEDDING_API_KEY, EMBEDDING_MODEL, EMBEDDING_TIMEOUT_MS,
  EMBEDDING_DIMENSIONS, GENERATOR_SEED

Examples:
  bias-lens detect "Everyone knows the market always goes up."
  bias-lens correct "This will definitely work" --biases confirmation_bias
  bias-lens generate 500 --seed 42
  bias-lens stats
"#
}
