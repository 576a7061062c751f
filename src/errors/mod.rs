use anyhow::Context as _;

/// Context for snapshot file failures
pub fn store_context(operation: &str, file: &str) -> String {
    format!("Failed to {} snapshot file: {}", operation, file)
}

/// Context for parse failures
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Context for combination store failures
pub fn combination_context(operation: &str, id: &str) -> String {
    format!("Failed to {} combination: {}", operation, id)
}

/// Wrap result with snapshot file context
pub fn with_store_context<T, E>(result: Result<T, E>, operation: &str, file: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| store_context(operation, file))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type))
}
