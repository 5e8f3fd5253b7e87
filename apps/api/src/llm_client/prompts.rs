// Cross-cutting prompt fragments shared by templates that expect structured output.

/// Instruction prefixed to prompts whose answer must be a bare JSON array.
pub const JSON_ARRAY_ONLY: &str = "You are a quiz generator that ONLY outputs valid JSON arrays. \
Your response must start with '[' and end with ']'. \
Do not include any other text or explanation.";
