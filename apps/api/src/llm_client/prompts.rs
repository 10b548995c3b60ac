// Shared prompt fragments.
// Endpoint-specific templates live in generation::prompts alongside the gateway.

/// Appended to every prompt that expects a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";
