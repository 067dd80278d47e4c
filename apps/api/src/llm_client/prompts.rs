// Prompt fragments shared by more than one caller.
// Feature-specific prompts live next to the feature.

/// System prompt for calls parsed with `LlmClient::call_json`.
pub const JSON_ONLY_SYSTEM: &str = "You turn unstructured documents into structured data. \
    Reply with a single valid JSON object and nothing else. \
    No markdown fences, no commentary.";
