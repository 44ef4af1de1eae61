//! Prompts for generation and hallucination analysis

/// System prompt for the generation stage
///
/// The generated answer is deliberately left unfiltered; detection happens
/// in a separate analyze call against this output.
pub const GENERATE_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Answer the user's question with detailed, factual information. If you're unsure about something, still provide your best answer.";

/// System prompt for the analysis stage, demanding JSON-only output
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a hallucination detection system. Always respond with valid JSON only, no markdown formatting.";

/// Build the analysis prompt embedding the original prompt and the answer
/// under review verbatim
pub fn build_analysis_prompt(prompt: &str, llm_response: &str) -> String {
    format!(
        r#"You are an expert AI hallucination detector. Analyze the following AI-generated response to the given prompt for potential hallucinations.

PROMPT: "{prompt}"

AI RESPONSE: "{llm_response}"

Analyze the response and return a JSON object with EXACTLY this structure (no markdown, no code blocks, just raw JSON):
{{
  "overallScore": <number 0-100 where 0 = no hallucination, 100 = completely hallucinated>,
  "riskLevel": "<low|medium|high|critical>",
  "claims": [
    {{
      "text": "<the specific claim from the response>",
      "status": "<verified|uncertain|likely_hallucinated|hallucinated>",
      "confidence": <number 0-100>,
      "reason": "<brief explanation>"
    }}
  ],
  "summary": "<2-3 sentence overall assessment>",
  "strategies_used": ["<list of detection strategies applied>"]
}}

Be thorough but fair. Not everything uncertain is hallucinated."#
    )
}
