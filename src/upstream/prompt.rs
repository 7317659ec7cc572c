//! Prompt construction and the generateContent wire format.

use serde::Serialize;

/// Request body for the generateContent endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GenerateRequest {
    /// Wrap a prompt in the single-content, single-part envelope the
    /// upstream expects.
    pub fn for_prompt(text: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
        }
    }
}

/// Build the fixed instruction prompt for a word.
///
/// The upstream is asked for a short explanation, an IPA transcription,
/// synonyms, antonyms and example sentences, all bounded so the reply
/// stays compact.
pub fn build_prompt(word: &str) -> String {
    format!(
        "You are an advanced English language assistant specializing in vocabulary \
         explanation and linguistic analysis. Provide the following in JSON format:\n\
         - A simple explanation of the meaning of the word \"{word}\" in up to 3 sentences.\n\
         - Its phonetic transcription in the International Phonetic Alphabet (IPA).\n\
         - Up to 5 synonyms.\n\
         - Up to 5 antonyms.\n\
         - Up to 3 short and simple example sentences using the word that reflect \
         its most common usage."
    )
}
