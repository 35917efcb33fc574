//! Prompt assembly for grounded question answering

use crate::retrieval::store::ScoredEntry;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Concatenate retrieved chunk texts into the context block, in
    /// retrieval order.
    pub fn build_context(results: &[ScoredEntry]) -> String {
        results
            .iter()
            .map(|r| r.entry.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Fixed grounding instruction plus context and question. The model is
    /// told to answer only from the context and otherwise say "I don't
    /// know".
    pub fn build(question: &str, context: &str) -> String {
        format!(
            "Answer the question based ONLY on the following context.\n\
             If you cannot answer the question based on the context, say \"I don't know\".\n\
             \n\
             Context:\n\
             {context}\n\
             \n\
             Question: {question}\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::store::IndexEntry;
    use crate::types::document::ChunkSource;
    use uuid::Uuid;

    fn scored(text: &str) -> ScoredEntry {
        ScoredEntry {
            similarity: 0.9,
            entry: IndexEntry {
                id: Uuid::new_v4(),
                embedding: vec![0.0],
                text: text.to_string(),
                source: ChunkSource {
                    source: "doc.pdf".to_string(),
                    page: 1,
                },
            },
        }
    }

    #[test]
    fn context_joins_chunks_in_order() {
        let results = vec![scored("first"), scored("second")];
        assert_eq!(PromptBuilder::build_context(&results), "first\n\nsecond");
    }

    #[test]
    fn context_of_no_results_is_empty() {
        assert_eq!(PromptBuilder::build_context(&[]), "");
    }

    #[test]
    fn prompt_carries_instruction_context_and_question() {
        let prompt = PromptBuilder::build("What is X?", "X is Y.");
        assert!(prompt.contains("based ONLY on the following context"));
        assert!(prompt.contains("say \"I don't know\""));
        assert!(prompt.contains("Context:\nX is Y."));
        assert!(prompt.contains("Question: What is X?"));
    }
}
