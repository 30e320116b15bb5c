//! Chat prompt construction for entity/aspect extraction.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One chat turn in the completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// A worked extraction example shown to the model.
#[derive(Debug, Clone)]
pub struct FewShot {
    pub review: String,
    pub extraction: String,
}

const SYSTEM_PROMPT: &str = "You are an NLP customer review analyzer who knows how to find \
what named entity the review is addressing and the aspect/opinion about this named entity.";

const INSTRUCTION: &str = "\
Your task is to extract both the entity and the aspect/opinion that are literally mentioned \
in the review.

Pay attention to the following (important):
- The entity and aspect/opinion MUST be explicitly mentioned in the review. Do NOT infer by yourself.
- The entity can be more than one word long (e.g., \"Chinese restaurant\").
- The aspect/opinion can be more than one word long (e.g., \"delicious and fantastic\").
- There could be more than one entity-aspect pair in the same review.
- If you can't find the entity or aspect/opinion, return \"None\".
- The review can be a full sentence but could also simply be a phrase or utterance.
- Return the response in the following JSON format: {incremental number: {\"named_entity\": str, \"aspect\": List[str]}}

Entity - what the customer is referring to in the review (e.g., \"Chinese restaurant\", \
\"service\", \"meal\", \"waitress\", \"food\").
Aspect (opinion) - how the entity is described by the customer (e.g., \"great\", \"amazing\", \
\"took too much time to prepare\", \"patient\", \"superb\").";

const ACKNOWLEDGEMENT: &str = "I acknowledge that I am a customer review analyzer who knows \
how to search a review for both the named entity mentioned in it and the aspect/opinion \
addressed to that entity. I understand your request and will look for and find both.";

const HANDOFF: &str = "Please provide the review you want me to analyze.";

static DEFAULT_EXAMPLES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("The food is decent", "food (entity), decent (aspect)"),
        ("The Steak Tartare was splendid", "Steak Tartare (entity), splendid (aspect)"),
        ("The service is top-notch", "service (entity), top-notch (aspect)"),
        (
            "I had the duck breast special on my last visit and it was incredible.",
            "duck breast special (entity), incredible (aspect)",
        ),
        (
            "The hostess was extremely rude and offensive",
            "hostess (entity), extremely rude and offensive (aspect)",
        ),
        (
            "Chow fun was dry ; pork shu mai was more than usually greasy and had to share a table with loud and rude family.",
            "Chow fun (entity), dry (aspect); pork shu mai (entity), more than usually greasy (aspect); table (entity), had to share with loud and rude family (aspect)",
        ),
        (
            "The waiter took his time with the food",
            "waiter (entity), took his time with the food (aspect)",
        ),
        (
            "Ambience is delightful, service impeccable.",
            "ambience (entity), delightful (aspect); service (entity), impeccable (aspect)",
        ),
        ("I won't come back again", "None (entity), None (aspect)"),
        (
            "We, there were four of us, arrived at noon - the place was empty - and the staff acted like we were imposing on them and they were very rude.",
            "place (entity), empty (aspect); staff (entity), acted like we were imposing on them (aspect); staff (entity), very rude (aspect)",
        ),
        (
            "The only thing I moderately enjoyed was their Grilled Chicken special with Edamame Puree.",
            "Grilled Chicken special with Edamame Puree (entity), moderately enjoyed (aspect)",
        ),
    ]
});

/// Template holding the enumerated prompt style options: instruction
/// text, few-shot example set, and role tagging.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub instruction: String,
    pub examples: Vec<FewShot>,
    /// When set, render the full multi-turn chat sequence; otherwise a
    /// single user message carries instruction, examples and review.
    pub role_tagged: bool,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        let examples = DEFAULT_EXAMPLES
            .iter()
            .map(|(review, extraction)| FewShot {
                review: (*review).to_string(),
                extraction: (*extraction).to_string(),
            })
            .collect();
        Self {
            instruction: INSTRUCTION.to_string(),
            examples,
            role_tagged: true,
        }
    }
}

impl PromptTemplate {
    /// Render the chat messages for one review. Pure string formatting.
    pub fn messages(&self, review: &str) -> Vec<ChatMessage> {
        if self.role_tagged {
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(self.instruction.clone()),
                ChatMessage::assistant(ACKNOWLEDGEMENT),
                ChatMessage::user(self.example_block()),
                ChatMessage::assistant(HANDOFF),
                ChatMessage::user(review),
            ]
        } else {
            vec![ChatMessage::user(format!(
                "{}\n\n{}\n\nReview:\n{review}",
                self.instruction,
                self.example_block()
            ))]
        }
    }

    fn example_block(&self) -> String {
        let mut block =
            String::from("Below are a few examples for you to learn from (few-shot learning):\n");
        for example in &self.examples {
            block.push_str(&format!("\"{}\" --> {}\n", example.review, example.extraction));
        }
        block
    }
}
