pub mod loader;


use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use crate::core::FlashdeckError;

/// Value side of one entry in the card document, keyed by the question text.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum JsonCardValue {
    Answer(String),
    Vocab {
        word: String,
        example: Option<String>,
        #[serde(rename = "exampleTranslation")]
        example_translation: Option<String>,
    },
}

impl JsonCardValue {
    pub fn answer(&self) -> &str {
        match self {
            JsonCardValue::Answer(answer) => answer,
            JsonCardValue::Vocab { word, .. } => word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
}

impl Card {
    fn from_entry(question: String, value: JsonCardValue) -> Self {
        match value {
            JsonCardValue::Answer(answer) => {
                Card { question, answer, example: None, example_translation: None }
            }
            JsonCardValue::Vocab { word, example, example_translation } => {
                Card { question, answer: word, example, example_translation }
            }
        }
    }
}

/// One card per key, in the order the document declares them. Entries that
/// match neither shape fail the whole conversion.
pub fn to_cards(document: Map<String, Value>) -> Result<Vec<Card>, FlashdeckError> {
    document
        .into_iter()
        .map(|(question, value)| {
            let value: JsonCardValue = serde_json::from_value(value)?;
            Ok(Card::from_entry(question, value))
        })
        .collect()
}
