// crates/langmap-core/src/assistant.rs
//! The text-generation seam.
//!
//! Translation and language questions are answered by a remote model. This
//! module only phrases the requests and picks the agent; the model call
//! itself sits behind [`TextGenerator`].

use crate::error::{LangMapError, Result};
use crate::model::CountryRecord;

/// Anything that can answer a system + user prompt with text.
pub trait TextGenerator {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Sends one completion request and returns the response text.
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &G {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn complete(&self, system: &str, user: &str) -> Result<String> {
        (**self).complete(system, user)
    }
}

impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn complete(&self, system: &str, user: &str) -> Result<String> {
        (**self).complete(system, user)
    }
}

/// A named system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub name: &'static str,
    pub instructions: &'static str,
}

pub const TRANSLATOR_AGENT: Agent = Agent {
    name: "Translator Agent",
    instructions: "You are a multilingual translation expert. Accurately translate text between any languages while preserving meaning, context, and cultural nuances.",
};

pub const LANGUAGE_AGENT: Agent = Agent {
    name: "Language Identification Agent",
    instructions: "You are an expert at identifying languages and providing information about language usage in different regions.",
};

/// Languages offered as translation targets.
pub const TARGET_LANGUAGES: [&str; 7] = [
    "Arabic", "English", "Urdu", "Spanish", "French", "German", "Chinese",
];

/// Arabic for Arabic-speaking countries, English everywhere else.
pub fn default_target_language(record: &CountryRecord) -> &'static str {
    if record.primary_language() == "Arabic" {
        "Arabic"
    } else {
        "English"
    }
}

/// Free-form questions mentioning "language" go to the language expert,
/// everything else to the translator.
pub fn route_question(question: &str) -> &'static Agent {
    if question.to_lowercase().contains("language") {
        &LANGUAGE_AGENT
    } else {
        &TRANSLATOR_AGENT
    }
}

pub fn language_overview_prompt(record: &CountryRecord) -> String {
    format!(
        "What language is primarily spoken in {}? Also provide 1-2 interesting facts about language use there.",
        record.name()
    )
}

/// Rejects blank text; there is nothing to translate.
pub fn translation_prompt(target_language: &str, text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(LangMapError::InvalidInput(
            "Please enter text to translate".into(),
        ));
    }
    let target = target_language.trim();
    if target.is_empty() {
        return Err(LangMapError::InvalidInput(
            "target language must not be empty".into(),
        ));
    }
    Ok(format!(
        "Translate this to {target} while preserving cultural context:\n\n{text}"
    ))
}

/// Runs the agents against a [`TextGenerator`].
///
/// Every method issues exactly one `complete` call.
pub struct Assistant<G> {
    generator: G,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Asks the language expert about a country.
    pub fn describe_languages(&self, record: &CountryRecord) -> Result<String> {
        self.run(&LANGUAGE_AGENT, &language_overview_prompt(record))
    }

    pub fn translate(&self, target_language: &str, text: &str) -> Result<String> {
        let prompt = translation_prompt(target_language, text)?;
        self.run(&TRANSLATOR_AGENT, &prompt)
    }

    /// Routes a free-form question with [`route_question`].
    pub fn ask(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(LangMapError::InvalidInput("question must not be empty".into()));
        }
        self.run(route_question(question), question)
    }

    fn run(&self, agent: &Agent, input: &str) -> Result<String> {
        tracing::debug!(
            agent = agent.name,
            provider = self.generator.name(),
            "sending request to text-generation service"
        );
        let out = self.generator.complete(agent.instructions, input)?;
        tracing::debug!(agent = agent.name, chars = out.len(), "response received");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every request and answers with a canned reply.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl TextGenerator for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn complete(&self, system: &str, user: &str) -> Result<String> {
            self.calls
                .borrow_mut()
                .push((system.to_string(), user.to_string()));
            Ok(format!("reply #{}", self.calls.borrow().len()))
        }
    }

    fn pakistan() -> CountryRecord {
        CountryRecord {
            name: "Pakistan".into(),
            official_name: "Islamic Republic of Pakistan".into(),
            iso2: "PK".into(),
            iso3: Some("PAK".into()),
            latitude: 30.3753,
            longitude: 69.3451,
            primary_language: "Urdu".into(),
        }
    }

    #[test]
    fn routing_looks_for_language_keyword() {
        assert_eq!(route_question("Which LANGUAGE is spoken in Peru?"), &LANGUAGE_AGENT);
        assert_eq!(route_question("How do I say hello in French?"), &TRANSLATOR_AGENT);
        // "languages" contains "language"
        assert_eq!(route_question("languages of India"), &LANGUAGE_AGENT);
    }

    #[test]
    fn prompts_match_wording() {
        assert_eq!(
            language_overview_prompt(&pakistan()),
            "What language is primarily spoken in Pakistan? Also provide 1-2 interesting facts about language use there."
        );
        assert_eq!(
            translation_prompt("Urdu", "Good morning").unwrap(),
            "Translate this to Urdu while preserving cultural context:\n\nGood morning"
        );
    }

    #[test]
    fn blank_translation_is_rejected_before_any_call() {
        let recorder = Recorder::default();
        let assistant = Assistant::new(&recorder);
        assert!(matches!(
            assistant.translate("Urdu", "   "),
            Err(LangMapError::InvalidInput(_))
        ));
        assert!(assistant.ask("").is_err());
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn boxed_generator_is_a_generator() {
        let boxed: Box<dyn TextGenerator> = Box::new(Recorder::default());
        let assistant = Assistant::new(boxed);
        assert_eq!(assistant.generator().name(), "recorder");
        assert_eq!(assistant.translate("French", "Hello").unwrap(), "reply #1");
    }

    #[test]
    fn each_action_is_one_call_with_the_right_agent() {
        let assistant = Assistant::new(Recorder::default());

        assistant.describe_languages(&pakistan()).unwrap();
        assistant.translate("Arabic", "Peace").unwrap();
        let answer = assistant.ask("Tell me about the Urdu language").unwrap();
        assert_eq!(answer, "reply #3");

        let calls = assistant.generator().calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0, LANGUAGE_AGENT.instructions);
        assert!(calls[0].1.contains("Pakistan"));
        assert_eq!(calls[1].0, TRANSLATOR_AGENT.instructions);
        assert!(calls[1].1.starts_with("Translate this to Arabic"));
        assert_eq!(calls[2].0, LANGUAGE_AGENT.instructions);
        assert_eq!(calls[2].1, "Tell me about the Urdu language");
    }

    #[test]
    fn default_target_follows_primary_language() {
        let mut r = pakistan();
        assert_eq!(default_target_language(&r), "English");
        r.primary_language = "Arabic".into();
        assert_eq!(default_target_language(&r), "Arabic");
        assert!(TARGET_LANGUAGES.contains(&default_target_language(&r)));
        assert_eq!(TARGET_LANGUAGES.len(), 7);
    }
}
