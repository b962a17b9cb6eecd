//! Actor-vs-director disambiguation by extractive question answering

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use movie_ner_core::QuestionAnswerer;

use crate::persons::PersonRole;
use crate::text::base_name;
use crate::vocabulary::{actor_question, director_question};
use crate::Result;

static DIRECTOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdirect(?:ed|or|ors|s|ing)?\b").unwrap());

/// Resolves persons found in both the actor and director lists
#[derive(Clone)]
pub struct Disambiguator {
    qa: Arc<dyn QuestionAnswerer>,
}

impl Disambiguator {
    pub fn new(qa: Arc<dyn QuestionAnswerer>) -> Self {
        Self { qa }
    }

    /// Resolve `person` to [`PersonRole::Actor`] or [`PersonRole::Director`]
    ///
    /// Asks whether the person is an actor; an answer mentioning directing
    /// means director, any other answer means actor. Without an answer it
    /// asks whether the person is a director. With no answer at all the
    /// person is an actor.
    pub fn resolve(&self, person: &str, context: &str) -> Result<PersonRole> {
        let person = base_name(person);

        if let Some(answer) = self.ask(&actor_question(person), context)? {
            let role = if DIRECTOR_PATTERN.is_match(&answer) {
                PersonRole::Director
            } else {
                PersonRole::Actor
            };
            tracing::debug!(person, %role, qa_calls = 1, qa = self.qa.name(), "Resolved ambiguous person");
            return Ok(role);
        }

        let role = match self.ask(&director_question(person), context)? {
            Some(_) => PersonRole::Director,
            None => PersonRole::Actor,
        };
        tracing::debug!(person, %role, qa_calls = 2, qa = self.qa.name(), "Resolved ambiguous person");
        Ok(role)
    }

    /// Non-empty, trimmed answer
    fn ask(&self, question: &str, context: &str) -> Result<Option<String>> {
        let answer = self.qa.answer(question, context)?;
        Ok(answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()))
    }
}

impl std::fmt::Debug for Disambiguator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disambiguator")
            .field("qa", &self.qa.name())
            .finish()
    }
}
