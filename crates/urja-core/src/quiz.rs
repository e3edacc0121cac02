//! Fixed multiple-choice quiz bank.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One multiple-choice question. The `answer` field is sent to the client
/// together with the options; no server-side verification happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// In-memory question bank; selection is uniform with replacement, so
/// repeats across calls are expected.
#[derive(Debug, Clone)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

fn q(question: &str, options: [&str; 4], answer: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer: answer.to_string(),
    }
}

impl QuizBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    /// The three built-in renewable-energy questions.
    pub fn builtin() -> Self {
        Self::new(vec![
            q(
                "Which of the following is a renewable energy source?",
                ["Coal", "Wind", "Oil", "Natural Gas"],
                "Wind",
            ),
            q(
                "What device converts sunlight into electricity?",
                ["Windmill", "Turbine", "Solar Panel", "Generator"],
                "Solar Panel",
            ),
            q(
                "Which gas is primarily responsible for global warming?",
                ["Oxygen", "Hydrogen", "Carbon Dioxide", "Nitrogen"],
                "Carbon Dioxide",
            ),
        ])
    }

    /// Picks one question uniformly at random; `None` only for an empty bank.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&QuizQuestion> {
        self.questions.choose(rng)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}
