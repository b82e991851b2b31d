pub mod course;

/// Minimum number of correct answers required to pass. 70% passing threshold
/// for the 10-question assessment.
pub const PASS_THRESHOLD: usize = 7;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub answers: Vec<usize>,
    pub pending_selection: Option<usize>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_question: 0,
            answers: Vec::new(),
            pending_selection: None,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    pub fn is_finished(&self) -> bool {
        self.current_question >= self.questions.len()
    }

    /// Records an answer for the current question. The choice stays pending
    /// until `advance` and can be changed any number of times before that.
    pub fn select(&mut self, option: usize) -> bool {
        let question = match self.current() {
            Some(question) => question,
            None => return false,
        };
        if option >= question.answers.len() {
            return false;
        }
        self.pending_selection = Some(option);
        true
    }

    /// Commits the pending selection and moves on to the next question, or
    /// finishes the quiz after the last one. Without a pending selection
    /// nothing changes and the caller is expected to ask the user to pick an
    /// option first.
    pub fn advance(&mut self) -> Result<Advance, AdvanceError> {
        if self.is_finished() {
            return Err(AdvanceError::QuizFinished);
        }
        let selection = match self.pending_selection {
            Some(selection) => selection,
            None => return Err(AdvanceError::NoSelection),
        };

        self.answers.push(selection);
        self.pending_selection = None;
        self.current_question += 1;

        if self.is_finished() {
            Ok(Advance::Finished(self.result()))
        } else {
            Ok(Advance::Next(self.current_question))
        }
    }

    /// Score over the full answer sheet. `advance` only hands out
    /// `Advance::Finished` once every question has been answered, so the
    /// count always runs over the complete sheet.
    pub fn result(&self) -> QuizResult {
        let score = self
            .answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| {
                question
                    .answers
                    .get(**answer)
                    .map(|a| a.is_correct)
                    .unwrap_or(false)
            })
            .count();

        QuizResult {
            score,
            total: self.questions.len(),
            passed: score >= PASS_THRESHOLD,
        }
    }

    /// Starts the attempt over. Nothing of the previous run is kept.
    pub fn reset(&mut self) {
        self.current_question = 0;
        self.answers.clear();
        self.pending_selection = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// The last question was answered and the sheet is scored.
    Finished(QuizResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceError {
    /// The user has to pick an option before moving on.
    NoSelection,
    /// All questions were already answered.
    QuizFinished,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}
impl Question {
    pub fn new(text: String, answers: Vec<Answer>) -> Self {
        Self { text, answers }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}
impl Answer {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question::new(
            "which one?".to_string(),
            (0..4)
                .map(|i| Answer::new(format!("option {}", i), i == correct))
                .collect(),
        )
    }

    fn quiz_with_key(key: &[usize]) -> Quiz {
        Quiz::new(key.iter().map(|&correct| question(correct)).collect())
    }

    #[test]
    fn advance_without_selection_changes_nothing() {
        let mut quiz = quiz_with_key(&[0, 1]);

        assert_eq!(quiz.advance(), Err(AdvanceError::NoSelection));
        assert_eq!(quiz.current_question, 0);
        assert!(quiz.answers.is_empty());
    }

    #[test]
    fn selection_can_be_changed_until_advance() {
        let mut quiz = quiz_with_key(&[2, 0]);

        assert!(quiz.select(0));
        assert!(quiz.select(2));
        assert_eq!(quiz.advance(), Ok(Advance::Next(1)));
        assert_eq!(quiz.answers, vec![2]);
        assert_eq!(quiz.pending_selection, None);
    }

    #[test]
    fn select_rejects_out_of_range_options() {
        let mut quiz = quiz_with_key(&[0]);

        assert!(!quiz.select(4));
        assert_eq!(quiz.pending_selection, None);
    }

    #[test]
    fn perfect_sheet_scores_full_and_passes() {
        let key = [1, 0, 2, 2, 0, 1, 1, 1, 2, 1];
        let mut quiz = quiz_with_key(&key);

        for &correct in &key {
            assert!(quiz.select(correct));
            quiz.advance().unwrap();
        }

        let result = quiz.result();
        assert_eq!(result.score, 10);
        assert_eq!(result.total, 10);
        assert!(result.passed);
    }

    #[test]
    fn seven_of_ten_passes_six_fails() {
        let key = [0; 10];

        // 7 correct answers, then 3 wrong ones
        let mut quiz = quiz_with_key(&key);
        for i in 0..10 {
            assert!(quiz.select(if i < 7 { 0 } else { 1 }));
            quiz.advance().unwrap();
        }
        let result = quiz.result();
        assert_eq!(result.score, 7);
        assert!(result.passed);

        // one correct answer fewer lands below the threshold
        let mut quiz = quiz_with_key(&key);
        for i in 0..10 {
            assert!(quiz.select(if i < 6 { 0 } else { 1 }));
            quiz.advance().unwrap();
        }
        let result = quiz.result();
        assert_eq!(result.score, 6);
        assert!(!result.passed);
    }

    #[test]
    fn finished_quiz_rejects_further_input() {
        let mut quiz = quiz_with_key(&[1]);
        quiz.select(1);
        assert!(matches!(quiz.advance(), Ok(Advance::Finished(_))));

        assert!(!quiz.select(0));
        assert_eq!(quiz.advance(), Err(AdvanceError::QuizFinished));
        assert_eq!(quiz.answers.len(), 1);
    }

    #[test]
    fn reset_forgets_the_whole_attempt() {
        let mut quiz = quiz_with_key(&[0, 1, 2]);
        quiz.select(1);
        quiz.advance().unwrap();
        quiz.select(3);

        quiz.reset();
        assert_eq!(quiz.current_question, 0);
        assert!(quiz.answers.is_empty());
        assert_eq!(quiz.pending_selection, None);
        assert!(!quiz.is_finished());
    }
}
