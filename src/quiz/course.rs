use crate::quiz::{Answer, Question};

/// The assessment for the AI & Prompt Engineering Masterclass. Question and
/// option order is fixed, one correct option per question.
const COURSE_QUESTIONS: [(&str, [&str; 4], usize); 10] = [
    (
        "What is the primary goal of prompt engineering in AI?",
        [
            "Writing code for AI models",
            "Crafting effective inputs to get desired outputs",
            "Building neural networks",
            "Managing server infrastructure",
        ],
        1,
    ),
    (
        "Which term describes AI's ability to understand and generate human language?",
        [
            "Natural Language Processing (NLP)",
            "Machine Learning",
            "Deep Learning",
            "Neural Networks",
        ],
        0,
    ),
    (
        "What is a 'token' in the context of AI language models?",
        [
            "A cryptocurrency unit",
            "A security key",
            "A piece of text or word fragment",
            "A programming variable",
        ],
        2,
    ),
    (
        "Which is NOT a common type of AI model?",
        [
            "Generative AI",
            "Predictive AI",
            "Telepathic AI",
            "Classification AI",
        ],
        2,
    ),
    (
        "What is 'few-shot learning' in AI?",
        [
            "Training with minimal examples",
            "Quick model deployment",
            "Rapid prototyping",
            "Fast computation",
        ],
        0,
    ),
    (
        "Which factor is most important in prompt engineering?",
        [
            "Code length",
            "Clarity and specificity",
            "Processing speed",
            "Memory usage",
        ],
        1,
    ),
    (
        "What is a 'hallucination' in AI terms?",
        [
            "A visual glitch",
            "Generated content that's false or nonsensical",
            "System crash",
            "Memory overflow",
        ],
        1,
    ),
    (
        "Which best describes 'supervised learning'?",
        [
            "Learning without labels",
            "Learning with labeled data",
            "Self-directed learning",
            "Reinforcement learning",
        ],
        1,
    ),
    (
        "What is the purpose of 'temperature' in AI text generation?",
        [
            "Control CPU heat",
            "Manage memory usage",
            "Control response randomness",
            "Adjust processing speed",
        ],
        2,
    ),
    (
        "Which is a key ethical consideration in AI?",
        [
            "Maximum processing speed",
            "Bias and fairness",
            "Code efficiency",
            "Storage optimization",
        ],
        1,
    ),
];

pub fn course_questions() -> Vec<Question> {
    COURSE_QUESTIONS
        .iter()
        .map(|(text, options, correct)| {
            Question::new(
                text.to_string(),
                options
                    .iter()
                    .enumerate()
                    .map(|(i, option)| Answer::new(option.to_string(), i == *correct))
                    .collect(),
            )
        })
        .collect()
}
