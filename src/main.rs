mod certificate;
mod quiz;
mod registration;
mod video;

use std::{fs::File, sync::Arc, time::Duration};

use certificate::{certificate_text, CourseProgress, CERTIFICATE_FILENAME};
use chrono::Local;
use dotenv::dotenv;
use quiz::{course, Advance, AdvanceError, Quiz};
use registration::RegistrationCodes;
use teloxide::{
    dispatching::dialogue::{ErasedStorage, InMemStorage, Storage},
    prelude::*,
    types::{ChatAction, ChatId, InputFile, KeyboardButton, KeyboardMarkup, ParseMode},
};

type CourseDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveRegistrationCode,
    WatchVideo,
    TakeQuiz {
        quiz: Quiz,
        progress: CourseProgress,
    },
    QuizFailed {
        quiz: Quiz,
        progress: CourseProgress,
    },
    OfferCertificate {
        progress: CourseProgress,
    },
}

type CourseStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() {
    dotenv().expect("Failed to load .env file");

    pretty_env_logger::init();
    log::info!("Starting course bot...");

    let bot = Bot::from_env();

    // Dialogue state is in-memory only. Restarting the bot is the same as
    // reloading the page: everything starts over.
    let storage: CourseStorage = InMemStorage::new().erase();

    println!("Loading the registration code list");
    let registration_codes = Arc::new(RegistrationCodes::new(
        File::open("valid-codes.csv").expect("Failed to open file 'valid-codes.csv'"),
    ));
    println!("Code list loaded");

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(
                dptree::case![State::ReceiveRegistrationCode].endpoint(
                    move |bot: Bot, dialogue: CourseDialogue, msg: Message| {
                        receive_registration_code(registration_codes.clone(), bot, dialogue, msg)
                    },
                ),
            )
            .branch(dptree::case![State::WatchVideo].endpoint(watch_video))
            .branch(dptree::case![State::TakeQuiz { quiz, progress }].endpoint(take_quiz))
            .branch(dptree::case![State::QuizFailed { quiz, progress }].endpoint(quiz_failed))
            .branch(dptree::case![State::OfferCertificate { progress }].endpoint(offer_certificate)),
    )
    .dependencies(dptree::deps![storage])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const GREETING_TEXT: &str = "Welcome to AI Course Hub! Master AI & Prompt Engineering together \
with Google Developer Group and AWS Community.\n\n\
The masterclass gives you:\n\
- 12 comprehensive modules\n\
- 40 hours of content\n\
- an industry-recognized certificate";
const ENTER_CODE_TEXT: &str =
    "Please enter your 6-character registration code to access the course (e.g. ABC123).";
async fn start(bot: Bot, dialogue: CourseDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;
    bot.send_message(msg.chat.id, ENTER_CODE_TEXT).await?;

    dialogue.update(State::ReceiveRegistrationCode).await?;
    Ok(())
}

// Pause between accepting a code and handing out the course, so the success
// message gets read first
const COURSE_LOAD_DELAY: Duration = Duration::from_millis(1500);

const FINISHED_WATCHING: &str = "I've watched the video";
async fn receive_registration_code(
    codes: Arc<RegistrationCodes>,
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
) -> HandlerResult {
    let code = match msg.text() {
        Some(code) => code,
        None => {
            bot.send_message(msg.chat.id, "Please enter your registration code (as text)")
                .await?;
            return Ok(());
        }
    };

    if !codes.is_valid(code) {
        bot.send_message(msg.chat.id, "Invalid code. Please try again.")
            .await?;
        return Ok(());
    }

    bot.send_message(msg.chat.id, "Valid code! Loading your course...")
        .await?;
    tokio::time::sleep(COURSE_LOAD_DELAY).await;

    bot.send_message(
        msg.chat.id,
        format!(
            "Here is your course video:\n{}\n\nTap \"{}\" once playback has reached the end.",
            video::watch_url(),
            FINISHED_WATCHING
        ),
    )
    .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(
        FINISHED_WATCHING,
    )]]))
    .await?;

    dialogue.update(State::WatchVideo).await?;
    Ok(())
}

const QUIZ_INTRO_TEXT: &str = "Assessment Quiz\n\
Complete the quiz with at least 70% correct answers to receive your certificate.";
async fn watch_video(bot: Bot, dialogue: CourseDialogue, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(FINISHED_WATCHING) => {}
        _ => {
            bot.send_message(
                msg.chat.id,
                format!("Tap \"{}\" when you are done with the video.", FINISHED_WATCHING),
            )
            .await?;
            return Ok(());
        }
    }

    let progress = CourseProgress {
        video_watched: true,
        quiz_passed: false,
    };
    let quiz = Quiz::new(course::course_questions());

    bot.send_message(msg.chat.id, QUIZ_INTRO_TEXT).await?;
    send_question(&bot, msg.chat.id, &quiz).await?;

    dialogue.update(State::TakeQuiz { quiz, progress }).await?;
    Ok(())
}

const NEXT_QUESTION: &str = "Next question";
const SUBMIT_QUIZ: &str = "Submit";
const RETRY_QUIZ: &str = "Retry quiz";
const GET_CERTIFICATE: &str = "Get certificate";
const USE_THE_BUTTONS_TEXT: &str = "Please use the answer buttons below.";

fn advance_label(quiz: &Quiz) -> &'static str {
    if quiz.current_question + 1 == quiz.questions.len() {
        SUBMIT_QUIZ
    } else {
        NEXT_QUESTION
    }
}

async fn send_question(bot: &Bot, chat_id: ChatId, quiz: &Quiz) -> HandlerResult {
    let question = match quiz.current() {
        Some(question) => question,
        None => return Ok(()),
    };

    let question_text = format!(
        "<b>Question {} of {}</b>\n\n{}",
        quiz.current_question + 1,
        quiz.questions.len(),
        question.text
    );

    let mut keyboard: Vec<Vec<KeyboardButton>> = question
        .answers
        .iter()
        .map(|answer| vec![KeyboardButton::new(answer.text.clone())])
        .collect();
    keyboard.push(vec![KeyboardButton::new(advance_label(quiz))]);

    bot.send_message(chat_id, question_text)
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardMarkup::new(keyboard))
        .await?;
    Ok(())
}

async fn take_quiz(
    bot: Bot,
    dialogue: CourseDialogue,
    (mut quiz, mut progress): (Quiz, CourseProgress),
    msg: Message,
) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, USE_THE_BUTTONS_TEXT).await?;
            return Ok(());
        }
    };

    if text == NEXT_QUESTION || text == SUBMIT_QUIZ {
        match quiz.advance() {
            Err(AdvanceError::NoSelection) => {
                bot.send_message(msg.chat.id, "Please select an answer before continuing.")
                    .await?;
            }
            Err(AdvanceError::QuizFinished) => {
                // The dialogue leaves this state the moment the quiz ends,
                // so there is nothing left to advance
            }
            Ok(Advance::Next(_)) => {
                send_question(&bot, msg.chat.id, &quiz).await?;
                dialogue.update(State::TakeQuiz { quiz, progress }).await?;
            }
            Ok(Advance::Finished(result)) => {
                if result.passed {
                    progress.quiz_passed = true;
                }

                // The certificate is only offered once both the video and
                // the quiz latch are set
                if progress.certificate_available() {
                    bot.send_message(
                        msg.chat.id,
                        format!(
                            "Congratulations! You passed!\nYour score: {} out of {}",
                            result.score, result.total
                        ),
                    )
                    .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(
                        GET_CERTIFICATE,
                    )]]))
                    .await?;

                    dialogue.update(State::OfferCertificate { progress }).await?;
                } else {
                    bot.send_message(
                        msg.chat.id,
                        format!(
                            "Your score: {} out of {}\nPlease try again to get your certificate.",
                            result.score, result.total
                        ),
                    )
                    .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(
                        RETRY_QUIZ,
                    )]]))
                    .await?;

                    dialogue.update(State::QuizFailed { quiz, progress }).await?;
                }
            }
        }
        return Ok(());
    }

    let selected = quiz
        .current()
        .and_then(|question| question.answers.iter().position(|answer| answer.text == text));
    match selected {
        Some(option) => {
            quiz.select(option);
            bot.send_message(
                msg.chat.id,
                format!(
                    "Your answer: {}\nYou can still change it, or move on with \"{}\".",
                    text,
                    advance_label(&quiz)
                ),
            )
            .await?;

            dialogue.update(State::TakeQuiz { quiz, progress }).await?;
        }
        None => {
            bot.send_message(msg.chat.id, USE_THE_BUTTONS_TEXT).await?;
        }
    }
    Ok(())
}

async fn quiz_failed(
    bot: Bot,
    dialogue: CourseDialogue,
    (mut quiz, progress): (Quiz, CourseProgress),
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(RETRY_QUIZ) => {}
        _ => {
            bot.send_message(
                msg.chat.id,
                format!("Tap \"{}\" to have another go at the quiz.", RETRY_QUIZ),
            )
            .await?;
            return Ok(());
        }
    }

    quiz.reset();
    send_question(&bot, msg.chat.id, &quiz).await?;

    dialogue.update(State::TakeQuiz { quiz, progress }).await?;
    Ok(())
}

async fn offer_certificate(bot: Bot, progress: CourseProgress, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(GET_CERTIFICATE) => {}
        _ => {
            bot.send_message(
                msg.chat.id,
                format!("Tap \"{}\" to download your certificate.", GET_CERTIFICATE),
            )
            .await?;
            return Ok(());
        }
    }

    // Both stage latches are checked again right before issuing
    if !progress.certificate_available() {
        bot.send_message(msg.chat.id, "Finish the video and pass the quiz first.")
            .await?;
        return Ok(());
    }

    // We don't mind if the upload indicator fails
    let _ = bot
        .send_chat_action(msg.chat.id, ChatAction::UploadDocument)
        .await;

    let text = certificate_text(Local::now().date_naive());
    bot.send_document(
        msg.chat.id,
        InputFile::memory(text.into_bytes()).file_name(CERTIFICATE_FILENAME),
    )
    .await?;

    bot.send_message(
        msg.chat.id,
        "Congratulations on completing the course! You can request the certificate again at any time.",
    )
    .await?;

    Ok(())
}
