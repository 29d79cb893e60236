use wordle_game::core::LetterStatus::{Absent, Correct, Present};
use wordle_game::core::{GuessResult, LetterStatus};
use wordle_game::dictionary::{Dictionary, GuessError, validate_guess};
use wordle_game::scorer::{KeyboardState, merge_into_keyboard, score};
use wordle_game::wordlists::FALLBACK;

#[test]
fn test_all_correct() {
    let result = score("crane", "crane");
    assert!(result.is_solved());
    assert_eq!(result.count(Correct), 5);
}

#[test]
fn test_mixed_feedback() {
    let result = score("crane", "charm");
    assert_eq!(result.statuses(), &[Correct, Present, Correct, Absent, Absent]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    let result = score("speed", "creep");
    assert_eq!(result.statuses(), &[Absent, Present, Correct, Correct, Absent]);
}

#[test]
fn test_repeated_letter_consumed_once() {
    // No E is green; SPEED's two E's credit both E's of ERASE as present
    let result = score("erase", "speed");
    assert_eq!(result.statuses(), &[Present, Absent, Absent, Present, Present]);
}

#[test]
fn test_result_from_symbols() {
    let result: GuessResult = "GYG--".parse().unwrap();
    assert_eq!(result, score("crane", "charm"));
    assert_eq!(result.to_string(), "GYG--");
}

#[test]
fn test_keyboard_threaded_through_guesses() {
    let keyboard = KeyboardState::new();
    let keyboard = merge_into_keyboard("crane", &score("crane", "charm"), keyboard);
    let keyboard = merge_into_keyboard("charm", &score("charm", "charm"), keyboard);

    assert_eq!(keyboard.status('r'), Some(LetterStatus::Correct));
    assert_eq!(keyboard.status('n'), Some(LetterStatus::Absent));
    assert_eq!(keyboard.status('h'), Some(LetterStatus::Correct));
}

#[test]
fn test_fallback_dictionary_session() {
    let dictionary = Dictionary::new(FALLBACK);
    assert_eq!(dictionary.dropped(), 0);
    assert!(dictionary.count() >= 500);

    let target = dictionary.random_word().unwrap().clone();
    let guess = validate_guess(&target.text().to_uppercase(), &dictionary).unwrap();
    assert!(score(guess.text(), target.text()).is_solved());

    assert!(matches!(
        validate_guess("   ", &dictionary),
        Err(GuessError::Empty)
    ));
}
