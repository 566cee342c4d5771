//! # Rulebot Session Integration Tests
//!
//! File: cli/tests/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives whole conversations through the binary's stdin and checks the
//! replies on stdout. Replies drawn at random are checked for membership in
//! their candidate list rather than for exact text.
//!

mod common;
use common::*;

const GREETINGS: [&str; 3] = [
    "Hi! How can I help you today?",
    "Hello! What can I do for you?",
    "Hey there!",
];
const BYES: [&str; 3] = ["Goodbye! Have a nice day.", "See you later!", "Bye!"];
const THANKS: [&str; 3] = ["You're welcome!", "No problem!", "Happy to help!"];
const ASK_NAME: [&str; 2] = ["What's your name?", "May I know your name?"];
const UNKNOWN: [&str; 2] = [
    "Sorry, I didn't understand that. Could you rephrase?",
    "I don't know how to respond to that yet.",
];

/// Runs a conversation and returns the raw stdout.
fn chat_raw(input: &str, seed: Option<u64>) -> String {
    let sandbox = Sandbox::new();
    let mut cmd = sandbox.cmd();
    if let Some(seed) = seed {
        cmd.args(["--seed", &seed.to_string()]);
    }
    let output = cmd.write_stdin(input).output().expect("Failed to run rulebot");
    assert!(output.status.success(), "rulebot exited with {:?}", output.status);
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

/// Runs a conversation and returns only the bot replies, in order.
fn chat(input: &str) -> Vec<String> {
    chat_raw(input, None)
        .lines()
        .filter_map(|line| line.strip_prefix("You: Bot: "))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_greeting() {
    let replies = chat("hi\n");
    assert_eq!(replies.len(), 1);
    assert!(GREETINGS.contains(&replies[0].as_str()), "{:?}", replies);
}

#[test]
fn test_unmatched_input_gets_fallback() {
    let replies = chat("the mitochondria is the powerhouse of the cell\n");
    assert!(UNKNOWN.contains(&replies[0].as_str()), "{:?}", replies);
}

#[test]
fn test_name_is_captured_and_echoed() {
    let replies = chat("My name is Bob.\nWhat is your name?\n");
    assert_eq!(replies.len(), 2);
    assert!(
        ["Nice to meet you, Bob!", "Got it — I'll call you Bob."].contains(&replies[0].as_str()),
        "{:?}",
        replies
    );
    assert_eq!(replies[1], "You're Bob, right?");
}

#[test]
fn test_arithmetic() {
    let replies = chat("2 + 3\n10 / 0\nwhat is 1.5 * -4?\n9 - 12\n");
    assert_eq!(
        replies,
        vec![
            "The answer is 5.0",
            "The answer is Infinity",
            "The answer is -6.0",
            "The answer is -3.0",
        ]
    );
}

#[test]
fn test_arithmetic_with_non_ascii_digits() {
    // Arabic-Indic "2 + 3" and Devanagari "10 / 4"
    let replies = chat("\u{0662} + \u{0663}\n\u{0967}\u{0966} / \u{096A}\n");
    assert_eq!(replies, vec!["The answer is 5.0", "The answer is 2.5"]);
}

#[test]
fn test_greeting_and_question_in_one_line() {
    let replies = chat("hello, what is your name\n");
    let reply = &replies[0];
    let matched = GREETINGS.iter().any(|greeting| {
        ASK_NAME
            .iter()
            .any(|ask| *reply == format!("{} {}", greeting, ask))
    });
    assert!(matched, "unexpected reply: {}", reply);
}

#[test]
fn test_math_answered_after_other_intents() {
    let replies = chat("thanks! 6 * 7\n");
    let reply = &replies[0];
    assert!(reply.ends_with(" The answer is 42.0"), "{}", reply);
    assert!(THANKS.iter().any(|t| reply.starts_with(t)), "{}", reply);
}

#[test]
fn test_empty_line_prompts_and_keeps_state() {
    let replies = chat("\n   \nwho are you\n");
    assert_eq!(replies[0], "Please say something or type 'help'.");
    assert_eq!(replies[1], "Please say something or type 'help'.");
    assert!(ASK_NAME.contains(&replies[2].as_str()), "{:?}", replies);
}

#[test]
fn test_exit_keyword_ends_session() {
    for keyword in ["exit", "QUIT", "  bye  ", "Goodbye", "see you"] {
        let stdout = chat_raw(&format!("{}\nhi\n", keyword), None);
        let reply = stdout
            .strip_prefix("You: Bot: ")
            .and_then(|rest| rest.strip_suffix('\n'))
            .unwrap_or_else(|| panic!("unexpected transcript for {:?}: {:?}", keyword, stdout));
        assert!(BYES.contains(&reply), "{:?}", reply);
    }
}

#[test]
fn test_bye_inside_sentence_ends_after_reply() {
    let stdout = chat_raw("ok thanks, bye for now\nhi\n", None);
    let replies: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("You: Bot: "))
        .collect();
    assert_eq!(replies.len(), 1, "{:?}", stdout);
    assert!(BYES.iter().any(|b| replies[0].starts_with(b)), "{}", replies[0]);
    assert!(THANKS.iter().any(|t| replies[0].ends_with(t)), "{}", replies[0]);
    assert!(!stdout.ends_with("You: "));
}

#[test]
fn test_end_of_input_ends_session() {
    assert_eq!(
        chat_raw("help\n", None),
        "You: Bot: I can greet you, remember your name, do simple math (e.g. 2 + 3), \
         and respond to a few common intents.\nYou: "
    );
}

#[test]
fn test_seed_makes_replies_reproducible() {
    let script = "hi\nhello\nhey\nthanks\nwhat is your name\nblah\n";
    assert_eq!(chat_raw(script, Some(1234)), chat_raw(script, Some(1234)));
}
