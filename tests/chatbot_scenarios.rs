use std::io::Write;

use tempfile::Builder;

use confab::catalog::{Intent, IntentCatalog};
use confab::chat::{ChatSession, Chatbot, ResponseSelector};
use confab::error::ConfabError;
use confab::ml::intent_classifier::{self, ClassifierConfig, IntentClassifier};

fn scenario_catalog() -> IntentCatalog {
    IntentCatalog::new(vec![
        Intent::new("greeting", ["Hi", "Hello"], ["Hi there"]),
        Intent::new("goodbye", ["Bye", "See you later"], ["Goodbye"]),
    ])
    .unwrap()
}

#[test]
fn test_greeting_goodbye_scenario() {
    let bot = Chatbot::new(scenario_catalog(), ClassifierConfig::default()).unwrap();
    assert_eq!(bot.classify("Hello").unwrap().tag, "greeting");

    let mut session = ChatSession::seeded(42);
    let outcome = session.turn(&bot, "Hello").unwrap();
    assert_eq!(outcome.reply, "Hi there");
    assert!(!outcome.ended);
    assert_eq!(session.transcript().len(), 2);

    let outcome = session.turn(&bot, "Bye").unwrap();
    assert_eq!(outcome.reply, "Goodbye");
    assert!(outcome.ended);
    assert!(session.transcript().is_empty());
}

#[test]
fn test_training_set_recall_on_builtin_catalog() {
    let catalog = IntentCatalog::builtin().unwrap();
    let classifier = intent_classifier::fit_classifier(&catalog, ClassifierConfig::default()).unwrap();

    for pair in catalog.all_training_pairs() {
        assert_eq!(classifier.predict(&pair.pattern).unwrap(), pair.tag);
    }
}

#[test]
fn test_closed_output_range_and_determinism() {
    let catalog = IntentCatalog::builtin().unwrap();
    let bot = Chatbot::new(catalog.clone(), ClassifierConfig::default()).unwrap();

    let inputs = [
        "",
        "¿¡",
        "Wie spät ist es?",
        "日本語のテキスト",
        "asdf qwer zxcv",
        "my credit card budget for the weather",
    ];
    for text in inputs {
        let first = bot.classify(text).unwrap();
        assert!(catalog.contains(&first.tag));
        for _ in 0..3 {
            assert_eq!(bot.classify(text).unwrap().tag, first.tag);
        }
    }
}

#[test]
fn test_response_membership() {
    let catalog = IntentCatalog::builtin().unwrap();
    let bot = Chatbot::new(catalog, ClassifierConfig::default()).unwrap();
    let mut selector = ResponseSelector::seeded(5);

    for text in ["Hey", "What can you do", "How do I check my credit score", "lorem ipsum"] {
        for _ in 0..10 {
            let reply = bot.reply(text, &mut selector).unwrap();
            let responses = bot.catalog().responses_for(&reply.tag).unwrap();
            assert!(responses.iter().any(|r| *r == reply.text));
        }
    }
}

#[test]
fn test_catalog_integrity() {
    let duplicate = IntentCatalog::new(vec![
        Intent::new("greeting", ["Hi"], ["Hello"]),
        Intent::new("greeting", ["Hey"], ["Hey there"]),
    ]);
    assert!(matches!(duplicate, Err(ConfabError::DuplicateTag(_))));

    let single = IntentCatalog::new(vec![Intent::new("greeting", ["Hi"], ["Hello"])]).unwrap();
    assert!(matches!(
        Chatbot::new(single, ClassifierConfig::default()),
        Err(ConfabError::InsufficientData(_))
    ));
}

#[test]
fn test_end_of_conversation_is_case_insensitive() {
    let bot = Chatbot::new(IntentCatalog::builtin().unwrap(), ClassifierConfig::default()).unwrap();

    for text in ["bye", "Goodbye", "BYE", "goodBYE"] {
        let mut session = ChatSession::seeded(0);
        session.turn(&bot, "Hi").unwrap();
        let outcome = session.turn(&bot, text).unwrap();
        assert!(outcome.ended, "{text:?} should end the conversation");
        assert!(session.transcript().is_empty());
    }

    let mut session = ChatSession::seeded(0);
    assert!(!session.turn(&bot, "Take care").unwrap().ended);
}

#[test]
fn test_catalog_from_file() {
    let dir = Builder::new().prefix("confab_catalog").tempdir().unwrap();
    let path = dir.path().join("intents.json");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"[
            {"tag": "order", "patterns": ["I want a pizza", "Order food"], "responses": ["What would you like?"]},
            {"tag": "status", "patterns": ["Where is my order", "Track delivery"], "responses": ["It is on its way."]}
        ]"#,
    )
    .unwrap();

    let catalog = IntentCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let bot = Chatbot::new(catalog, ClassifierConfig::default()).unwrap();
    let mut session = ChatSession::seeded(1);
    assert_eq!(session.turn(&bot, "track my delivery").unwrap().reply, "It is on its way.");
    assert_eq!(session.turn(&bot, "order a pizza").unwrap().reply, "What would you like?");
}

#[test]
fn test_missing_catalog_file() {
    let result = IntentCatalog::from_path("/nonexistent/intents.json");
    assert!(matches!(result, Err(ConfabError::Io(_))));
}

#[test]
fn test_shared_bot_across_threads() {
    let bot = Chatbot::new(IntentCatalog::builtin().unwrap(), ClassifierConfig::default()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|seed| {
                let bot = &bot;
                scope.spawn(move || {
                    let mut session = ChatSession::seeded(seed);
                    session.turn(bot, "Thanks a lot").unwrap().tag
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "thanks");
        }
    });
}
