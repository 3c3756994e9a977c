//! Command implementations for the Confab CLI.

use std::io::{self, BufRead, Write};

use crate::catalog::IntentCatalog;
use crate::chat::{ChatSession, Chatbot, FAREWELL, ResponseSelector};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::ml::intent_classifier::{self, ClassifierConfig, IntentClassifier};

/// Greeting printed at the start of an interactive chat.
pub const WELCOME: &str =
    "Welcome to the chatbot. Please type a message and press Enter to start the conversation.";

/// Execute a CLI command.
pub fn execute_command(args: ConfabArgs) -> Result<()> {
    match &args.command {
        Command::Chat(chat_args) => chat(chat_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Validate(validate_args) => validate(validate_args.clone(), &args),
    }
}

/// Load the catalog named on the command line, or the built-in one.
pub fn load_catalog(model: &ModelArgs) -> Result<IntentCatalog> {
    match &model.catalog {
        Some(path) => IntentCatalog::from_path(path),
        None => IntentCatalog::builtin(),
    }
}

/// Load the classifier configuration named on the command line, or defaults.
pub fn load_config(model: &ModelArgs) -> Result<ClassifierConfig> {
    match &model.config {
        Some(path) => ClassifierConfig::from_path(path),
        None => Ok(ClassifierConfig::default()),
    }
}

/// Run an interactive chat on stdin/stdout.
fn chat(args: ChatArgs, cli_args: &ConfabArgs) -> Result<()> {
    let catalog = load_catalog(&args.model)?;
    let config = load_config(&args.model)?;
    let bot = Chatbot::new(catalog, config)?;

    let session = match args.seed {
        Some(seed) => ChatSession::seeded(seed),
        None => ChatSession::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_chat(&bot, session, stdin.lock(), stdout.lock())?;

    if cli_args.verbosity() > 1 {
        output_result("Chat finished", &summary, cli_args)?;
    }
    Ok(())
}

/// Drive a conversation over any line-based input and output.
///
/// Blank lines are skipped. The loop stops on end of input or when the user
/// says goodbye.
pub fn run_chat<B: BufRead, W: Write>(
    bot: &Chatbot,
    mut session: ChatSession,
    mut input: B,
    mut output: W,
) -> Result<ChatSummary> {
    writeln!(output, "{WELCOME}")?;

    let mut turns = 0;
    let mut ended_by_user = false;
    let mut line = String::new();
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let outcome = session.turn(bot, text)?;
        turns += 1;
        writeln!(output, "Chatbot: {}", outcome.reply)?;

        if outcome.ended {
            writeln!(output, "{FAREWELL}")?;
            ended_by_user = true;
            break;
        }
    }

    Ok(ChatSummary {
        session_id: session.id().to_string(),
        turns,
        ended_by_user,
    })
}

/// Classify a single message.
fn classify(args: ClassifyArgs, cli_args: &ConfabArgs) -> Result<()> {
    let catalog = load_catalog(&args.model)?;
    let config = load_config(&args.model)?;
    let classifier = intent_classifier::fit_classifier(&catalog, config)?;

    let prediction = classifier.classify(&args.text)?;
    let scores = if args.all_scores {
        let mut scores: Vec<IntentScore> = classifier
            .class_probabilities(&args.text)?
            .into_iter()
            .map(|(tag, probability)| IntentScore { tag, probability })
            .collect();
        scores.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        Some(scores)
    } else {
        None
    };

    let bot = Chatbot::with_classifier(catalog, Box::new(classifier));
    let mut selector = match args.seed {
        Some(seed) => ResponseSelector::seeded(seed),
        None => ResponseSelector::from_entropy(),
    };
    let reply = bot.reply(&args.text, &mut selector)?;

    output_result(
        "Classification",
        &ClassificationResult {
            text: args.text,
            tag: prediction.tag,
            confidence: prediction.confidence,
            fallback: prediction.fallback,
            reply: reply.text,
            scores,
        },
        cli_args,
    )
}

/// Validate a catalog file.
fn validate(args: ValidateArgs, cli_args: &ConfabArgs) -> Result<()> {
    let model = ModelArgs {
        catalog: args.catalog.clone(),
        config: None,
    };
    let catalog = load_catalog(&model)?;
    catalog.validate()?;
    catalog.ensure_trainable()?;

    let source = args
        .catalog
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    output_result(
        "Catalog is valid",
        &CatalogValidationResult {
            source,
            intents: catalog.len(),
            patterns: catalog.pattern_count(),
            responses: catalog
                .intents()
                .iter()
                .map(|intent| intent.responses.len())
                .sum(),
            tags: catalog.tags().map(str::to_string).collect(),
        },
        cli_args,
    )
}
