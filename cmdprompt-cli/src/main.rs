use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cmdprompt::utils::*;
use serde_json::json;
use std::io::{self, StdinLock, Stdout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type StdTerminal = Terminal<'static, StdinLock<'static>, Stdout>;

#[derive(Parser, Debug)]
#[command(name = "cmdprompt", about = "Interactive prompt playground")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log verbosity, repeat for more (-v debug, -vv trace). RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print accepted values as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through the prompt demos (default)
    Demo,
    /// Ask a single question and print the answer
    Ask(AskArgs),
}

#[derive(Args, Debug)]
struct AskArgs {
    /// Text shown next to the input area
    label: String,

    #[arg(long, value_enum, default_value_t = KindArg::Text)]
    kind: KindArg,

    /// Choice entry, repeat for each option (choice kind)
    #[arg(long = "choice")]
    choices: Vec<String>,

    /// Description line printed above the prompt, repeatable
    #[arg(long = "describe")]
    description: Vec<String>,

    /// Accept an empty answer as "no value"
    #[arg(long)]
    optional: bool,

    /// Answer up front; the prompt only shows if it is invalid
    #[arg(long)]
    initial: Option<String>,

    /// Value used for an empty answer
    #[arg(long = "default")]
    default_value: Option<String>,

    /// Validate text answers against this pattern
    #[arg(long)]
    regex: Option<String>,

    /// Replace the validator's error message
    #[arg(long)]
    invalid_message: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum KindArg {
    Text,
    YesNo,
    Choice,
}

impl From<KindArg> for PromptKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Text => PromptKind::Text,
            KindArg::YesNo => PromptKind::YesNo,
            KindArg::Choice => PromptKind::Choice,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let styles = if cli.no_color {
        Styles::plain()
    } else {
        Styles::default()
    };
    let styles = Styles::install(styles).map_err(|_| anyhow!("styles already installed"))?;
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout(), styles);

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&mut terminal, cli.json),
        Command::Ask(args) => {
            let value = ask_once(&mut terminal, args)?;
            show(&mut terminal, &value, cli.json)
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn ask_once(terminal: &mut StdTerminal, args: AskArgs) -> Result<PromptValue> {
    debug!(?args, "one-shot prompt");
    let mut request = PromptRequest::new(args.label)
        .kind(args.kind.into())
        .description(args.description)
        .optional(args.optional)
        .maybe_initial_input(args.initial);
    if !args.choices.is_empty() {
        request = request.choices(args.choices.into_iter().collect::<ChoiceList>());
    }
    if let Some(default) = args.default_value {
        request = request.default_value(default);
    }
    if let Some(pattern) = args.regex {
        request = request.validator(Validator::regex(&pattern)?);
    }
    if let Some(message) = args.invalid_message {
        request = request.invalid_message(message);
    }
    terminal.ask(request).context("prompt failed")
}

fn show(terminal: &mut StdTerminal, value: &PromptValue, as_json: bool) -> Result<()> {
    let line = if as_json {
        serde_json::to_string(value)?
    } else {
        value.to_string()
    };
    terminal.printer().lines(&[line])?;
    Ok(())
}

fn run_demo(terminal: &mut StdTerminal, as_json: bool) -> Result<()> {
    let menu: ChoiceList = [
        ("Format and print methods", json!("print")),
        ("Text prompts", json!("text")),
        ("Yes/no prompts", json!("yes_no")),
        ("Choice prompts", json!("choice")),
        ("Exit", json!("exit")),
    ]
    .into_iter()
    .collect();

    loop {
        let picked = terminal.ask(
            PromptRequest::choice("Choose a demo", menu.clone())
                .describe("Select one of the following demos to run."),
        )?;
        let demo = picked.as_payload().and_then(|p| p.as_str());
        debug!(demo, "demo selected");
        match demo {
            Some("print") => print_demo(terminal)?,
            Some("text") => text_demo(terminal, as_json)?,
            Some("yes_no") => yes_no_demo(terminal, as_json)?,
            Some("choice") => choice_demo(terminal, as_json)?,
            _ => break,
        }
    }
    info!("demo finished");
    Ok(())
}

fn print_demo(terminal: &mut StdTerminal) -> Result<()> {
    let styles = terminal.printer().styles();
    let printer = terminal.printer();
    printer.multiline(&["MULTILINE line 1", "line 2", "line 3"], None, None, true, false)?;
    printer.error(&["ERROR line 1", "line 2"])?;
    printer.warning(&["WARNING line 1", "line 2"])?;
    printer.success(&["SUCCESS line 1", "line 2"])?;
    printer.info(&["INFO line 1", "line 2"])?;
    printer.blank()?;

    let samples = [
        format_prompt_text("Normal Prompt", PromptKind::Text, None, styles),
        format_prompt_text(
            "Prompt w/ Default",
            PromptKind::Text,
            Some(&PromptValue::from("default")),
            styles,
        ),
        format_prompt_text(
            "Yes/no w/ Default",
            PromptKind::YesNo,
            Some(&PromptValue::Bool(true)),
            styles,
        ),
    ];
    printer.lines(&samples)?;
    printer.blank()?;

    let levels: Vec<String> = (0..5)
        .map(|i| indent(&format!("Indent Level {}", i), i))
        .collect();
    printer.multiline(&levels, None, None, false, false)?;
    printer.blank()?;
    Ok(())
}

fn text_demo(terminal: &mut StdTerminal, as_json: bool) -> Result<()> {
    let name = terminal.ask(PromptRequest::new("Your name"))?;
    let nickname = terminal.ask(
        PromptRequest::new("Nickname")
            .describe("Leave blank to skip.")
            .optional(true),
    )?;
    let port = terminal.ask(
        PromptRequest::new("Port")
            .default_value("8080")
            .validator(RegexValidator::with_message(
                r"^\d{1,5}$",
                "Ports are numbers.",
                true,
            )?),
    )?;
    for value in [name, nickname, port] {
        show(terminal, &value, as_json)?;
    }
    Ok(())
}

fn yes_no_demo(terminal: &mut StdTerminal, as_json: bool) -> Result<()> {
    let answer = terminal.ask(PromptRequest::yes_no("Do you like Rust?").default_value("y"))?;
    show(terminal, &answer, as_json)?;
    let strict = terminal.ask(
        PromptRequest::yes_no("Really?").invalid_message("Only y, yes, n or no will do."),
    )?;
    show(terminal, &strict, as_json)
}

fn choice_demo(terminal: &mut StdTerminal, as_json: bool) -> Result<()> {
    let colors: ChoiceList = ["Red", "Green", "Blue"].into_iter().collect();
    let index = terminal.ask(PromptRequest::choice("Favorite color", colors.clone()))?;
    show(terminal, &index, as_json)?;
    if let Some(label) = index.as_index().and_then(|i| colors.get(i)).map(Choice::label) {
        terminal.printer().success(&[format!("You picked {}", label)])?;
    }
    Ok(())
}
