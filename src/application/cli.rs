#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgGroup;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::application::quiz::help_text;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendName;
use crate::domain::models::Mentor;
use crate::domain::services::Meet;
use crate::domain::services::Sessions;
use crate::domain::services::SessionRecord;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_session(record: &SessionRecord) -> String {
    let mut res = format!(
        "- (ID: {}) {}, Topic: {}, Score: {}/{}",
        record.id,
        record.timestamp,
        record.quiz.topic,
        record.quiz.score(),
        record.quiz.history.len(),
    );

    if !record.quiz.current_question.is_empty() {
        let mut line = record
            .quiz
            .current_question
            .split('\n')
            .collect::<Vec<_>>()[0]
            .to_string();

        // Truncate on characters, not bytes. Model text is full of multi-byte
        // punctuation and a byte slice can land mid-character.
        if line.chars().count() >= 70 {
            line = format!("{}...", line.chars().take(67).collect::<String>());
        }
        res = format!("{res}, {line}");
    }

    return res;
}

async fn print_sessions_list() -> Result<()> {
    let mut sessions = Sessions::default()
        .list()
        .await?
        .iter()
        .map(|record| {
            return format_session(record);
        })
        .collect::<Vec<String>>();

    sessions.reverse();

    if sessions.is_empty() {
        println!("There are no sessions available. You should start your first quiz!");
    } else {
        println!("{}", sessions.join("\n"));
    }

    return Ok(());
}

fn format_mentor(mentor: &Mentor) -> String {
    return format!(
        "- (ID: {}) {}, {} at {}, {}",
        mentor.id, mentor.name, mentor.role, mentor.company, mentor.package
    );
}

fn print_mentor_profile(mentor: &Mentor) {
    println!("{}", Paint::new(&mentor.name).bold());
    println!("{} at {}, {}", mentor.role, mentor.company, mentor.package);
    println!("Skills: {}", mentor.skills);
    println!("{}", mentor.bio);
    println!("Photo: {}", mentor.image);
    println!(
        "Interview link: {}",
        Meet::link(&format!("Mock Interview with {}", mentor.name))
    );
}

async fn print_models_list() -> Result<()> {
    let backend_name = BackendName::parse(Config::get(ConfigKey::Backend));
    if backend_name.is_none() {
        bail!(format!(
            "Unknown backend {}",
            Config::get(ConfigKey::Backend)
        ));
    }

    let backend = BackendManager::get(backend_name.unwrap())?;
    let models = backend.list_models().await?;
    println!("{}", models.join("\n"));

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for IntelliPrep")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running IntelliPrep with environment variable RUST_LOG=intelliprep")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_mentors() -> Command {
    return Command::new("mentors")
        .about("Browse the mentor directory.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all mentors with their ids and roles."))
        .subcommand(
            Command::new("show")
                .about("Show a mentor's full profile by ID.")
                .arg(
                    clap::Arg::new("mentor-id")
                        .short('i')
                        .long("id")
                        .help("Mentor ID")
                        .value_parser(value_parser!(u32))
                        .required(true),
                ),
        );
}

fn subcommand_meet() -> Command {
    return Command::new("meet")
        .about("Print an instant meeting link for a virtual interview.")
        .arg(
            clap::Arg::new("title")
                .short('t')
                .long("title")
                .help("Meeting title.")
                .num_args(1),
        );
}

fn subcommand_models() -> Command {
    return Command::new("models")
        .about("Model helpers for the configured backend.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all models available on the backend."));
}

fn subcommand_sessions_delete() -> Command {
    return Command::new("delete")
        .about("Delete one or all quiz sessions.")
        .arg(
            clap::Arg::new("session-id")
                .short('i')
                .long("id")
                .help("Session ID")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("all")
                .long("all")
                .help("Delete all sessions.")
                .num_args(0),
        )
        .group(
            ArgGroup::new("delete-args")
                .args(["session-id", "all"])
                .required(true),
        );
}

fn subcommand_sessions() -> Command {
    return Command::new("sessions")
        .about("Manage saved quiz sessions.")
        .arg_required_else_help(true)
        .subcommand(Command::new("dir").about("Print the sessions cache directory path."))
        .subcommand(
            Command::new("list").about("List all saved sessions with their ids and topics."),
        )
        .subcommand(subcommand_sessions_delete());
}

fn arg_backend() -> Arg {
    return Arg::new(ConfigKey::Backend.to_string())
        .short('b')
        .long(ConfigKey::Backend.to_string())
        .env("INTELLIPREP_BACKEND")
        .num_args(1)
        .help(format!(
            "The initial backend hosting a model to converse with. [default: {}]",
            Config::default(ConfigKey::Backend)
        ))
        .value_parser(PossibleValuesParser::new(BackendName::VARIANTS));
}

fn arg_backend_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
        .long(ConfigKey::BackendHealthCheckTimeout.to_string())
        .env("INTELLIPREP_BACKEND_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(
            format!("Time to wait in milliseconds before timing out when doing a healthcheck for a backend. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout)),
        );
}

fn arg_backend_request_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendRequestTimeout.to_string())
        .long(ConfigKey::BackendRequestTimeout.to_string())
        .env("INTELLIPREP_BACKEND_REQUEST_TIMEOUT")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds before timing out a model request. [default: {}]",
            Config::default(ConfigKey::BackendRequestTimeout)
        ));
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("INTELLIPREP_MODEL")
        .num_args(1)
        .help("The model to use for generating questions and feedback. Defaults to a sensible model per backend if not set.");
}

fn arg_quiz_topic() -> Arg {
    return Arg::new(ConfigKey::QuizTopic.to_string())
        .short('t')
        .long("topic")
        .env("INTELLIPREP_QUIZ_TOPIC")
        .num_args(1)
        .help("The topic to quiz on. Prompted for interactively if not set.");
}

fn arg_quiz_document() -> Arg {
    return Arg::new(ConfigKey::QuizDocument.to_string())
        .short('d')
        .long("document")
        .env("INTELLIPREP_QUIZ_DOCUMENT")
        .num_args(1)
        .help("Path to a text document to summarize and quiz against.");
}

fn arg_session_id() -> Arg {
    return Arg::new(ConfigKey::SessionID.to_string())
        .short('i')
        .long("id")
        .num_args(1)
        .help("Resume a saved quiz session by ID.");
}

fn subcommand_quiz() -> Command {
    return Command::new("quiz")
        .about("Start or resume an adaptive quiz.")
        .arg(arg_quiz_topic())
        .arg(arg_quiz_document())
        .arg(arg_session_id());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") {
                return Paint::new(format!("QUIZ {line}")).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("intelliprep")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(subcommand_meet())
        .subcommand(subcommand_mentors())
        .subcommand(subcommand_models())
        .subcommand(subcommand_quiz())
        .subcommand(subcommand_sessions())
        .arg(arg_backend())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_backend_request_timeout())
        .arg(arg_model())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("INTELLIPREP_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiURL.to_string())
                .long(ConfigKey::GeminiURL.to_string())
                .env("INTELLIPREP_GEMINI_URL")
                .num_args(1)
                .help(format!(
                    "Gemini API URL when using the Gemini backend. [default: {}]",
                    Config::default(ConfigKey::GeminiURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiToken.to_string())
                .long(ConfigKey::GeminiToken.to_string())
                .env("INTELLIPREP_GEMINI_TOKEN")
                .num_args(1)
                .help("Gemini API token when using the Gemini backend.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OllamaURL.to_string())
                .long(ConfigKey::OllamaURL.to_string())
                .env("INTELLIPREP_OLLAMA_URL")
                .num_args(1)
                .help(format!(
                    "Ollama API URL when using the Ollama backend. [default: {}]",
                    Config::default(ConfigKey::OllamaURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiURL.to_string())
                .long(ConfigKey::OpenAiURL.to_string())
                .env("INTELLIPREP_OPENAI_URL")
                .num_args(1)
                .help(format!("OpenAI API URL when using the OpenAI backend. This can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::OpenAiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiToken.to_string())
                .long(ConfigKey::OpenAiToken.to_string())
                .env("INTELLIPREP_OPENAI_TOKEN")
                .num_args(1)
                .help("OpenAI API token when using the OpenAI backend.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::QuizInitialStep.to_string())
                .long(ConfigKey::QuizInitialStep.to_string())
                .env("INTELLIPREP_QUIZ_INITIAL_STEP")
                .num_args(1)
                .help(format!(
                    "The step number a fresh quiz starts from. [default: {}]",
                    Config::default(ConfigKey::QuizInitialStep)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::QuizMaxSteps.to_string())
                .long(ConfigKey::QuizMaxSteps.to_string())
                .env("INTELLIPREP_QUIZ_MAX_STEPS")
                .num_args(1)
                .help(format!(
                    "The number of answered questions that completes a quiz. [default: {}]",
                    Config::default(ConfigKey::QuizMaxSteps)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::QuizTopics.to_string())
                .long(ConfigKey::QuizTopics.to_string())
                .env("INTELLIPREP_QUIZ_TOPICS")
                .num_args(1)
                .help(format!(
                    "Comma separated list of topics a quiz can be started on. [default: {}]",
                    Config::default(ConfigKey::QuizTopics)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("INTELLIPREP_USERNAME")
                .num_args(1)
                .help("Your name, shown in the quiz transcript.")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("intelliprep/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("meet", subcmd_matches)) => {
            let title = subcmd_matches
                .get_one::<String>("title")
                .map(|e| return e.to_string())
                .unwrap_or_default();
            println!("{}", Meet::link(&title));
            return Ok(false);
        }
        Some(("mentors", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", _)) => {
                let mentors = Mentor::directory()
                    .iter()
                    .map(|mentor| {
                        return format_mentor(mentor);
                    })
                    .collect::<Vec<String>>();
                println!("{}", mentors.join("\n"));
                return Ok(false);
            }
            Some(("show", show_matches)) => {
                let id = show_matches.get_one::<u32>("mentor-id").unwrap();
                match Mentor::find(*id) {
                    Some(mentor) => print_mentor_profile(&mentor),
                    None => bail!(format!("No mentor found for id {id}")),
                }
                return Ok(false);
            }
            _ => {
                subcommand_mentors().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("models", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", _)) => {
                Config::load(build(), vec![&matches]).await?;
                print_models_list().await?;
                return Ok(false);
            }
            _ => {
                subcommand_models().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("quiz", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("sessions", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("dir", _)) => {
                let dir = Sessions::default().cache_dir.to_string_lossy().to_string();
                println!("{dir}");
                return Ok(false);
            }
            Some(("list", _)) => {
                print_sessions_list().await?;
                return Ok(false);
            }
            Some(("delete", delete_matches)) => {
                if let Some(session_id) = delete_matches.get_one::<String>("session-id") {
                    Sessions::default().delete(session_id).await?;
                    println!("Deleted session {session_id}");
                } else if delete_matches.get_one::<bool>("all").is_some() {
                    Sessions::default().delete_all().await?;
                    println!("Deleted all sessions");
                } else {
                    subcommand_sessions_delete().print_long_help()?;
                }
                return Ok(false);
            }
            _ => {
                subcommand_sessions().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
