// cli.rs - Command-line front end and interactive workshop shell

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

use crate::catalog::{LabModule, ReplyStance, ToolId};
use crate::config::LabConfig;
use crate::prompt_engine::{LabResult, PromptLab, ToolRequest};
use crate::render;
use crate::session::{AppTab, ModuleSession, Workshop};

#[derive(Parser)]
#[command(name = "prompt-lab")]
#[command(version)]
#[command(
    about = "Interactive prompt-engineering workshop for workplace email",
    long_about = None
)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show engine mode, model and API key status
    Status,
    /// List the four modules and their tools
    #[clap(visible_alias = "ls")]
    Modules,
    /// Show the lesson for a tool
    Theory {
        /// Tool id (reply, subject, summary, tone, empathy, clarity, shield, escalation, root-cause, meeting, tasks, ooo)
        tool: ToolId,
    },
    /// Show the assembled prompt without calling the model
    Blueprint {
        tool: ToolId,
        /// Reply stance: Agree, Decline or Negotiate
        #[arg(short, long, default_value_t = ReplyStance::Agree)]
        stance: ReplyStance,
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Run a tool on text, a file, or stdin
    Run {
        tool: ToolId,
        /// Reply stance: Agree, Decline or Negotiate
        #[arg(short, long, default_value_t = ReplyStance::Agree)]
        stance: ReplyStance,
        /// Read the input text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Start the interactive workshop
    Shell,
}

pub async fn execute(cli: Cli) -> Result<(), String> {
    let config = LabConfig::from_env().map_err(|e| e.to_string())?;
    let lab = PromptLab::new(&config).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Status => {
            if cli.json {
                let status = serde_json::json!({
                    "mode": lab.mode(),
                    "label": lab.mode().label(),
                    "model": config.model,
                    "apiBase": config.api_base,
                    "timeoutSecs": config.timeout.as_secs(),
                    "apiKey": config.api_key_masked(),
                });
                print_json(&status)
            } else {
                print!("{}", render::status(lab.mode(), &config));
                Ok(())
            }
        }
        Commands::Modules => {
            if cli.json {
                let modules: Vec<_> = LabModule::ALL
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "id": m.id(),
                            "title": m.title(),
                            "tools": m.tools().iter().map(|t| t.id()).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                print_json(&modules)
            } else {
                print!("{}", render::overview());
                Ok(())
            }
        }
        Commands::Theory { tool } => {
            print!("{}", render::theory(tool));
            Ok(())
        }
        Commands::Blueprint { tool, stance, text } => {
            let request = ToolRequest::new(tool, text.join(" ")).with_stance(stance);
            let assembled = lab.preview(&request);
            if cli.json {
                print_json(&assembled.blueprint)
            } else {
                print!("{}", render::blueprint(&assembled.blueprint));
                Ok(())
            }
        }
        Commands::Run {
            tool,
            stance,
            file,
            text,
        } => {
            let input = read_input(file, text).await?;
            let result = run_once(&lab, tool, stance, input).await?;
            if cli.json {
                print_json(&result)
            } else {
                print!("{}", render::lab_result(&result));
                Ok(())
            }
        }
        Commands::Shell => shell(&lab, cli.json).await,
    }
}

async fn read_input(file: Option<PathBuf>, text: Vec<String>) -> Result<String, String> {
    if let Some(path) = file {
        return tokio::fs::read_to_string(&path)
            .await
            .map(|content| content.trim_end().to_string())
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e));
    }

    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    Ok(buffer.trim_end().to_string())
}

/// One-shot run through the same gate the shell uses
async fn run_once(
    lab: &PromptLab,
    tool: ToolId,
    stance: ReplyStance,
    input: String,
) -> Result<LabResult, String> {
    let mut session = ModuleSession::new(tool.spec().module);
    session.select_tool(tool);
    session.set_stance(stance);
    session.set_input(input);

    let request = session
        .begin_run()
        .ok_or_else(|| "Nothing to run: input is empty".to_string())?;

    lab.run(&request).await.map_err(|e| e.to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

const SHELL_HELP: &str = "\
Commands:
  overview              show all modules
  open <module>         open drafting, tone, crisis or admin
  tool <id>             switch tool within the open module
  theory | lab          switch view
  input <text>          set the lab input
  stance <stance>       Agree, Decline or Negotiate (reply tool)
  run                   run the active tool
  show                  redraw the current view (state as JSON with --json)
  help | quit";

async fn shell(lab: &PromptLab, json: bool) -> Result<(), String> {
    let mut workshop = Workshop::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("AI Mastery | {}", lab.mode().label());
    println!("{}\n", SHELL_HELP);
    print!("{}", render::overview());

    loop {
        let prompt = match workshop.tab() {
            AppTab::Overview => "overview".to_string(),
            AppTab::Module(module) => module.id().to_string(),
        };
        print!("{}> ", prompt);
        let _ = std::io::stdout().flush();

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| format!("Failed to read stdin: {}", e))?
        else {
            break;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", SHELL_HELP),
            "overview" => {
                workshop.select_tab(AppTab::Overview);
                print!("{}", render::overview());
            }
            "open" => match rest.parse::<LabModule>() {
                Ok(module) => {
                    workshop.select_tab(AppTab::Module(module));
                    if let Some(session) = workshop.session() {
                        print!("{}", render::session(session));
                    }
                }
                Err(e) => println!("{}", e),
            },
            "show" if json => {
                if let Err(e) = print_json(&workshop) {
                    println!("{}", e);
                }
            }
            _ => match workshop.session_mut() {
                Some(session) => session_command(lab, session, command, rest, json).await,
                None => println!("Open a module first: open <drafting|tone|crisis|admin>"),
            },
        }
    }

    Ok(())
}

async fn session_command(
    lab: &PromptLab,
    session: &mut ModuleSession,
    command: &str,
    rest: &str,
    json: bool,
) {
    match command {
        "tool" => match rest.parse::<ToolId>() {
            Ok(tool) if tool.spec().module == session.module => session.select_tool(tool),
            Ok(tool) => {
                println!("'{}' belongs to module '{}'", tool, tool.spec().module);
                return;
            }
            Err(e) => {
                println!("{}", e);
                return;
            }
        },
        "theory" => session.show_theory(),
        "lab" => session.open_lab(),
        "input" => {
            session.set_input(rest);
            session.open_lab();
        }
        "stance" => match rest.parse::<ReplyStance>() {
            Ok(stance) => session.set_stance(stance),
            Err(e) => {
                println!("{}", e);
                return;
            }
        },
        "run" => {
            session.open_lab();
            match session.begin_run() {
                Some(request) => {
                    let outcome = lab.run(&request).await;
                    session.finish_run(request.tool, outcome);
                }
                None => {
                    println!("Nothing to run: set some input first");
                    return;
                }
            }
            if json {
                // A failed run keeps the previous result, so the error goes first
                let printed = match (&session.last_error, &session.result) {
                    (Some(error), _) => print_json(&serde_json::json!({ "error": error })),
                    (None, Some(result)) => print_json(result),
                    (None, None) => Ok(()),
                };
                if let Err(e) = printed {
                    println!("{}", e);
                }
                return;
            }
        }
        "show" => {}
        _ => {
            println!("Unknown command '{}'. Type 'help'.", command);
            return;
        }
    }

    print!("{}", render::session(session));
}
