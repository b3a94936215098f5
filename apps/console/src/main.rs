use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    patient::load_header, HttpPatientDirectory, Location, PatientHeaderState, SessionStore, Shell,
    ShellConfig,
};
use shared::domain::{PatientId, User, UserId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{parse_command, ConsoleCommand, HELP};
use config::{
    load_settings, normalize_api_base_url, validate_settings, ConsoleSettings, DEFAULT_CONFIG_FILE,
};
use render::{render_frame, render_toast};

#[derive(Parser, Debug)]
#[command(name = "care-companion", about = "Terminal front end for the Care Companion dashboard")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    patient: Option<i64>,
    #[arg(long)]
    start: Option<String>,
    /// Start without the seeded caregiver session.
    #[arg(long)]
    signed_out: bool,
    /// Run these commands instead of reading stdin.
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
}

struct Console {
    shell: Shell,
    directory: HttpPatientDirectory,
    settings: ConsoleSettings,
    header: Option<(PatientId, PatientHeaderState)>,
}

impl Console {
    async fn refresh_header(&mut self) {
        let frame = self.shell.frame();
        if !frame.chrome.patient_header {
            return;
        }
        let current = frame.selected_patient;
        if matches!(&self.header, Some((loaded, _)) if *loaded == current) {
            return;
        }
        self.header = Some((current, PatientHeaderState::Loading));
        let state = load_header(&self.directory, current).await;
        self.header = Some((current, state));
    }

    fn seeded_user(&self, name: Option<String>, role: Option<String>) -> User {
        User::new(
            UserId(self.settings.user_id),
            name.unwrap_or_else(|| self.settings.user_name.clone()),
            role.unwrap_or_else(|| self.settings.user_role.clone()).as_str(),
        )
    }

    /// Returns `false` once the user asked to quit.
    fn handle(&mut self, command: ConsoleCommand) -> bool {
        match command {
            ConsoleCommand::Navigate(path) => {
                self.shell.navigate(path);
            }
            ConsoleCommand::Tab(index) => {
                let target = self
                    .shell
                    .frame()
                    .tab_bar
                    .and_then(|bar| bar.tabs.get(index).map(|tab| tab.path.clone()));
                match target {
                    Some(path) => {
                        self.shell.navigate(path);
                    }
                    None => println!("tabs are not shown here"),
                }
            }
            ConsoleCommand::SignIn { name, role } => {
                let user = self.seeded_user(name, role);
                self.shell.sign_in(user);
            }
            ConsoleCommand::SignOut => {
                self.shell.sign_out();
            }
            ConsoleCommand::SwitchUser => self.shell.request_user_switch(),
            ConsoleCommand::TogglePatients => {
                self.shell.toggle_patient_selector();
            }
            ConsoleCommand::PickPatient(patient_id) => {
                if let Err(err) = self.shell.select_patient(patient_id) {
                    println!("{err}");
                }
            }
            ConsoleCommand::ToggleQuickActions => {
                self.shell.toggle_quick_actions();
            }
            ConsoleCommand::Capture(kind) => {
                if let Err(err) = self.shell.select_quick_action(kind) {
                    println!("{err}");
                }
            }
            ConsoleCommand::Show => {}
            ConsoleCommand::Help => println!("{HELP}"),
            ConsoleCommand::Quit => return false,
        }
        true
    }

    async fn draw(&mut self) {
        self.refresh_header().await;
        let frame = self.shell.frame();
        let header = self.header.as_ref().map(|(_, state)| state);
        print!("{}", render_frame(&frame, header));
        for toast in self.shell.drain_toasts() {
            println!("{}", render_toast(&toast));
        }
    }

    async fn run_line(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Ok(command) => {
                let keep_going = self.handle(command);
                if keep_going {
                    self.draw().await;
                }
                keep_going
            }
            Err(message) => {
                println!("{message}");
                true
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(url) = args.api_url {
        settings.api_base_url = normalize_api_base_url(&url);
    }
    if let Some(patient) = args.patient {
        settings.initial_patient = patient;
    }
    if let Some(start) = args.start {
        settings.start_location = start;
    }
    validate_settings(&settings)?;

    let directory = HttpPatientDirectory::new(&settings.api_base_url)
        .with_context(|| format!("invalid api base url '{}'", settings.api_base_url))?;

    let seeded = (!args.signed_out).then(|| {
        User::new(
            UserId(settings.user_id),
            settings.user_name.clone(),
            settings.user_role.as_str(),
        )
    });
    let session = SessionStore::new(seeded, PatientId(settings.initial_patient));
    let shell = Shell::new(
        session,
        ShellConfig {
            toast_limit: settings.toast_limit,
            ..ShellConfig::default()
        },
        Location::new(settings.start_location.clone()),
    );
    tracing::info!(api = %settings.api_base_url, location = %shell.location(), "console started");

    let mut console = Console {
        shell,
        directory,
        settings,
        header: None,
    };
    console.draw().await;

    if !args.commands.is_empty() {
        for line in &args.commands {
            println!("> {line}");
            if !console.run_line(line).await {
                break;
            }
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if !console.run_line(&line).await {
            break;
        }
    }

    Ok(())
}
