use client_core::CaptureKind;
use shared::domain::PatientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Navigate(String),
    Tab(usize),
    SignIn { name: Option<String>, role: Option<String> },
    SignOut,
    SwitchUser,
    TogglePatients,
    PickPatient(PatientId),
    ToggleQuickActions,
    Capture(CaptureKind),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  go <path>              navigate to a path
  tab <1-5>              open a navigation tab
  login [name] [role]    sign in (defaults come from configuration)
  logout                 sign out
  switch                 open the switch-user prompt
  patients               toggle the patient selector
  pick <id>              choose a patient from the open selector
  fab                    toggle the quick-action menu
  capture <kind>         voice | photo | micro-note | template
  show                   redraw the current frame
  help                   this text
  quit                   exit";

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(ConsoleCommand::Show);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "go" | "nav" => {
            let path = parts.next().ok_or("usage: go <path>")?;
            ConsoleCommand::Navigate(path.to_string())
        }
        "tab" => {
            let index = parts
                .next()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|index| (1..=5).contains(index))
                .ok_or("usage: tab <1-5>")?;
            ConsoleCommand::Tab(index - 1)
        }
        "login" | "signin" => ConsoleCommand::SignIn {
            name: parts.next().map(|name| name.replace('_', " ")),
            role: parts.next().map(str::to_string),
        },
        "logout" | "signout" => ConsoleCommand::SignOut,
        "switch" => ConsoleCommand::SwitchUser,
        "patients" => ConsoleCommand::TogglePatients,
        "pick" => {
            let id = parts
                .next()
                .and_then(|v| v.parse::<i64>().ok())
                .ok_or("usage: pick <id>")?;
            ConsoleCommand::PickPatient(PatientId(id))
        }
        "fab" | "actions" => ConsoleCommand::ToggleQuickActions,
        "capture" => {
            let slug = parts.next().ok_or("usage: capture <kind>")?;
            let kind = CaptureKind::from_slug(slug)
                .ok_or_else(|| format!("unknown capture kind '{slug}'"))?;
            ConsoleCommand::Capture(kind)
        }
        "show" => ConsoleCommand::Show,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_and_widget_commands() {
        assert_eq!(
            parse_command("go /safety-environmental"),
            Ok(ConsoleCommand::Navigate("/safety-environmental".to_string()))
        );
        assert_eq!(parse_command("tab 2"), Ok(ConsoleCommand::Tab(1)));
        assert_eq!(parse_command("pick 7"), Ok(ConsoleCommand::PickPatient(PatientId(7))));
        assert_eq!(
            parse_command("capture micro-note"),
            Ok(ConsoleCommand::Capture(CaptureKind::MicroNote))
        );
        assert_eq!(parse_command("  "), Ok(ConsoleCommand::Show));
    }

    #[test]
    fn login_name_underscores_become_spaces() {
        assert_eq!(
            parse_command("login Alex_Rivera Nurse"),
            Ok(ConsoleCommand::SignIn {
                name: Some("Alex Rivera".to_string()),
                role: Some("Nurse".to_string()),
            })
        );
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_command("tab 9").is_err());
        assert!(parse_command("pick seven").is_err());
        assert!(parse_command("capture video").is_err());
        assert!(parse_command("go").is_err());
        assert!(parse_command("dance").is_err());
    }
}
