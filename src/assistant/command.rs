use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use super::{Assistant, AssistantError};

/// Pipes the prompt to an external program and returns its stdout.
///
/// The system instruction is exported as `HEMOLINK_SYSTEM_INSTRUCTION`.
#[derive(Debug, Clone)]
pub struct CommandAssistant {
    program: String,
    args: Vec<String>,
}

impl CommandAssistant {
    /// Parses a shell-style command line such as `llm -m small`.
    pub fn parse(command_line: &str) -> Result<Self, AssistantError> {
        let mut words = shell_words::split(command_line)
            .map_err(|err| AssistantError::Backend(err.to_string()))?
            .into_iter();
        let program = words.next().ok_or(AssistantError::NotConfigured)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

impl Assistant for CommandAssistant {
    fn ask(&self, prompt: &str, system_instruction: &str) -> Result<String, AssistantError> {
        debug!(program = %self.program, "querying assistant command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("HEMOLINK_SYSTEM_INSTRUCTION", system_instruction)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            // A backend may exit before reading its input; its status decides.
            if let Err(err) = stdin.write_all(prompt.as_bytes()) {
                if err.kind() != ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
            }
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AssistantError::Backend(format!(
                "`{}` exited with {}",
                self.program, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_arguments() {
        let assistant = CommandAssistant::parse("llm -m 'small model'").unwrap();
        assert_eq!(assistant.program, "llm");
        assert_eq!(assistant.args, vec!["-m".to_string(), "small model".to_string()]);
    }

    #[test]
    fn empty_command_is_not_configured() {
        assert!(matches!(
            CommandAssistant::parse("   "),
            Err(AssistantError::NotConfigured)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn echoes_through_cat() {
        let assistant = CommandAssistant::parse("cat").unwrap();
        let reply = assistant.ask("  drink water first \n", "sys").unwrap();
        assert_eq!(reply, "drink water first");
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_a_backend_error() {
        let assistant = CommandAssistant::parse("false").unwrap();
        assert!(matches!(
            assistant.ask("hi", "sys"),
            Err(AssistantError::Backend(_))
        ));
    }
}
