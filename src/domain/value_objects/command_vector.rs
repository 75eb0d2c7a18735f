//! Command Vector Value Object
//!
//! An argv for the checker. Built once per run and never mutated afterwards.

use std::fmt;

/// Program plus discrete arguments, passed to the OS without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    program: String,
    args: Vec<String>,
}

impl CommandVector {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The binary to execute (first argv token)
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Everything after the program
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argv including the program
    pub fn to_vec(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(1 + self.args.len());
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    pub fn len(&self) -> usize {
        1 + self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `token` appears anywhere in argv
    pub fn contains(&self, token: &str) -> bool {
        self.program == token || self.args.iter().any(|a| a == token)
    }

    /// Number of times `token` appears in the arguments
    pub fn count(&self, token: &str) -> usize {
        self.args.iter().filter(|a| *a == token).count()
    }

    /// Argument following the first occurrence of `flag`
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        let idx = self.args.iter().position(|a| a == flag)?;
        self.args.get(idx + 1).map(String::as_str)
    }
}

/// Shell-quoted rendering, for logs only.
impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_words::join(self.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommandVector {
        CommandVector::new(
            "srb",
            vec![
                "tc".to_string(),
                "--dir".to_string(),
                ".".to_string(),
                "app/some file.rb".to_string(),
            ],
        )
    }

    #[test]
    fn to_vec_starts_with_program() {
        let cmd = sample();
        assert_eq!(cmd.to_vec()[0], "srb");
        assert_eq!(cmd.len(), 5);
    }

    #[test]
    fn value_of_returns_following_token() {
        assert_eq!(sample().value_of("--dir"), Some("."));
        assert_eq!(sample().value_of("--color"), None);
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        assert_eq!(sample().to_string(), "srb tc --dir . 'app/some file.rb'");
    }
}
