//! User-supplied checker arguments
//!
//! Accepted as a TOML array of strings or as a single string that is split
//! with POSIX shell-word rules. Anything else is a configuration error.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TcError, TcResult};

/// Extra arguments appended to the checker invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtraArgs {
    #[default]
    None,
    /// A command-line fragment, tokenized on use
    Line(String),
    /// Pre-split arguments, used verbatim
    List(Vec<String>),
}

impl ExtraArgs {
    /// Tokenize into discrete arguments, preserving order.
    pub fn tokens(&self) -> TcResult<Vec<String>> {
        match self {
            ExtraArgs::None => Ok(Vec::new()),
            ExtraArgs::List(args) => Ok(args.clone()),
            ExtraArgs::Line(line) => {
                shell_words::split(line).map_err(|e| TcError::InvalidExtraArgs {
                    message: format!("cannot split {:?}: {}", line, e),
                })
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ExtraArgs::None)
    }
}

impl From<&str> for ExtraArgs {
    fn from(line: &str) -> Self {
        ExtraArgs::Line(line.to_string())
    }
}

impl From<Vec<String>> for ExtraArgs {
    fn from(args: Vec<String>) -> Self {
        ExtraArgs::List(args)
    }
}

impl Serialize for ExtraArgs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExtraArgs::None => serializer.serialize_none(),
            ExtraArgs::Line(line) => serializer.serialize_str(line),
            ExtraArgs::List(args) => args.serialize(serializer),
        }
    }
}

struct ExtraArgsVisitor;

impl<'de> Visitor<'de> for ExtraArgsVisitor {
    type Value = ExtraArgs;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("either an array of strings or a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ExtraArgs::Line(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ExtraArgs::None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ExtraArgs::None)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut args = Vec::new();
        while let Some(arg) = seq.next_element::<String>()? {
            args.push(arg);
        }
        Ok(ExtraArgs::List(args))
    }
}

impl<'de> Deserialize<'de> for ExtraArgs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ExtraArgsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        extra_args: ExtraArgs,
    }

    #[test]
    fn none_yields_no_tokens() {
        assert!(ExtraArgs::None.tokens().unwrap().is_empty());
    }

    #[test]
    fn line_is_split_on_whitespace() {
        let args = ExtraArgs::from("--suppress-non-critical --force-hashing");
        assert_eq!(
            args.tokens().unwrap(),
            vec!["--suppress-non-critical", "--force-hashing"]
        );
    }

    #[test]
    fn line_honors_quotes_and_escapes() {
        let args = ExtraArgs::from(r#"--ignore "spec/some dir" --error-white-list 'a b' c\ d"#);
        assert_eq!(
            args.tokens().unwrap(),
            vec!["--ignore", "spec/some dir", "--error-white-list", "a b", "c d"]
        );
    }

    #[test]
    fn unbalanced_quote_is_configuration_error() {
        let err = ExtraArgs::from("--ignore \"unterminated").tokens().unwrap_err();
        assert!(matches!(err, TcError::InvalidExtraArgs { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn list_is_used_verbatim() {
        let args = ExtraArgs::from(vec!["a b".to_string(), "--x".to_string()]);
        assert_eq!(args.tokens().unwrap(), vec!["a b", "--x"]);
    }

    #[test]
    fn toml_string_and_array_forms() {
        let line: Holder = toml::from_str(r#"extra_args = "--a --b""#).unwrap();
        assert_eq!(line.extra_args, ExtraArgs::Line("--a --b".to_string()));

        let list: Holder = toml::from_str(r#"extra_args = ["--a", "--b"]"#).unwrap();
        assert_eq!(
            list.extra_args,
            ExtraArgs::List(vec!["--a".to_string(), "--b".to_string()])
        );

        let absent: Holder = toml::from_str("").unwrap();
        assert!(absent.extra_args.is_none());
    }

    #[test]
    fn toml_other_types_are_rejected() {
        let err = toml::from_str::<Holder>("extra_args = 3").unwrap_err();
        assert!(err.to_string().contains("array of strings or a string"));

        assert!(toml::from_str::<Holder>("extra_args = [1, 2]").is_err());
        assert!(toml::from_str::<Holder>("extra_args = true").is_err());
    }
}
