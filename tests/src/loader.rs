//! Loader for fixtures files.
//!
//! Parses `.len` files with step markers (`--# step_name`). Each step body is
//! one JSON value:
//!
//! - a string is text,
//! - an array is a sequence,
//! - `{"bytes": "..."}` or `{"bytes": [..]}` is a byte string,
//! - anything else (null, numbers, booleans) is passed through so scenarios
//!   can check how non-length values are classified.
//!
//! A step may override the scenario's bounds with `-- @param $min_length = N`
//! and `-- @param $max_length = N`. Any other parameter is a parse error.

use std::collections::HashMap;
use std::path::Path;

use extent_core::Value;

use crate::error::{ScenarioError, ScenarioResult};

/// One parsed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// The value handed to the validator.
    pub value: Value,
    /// Lower bound override.
    pub min_length: Option<usize>,
    /// Upper bound override.
    pub max_length: Option<usize>,
}

/// A parsed fixtures file.
#[derive(Debug, Clone)]
pub struct Fixtures {
    /// Map of step name to fixture.
    pub steps: HashMap<String, Fixture>,
    /// Steps in order of appearance.
    pub step_order: Vec<String>,
}

/// Overrides a step may declare with `-- @param`.
const PARAM_NAMES: [&str; 2] = ["min_length", "max_length"];

impl Fixtures {
    /// Parse a fixtures file from a string.
    pub fn parse(source: &str) -> ScenarioResult<Self> {
        Parser::new(Path::new("<inline>")).parse(source)
    }

    /// Load and parse a fixtures file from disk.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::file_read(path, e))?;
        Parser::new(path).parse(&source)
    }

    /// Get a fixture by step name.
    pub fn get_step(&self, name: &str) -> Option<&Fixture> {
        self.steps.get(name)
    }
}

/// Line-oriented parser; errors are tagged with the file they came from.
struct Parser<'p> {
    path: &'p Path,
}

impl<'p> Parser<'p> {
    fn new(path: &'p Path) -> Self {
        Self { path }
    }

    fn error(&self, message: impl Into<String>) -> ScenarioError {
        ScenarioError::fixture_parse(self.path, message)
    }

    fn parse(&self, source: &str) -> ScenarioResult<Fixtures> {
        let mut steps = HashMap::new();
        let mut step_order = Vec::new();
        let mut current_step: Option<String> = None;
        let mut current_content = String::new();
        let mut current_params: HashMap<String, String> = HashMap::new();

        for line in source.lines() {
            let trimmed = line.trim();

            if let Some(suffix) = trimmed.strip_prefix("--#") {
                if let Some(step_name) = current_step.take() {
                    let fixture = self.build_fixture(&step_name, &current_content, &current_params)?;
                    steps.insert(step_name, fixture);
                }

                let step_name = suffix.trim().to_string();
                if step_name.is_empty() {
                    return Err(self.error("empty step name after --#"));
                }
                if steps.contains_key(&step_name) {
                    return Err(self.error(format!("duplicate step '{}'", step_name)));
                }
                step_order.push(step_name.clone());
                current_step = Some(step_name);
                current_content = String::new();
                current_params = HashMap::new();
            } else if let Some(step) = current_step.as_deref() {
                // Parameter definition: -- @param $name = value
                if let Some(param_str) = trimmed.strip_prefix("-- @param ") {
                    let (name, value) = parse_param_def(param_str).ok_or_else(|| {
                        self.error(format!(
                            "step '{}': malformed parameter '{}', expected $name = value",
                            step, param_str
                        ))
                    })?;
                    if !PARAM_NAMES.contains(&name.as_str()) {
                        return Err(self.error(format!(
                            "step '{}': unknown parameter ${}, expected one of ${}",
                            step,
                            name,
                            PARAM_NAMES.join(", $")
                        )));
                    }
                    current_params.insert(name, value);
                } else if !trimmed.starts_with("--") {
                    // Content lines are kept verbatim; whitespace inside JSON strings matters
                    current_content.push_str(line);
                    current_content.push('\n');
                }
            }
            // Lines before the first step marker are ignored (file-level comments)
        }

        if let Some(step_name) = current_step {
            let fixture = self.build_fixture(&step_name, &current_content, &current_params)?;
            steps.insert(step_name, fixture);
        }

        Ok(Fixtures { steps, step_order })
    }

    fn build_fixture(
        &self,
        step: &str,
        content: &str,
        params: &HashMap<String, String>,
    ) -> ScenarioResult<Fixture> {
        let body = content.trim();
        if body.is_empty() {
            return Err(self.error(format!("step '{}' has no value", step)));
        }

        let json: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| self.error(format!("step '{}': {}", step, e)))?;
        let value = json_to_value(json)
            .map_err(|message| self.error(format!("step '{}': {}", step, message)))?;

        Ok(Fixture {
            value,
            min_length: self.parse_bound(step, params, "min_length")?,
            max_length: self.parse_bound(step, params, "max_length")?,
        })
    }

    fn parse_bound(
        &self,
        step: &str,
        params: &HashMap<String, String>,
        name: &str,
    ) -> ScenarioResult<Option<usize>> {
        match params.get(name) {
            None => Ok(None),
            Some(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
                self.error(format!(
                    "step '{}': ${} must be a non-negative integer, got '{}'",
                    step, name, raw
                ))
            }),
        }
    }
}

/// Convert a fixture body into a dynamic value.
fn json_to_value(json: serde_json::Value) -> Result<Value, String> {
    use serde_json::Value as Json;

    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(b)),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Int(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| format!("unsupported number {}", n)),
        },
        Json::String(s) => Ok(Value::String(s)),
        Json::Array(items) => items
            .into_iter()
            .map(json_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Json::Object(mut map) => {
            let bytes = match map.remove("bytes") {
                Some(bytes) if map.is_empty() => bytes,
                _ => return Err("objects must have the single key \"bytes\"".to_string()),
            };
            match bytes {
                Json::String(s) => Ok(Value::Bytes(s.into_bytes())),
                Json::Array(items) => items
                    .iter()
                    .map(|item| {
                        item.as_u64()
                            .and_then(|b| u8::try_from(b).ok())
                            .ok_or_else(|| format!("invalid byte {}", item))
                    })
                    .collect::<Result<Vec<u8>, _>>()
                    .map(Value::Bytes),
                other => Err(format!("\"bytes\" must be a string or an array, got {}", other)),
            }
        }
    }
}

/// Parse a parameter definition from `$name = value` format.
fn parse_param_def(s: &str) -> Option<(String, String)> {
    let (name, value) = s.split_once('=')?;
    let name = name.trim().trim_start_matches('$').to_string();
    let value = value.trim().to_string();

    if name.is_empty() {
        return None;
    }

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_fixtures() {
        let source = r#"
-- Whitespace cases

--# letter
"a"

--# spaces
"   "

--# items
[1, "x", null]
"#;

        let fixtures = Fixtures::parse(source).unwrap();

        assert_eq!(fixtures.step_order, vec!["letter", "spaces", "items"]);
        assert_eq!(fixtures.get_step("letter").unwrap().value, Value::from("a"));
        assert_eq!(fixtures.get_step("spaces").unwrap().value, Value::from("   "));
        assert_eq!(
            fixtures.get_step("items").unwrap().value,
            Value::List(vec![Value::Int(1), Value::from("x"), Value::Null])
        );
    }

    #[test]
    fn test_parse_params() {
        let source = r#"
--# padded
-- @param $min_length = 3
-- @param $max_length = 10
"  a "
"#;

        let fixtures = Fixtures::parse(source).unwrap();
        let fixture = fixtures.get_step("padded").unwrap();

        assert_eq!(fixture.min_length, Some(3));
        assert_eq!(fixture.max_length, Some(10));
        assert_eq!(fixture.value, Value::from("  a "));
    }

    #[test]
    fn test_parse_bytes() {
        let source = r#"
--# text_bytes
{"bytes": "ab"}

--# raw_bytes
{"bytes": [0, 255]}
"#;

        let fixtures = Fixtures::parse(source).unwrap();

        assert_eq!(
            fixtures.get_step("text_bytes").unwrap().value,
            Value::Bytes(b"ab".to_vec())
        );
        assert_eq!(
            fixtures.get_step("raw_bytes").unwrap().value,
            Value::Bytes(vec![0, 255])
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Fixtures::parse("--#\n\"a\"").is_err());
        assert!(Fixtures::parse("--# empty\n").is_err());
        assert!(Fixtures::parse("--# bad\n\"unterminated").is_err());
        assert!(Fixtures::parse("--# obj\n{\"text\": \"a\"}").is_err());
        assert!(Fixtures::parse("--# big\n{\"bytes\": [256]}").is_err());
        assert!(Fixtures::parse("--# neg\n-- @param $min_length = -1\n\"a\"").is_err());
        assert!(Fixtures::parse("--# twice\n\"a\"\n--# twice\n\"b\"").is_err());
        assert!(Fixtures::parse("--# noeq\n-- @param $min_length 3\n\"a\"").is_err());
    }

    #[test]
    fn test_unknown_param_is_rejected() {
        let err = Fixtures::parse("--# s\n-- @param $minlength = 10\n\"abc\"").unwrap_err();

        match err {
            ScenarioError::FixtureParse { path, message } => {
                assert_eq!(path, Path::new("<inline>"));
                assert!(message.contains("unknown parameter $minlength"), "{}", message);
            }
            other => panic!("expected FixtureParse, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reports_file_path_once() {
        let path = std::env::temp_dir().join(format!("extent-loader-{}.len", std::process::id()));
        std::fs::write(&path, "--# broken\n\"unterminated\n").unwrap();

        let err = Fixtures::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        let message = err.to_string();
        assert!(message.contains(&path.display().to_string()), "{}", message);
        assert!(!message.contains("<inline>"), "{}", message);
        assert_eq!(message.matches("failed to parse fixtures").count(), 1, "{}", message);
    }
}
