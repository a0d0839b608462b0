//! The engine-facing shape of a single pipeline step

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::trace;

/// Built-in command arguments
pub type Params = serde_json::Map<String, Value>;

/// Expansion variables passed to a function call
pub type Vars = BTreeMap<String, String>;

/// One step of a task, function, or hook.
///
/// `params` and `vars` stay `None` until something is written to them, so a
/// reset map is omitted from the document rather than rendered as `{}`.
/// Replacing a map with an explicitly empty one is the only way to emit `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommandDefinition {
    /// Name of a function defined in the configuration
    #[serde(rename = "func", skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    /// Classification tag such as "setup" or "test"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub execution_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Built-in command identifier, e.g. "s3.put"
    #[serde(rename = "command", skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,

    /// Variants the step is restricted to; empty means all
    #[serde(rename = "variants")]
    pub run_variants: Vec<String>,

    #[serde(skip_serializing_if = "is_zero")]
    pub timeout_secs: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vars>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl CommandDefinition {
    /// Create an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a definition that calls the named function
    pub fn with_function(name: impl Into<String>) -> Self {
        Self {
            function_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create a definition that runs the named built-in command
    pub fn with_command(name: impl Into<String>) -> Self {
        Self {
            command_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn function(&mut self, name: impl Into<String>) -> &mut Self {
        self.function_name = Some(name.into());
        self
    }

    pub fn execution_type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.execution_type = Some(kind.into());
        self
    }

    pub fn display_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn command(&mut self, name: impl Into<String>) -> &mut Self {
        self.command_name = Some(name.into());
        self
    }

    /// Set the step timeout, truncated to whole seconds
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Restrict the step to the given variants (appends)
    pub fn variants<I, S>(&mut self, variants: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_variants.extend(variants.into_iter().map(Into::into));
        self
    }

    /// Upsert a single parameter
    pub fn param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    /// Merge parameters, overwriting on key collision.
    ///
    /// An absent map adopts `params` as-is; an empty argument leaves an absent
    /// map absent.
    pub fn extend_params(&mut self, params: Params) -> &mut Self {
        trace!("extending params with {} keys", params.len());
        if let Some(existing) = self.params.as_mut() {
            existing.extend(params);
        } else if !params.is_empty() {
            self.params = Some(params);
        }
        self
    }

    pub fn replace_params(&mut self, params: Params) -> &mut Self {
        self.params = Some(params);
        self
    }

    pub fn reset_params(&mut self) -> &mut Self {
        self.params = None;
        self
    }

    /// Upsert a single expansion variable
    pub fn var(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars
            .get_or_insert_with(Vars::new)
            .insert(key.into(), value.into());
        self
    }

    /// Merge expansion variables with the same rules as [`extend_params`](Self::extend_params)
    pub fn extend_vars(&mut self, vars: Vars) -> &mut Self {
        trace!("extending vars with {} keys", vars.len());
        if let Some(existing) = self.vars.as_mut() {
            existing.extend(vars);
        } else if !vars.is_empty() {
            self.vars = Some(vars);
        }
        self
    }

    pub fn replace_vars(&mut self, vars: Vars) -> &mut Self {
        self.vars = Some(vars);
        self
    }

    pub fn reset_vars(&mut self) -> &mut Self {
        self.vars = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_extend_params_last_writer_wins() {
        let mut def = CommandDefinition::new();
        def.extend_params(params(json!({"x": 1})))
            .extend_params(params(json!({"x": 2, "y": 3})));

        assert_eq!(def.params, Some(params(json!({"x": 2, "y": 3}))));
    }

    #[test]
    fn test_param_creates_map_on_first_use() {
        let mut def = CommandDefinition::new();
        assert!(def.params.is_none());

        def.param("script", "make").param("silent", true);
        let map = def.params.as_ref().unwrap();
        assert_eq!(map["script"], json!("make"));
        assert_eq!(map["silent"], json!(true));
    }

    #[test]
    fn test_reset_params_omits_field() {
        let mut def = CommandDefinition::with_command("s3.put");
        def.param("bucket", "b").reset_params();

        let value = serde_json::to_value(&def).unwrap();
        assert!(value.get("params").is_none());
    }

    #[test]
    fn test_extend_with_empty_map_stays_absent() {
        let mut def = CommandDefinition::new();
        def.extend_params(Params::new()).extend_vars(Vars::new());

        assert!(def.params.is_none());
        assert!(def.vars.is_none());
    }

    #[test]
    fn test_replace_with_empty_map_is_emitted() {
        let mut def = CommandDefinition::new();
        def.replace_vars(Vars::new());

        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["vars"], json!({}));
    }

    #[test]
    fn test_vars_merge_and_reset() {
        let mut def = CommandDefinition::with_function("run-tests");
        def.var("suite", "unit")
            .extend_vars(Vars::from([
                ("suite".to_string(), "integration".to_string()),
                ("race".to_string(), "true".to_string()),
            ]));

        let vars = def.vars.as_ref().unwrap();
        assert_eq!(vars["suite"], "integration");
        assert_eq!(vars["race"], "true");

        def.reset_vars();
        assert!(def.vars.is_none());
    }

    #[test]
    fn test_timeout_truncates_to_seconds() {
        let mut def = CommandDefinition::new();
        def.timeout(Duration::from_millis(90_999));
        assert_eq!(def.timeout_secs, 90);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut def = CommandDefinition::with_command("shell.exec");
        def.execution_type("test")
            .display_name("run unit tests")
            .variants(["ubuntu", "macos"])
            .timeout(Duration::from_secs(600));

        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "test",
                "display_name": "run unit tests",
                "command": "shell.exec",
                "variants": ["ubuntu", "macos"],
                "timeout_secs": 600
            })
        );
    }

    #[test]
    fn test_variants_always_present() {
        let value = serde_json::to_value(CommandDefinition::with_function("setup")).unwrap();
        assert_eq!(value, json!({"func": "setup", "variants": []}));
    }
}
