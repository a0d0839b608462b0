//! End-to-end document generation through the public API

mod helpers;

use helpers::*;
use serde_json::json;
use shrub::commands::{ArchiveExtract, ArchiveFormat, ShellExec};
use shrub::{Command, CommandDefinition, Configuration, OutputFormat, TaskDependency};

#[test]
fn test_single_variant_single_task() {
    let mut config = Configuration::new();
    config.variant("ubuntu").add_tasks(["compile"]);
    config
        .task("compile")
        .command(&ShellExec::new("make"))
        .unwrap();

    assert_eq!(
        document(&config),
        json!({
            "tasks": [{
                "name": "compile",
                "commands": [{"func": "shell.exec", "variants": [], "params": {"script": "make"}}]
            }],
            "variants": [{"build_name": "ubuntu", "tasks": ["compile"]}],
            "pre": [],
            "post": [],
            "timeout": []
        })
    );
}

#[test]
fn test_step_order_is_preserved() {
    let mut config = Configuration::new();
    config.task("ordered").commands([
        CommandDefinition::with_function("A"),
        CommandDefinition::with_function("B"),
        CommandDefinition::with_function("C"),
    ])
    .unwrap();

    let doc = document(&config);
    assert_eq!(step_names(task_commands(&doc, "ordered")), vec!["A", "B", "C"]);
}

#[test]
fn test_first_acquisition_fixes_position() {
    let mut config = Configuration::new();
    config.task("b");
    config.task("a");
    config.task("b").priority(5);

    let doc = document(&config);
    let names: Vec<_> = doc["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(doc["tasks"][0]["priority"], json!(5));
}

#[test]
fn test_reset_params_omits_field_in_document() {
    let mut config = Configuration::new();
    config
        .task("t")
        .add_command()
        .command("shell.exec")
        .param("script", "make")
        .reset_params();

    let doc = document(&config);
    let step = &task_commands(&doc, "t")[0];
    assert!(step.get("params").is_none());
    assert_eq!(step["variants"], json!([]));
}

#[test]
fn test_functions_and_dependencies() {
    let mut config = Configuration::new();
    config.function("setup").add(&ShellExec::new("./bootstrap.sh")).unwrap();
    config
        .task("test")
        .dependency([TaskDependency::on_variant("compile", "ubuntu")])
        .function(["setup"]);
    config
        .task("unpack")
        .command(&ArchiveExtract {
            format: Some(ArchiveFormat::Auto),
            path: "dist.tgz".to_string(),
            ..ArchiveExtract::default()
        })
        .unwrap();

    let doc = document(&config);
    assert_eq!(
        doc["functions"],
        json!({"setup": [{"func": "shell.exec", "variants": [], "params": {"script": "./bootstrap.sh"}}]})
    );
    assert_eq!(doc["tasks"][0]["depends_on"], json!([{"name": "compile", "variant": "ubuntu"}]));
    assert_eq!(step_names(task_commands(&doc, "unpack")), vec!["archive.auto_extract"]);
}

#[test]
fn test_same_variant_dependency_keeps_empty_variant() {
    let mut config = Configuration::new();
    config
        .task("test")
        .dependency([TaskDependency::new("compile")])
        .function(["setup"]);

    let doc = document(&config);
    assert_eq!(
        doc["tasks"][0]["depends_on"],
        json!([{"name": "compile", "variant": ""}])
    );
}

#[test]
fn test_priority_only_emitted_when_nonzero() {
    let mut config = Configuration::new();
    config.task("default").priority(0);
    config.task("urgent").priority(100);

    let doc = document(&config);
    assert!(doc["tasks"][0].get("priority").is_none());
    assert_eq!(doc["tasks"][1]["priority"], json!(100));
}

#[test]
fn test_global_hooks() {
    let mut config = Configuration::new();
    config.pre().add(&ShellExec::new("env")).unwrap();
    config.timeout().add_definition().function("dump-logs");

    let doc = document(&config);
    assert_eq!(step_names(doc["pre"].as_array().unwrap()), vec!["shell.exec"]);
    assert_eq!(doc["post"], json!([]));
    assert_eq!(step_names(doc["timeout"].as_array().unwrap()), vec!["dump-logs"]);
}

#[test]
fn test_heterogeneous_commands_abort_on_invalid() {
    let good = ShellExec::new("make");
    let bad = ShellExec::default();
    let cmds: [&dyn Command; 2] = [&good, &bad];

    let mut config = Configuration::new();
    assert!(config.task("t").commands(cmds).is_err());
    assert_eq!(config.get_task("t").unwrap().commands.len(), 1);
}

#[test]
fn test_yaml_rendering() {
    let mut config = Configuration::new();
    config.variant("ubuntu").add_tasks(["compile"]);
    config.task("compile").command(&ShellExec::new("make")).unwrap();

    let yaml = config.render(OutputFormat::Yaml).unwrap();
    assert!(yaml.contains("build_name: ubuntu"));
    assert!(yaml.contains("func: shell.exec"));
    assert!(yaml.contains("pre: []"));

    let from_yaml: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(from_yaml, document(&config));
}
