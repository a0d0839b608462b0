//! A small but complete pipeline used by the `sample` command

use crate::commands::{
    ArchiveCreate, ArchiveFormat, AttachArtifacts, Command, GetProject, ResultsXunit, S3Put,
    ShellExec,
};
use crate::core::{Configuration, TaskDependency, TaskSpec, Vars};
use crate::error::Result;
use std::time::Duration;

const VARIANT: &str = "ubuntu";

/// Build the sample configuration, adding `expansions` to its variant
pub fn sample_configuration(expansions: &[(String, String)]) -> Result<Configuration> {
    let mut config = Configuration::new();

    config.pre().add(&GetProject::new("src"))?;
    config.post().add(&ResultsXunit {
        files: vec!["src/build/junit/*.xml".to_string()],
        ..ResultsXunit::default()
    })?;
    config.timeout().add_definition().function("dump-logs");

    config.function("run-make").add(&ShellExec {
        working_directory: "src".to_string(),
        ..ShellExec::new("make ${target}")
    })?;
    config.function("dump-logs").add(&ShellExec {
        continue_on_error: true,
        ..ShellExec::new("tail -n 200 src/build/*.log")
    })?;

    config
        .task("compile")
        .function_with_vars("run-make", target_vars("build"));

    config
        .task("test")
        .dependency([TaskDependency::new("compile")])
        .add_command()
        .function("run-make")
        .extend_vars(target_vars("test"))
        .timeout(Duration::from_secs(30 * 60));

    let package_steps: [&dyn Command; 3] = [
        &ArchiveCreate {
            format: Some(ArchiveFormat::Tarball),
            target: "dist.tgz".to_string(),
            source_dir: "src/build".to_string(),
            include: vec!["./**".to_string()],
            ..ArchiveCreate::default()
        },
        &S3Put {
            aws_key: "${aws_key}".to_string(),
            aws_secret: "${aws_secret}".to_string(),
            local_file: "dist.tgz".to_string(),
            remote_file: "${build_id}/dist.tgz".to_string(),
            bucket: "${bucket}".to_string(),
            permissions: "public-read".to_string(),
            content_type: "application/x-gzip".to_string(),
            ..S3Put::default()
        },
        &AttachArtifacts {
            files: vec!["src/build/artifacts.json".to_string()],
            optional: true,
            ..AttachArtifacts::default()
        },
    ];
    config
        .task("package")
        .priority(10)
        .dependency([TaskDependency::new("test")])
        .commands(package_steps)?;

    config
        .task_group("build-and-test")
        .max_hosts(1)
        .add_tasks(["compile", "test"])
        .setup_group([GetProject::new("src")])?;

    let variant = config.variant(VARIANT);
    variant
        .display_name("Ubuntu 22.04")
        .run_on("ubuntu2204-small")
        .expansion("bucket", "ci-artifacts")
        .add_tasks(["compile", "test"])
        .task_spec(TaskSpec::new("package").stepback(false))
        .display_task("build", ["compile", "test"]);
    for (key, value) in expansions {
        variant.expansion(key.as_str(), value.as_str());
    }

    Ok(config)
}

fn target_vars(target: &str) -> Vars {
    Vars::from([("target".to_string(), target.to_string())])
}
