use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

/// Direct dependencies each layer must not take.
const LAYER_RULES: &[(&str, &[&str])] = &[
    (
        "charbuild-domain",
        &[
            "charbuild-shared",
            "charbuild-store",
            "charbuild-player",
            "tokio",
            "reqwest",
            "axum",
            "dioxus",
        ],
    ),
    (
        "charbuild-shared",
        &[
            "charbuild-store",
            "charbuild-player",
            "tokio",
            "reqwest",
            "axum",
            "dioxus",
        ],
    ),
    ("charbuild-store", &["charbuild-player", "reqwest", "dioxus"]),
];

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` or `"build"` otherwise.
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;
    let violations = find_violations(&metadata);

    if violations.is_empty() {
        println!("arch-check: OK");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layer violation(s)", violations.len())
}

fn find_violations(metadata: &Metadata) -> Vec<String> {
    let packages: HashMap<&str, &Package> = metadata
        .packages
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    let mut violations = Vec::new();
    for (layer, forbidden) in LAYER_RULES {
        let Some(package) = packages.get(layer) else {
            violations.push(format!("{layer} is missing from the workspace"));
            continue;
        };
        for dep in package.dependencies.iter().filter(|d| d.kind.is_none()) {
            if forbidden.contains(&dep.name.as_str()) {
                violations.push(format!("{layer} must not depend on {}", dep.name));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn clean_layers_pass() {
        let m = metadata(
            r#"{"packages": [
                {"name": "charbuild-domain", "dependencies": [{"name": "serde", "kind": null}]},
                {"name": "charbuild-shared", "dependencies": [{"name": "charbuild-domain", "kind": null}]},
                {"name": "charbuild-store", "dependencies": [{"name": "axum", "kind": null}]}
            ]}"#,
        );
        assert!(find_violations(&m).is_empty());
    }

    #[test]
    fn runtime_dependency_in_domain_is_flagged() {
        let m = metadata(
            r#"{"packages": [
                {"name": "charbuild-domain", "dependencies": [{"name": "tokio", "kind": null}]},
                {"name": "charbuild-shared", "dependencies": []},
                {"name": "charbuild-store", "dependencies": [{"name": "reqwest", "kind": "dev"}]}
            ]}"#,
        );
        assert_eq!(
            find_violations(&m),
            vec!["charbuild-domain must not depend on tokio".to_string()]
        );
    }
}
