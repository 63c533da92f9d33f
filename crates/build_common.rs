// README-to-rustdoc build helper shared by the workspace crates.
// Pulled into each build.rs with: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Render a crate README into `OUT_DIR/README_GENERATED.md` for `#![doc]`.
///
/// Source-file links become intra-doc module paths
/// (`src/rewrite/mod.rs` -> `crate::rewrite`, `src/report.rs` -> `crate::report`)
/// and links back to the workspace README point at the repository URL.
/// A missing README produces an empty file so `include_str!` still resolves.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let generated = Path::new(&out_dir).join("README_GENERATED.md");

    let rendered = fs::read_to_string(Path::new(crate_dir).join("README.md"))
        .map(|readme| rewrite_readme_links(&readme, workspace_repository(crate_dir).as_deref()))
        .unwrap_or_default();

    fs::write(generated, rendered).unwrap();
}

/// Rewrite every inline link target `](...)` in `readme`.
fn rewrite_readme_links(readme: &str, repository: Option<&str>) -> String {
    let mut out = String::with_capacity(readme.len());
    let mut rest = readme;
    while let Some(open) = rest.find("](") {
        let (head, tail) = rest.split_at(open + 2);
        out.push_str(head);
        let Some(close) = tail.find(')') else {
            rest = tail;
            break;
        };
        out.push_str(&rustdoc_target(&tail[..close], repository));
        rest = &tail[close..];
    }
    out.push_str(rest);
    out
}

fn rustdoc_target(target: &str, repository: Option<&str>) -> String {
    if let Some(module) = target.strip_prefix("src/").and_then(|t| t.strip_suffix(".rs")) {
        let module = module.strip_suffix("/mod").unwrap_or(module);
        if module == "lib" || module == "main" {
            return "crate".to_string();
        }
        return format!("crate::{}", module.replace('/', "::"));
    }
    match (target.strip_prefix("../../README.md"), repository) {
        (Some(anchor), Some(url)) => format!("{url}{anchor}"),
        _ => target.to_string(),
    }
}

/// `repository = "..."` from the workspace manifest, if present.
fn workspace_repository(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        let value = line.strip_prefix("repository")?.trim_start().strip_prefix('=')?;
        Some(value.trim().trim_matches('"').to_string())
    })
}
