//! Rendering of the generated `GlobalConfig.py` module.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{config::Properties, errors::RenderError};

/// Relative path of the generated module under the project root.
pub const GENERATED_CONFIG: &str = "src/GlobalConfig.py";

const TEMPLATE: &str = r#"application_id = "${application_id}"
application_name = "${application_name}"
application_company = "${application_company}"
application_copyright = "${application_copyright}"
application_domain = "${application_domain}"
application_version = "${application_version}"
build_name = "${build_name}"
build_hotreload = "${build_hotreload}"
build_project_path = "${build_project_path}"
"#;

/// Placeholder set built from the properties mapping, with empty-string
/// defaults for absent keys.
///
/// `application_version` deliberately mirrors `domain`; the downstream build
/// tooling relies on the current output.
fn placeholder_values(properties: &Properties, root: &Path) -> HashMap<&'static str, String> {
    HashMap::from([
        ("application_id", properties.get_or_default("appId").to_string()),
        ("application_name", properties.get_or_default("appName").to_string()),
        ("application_company", properties.get_or_default("company").to_string()),
        ("application_copyright", properties.get_or_default("copyright").to_string()),
        ("application_domain", properties.get_or_default("domain").to_string()),
        ("application_version", properties.get_or_default("domain").to_string()),
        ("build_name", properties.get_or_default("projectName").to_string()),
        ("build_hotreload", properties.get_or_default("hotLoad").to_string()),
        ("build_project_path", root.join("src").display().to_string()),
    ])
}

/// Substitute `${name}` placeholders in `template`.
fn substitute(
    template: &str,
    values: &HashMap<&'static str, String>,
) -> Result<String, RenderError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(RenderError::UnresolvedPlaceholder {
                name: after.to_string(),
            });
        };
        let name = &after[..end];
        let Some(value) = values.get(name) else {
            return Err(RenderError::UnresolvedPlaceholder {
                name: name.to_string(),
            });
        };
        rendered.push_str(value);
        rest = &after[end + 1..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// Render the generated config module from `properties` and write it under
/// `root`, overwriting any previous output.
///
/// `overrides` replaces placeholder values before substitution; keys outside
/// the fixed placeholder set are ignored.
pub fn write_global_config(
    root: &Path,
    properties: &Properties,
    overrides: &HashMap<&'static str, String>,
) -> Result<PathBuf, RenderError> {
    let mut values = placeholder_values(properties, root);
    for (key, value) in overrides {
        if values.contains_key(key) {
            values.insert(*key, value.clone());
        }
    }

    let rendered = substitute(TEMPLATE, &values)?;
    let path = root.join(GENERATED_CONFIG);
    fs::write(&path, rendered).map_err(|source| RenderError::FileWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
