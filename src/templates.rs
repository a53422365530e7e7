use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::TemplateError;

const SHELL_TEMPLATE: &str = "shell.html";

/// Values the shell template is rendered with.
///
/// `icon_href`, `sidebar` and `main` are already-escaped markup and are
/// emitted with `| safe`; `title` is escaped by Tera.
#[derive(Debug, Clone, Serialize)]
pub struct ShellView {
    pub title: String,
    pub icon_href: String,
    pub layout: String,
    pub sidebar: String,
    pub main: String,
}

#[derive(Clone)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Loads `*.html` from `template_folder` when given; any template not
    /// found there falls back to the compiled-in default.
    pub fn new(template_folder: Option<&Path>) -> Result<Self, TemplateError> {
        let mut tera = match template_folder {
            Some(folder) => {
                let globs = folder.join("**/*.html");
                let globs_str = globs.to_str().ok_or(TemplateError::InvalidPathEncoding)?;
                Tera::new(globs_str).map_err(|source| TemplateError::InitFailed {
                    path: folder.to_path_buf(),
                    source,
                })?
            }
            None => Tera::default(),
        };

        for (name, tpl) in DEFAULT_TEMPLATES.iter() {
            if tera.get_template(name).is_err() {
                tracing::debug!("Adding default template {}", name);
                tera.add_raw_template(name, tpl)?;
            }
        }

        Ok(Templates { tera })
    }

    pub fn render_shell(&self, view: &ShellView) -> Result<String, TemplateError> {
        let context = Context::from_serialize(view)?;
        self.tera
            .render(SHELL_TEMPLATE, &context)
            .map_err(|e| TemplateError::RenderFailed {
                template_name: SHELL_TEMPLATE.to_string(),
                source: e,
            })
    }
}

const DEFAULT_TEMPLATES: &[(&str, &str)] =
    &[(SHELL_TEMPLATE, include_str!("../templates/shell.html"))];
