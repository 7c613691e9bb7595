//! Portfolio template rendering.
//!
//! Templates are Jinja-style files resolved from a directory that is bound
//! into a `minijinja::Environment` once at startup and read-only afterwards.
//! Rendering is a total operation: every failure — unknown template, template
//! evaluation error — is logged and collapsed into `RenderOutcome::Failed`.
//! Nothing here panics or returns `Err` to the caller; callers branch on the
//! outcome and decide whether to retry with another template or report it.

use std::path::Path;

use minijinja::{Environment, ErrorKind};
use thiserror::Error;
use tracing::error;

use crate::portfolio::normalize::PortfolioContext;

/// Template used when the caller does not name one.
pub const DEFAULT_TEMPLATE: &str = "modern.html";

#[derive(Debug, Error)]
pub enum RenderFailure {
    #[error("template '{0}' not found")]
    TemplateNotFound(String),

    #[error("template evaluation failed: {0}")]
    Evaluation(String),
}

/// Terminal result of a render call. There is no error channel besides
/// `Failed`; the reason has already been logged when it is constructed.
#[derive(Debug)]
pub enum RenderOutcome {
    Rendered(String),
    Failed(RenderFailure),
}

impl RenderOutcome {
    pub fn into_html(self) -> Option<String> {
        match self {
            RenderOutcome::Rendered(html) => Some(html),
            RenderOutcome::Failed(_) => None,
        }
    }
}

/// Builds the process-wide template environment. Called once from `main`;
/// request handlers only ever read from it.
pub fn build_environment(templates_dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(templates_dir));
    env
}

/// Renders the canonical context against the named template.
///
/// Every key of the context is exposed to the template by name — there is no
/// allow-list. The template owns layout; this function only guarantees data
/// delivery and failure containment.
pub fn render_portfolio(
    env: &Environment<'_>,
    context: &PortfolioContext,
    template_id: &str,
) -> RenderOutcome {
    let template = match env.get_template(template_id) {
        Ok(t) => t,
        Err(e) if matches!(e.kind(), ErrorKind::TemplateNotFound) => {
            error!("portfolio template '{template_id}' not found");
            return RenderOutcome::Failed(RenderFailure::TemplateNotFound(template_id.to_string()));
        }
        Err(e) => {
            error!("failed to load portfolio template '{template_id}': {e}");
            return RenderOutcome::Failed(RenderFailure::Evaluation(e.to_string()));
        }
    };

    match template.render(context) {
        Ok(html) => RenderOutcome::Rendered(html),
        Err(e) => {
            error!("rendering portfolio template '{template_id}' failed: {e}");
            RenderOutcome::Failed(RenderFailure::Evaluation(e.to_string()))
        }
    }
}
