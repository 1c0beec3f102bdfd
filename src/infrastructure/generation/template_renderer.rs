//! Tera-based template renderer implementation
//!
//! Scaffold templates use `<<`/`>>` actions so that runn's own `{{ }}`
//! expressions can appear verbatim in the rendered files. Tera has fixed
//! delimiters, so every template is translated before it is compiled:
//!
//! ```
//! use openapi2runn::infrastructure::generation::translate_delimiters;
//!
//! assert_eq!(
//!     translate_delimiters("desc: << .desc >>"),
//!     "desc: {{ desc }}"
//! );
//! assert_eq!(
//!     translate_delimiters("req: \"{{ vars.data[i] }}\" # << .method >>"),
//!     "{% raw %}req: \"{{ vars.data[i] }}\" # {% endraw %}{{ method }}"
//! );
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::core::templates::{TemplateKind, TemplateSet};

/// `<< .name >>` with optional `-` trim markers on either side
static ACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<<(-)?\s*\.?(.*?)\s*(-)?>>").expect("action pattern is valid")
});

/// Compiled scaffold templates, ready to render once per operation
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Translate and compile every template in `templates`.
    ///
    /// Parse errors surface here, before any output is written.
    pub fn new(templates: &TemplateSet) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        for kind in TemplateKind::all() {
            let source = translate_delimiters(templates.source(kind));
            tera.add_raw_template(kind.file_name(), &source)
                .map_err(|e| Error::template(kind.file_name(), e))?;
            debug!(template = %kind, "Compiled template");
        }

        Ok(Self { tera })
    }

    /// Render one template with the given bindings
    pub fn render(&self, kind: TemplateKind, context: &Context) -> Result<String> {
        self.tera
            .render(kind.file_name(), context)
            .map_err(|e| Error::template(kind.file_name(), e))
    }
}

/// Rewrite `<<`/`>>` actions as tera expressions.
///
/// Literal text that tera would otherwise interpret is wrapped in a raw block.
/// `<<-` trims whitespace before the action and `->>` trims whitespace after it.
pub fn translate_delimiters(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 32);
    let mut last = 0;
    let mut trim_next = false;

    for caps in ACTION.captures_iter(source) {
        let Some(action) = caps.get(0) else {
            continue;
        };

        let mut literal = &source[last..action.start()];
        if trim_next {
            literal = literal.trim_start();
        }
        if caps.get(1).is_some() {
            literal = literal.trim_end();
        }
        push_literal(&mut out, literal);

        out.push_str("{{ ");
        out.push_str(&caps[2]);
        out.push_str(" }}");

        trim_next = caps.get(3).is_some();
        last = action.end();
    }

    let mut tail = &source[last..];
    if trim_next {
        tail = tail.trim_start();
    }
    push_literal(&mut out, tail);

    out
}

/// A trailing `{` would fuse with the next `{{` into `{{{`.
fn push_literal(out: &mut String, literal: &str) {
    if literal.ends_with('{') || ["{{", "{%", "{#"].iter().any(|open| literal.contains(open)) {
        out.push_str("{% raw %}");
        out.push_str(literal);
        out.push_str("{% endraw %}");
    } else {
        out.push_str(literal);
    }
}
