use anyhow::{anyhow, Result};

use crate::cli::OutputFormat;
use crate::{ContentItem, ContentKind};

use super::super::Container;

pub struct ContentController<'a> {
    container: &'a Container,
}

impl<'a> ContentController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, kind: Option<String>) -> Result<String> {
        let use_case = self.container.browse_use_case();
        let items = match kind.as_deref() {
            Some(k) => {
                let kind = ContentKind::parse(k)
                    .ok_or_else(|| anyhow!("unknown content kind '{k}'"))?;
                use_case.list(kind).await?
            }
            None => use_case.list_all().await?,
        };

        match self.container.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&items)?),
            OutputFormat::Text => Ok(self.format_items(&items)),
        }
    }

    fn format_items(&self, items: &[ContentItem]) -> String {
        if items.is_empty() {
            return "No content.".to_string();
        }

        let mut output = String::new();
        let mut current: Option<ContentKind> = None;
        for item in items {
            let kind = ContentKind::of(item);
            if current != Some(kind) {
                if current.is_some() {
                    output.push('\n');
                }
                output.push_str(&format!("{}:\n", heading(kind)));
                current = Some(kind);
            }
            output.push_str(&format!("  {:<4}{}\n", item.id(), describe(item)));
        }

        output
    }
}

fn heading(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Vocabulary => "Vocabulary",
        ContentKind::Passage => "Reading Corner",
        ContentKind::Grammar => "Grammar Guide",
        ContentKind::Lesson => "Lessons",
    }
}

fn describe(item: &ContentItem) -> String {
    match item {
        ContentItem::Vocabulary(v) => {
            format!("{} ({}): {}", v.word(), v.category(), v.definition())
        }
        ContentItem::Passage(p) => format!("{} [{}]", p.title(), p.level()),
        ContentItem::Grammar(g) => format!("{}: {}", g.title(), g.description()),
        ContentItem::Lesson(l) => format!("{} [{}, {}]", l.title(), l.level(), l.duration()),
    }
}
