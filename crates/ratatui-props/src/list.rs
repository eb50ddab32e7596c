//! Ordered lists of display values.
//!
//! [`render_rows`] maps each item to a [`ListRow`] whose value is the marker followed by the
//! item. Row keys default to the item's position, which is only a sound identity while the list
//! keeps its shape between renders. Lists that insert, remove or reorder items should key rows
//! from the value instead via [`render_rows_keyed`] / [`ListRenderer::rows_keyed`].
use crate::component::Component;
use crate::text;
use crate::theme::Theme;
use ratatui::text::Line;
use ratatui::text::Span;

pub const DEFAULT_MARKER: &str = "🍎 ";

const INDENT: &str = "  ";

/// One rendered list element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListRow<K = usize> {
    pub key: K,
    pub value: String,
}

pub fn render_rows<T: AsRef<str>>(items: &[T], marker: &str) -> Vec<ListRow> {
    render_rows_keyed(items, marker, |index, _| index)
}

pub fn render_rows_keyed<T, K, F>(items: &[T], marker: &str, key: F) -> Vec<ListRow<K>>
where
    T: AsRef<str>,
    F: Fn(usize, &str) -> K,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item = item.as_ref();
            ListRow {
                key: key(index, item),
                value: format!("{marker}{item}"),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListRenderer {
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_marker"))]
    pub marker: String,
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            marker: default_marker(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl ListRenderer {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            marker: default_marker(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn rows(&self) -> Vec<ListRow> {
        render_rows(&self.items, &self.marker)
    }

    pub fn rows_keyed<K>(&self, key: impl Fn(usize, &str) -> K) -> Vec<ListRow<K>> {
        render_rows_keyed(&self.items, &self.marker, key)
    }
}

impl Component for ListRenderer {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        self.items
            .iter()
            .map(|item| {
                let line = Line::from(vec![
                    Span::styled(INDENT, theme.text_primary),
                    Span::styled(self.marker.clone(), theme.bullet),
                    Span::styled(item.clone(), theme.text_primary),
                ]);
                text::truncate_line(line, width as usize)
            })
            .collect()
    }
}
