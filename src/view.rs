//! Embed construction helpers for building page sets.

use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

use crate::page::{page_window, total_pages};

/// Default embed color used for paginated views.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build one page embed with consistent styling and a `Page i/N` footer.
///
/// `page` is 0-based; the footer renders it 1-based. Single-page sets get no
/// footer.
pub fn build_page_embed(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> anyhow::Result<Embed> {
    let total_pages = total_pages.max(1);
    let page = page.min(total_pages - 1);

    let builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    let embed = if total_pages > 1 {
        let footer = EmbedFooterBuilder::new(format!("Page {}/{}", page + 1, total_pages)).build();
        builder.footer(footer).validate()?.build()
    } else {
        builder.validate()?.build()
    };

    Ok(embed)
}

/// Build a full page set over a list of items, one bullet list per page.
///
/// Returns an empty set for an empty item list.
pub fn build_page_set(title: &str, items: &[String], per_page: usize) -> anyhow::Result<Vec<Embed>> {
    let total = total_pages(items.len(), per_page);
    let mut pages = Vec::with_capacity(total);

    for page in 0..total {
        let (start, end) = page_window(items.len(), per_page, page);
        let description = format!("- {}", items[start..end].join("\n- "));
        pages.push(build_page_embed(title, description, page, total)?);
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("item {i}")).collect()
    }

    #[test]
    fn page_set_splits_items_across_pages() {
        let pages = build_page_set("Things", &items(7), 3).unwrap();
        assert_eq!(pages.len(), 3);

        let last = pages[2].description.as_deref().unwrap();
        assert_eq!(last, "- item 7");
        assert_eq!(pages[2].footer.as_ref().unwrap().text, "Page 3/3");
    }

    #[test]
    fn single_page_set_has_no_footer() {
        let pages = build_page_set("Things", &items(2), 5).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].footer.is_none());
    }

    #[test]
    fn empty_item_list_builds_an_empty_set() {
        let pages = build_page_set("Things", &[], 5).unwrap();
        assert!(pages.is_empty());
    }
}
