//! Book contents
//!
//! Everything lives under `book`: pages for any writable book, plus title,
//! author and generation once it is signed.

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::ItemStack;
use crate::meta::{BookGeneration, ItemMeta};

pub(super) fn write_pages(
    _ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if let Some(book) = meta.writable_book().filter(|book| !book.pages.is_empty()) {
        node.section_mut("book").set("pages", book.pages.clone());
    }
}

pub(super) fn read_pages(
    _ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let Some(book) = meta.writable_book_mut() else {
        return Ok(());
    };

    if let Some(pages) = node.section("book").and_then(|b| b.get_string_list("pages")) {
        book.pages = pages;
    }

    Ok(())
}

pub(super) fn write_signature(
    _ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    let Some(book) = meta.book() else {
        return;
    };

    let mut section = ConfigNode::new();
    if let Some(title) = &book.title {
        section.set("title", title.as_str());
    }
    if let Some(author) = &book.author {
        section.set("author", author.as_str());
    }
    if let Some(generation) = book.generation {
        section.set("generation", generation.name());
    }

    if !section.is_empty() {
        let target = node.section_mut("book");
        for (key, value) in section.iter() {
            target.set(key, value.clone());
        }
    }
}

pub(super) fn read_signature(
    _ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let (Some(book), Some(section)) = (meta.book_mut(), node.section("book")) else {
        return Ok(());
    };

    book.title = section.get_str("title");
    book.author = section.get_str("author");
    book.generation = section
        .get_str("generation")
        .and_then(|g| BookGeneration::from_name(&g));

    Ok(())
}
