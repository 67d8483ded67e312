// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML text rewriting
//!
//! Replaces the source term with the replacement term in every rendered text
//! node of a document. Attribute values, comments and the bodies of raw-text
//! elements (`<script>`, `<style>`, ...) are left alone, so link targets
//! survive byte-for-byte.
//!
//! The document is parsed with scripting disabled: `<noscript>` children are
//! real elements, which is also how the serialiser writes them back out.
//!
//! Capitalisation is kept per occurrence: the first letter of the match decides
//! between `F` and `f`, the remaining letters are copied unchanged.
//! `Yale` → `Fale`, `yale` → `fale`, `YALE` → `FALE`.

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use regex::{Captures, Regex};
use scraper::{Html, Node};
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::debug;

/// Term searched for, case-insensitively
pub const SOURCE_TERM: &str = "Yale";

/// Term written in its place
pub const REPLACEMENT_TERM: &str = "Fale";

/// Elements whose text content is not rendered
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "iframe", "noembed", "noframes", "xmp"];

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("(?i){}", regex::escape(SOURCE_TERM)))
            .expect("source term is a valid pattern")
    })
}

/// Rewrite a single run of text.
///
/// Returns `Cow::Borrowed` when nothing matched.
pub fn replace_term(text: &str) -> Cow<'_, str> {
    term_pattern().replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        let mut first = matched.chars();
        let lead = first.next().unwrap_or_default();

        let mut replacement = REPLACEMENT_TERM.chars();
        let new_lead = replacement.next().unwrap_or_default();
        let new_lead = if lead.is_lowercase() {
            new_lead.to_ascii_lowercase()
        } else {
            new_lead.to_ascii_uppercase()
        };

        let mut out = String::with_capacity(matched.len());
        out.push(new_lead);
        out.push_str(first.as_str());
        out
    })
}

/// Lenient parse with scripting off
fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(Html::new_document(), opts).one(html)
}

/// Parse `html`, rewrite its visible text and serialise it back.
///
/// Never fails: the parser recovers from malformed markup.
pub fn transform(html: &str) -> String {
    let mut document = parse_document(html);

    let targets: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| node.value().is_text())
        .filter(|node| {
            !node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|el| el.name().to_owned()))
                .is_some_and(|name| RAW_TEXT_ELEMENTS.contains(&name.as_str()))
        })
        .map(|node| node.id())
        .collect();

    let mut rewritten = 0usize;
    for id in targets {
        let Some(mut node) = document.tree.get_mut(id) else {
            continue;
        };
        if let Node::Text(text) = node.value() {
            let replaced = match replace_term(&text.text) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            text.text = replaced.into();
            rewritten += 1;
        }
    }

    debug!("Rewrote {} text nodes", rewritten);
    document.html()
}
