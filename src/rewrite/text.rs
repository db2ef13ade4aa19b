// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Regex rewrites over raw document text.
//!
//! Matching is textual, not structural: tags are found by pattern search,
//! non-greedy and across line breaks. Nested or malformed markup is handled
//! exactly as loosely as these patterns allow.
//!
//! ```text
//! rename_tag          <old>body</old>        -> <new>body</new>
//! wrap_code_in_cdata  <code>a<b></code>      -> <code><![CDATA[a<b>]]></code>
//! remove_cdata        <![CDATA[a<b>]]>       -> a<b>
//! subcategory         <subcategory>X</...>   -> Some("X")
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::types::is_tag_name;
use crate::error::RewriteError;

pub const CDATA_OPEN: &str = "<![CDATA[";
pub const CDATA_CLOSE: &str = "]]>";

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<code>(.*?)</code>").expect("Invalid code block regex"));

static SUBCATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<subcategory>(.*?)</subcategory>").expect("Invalid subcategory regex")
});

/// Compiled `<from>...</from>` to `<to>...</to>` rewrite.
#[derive(Debug, Clone)]
pub struct TagRenamer {
    pattern: Regex,
    replacement: String,
}

impl TagRenamer {
    /// Compiles the rename.
    ///
    /// # Errors
    ///
    /// Returns `RewriteError::InvalidTagName` if either name is not a plain
    /// tag name.
    pub fn new(from: &str, to: &str) -> Result<Self, RewriteError> {
        for name in [from, to] {
            if !is_tag_name(name) {
                return Err(RewriteError::InvalidTagName(name.to_string()));
            }
        }

        let escaped = regex::escape(from);
        let pattern = Regex::new(&format!("(?s)<{escaped}>(.*?)</{escaped}>"))
            .map_err(|_| RewriteError::InvalidTagName(from.to_string()))?;

        Ok(Self {
            pattern,
            replacement: format!("<{to}>${{1}}</{to}>"),
        })
    }

    /// Applies the rename to every matching pair.
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Renames every `<from>...</from>` pair, keeping the enclosed content.
///
/// # Errors
///
/// Returns `RewriteError::InvalidTagName` for names that are not plain tags.
pub fn rename_tag<'a>(text: &'a str, from: &str, to: &str) -> Result<Cow<'a, str>, RewriteError> {
    Ok(TagRenamer::new(from, to)?.apply(text))
}

/// Wraps the body of every `<code>` element in a CDATA section.
///
/// Bodies that already start with `<![CDATA[` are left alone, which makes the
/// rewrite idempotent.
#[must_use]
pub fn wrap_code_in_cdata(text: &str) -> Cow<'_, str> {
    CODE_BLOCK.replace_all(text, |caps: &Captures<'_>| {
        let body = &caps[1];
        if body.starts_with(CDATA_OPEN) {
            caps[0].to_string()
        } else {
            format!("<code>{CDATA_OPEN}{body}{CDATA_CLOSE}</code>")
        }
    })
}

/// Strips every CDATA open and close marker, leaving the content in place.
#[must_use]
pub fn remove_cdata(text: &str) -> Cow<'_, str> {
    if !text.contains(CDATA_OPEN) && !text.contains(CDATA_CLOSE) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace(CDATA_OPEN, "").replace(CDATA_CLOSE, ""))
}

/// Value of the first `<subcategory>` element, trimmed.
#[must_use]
pub fn subcategory(text: &str) -> Option<&str> {
    SUBCATEGORY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
