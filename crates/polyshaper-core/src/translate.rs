//! Translation hook for message lead phrases.
//!
//! Lead phrases are passed in their English form and used as the lookup key,
//! the same way gettext msgids work. Structured fields (filenames, element
//! names, numbers) never go through a translator.

use std::borrow::Cow;

/// Looks up the localized form of a lead phrase.
pub trait Translate {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Returns every msgid unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Translate for Identity {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(msgid))
    }
}
