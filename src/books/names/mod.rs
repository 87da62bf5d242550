//! Static spelling tables, one file per language.

mod de;
mod en;
mod es;
mod fr;
mod id;
mod it;
mod nl;
mod pt;
mod ru;
mod zh;

use super::Book;
use crate::language::Language;

pub(super) type SpellingTable = &'static [(Book, &'static [&'static str])];

pub(super) fn table(language: Language) -> SpellingTable {
    match language {
        Language::En => en::SPELLINGS,
        Language::Es => es::SPELLINGS,
        Language::Fr => fr::SPELLINGS,
        Language::De => de::SPELLINGS,
        Language::Pt => pt::SPELLINGS,
        Language::It => it::SPELLINGS,
        Language::Nl => nl::SPELLINGS,
        Language::Ru => ru::SPELLINGS,
        Language::Id => id::SPELLINGS,
        Language::Zh => zh::SPELLINGS,
    }
}
