use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One chapter's worth of a matched reference. `start_verse`/`end_verse`
/// are both `None` for a whole chapter; `end_verse` alone is `None` when
/// the span runs to the end of the chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterGroup {
    pub chapter: u32,
    pub start_verse: Option<u32>,
    pub end_verse: Option<u32>,
}

impl ChapterGroup {
    pub fn verse(chapter: u32, verse: u32) -> Self {
        Self::range(chapter, verse, verse)
    }

    pub fn range(chapter: u32, start: u32, end: u32) -> Self {
        Self {
            chapter,
            start_verse: Some(start),
            end_verse: Some(end),
        }
    }

    pub fn open(chapter: u32, start: u32) -> Self {
        Self {
            chapter,
            start_verse: Some(start),
            end_verse: None,
        }
    }

    pub fn whole(chapter: u32) -> Self {
        Self {
            chapter,
            start_verse: None,
            end_verse: None,
        }
    }
}

static LEADING_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<c>[0-9]{1,3})[:.;：](?P<v>[0-9]{1,3})(?:[-–](?P<x>[0-9]{1,3})(?:[:.;：](?P<y>[0-9]{1,3}))?)?",
    )
    .unwrap()
});

/// Re-parses the chapter/verse portion of a match into chapter groups.
///
/// Only the leading `chapter:verse(-verse)` run is read. Anything after a
/// comma ("3:16-18,20") is matched by the scanner but not split into
/// further groups.
pub fn parse_chapter_verse(cv: &str) -> Vec<ChapterGroup> {
    let Some(caps) = LEADING_GROUP.captures(cv.trim()) else {
        return Vec::new();
    };
    let number = |name: &str| -> Option<u32> { caps.name(name)?.as_str().parse().ok() };
    let (Some(chapter), Some(start)) = (number("c"), number("v")) else {
        return Vec::new();
    };

    match (number("x"), number("y")) {
        (Some(end_chapter), Some(end_verse)) => {
            cross_chapter(chapter, start, end_chapter, end_verse)
        }
        (Some(end), None) if end >= start => vec![ChapterGroup::range(chapter, start, end)],
        _ => vec![ChapterGroup::verse(chapter, start)],
    }
}

fn cross_chapter(chapter: u32, start: u32, end_chapter: u32, end_verse: u32) -> Vec<ChapterGroup> {
    if end_chapter == chapter {
        let end = end_verse.max(start);
        return vec![ChapterGroup::range(chapter, start, end)];
    }
    if end_chapter < chapter {
        return vec![ChapterGroup::verse(chapter, start)];
    }
    let mut groups = Vec::with_capacity((end_chapter - chapter + 1) as usize);
    groups.push(ChapterGroup::open(chapter, start));
    for whole in (chapter + 1)..end_chapter {
        groups.push(ChapterGroup::whole(whole));
    }
    groups.push(ChapterGroup::range(end_chapter, 1, end_verse));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_verse_has_equal_bounds() {
        assert_eq!(parse_chapter_verse("3:16"), vec![ChapterGroup::verse(3, 16)]);
        assert_eq!(parse_chapter_verse("3.16"), vec![ChapterGroup::verse(3, 16)]);
    }

    #[test]
    fn hyphen_range_sets_end_verse() {
        assert_eq!(
            parse_chapter_verse("3:16-18"),
            vec![ChapterGroup::range(3, 16, 18)]
        );
    }

    #[test]
    fn comma_list_keeps_only_first_run() {
        // Known limitation: later list entries are matched but not grouped.
        assert_eq!(
            parse_chapter_verse("3:16-18,20"),
            vec![ChapterGroup::range(3, 16, 18)]
        );
        assert_eq!(parse_chapter_verse("3:4,6"), vec![ChapterGroup::verse(3, 4)]);
    }

    #[test]
    fn cross_chapter_spans_every_chapter() {
        assert_eq!(
            parse_chapter_verse("3:16-4:2"),
            vec![ChapterGroup::open(3, 16), ChapterGroup::range(4, 1, 2)]
        );
        assert_eq!(
            parse_chapter_verse("1:5-3:1"),
            vec![
                ChapterGroup::open(1, 5),
                ChapterGroup::whole(2),
                ChapterGroup::range(3, 1, 1)
            ]
        );
        assert_eq!(
            parse_chapter_verse("3:16-3:18"),
            vec![ChapterGroup::range(3, 16, 18)]
        );
    }

    #[test]
    fn reversed_ranges_collapse_to_start() {
        assert_eq!(parse_chapter_verse("3:16-2"), vec![ChapterGroup::verse(3, 16)]);
        assert_eq!(parse_chapter_verse("4:2-3:1"), vec![ChapterGroup::verse(4, 2)]);
    }

    #[test]
    fn garbage_yields_no_groups() {
        assert!(parse_chapter_verse("abc").is_empty());
        assert!(parse_chapter_verse("").is_empty());
    }
}
