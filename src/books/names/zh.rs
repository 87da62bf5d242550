use crate::books::Book;

// Simplified and traditional full names, then the standard one- or
// two-character abbreviations.
pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["创世记", "創世記", "创", "創"]),
    (Book::Exodus, &["出埃及记", "出埃及記", "出"]),
    (Book::Leviticus, &["利未记", "利未記", "利"]),
    (Book::Numbers, &["民数记", "民數記", "民"]),
    (Book::Deuteronomy, &["申命记", "申命記", "申"]),
    (Book::Joshua, &["约书亚记", "約書亞記", "书", "書"]),
    (Book::Judges, &["士师记", "士師記", "士"]),
    (Book::Ruth, &["路得记", "路得記", "得"]),
    (Book::FirstSamuel, &["撒母耳记上", "撒母耳記上", "撒上"]),
    (Book::SecondSamuel, &["撒母耳记下", "撒母耳記下", "撒下"]),
    (Book::FirstKings, &["列王纪上", "列王紀上", "王上"]),
    (Book::SecondKings, &["列王纪下", "列王紀下", "王下"]),
    (Book::FirstChronicles, &["历代志上", "歷代志上", "代上"]),
    (Book::SecondChronicles, &["历代志下", "歷代志下", "代下"]),
    (Book::Ezra, &["以斯拉记", "以斯拉記", "拉"]),
    (Book::Nehemiah, &["尼希米记", "尼希米記", "尼"]),
    (Book::Esther, &["以斯帖记", "以斯帖記", "斯"]),
    (Book::Job, &["约伯记", "約伯記", "伯"]),
    (Book::Psalms, &["诗篇", "詩篇", "诗", "詩"]),
    (Book::Proverbs, &["箴言", "箴"]),
    (Book::Ecclesiastes, &["传道书", "傳道書", "传", "傳"]),
    (Book::SongOfSongs, &["雅歌", "歌"]),
    (Book::Isaiah, &["以赛亚书", "以賽亞書", "赛", "賽"]),
    (Book::Jeremiah, &["耶利米书", "耶利米書", "耶"]),
    (Book::Lamentations, &["耶利米哀歌", "哀"]),
    (Book::Ezekiel, &["以西结书", "以西結書", "结", "結"]),
    (Book::Daniel, &["但以理书", "但以理書", "但"]),
    (Book::Hosea, &["何西阿书", "何西阿書", "何"]),
    (Book::Joel, &["约珥书", "約珥書", "珥"]),
    (Book::Amos, &["阿摩司书", "阿摩司書", "摩"]),
    (Book::Obadiah, &["俄巴底亚书", "俄巴底亞書", "俄"]),
    (Book::Jonah, &["约拿书", "約拿書", "拿"]),
    (Book::Micah, &["弥迦书", "彌迦書", "弥", "彌"]),
    (Book::Nahum, &["那鸿书", "那鴻書", "鸿", "鴻"]),
    (Book::Habakkuk, &["哈巴谷书", "哈巴谷書", "哈"]),
    (Book::Zephaniah, &["西番雅书", "西番雅書", "番"]),
    (Book::Haggai, &["哈该书", "哈該書", "该", "該"]),
    (Book::Zechariah, &["撒迦利亚书", "撒迦利亞書", "亚", "亞"]),
    (Book::Malachi, &["玛拉基书", "瑪拉基書", "玛", "瑪"]),
    (Book::Matthew, &["马太福音", "馬太福音", "太"]),
    (Book::Mark, &["马可福音", "馬可福音", "可"]),
    (Book::Luke, &["路加福音", "路"]),
    (Book::John, &["约翰福音", "約翰福音", "约", "約"]),
    (Book::Acts, &["使徒行传", "使徒行傳", "徒"]),
    (Book::Romans, &["罗马书", "羅馬書", "罗", "羅"]),
    (Book::FirstCorinthians, &["哥林多前书", "哥林多前書", "林前"]),
    (
        Book::SecondCorinthians,
        &["哥林多后书", "哥林多後書", "林后", "林後"],
    ),
    (Book::Galatians, &["加拉太书", "加拉太書", "加"]),
    (Book::Ephesians, &["以弗所书", "以弗所書", "弗"]),
    (Book::Philippians, &["腓立比书", "腓立比書", "腓"]),
    (Book::Colossians, &["歌罗西书", "歌羅西書", "西"]),
    (
        Book::FirstThessalonians,
        &["帖撒罗尼迦前书", "帖撒羅尼迦前書", "帖前"],
    ),
    (
        Book::SecondThessalonians,
        &["帖撒罗尼迦后书", "帖撒羅尼迦後書", "帖后", "帖後"],
    ),
    (Book::FirstTimothy, &["提摩太前书", "提摩太前書", "提前"]),
    (
        Book::SecondTimothy,
        &["提摩太后书", "提摩太後書", "提后", "提後"],
    ),
    (Book::Titus, &["提多书", "提多書", "多"]),
    (Book::Philemon, &["腓利门书", "腓利門書", "门", "門"]),
    (Book::Hebrews, &["希伯来书", "希伯來書", "来", "來"]),
    (Book::James, &["雅各书", "雅各書", "雅"]),
    (Book::FirstPeter, &["彼得前书", "彼得前書", "彼前"]),
    (Book::SecondPeter, &["彼得后书", "彼得後書", "彼后", "彼後"]),
    (Book::FirstJohn, &["约翰一书", "約翰一書", "约一", "約一"]),
    (Book::SecondJohn, &["约翰二书", "約翰二書", "约二", "約二"]),
    (Book::ThirdJohn, &["约翰三书", "約翰三書", "约三", "約三"]),
    (Book::Jude, &["犹大书", "猶大書", "犹", "猶"]),
    (Book::Revelation, &["启示录", "啟示錄", "启", "啟"]),
];
