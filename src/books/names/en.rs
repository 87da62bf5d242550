use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Genesis", "Gen", "Gn", "Ge"]),
    (Book::Exodus, &["Exodus", "Exod", "Exo", "Ex"]),
    (Book::Leviticus, &["Leviticus", "Lev", "Lv"]),
    (Book::Numbers, &["Numbers", "Num", "Nm", "Nu"]),
    (Book::Deuteronomy, &["Deuteronomy", "Deut", "Dt"]),
    (Book::Joshua, &["Joshua", "Josh", "Jos"]),
    (Book::Judges, &["Judges", "Judg", "Jdg"]),
    (Book::Ruth, &["Ruth", "Ru"]),
    (
        Book::FirstSamuel,
        &["1 Samuel", "1 Sam", "1 Sa", "I Samuel", "First Samuel"],
    ),
    (
        Book::SecondSamuel,
        &["2 Samuel", "2 Sam", "2 Sa", "II Samuel", "Second Samuel"],
    ),
    (
        Book::FirstKings,
        &["1 Kings", "1 Kgs", "1 Ki", "I Kings", "First Kings"],
    ),
    (
        Book::SecondKings,
        &["2 Kings", "2 Kgs", "2 Ki", "II Kings", "Second Kings"],
    ),
    (
        Book::FirstChronicles,
        &[
            "1 Chronicles",
            "1 Chron",
            "1 Chr",
            "I Chronicles",
            "First Chronicles",
        ],
    ),
    (
        Book::SecondChronicles,
        &[
            "2 Chronicles",
            "2 Chron",
            "2 Chr",
            "II Chronicles",
            "Second Chronicles",
        ],
    ),
    (Book::Ezra, &["Ezra", "Ezr"]),
    (Book::Nehemiah, &["Nehemiah", "Neh"]),
    (Book::Esther, &["Esther", "Esth", "Est"]),
    (Book::Job, &["Job", "Jb"]),
    (Book::Psalms, &["Psalms", "Psalm", "Pss", "Psa", "Ps"]),
    (Book::Proverbs, &["Proverbs", "Prov", "Prv", "Pr"]),
    (
        Book::Ecclesiastes,
        &["Ecclesiastes", "Eccles", "Eccl", "Ecc", "Qoheleth"],
    ),
    (
        Book::SongOfSongs,
        &["Song of Songs", "Song of Solomon", "Canticles", "Song"],
    ),
    (Book::Isaiah, &["Isaiah", "Isa", "Is"]),
    (Book::Jeremiah, &["Jeremiah", "Jer"]),
    (Book::Lamentations, &["Lamentations", "Lam"]),
    (Book::Ezekiel, &["Ezekiel", "Ezek", "Eze"]),
    (Book::Daniel, &["Daniel", "Dan", "Dn"]),
    (Book::Hosea, &["Hosea", "Hos"]),
    (Book::Joel, &["Joel", "Jl"]),
    (Book::Amos, &["Amos", "Am"]),
    (Book::Obadiah, &["Obadiah", "Obad", "Ob"]),
    (Book::Jonah, &["Jonah", "Jon"]),
    (Book::Micah, &["Micah", "Mic"]),
    (Book::Nahum, &["Nahum", "Nah"]),
    (Book::Habakkuk, &["Habakkuk", "Hab"]),
    (Book::Zephaniah, &["Zephaniah", "Zeph"]),
    (Book::Haggai, &["Haggai", "Hag"]),
    (Book::Zechariah, &["Zechariah", "Zech"]),
    (Book::Malachi, &["Malachi", "Mal"]),
    (Book::Matthew, &["Matthew", "Matt", "Mt"]),
    (Book::Mark, &["Mark", "Mrk", "Mk"]),
    (Book::Luke, &["Luke", "Lk"]),
    (Book::John, &["John", "Jhn", "Jn"]),
    (Book::Acts, &["Acts", "Ac"]),
    (Book::Romans, &["Romans", "Rom", "Rm"]),
    (
        Book::FirstCorinthians,
        &["1 Corinthians", "1 Cor", "I Corinthians", "First Corinthians"],
    ),
    (
        Book::SecondCorinthians,
        &["2 Corinthians", "2 Cor", "II Corinthians", "Second Corinthians"],
    ),
    (Book::Galatians, &["Galatians", "Gal"]),
    (Book::Ephesians, &["Ephesians", "Eph"]),
    (Book::Philippians, &["Philippians", "Phil", "Php"]),
    (Book::Colossians, &["Colossians", "Col"]),
    (
        Book::FirstThessalonians,
        &[
            "1 Thessalonians",
            "1 Thess",
            "1 Th",
            "I Thessalonians",
            "First Thessalonians",
        ],
    ),
    (
        Book::SecondThessalonians,
        &[
            "2 Thessalonians",
            "2 Thess",
            "2 Th",
            "II Thessalonians",
            "Second Thessalonians",
        ],
    ),
    (
        Book::FirstTimothy,
        &["1 Timothy", "1 Tim", "I Timothy", "First Timothy"],
    ),
    (
        Book::SecondTimothy,
        &["2 Timothy", "2 Tim", "II Timothy", "Second Timothy"],
    ),
    (Book::Titus, &["Titus", "Tit"]),
    (Book::Philemon, &["Philemon", "Philem", "Phlm", "Phm"]),
    (Book::Hebrews, &["Hebrews", "Heb"]),
    (Book::James, &["James", "Jas", "Jm"]),
    (
        Book::FirstPeter,
        &["1 Peter", "1 Pet", "1 Pt", "I Peter", "First Peter"],
    ),
    (
        Book::SecondPeter,
        &["2 Peter", "2 Pet", "2 Pt", "II Peter", "Second Peter"],
    ),
    (Book::FirstJohn, &["1 John", "1 Jn", "I John", "First John"]),
    (Book::SecondJohn, &["2 John", "2 Jn", "II John", "Second John"]),
    (Book::ThirdJohn, &["3 John", "3 Jn", "III John", "Third John"]),
    (Book::Jude, &["Jude"]),
    (Book::Revelation, &["Revelation", "Rev", "Rv"]),
];
