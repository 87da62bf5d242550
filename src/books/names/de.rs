use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (
        Book::Genesis,
        &["1. Mose", "1 Mose", "1 Mo", "Genesis", "Gen"],
    ),
    (Book::Exodus, &["2. Mose", "2 Mose", "2 Mo", "Exodus", "Ex"]),
    (
        Book::Leviticus,
        &["3. Mose", "3 Mose", "3 Mo", "Levitikus", "Lev"],
    ),
    (Book::Numbers, &["4. Mose", "4 Mose", "4 Mo", "Numeri", "Num"]),
    (
        Book::Deuteronomy,
        &["5. Mose", "5 Mose", "5 Mo", "Deuteronomium", "Dtn"],
    ),
    (Book::Joshua, &["Josua", "Jos"]),
    (Book::Judges, &["Richter", "Ri"]),
    (Book::Ruth, &["Rut", "Ruth", "Rt"]),
    (Book::FirstSamuel, &["1. Samuel", "1 Samuel", "1 Sam"]),
    (Book::SecondSamuel, &["2. Samuel", "2 Samuel", "2 Sam"]),
    (Book::FirstKings, &["1. Könige", "1 Könige", "1 Kön"]),
    (Book::SecondKings, &["2. Könige", "2 Könige", "2 Kön"]),
    (Book::FirstChronicles, &["1. Chronik", "1 Chronik", "1 Chr"]),
    (Book::SecondChronicles, &["2. Chronik", "2 Chronik", "2 Chr"]),
    (Book::Ezra, &["Esra", "Esr"]),
    (Book::Nehemiah, &["Nehemia", "Neh"]),
    (Book::Esther, &["Ester", "Est"]),
    (Book::Job, &["Hiob", "Ijob", "Hi"]),
    (Book::Psalms, &["Psalmen", "Psalm", "Ps"]),
    (Book::Proverbs, &["Sprüche", "Spr"]),
    (Book::Ecclesiastes, &["Prediger", "Kohelet", "Pred", "Koh"]),
    (Book::SongOfSongs, &["Hoheslied", "Hld"]),
    (Book::Isaiah, &["Jesaja", "Jes"]),
    (Book::Jeremiah, &["Jeremia", "Jer"]),
    (Book::Lamentations, &["Klagelieder", "Klgl"]),
    (Book::Ezekiel, &["Hesekiel", "Ezechiel", "Hes", "Ez"]),
    (Book::Daniel, &["Daniel", "Dan"]),
    (Book::Hosea, &["Hosea", "Hos"]),
    (Book::Joel, &["Joel"]),
    (Book::Amos, &["Amos", "Am"]),
    (Book::Obadiah, &["Obadja", "Obd"]),
    (Book::Jonah, &["Jona"]),
    (Book::Micah, &["Micha", "Mi"]),
    (Book::Nahum, &["Nahum", "Nah"]),
    (Book::Habakkuk, &["Habakuk", "Hab"]),
    (Book::Zephaniah, &["Zefanja", "Zephanja", "Zef"]),
    (Book::Haggai, &["Haggai", "Hag"]),
    (Book::Zechariah, &["Sacharja", "Sach"]),
    (Book::Malachi, &["Maleachi", "Mal"]),
    (Book::Matthew, &["Matthäus", "Mt"]),
    (Book::Mark, &["Markus", "Mk"]),
    (Book::Luke, &["Lukas", "Lk"]),
    (Book::John, &["Johannes", "Joh"]),
    (Book::Acts, &["Apostelgeschichte", "Apg"]),
    (Book::Romans, &["Römer", "Röm"]),
    (
        Book::FirstCorinthians,
        &["1. Korinther", "1 Korinther", "1 Kor"],
    ),
    (
        Book::SecondCorinthians,
        &["2. Korinther", "2 Korinther", "2 Kor"],
    ),
    (Book::Galatians, &["Galater", "Gal"]),
    (Book::Ephesians, &["Epheser", "Eph"]),
    (Book::Philippians, &["Philipper", "Phil"]),
    (Book::Colossians, &["Kolosser", "Kol"]),
    (
        Book::FirstThessalonians,
        &["1. Thessalonicher", "1 Thessalonicher", "1 Thess"],
    ),
    (
        Book::SecondThessalonians,
        &["2. Thessalonicher", "2 Thessalonicher", "2 Thess"],
    ),
    (Book::FirstTimothy, &["1. Timotheus", "1 Timotheus", "1 Tim"]),
    (
        Book::SecondTimothy,
        &["2. Timotheus", "2 Timotheus", "2 Tim"],
    ),
    (Book::Titus, &["Titus", "Tit"]),
    (Book::Philemon, &["Philemon", "Phlm"]),
    (Book::Hebrews, &["Hebräer", "Hebr"]),
    (Book::James, &["Jakobus", "Jak"]),
    (Book::FirstPeter, &["1. Petrus", "1 Petrus", "1 Petr"]),
    (Book::SecondPeter, &["2. Petrus", "2 Petrus", "2 Petr"]),
    (Book::FirstJohn, &["1. Johannes", "1 Johannes", "1 Joh"]),
    (Book::SecondJohn, &["2. Johannes", "2 Johannes", "2 Joh"]),
    (Book::ThirdJohn, &["3. Johannes", "3 Johannes", "3 Joh"]),
    (Book::Jude, &["Judas", "Jud"]),
    (Book::Revelation, &["Offenbarung", "Offb"]),
];
