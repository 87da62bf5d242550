use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Genesis", "Gen"]),
    (Book::Exodus, &["Exodus", "Ex"]),
    (Book::Leviticus, &["Leviticus", "Lev"]),
    (Book::Numbers, &["Numeri", "Num"]),
    (Book::Deuteronomy, &["Deuteronomium", "Deut"]),
    (Book::Joshua, &["Jozua", "Joz"]),
    (Book::Judges, &["Richteren", "Richt", "Re"]),
    (Book::Ruth, &["Ruth", "Rut"]),
    (Book::FirstSamuel, &["1 Samuël", "1 Samuel", "1 Sam"]),
    (Book::SecondSamuel, &["2 Samuël", "2 Samuel", "2 Sam"]),
    (Book::FirstKings, &["1 Koningen", "1 Kon"]),
    (Book::SecondKings, &["2 Koningen", "2 Kon"]),
    (Book::FirstChronicles, &["1 Kronieken", "1 Kron"]),
    (Book::SecondChronicles, &["2 Kronieken", "2 Kron"]),
    (Book::Ezra, &["Ezra", "Ezr"]),
    (Book::Nehemiah, &["Nehemia", "Neh"]),
    (Book::Esther, &["Ester", "Est"]),
    (Book::Job, &["Job"]),
    (Book::Psalms, &["Psalmen", "Psalm", "Ps"]),
    (Book::Proverbs, &["Spreuken", "Spr"]),
    (Book::Ecclesiastes, &["Prediker", "Pred"]),
    (Book::SongOfSongs, &["Hooglied", "Hoogl"]),
    (Book::Isaiah, &["Jesaja", "Jes"]),
    (Book::Jeremiah, &["Jeremia", "Jer"]),
    (Book::Lamentations, &["Klaagliederen", "Klaagl"]),
    (Book::Ezekiel, &["Ezechiël", "Ezechiel", "Ez"]),
    (Book::Daniel, &["Daniël", "Daniel", "Dan"]),
    (Book::Hosea, &["Hosea", "Hos"]),
    (Book::Joel, &["Joël", "Joel"]),
    (Book::Amos, &["Amos", "Am"]),
    (Book::Obadiah, &["Obadja", "Ob"]),
    (Book::Jonah, &["Jona"]),
    (Book::Micah, &["Micha", "Mi"]),
    (Book::Nahum, &["Nahum", "Nah"]),
    (Book::Habakkuk, &["Habakuk", "Hab"]),
    (Book::Zephaniah, &["Sefanja", "Sef"]),
    (Book::Haggai, &["Haggai", "Hag"]),
    (Book::Zechariah, &["Zacharia", "Zach"]),
    (Book::Malachi, &["Maleachi", "Mal"]),
    (Book::Matthew, &["Matteüs", "Matteus", "Mattheüs", "Mat"]),
    (Book::Mark, &["Marcus", "Mar", "Mc"]),
    (Book::Luke, &["Lucas", "Luc", "Lc"]),
    (Book::John, &["Johannes", "Joh"]),
    (Book::Acts, &["Handelingen", "Hand"]),
    (Book::Romans, &["Romeinen", "Rom"]),
    (
        Book::FirstCorinthians,
        &["1 Korintiërs", "1 Korintiers", "1 Kor"],
    ),
    (
        Book::SecondCorinthians,
        &["2 Korintiërs", "2 Korintiers", "2 Kor"],
    ),
    (Book::Galatians, &["Galaten", "Gal"]),
    (Book::Ephesians, &["Efeziërs", "Efeziers", "Ef"]),
    (Book::Philippians, &["Filippenzen", "Fil"]),
    (Book::Colossians, &["Kolossenzen", "Kol"]),
    (Book::FirstThessalonians, &["1 Tessalonicenzen", "1 Tes"]),
    (Book::SecondThessalonians, &["2 Tessalonicenzen", "2 Tes"]),
    (Book::FirstTimothy, &["1 Timoteüs", "1 Timoteus", "1 Tim"]),
    (Book::SecondTimothy, &["2 Timoteüs", "2 Timoteus", "2 Tim"]),
    (Book::Titus, &["Titus", "Tit"]),
    (Book::Philemon, &["Filemon", "Filem"]),
    (Book::Hebrews, &["Hebreeën", "Hebreeen", "Heb"]),
    (Book::James, &["Jakobus", "Jak"]),
    (Book::FirstPeter, &["1 Petrus", "1 Petr"]),
    (Book::SecondPeter, &["2 Petrus", "2 Petr"]),
    (Book::FirstJohn, &["1 Johannes", "1 Joh"]),
    (Book::SecondJohn, &["2 Johannes", "2 Joh"]),
    (Book::ThirdJohn, &["3 Johannes", "3 Joh"]),
    (Book::Jude, &["Judas", "Jud"]),
    (Book::Revelation, &["Openbaring", "Openb", "Op"]),
];
