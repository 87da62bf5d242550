use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Genèse", "Genese", "Gen", "Gn"]),
    (Book::Exodus, &["Exode", "Ex"]),
    (Book::Leviticus, &["Lévitique", "Levitique", "Lév", "Lv"]),
    (Book::Numbers, &["Nombres", "Nomb", "Nb"]),
    (Book::Deuteronomy, &["Deutéronome", "Deuteronome", "Dt"]),
    (Book::Joshua, &["Josué", "Josue", "Jos"]),
    (Book::Judges, &["Juges", "Jg"]),
    (Book::Ruth, &["Ruth", "Rt"]),
    (Book::FirstSamuel, &["1 Samuel", "1 Sam"]),
    (Book::SecondSamuel, &["2 Samuel", "2 Sam"]),
    (Book::FirstKings, &["1 Rois", "1 R"]),
    (Book::SecondKings, &["2 Rois", "2 R"]),
    (Book::FirstChronicles, &["1 Chroniques", "1 Chr", "1 Ch"]),
    (Book::SecondChronicles, &["2 Chroniques", "2 Chr", "2 Ch"]),
    (Book::Ezra, &["Esdras", "Esd"]),
    (Book::Nehemiah, &["Néhémie", "Nehemie", "Neh", "Né"]),
    (Book::Esther, &["Esther", "Est"]),
    (Book::Job, &["Job", "Jb"]),
    (Book::Psalms, &["Psaumes", "Psaume", "Ps"]),
    (Book::Proverbs, &["Proverbes", "Prov", "Pr"]),
    (
        Book::Ecclesiastes,
        &["Ecclésiaste", "Ecclesiaste", "Qohélet", "Ec", "Qo"],
    ),
    (Book::SongOfSongs, &["Cantique des Cantiques", "Cant", "Ct"]),
    (Book::Isaiah, &["Ésaïe", "Esaie", "Isaïe", "Es", "Is"]),
    (Book::Jeremiah, &["Jérémie", "Jeremie", "Jér", "Jr"]),
    (Book::Lamentations, &["Lamentations", "Lm"]),
    (Book::Ezekiel, &["Ézéchiel", "Ezechiel", "Éz", "Ez"]),
    (Book::Daniel, &["Daniel", "Dn"]),
    (Book::Hosea, &["Osée", "Osee", "Os"]),
    (Book::Joel, &["Joël", "Joel", "Jl"]),
    (Book::Amos, &["Amos", "Am"]),
    (Book::Obadiah, &["Abdias", "Ab"]),
    (Book::Jonah, &["Jonas", "Jon"]),
    (Book::Micah, &["Michée", "Michee", "Mi"]),
    (Book::Nahum, &["Nahum", "Na"]),
    (Book::Habakkuk, &["Habacuc", "Ha"]),
    (Book::Zephaniah, &["Sophonie", "So"]),
    (Book::Haggai, &["Aggée", "Aggee", "Ag"]),
    (Book::Zechariah, &["Zacharie", "Za"]),
    (Book::Malachi, &["Malachie", "Ml"]),
    (Book::Matthew, &["Matthieu", "Mt"]),
    (Book::Mark, &["Marc", "Mc"]),
    (Book::Luke, &["Luc", "Lc"]),
    (Book::John, &["Jean", "Jn"]),
    (Book::Acts, &["Actes", "Ac"]),
    (Book::Romans, &["Romains", "Rm"]),
    (Book::FirstCorinthians, &["1 Corinthiens", "1 Co"]),
    (Book::SecondCorinthians, &["2 Corinthiens", "2 Co"]),
    (Book::Galatians, &["Galates", "Ga"]),
    (Book::Ephesians, &["Éphésiens", "Ephesiens", "Ep"]),
    (Book::Philippians, &["Philippiens", "Ph"]),
    (Book::Colossians, &["Colossiens", "Col"]),
    (Book::FirstThessalonians, &["1 Thessaloniciens", "1 Th"]),
    (Book::SecondThessalonians, &["2 Thessaloniciens", "2 Th"]),
    (Book::FirstTimothy, &["1 Timothée", "1 Timothee", "1 Tm"]),
    (Book::SecondTimothy, &["2 Timothée", "2 Timothee", "2 Tm"]),
    (Book::Titus, &["Tite", "Tt"]),
    (Book::Philemon, &["Philémon", "Philemon", "Phm"]),
    (Book::Hebrews, &["Hébreux", "Hebreux", "Hé", "He"]),
    (Book::James, &["Jacques", "Jc"]),
    (Book::FirstPeter, &["1 Pierre", "1 P"]),
    (Book::SecondPeter, &["2 Pierre", "2 P"]),
    (Book::FirstJohn, &["1 Jean", "1 Jn"]),
    (Book::SecondJohn, &["2 Jean", "2 Jn"]),
    (Book::ThirdJohn, &["3 Jean", "3 Jn"]),
    (Book::Jude, &["Jude", "Jud"]),
    (Book::Revelation, &["Apocalypse", "Ap"]),
];
