use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Kejadian", "Kej"]),
    (Book::Exodus, &["Keluaran", "Kel"]),
    (Book::Leviticus, &["Imamat", "Im"]),
    (Book::Numbers, &["Bilangan", "Bil"]),
    (Book::Deuteronomy, &["Ulangan", "Ul"]),
    (Book::Joshua, &["Yosua", "Yos"]),
    (Book::Judges, &["Hakim-hakim", "Hak"]),
    (Book::Ruth, &["Rut"]),
    (Book::FirstSamuel, &["1 Samuel", "1 Sam"]),
    (Book::SecondSamuel, &["2 Samuel", "2 Sam"]),
    (Book::FirstKings, &["1 Raja-raja", "1 Raj"]),
    (Book::SecondKings, &["2 Raja-raja", "2 Raj"]),
    (Book::FirstChronicles, &["1 Tawarikh", "1 Taw"]),
    (Book::SecondChronicles, &["2 Tawarikh", "2 Taw"]),
    (Book::Ezra, &["Ezra", "Ezr"]),
    (Book::Nehemiah, &["Nehemia", "Neh"]),
    (Book::Esther, &["Ester", "Est"]),
    (Book::Job, &["Ayub", "Ayb"]),
    (Book::Psalms, &["Mazmur", "Mzm"]),
    (Book::Proverbs, &["Amsal", "Ams"]),
    (Book::Ecclesiastes, &["Pengkhotbah", "Pkh"]),
    (Book::SongOfSongs, &["Kidung Agung", "Kid"]),
    (Book::Isaiah, &["Yesaya", "Yes"]),
    (Book::Jeremiah, &["Yeremia", "Yer"]),
    (Book::Lamentations, &["Ratapan", "Rat"]),
    (Book::Ezekiel, &["Yehezkiel", "Yeh"]),
    (Book::Daniel, &["Daniel", "Dan"]),
    (Book::Hosea, &["Hosea", "Hos"]),
    (Book::Joel, &["Yoel", "Yl"]),
    (Book::Amos, &["Amos", "Am"]),
    (Book::Obadiah, &["Obaja", "Ob"]),
    (Book::Jonah, &["Yunus", "Yun"]),
    (Book::Micah, &["Mikha", "Mi"]),
    (Book::Nahum, &["Nahum", "Nah"]),
    (Book::Habakkuk, &["Habakuk", "Hab"]),
    (Book::Zephaniah, &["Zefanya", "Zef"]),
    (Book::Haggai, &["Hagai", "Hag"]),
    (Book::Zechariah, &["Zakharia", "Za"]),
    (Book::Malachi, &["Maleakhi", "Mal"]),
    (Book::Matthew, &["Matius", "Mat"]),
    (Book::Mark, &["Markus", "Mrk"]),
    (Book::Luke, &["Lukas", "Luk"]),
    (Book::John, &["Yohanes", "Yoh"]),
    (Book::Acts, &["Kisah Para Rasul", "Kis"]),
    (Book::Romans, &["Roma", "Rm"]),
    (Book::FirstCorinthians, &["1 Korintus", "1 Kor"]),
    (Book::SecondCorinthians, &["2 Korintus", "2 Kor"]),
    (Book::Galatians, &["Galatia", "Gal"]),
    (Book::Ephesians, &["Efesus", "Ef"]),
    (Book::Philippians, &["Filipi", "Flp"]),
    (Book::Colossians, &["Kolose", "Kol"]),
    (Book::FirstThessalonians, &["1 Tesalonika", "1 Tes"]),
    (Book::SecondThessalonians, &["2 Tesalonika", "2 Tes"]),
    (Book::FirstTimothy, &["1 Timotius", "1 Tim"]),
    (Book::SecondTimothy, &["2 Timotius", "2 Tim"]),
    (Book::Titus, &["Titus", "Tit"]),
    (Book::Philemon, &["Filemon", "Flm"]),
    (Book::Hebrews, &["Ibrani", "Ibr"]),
    (Book::James, &["Yakobus", "Yak"]),
    (Book::FirstPeter, &["1 Petrus", "1 Ptr"]),
    (Book::SecondPeter, &["2 Petrus", "2 Ptr"]),
    (Book::FirstJohn, &["1 Yohanes", "1 Yoh"]),
    (Book::SecondJohn, &["2 Yohanes", "2 Yoh"]),
    (Book::ThirdJohn, &["3 Yohanes", "3 Yoh"]),
    (Book::Jude, &["Yudas", "Yud"]),
    (Book::Revelation, &["Wahyu", "Why"]),
];
