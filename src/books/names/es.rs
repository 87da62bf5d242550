use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Génesis", "Genesis", "Gén", "Gen", "Gn"]),
    (Book::Exodus, &["Éxodo", "Exodo", "Éx", "Ex"]),
    (Book::Leviticus, &["Levítico", "Levitico", "Lev", "Lv"]),
    (Book::Numbers, &["Números", "Numeros", "Núm", "Num", "Nm"]),
    (Book::Deuteronomy, &["Deuteronomio", "Deut", "Dt"]),
    (Book::Joshua, &["Josué", "Josue", "Jos"]),
    (Book::Judges, &["Jueces", "Jue", "Jc"]),
    (Book::Ruth, &["Rut", "Rt"]),
    (Book::FirstSamuel, &["1 Samuel", "1 Sam"]),
    (Book::SecondSamuel, &["2 Samuel", "2 Sam"]),
    (Book::FirstKings, &["1 Reyes", "1 Re", "1 R"]),
    (Book::SecondKings, &["2 Reyes", "2 Re", "2 R"]),
    (Book::FirstChronicles, &["1 Crónicas", "1 Cronicas", "1 Cr"]),
    (Book::SecondChronicles, &["2 Crónicas", "2 Cronicas", "2 Cr"]),
    (Book::Ezra, &["Esdras", "Esd"]),
    (Book::Nehemiah, &["Nehemías", "Nehemias", "Neh"]),
    (Book::Esther, &["Ester", "Est"]),
    (Book::Job, &["Job"]),
    (Book::Psalms, &["Salmos", "Salmo", "Sal"]),
    (Book::Proverbs, &["Proverbios", "Prov", "Pr"]),
    (Book::Ecclesiastes, &["Eclesiastés", "Eclesiastes", "Ecl"]),
    (
        Book::SongOfSongs,
        &["Cantar de los Cantares", "Cantares", "Cant", "Cnt"],
    ),
    (Book::Isaiah, &["Isaías", "Isaias", "Is"]),
    (Book::Jeremiah, &["Jeremías", "Jeremias", "Jer"]),
    (Book::Lamentations, &["Lamentaciones", "Lam"]),
    (Book::Ezekiel, &["Ezequiel", "Ez"]),
    (Book::Daniel, &["Daniel", "Dan", "Dn"]),
    (Book::Hosea, &["Oseas", "Os"]),
    (Book::Joel, &["Joel", "Jl"]),
    (Book::Amos, &["Amós", "Amos", "Am"]),
    (Book::Obadiah, &["Abdías", "Abdias", "Abd"]),
    (Book::Jonah, &["Jonás", "Jonas", "Jon"]),
    (Book::Micah, &["Miqueas", "Mi"]),
    (Book::Nahum, &["Nahúm", "Nahum", "Nah"]),
    (Book::Habakkuk, &["Habacuc", "Hab"]),
    (Book::Zephaniah, &["Sofonías", "Sofonias", "Sof"]),
    (Book::Haggai, &["Hageo", "Hag"]),
    (Book::Zechariah, &["Zacarías", "Zacarias", "Zac"]),
    (Book::Malachi, &["Malaquías", "Malaquias", "Mal"]),
    (Book::Matthew, &["Mateo", "Mt"]),
    (Book::Mark, &["Marcos", "Mc", "Mr"]),
    (Book::Luke, &["Lucas", "Lc"]),
    (Book::John, &["Juan", "Jn"]),
    (Book::Acts, &["Hechos", "Hch"]),
    (Book::Romans, &["Romanos", "Rom", "Ro"]),
    (Book::FirstCorinthians, &["1 Corintios", "1 Cor", "1 Co"]),
    (Book::SecondCorinthians, &["2 Corintios", "2 Cor", "2 Co"]),
    (Book::Galatians, &["Gálatas", "Galatas", "Gál", "Gal"]),
    (Book::Ephesians, &["Efesios", "Ef"]),
    (Book::Philippians, &["Filipenses", "Fil", "Flp"]),
    (Book::Colossians, &["Colosenses", "Col"]),
    (
        Book::FirstThessalonians,
        &["1 Tesalonicenses", "1 Tes", "1 Ts"],
    ),
    (
        Book::SecondThessalonians,
        &["2 Tesalonicenses", "2 Tes", "2 Ts"],
    ),
    (Book::FirstTimothy, &["1 Timoteo", "1 Tim", "1 Ti"]),
    (Book::SecondTimothy, &["2 Timoteo", "2 Tim", "2 Ti"]),
    (Book::Titus, &["Tito", "Tit"]),
    (Book::Philemon, &["Filemón", "Filemon", "Flm"]),
    (Book::Hebrews, &["Hebreos", "Heb"]),
    (Book::James, &["Santiago", "Stg"]),
    (Book::FirstPeter, &["1 Pedro", "1 Pe", "1 Pd"]),
    (Book::SecondPeter, &["2 Pedro", "2 Pe", "2 Pd"]),
    (Book::FirstJohn, &["1 Juan", "1 Jn"]),
    (Book::SecondJohn, &["2 Juan", "2 Jn"]),
    (Book::ThirdJohn, &["3 Juan", "3 Jn"]),
    (Book::Jude, &["Judas", "Jds"]),
    (Book::Revelation, &["Apocalipsis", "Apoc", "Ap"]),
];
