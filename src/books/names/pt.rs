use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Gênesis", "Genesis", "Gn"]),
    (Book::Exodus, &["Êxodo", "Exodo", "Êx", "Ex"]),
    (Book::Leviticus, &["Levítico", "Levitico", "Lv"]),
    (Book::Numbers, &["Números", "Numeros", "Nm"]),
    (Book::Deuteronomy, &["Deuteronômio", "Deuteronomio", "Dt"]),
    (Book::Joshua, &["Josué", "Josue", "Js"]),
    (Book::Judges, &["Juízes", "Juizes", "Jz"]),
    (Book::Ruth, &["Rute", "Rt"]),
    (Book::FirstSamuel, &["1 Samuel", "1 Sm"]),
    (Book::SecondSamuel, &["2 Samuel", "2 Sm"]),
    (Book::FirstKings, &["1 Reis", "1 Rs"]),
    (Book::SecondKings, &["2 Reis", "2 Rs"]),
    (Book::FirstChronicles, &["1 Crônicas", "1 Cronicas", "1 Cr"]),
    (Book::SecondChronicles, &["2 Crônicas", "2 Cronicas", "2 Cr"]),
    (Book::Ezra, &["Esdras", "Ed"]),
    (Book::Nehemiah, &["Neemias", "Ne"]),
    (Book::Esther, &["Ester", "Et"]),
    (Book::Job, &["Jó"]),
    (Book::Psalms, &["Salmos", "Salmo", "Sl"]),
    (Book::Proverbs, &["Provérbios", "Proverbios", "Pv"]),
    (Book::Ecclesiastes, &["Eclesiastes", "Ec"]),
    (
        Book::SongOfSongs,
        &["Cântico dos Cânticos", "Cânticos", "Cantares", "Ct"],
    ),
    (Book::Isaiah, &["Isaías", "Isaias", "Is"]),
    (Book::Jeremiah, &["Jeremias", "Jr"]),
    (Book::Lamentations, &["Lamentações", "Lamentacoes", "Lm"]),
    (Book::Ezekiel, &["Ezequiel", "Ez"]),
    (Book::Daniel, &["Daniel", "Dn"]),
    (Book::Hosea, &["Oséias", "Oseias", "Os"]),
    (Book::Joel, &["Joel", "Jl"]),
    (Book::Amos, &["Amós", "Amos", "Am"]),
    (Book::Obadiah, &["Obadias", "Ob"]),
    (Book::Jonah, &["Jonas", "Jn"]),
    (Book::Micah, &["Miquéias", "Miqueias", "Mq"]),
    (Book::Nahum, &["Naum", "Na"]),
    (Book::Habakkuk, &["Habacuque", "Hc"]),
    (Book::Zephaniah, &["Sofonias", "Sf"]),
    (Book::Haggai, &["Ageu", "Ag"]),
    (Book::Zechariah, &["Zacarias", "Zc"]),
    (Book::Malachi, &["Malaquias", "Ml"]),
    (Book::Matthew, &["Mateus", "Mt"]),
    (Book::Mark, &["Marcos", "Mc"]),
    (Book::Luke, &["Lucas", "Lc"]),
    (Book::John, &["João", "Joao", "Jo"]),
    (Book::Acts, &["Atos", "At"]),
    (Book::Romans, &["Romanos", "Rm"]),
    (
        Book::FirstCorinthians,
        &["1 Coríntios", "1 Corintios", "1 Co"],
    ),
    (
        Book::SecondCorinthians,
        &["2 Coríntios", "2 Corintios", "2 Co"],
    ),
    (Book::Galatians, &["Gálatas", "Galatas", "Gl"]),
    (Book::Ephesians, &["Efésios", "Efesios", "Ef"]),
    (Book::Philippians, &["Filipenses", "Fp"]),
    (Book::Colossians, &["Colossenses", "Cl"]),
    (Book::FirstThessalonians, &["1 Tessalonicenses", "1 Ts"]),
    (Book::SecondThessalonians, &["2 Tessalonicenses", "2 Ts"]),
    (Book::FirstTimothy, &["1 Timóteo", "1 Timoteo", "1 Tm"]),
    (Book::SecondTimothy, &["2 Timóteo", "2 Timoteo", "2 Tm"]),
    (Book::Titus, &["Tito", "Tt"]),
    (Book::Philemon, &["Filemom", "Fm"]),
    (Book::Hebrews, &["Hebreus", "Hb"]),
    (Book::James, &["Tiago", "Tg"]),
    (Book::FirstPeter, &["1 Pedro", "1 Pe"]),
    (Book::SecondPeter, &["2 Pedro", "2 Pe"]),
    (Book::FirstJohn, &["1 João", "1 Joao", "1 Jo"]),
    (Book::SecondJohn, &["2 João", "2 Joao", "2 Jo"]),
    (Book::ThirdJohn, &["3 João", "3 Joao", "3 Jo"]),
    (Book::Jude, &["Judas", "Jd"]),
    (Book::Revelation, &["Apocalipse", "Ap"]),
];
