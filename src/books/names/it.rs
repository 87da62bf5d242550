use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Genesi", "Gen", "Gn"]),
    (Book::Exodus, &["Esodo", "Es"]),
    (Book::Leviticus, &["Levitico", "Lv"]),
    (Book::Numbers, &["Numeri", "Nm"]),
    (Book::Deuteronomy, &["Deuteronomio", "Dt"]),
    (Book::Joshua, &["Giosuè", "Giosue", "Gs"]),
    (Book::Judges, &["Giudici", "Gdc"]),
    (Book::Ruth, &["Rut", "Rt"]),
    (Book::FirstSamuel, &["1 Samuele", "1 Sam"]),
    (Book::SecondSamuel, &["2 Samuele", "2 Sam"]),
    (Book::FirstKings, &["1 Re"]),
    (Book::SecondKings, &["2 Re"]),
    (Book::FirstChronicles, &["1 Cronache", "1 Cr"]),
    (Book::SecondChronicles, &["2 Cronache", "2 Cr"]),
    (Book::Ezra, &["Esdra", "Esd"]),
    (Book::Nehemiah, &["Neemia", "Ne"]),
    (Book::Esther, &["Ester", "Est"]),
    (Book::Job, &["Giobbe", "Gb"]),
    (Book::Psalms, &["Salmi", "Salmo", "Sal"]),
    (Book::Proverbs, &["Proverbi", "Pr"]),
    (
        Book::Ecclesiastes,
        &["Ecclesiaste", "Qoèlet", "Qoelet", "Qo"],
    ),
    (Book::SongOfSongs, &["Cantico dei Cantici", "Ct"]),
    (Book::Isaiah, &["Isaia", "Is"]),
    (Book::Jeremiah, &["Geremia", "Ger"]),
    (Book::Lamentations, &["Lamentazioni", "Lam"]),
    (Book::Ezekiel, &["Ezechiele", "Ez"]),
    (Book::Daniel, &["Daniele", "Dn"]),
    (Book::Hosea, &["Osea", "Os"]),
    (Book::Joel, &["Gioele", "Gl"]),
    (Book::Amos, &["Amos", "Am"]),
    (Book::Obadiah, &["Abdia", "Abd"]),
    (Book::Jonah, &["Giona", "Gio"]),
    (Book::Micah, &["Michea", "Mi"]),
    (Book::Nahum, &["Naum", "Na"]),
    (Book::Habakkuk, &["Abacuc", "Ab"]),
    (Book::Zephaniah, &["Sofonia", "Sof"]),
    (Book::Haggai, &["Aggeo", "Ag"]),
    (Book::Zechariah, &["Zaccaria", "Zc"]),
    (Book::Malachi, &["Malachia", "Ml"]),
    (Book::Matthew, &["Matteo", "Mt"]),
    (Book::Mark, &["Marco", "Mc"]),
    (Book::Luke, &["Luca", "Lc"]),
    (Book::John, &["Giovanni", "Gv"]),
    (Book::Acts, &["Atti degli Apostoli", "Atti", "At"]),
    (Book::Romans, &["Romani", "Rm"]),
    (Book::FirstCorinthians, &["1 Corinzi", "1 Cor"]),
    (Book::SecondCorinthians, &["2 Corinzi", "2 Cor"]),
    (Book::Galatians, &["Galati", "Gal"]),
    (Book::Ephesians, &["Efesini", "Ef"]),
    (Book::Philippians, &["Filippesi", "Fil"]),
    (Book::Colossians, &["Colossesi", "Col"]),
    (Book::FirstThessalonians, &["1 Tessalonicesi", "1 Ts"]),
    (Book::SecondThessalonians, &["2 Tessalonicesi", "2 Ts"]),
    (Book::FirstTimothy, &["1 Timoteo", "1 Tm"]),
    (Book::SecondTimothy, &["2 Timoteo", "2 Tm"]),
    (Book::Titus, &["Tito", "Tt"]),
    (Book::Philemon, &["Filemone", "Fm"]),
    (Book::Hebrews, &["Ebrei", "Eb"]),
    (Book::James, &["Giacomo", "Gc"]),
    (Book::FirstPeter, &["1 Pietro", "1 Pt"]),
    (Book::SecondPeter, &["2 Pietro", "2 Pt"]),
    (Book::FirstJohn, &["1 Giovanni", "1 Gv"]),
    (Book::SecondJohn, &["2 Giovanni", "2 Gv"]),
    (Book::ThirdJohn, &["3 Giovanni", "3 Gv"]),
    (Book::Jude, &["Giuda", "Gd"]),
    (Book::Revelation, &["Apocalisse", "Ap"]),
];
