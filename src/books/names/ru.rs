use crate::books::Book;

pub(crate) const SPELLINGS: &[(Book, &[&str])] = &[
    (Book::Genesis, &["Бытие", "Быт"]),
    (Book::Exodus, &["Исход", "Исх"]),
    (Book::Leviticus, &["Левит", "Лев"]),
    (Book::Numbers, &["Числа", "Чис"]),
    (Book::Deuteronomy, &["Второзаконие", "Втор"]),
    (Book::Joshua, &["Иисус Навин", "Иисуса Навина", "Нав"]),
    (Book::Judges, &["Судьи", "Суд"]),
    (Book::Ruth, &["Руфь", "Руф"]),
    (Book::FirstSamuel, &["1 Царств", "1 Самуила", "1 Цар"]),
    (Book::SecondSamuel, &["2 Царств", "2 Самуила", "2 Цар"]),
    (Book::FirstKings, &["3 Царств", "3 Цар"]),
    (Book::SecondKings, &["4 Царств", "4 Цар"]),
    (
        Book::FirstChronicles,
        &["1 Паралипоменон", "1 Летопись", "1 Пар"],
    ),
    (
        Book::SecondChronicles,
        &["2 Паралипоменон", "2 Летопись", "2 Пар"],
    ),
    (Book::Ezra, &["Ездра", "Ездры", "Езд"]),
    (Book::Nehemiah, &["Неемия", "Неем"]),
    (Book::Esther, &["Есфирь", "Есф"]),
    (Book::Job, &["Иов"]),
    (Book::Psalms, &["Псалтирь", "Псалом", "Пс"]),
    (Book::Proverbs, &["Притчи", "Притч", "Прит"]),
    (Book::Ecclesiastes, &["Екклесиаст", "Еккл"]),
    (Book::SongOfSongs, &["Песнь Песней", "Песн"]),
    (Book::Isaiah, &["Исаия", "Ис"]),
    (Book::Jeremiah, &["Иеремия", "Иер"]),
    (Book::Lamentations, &["Плач Иеремии", "Плач"]),
    (Book::Ezekiel, &["Иезекииль", "Иез"]),
    (Book::Daniel, &["Даниил", "Дан"]),
    (Book::Hosea, &["Осия", "Ос"]),
    (Book::Joel, &["Иоиль", "Иоил"]),
    (Book::Amos, &["Амос", "Ам"]),
    (Book::Obadiah, &["Авдий", "Авд"]),
    (Book::Jonah, &["Иона", "Ион"]),
    (Book::Micah, &["Михей", "Мих"]),
    (Book::Nahum, &["Наум"]),
    (Book::Habakkuk, &["Аввакум", "Авв"]),
    (Book::Zephaniah, &["Софония", "Соф"]),
    (Book::Haggai, &["Аггей", "Агг"]),
    (Book::Zechariah, &["Захария", "Зах"]),
    (Book::Malachi, &["Малахия", "Мал"]),
    (Book::Matthew, &["От Матфея", "Матфея", "Матф", "Мф"]),
    (Book::Mark, &["От Марка", "Марка", "Мк"]),
    (Book::Luke, &["От Луки", "Луки", "Лк"]),
    (Book::John, &["От Иоанна", "Иоанна", "Ин"]),
    (Book::Acts, &["Деяния", "Деян"]),
    (Book::Romans, &["Римлянам", "Рим"]),
    (Book::FirstCorinthians, &["1 Коринфянам", "1 Кор"]),
    (Book::SecondCorinthians, &["2 Коринфянам", "2 Кор"]),
    (Book::Galatians, &["Галатам", "Гал"]),
    (Book::Ephesians, &["Ефесянам", "Еф"]),
    (Book::Philippians, &["Филиппийцам", "Флп"]),
    (Book::Colossians, &["Колоссянам", "Кол"]),
    (Book::FirstThessalonians, &["1 Фессалоникийцам", "1 Фес"]),
    (Book::SecondThessalonians, &["2 Фессалоникийцам", "2 Фес"]),
    (Book::FirstTimothy, &["1 Тимофею", "1 Тим"]),
    (Book::SecondTimothy, &["2 Тимофею", "2 Тим"]),
    (Book::Titus, &["Титу", "Тит"]),
    (Book::Philemon, &["Филимону", "Флм"]),
    (Book::Hebrews, &["Евреям", "Евр"]),
    (Book::James, &["Иакова", "Иак"]),
    (Book::FirstPeter, &["1 Петра", "1 Пет"]),
    (Book::SecondPeter, &["2 Петра", "2 Пет"]),
    (Book::FirstJohn, &["1 Иоанна", "1 Ин"]),
    (Book::SecondJohn, &["2 Иоанна", "2 Ин"]),
    (Book::ThirdJohn, &["3 Иоанна", "3 Ин"]),
    (Book::Jude, &["Иуды", "Иуд"]),
    (Book::Revelation, &["Откровение", "Откр"]),
];
