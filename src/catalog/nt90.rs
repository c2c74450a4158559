//! The 90-day New Testament reading plan.

use crate::model::Nt90Day;

const fn n(day: u32, book: &'static str, chapters: &'static str, focus: &'static str) -> Nt90Day {
    Nt90Day {
        day,
        book,
        chapters,
        focus,
    }
}

pub const DAYS: [Nt90Day; 90] = [
    n(1, "Matthew", "1-3", "Birth & Baptism"),
    n(2, "Matthew", "4-6", "Sermon on Mount"),
    n(3, "Matthew", "7-9", "Kingdom Power"),
    n(4, "Matthew", "10-12", "Disciples Sent"),
    n(5, "Matthew", "13-15", "Parables"),
    n(6, "Matthew", "16-18", "Peter's Confession"),
    n(7, "Matthew", "19-21", "To Jerusalem"),
    n(8, "Matthew", "22-24", "End Times"),
    n(9, "Matthew", "25-28", "Death & Resurrection"),
    n(10, "Mark", "1-3", "Authority"),
    n(11, "Mark", "4-6", "Miracles"),
    n(12, "Mark", "7-9", "Transfiguration"),
    n(13, "Mark", "10-12", "Servant King"),
    n(14, "Mark", "13-16", "Passion Week"),
    n(15, "Luke", "1-3", "Birth Narratives"),
    n(16, "Luke", "4-6", "Ministry Begins"),
    n(17, "Luke", "7-9", "Compassion"),
    n(18, "Luke", "10-12", "Discipleship"),
    n(19, "Luke", "13-15", "Lost & Found"),
    n(20, "Luke", "16-18", "Kingdom Values"),
    n(21, "Luke", "19-21", "Final Week"),
    n(22, "Luke", "22-24", "Crucifixion & Ascension"),
    n(23, "John", "1-3", "Word Made Flesh"),
    n(24, "John", "4-6", "Living Water & Bread"),
    n(25, "John", "7-9", "Light of World"),
    n(26, "John", "10-12", "Good Shepherd"),
    n(27, "John", "13-15", "Upper Room"),
    n(28, "John", "16-18", "Prayer & Arrest"),
    n(29, "John", "19-21", "Cross & Resurrection"),
    n(30, "Acts", "1-3", "Pentecost"),
    n(31, "Acts", "4-6", "Early Church"),
    n(32, "Acts", "7-9", "Stephen & Saul"),
    n(33, "Acts", "10-12", "Gentiles Included"),
    n(34, "Acts", "13-15", "First Journey"),
    n(35, "Acts", "16-18", "Europe Evangelized"),
    n(36, "Acts", "19-21", "Third Journey"),
    n(37, "Acts", "22-24", "Paul Arrested"),
    n(38, "Acts", "25-28", "Journey to Rome"),
    n(39, "Romans", "1-3", "Sin & Righteousness"),
    n(40, "Romans", "4-6", "Justification"),
    n(41, "Romans", "7-9", "Spirit & Israel"),
    n(42, "Romans", "10-12", "Salvation & Service"),
    n(43, "Romans", "13-16", "Christian Living"),
    n(44, "1 Corinthians", "1-4", "Unity"),
    n(45, "1 Corinthians", "5-8", "Moral Issues"),
    n(46, "1 Corinthians", "9-11", "Worship"),
    n(47, "1 Corinthians", "12-14", "Spiritual Gifts"),
    n(48, "1 Corinthians", "15-16", "Resurrection"),
    n(49, "2 Corinthians", "1-4", "Ministry"),
    n(50, "2 Corinthians", "5-9", "Reconciliation"),
    n(51, "2 Corinthians", "10-13", "Paul's Defense"),
    n(52, "Galatians", "1-6", "Freedom in Christ"),
    n(53, "Ephesians", "1-3", "In Christ"),
    n(54, "Ephesians", "4-6", "Walk Worthy"),
    n(55, "Philippians", "1-4", "Joy in Christ"),
    n(56, "Colossians", "1-4", "Christ Supreme"),
    n(57, "1 Thessalonians", "1-5", "Second Coming"),
    n(58, "2 Thessalonians", "1-3", "Stand Firm"),
    n(59, "1 Timothy", "1-3", "Church Leadership"),
    n(60, "1 Timothy", "4-6", "Sound Doctrine"),
    n(61, "2 Timothy", "1-4", "Faithful Witness"),
    n(62, "Titus", "1-3", "Good Works"),
    n(63, "Philemon", "1", "Forgiveness"),
    n(64, "Hebrews", "1-3", "Christ Superior"),
    n(65, "Hebrews", "4-6", "High Priest"),
    n(66, "Hebrews", "7-9", "New Covenant"),
    n(67, "Hebrews", "10-13", "Faith & Perseverance"),
    n(68, "James", "1-5", "Faith & Works"),
    n(69, "1 Peter", "1-3", "Living Hope"),
    n(70, "1 Peter", "4-5", "Suffering"),
    n(71, "2 Peter", "1-3", "True Knowledge"),
    n(72, "1 John", "1-3", "Love & Truth"),
    n(73, "1 John", "4-5", "Assurance"),
    n(74, "2 John", "1", "Walking in Truth"),
    n(75, "3 John", "1", "Hospitality"),
    n(76, "Jude", "1", "Contend for Faith"),
    n(77, "Revelation", "1-3", "Seven Churches"),
    n(78, "Revelation", "4-6", "Throne Room"),
    n(79, "Revelation", "7-9", "Seals & Trumpets"),
    n(80, "Revelation", "10-12", "Woman & Dragon"),
    n(81, "Revelation", "13-15", "Beast & Bowls"),
    n(82, "Revelation", "16-18", "Babylon Falls"),
    n(83, "Revelation", "19-22", "New Jerusalem"),
    n(84, "Review", "Gospels", "Life of Christ"),
    n(85, "Review", "Acts", "Early Church"),
    n(86, "Review", "Paul's Letters", "Theology"),
    n(87, "Review", "General Epistles", "Living Faith"),
    n(88, "Review", "Revelation", "End Times"),
    n(89, "Reflection", "Personal", "Application"),
    n(90, "Celebration", "Completion", "Praise God"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_are_sequential() {
        for (i, day) in DAYS.iter().enumerate() {
            assert_eq!(day.day as usize, i + 1);
        }
    }
}
