//! The 48-week chronological reading plan.

use crate::model::ChronologicalWeek;

const fn w(week: u32, theme: &'static str, passages: &'static str) -> ChronologicalWeek {
    ChronologicalWeek {
        week,
        theme,
        passages,
        days: 7,
    }
}

pub const WEEKS: [ChronologicalWeek; 48] = [
    w(1, "Creation & Fall", "Genesis 1-11, Job 1-14"),
    w(2, "Abraham's Journey", "Genesis 12-25, Job 15-28"),
    w(3, "Isaac & Jacob", "Genesis 26-36, Job 29-42"),
    w(4, "Joseph in Egypt", "Genesis 37-50"),
    w(5, "Exodus Begins", "Exodus 1-18"),
    w(6, "Law & Covenant", "Exodus 19-40"),
    w(7, "Levitical System", "Leviticus 1-27"),
    w(8, "Wilderness Journey", "Numbers 1-21"),
    w(9, "Preparing for Canaan", "Numbers 22-36, Deuteronomy 1-11"),
    w(10, "Deuteronomy", "Deuteronomy 12-34"),
    w(11, "Conquest Begins", "Joshua 1-14"),
    w(12, "Land Division", "Joshua 15-24, Judges 1-5"),
    w(13, "The Judges", "Judges 6-21, Ruth"),
    w(14, "Samuel's Ministry", "1 Samuel 1-15"),
    w(15, "David Rises", "1 Samuel 16-31"),
    w(16, "David's Reign", "2 Samuel 1-12, Psalms 1-20"),
    w(17, "David's Troubles", "2 Samuel 13-24, Psalms 21-40"),
    w(18, "Solomon's Wisdom", "1 Kings 1-11, Proverbs 1-10"),
    w(19, "Kingdom Divides", "1 Kings 12-22, Proverbs 11-20"),
    w(20, "Elijah & Elisha", "2 Kings 1-13, Proverbs 21-31"),
    w(21, "Israel Falls", "2 Kings 14-25, Ecclesiastes"),
    w(22, "Chronicles Review", "1 Chronicles 1-15"),
    w(23, "David's Kingdom", "1 Chronicles 16-29"),
    w(24, "Solomon's Temple", "2 Chronicles 1-20"),
    w(25, "Judah's Kings", "2 Chronicles 21-36, Song of Solomon"),
    w(26, "Exile & Return", "Ezra 1-10, Nehemiah 1-7"),
    w(27, "Rebuilding", "Nehemiah 8-13, Esther"),
    w(28, "Psalms of Praise", "Psalms 41-80"),
    w(29, "Psalms of Trust", "Psalms 81-120"),
    w(30, "Psalms of Ascent", "Psalms 121-150"),
    w(31, "Isaiah's Vision", "Isaiah 1-20"),
    w(32, "Judgment & Hope", "Isaiah 21-40"),
    w(33, "Servant Songs", "Isaiah 41-60"),
    w(34, "New Heavens", "Isaiah 61-66, Jeremiah 1-10"),
    w(35, "Jeremiah's Call", "Jeremiah 11-30"),
    w(36, "Fall of Jerusalem", "Jeremiah 31-52, Lamentations"),
    w(37, "Ezekiel's Visions", "Ezekiel 1-20"),
    w(38, "Dry Bones Live", "Ezekiel 21-48"),
    w(39, "Daniel's Faith", "Daniel 1-12"),
    w(40, "Hosea & Joel", "Hosea, Joel, Amos"),
    w(41, "Obadiah to Micah", "Obadiah, Jonah, Micah, Nahum"),
    w(42, "Habakkuk to Malachi", "Habakkuk, Zephaniah, Haggai, Zechariah, Malachi"),
    w(43, "Old Testament Review", "Review Key Themes"),
    w(44, "Christ's Coming", "Matthew 1-14"),
    w(45, "Kingdom Parables", "Matthew 15-28"),
    w(46, "Mark's Gospel", "Mark 1-16"),
    w(47, "Luke's Account", "Luke 1-12"),
    w(48, "Journey to Cross", "Luke 13-24"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_are_sequential() {
        for (i, week) in WEEKS.iter().enumerate() {
            assert_eq!(week.week as usize, i + 1);
            assert_eq!(week.days, 7);
        }
    }
}
