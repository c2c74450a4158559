//! The 13-month Ethiopian liturgical calendar and its daily readings.
//!
//! 12 months of 30 days plus Pagume's 5 — 365 daily entries total. Month
//! slugs are the ASCII keys used in identifiers; they are fixed data and
//! never collide with the `chrono-`/`nt90-` identifier prefixes.

use crate::model::{CalendarDay, Month};

pub const MONTHS: [Month; 13] = [
    Month {
        name: "መስከረም",
        english: "Meskerem",
        slug: "meskerem",
        weeks: "Week 1-4",
        reading: "Genesis 1-50, Job 1-42",
        theme: "Creation to Patriarchs",
        days: 30,
    },
    Month {
        name: "ጥቅምት",
        english: "Tikimt",
        slug: "tikimt",
        weeks: "Week 5-8",
        reading: "Exodus 1-40, Leviticus 1-27",
        theme: "Liberation & Law",
        days: 30,
    },
    Month {
        name: "ኅዳር",
        english: "Hidar",
        slug: "hidar",
        weeks: "Week 9-13",
        reading: "Numbers 1-36, Deuteronomy 1-34",
        theme: "Wilderness Journey",
        days: 30,
    },
    Month {
        name: "ታህሣሥ",
        english: "Tahsas",
        slug: "tahsas",
        weeks: "Week 14-17",
        reading: "Joshua, Judges, Ruth",
        theme: "Conquest & Judges",
        days: 30,
    },
    Month {
        name: "ጥር",
        english: "Tir",
        slug: "tir",
        weeks: "Week 18-21",
        reading: "1 & 2 Samuel",
        theme: "Kingdom Established",
        days: 30,
    },
    Month {
        name: "የካቲት",
        english: "Yekatit",
        slug: "yekatit",
        weeks: "Week 22-26",
        reading: "1 & 2 Kings",
        theme: "Kingdom Divided",
        days: 30,
    },
    Month {
        name: "መጋቢት",
        english: "Megabit",
        slug: "megabit",
        weeks: "Week 27-30",
        reading: "1 & 2 Chronicles",
        theme: "Chronicles of Kings",
        days: 30,
    },
    Month {
        name: "ሚያዝያ",
        english: "Miazia",
        slug: "miazia",
        weeks: "Week 31-34",
        reading: "Ezra, Nehemiah, Esther",
        theme: "Return & Restoration",
        days: 30,
    },
    Month {
        name: "ግንቦት",
        english: "Ginbot",
        slug: "ginbot",
        weeks: "Week 35-39",
        reading: "Psalms 1-150",
        theme: "Songs of Worship",
        days: 30,
    },
    Month {
        name: "ሰኔ",
        english: "Sene",
        slug: "sene",
        weeks: "Week 40-43",
        reading: "Proverbs, Ecclesiastes, Song of Solomon",
        theme: "Wisdom Literature",
        days: 30,
    },
    Month {
        name: "ሐምሌ",
        english: "Hamle",
        slug: "hamle",
        weeks: "Week 44-47",
        reading: "Isaiah, Jeremiah",
        theme: "Major Prophets",
        days: 30,
    },
    Month {
        name: "ነሐሴ",
        english: "Nehase",
        slug: "nehase",
        weeks: "Week 48-52",
        reading: "Ezekiel, Daniel, Minor Prophets",
        theme: "Prophetic Vision",
        days: 30,
    },
    Month {
        name: "ጳጉሜን",
        english: "Pagume",
        slug: "pagume",
        weeks: "Week 53",
        reading: "Review & Reflect",
        theme: "Year Review",
        days: 5,
    },
];

const fn d(day: u32, passages: &'static [&'static str], focus: &'static str) -> CalendarDay {
    CalendarDay {
        day,
        passages,
        focus,
    }
}

const MESKEREM: [CalendarDay; 30] = [
    d(1, &["Genesis 1-3"], "Creation & Fall"),
    d(2, &["Genesis 4-7"], "Cain, Abel, Flood"),
    d(3, &["Genesis 8-11"], "Noah's Ark, Tower of Babel"),
    d(4, &["Genesis 12-15"], "Abraham's Call"),
    d(5, &["Genesis 16-19"], "Hagar, Sodom"),
    d(6, &["Genesis 20-23"], "Isaac Born"),
    d(7, &["Genesis 24-26"], "Rebekah, Isaac"),
    d(8, &["Genesis 27-29"], "Jacob & Esau"),
    d(9, &["Genesis 30-32"], "Jacob's Family"),
    d(10, &["Genesis 33-36"], "Reconciliation"),
    d(11, &["Genesis 37-39"], "Joseph Sold"),
    d(12, &["Genesis 40-42"], "Joseph in Prison"),
    d(13, &["Genesis 43-45"], "Joseph Revealed"),
    d(14, &["Genesis 46-48"], "Jacob in Egypt"),
    d(15, &["Genesis 49-50"], "Jacob's Blessing"),
    d(16, &["Job 1-3"], "Job's Trials"),
    d(17, &["Job 4-7"], "Friends Speak"),
    d(18, &["Job 8-11"], "Job's Defense"),
    d(19, &["Job 12-15"], "Wisdom Discourse"),
    d(20, &["Job 16-19"], "My Redeemer Lives"),
    d(21, &["Job 20-23"], "Justice Questioned"),
    d(22, &["Job 24-28"], "Where is Wisdom?"),
    d(23, &["Job 29-31"], "Job's Integrity"),
    d(24, &["Job 32-34"], "Elihu Speaks"),
    d(25, &["Job 35-37"], "God's Greatness"),
    d(26, &["Job 38-39"], "God Answers"),
    d(27, &["Job 40-42"], "Job Restored"),
    d(28, &["Genesis Review"], "Week Review"),
    d(29, &["Job Review"], "Week Review"),
    d(30, &["Reflection"], "Monthly Reflection"),
];

const TIKIMT: [CalendarDay; 30] = [
    d(1, &["Exodus 1-3"], "Moses' Birth & Call"),
    d(2, &["Exodus 4-6"], "Return to Egypt"),
    d(3, &["Exodus 7-9"], "First Plagues"),
    d(4, &["Exodus 10-12"], "Passover"),
    d(5, &["Exodus 13-15"], "Red Sea Crossing"),
    d(6, &["Exodus 16-18"], "Manna & Water"),
    d(7, &["Exodus 19-21"], "Ten Commandments"),
    d(8, &["Exodus 22-24"], "Book of Covenant"),
    d(9, &["Exodus 25-27"], "Tabernacle Plans"),
    d(10, &["Exodus 28-30"], "Priestly Garments"),
    d(11, &["Exodus 31-33"], "Golden Calf"),
    d(12, &["Exodus 34-36"], "Covenant Renewed"),
    d(13, &["Exodus 37-40"], "Tabernacle Built"),
    d(14, &["Leviticus 1-3"], "Offerings"),
    d(15, &["Leviticus 4-6"], "Sin & Guilt Offerings"),
    d(16, &["Leviticus 7-9"], "Ordination"),
    d(17, &["Leviticus 10-12"], "Nadab & Abihu"),
    d(18, &["Leviticus 13-15"], "Cleanliness Laws"),
    d(19, &["Leviticus 16-18"], "Day of Atonement"),
    d(20, &["Leviticus 19-21"], "Holiness Code"),
    d(21, &["Leviticus 22-24"], "Feasts & Holy Days"),
    d(22, &["Leviticus 25-27"], "Jubilee Year"),
    d(23, &["Exodus Review"], "Week Review"),
    d(24, &["Leviticus Review"], "Week Review"),
    d(25, &["Reflection"], "Monthly Reflection"),
    d(26, &["Memory Verses"], "Scripture Memory"),
    d(27, &["Application"], "Personal Application"),
    d(28, &["Prayer"], "Prayer & Meditation"),
    d(29, &["Review"], "Comprehensive Review"),
    d(30, &["Celebration"], "Celebrate Progress"),
];

const HIDAR: [CalendarDay; 30] = [
    d(1, &["Numbers 1-2"], "Census & Organization"),
    d(2, &["Numbers 3-4"], "Levite Duties"),
    d(3, &["Numbers 5-6"], "Nazarite Vow"),
    d(4, &["Numbers 7-8"], "Offerings & Lampstand"),
    d(5, &["Numbers 9-10"], "Cloud & Fire"),
    d(6, &["Numbers 11-13"], "Complaints & Spies"),
    d(7, &["Numbers 14-15"], "40 Years Judgment"),
    d(8, &["Numbers 16-17"], "Korah's Rebellion"),
    d(9, &["Numbers 18-20"], "Aaron's Rod, Moses' Sin"),
    d(10, &["Numbers 21-22"], "Bronze Serpent"),
    d(11, &["Numbers 23-25"], "Balaam's Prophecy"),
    d(12, &["Numbers 26-27"], "Second Census"),
    d(13, &["Numbers 28-30"], "Offerings & Vows"),
    d(14, &["Numbers 31-32"], "Midian & Transjordan"),
    d(15, &["Numbers 33-36"], "Journey Summary"),
    d(16, &["Deuteronomy 1-2"], "Historical Review"),
    d(17, &["Deuteronomy 3-4"], "Obedience Urged"),
    d(18, &["Deuteronomy 5-7"], "Ten Commandments Repeated"),
    d(19, &["Deuteronomy 8-10"], "Remember the Lord"),
    d(20, &["Deuteronomy 11-13"], "Blessings & Curses"),
    d(21, &["Deuteronomy 14-16"], "Clean Foods & Feasts"),
    d(22, &["Deuteronomy 17-20"], "Kings & Warfare"),
    d(23, &["Deuteronomy 21-23"], "Various Laws"),
    d(24, &["Deuteronomy 24-27"], "Justice & Worship"),
    d(25, &["Deuteronomy 28-30"], "Covenant Renewal"),
    d(26, &["Deuteronomy 31-32"], "Moses' Song"),
    d(27, &["Deuteronomy 33-34"], "Moses' Blessing & Death"),
    d(28, &["Numbers Review"], "Week Review"),
    d(29, &["Deuteronomy Review"], "Week Review"),
    d(30, &["Reflection"], "Monthly Reflection"),
];

const TAHSAS: [CalendarDay; 30] = [
    d(1, &["Joshua 1-3"], "Joshua's Commission"),
    d(2, &["Joshua 4-6"], "Crossing Jordan, Jericho"),
    d(3, &["Joshua 7-9"], "Achan's Sin, Gibeonites"),
    d(4, &["Joshua 10-12"], "Southern Campaign"),
    d(5, &["Joshua 13-15"], "Land Division"),
    d(6, &["Joshua 16-18"], "Inheritance Allotment"),
    d(7, &["Joshua 19-21"], "Cities of Refuge"),
    d(8, &["Joshua 22-24"], "Farewell Address"),
    d(9, &["Judges 1-3"], "Judges Introduction"),
    d(10, &["Judges 4-6"], "Deborah, Gideon"),
    d(11, &["Judges 7-9"], "Gideon's Victory"),
    d(12, &["Judges 10-12"], "Jephthah"),
    d(13, &["Judges 13-15"], "Samson's Birth"),
    d(14, &["Judges 16-18"], "Samson's Downfall"),
    d(15, &["Judges 19-21"], "Civil War"),
    d(16, &["Ruth 1-2"], "Naomi & Ruth"),
    d(17, &["Ruth 3-4"], "Redemption"),
    d(18, &["Joshua Review"], "Week Review"),
    d(19, &["Judges Review"], "Week Review"),
    d(20, &["Ruth Review"], "Week Review"),
    d(21, &["Reflection"], "Monthly Reflection"),
    d(22, &["Memory Verses"], "Scripture Memory"),
    d(23, &["Application"], "Personal Application"),
    d(24, &["Prayer"], "Prayer & Meditation"),
    d(25, &["Review"], "Comprehensive Review"),
    d(26, &["Celebration"], "Celebrate Progress"),
    d(27, &["Study"], "Deep Study"),
    d(28, &["Meditation"], "Scripture Meditation"),
    d(29, &["Sharing"], "Share Insights"),
    d(30, &["Planning"], "Next Month Plan"),
];

const TIR: [CalendarDay; 30] = [
    d(1, &["1 Samuel 1-3"], "Samuel's Birth"),
    d(2, &["1 Samuel 4-6"], "Ark Captured"),
    d(3, &["1 Samuel 7-9"], "King Requested"),
    d(4, &["1 Samuel 10-12"], "Saul Anointed"),
    d(5, &["1 Samuel 13-15"], "Saul's Disobedience"),
    d(6, &["1 Samuel 16-18"], "David Anointed"),
    d(7, &["1 Samuel 19-21"], "David Flees"),
    d(8, &["1 Samuel 22-24"], "David Spares Saul"),
    d(9, &["1 Samuel 25-27"], "Abigail, David with Philistines"),
    d(10, &["1 Samuel 28-31"], "Saul's Death"),
    d(11, &["2 Samuel 1-3"], "David's Lament"),
    d(12, &["2 Samuel 4-6"], "Ark to Jerusalem"),
    d(13, &["2 Samuel 7-9"], "Davidic Covenant"),
    d(14, &["2 Samuel 10-12"], "David & Bathsheba"),
    d(15, &["2 Samuel 13-15"], "Absalom's Rebellion"),
    d(16, &["2 Samuel 16-18"], "Absalom's Death"),
    d(17, &["2 Samuel 19-21"], "David's Return"),
    d(18, &["2 Samuel 22-24"], "David's Song"),
    d(19, &["1 Samuel Review"], "Week Review"),
    d(20, &["2 Samuel Review"], "Week Review"),
    d(21, &["Reflection"], "Monthly Reflection"),
    d(22, &["Memory Verses"], "Scripture Memory"),
    d(23, &["Application"], "Personal Application"),
    d(24, &["Prayer"], "Prayer & Meditation"),
    d(25, &["Review"], "Comprehensive Review"),
    d(26, &["Celebration"], "Celebrate Progress"),
    d(27, &["Study"], "Deep Study"),
    d(28, &["Meditation"], "Scripture Meditation"),
    d(29, &["Sharing"], "Share Insights"),
    d(30, &["Planning"], "Next Month Plan"),
];

const YEKATIT: [CalendarDay; 30] = [
    d(1, &["1 Kings 1-2"], "Solomon's Reign"),
    d(2, &["1 Kings 3-5"], "Solomon's Wisdom"),
    d(3, &["1 Kings 6-8"], "Temple Construction"),
    d(4, &["1 Kings 9-11"], "Solomon's Decline"),
    d(5, &["1 Kings 12-14"], "Kingdom Divided"),
    d(6, &["1 Kings 15-17"], "Elijah Appears"),
    d(7, &["1 Kings 18-20"], "Elijah's Ministry"),
    d(8, &["1 Kings 21-22"], "Naboth's Vineyard"),
    d(9, &["2 Kings 1-3"], "Elijah Taken Up"),
    d(10, &["2 Kings 4-6"], "Elisha's Miracles"),
    d(11, &["2 Kings 7-9"], "Syrians Defeated"),
    d(12, &["2 Kings 10-12"], "Jehu's Reign"),
    d(13, &["2 Kings 13-15"], "Kings of Israel"),
    d(14, &["2 Kings 16-18"], "Hezekiah's Reign"),
    d(15, &["2 Kings 19-21"], "Isaiah Prophesies"),
    d(16, &["2 Kings 22-25"], "Fall of Jerusalem"),
    d(17, &["1 Kings Review"], "Week Review"),
    d(18, &["2 Kings Review"], "Week Review"),
    d(19, &["Reflection"], "Monthly Reflection"),
    d(20, &["Memory Verses"], "Scripture Memory"),
    d(21, &["Application"], "Personal Application"),
    d(22, &["Prayer"], "Prayer & Meditation"),
    d(23, &["Review"], "Comprehensive Review"),
    d(24, &["Celebration"], "Celebrate Progress"),
    d(25, &["Study"], "Deep Study"),
    d(26, &["Meditation"], "Scripture Meditation"),
    d(27, &["Sharing"], "Share Insights"),
    d(28, &["Planning"], "Next Month Plan"),
    d(29, &["Reflection"], "Monthly Reflection"),
    d(30, &["Thanksgiving"], "Give Thanks"),
];

const MEGABIT: [CalendarDay; 30] = [
    d(1, &["1 Chronicles 1-3"], "Genealogies"),
    d(2, &["1 Chronicles 4-6"], "Tribal Records"),
    d(3, &["1 Chronicles 7-9"], "More Genealogies"),
    d(4, &["1 Chronicles 10-12"], "Saul's Death, David's Mighty Men"),
    d(5, &["1 Chronicles 13-15"], "Ark Brought to Jerusalem"),
    d(6, &["1 Chronicles 16-18"], "David's Worship"),
    d(7, &["1 Chronicles 19-21"], "David's Wars"),
    d(8, &["1 Chronicles 22-24"], "Temple Preparations"),
    d(9, &["1 Chronicles 25-27"], "Temple Officials"),
    d(10, &["1 Chronicles 28-29"], "David's Final Words"),
    d(11, &["2 Chronicles 1-3"], "Solomon's Reign"),
    d(12, &["2 Chronicles 4-6"], "Temple Dedication"),
    d(13, &["2 Chronicles 7-9"], "God's Response"),
    d(14, &["2 Chronicles 10-12"], "Kingdom Divides"),
    d(15, &["2 Chronicles 13-15"], "Kings of Judah"),
    d(16, &["2 Chronicles 16-18"], "Asa & Jehoshaphat"),
    d(17, &["2 Chronicles 19-21"], "More Kings"),
    d(18, &["2 Chronicles 22-24"], "Joash's Reign"),
    d(19, &["2 Chronicles 25-27"], "Uzziah's Reign"),
    d(20, &["2 Chronicles 28-30"], "Hezekiah's Reforms"),
    d(21, &["2 Chronicles 31-33"], "Manasseh's Reign"),
    d(22, &["2 Chronicles 34-36"], "Josiah's Reforms"),
    d(23, &["1 Chronicles Review"], "Week Review"),
    d(24, &["2 Chronicles Review"], "Week Review"),
    d(25, &["Reflection"], "Monthly Reflection"),
    d(26, &["Memory Verses"], "Scripture Memory"),
    d(27, &["Application"], "Personal Application"),
    d(28, &["Prayer"], "Prayer & Meditation"),
    d(29, &["Review"], "Comprehensive Review"),
    d(30, &["Celebration"], "Celebrate Progress"),
];

const MIAZIA: [CalendarDay; 30] = [
    d(1, &["Ezra 1-3"], "Return from Exile"),
    d(2, &["Ezra 4-6"], "Temple Rebuilding"),
    d(3, &["Ezra 7-8"], "Ezra's Mission"),
    d(4, &["Ezra 9-10"], "Marriage Reforms"),
    d(5, &["Nehemiah 1-3"], "Nehemiah's Prayer"),
    d(6, &["Nehemiah 4-6"], "Wall Rebuilding"),
    d(7, &["Nehemiah 7-8"], "Reading the Law"),
    d(8, &["Nehemiah 9-10"], "Covenant Renewal"),
    d(9, &["Nehemiah 11-13"], "Jerusalem Repopulated"),
    d(10, &["Esther 1-3"], "Esther Becomes Queen"),
    d(11, &["Esther 4-6"], "Haman's Plot"),
    d(12, &["Esther 7-10"], "Esther Saves Jews"),
    d(13, &["Ezra Review"], "Week Review"),
    d(14, &["Nehemiah Review"], "Week Review"),
    d(15, &["Esther Review"], "Week Review"),
    d(16, &["Reflection"], "Monthly Reflection"),
    d(17, &["Memory Verses"], "Scripture Memory"),
    d(18, &["Application"], "Personal Application"),
    d(19, &["Prayer"], "Prayer & Meditation"),
    d(20, &["Review"], "Comprehensive Review"),
    d(21, &["Celebration"], "Celebrate Progress"),
    d(22, &["Study"], "Deep Study"),
    d(23, &["Meditation"], "Scripture Meditation"),
    d(24, &["Sharing"], "Share Insights"),
    d(25, &["Planning"], "Next Month Plan"),
    d(26, &["Reflection"], "Monthly Reflection"),
    d(27, &["Thanksgiving"], "Give Thanks"),
    d(28, &["Worship"], "Worship God"),
    d(29, &["Service"], "Serve Others"),
    d(30, &["Evangelism"], "Share Faith"),
];

const GINBOT: [CalendarDay; 30] = [
    d(1, &["Psalms 1-10"], "Blessed Man, God's Protection"),
    d(2, &["Psalms 11-20"], "Trust in God"),
    d(3, &["Psalms 21-30"], "Praise & Thanksgiving"),
    d(4, &["Psalms 31-40"], "God's Deliverance"),
    d(5, &["Psalms 41-50"], "Longing for God"),
    d(6, &["Psalms 51-60"], "Repentance & Mercy"),
    d(7, &["Psalms 61-70"], "God Our Refuge"),
    d(8, &["Psalms 71-80"], "God's Faithfulness"),
    d(9, &["Psalms 81-90"], "God's Majesty"),
    d(10, &["Psalms 91-100"], "Security in God"),
    d(11, &["Psalms 101-110"], "God's Kingdom"),
    d(12, &["Psalms 111-120"], "Praise & Thanksgiving"),
    d(13, &["Psalms 121-130"], "God Our Helper"),
    d(14, &["Psalms 131-140"], "Humility & Trust"),
    d(15, &["Psalms 141-150"], "Final Praise"),
    d(16, &["Psalms 1-25 Review"], "Week Review"),
    d(17, &["Psalms 26-50 Review"], "Week Review"),
    d(18, &["Psalms 51-75 Review"], "Week Review"),
    d(19, &["Psalms 76-100 Review"], "Week Review"),
    d(20, &["Psalms 101-125 Review"], "Week Review"),
    d(21, &["Psalms 126-150 Review"], "Week Review"),
    d(22, &["Reflection"], "Monthly Reflection"),
    d(23, &["Memory Verses"], "Scripture Memory"),
    d(24, &["Application"], "Personal Application"),
    d(25, &["Prayer"], "Prayer & Meditation"),
    d(26, &["Review"], "Comprehensive Review"),
    d(27, &["Celebration"], "Celebrate Progress"),
    d(28, &["Study"], "Deep Study"),
    d(29, &["Meditation"], "Scripture Meditation"),
    d(30, &["Sharing"], "Share Insights"),
];

const SENE: [CalendarDay; 30] = [
    d(1, &["Proverbs 1-3"], "Wisdom's Call"),
    d(2, &["Proverbs 4-6"], "Get Wisdom"),
    d(3, &["Proverbs 7-9"], "Wisdom vs Folly"),
    d(4, &["Proverbs 10-12"], "Proverbs of Solomon"),
    d(5, &["Proverbs 13-15"], "Wise Sayings"),
    d(6, &["Proverbs 16-18"], "More Proverbs"),
    d(7, &["Proverbs 19-21"], "God's Sovereignty"),
    d(8, &["Proverbs 22-24"], "Words of Wise"),
    d(9, &["Proverbs 25-27"], "More Proverbs of Solomon"),
    d(10, &["Proverbs 28-29"], "Righteous & Wicked"),
    d(11, &["Proverbs 30-31"], "Agur & Virtuous Woman"),
    d(12, &["Ecclesiastes 1-3"], "Vanity of Life"),
    d(13, &["Ecclesiastes 4-6"], "Toil & Riches"),
    d(14, &["Ecclesiastes 7-9"], "Wisdom & Folly"),
    d(15, &["Ecclesiastes 10-12"], "Fear God"),
    d(16, &["Song of Solomon 1-4"], "Love Song"),
    d(17, &["Song of Solomon 5-8"], "Marriage Love"),
    d(18, &["Proverbs Review"], "Week Review"),
    d(19, &["Ecclesiastes Review"], "Week Review"),
    d(20, &["Song of Solomon Review"], "Week Review"),
    d(21, &["Reflection"], "Monthly Reflection"),
    d(22, &["Memory Verses"], "Scripture Memory"),
    d(23, &["Application"], "Personal Application"),
    d(24, &["Prayer"], "Prayer & Meditation"),
    d(25, &["Review"], "Comprehensive Review"),
    d(26, &["Celebration"], "Celebrate Progress"),
    d(27, &["Study"], "Deep Study"),
    d(28, &["Meditation"], "Scripture Meditation"),
    d(29, &["Sharing"], "Share Insights"),
    d(30, &["Planning"], "Next Month Plan"),
];

const HAMLE: [CalendarDay; 30] = [
    d(1, &["Isaiah 1-3"], "Judah's Sin"),
    d(2, &["Isaiah 4-6"], "Isaiah's Vision"),
    d(3, &["Isaiah 7-9"], "Immanuel Prophecy"),
    d(4, &["Isaiah 10-12"], "Assyria Judged"),
    d(5, &["Isaiah 13-15"], "Oracles Against Nations"),
    d(6, &["Isaiah 16-18"], "More Oracles"),
    d(7, &["Isaiah 19-21"], "Egypt & Babylon"),
    d(8, &["Isaiah 22-24"], "Jerusalem's Fall"),
    d(9, &["Isaiah 25-27"], "Praise & Salvation"),
    d(10, &["Isaiah 28-30"], "Woe to Ephraim"),
    d(11, &["Isaiah 31-33"], "Trust in God"),
    d(12, &["Isaiah 34-36"], "Judgment & Deliverance"),
    d(13, &["Isaiah 37-39"], "Hezekiah's Illness"),
    d(14, &["Isaiah 40-42"], "Comfort for God's People"),
    d(15, &["Isaiah 43-45"], "Israel's Redeemer"),
    d(16, &["Isaiah 46-48"], "God's Sovereignty"),
    d(17, &["Isaiah 49-51"], "Servant Songs"),
    d(18, &["Isaiah 52-54"], "Suffering Servant"),
    d(19, &["Isaiah 55-57"], "Invitation to Grace"),
    d(20, &["Isaiah 58-60"], "True Fasting"),
    d(21, &["Isaiah 61-63"], "Good News"),
    d(22, &["Isaiah 64-66"], "New Heavens & Earth"),
    d(23, &["Jeremiah 1-3"], "Jeremiah's Call"),
    d(24, &["Jeremiah 4-6"], "Judah's Sins"),
    d(25, &["Jeremiah 7-9"], "Temple Sermon"),
    d(26, &["Jeremiah 10-12"], "God's Wisdom"),
    d(27, &["Jeremiah 13-15"], "Linen Belt"),
    d(28, &["Jeremiah 16-18"], "Potter's House"),
    d(29, &["Jeremiah 19-21"], "Broken Jar"),
    d(30, &["Isaiah Review"], "Week Review"),
];

const NEHASE: [CalendarDay; 30] = [
    d(1, &["Jeremiah 22-24"], "Message to Kings"),
    d(2, &["Jeremiah 25-27"], "70 Years Captivity"),
    d(3, &["Jeremiah 28-30"], "False Prophets"),
    d(4, &["Jeremiah 31-33"], "New Covenant"),
    d(5, &["Jeremiah 34-36"], "Jehoiakim Burns Scroll"),
    d(6, &["Jeremiah 37-39"], "Jeremiah Imprisoned"),
    d(7, &["Jeremiah 40-42"], "Gedaliah Assassinated"),
    d(8, &["Jeremiah 43-45"], "Flight to Egypt"),
    d(9, &["Jeremiah 46-48"], "Oracles to Nations"),
    d(10, &["Jeremiah 49-50"], "More Oracles"),
    d(11, &["Jeremiah 51-52"], "Babylon's Fall"),
    d(12, &["Lamentations 1-2"], "Jerusalem's Destruction"),
    d(13, &["Lamentations 3-5"], "Hope in God's Mercy"),
    d(14, &["Ezekiel 1-3"], "Ezekiel's Vision"),
    d(15, &["Ezekiel 4-6"], "Sign Acts"),
    d(16, &["Ezekiel 7-9"], "End Has Come"),
    d(17, &["Ezekiel 10-12"], "God's Glory Departs"),
    d(18, &["Ezekiel 13-15"], "False Prophets"),
    d(19, &["Ezekiel 16-18"], "Jerusalem's Sins"),
    d(20, &["Ezekiel 19-21"], "Allegories"),
    d(21, &["Ezekiel 22-24"], "Sins of Israel"),
    d(22, &["Ezekiel 25-27"], "Oracles to Nations"),
    d(23, &["Ezekiel 28-30"], "Tyre & Egypt"),
    d(24, &["Ezekiel 31-33"], "Watchman"),
    d(25, &["Ezekiel 34-36"], "Shepherds & Restoration"),
    d(26, &["Ezekiel 37-39"], "Dry Bones"),
    d(27, &["Ezekiel 40-42"], "New Temple"),
    d(28, &["Ezekiel 43-45"], "God's Glory Returns"),
    d(29, &["Ezekiel 46-48"], "Worship & Land"),
    d(30, &["Jeremiah Review"], "Week Review"),
];

const PAGUME: [CalendarDay; 5] = [
    d(1, &["Daniel 1-2"], "Daniel's Resolve"),
    d(2, &["Daniel 3-4"], "Fiery Furnace"),
    d(3, &["Daniel 5-6"], "Writing on Wall"),
    d(4, &["Daniel 7-8"], "Daniel's Visions"),
    d(5, &["Daniel 9-12"], "70 Weeks & End Times"),
];

/// Daily readings for a month by slug; empty for an unknown slug
pub fn daily_readings(slug: &str) -> &'static [CalendarDay] {
    match slug {
        "meskerem" => &MESKEREM,
        "tikimt" => &TIKIMT,
        "hidar" => &HIDAR,
        "tahsas" => &TAHSAS,
        "tir" => &TIR,
        "yekatit" => &YEKATIT,
        "megabit" => &MEGABIT,
        "miazia" => &MIAZIA,
        "ginbot" => &GINBOT,
        "sene" => &SENE,
        "hamle" => &HAMLE,
        "nehase" => &NEHASE,
        "pagume" => &PAGUME,
        _ => &[],
    }
}

/// Find a month by its slug
pub fn month_by_slug(slug: &str) -> Option<&'static Month> {
    MONTHS.iter().find(|m| m.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_has_full_coverage() {
        for month in &MONTHS {
            let readings = daily_readings(month.slug);
            assert_eq!(
                readings.len() as u32,
                month.days,
                "month {} has {} readings for {} days",
                month.slug,
                readings.len(),
                month.days
            );
            for (i, reading) in readings.iter().enumerate() {
                assert_eq!(reading.day as usize, i + 1, "days out of order in {}", month.slug);
            }
        }
    }

    #[test]
    fn calendar_totals_365_days() {
        let total: usize = MONTHS.iter().map(|m| daily_readings(m.slug).len()).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn slugs_never_collide_with_plan_prefixes() {
        for month in &MONTHS {
            assert!(!month.slug.starts_with("chrono-"));
            assert!(!month.slug.starts_with("nt90-"));
        }
    }

    #[test]
    fn unknown_slug_is_empty_not_error() {
        assert!(daily_readings("nonexistent").is_empty());
        assert!(month_by_slug("nonexistent").is_none());
    }
}
