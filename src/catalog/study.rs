//! Study details: supplementary content keyed by (plan, entry key), with a
//! fixed default record per plan family so lookup can never fail.

use crate::model::PlanKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryVerse {
    pub reference: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyDetail {
    pub theme: &'static str,
    pub questions: &'static [&'static str],
    pub memory_verse: MemoryVerse,
    pub application: &'static str,
}

const CHRONOLOGICAL: [(&str, StudyDetail); 2] = [
    (
        "1",
        StudyDetail {
            theme: "Creation & The Fall",
            questions: &[
                "What does Genesis 1 reveal about God's character?",
                "How does the creation of humans differ from the rest of creation?",
                "What were the consequences of Adam and Eve's disobedience?",
                "How does God show mercy even in judgment?",
            ],
            memory_verse: MemoryVerse {
                reference: "Genesis 1:27",
                text: "So God created mankind in his own image, in the image of God he created them; male and female he created them.",
            },
            application: "Reflect on being made in God's image and what that means for your identity and purpose.",
        },
    ),
    (
        "2",
        StudyDetail {
            theme: "Abraham's Journey of Faith",
            questions: &[
                "Why did God call Abraham to leave his homeland?",
                "How did Abraham demonstrate faith in God's promises?",
                "What mistakes did Abraham make in his journey?",
                "How does God's covenant with Abraham foreshadow salvation?",
            ],
            memory_verse: MemoryVerse {
                reference: "Genesis 12:2-3",
                text: "I will make you into a great nation, and I will bless you; I will make your name great, and you will be a blessing.",
            },
            application: "Consider what 'step of faith' God might be calling you to take this week.",
        },
    ),
];

const NT90: [(&str, StudyDetail); 2] = [
    (
        "1",
        StudyDetail {
            theme: "The Birth and Ministry of Jesus",
            questions: &[
                "How does Matthew present Jesus as the Messiah?",
                "What significance do the genealogies have?",
                "How did John the Baptist prepare the way for Jesus?",
                "What does Jesus' baptism reveal about His identity?",
            ],
            memory_verse: MemoryVerse {
                reference: "Matthew 1:21",
                text: "She will give birth to a son, and you are to give him the name Jesus, because he will save his people from their sins.",
            },
            application: "Reflect on what it means for Jesus to be your Savior.",
        },
    ),
    (
        "2",
        StudyDetail {
            theme: "The Sermon on the Mount",
            questions: &[
                "What do the Beatitudes teach about true happiness?",
                "How does Jesus reinterpret the Law in Matthew 5?",
                "What does Jesus teach about prayer and fasting?",
                "How should Christians relate to material possessions?",
            ],
            memory_verse: MemoryVerse {
                reference: "Matthew 5:16",
                text: "In the same way, let your light shine before others, that they may see your good deeds and glorify your Father in heaven.",
            },
            application: "Choose one teaching from the Sermon on the Mount to practice this week.",
        },
    ),
];

/// Default for chronological and calendar identifiers
const OLD_TESTAMENT_DEFAULT: StudyDetail = StudyDetail {
    theme: "God's Faithfulness in Scripture",
    questions: &[
        "What does this passage reveal about God's character?",
        "How does this passage point to Jesus?",
        "What can we learn about human nature from this passage?",
        "How does this passage apply to your life today?",
    ],
    memory_verse: MemoryVerse {
        reference: "Romans 15:4",
        text: "For everything that was written in the past was written to teach us, so that through the endurance taught in the Scriptures and the encouragement they provide we might have hope.",
    },
    application: "Reflect on how God's faithfulness in Scripture encourages you in your current circumstances.",
};

/// Default for nt90 identifiers
const DISCIPLESHIP_DEFAULT: StudyDetail = StudyDetail {
    theme: "Following Jesus in Daily Life",
    questions: &[
        "What does this passage teach about Jesus?",
        "How does this passage challenge your thinking or behavior?",
        "What promise can you claim from this passage?",
        "How can you share what you've learned with others?",
    ],
    memory_verse: MemoryVerse {
        reference: "2 Timothy 3:16-17",
        text: "All Scripture is God-breathed and is useful for teaching, rebuking, correcting and training in righteousness, so that the servant of God may be thoroughly equipped for every good work.",
    },
    application: "Identify one way you can apply today's reading to your relationships or responsibilities.",
};

/// The fallback record for a plan family
pub fn default_detail(plan: PlanKind) -> &'static StudyDetail {
    match plan {
        PlanKind::Chronological | PlanKind::Calendar => &OLD_TESTAMENT_DEFAULT,
        PlanKind::Nt90 => &DISCIPLESHIP_DEFAULT,
    }
}

/// Look up study details for an entry key, falling back to the plan default.
/// Never fails, even for keys no entry produces.
pub fn study_detail(plan: PlanKind, key: &str) -> &'static StudyDetail {
    let table: &[(&str, StudyDetail)] = match plan {
        PlanKind::Chronological => &CHRONOLOGICAL,
        PlanKind::Nt90 => &NT90,
        PlanKind::Calendar => &[],
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, detail)| detail)
        .unwrap_or_else(|| default_detail(plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_entries_found() {
        let detail = study_detail(PlanKind::Chronological, "1");
        assert_eq!(detail.theme, "Creation & The Fall");
        let detail = study_detail(PlanKind::Nt90, "2");
        assert_eq!(detail.theme, "The Sermon on the Mount");
    }

    #[test]
    fn missing_entry_falls_back_to_plan_default() {
        let detail = study_detail(PlanKind::Chronological, "99");
        assert_eq!(detail, &OLD_TESTAMENT_DEFAULT);
        let detail = study_detail(PlanKind::Nt90, "99");
        assert_eq!(detail, &DISCIPLESHIP_DEFAULT);
    }

    #[test]
    fn calendar_gets_old_testament_default() {
        let detail = study_detail(PlanKind::Calendar, "meskerem-3");
        assert_eq!(detail, &OLD_TESTAMENT_DEFAULT);
    }

    #[test]
    fn every_default_has_four_questions() {
        assert_eq!(OLD_TESTAMENT_DEFAULT.questions.len(), 4);
        assert_eq!(DISCIPLESHIP_DEFAULT.questions.len(), 4);
    }
}
