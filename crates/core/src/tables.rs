//! Fixed reply and keyword tables.
//!
//! Everything here is `'static` data. A [`Tables`] value only bundles
//! references to it, so building one is free and nothing can mutate it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTable {
    pub name: &'static str,
    pub replies: &'static [&'static str],
}

/// An issue label and the phrases whose presence counts toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCategory {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CbtModule {
    pub name: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentLexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

pub const POSITIVE_REPLIES: ReplyTable = ReplyTable {
    name: "positive",
    replies: &[
        "沒錯，你很棒！",
        "這是一個很好的想法！",
        "我相信你可以做到。",
        "你正在進步，真為你感到高興。",
        "保持積極的心態！",
    ],
};

pub const BREAKUP_COMFORT_REPLIES: ReplyTable = ReplyTable {
    name: "breakup-comfort",
    replies: &[
        "這不一定是你的錯，有時候離開是因為不適合。",
        "她拋棄你是她的損失，你值得更好的人。",
        "把重心放回自己身上，你會找到更珍惜你的人。",
        "這是一個重新開始的機會，你會變得更強大。",
        "時間會沖淡一切，給自己一些時間療傷。",
    ],
};

pub const CAT_REPLIES: ReplyTable = ReplyTable {
    name: "cat",
    replies: &[
        "摸摸可愛的貓貓 (>^.^<)",
        "喵～ (づ｡◕‿‿◕｡)づ",
        "貓咪也來給你一個溫暖的抱抱 (=^･ω･^=)",
        "呼嚕嚕...希望這個聲音能讓你放鬆。",
        "看看這隻可愛的貓貓圖片：[在這裡放圖片連結]",
    ],
};

pub const NEUTRAL_REPLIES: ReplyTable = ReplyTable {
    name: "neutral",
    replies: &["嗯嗯。", "我明白了。", "可以多告訴我一些嗎？"],
};

pub const ISSUE_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        label: "憂鬱",
        triggers: &["心情低落", "失去興趣", "疲倦", "失眠", "食慾不振"],
    },
    KeywordCategory {
        label: "焦慮",
        triggers: &["緊張", "不安", "擔心", "恐慌", "心跳加速"],
    },
];

pub const CBT_MODULES: &[CbtModule] = &[
    CbtModule {
        name: "認知重建",
        steps: &["找出你的負面想法", "挑戰這些想法的證據", "建立更積極的想法"],
    },
    CbtModule {
        name: "情緒調節",
        steps: &["辨識你的情緒", "了解情緒的起因", "學習健康的應對方式"],
    },
];

pub const SENTIMENT_LEXICON: SentimentLexicon = SentimentLexicon {
    positive: &["開心", "快樂", "舒服", "放鬆", "喜歡", "好"],
    negative: &["難過", "傷心", "生氣", "沮喪", "痛苦", "糟"],
};

pub const BREAKUP_TRIGGERS: &[&str] = &["分手", "被拋棄"];
pub const CAT_TRIGGERS: &[&str] = &["貓", "可愛"];
pub const GOAL_TRIGGERS: &[&str] = &["目標", "計畫"];
pub const ENCOURAGEMENT_TRIGGER: &str = "加油";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tables {
    pub positive: ReplyTable,
    pub breakup_comfort: ReplyTable,
    pub cat: ReplyTable,
    pub neutral: ReplyTable,
    pub issues: &'static [KeywordCategory],
    pub cbt_modules: &'static [CbtModule],
    pub sentiment: SentimentLexicon,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            positive: POSITIVE_REPLIES,
            breakup_comfort: BREAKUP_COMFORT_REPLIES,
            cat: CAT_REPLIES,
            neutral: NEUTRAL_REPLIES,
            issues: ISSUE_CATEGORIES,
            cbt_modules: CBT_MODULES,
            sentiment: SENTIMENT_LEXICON,
        }
    }
}

impl Tables {
    pub fn find_cbt_module(&self, name: &str) -> Option<&'static CbtModule> {
        self.cbt_modules.iter().find(|module| module.name == name)
    }
}
