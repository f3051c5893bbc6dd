#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Direct,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub id: &'static str,
    pub prompt: &'static str,
    pub polarity: Polarity,
}

const BUILTIN_QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "learning_from_difference",
        prompt: "I enjoy learning from people whose opinions differ from mine.",
        polarity: Polarity::Direct,
    },
    QuestionDef {
        id: "admitting_mistakes",
        prompt: "I find it easy to admit when I'm wrong.",
        polarity: Polarity::Direct,
    },
    QuestionDef {
        id: "revising_core_beliefs",
        prompt: "I'm open to revisiting and potentially changing my core beliefs.",
        polarity: Polarity::Direct,
    },
    QuestionDef {
        id: "seeking_feedback",
        prompt: "I often seek feedback and constructive criticism.",
        polarity: Polarity::Direct,
    },
    QuestionDef {
        id: "dismissing_viewpoints",
        prompt: "I quickly dismiss opposing viewpoints.",
        polarity: Polarity::Reverse,
    },
    QuestionDef {
        id: "avoiding_dont_know",
        prompt: "I find it difficult to say 'I don't know.'",
        polarity: Polarity::Reverse,
    },
    QuestionDef {
        id: "valuing_expertise",
        prompt: "I value expertise in areas where I'm not knowledgeable.",
        polarity: Polarity::Direct,
    },
    QuestionDef {
        id: "multiple_perspectives",
        prompt: "I try to see issues from multiple perspectives.",
        polarity: Polarity::Direct,
    },
    QuestionDef {
        id: "needing_to_be_right",
        prompt: "It is important to me to be right, even if evidence suggests otherwise.",
        polarity: Polarity::Reverse,
    },
    QuestionDef {
        id: "reflecting_on_bias",
        prompt: "I regularly reflect on how my beliefs may be biased or incomplete.",
        polarity: Polarity::Direct,
    },
];

pub fn builtin_questions() -> &'static [QuestionDef] {
    BUILTIN_QUESTIONS
}
