/// Category of a slide; decides its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Intro,
    Photo,
    Message,
    Memory,
    Finale,
}

/// One static content unit, shown full-viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub kind: SlideKind,
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
    /// File name under the asset directory
    pub image: Option<&'static str>,
}

pub static SLIDES: [Slide; 7] = [
    Slide {
        id: 1,
        kind: SlideKind::Intro,
        title: Some("Happy Birthday Dad!"),
        content: Some("A special celebration just for you"),
        image: None,
    },
    Slide {
        id: 2,
        kind: SlideKind::Photo,
        title: Some("Beautiful Memories"),
        content: Some(
            "Every moment with you is a treasure, you've given me the best memories, the best childhood. \
             I appreciate all that you stand for, and I have the utmost respect for you.",
        ),
        image: Some("1.jpg"),
    },
    Slide {
        id: 3,
        kind: SlideKind::Message,
        title: Some("You Are Amazing"),
        content: Some(
            "Your kindness, wisdom, and love are truly inspiring. Today we celebrate the incredible person \
             you are and all the joy you bring to life. Thank you for always being you, Dad. You taught me \
             that I won't always be able to make everybody happy, so I started loving myself before worrying \
             about everything else. Since then, my life has been abundant with joy and blessings.",
        ),
        image: None,
    },
    Slide {
        id: 4,
        kind: SlideKind::Photo,
        title: Some("Cherished Moments"),
        content: Some("Adventures and laughter we'll never forget"),
        image: Some("2.jpg"),
    },
    Slide {
        id: 5,
        kind: SlideKind::Memory,
        title: Some("Remember When..."),
        content: Some(
            "You fed me dosa at the temple, you brought me food from taco bell, panera, pizza hut all the \
             time after school. You drove me to tae kwon do, then to basketball for so many years. You watched \
             all of my games throughout school and I am so glad you were there for it. You've supported me \
             through rough rough times, and I appreciate with all my heart. I don't express my emotions often, \
             but I truly love you more than anything, and I am so grateful to have gotten to know more of you \
             in this last year.",
        ),
        image: None,
    },
    Slide {
        id: 6,
        kind: SlideKind::Photo,
        title: Some("Thank You"),
        content: Some(
            "Thank you for your guidance and support. Your wisdom, kindness, and determination inspires me \
             to be a better man every day. Much love, I love you till death and beyond, I forever cherish \
             your impact on my life.",
        ),
        image: Some("3.jpg"),
    },
    Slide {
        id: 7,
        kind: SlideKind::Finale,
        title: Some("Here's to Another Year!"),
        content: Some(
            "Of adventures, laughter, love, and all the wonderful things that make you uniquely you. \
             Happy Birthday Dad!",
        ),
        image: None,
    },
];
