//! Quotes keyed by emotion label.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Reply used when a label has no quotes.
pub const FALLBACK_QUOTE: &str = "Unable to find quotes for this emotion.";

/// Emotion labels with quotes, in table order.
pub const EMOTIONS: &[&str] = &[
    "joy",
    "sadness",
    "anger",
    "fear",
    "neutral",
    "hate",
    "love",
    "enthusiasm",
    "boredom",
];

static QUOTE_TABLE: &[(&str, &[&str])] = &[
    (
        "joy",
        &[
            "The purpose of our lives is to be happy. - Dalai Lama",
            "Count your age by friends, not years. Count your life by smiles, not tears. - John Lennon",
            "Happiness is not something ready-made. It comes from your own actions. - Dalai Lama",
        ],
    ),
    (
        "sadness",
        &[
            "The way sadness works is one of the strange riddles of the world. - Lemony Snicket",
            "Tears are words that need to be written. - Paulo Coelho",
            "Every man has his secret sorrows which the world knows not; and often times we call a man cold when he is only sad. - Henry Wadsworth Longfellow",
        ],
    ),
    (
        "anger",
        &[
            "Anger is an acid that can do more harm to the vessel in which it is stored than to anything on which it is poured. - Mark Twain",
            "For every minute you are angry you lose sixty seconds of happiness. - Ralph Waldo Emerson",
            "Speak when you are angry and you will make the best speech you will ever regret. - Ambrose Bierce",
        ],
    ),
    (
        "fear",
        &[
            "The only thing we have to fear is fear itself. - Franklin D. Roosevelt",
            "Do not be afraid of your fears. They're not there to scare you. They're there to let you know that something is worth it. - C. JoyBell C.",
            "The oldest and strongest emotion of mankind is fear, and the oldest and strongest kind of fear is fear of the unknown. - H.P. Lovecraft",
        ],
    ),
    (
        "neutral",
        &[
            "Life is neither good or bad, it just depends on your point of view. - Paulo Coelho",
            "Stay calm and carry on. - Winston Churchill",
            "Sometimes the most productive thing you can do is relax. - Mark Black",
        ],
    ),
    (
        "hate",
        &[
            "Hate, it has caused a lot of problems in the world, but has not solved one yet. - Maya Angelou",
            "Darkness cannot drive out darkness: only light can do that. Hate cannot drive out hate: only love can do that. - Martin Luther King Jr.",
            "The opposite of love is not hate, it's indifference. - Elie Wiesel",
        ],
    ),
    (
        "love",
        &[
            "Love is like the wind, you can't see it but you can feel it. - Nicholas Sparks",
            "The greatest happiness you can have is knowing that you do not necessarily require happiness. - William Saroyan",
            "Being deeply loved by someone gives you strength, while loving someone deeply gives you courage. - Lao Tzu",
        ],
    ),
    (
        "enthusiasm",
        &[
            "Nothing great was ever achieved without enthusiasm. - Ralph Waldo Emerson",
            "Your enthusiasm will be infectious, stimulating and attractive to others. They will love you for it. They will go for you and with you. - Norman Vincent Peale",
            "Enthusiasm is the yeast that makes your hopes shine to the stars. Enthusiasm is the sparkle in your eyes, the swing in your gait. - Henry Ford",
        ],
    ),
    (
        "boredom",
        &[
            "Only boring people get bored. - Ruth Burke",
            "Boredom is the feeling that everything is a waste of time; serenity, that nothing is. - Thomas Szasz",
            "Boredom is simply the absence of an interesting perspective. - Naval Ravikant",
        ],
    ),
];

/// All quotes for `label`, or `None` when the label has no entry.
pub fn quotes_for(label: &str) -> Option<&'static [&'static str]> {
    QUOTE_TABLE
        .iter()
        .find(|(emotion, _)| *emotion == label)
        .map(|(_, quotes)| *quotes)
}

/// Pick a random quote for `label`, or [`FALLBACK_QUOTE`].
pub fn quote_for(label: &str) -> &'static str {
    quote_for_with(label, &mut rand::rng())
}

/// Same as [`quote_for`] with a caller-supplied random source.
pub fn quote_for_with<R: Rng + ?Sized>(label: &str, rng: &mut R) -> &'static str {
    quotes_for(label)
        .and_then(|quotes| quotes.choose(rng).copied())
        .unwrap_or(FALLBACK_QUOTE)
}
