//! Static option catalogs for the five form selections.

/// A selectable option: `value` goes into the prompt, `label` is shown in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> CatalogOption {
    CatalogOption { value, label }
}

pub const STARTERS: &[CatalogOption] = &[
    opt("I feel", "I feel..."),
    opt("I am", "I am..."),
    opt("I think", "I think..."),
    opt("I want", "I want..."),
    opt("My day was", "My day was..."),
    opt("I need", "I need..."),
    opt("My situation is", "My situation is..."),
];

pub const MOODS: &[CatalogOption] = &[
    opt("happy", "😊 Happy"),
    opt("sad", "😢 Sad"),
    opt("angry", "😠 Angry"),
    opt("tired", "😩 Tired"),
    opt("energetic", "⚡️ Energetic"),
    opt("calm", "😌 Calm"),
    opt("anxious", "😟 Anxious"),
    opt("confused", "🤔 Confused"),
    opt("lost", "🧭 Lost"),
    opt("optimistic", "✨ Optimistic"),
    opt("creative", "🎨 Creative"),
    opt("curious", "🧐 Curious"),
    opt("overwhelmed", "🤯 Overwhelmed"),
    opt("peaceful", "🕊️ Peaceful"),
    opt("stuck", "⚙️ Stuck"),
];

pub const COLORS: &[CatalogOption] = &[
    opt("red, like passion or urgency", "🔴 Red (Passion/Urgency)"),
    opt("blue, like calmness or melancholy", "🔵 Blue (Calm/Melancholy)"),
    opt("yellow, like joy or clarity", "🟡 Yellow (Joy/Clarity)"),
    opt("green, like growth or imbalance", "🟢 Green (Growth/Imbalance)"),
    opt("orange, like creativity or change", "🟠 Orange (Creativity/Change)"),
    opt("purple, like intuition or mystery", "🟣 Purple (Intuition/Mystery)"),
    opt("black, like the unknown or endings", "⚫ Black (Unknown/Endings)"),
    opt("white, like new beginnings or emptiness", "⚪ White (New Beginnings/Emptiness)"),
    opt("grey, like neutrality or indecision", "🔘 Grey (Neutrality/Indecision)"),
    opt("a vibrant rainbow, full of mixed signals", "🌈 A Rainbow (Mixed Signals)"),
];

pub const FOCUSES: &[CatalogOption] = &[
    opt("my goals and aspirations", "My Goals & Aspirations"),
    opt("my work or career", "My Work/Career"),
    opt("my personal relationships", "My Relationships"),
    opt("the future in general", "The Future"),
    opt("a specific problem I'm facing", "A Specific Problem"),
    opt("a desire for change", "A Desire for Change"),
    opt("finding inner peace", "Finding Inner Peace"),
    opt("seeking inspiration", "Seeking Inspiration"),
    opt("my daily routine", "My Daily Routine"),
    opt("something I can't quite pinpoint", "Something I Can't Pinpoint"),
];

pub const ACTIVITIES: &[CatalogOption] = &[
    opt("too busy, juggling many tasks", "Too Busy / Juggling Tasks"),
    opt("quite idle, with too much free time", "Quite Idle / Too Much Free Time"),
    opt("overthinking things constantly", "Overthinking Things"),
    opt("working hard towards something", "Working Hard"),
    opt("taking time to rest and recharge", "Resting & Recharging"),
    opt("achieving small victories", "Achieving Small Victories"),
    opt("procrastinating more than usual", "Procrastinating"),
    opt("focused on my well-being (eating, sleeping)", "Focused on Well-being"),
    opt("spending a lot of time sitting or inactive", "Mostly Inactive/Sitting"),
    opt("experiencing a lot of new things", "Experiencing New Things"),
];

/// One of the five categorical selections on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Starter,
    Mood,
    Color,
    Focus,
    Activity,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Starter,
        Field::Mood,
        Field::Color,
        Field::Focus,
        Field::Activity,
    ];

    pub fn options(self) -> &'static [CatalogOption] {
        match self {
            Field::Starter => STARTERS,
            Field::Mood => MOODS,
            Field::Color => COLORS,
            Field::Focus => FOCUSES,
            Field::Activity => ACTIVITIES,
        }
    }

    /// Short identifier, used for element ids and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Starter => "initiator",
            Field::Mood => "emotionState",
            Field::Color => "color",
            Field::Focus => "focus",
            Field::Activity => "activity",
        }
    }

    /// Question shown above the select.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Field::Starter => "How do you begin?",
            Field::Mood => "Your primary feeling/state is...",
            Field::Color => "This feels like the color...",
            Field::Focus => "And it's mainly about...",
            Field::Activity => "Lately, I've been...",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            Field::Starter => "Sentence starter",
            Field::Mood => "Primary feeling or state",
            Field::Color => "Metaphorical color association",
            Field::Focus => "Main subject or focus",
            Field::Activity => "Recent activity or pace",
        }
    }

    pub fn find(self, value: &str) -> Option<&'static CatalogOption> {
        self.options().iter().find(|o| o.value == value)
    }

    /// The first option of the catalog.
    pub fn default_value(self) -> &'static str {
        self.options()[0].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Field::Starter.options().len(), 7);
        assert_eq!(Field::Mood.options().len(), 15);
        assert_eq!(Field::Color.options().len(), 10);
        assert_eq!(Field::Focus.options().len(), 10);
        assert_eq!(Field::Activity.options().len(), 10);
    }

    #[test]
    fn test_values_unique_within_catalog() {
        for field in Field::ALL {
            let options = field.options();
            for (i, a) in options.iter().enumerate() {
                assert!(
                    options[i + 1..].iter().all(|b| b.value != a.value),
                    "duplicate value {:?} in {}",
                    a.value,
                    field.as_str()
                );
            }
        }
    }

    #[test]
    fn test_find() {
        let color = Field::Color.find("yellow, like joy or clarity").unwrap();
        assert_eq!(color.label, "🟡 Yellow (Joy/Clarity)");
        assert!(Field::Color.find("yellow").is_none());
        assert_eq!(Field::Starter.default_value(), "I feel");
    }
}
