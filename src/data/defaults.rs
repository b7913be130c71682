//! Built-in default dataset.
//!
//! The animal-kingdom set: 12 characters and a 10-event deck. Used
//! whenever the primary provider can't supply a collection, so the game
//! always has something to play.

use super::dataset::Dataset;
use crate::core::{Character, DecisionOption, EventId, GameEvent, Metric};

/// The 12 default characters.
#[must_use]
pub fn default_characters() -> Vec<Character> {
    vec![
        Character::new("duck", "Duck")
            .with_icon("images/characters/duck.png")
            .with_fallback_emoji("🦆"),
        Character::new("giraffe", "Giraffe")
            .with_icon("images/characters/giraffe.png")
            .with_fallback_emoji("🦒"),
        Character::new("penguin", "Penguin")
            .with_icon("images/characters/penguin.png")
            .with_fallback_emoji("🐧"),
        Character::new("zebra", "Zebra")
            .with_icon("images/characters/zebra.png")
            .with_fallback_emoji("🦓"),
        Character::new("bunny", "Bunny")
            .with_icon("images/characters/bunny.png")
            .with_fallback_emoji("🐰"),
        Character::new("chick", "Chick")
            .with_icon("images/characters/chick.png")
            .with_fallback_emoji("🐥"),
        Character::new("fox", "Fox")
            .with_icon("images/characters/fox.png")
            .with_fallback_emoji("🦊"),
        Character::new("elephant", "Elephant")
            .with_icon("images/characters/elephant.png")
            .with_fallback_emoji("🐘"),
        Character::new("pig", "Pig")
            .with_icon("images/characters/pig.png")
            .with_fallback_emoji("🐷"),
        Character::new("seal", "Seal")
            .with_icon("images/characters/seal.png")
            .with_fallback_emoji("🦭"),
        Character::new("mouse", "Mouse")
            .with_icon("images/characters/mouse.png")
            .with_fallback_emoji("🐭"),
        Character::new("lion", "Lion")
            .with_icon("images/characters/lion.png")
            .with_fallback_emoji("🦁"),
    ]
}

/// The 10 default events, in play order.
#[must_use]
pub fn default_events() -> Vec<GameEvent> {
    vec![
        GameEvent::new(
            EventId::new(1),
            "The Great Pond Cleanup",
            "The pond has silted up and the waterfowl can barely paddle. \
             Duck petitions for a kingdom-funded dredging effort.",
            DecisionOption::new("FUND THE CLEANUP")
                .with_metric_change(Metric::Treasury, -15)
                .with_metric_change(Metric::PublicTrust, 10)
                .with_metric_change(Metric::SocialStability, 5)
                .with_impact("duck", 20)
                .with_impact("penguin", 10)
                .with_impact("seal", 15)
                .with_impact("fox", -10),
            DecisionOption::new("LET IT SILT")
                .with_metric_change(Metric::Treasury, 5)
                .with_metric_change(Metric::PublicTrust, -10)
                .with_impact("duck", -20)
                .with_impact("seal", -10)
                .with_impact("fox", 5),
        )
        .with_category("infrastructure")
        .with_character("duck"),
        GameEvent::new(
            EventId::new(2),
            "Treetop Foraging Tax",
            "The treasury is thin. Advisors propose a levy on treetop \
             foraging rights. Giraffe calls it a tax on being tall.",
            DecisionOption::new("IMPOSE THE TAX")
                .with_metric_change(Metric::Treasury, 15)
                .with_metric_change(Metric::PublicTrust, -10)
                .with_metric_change(Metric::SocialStability, -5)
                .with_impact("giraffe", -20)
                .with_impact("elephant", -5)
                .with_impact("mouse", 5),
            DecisionOption::new("REJECT THE TAX")
                .with_metric_change(Metric::Treasury, -5)
                .with_metric_change(Metric::PublicTrust, 5)
                .with_impact("giraffe", 15)
                .with_impact("elephant", 5),
        )
        .with_category("economic")
        .with_character("giraffe"),
        GameEvent::new(
            EventId::new(3),
            "Ice Shipment Accord",
            "The northern colonies offer a trade accord: fish and ice in \
             exchange for grain. Penguin urges you to sign before the thaw.",
            DecisionOption::new("SIGN THE ACCORD")
                .with_metric_change(Metric::Treasury, -10)
                .with_metric_change(Metric::IntlReputation, 15)
                .with_impact("penguin", 20)
                .with_impact("seal", 10)
                .with_impact("pig", -5),
            DecisionOption::new("DECLINE")
                .with_metric_change(Metric::Treasury, 5)
                .with_metric_change(Metric::IntlReputation, -10)
                .with_impact("penguin", -15)
                .with_impact("seal", -5),
        )
        .with_category("diplomacy")
        .with_character("penguin"),
        GameEvent::new(
            EventId::new(4),
            "Stripe Recognition Day",
            "Zebra asks you to declare a festival celebrating every pattern \
             in the kingdom. Lion grumbles it is a waste of a good hunting day.",
            DecisionOption::new("DECLARE THE FESTIVAL")
                .with_metric_change(Metric::Treasury, -5)
                .with_metric_change(Metric::PublicTrust, 10)
                .with_metric_change(Metric::SocialStability, 10)
                .with_impact("zebra", 20)
                .with_impact("bunny", 10)
                .with_impact("lion", -5),
            DecisionOption::new("NO FESTIVAL")
                .with_metric_change(Metric::PublicTrust, -5)
                .with_impact("zebra", -15)
                .with_impact("lion", 5),
        )
        .with_category("social")
        .with_character("zebra"),
        GameEvent::new(
            EventId::new(5),
            "Burrow Housing Crisis",
            "The warrens are overcrowded and tunnels are collapsing. Bunny \
             begs for a public burrow-building program.",
            DecisionOption::new("BUILD NEW WARRENS")
                .with_metric_change(Metric::Treasury, -20)
                .with_metric_change(Metric::PublicTrust, 10)
                .with_metric_change(Metric::SocialStability, 15)
                .with_impact("bunny", 20)
                .with_impact("mouse", 15)
                .with_impact("pig", -5),
            DecisionOption::new("DELAY THE PROGRAM")
                .with_metric_change(Metric::Treasury, 5)
                .with_metric_change(Metric::PublicTrust, -10)
                .with_metric_change(Metric::SocialStability, -10)
                .with_impact("bunny", -20)
                .with_impact("mouse", -10),
        )
        .with_category("infrastructure")
        .with_character("bunny"),
        GameEvent::new(
            EventId::new(6),
            "Hatchling Education Act",
            "Chick wants every hatchling taught to read the weather and the \
             stars. The schools need roofs, slates, and teachers.",
            DecisionOption::new("FUND THE SCHOOLS")
                .with_metric_change(Metric::Treasury, -10)
                .with_metric_change(Metric::PublicTrust, 15)
                .with_impact("chick", 20)
                .with_impact("duck", 10)
                .with_impact("fox", -5),
            DecisionOption::new("CUT THE BUDGET")
                .with_metric_change(Metric::Treasury, 10)
                .with_metric_change(Metric::PublicTrust, -15)
                .with_metric_change(Metric::SocialStability, -5)
                .with_impact("chick", -20)
                .with_impact("duck", -5),
        )
        .with_category("social")
        .with_character("chick"),
        GameEvent::new(
            EventId::new(7),
            "The Henhouse Patrol",
            "Fox volunteers to run the night patrols around the henhouses. \
             The smaller animals are visibly nervous about the offer.",
            DecisionOption::new("HIRE THE FOX")
                .with_metric_change(Metric::PublicTrust, -15)
                .with_metric_change(Metric::SocialStability, 10)
                .with_impact("fox", 20)
                .with_impact("chick", -15)
                .with_impact("mouse", -10),
            DecisionOption::new("POLITELY REFUSE")
                .with_metric_change(Metric::SocialStability, -5)
                .with_impact("fox", -20)
                .with_impact("chick", 10)
                .with_impact("mouse", 5),
        )
        .with_category("security")
        .with_character("fox"),
        GameEvent::new(
            EventId::new(8),
            "The Memory Archive",
            "Elephant proposes a grand archive so the kingdom never repeats \
             its mistakes. Foreign courts would send their scholars.",
            DecisionOption::new("FUND THE ARCHIVE")
                .with_metric_change(Metric::Treasury, -10)
                .with_metric_change(Metric::IntlReputation, 10)
                .with_impact("elephant", 20)
                .with_impact("giraffe", 5),
            DecisionOption::new("NOT THIS YEAR")
                .with_metric_change(Metric::Treasury, 5)
                .with_metric_change(Metric::IntlReputation, -5)
                .with_impact("elephant", -15),
        )
        .with_category("culture")
        .with_character("elephant"),
        GameEvent::new(
            EventId::new(9),
            "Mud Bath Sanitation",
            "The communal mud baths have become a health hazard. Pig insists \
             the mud is fine; the seals want the baths inspected.",
            DecisionOption::new("REGULATE THE BATHS")
                .with_metric_change(Metric::Treasury, -5)
                .with_metric_change(Metric::PublicTrust, 5)
                .with_metric_change(Metric::SocialStability, 5)
                .with_impact("pig", -15)
                .with_impact("seal", 10)
                .with_impact("bunny", 5),
            DecisionOption::new("LEAVE THE MUD ALONE")
                .with_metric_change(Metric::PublicTrust, -5)
                .with_impact("pig", 15)
                .with_impact("seal", -10),
        )
        .with_category("health")
        .with_character("pig"),
        GameEvent::new(
            EventId::new(10),
            "The Lion's Parade",
            "Lion demands a grand military parade to impress the neighboring \
             kingdoms. The smaller animals would rather eat the budget.",
            DecisionOption::new("HOLD THE PARADE")
                .with_metric_change(Metric::Treasury, -15)
                .with_metric_change(Metric::IntlReputation, -10)
                .with_metric_change(Metric::SocialStability, 5)
                .with_impact("lion", 20)
                .with_impact("zebra", -10)
                .with_impact("mouse", -10),
            DecisionOption::new("CANCEL IT")
                .with_metric_change(Metric::PublicTrust, 5)
                .with_metric_change(Metric::IntlReputation, 5)
                .with_impact("lion", -20)
                .with_impact("zebra", 10)
                .with_impact("mouse", 5),
        )
        .with_category("diplomacy")
        .with_character("lion"),
    ]
}

/// The complete built-in dataset.
#[must_use]
pub fn default_dataset() -> Dataset {
    Dataset::new(default_characters(), default_events())
}
