//! Static card pools.
//!
//! Each deck draws from these pools: a random 12 of the 20 Shine entries,
//! every Drizzle and Downpour, and a random 4 of the 17 Hurricanes.

/// A card as printed, before it is dealt into a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub weight: i32,
    pub joint: bool,
    pub flavor: &'static str,
    pub prompt: &'static str,
}

const fn spec(
    title: &'static str,
    weight: i32,
    joint: bool,
    flavor: &'static str,
    prompt: &'static str,
) -> CardSpec {
    CardSpec { title, weight, joint, flavor, prompt }
}

/// Positive events. Weight is the capacity gained on claim.
pub const SHINE_POOL: [CardSpec; 20] = [
    spec(
        "Retail Therapy",
        3,
        false,
        "You bought the thing. You didn't *need* it, but seeing it in your space makes the hard week feel worth it.",
        "When you treat yourself, do you usually seek comfort, status, or distraction?",
    ),
    spec(
        "The Reunion",
        4,
        false,
        "You see an old friend. Within five minutes, you realize you haven't laughed that hard in years.",
        "Who is a person from your past that you hope thinks well of you, even if you never speak again?",
    ),
    spec(
        "The Cleared Air",
        5,
        false,
        "A lingering misunderstanding is finally resolved. It wasn't malice; it was just a mistake.",
        "What is a conversation you have been dreading that would likely bring you relief if you just had it?",
    ),
    spec(
        "The Cathartic Cry",
        4,
        false,
        "You finally let it out. The ugly, sobbing kind. Afterwards, your chest feels lighter.",
        "When you are truly overwhelmed, do you tend to isolate yourself or seek out company?",
    ),
    spec(
        "A New Passion",
        5,
        false,
        "You started a hobby just for you. No productivity, no hustle. Just the pure joy of creating.",
        "If you had zero need for money or approval, how would you spend your days?",
    ),
    spec(
        "The Pep Talk",
        3,
        false,
        "You were spiraling, but they looked you in the eye and reminded you exactly how tough you are.",
        "Who is the one person in your life whose voice can actually cut through your internal panic?",
    ),
    spec(
        "Forgiveness",
        6,
        false,
        "You decided to let go of the grudge. The energy you spent hating them is finally yours to keep.",
        "Is there an apology you are waiting for that you know you will never receive? How do you make peace with that?",
    ),
    spec(
        "The 'Big' News",
        6,
        false,
        "A pregnancy, a promotion, a cure. Something monumental went right.",
        "When you get good news, do you share it immediately, or do you keep it close to protect it for a while?",
    ),
    spec(
        "Nature's Reset",
        2,
        false,
        "The ocean, a mountain, or just a really nice tree. You realize how small your problems are.",
        "What is a specific physical place you go to in your mind when you need to feel calm?",
    ),
    spec(
        "The Unexpected Gift",
        3,
        false,
        "It wasn't your birthday. They just saw it and thought of you. You feel known.",
        "What is the best gift you have ever received that wasn't expensive, but proved someone truly knew you?",
    ),
    spec(
        "Digital Detox",
        3,
        false,
        "You turned the phone off for 24 hours. The noise stopped. Your brain is quiet.",
        "If you were forced to be alone with your thoughts for 24 hours with no distractions, what would you be afraid of thinking about?",
    ),
    spec(
        "The Inside Joke",
        2,
        false,
        "A shared look across the room. You don't even have to say a word to know you're on the same team.",
        "What is a trait in a partner or friend that instantly makes you feel safe?",
    ),
    spec(
        "Feeling 'Hot'",
        2,
        false,
        "A good hair day, a new outfit. You catch your reflection and think, 'Damn, I've still got it.'",
        "When do you feel most confident: when you look good, when you achieve something, or when you help someone?",
    ),
    spec(
        "The Volunteer",
        4,
        false,
        "You helped someone else. Getting out of your own head healed something in you.",
        "What is a cause or issue that makes you feel a deep sense of responsibility?",
    ),
    spec(
        "A Home Cooked Meal",
        3,
        false,
        "Not takeout. Someone spent hours making this for you. It tastes like love.",
        "What specific meal reminds you of a time when you felt taken care of?",
    ),
    spec(
        "Nostalgia Trip",
        2,
        false,
        "A song or a photo album takes you back to a time when you felt safe.",
        "If you could revisit one specific year of your life for a day, which year would it be and why?",
    ),
    spec(
        "The Breakthrough",
        5,
        false,
        "That issue you've been talking about in therapy for years? It finally clicked.",
        "What is a hard truth about yourself that you have recently started to accept?",
    ),
    spec(
        "Genuine Rest",
        4,
        false,
        "Not just sleep, but rest. No alarms, no to-do lists. Your nervous system switches off.",
        "What does 'rest' look like to you? Is it doing nothing, or doing something you love?",
    ),
    spec(
        "Validation",
        4,
        false,
        "I'm proud of you. Hearing those words from the right person changes everything.",
        "Whose approval do you still find yourself seeking, even as an adult?",
    ),
    spec(
        "Safe Space",
        3,
        false,
        "A room, a person, or a moment where you don't have to perform. You can just exist.",
        "What version of yourself do you show the world, and how is it different from who you are when you are alone?",
    ),
];

/// Minor stressors, exhaust 1.
pub const DRIZZLES: [CardSpec; 24] = [
    spec(
        "The Doomscroll",
        3,
        false,
        "You sat down for five minutes. An hour passed. You feel hollow and behind schedule.",
        "When you check out mentally, what specific emotion or thought are you usually trying to numb?",
    ),
    spec(
        "Password Purgatory",
        3,
        false,
        "Incorrect password. Reset link sent. 'New password cannot be old password.' Pure rage.",
        "What is a small, trivial inconvenience that consistently triggers a disproportionate amount of anger in you?",
    ),
    spec(
        "Running Late",
        2,
        false,
        "You left five minutes late, and now every red light feels like a personal attack.",
        "When you are late, do you tend to blame external factors or internalize it as a personal failure?",
    ),
    spec(
        "The 'Tax'",
        2,
        false,
        "A parking ticket. A forgotten subscription. It’s not the money; it’s the feeling of failing adulthood.",
        "What area of 'adulting' do you feel you are currently failing at the most?",
    ),
    spec(
        "Notification Overload",
        2,
        false,
        "47 unread emails. 12 Slacks. The red dots are winning.",
        "Does a piled-up inbox make you feel important and needed, or anxious and overwhelmed?",
    ),
    spec(
        "Tech Glitch",
        3,
        false,
        "The Wi-Fi drops right before the call. The printer jams. Inanimate objects are fighting you.",
        "How do you handle it when things don't go according to plan: do you pivot easily, or does it ruin your day?",
    ),
    spec(
        "The Guilt Text",
        2,
        false,
        "It’s been three days. Responding now feels like admitting failure, so you just... don't.",
        "Who is someone you owe a response to right now, and why does the thought of replying feel so heavy?",
    ),
    spec(
        "Social Battery Dead",
        3,
        false,
        "You are physically present, but your soul clocked out and went home an hour ago.",
        "What is your biggest 'tell' that your social battery is depleted, and do people around you respect it?",
    ),
    spec(
        "The Cringe Memory",
        2,
        false,
        "You were trying to sleep, but your brain decided to replay that awkward thing you said 4 years ago.",
        "What is a past mistake you are still punishing yourself for, long after everyone else has forgotten?",
    ),
    spec(
        "Imposter Syndrome",
        3,
        false,
        "You walked into the room and suddenly felt like a child wearing an adult's costume.",
        "In what area of your life do you feel like you are just 'faking it' right now?",
    ),
    spec(
        "Comparison Trap",
        2,
        false,
        "You looked at their highlight reel and suddenly your actual life feels gray and boring.",
        "Who is someone you compare yourself to, and what do you think they have that you lack?",
    ),
    spec(
        "Forgot The Name",
        2,
        false,
        "You know them. They know you. But their name is a total blank. The panic sets in.",
        "How comfortable are you with admitting when you don't know something or have made a mistake?",
    ),
    spec(
        "Visual Clutter",
        2,
        false,
        "The laundry pile. The unwashed dish. It’s a constant, silent to-do list screaming at you.",
        "Does your physical environment reflect your mental state, or do you keep it tidy to hide the chaos inside?",
    ),
    spec(
        "Vague Symptom",
        2,
        false,
        "A weird ache. You shouldn't Google it, but you will. Now you're convinced you're dying.",
        "When you feel vulnerable, do you tend to spiral into worst-case scenarios?",
    ),
    spec(
        "Decision Fatigue",
        3,
        false,
        "'What’s for dinner?' The question feels like a math test you didn't study for.",
        "What is a decision you are currently procrastinating on because you are afraid of making the wrong choice?",
    ),
    spec(
        "The 'Sunday Scaries'",
        3,
        false,
        "It’s 4 PM on a Sunday, and the shadow of Monday morning has already ruined your evening.",
        "What part of your upcoming week is taking up the most space in your brain right now?",
    ),
    spec(
        "Sensory Overload",
        3,
        false,
        "The tag on your shirt itches. The lights are too bright. The chewing noise. It's too much.",
        "When the world gets too loud, what is your go-to method for recalibrating?",
    ),
    spec(
        "Unfinished Project",
        2,
        false,
        "That hobby gear in the corner is judging you for not using it.",
        "Do you start things with enthusiasm and lose interest, or do you struggle to start at all?",
    ),
    spec(
        "Passive Aggressive Email",
        3,
        false,
        "'Per my last email.' The professional equivalent of a knife fight.",
        "How do you handle conflict: do you address it head-on, or do you tend to be passive-aggressive?",
    ),
    spec(
        "Small Talk Loop",
        2,
        false,
        "Having the exact same 'How are you?' 'Good, you?' conversation five times in an hour.",
        "Do you find it easier to connect with people deeply or superficially?",
    ),
    spec(
        "The 'Check Engine' Light",
        3,
        false,
        "A literal or metaphorical warning light you are actively choosing to ignore.",
        "What is a problem in your life that you are currently ignoring in hopes that it goes away?",
    ),
    spec(
        "Diet Culture Guilt",
        2,
        false,
        "You ate a cookie and your brain spent 20 minutes calculating how to 'pay for it.'",
        "How does your relationship with your body affect your daily mood?",
    ),
    spec(
        "Noise Pollution",
        2,
        false,
        "Construction outside. A car alarm. You can't hear your own thoughts.",
        "Where do you go to find silence?",
    ),
    spec(
        "Analysis Paralysis",
        3,
        false,
        "Too many options on the streaming service. You spend 45 minutes scrolling and watch nothing.",
        "Do you believe there is always a 'perfect' choice, or are you comfortable with 'good enough'?",
    ),
];

/// Serious stressors, exhaust 2. Some are joint.
pub const DOWNPOURS: [CardSpec; 24] = [
    spec(
        "Financial Tightrope",
        7,
        true,
        "Math doesn't care about your feelings. You are one emergency away from zero.",
        "What does 'security' mean to you, and how far away do you feel from it right now?",
    ),
    spec(
        "The Recurring Fight",
        8,
        true,
        "It started about dishes, but now you're screaming about things from 3 years ago.",
        "In our conflicts, what is one recurring pattern or trigger you wish we could break?",
    ),
    spec(
        "The Depression Nest",
        6,
        true,
        "The physical manifestation of your mental state. The mess is winning.",
        "When you are at your lowest, what is the one thing you need from a partner to feel supported?",
    ),
    spec(
        "Total Burnout",
        9,
        false,
        "You aren't just tired; you are empty. A hollow shell just going through the motions.",
        "If you could pause your life for one month with no consequences, what would you do with that time?",
    ),
    spec(
        "Medical Gaslighting",
        8,
        false,
        "You know something is wrong. The doctors won't listen. You feel crazy.",
        "Have you ever felt misunderstood by an authority figure? How did that shape your ability to advocate for yourself?",
    ),
    spec(
        "Toxic Boss",
        7,
        false,
        "Every notification triggers a fight-or-flight response. You are walking on eggshells.",
        "How much of your self-worth is tied to your productivity or your job title?",
    ),
    spec(
        "Social Isolation",
        5,
        false,
        "You haven't seen a friend in months. You are slowly disappearing from people's lives.",
        "Do you pull away from people when you are struggling, or do you reach out?",
    ),
    spec(
        "Seasonal Depression",
        6,
        true,
        "The sun went down at 4 PM and took your serotonin with it. Everything is gray.",
        "What is a non-negotiable routine that keeps you grounded when your mood slips?",
    ),
    spec(
        "Creative Drought",
        5,
        false,
        "You used to have ideas. Now you just have static. The well is dry.",
        "When you feel uninspired, do you push through the block or do you wait for motivation to return?",
    ),
    spec(
        "Family Crisis",
        7,
        true,
        "You have to go home and play the role they expect of you. It drains you to the bone.",
        "Which family member do you feel you have to 'perform' around the most?",
    ),
    spec(
        "Sleep Debt",
        9,
        false,
        "Reality feels brittle. You are hallucinating shadow people. You physically hurt.",
        "What thoughts tend to keep you awake at night?",
    ),
    spec(
        "The Unexpected Bill",
        8,
        true,
        "The car broke. The tooth broke. The bank account broke. Where will the money come from?",
        "How was money handled in your childhood home, and how does that affect your anxiety about bills today?",
    ),
    spec(
        "Pet Emergency",
        7,
        true,
        "The vet bill is astronomical, but you have to pay it. It's family.",
        "What is the hardest decision you've ever had to make regarding a dependent (pet or person)?",
    ),
    spec(
        "Car Breakdown",
        6,
        true,
        "Stranded on the side of the road. It's going to be expensive and inconvenient.",
        "Who is the first person you call in a crisis, and why them?",
    ),
    spec(
        "The Leak",
        6,
        true,
        "Water is dripping from the ceiling. The landlord isn't answering. Panic sets in.",
        "When your physical environment feels unsafe or chaotic, how does it affect your mental state?",
    ),
    spec(
        "Data Loss",
        5,
        false,
        "The hard drive failed. Years of work or memories, just gone in a blink.",
        "If you lost all your photos today, which specific memory would you be most terrified of forgetting?",
    ),
    spec(
        "Credit Fraud",
        7,
        true,
        "Someone bought plane tickets with your card. Now you have to fight the bank.",
        "How do you handle feeling violated or taken advantage of?",
    ),
    spec(
        "Friend Breakup",
        6,
        false,
        "No closure, just silence. It hurts worse than a romantic one.",
        "Is there a friendship you lost that you still grieve? What do you wish you had said?",
    ),
    spec(
        "Travel Nightmare",
        5,
        true,
        "Stuck in an airport for 24 hours. No sleep, expensive food, pure misery.",
        "How do you behave when you are physically uncomfortable and exhausted?",
    ),
    spec(
        "Caregiver Fatigue",
        8,
        true,
        "Taking care of aging parents or sick family. You have no time for yourself.",
        "Do you find it harder to ask for help or to accept help when it's offered?",
    ),
    spec(
        "Jury Duty",
        5,
        false,
        "It couldn't have happened at a worse time at work. A mandated pause.",
        "How do you handle a total lack of control over your own schedule?",
    ),
    spec(
        "Home Infestation",
        6,
        true,
        "Ants, mice, or bedbugs. Your safe space feels violated and dirty.",
        "What does having a 'safe space' mean to you?",
    ),
    spec(
        "Bureaucratic Hell",
        5,
        false,
        "DMV, Insurance, Taxes. On hold for 4 hours just to be hung up on.",
        "What is your threshold for frustration before you snap?",
    ),
    spec(
        "Public Embarrassment",
        5,
        false,
        "You went viral for the wrong reasons, or made a scene. The shame lingers.",
        "What is a past embarrassment that you still cringe at, and what would you tell that version of yourself now?",
    ),
];

/// Crises, exhaust 2, always joint.
pub const HURRICANE_POOL: [CardSpec; 17] = [
    spec(
        "Grief (The Empty Chair)",
        13,
        true,
        "The world feels smaller, quieter, and wrong without them. A hole in the universe.",
        "How has your relationship with grief changed as you've gotten older?",
    ),
    spec(
        "Identity Crisis",
        12,
        true,
        "Who are you when you aren't being productive? You don't recognize yourself anymore.",
        "If you were stripped of your career and your roles, what would remain of you?",
    ),
    spec(
        "The Layoff",
        13,
        true,
        "Security is an illusion. The ground is gone. The badge doesn't work anymore.",
        "When the ground falls out from under you, do you panic or do you go into survival mode?",
    ),
    spec(
        "Trust Breach",
        10,
        true,
        "A lie was found out. The foundation cracked. Can we actually fix this?",
        "Is trust something that can be rebuilt once broken, or is it gone forever for you?",
    ),
    spec(
        "Chronic Illness",
        12,
        true,
        "It isn't going away. This isn't a phase; this is just life now.",
        "How do you grieve the loss of the future you thought you were going to have?",
    ),
    spec(
        "Forced Relocation",
        11,
        true,
        "Uprooting your life because you have no choice. You have to pack the boxes.",
        "What does 'home' mean to you? Is it a place, a person, or a feeling?",
    ),
    spec(
        "Natural Disaster",
        13,
        true,
        "Nature is indifferent to your plans. Everything you own is wet or ash. Survival mode.",
        "If you had 5 minutes to leave your house forever, what non-living things would you take?",
    ),
    spec(
        "Legal Nightmare",
        12,
        true,
        "Lawyers, paperwork, and the crushing weight of bureaucracy. The system is eating you.",
        "When you feel powerless against a system, do you fight back on principle or do you focus on self-preservation?",
    ),
    spec(
        "Identity Theft",
        11,
        true,
        "Someone else is living your life, and they ruined your credit. Recovering yourself takes time.",
        "How much of your identity is tied to your reputation?",
    ),
    spec(
        "Existential Collapse",
        12,
        true,
        "Why are we even doing this? Does any of it matter? The void stares back.",
        "If nothing matters, what is one reason you got out of bed today that is purely for you?",
    ),
    spec(
        "Emergency Surgery",
        13,
        true,
        "Life changes in a heartbeat. The waiting room is cold and smells like antiseptic.",
        "If you knew you might not wake up, who is the one person in your life whose voice can actually cut through your internal panic?",
    ),
    spec(
        "The Eviction",
        13,
        true,
        "You have 30 days to leave. Nowhere to go. The ultimate instability.",
        "What is your biggest fear regarding failure?",
    ),
    spec(
        "Addiction Relapse",
        12,
        true,
        "The demon is back. It requires everything to fight it. Trust is fragile.",
        "What is a coping mechanism you use that you know isn't good for you?",
    ),
    spec(
        "The House Fire",
        13,
        true,
        "You got out, but the memories didn't. Starting over from zero.",
        "How attached are you to material things, and could you start over if you had to?",
    ),
    spec(
        "Betrayal",
        11,
        true,
        "It wasn't a mistake. They did it on purpose. The foundation is gone.",
        "Do you believe in revenge, or do you believe that the best revenge is living well?",
    ),
    spec(
        "False Accusation",
        12,
        true,
        "You didn't do it, but proving it will cost you everything.",
        "What is more important to you: being right, or being at peace?",
    ),
    spec(
        "Societal Collapse",
        11,
        true,
        "The world outside is burning, and it's unsafe to be who you are.",
        "In a crisis, are you the person who takes charge, or the person who helps others emotionally?",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(SHINE_POOL.len(), 20);
        assert_eq!(DRIZZLES.len(), 24);
        assert_eq!(DOWNPOURS.len(), 24);
        assert_eq!(HURRICANE_POOL.len(), 17);
    }

    #[test]
    fn test_hurricanes_are_joint() {
        assert!(HURRICANE_POOL.iter().all(|c| c.joint));
        assert!(DRIZZLES.iter().all(|c| !c.joint));
    }

    #[test]
    fn test_weights_positive() {
        let mut cards = SHINE_POOL
            .iter()
            .chain(&DRIZZLES)
            .chain(&DOWNPOURS)
            .chain(&HURRICANE_POOL);
        assert!(cards.all(|c| c.weight > 0));
    }
}
