use crate::pipeline::GestureDescriptor;

struct RawEntry {
    word: &'static str,
    hand_shape: &'static str,
    palm_orientation: &'static str,
    location: &'static str,
    movement: &'static str,
    duration_secs: f64,
    description: &'static str,
}

impl RawEntry {
    fn descriptor(&self) -> GestureDescriptor {
        GestureDescriptor {
            word: self.word.to_string(),
            description: self.description.to_string(),
            hand_shape: self.hand_shape.to_string(),
            palm_orientation: self.palm_orientation.to_string(),
            location: self.location.to_string(),
            movement: self.movement.to_string(),
            duration_secs: self.duration_secs,
            cultural_notes: None,
        }
    }
}

/// The built-in ASL entries. One row per word; the catalog build rejects
/// duplicates, so additions must not reuse a word.
pub(super) fn builtin() -> Vec<GestureDescriptor> {
    BUILTIN.iter().map(RawEntry::descriptor).collect()
}

const BUILTIN: &[RawEntry] = &[
    RawEntry {
        word: "hello",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "wave",
        duration_secs: 1.5,
        description: "Wave hand from side to side, palm facing forward",
    },
    RawEntry {
        word: "how",
        hand_shape: "fist",
        palm_orientation: "up",
        location: "chest",
        movement: "tap",
        duration_secs: 1.0,
        description: "Tap chest with fist, then make circular motion with open hand",
    },
    RawEntry {
        word: "are",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "chest",
        movement: "static",
        duration_secs: 0.8,
        description: "Open hand at chest level, palm forward, tap twice",
    },
    RawEntry {
        word: "you",
        hand_shape: "point",
        palm_orientation: "forward",
        location: "space",
        movement: "point",
        duration_secs: 0.6,
        description: "Point index finger directly at person",
    },
    RawEntry {
        word: "thank",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "chin",
        movement: "tap",
        duration_secs: 1.2,
        description: "Touch chin with fingertips, move hand down and forward",
    },
    RawEntry {
        word: "please",
        hand_shape: "open",
        palm_orientation: "up",
        location: "chest",
        movement: "circle",
        duration_secs: 1.0,
        description: "Open hand on chest, make circular motion clockwise",
    },
    RawEntry {
        word: "love",
        hand_shape: "fist",
        palm_orientation: "forward",
        location: "chest",
        movement: "cross",
        duration_secs: 1.5,
        description: "Cross arms over chest, hands in fists",
    },
    RawEntry {
        word: "learn",
        hand_shape: "open",
        palm_orientation: "down",
        location: "forehead",
        movement: "tap",
        duration_secs: 1.3,
        description: "Touch forehead, then move hand to palm of other hand",
    },
    RawEntry {
        word: "new",
        hand_shape: "open",
        palm_orientation: "down",
        location: "space",
        movement: "tap",
        duration_secs: 0.8,
        description: "Tap back of hand with fingertips of other hand",
    },
    RawEntry {
        word: "things",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "wave",
        duration_secs: 1.0,
        description: "Wave both hands back and forth",
    },
    RawEntry {
        word: "repeat",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "circle",
        duration_secs: 1.2,
        description: "Make circular motion with both hands",
    },
    RawEntry {
        word: "day",
        hand_shape: "open",
        palm_orientation: "down",
        location: "space",
        movement: "tap",
        duration_secs: 1.0,
        description: "Tap elbow with other hand, then move up",
    },
    RawEntry {
        word: "good",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "thumbs_up",
        duration_secs: 0.8,
        description: "Thumbs up gesture",
    },
    RawEntry {
        word: "great",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "clap",
        duration_secs: 1.0,
        description: "Clap hands, then thumbs up",
    },
    RawEntry {
        word: "morning",
        hand_shape: "open",
        palm_orientation: "up",
        location: "space",
        movement: "rise",
        duration_secs: 1.0,
        description: "Open hand rises up",
    },
    RawEntry {
        word: "afternoon",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "chest",
        movement: "static",
        duration_secs: 1.0,
        description: "Open hand at chest level",
    },
    RawEntry {
        word: "evening",
        hand_shape: "open",
        palm_orientation: "down",
        location: "space",
        movement: "move",
        duration_secs: 1.0,
        description: "Open hand moves down",
    },
    RawEntry {
        word: "night",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "eyes",
        movement: "cover",
        duration_secs: 1.1,
        description: "Open hand covers eyes",
    },
    RawEntry {
        word: "help",
        hand_shape: "open",
        palm_orientation: "up",
        location: "space",
        movement: "tap",
        duration_secs: 1.0,
        description: "Tap palm with other hand, move up",
    },
    RawEntry {
        word: "me",
        hand_shape: "point",
        palm_orientation: "forward",
        location: "chest",
        movement: "point",
        duration_secs: 0.6,
        description: "Point index finger at own chest",
    },
    RawEntry {
        word: "world",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "circle",
        duration_secs: 1.5,
        description: "Make large circular motion with both hands",
    },
    RawEntry {
        word: "i",
        hand_shape: "point",
        palm_orientation: "forward",
        location: "chest",
        movement: "point",
        duration_secs: 0.8,
        description: "Point index finger to chest",
    },
    RawEntry {
        word: "want",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "pull",
        duration_secs: 1.0,
        description: "Both hands open, pull toward body",
    },
    RawEntry {
        word: "today",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "tap",
        duration_secs: 1.0,
        description: "Both hands open, tap together",
    },
    RawEntry {
        word: "tomorrow",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "move",
        duration_secs: 1.1,
        description: "Open hand moves forward",
    },
    RawEntry {
        word: "yesterday",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "move",
        duration_secs: 1.1,
        description: "Open hand moves backward",
    },
    RawEntry {
        word: "now",
        hand_shape: "point",
        palm_orientation: "down",
        location: "space",
        movement: "point",
        duration_secs: 0.8,
        description: "Both index fingers point down",
    },
    RawEntry {
        word: "later",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "move",
        duration_secs: 1.0,
        description: "Open hand moves away from body",
    },
    RawEntry {
        word: "before",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "move",
        duration_secs: 1.0,
        description: "Open hand moves toward body",
    },
    RawEntry {
        word: "after",
        hand_shape: "open",
        palm_orientation: "forward",
        location: "space",
        movement: "move",
        duration_secs: 1.0,
        description: "Open hand moves away from body",
    },
    RawEntry {
        word: "time",
        hand_shape: "point",
        palm_orientation: "down",
        location: "wrist",
        movement: "tap",
        duration_secs: 0.9,
        description: "Tap wrist with index finger",
    },
    RawEntry {
        word: "hour",
        hand_shape: "point",
        palm_orientation: "down",
        location: "wrist",
        movement: "point",
        duration_secs: 0.8,
        description: "Index finger points to wrist",
    },
    RawEntry {
        word: "minute",
        hand_shape: "point",
        palm_orientation: "down",
        location: "wrist",
        movement: "tap",
        duration_secs: 0.9,
        description: "Index finger points to wrist, small movement",
    },
    RawEntry {
        word: "eat",
        hand_shape: "flat-o",
        palm_orientation: "forward",
        location: "mouth",
        movement: "tap",
        duration_secs: 1.2,
        description: "Bring flat-O handshape (fingers together, touching thumb) to mouth once or twice",
    },
    RawEntry {
        word: "fruit",
        hand_shape: "f-hand",
        palm_orientation: "side",
        location: "cheek",
        movement: "twist",
        duration_secs: 1.2,
        description: "Form F handshape (like OK sign) at cheek, twist slightly",
    },
    RawEntry {
        word: "fruits",
        hand_shape: "f-hand",
        palm_orientation: "side",
        location: "cheek",
        movement: "twist",
        duration_secs: 1.2,
        description: "Form F handshape (like OK sign) at cheek, twist slightly",
    },
    RawEntry {
        word: "apple",
        hand_shape: "fist",
        palm_orientation: "side",
        location: "cheek",
        movement: "tap",
        duration_secs: 1.1,
        description: "Make fist, tap cheek twice",
    },
    RawEntry {
        word: "banana",
        hand_shape: "point",
        palm_orientation: "up",
        location: "space",
        movement: "peel",
        duration_secs: 1.3,
        description: "Index finger points up, peel motion",
    },
    RawEntry {
        word: "orange",
        hand_shape: "fist",
        palm_orientation: "forward",
        location: "space",
        movement: "squeeze",
        duration_secs: 1.0,
        description: "Make fist, squeeze motion",
    },
];
