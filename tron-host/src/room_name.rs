//! Room names for the URL fragment.
//!
//! Peers that open the same `#Fragment` end up in the same Tangle room, so a
//! fresh visitor gets a random, easy to share name like `#BoldSlyOtter`.

use rand::Rng;

pub const ADJECTIVES: [&str; 64] = [
    "Beefy", "Big", "Bold", "Brave", "Bright", "Buff", "Calm", "Charming", "Chill", "Creative",
    "Cute", "Cool", "Crafty", "Cunning", "Daring", "Elegant", "Excellent", "Fab", "Fluffy",
    "Grand", "Green", "Happy", "Heavy", "Honest", "Huge", "Humble", "Iconic", "Immense", "Jolly",
    "Jumbo", "Kind", "Little", "Loyal", "Lucky", "Majestic", "Noble", "Nefarious", "Odd", "Ornate",
    "Plucky", "Plump", "Polite", "Posh", "Quirky", "Quick", "Round", "Relaxed", "Rotund", "Shy",
    "Sleek", "Sly", "Spry", "Stellar", "Super", "Tactical", "Tidy", "Trendy", "Unique", "Vivid",
    "Wild", "Yappy", "Young", "Zany", "Zesty",
];

pub const ANIMAL_NAMES: [&str; 100] = [
    "Albatross", "Alligator", "Alpaca", "Antelope", "Donkey", "Badger", "Bat", "Bear", "Bee",
    "Bison", "Buffalo", "Butterfly", "Camel", "Capybara", "Cat", "Cheetah", "Chicken",
    "Chinchilla", "Clam", "Cobra", "Crab", "Crane", "Crow", "Deer", "Dog", "Dolphin", "Dove",
    "Dragonfly", "Duck", "Eagle", "Elephant", "Elk", "Emu", "Falcon", "Ferret", "Finch", "Fish",
    "Flamingo", "Fox", "Frog", "Gazelle", "Gerbil", "Giraffe", "Goat", "Goldfish", "Goose",
    "Grasshopper", "Hamster", "Heron", "Horse", "Hyena", "Jaguar", "Jellyfish", "Kangaroo",
    "Koala", "Lemur", "Lion", "Lobster", "Manatee", "Mantis", "Meerkat", "Mongoose", "Moose",
    "Mouse", "Narwhal", "Octopus", "Okapi", "Otter", "Owl", "Panther", "Parrot", "Pelican",
    "Penguin", "Pony", "Porcupine", "Rabbit", "Raccoon", "Raven", "Salmon", "Seahorse", "Seal",
    "Shark", "Snake", "Sparrow", "Stingray", "Stork", "Swan", "Tiger", "Turtle", "Viper", "Walrus",
    "Wolf", "Wolverine", "Wombat", "Yak", "Zebra", "Gnome", "Unicorn", "Dragon", "Hippo",
];

/// `Adjective + Adjective + Animal`, each picked uniformly.
pub fn random_room_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let second = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let animal = ANIMAL_NAMES[rng.gen_range(0..ANIMAL_NAMES.len())];
    format!("{first}{second}{animal}")
}

/// The fragment to write for the current `location.hash`, if any.
/// An existing room is kept; only an empty hash gets a new name.
pub fn fragment_to_set<R: Rng + ?Sized>(current_hash: &str, rng: &mut R) -> Option<String> {
    let current = current_hash.strip_prefix('#').unwrap_or(current_hash);
    if current.is_empty() {
        Some(random_room_name(rng))
    } else {
        None
    }
}

/// Give the page a room name unless it already has one. Returns the room
/// name in use, without the leading `#`.
#[cfg(target_arch = "wasm32")]
pub fn ensure_location_fragment(
    location: &web_sys::Location,
) -> Result<String, crate::error::HostError> {
    let current = location.hash()?;
    match fragment_to_set(&current, &mut rand::thread_rng()) {
        Some(name) => {
            location.set_hash(&name)?;
            log::info!("joined new room #{}", name);
            Ok(name)
        }
        None => {
            let name = current.trim_start_matches('#').to_string();
            log::info!("joined room #{}", name);
            Ok(name)
        }
    }
}
