//! Static animal catalog
//!
//! One slot per letter of the alphabet, indexed by [`Letter::index`]. The
//! array length makes a missing letter a compile error rather than a lookup
//! failure.

use crate::core::letter::Letter;

const ANIMALS: [&[&str]; 26] = [
    // A
    &[
        "aardvark", "albatross", "alligator", "alpaca", "ant", "anteater", "antelope", "akita",
        "ape", "armadillo", "avocet",
    ],
    // B
    &[
        "baboon", "badger", "barnowl", "barracuda", "bat", "bear", "beaver", "bee", "bison",
        "boar", "bobcat", "bonobo", "buffalo", "bulldog", "bullfrog", "butterfly",
    ],
    // C
    &[
        "camel", "capybara", "caribou", "cassowary", "cat", "catfish", "caterpillar", "cattle",
        "centipede", "chamois", "chameleon", "cheetah", "chicken", "chimpanzee", "chinchilla",
        "chipmunk", "chough", "clam", "cobra", "cockroach", "cod", "cormorant", "coyote", "crab",
        "crane", "crocodile", "crow", "curlew",
    ],
    // D
    &[
        "deer", "dinosaur", "dog", "dogfish", "dolphin", "donkey", "dotterel", "dove",
        "dragonfly", "duck", "dugong", "dunlin",
    ],
    // E
    &[
        "eagle", "earwig", "echidna", "eel", "eland", "elephant", "elephant-seal", "elk", "emu",
    ],
    // F
    &[
        "falcon", "ferret", "finch", "fish", "flamingo", "fly", "fox", "frog",
    ],
    // G
    &[
        "gaur", "gazelle", "gecko", "gerbil", "giant-panda", "giraffe", "gnat", "gnu", "goat",
        "goose", "goldfinch", "goldfish", "gorilla", "goshawk", "grasshopper", "greyhound",
        "grouse", "guanaco", "guinea-fowl", "guinea-pig", "gull", "guppy",
    ],
    // H
    &[
        "hamster", "hare", "hawk", "hedgehog", "heron", "herring", "hippopotamus",
        "honey-badger", "hornet", "horse", "hummingbird", "hyena",
    ],
    // I
    &["ibex", "ibis", "iguana", "impala", "indri"],
    // J
    &["jackal", "jaguar", "jay", "jellyfish", "jerboa"],
    // K
    &[
        "kangaroo", "kingfisher", "koala", "komodo-dragon", "kookaburra", "kouprey", "kudu",
    ],
    // L
    &[
        "ladybug", "lapwing", "lark", "lemur", "lemming", "leopard", "lion", "lizard", "llama",
        "lobster", "locust", "loris", "louse", "lyrebird", "lynx",
    ],
    // M
    &[
        "macaw", "magpie", "mallard", "manatee", "mandrill", "mantis", "marten", "meerkat",
        "mink", "millipede", "mole", "mongoose", "mongrel", "monkey", "moose", "mouse",
        "mosquito", "moth", "mountain-lion", "mule",
    ],
    // N
    &["narwhal", "newt", "nightingale", "numbat"],
    // O
    &[
        "ocelot", "octopus", "okapi", "opossum", "orangutan", "oryx", "ostrich", "otter", "owl",
        "ox", "oyster",
    ],
    // P
    &[
        "panther", "pademelon", "parrot", "partridge", "peafowl", "pelican", "penguin",
        "pheasant", "pig", "pigeon", "pika", "piranha", "platypus", "polar-bear", "pony",
        "poodle", "porcupine", "porpoise", "prairie-dog", "puffin", "puma",
    ],
    // Q
    &["quail", "quelea", "quetzal", "quokka", "quoll"],
    // R
    &[
        "rabbit", "raccoon", "rail", "ram", "rat", "rattlesnake", "raven", "red-deer",
        "red-panda", "reindeer", "rhinoceros", "robin", "rook",
    ],
    // S
    &[
        "salamander", "salmon", "sandpiper", "sardine", "scorpion", "sea-lion", "sea-urchin",
        "seahorse", "seal", "shark", "sheep", "shrew", "skunk", "snail", "snake", "sparrow",
        "spider", "spoonbill", "squid", "squirrel", "starling", "stingray", "stinkbug", "stork",
        "swallow", "swan",
    ],
    // T
    &[
        "tapir", "tarsier", "termite", "tiger", "toad", "toucan", "trout", "turkey", "turtle",
    ],
    // U
    &["uakari", "uguisu", "umbrellabird"],
    // V
    &["vicuna", "viper", "vole", "vulture", "vampire-bat"],
    // W
    &[
        "wallaby", "walrus", "wasp", "water-buffalo", "weasel", "whale", "wildebeest", "wolf",
        "wolverine", "wombat", "woodcock", "woodpecker", "worm", "wren",
    ],
    // X
    &["x-ray-tetra", "xerus"],
    // Y
    &["yak", "yorkshire-terrier"],
    // Z
    &["zebra", "zebu"],
];

/// Animals starting with `letter`, in catalog order
pub fn animals_for(letter: Letter) -> &'static [&'static str] {
    ANIMALS[letter.index()]
}
