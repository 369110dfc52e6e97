//! The default world tags.

use swn_tables::{Tag, TableResult, TagSet, UniformList};

struct RawTag {
    name: &'static str,
    desc: &'static str,
    enemies: &'static [&'static str],
    friends: &'static [&'static str],
    complications: &'static [&'static str],
    things: &'static [&'static str],
    places: &'static [&'static str],
}

const TAGS: &[RawTag] = &[
    RawTag {
        name: "Abandoned Colony",
        desc: "The world once hosted a colony, now destroyed or abandoned.",
        enemies: &["Crazed survivors", "Ruthless plunderers of the ruins", "Automated defence system"],
        friends: &["Inquisitive stellar archaeologist", "Heir to the colony's property", "Local wanting the place cleaned out"],
        complications: &["The local government wants the ruins left alone", "The colony was destroyed by something still active", "Sudden storm drives everyone into the ruins"],
        things: &["Valuable relics of the colony", "Stored corporate data", "Cached fuel and supplies"],
        places: &["Decaying habitation block", "Vine-covered town square", "Structure buried by an ancient landslide"],
    },
    RawTag {
        name: "Alien Ruins",
        desc: "The world has significant alien ruins present.",
        enemies: &["Customs inspector", "Worshipper of the ruins", "Hidden alien survivor"],
        friends: &["Curious scholar", "Avaricious local resident", "Interstellar smuggler"],
        complications: &["Traps in the ruins", "Remote location", "Paranoid customs officials"],
        things: &["Precious alien artifacts", "Objects left by other visitors", "Untranslated alien texts"],
        places: &["Undersea ruin", "Orbital ruin", "Perfectly preserved alien building"],
    },
    RawTag {
        name: "Altered Humanity",
        desc: "The humans on this world are visibly and drastically different from normal humanity.",
        enemies: &["Biochauvinist local", "Local experimenter", "Mentally unstable mutant"],
        friends: &["Local seeking a \"cure\"", "Curious xenophiliac", "Anthropological researcher"],
        complications: &["The alteration is contagious", "Only some locals are altered", "The alteration has an ugly origin"],
        things: &["Original pretech mod research", "A cure for the alteration", "Valuable biological byproduct"],
        places: &["Abandoned laboratory", "Public ceremony", "Feral monster lair"],
    },
    RawTag {
        name: "Anarchists",
        desc: "The world has no central government to speak of.",
        enemies: &["Offworlder imperialist", "Reformer seeking to impose order", "Bandit chief"],
        friends: &["Local commune leader", "Freedom-loving offworlder", "Spokesman for a community"],
        complications: &["The anarchy is enforced by a hidden power", "Neighbouring communities are at war", "No one can agree on anything"],
        things: &["A cache of pretech goods", "Records of the last government", "Contested farmland"],
        places: &["Commune meeting hall", "Ruined government building", "Frontier trading post"],
    },
    RawTag {
        name: "Civil War",
        desc: "The world is currently torn between at least two opposing factions.",
        enemies: &["Faction commissar", "Angry native", "Conspiracy theorist"],
        friends: &["Faction loyalist", "Unlucky civilian", "Refugee family"],
        complications: &["The front moves over the group", "Both sides want the group's ship", "A ceasefire is about to collapse"],
        things: &["Military supplies", "Proof of a faction's atrocity", "A faction's war chest"],
        places: &["Refugee camp", "Burned-out village", "Fortified command post"],
    },
    RawTag {
        name: "Desert World",
        desc: "The world is a desert, with little or no surface water.",
        enemies: &["Raider chieftain", "Crazed hermit", "Water cartel boss"],
        friends: &["Nomad guide", "Research biologist", "Aspiring water baron"],
        complications: &["Sandstorms", "Water supply failure", "Native wildlife adapted to ambush"],
        things: &["Enormous water reservoir", "Ancient artifact buried in the sand", "Cache of bandit loot"],
        places: &["Oasis", "Sand-buried ruin", "Deep desert canyon"],
    },
    RawTag {
        name: "Hivemind",
        desc: "Natives of this world are part of a shared mind, by technology or by nature.",
        enemies: &["A hivemind seeking to assimilate outsiders", "Hive fragment hunting its parent", "Ruthless exploiter of the hive"],
        friends: &["Unlinked native", "Hivemind researcher", "Sympathetic hive avatar"],
        complications: &["Leaving the hive kills its members", "The hive is slowly going mad", "Offworlders are getting drawn in"],
        things: &["Device to sever a mind from the hive", "Record of the hive's origin", "The hive's central node"],
        places: &["Silent crowded street", "Node chamber", "Lone dissenter's hiding place"],
    },
    RawTag {
        name: "Oceanic World",
        desc: "The world is covered, or nearly covered, with water.",
        enemies: &["Pirate raider", "Violent \"salvager\" gang", "Fanatical terraforming saboteur"],
        friends: &["Daredevil fisherman", "Sea hermit", "Sapient native life"],
        complications: &["The liquid is not water", "No land at all", "Terrible storms"],
        things: &["Sea floor treasure", "Rare aquatic organism", "Submerged pretech wreck"],
        places: &["Floating city", "Deep-sea habitat", "Storm-lashed rig"],
    },
    RawTag {
        name: "Police State",
        desc: "The world is a totalitarian state watched by ubiquitous police.",
        enemies: &["Secret police chief", "Scapegoating official", "Treacherous informer"],
        friends: &["Rebel leader", "Offworld agitator", "Imprisoned victim"],
        complications: &["The natives believe they are free", "The police have a hidden master", "Any offworlder is a suspect"],
        things: &["List of police informers", "Wealth taken from enemies of the state", "Dear Leader's private diary"],
        places: &["Military parade", "Gulag", "Gray concrete housing block"],
    },
    RawTag {
        name: "Zombies",
        desc: "Something has turned part of the population into mindless, dangerous husks.",
        enemies: &["Cult leader who worships the dead", "Scientist who made the plague", "Warlord ruling the survivors"],
        friends: &["Survivor with a cure lead", "Hardened zombie hunter", "Stranded offworld researcher"],
        complications: &["The infection is airborne", "The zombies are not truly dead", "Someone is spreading it on purpose"],
        things: &["Cure research", "Immune survivor", "Stockpile of weapons"],
        places: &["Overrun hospital", "Barricaded enclave", "Silent city centre"],
    },
];

/// Build the default tag set.
pub fn default_tags() -> TableResult<TagSet> {
    let mut tags = Vec::with_capacity(TAGS.len());
    for raw in TAGS {
        tags.push(Tag {
            name: raw.name.to_string(),
            desc: raw.desc.to_string(),
            enemies: UniformList::new("Enemies", raw.enemies.iter().copied())?,
            friends: UniformList::new("Friends", raw.friends.iter().copied())?,
            complications: UniformList::new("Complications", raw.complications.iter().copied())?,
            things: UniformList::new("Things", raw.things.iter().copied())?,
            places: UniformList::new("Places", raw.places.iter().copied())?,
        });
    }
    TagSet::new(tags)
}
