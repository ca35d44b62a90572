//! The shipped story: a Space Marine flank defense against an Ork assault
//!
//! Every node of the depth-3 tree is laid out here as static data. Two
//! leaves share the retreat passage and the three victories share one
//! triumphant passage, matching how the narrative reuses its text; the
//! `[2,1]` prefix ends the story early and is the only branch below full
//! depth.

use super::tree::{ChoiceArm, Ending, NodeKind, Story, StoryNode, StoryTree, Tone};
use crate::identifiers::SegmentId;

/// The playable story.
pub static ORK_ASSAULT: Story = Story {
    welcome: WELCOME,
    prologue: PROLOGUE,
    tree: StoryTree::new(&BEGINNING),
};

const WELCOME: &str = "\nWelcome to my text based adventure game! My story is based on WarHammer 40K where the Space Marines face off in a battle against the Orks.\n\
The game will offer you a series of choices, to select a choice simply enter the corresponding number when prompted and press enter!\n\
I hope you enjoy!!!\n\n";

const PROLOGUE: &str = "The Story Begins!\n\n\
In the grim darkness of the 41st millennium, the merciless forces of Chaos were not the only threat that plagued the Imperium of Man.\n\
On a desolate world, a battalion of Space Marines, led by Captain Valerius of the Ultramarines, face an overwhelming horde of Orks led by the cunning Warboss Grukk.\n\
You are a powerful Terminator in charge of the unit tasked with defending a flank of the frontline garrison against the impending ork attack.\n\n";

/// Retreat passage, shared by the early loss and the full-depth withdrawal.
const FALL_BACK_BODY: &str = "You order the squad to fall back in an attempt to regroup. However, the Orks have breached your ranks and are in hot pursuit. Your team fails to regroup and are overwhelmed by the Orks.\n";

/// Triumphant passage, shared by all three victories.
const VICTORY_BODY: &str = "Your order is the correct choice! The Orks are decimated, their corpses litter the ground, any foe remaining quickly loses moral and retreats. Your squad has held the flank. It is time to regroup with the rest of the battalion.\n";

static BEGINNING: StoryNode = StoryNode {
    segment: SegmentId::new("beginning"),
    body: "As the Orks charge forward with reckless abandon, bellowing their war cries. The battalion holds fast, bolters primed. The air trembled with the roar of gunfire as the Orks closed in, you are faced with a choice.\n",
    kind: NodeKind::Branch(&[
        ChoiceArm {
            label: "Order your squad to leave the fortification and charge the Orks head on.",
            node: &LEAVE_FORTIFICATION,
        },
        ChoiceArm {
            label: "Order the squad to open fire.",
            node: &OPEN_FIRE,
        },
    ]),
};

static LEAVE_FORTIFICATION: StoryNode = StoryNode {
    segment: SegmentId::new("leave-fortification"),
    body: "You bellow the order of charge, your squad unquestioningly obeying your command bravely leap the machine gun emplacement and charge the Orks.\n\
Captain Valerius, his storm bolter singing with righteous fury sees your squads courage and orders the rest of the fortification to charge. You have reached the first screaming Ork and faced with your second choice.\n",
    kind: NodeKind::Branch(&[
        ChoiceArm {
            label: "Unleash a flurry of blows with your power fist.",
            node: &POWER_FISTS,
        },
        ChoiceArm {
            label: "Release the fury of your storm bolter.",
            node: &STORM_BOLTER_FURY,
        },
    ]),
};

static OPEN_FIRE: StoryNode = StoryNode {
    segment: SegmentId::new("open-fire"),
    body: "The hail of bolter fire opens up on the advancing Orks. Yet, the Orks proved relentless, their brutish strength has allowed them to shrug off wounds that would cripple lesser beings.\n\
The sheer numbers threaten to overwhelm your squad. Waves of green-skinned warriors surge forward, breaching your ranks. You are faced with a choice.\n",
    kind: NodeKind::Branch(&[
        ChoiceArm {
            label: "Order the squad to fall back.",
            node: &EARLY_FALL_BACK,
        },
        ChoiceArm {
            label: "Order the squad to hold the line and fight.",
            node: &HOLD_THE_LINE,
        },
    ]),
};

static POWER_FISTS: StoryNode = StoryNode {
    segment: SegmentId::new("power-fists"),
    body: "The ground shakes beneath your feet as you engage in brutal hand to hand combat. The Ork swings his choppa with egregious force, aiming to cleave through your armor.\n\
However your enhanced reflexes and training in close-quarters combat, deftly parry the Ork's attack. You strike his head with a thunderous blow, his skull shatters like glass. You are faced with a choice.\n",
    kind: NodeKind::Branch(&[
        ChoiceArm {
            label: "Continue engaging in hand to hand combat.",
            node: &CHOPPA_OVERRUN,
        },
        ChoiceArm {
            label: "Order your flamer to unleash his mighty flamethrower.",
            node: &FLAMER_RESCUE,
        },
    ]),
};

static STORM_BOLTER_FURY: StoryNode = StoryNode {
    segment: SegmentId::new("storm-bolter-fury"),
    body: "You unleash a hail of bolter fire on the Ork. You spot a particularly large Ork, the Warboss, Grukka.\n\
You aim your storm bolter at the Warboss and unleash a flurry of bolts. The Warboss is hit, yet he continues to charge forward. You engage in hand to hand combat with the Warboss. You are faced with a choice.\n",
    kind: NodeKind::Branch(&[
        ChoiceArm {
            label: "Strike the Warboss with your power fist.",
            node: &WARBOSS_FELLED,
        },
        ChoiceArm {
            label: "Order the squad to fall back.",
            node: &LATE_FALL_BACK,
        },
    ]),
};

static HOLD_THE_LINE: StoryNode = StoryNode {
    segment: SegmentId::new("hold-the-line"),
    body: "Amidst the chaos, Librarian Tiberius, his mind aflame with psychic energy, channeled his powers to unleash a devastating psychic storm. Bolts of energy crackled through the air, incinerating Orks in their path.\n\
The Warboss, Grukka, sensing the tide of battle turning against him, charged towards Tiberius with a thunderous roar. You are faced with a choice.\n",
    kind: NodeKind::Branch(&[
        ChoiceArm {
            label: "Alert Tiberius of the Warboss' charge.",
            node: &TIBERIUS_UNHEARD,
        },
        ChoiceArm {
            label: "Aim to strike the Warboss with your power fist.",
            node: &ORKS_ROUTED,
        },
    ]),
};

/// The designated early loss: retreating right after opening fire ends the
/// story at depth 2, pruning the whole `[2,1,*]` subtree.
static EARLY_FALL_BACK: StoryNode = StoryNode {
    segment: SegmentId::new("fall-back"),
    body: FALL_BACK_BODY,
    kind: NodeKind::Ending(Ending {
        tone: Tone::Defeat,
        early: true,
    }),
};

static LATE_FALL_BACK: StoryNode = StoryNode {
    segment: SegmentId::new("fall-back"),
    body: FALL_BACK_BODY,
    kind: NodeKind::Ending(Ending {
        tone: Tone::Withdrawal,
        early: false,
    }),
};

static CHOPPA_OVERRUN: StoryNode = StoryNode {
    segment: SegmentId::new("choppa-overrun"),
    body: "You continue to engage in hand to hand combat. The hoard relentless in their attack and you become overwhelmed. The Orks overcome your amour and you are torn apart by their choppas.\n",
    kind: NodeKind::Ending(Ending {
        tone: Tone::Defeat,
        early: false,
    }),
};

static TIBERIUS_UNHEARD: StoryNode = StoryNode {
    segment: SegmentId::new("tiberius-unheard"),
    body: "Tiberius fails to hear your shout. The Warboss' charge eliminates the Librarian leaving your squad vulnerable to further attack, your squad becomes overwhelmed and perishes.\n",
    kind: NodeKind::Ending(Ending {
        tone: Tone::Defeat,
        early: false,
    }),
};

static FLAMER_RESCUE: StoryNode = StoryNode {
    segment: SegmentId::new("flamer-rescue"),
    body: VICTORY_BODY,
    kind: NodeKind::Ending(Ending {
        tone: Tone::Victory,
        early: false,
    }),
};

static WARBOSS_FELLED: StoryNode = StoryNode {
    segment: SegmentId::new("warboss-felled"),
    body: VICTORY_BODY,
    kind: NodeKind::Ending(Ending {
        tone: Tone::Victory,
        early: false,
    }),
};

static ORKS_ROUTED: StoryNode = StoryNode {
    segment: SegmentId::new("orks-routed"),
    body: VICTORY_BODY,
    kind: NodeKind::Ending(Ending {
        tone: Tone::Victory,
        early: false,
    }),
};
