//! The page's sections, in display order.

use crate::assignment::AssignmentSet;
use crate::content::assignments::{DEVICE_LAYERS, OSI_ORDER};
use crate::content::facts::{self, FactTable};
use crate::content::quizzes;
use crate::content::topics::{self, Topic};
use crate::mode::{LearningMode, Visibility};
use crate::quiz::ScenarioQuestion;

/// How a fact table is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactStyle {
    /// One card per row, for visual learners.
    Cards,
    /// A compact table for revision.
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockBody {
    Text(&'static str),
    KeyPoints(&'static [&'static str]),
    Animation(&'static Topic),
    Quiz(&'static ScenarioQuestion),
    Facts(&'static FactTable, FactStyle),
    Assignment(&'static AssignmentSet),
}

impl BlockBody {
    pub fn kind(&self) -> &'static str {
        match self {
            BlockBody::Text(_) => "text",
            BlockBody::KeyPoints(_) => "key-points",
            BlockBody::Animation(_) => "animation",
            BlockBody::Quiz(_) => "quiz",
            BlockBody::Facts(_, FactStyle::Cards) => "fact-cards",
            BlockBody::Facts(_, FactStyle::Table) => "fact-table",
            BlockBody::Assignment(_) => "assignment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub visibility: Visibility,
    pub body: BlockBody,
}

const fn always(body: BlockBody) -> ContentBlock {
    ContentBlock {
        visibility: Visibility::Always,
        body,
    }
}

const fn visual(body: BlockBody) -> ContentBlock {
    ContentBlock {
        visibility: Visibility::VisualizeOnly,
        body,
    }
}

const fn exam(body: BlockBody) -> ContentBlock {
    ContentBlock {
        visibility: Visibility::ExamOnly,
        body,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub blocks: &'static [ContentBlock],
}

impl Section {
    /// Blocks to render in `mode`, in order, each with its position in
    /// [`Section::blocks`]. Positions stay the same across modes, so views
    /// can key block state on them.
    pub fn visible_blocks(
        &self,
        mode: LearningMode,
    ) -> impl Iterator<Item = (usize, &'static ContentBlock)> + use<> {
        let blocks: &'static [ContentBlock] = self.blocks;
        blocks
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.visibility.shows_in(mode))
    }

    /// Blocks to render in `mode`, in order.
    pub fn blocks_for(&self, mode: LearningMode) -> Vec<&'static ContentBlock> {
        self.visible_blocks(mode).map(|(_, b)| b).collect()
    }
}

use BlockBody::{Animation, Assignment, Facts, KeyPoints, Quiz, Text};

pub const SECTIONS: &[Section] = &[
    Section {
        id: "network-basics",
        title: "What Is a Network?",
        summary: "Devices that share data over links, at every scale.",
        blocks: &[
            always(Text(
                "A network is two or more devices connected so they can exchange data. \
                 Follow one request from your laptop to a web server and back.",
            )),
            visual(Animation(&topics::PACKET_JOURNEY)),
            visual(Facts(&facts::NETWORK_TYPES, FactStyle::Cards)),
            exam(Facts(&facts::NETWORK_TYPES, FactStyle::Table)),
            exam(KeyPoints(&[
                "Nodes are connected by links; data crosses several networks on the way.",
                "Networks are classified by scale: PAN, LAN, MAN, WAN.",
            ])),
        ],
    },
    Section {
        id: "osi-model",
        title: "The OSI Model",
        summary: "Seven layers, each with one job.",
        blocks: &[
            always(Text(
                "The OSI reference model splits communication into seven layers. \
                 Each layer serves the one above it and relies on the one below.",
            )),
            visual(Animation(&topics::OSI_LAYERS)),
            exam(Facts(&facts::OSI_LAYER_FACTS, FactStyle::Table)),
            exam(KeyPoints(&[
                "Mnemonic, top down: All People Seem To Need Data Processing.",
                "PDUs: data (5-7), segment (4), packet (3), frame (2), bits (1).",
            ])),
            always(Quiz(&quizzes::OSI_SESSION)),
        ],
    },
    Section {
        id: "osi-ordering",
        title: "Put the Layers in Order",
        summary: "Drag and drop practice for the OSI stack.",
        blocks: &[
            visual(Assignment(&OSI_ORDER)),
            exam(KeyPoints(&[
                "7 Application, 6 Presentation, 5 Session, 4 Transport.",
                "3 Network, 2 Data Link, 1 Physical.",
            ])),
        ],
    },
    Section {
        id: "tcp-ip-model",
        title: "The TCP/IP Model",
        summary: "The four layers the Internet actually runs.",
        blocks: &[
            always(Text(
                "TCP/IP predates OSI and was built from working protocols rather than \
                 a committee design. It folds the top three OSI layers into one.",
            )),
            visual(Animation(&topics::TCP_IP_LAYERS)),
            exam(KeyPoints(&[
                "Four layers: Application, Transport, Internet, Network Access.",
                "IP is best effort; reliability is TCP's job.",
            ])),
        ],
    },
    Section {
        id: "model-comparison",
        title: "OSI vs TCP/IP",
        summary: "How the two models line up.",
        blocks: &[
            visual(Facts(&facts::MODEL_COMPARISON, FactStyle::Cards)),
            exam(Facts(&facts::MODEL_COMPARISON, FactStyle::Table)),
            always(Quiz(&quizzes::MODEL_IN_USE)),
        ],
    },
    Section {
        id: "encapsulation",
        title: "Encapsulation",
        summary: "Each layer wraps the data from the layer above.",
        blocks: &[
            visual(Text(
                "On the way down every layer adds its own header. On the way up the \
                 receiver peels them off in reverse order.",
            )),
            visual(Animation(&topics::ENCAPSULATION)),
            exam(KeyPoints(&[
                "Data -> segment (TCP header) -> packet (IP header) -> frame -> bits.",
                "Only the Data Link layer adds a trailer (the FCS).",
            ])),
            always(Quiz(&quizzes::ENCAPSULATION_PDU)),
        ],
    },
    Section {
        id: "circuit-switching",
        title: "Circuit Switching",
        summary: "Reserve the whole path first.",
        blocks: &[
            visual(Animation(&topics::CIRCUIT_SWITCHING)),
            exam(KeyPoints(&[
                "Three phases: setup, transfer, teardown.",
                "Guaranteed bandwidth, but idle capacity is wasted.",
            ])),
            always(Quiz(&quizzes::VOICE_CALL)),
        ],
    },
    Section {
        id: "packet-switching",
        title: "Packet Switching",
        summary: "Chop data up and share every link.",
        blocks: &[
            visual(Animation(&topics::PACKET_SWITCHING)),
            exam(KeyPoints(&[
                "No reservation; packets are routed independently.",
                "Efficient for bursty traffic; delay varies with queuing.",
            ])),
            always(Quiz(&quizzes::BURSTY_TRAFFIC)),
        ],
    },
    Section {
        id: "message-switching",
        title: "Message Switching",
        summary: "Store the whole message, then forward it.",
        blocks: &[
            visual(Animation(&topics::MESSAGE_SWITCHING)),
            exam(KeyPoints(&[
                "Store-and-forward of whole messages, no dedicated path.",
                "Nodes need storage for the largest message.",
            ])),
        ],
    },
    Section {
        id: "switching-comparison",
        title: "Comparing Switching Techniques",
        summary: "Circuit, message and packet switching side by side.",
        blocks: &[
            visual(Facts(&facts::SWITCHING_METRICS, FactStyle::Cards)),
            exam(Facts(&facts::SWITCHING_METRICS, FactStyle::Table)),
        ],
    },
    Section {
        id: "hubs",
        title: "Hubs",
        summary: "Everyone hears everything, and collisions happen.",
        blocks: &[
            always(Text(
                "A hub is a multiport repeater. Anything arriving on one port is sent \
                 out of all the others, so only one device can talk at a time.",
            )),
            visual(Animation(&topics::HUB_COLLISION)),
            exam(KeyPoints(&[
                "Layer 1 device, half duplex, one collision domain.",
                "CSMA/CD: listen, transmit, detect collision, jam, back off.",
            ])),
            always(Quiz(&quizzes::COLLISION_DOMAIN)),
        ],
    },
    Section {
        id: "switches",
        title: "Switches",
        summary: "Learning where every MAC address lives.",
        blocks: &[
            visual(Animation(&topics::SWITCH_LEARNING)),
            visual(Facts(&facts::MAC_TABLE, FactStyle::Cards)),
            exam(Facts(&facts::MAC_TABLE, FactStyle::Table)),
            exam(KeyPoints(&[
                "Learn source MACs, forward on destination MAC, flood unknowns.",
                "Each port is its own collision domain.",
            ])),
            always(Quiz(&quizzes::SWITCH_FLOOD)),
        ],
    },
    Section {
        id: "routers",
        title: "Routers",
        summary: "Choosing the next hop between networks.",
        blocks: &[
            visual(Animation(&topics::ROUTER_FORWARDING)),
            visual(Facts(&facts::ROUTING_TABLE, FactStyle::Cards)),
            exam(Facts(&facts::ROUTING_TABLE, FactStyle::Table)),
            always(Quiz(&quizzes::ROUTER_LAYER)),
        ],
    },
    Section {
        id: "device-categories",
        title: "Network Devices",
        summary: "Which layer does each device work at?",
        blocks: &[
            visual(Assignment(&DEVICE_LAYERS)),
            exam(Facts(&facts::DEVICE_FACTS, FactStyle::Table)),
        ],
    },
    Section {
        id: "tcp-handshake",
        title: "The TCP Handshake",
        summary: "Three segments before any data.",
        blocks: &[
            visual(Animation(&topics::TCP_HANDSHAKE)),
            exam(KeyPoints(&[
                "SYN, SYN-ACK, ACK. Each side's initial sequence number is acknowledged.",
                "Connections close with FIN/ACK in each direction.",
            ])),
            always(Quiz(&quizzes::HANDSHAKE_THIRD)),
        ],
    },
    Section {
        id: "tcp-vs-udp",
        title: "TCP vs UDP",
        summary: "Reliability or speed.",
        blocks: &[
            visual(Facts(&facts::TCP_VS_UDP, FactStyle::Cards)),
            exam(Facts(&facts::TCP_VS_UDP, FactStyle::Table)),
            always(Quiz(&quizzes::GAME_TRANSPORT)),
        ],
    },
    Section {
        id: "ip-addressing",
        title: "IPv4 Addressing",
        summary: "Classes, masks and private ranges.",
        blocks: &[
            always(Text(
                "An IPv4 address is 32 bits written as four octets. The mask says how \
                 many leading bits identify the network.",
            )),
            visual(Facts(&facts::IPV4_CLASSES, FactStyle::Cards)),
            exam(Facts(&facts::IPV4_CLASSES, FactStyle::Table)),
            always(Quiz(&quizzes::PRIVATE_ADDRESS)),
        ],
    },
    Section {
        id: "protocols",
        title: "Common Protocols",
        summary: "Well-known ports worth memorizing.",
        blocks: &[
            visual(Facts(&facts::COMMON_PROTOCOLS, FactStyle::Cards)),
            exam(Facts(&facts::COMMON_PROTOCOLS, FactStyle::Table)),
            always(Quiz(&quizzes::SSH_PORT)),
        ],
    },
    Section {
        id: "dns",
        title: "DNS",
        summary: "Turning names into addresses.",
        blocks: &[
            visual(Animation(&topics::DNS_RESOLUTION)),
            visual(Facts(&facts::DNS_RECORDS, FactStyle::Cards)),
            exam(Facts(&facts::DNS_RECORDS, FactStyle::Table)),
            always(Quiz(&quizzes::DNS_PORT)),
        ],
    },
    Section {
        id: "history",
        title: "A Short History",
        summary: "From ARPANET to Wi-Fi.",
        blocks: &[
            visual(Facts(&facts::HISTORY_TIMELINE, FactStyle::Cards)),
            exam(Facts(&facts::HISTORY_TIMELINE, FactStyle::Table)),
            always(Quiz(&quizzes::ARPANET_YEAR)),
        ],
    },
];

pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}
