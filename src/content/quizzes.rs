//! Scenario questions.

use crate::quiz::ScenarioQuestion;

pub const MODEL_IN_USE: ScenarioQuestion = ScenarioQuestion {
    id: "model-in-use",
    prompt: "Your team is troubleshooting a web service on the public Internet. \
        Which model describes the protocol stack that is actually running?",
    candidates: &["TCP/IP Model", "OSI Model", "Both equally", "Neither"],
    correct: "TCP/IP Model",
    explanation: "The Internet runs the TCP/IP protocol suite. The OSI model is a \
        seven-layer reference model used for teaching and troubleshooting, but no \
        mainstream network implements its protocols.",
};

pub const OSI_SESSION: ScenarioQuestion = ScenarioQuestion {
    id: "osi-session",
    prompt: "A video conference drops and resumes from the last checkpoint. \
        Which OSI layer manages that dialogue?",
    candidates: &["Presentation", "Session", "Transport", "Application"],
    correct: "Session",
    explanation: "The Session layer (5) opens, manages and closes dialogues and can \
        resynchronize from checkpoints.",
};

pub const ENCAPSULATION_PDU: ScenarioQuestion = ScenarioQuestion {
    id: "encapsulation-pdu",
    prompt: "A capture shows a unit with source and destination MAC addresses and a \
        frame check sequence. What is this PDU called?",
    candidates: &["Segment", "Packet", "Frame", "Bits"],
    correct: "Frame",
    explanation: "MAC addresses and an FCS trailer are added at the Data Link layer, \
        whose PDU is the frame.",
};

pub const VOICE_CALL: ScenarioQuestion = ScenarioQuestion {
    id: "voice-call",
    prompt: "A traditional landline call keeps a fixed channel reserved for its whole \
        duration. Which switching technique is this?",
    candidates: &["Circuit switching", "Packet switching", "Message switching"],
    correct: "Circuit switching",
    explanation: "Circuit switching reserves a dedicated path during call setup and \
        releases it only at teardown, even during silence.",
};

pub const BURSTY_TRAFFIC: ScenarioQuestion = ScenarioQuestion {
    id: "bursty-traffic",
    prompt: "An office generates short bursts of web traffic with long idle \
        gaps. Which technique uses the links most efficiently?",
    candidates: &["Circuit switching", "Packet switching", "Message switching"],
    correct: "Packet switching",
    explanation: "Packet switching shares links between all users, so idle time is \
        never wasted on a reserved circuit.",
};

pub const COLLISION_DOMAIN: ScenarioQuestion = ScenarioQuestion {
    id: "collision-domain",
    prompt: "Eight PCs are connected to one 8-port hub. How many collision domains \
        are there?",
    candidates: &["1", "2", "8", "9"],
    correct: "1",
    explanation: "A hub repeats every signal to every port, so all attached devices \
        share a single collision domain.",
};

pub const SWITCH_FLOOD: ScenarioQuestion = ScenarioQuestion {
    id: "switch-flood",
    prompt: "A switch receives a frame whose destination MAC address is not in its MAC \
        table. What does it do?",
    candidates: &[
        "Drops the frame",
        "Floods it out of every port except the one it arrived on",
        "Sends it to the default gateway",
        "Replies with an ARP request",
    ],
    correct: "Floods it out of every port except the one it arrived on",
    explanation: "Unknown unicast frames are flooded. When the destination replies, \
        the switch learns its port and stops flooding.",
};

pub const ROUTER_LAYER: ScenarioQuestion = ScenarioQuestion {
    id: "router-layer",
    prompt: "At which OSI layer does a router make its forwarding decision?",
    candidates: &[
        "Layer 1 - Physical",
        "Layer 2 - Data Link",
        "Layer 3 - Network",
        "Layer 4 - Transport",
    ],
    correct: "Layer 3 - Network",
    explanation: "Routers forward on destination IP addresses, which are Network layer \
        information.",
};

pub const HANDSHAKE_THIRD: ScenarioQuestion = ScenarioQuestion {
    id: "handshake-third",
    prompt: "Which segment completes the TCP three-way handshake?",
    candidates: &["SYN", "SYN-ACK", "ACK", "FIN"],
    correct: "ACK",
    explanation: "SYN, then SYN-ACK, then ACK. After the client's ACK both sides \
        consider the connection established.",
};

pub const GAME_TRANSPORT: ScenarioQuestion = ScenarioQuestion {
    id: "game-transport",
    prompt: "An online game sends player positions 60 times per second. A late update \
        is useless. Which transport protocol fits best?",
    candidates: &["TCP", "UDP"],
    correct: "UDP",
    explanation: "UDP has no retransmission or head-of-line blocking, so a lost update \
        is simply replaced by the next one.",
};

pub const PRIVATE_ADDRESS: ScenarioQuestion = ScenarioQuestion {
    id: "private-address",
    prompt: "Which of these IPv4 addresses is private (RFC 1918)?",
    candidates: &["8.8.8.8", "192.168.1.10", "172.32.0.1", "1.1.1.1"],
    correct: "192.168.1.10",
    explanation: "The private ranges are 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16. \
        172.32.0.1 falls just outside 172.16.0.0/12.",
};

pub const SSH_PORT: ScenarioQuestion = ScenarioQuestion {
    id: "ssh-port",
    prompt: "A firewall must allow remote shell access to a server. Which port should \
        be opened?",
    candidates: &["21", "22", "23", "25"],
    correct: "22",
    explanation: "SSH listens on TCP 22. Port 23 is Telnet, which sends everything in \
        clear text.",
};

pub const DNS_PORT: ScenarioQuestion = ScenarioQuestion {
    id: "dns-port",
    prompt: "Ordinary DNS queries are sent to which port?",
    candidates: &["53", "67", "80", "443"],
    correct: "53",
    explanation: "DNS uses port 53, over UDP for most queries and TCP for large \
        responses and zone transfers.",
};

pub const ARPANET_YEAR: ScenarioQuestion = ScenarioQuestion {
    id: "arpanet-year",
    prompt: "In which year was the first message sent over ARPANET?",
    candidates: &["1965", "1969", "1974", "1983"],
    correct: "1969",
    explanation: "On 29 October 1969 UCLA sent \"LO\" to Stanford before the system \
        crashed; the full \"LOGIN\" followed an hour later.",
};

pub const ALL_QUESTIONS: &[&ScenarioQuestion] = &[
    &MODEL_IN_USE,
    &OSI_SESSION,
    &ENCAPSULATION_PDU,
    &VOICE_CALL,
    &BURSTY_TRAFFIC,
    &COLLISION_DOMAIN,
    &SWITCH_FLOOD,
    &ROUTER_LAYER,
    &HANDSHAKE_THIRD,
    &GAME_TRANSPORT,
    &PRIVATE_ADDRESS,
    &SSH_PORT,
    &DNS_PORT,
    &ARPANET_YEAR,
];

pub fn question(id: &str) -> Option<&'static ScenarioQuestion> {
    ALL_QUESTIONS.iter().copied().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_correct_answer_is_a_candidate() {
        for q in ALL_QUESTIONS {
            assert!(q.has_candidate(q.correct), "{}: correct not offered", q.id);
        }
    }

    #[test]
    fn test_candidates_unique() {
        for q in ALL_QUESTIONS {
            let set: HashSet<_> = q.candidates.iter().collect();
            assert_eq!(set.len(), q.candidates.len(), "{}", q.id);
            assert!(q.candidates.len() >= 2, "{}", q.id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(question("model-in-use").unwrap().correct, "TCP/IP Model");
        assert!(question("nope").is_none());
    }
}
