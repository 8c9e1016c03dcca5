//! Animated step sequences, one per topic.

use crate::animator::{Step, StepAnimator};
use crate::error::Result;
use crate::palette::{ColorTag, Icon};

/// A named step sequence with its own tick period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub interval_ms: u32,
    pub steps: &'static [Step],
}

impl Topic {
    pub fn animator(&self) -> Result<StepAnimator> {
        StepAnimator::new(self.steps, self.interval_ms)
    }
}

const fn step(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    detail: &'static str,
    icon: Icon,
    color: ColorTag,
) -> Step {
    Step {
        id,
        name,
        description,
        detail,
        icon,
        color,
        special: false,
    }
}

const fn special(mut s: Step) -> Step {
    s.special = true;
    s
}

pub const PACKET_JOURNEY: Topic = Topic {
    id: "packet-journey",
    title: "A Packet's Journey",
    interval_ms: 2000,
    steps: &[
        step(
            "laptop",
            "Laptop",
            "You press Enter on a URL",
            "The browser builds an HTTP request and hands it to the operating system's network stack.",
            Icon::Computer,
            ColorTag::Blue,
        ),
        step(
            "switch",
            "Home Switch",
            "Frame forwarded by MAC address",
            "The switch looks up the router's MAC address in its table and sends the frame out of one port only.",
            Icon::Switch,
            ColorTag::Green,
        ),
        step(
            "router",
            "Home Router",
            "NAT and default route",
            "The router rewrites the private source address and forwards the packet toward the ISP.",
            Icon::Router,
            ColorTag::Orange,
        ),
        step(
            "internet",
            "Internet",
            "Many hops across ISPs",
            "Each router on the path makes an independent forwarding decision from its routing table.",
            Icon::Globe,
            ColorTag::Purple,
        ),
        step(
            "server",
            "Web Server",
            "Request arrives",
            "The server's stack strips each header in turn and hands the HTTP request to the web server process.",
            Icon::Server,
            ColorTag::Teal,
        ),
        step(
            "response",
            "Response",
            "The page travels back",
            "The reply takes its own path back; packets of one response may even take different routes.",
            Icon::Check,
            ColorTag::Green,
        ),
    ],
};

pub const OSI_LAYERS: Topic = Topic {
    id: "osi-layers",
    title: "Down the OSI Stack",
    interval_ms: 2500,
    steps: &[
        step(
            "l7",
            "7. Application",
            "Network services for applications",
            "HTTP, SMTP and DNS live here. This is the layer the user's software talks to.",
            Icon::Computer,
            ColorTag::Red,
        ),
        step(
            "l6",
            "6. Presentation",
            "Translation, encryption, compression",
            "Converts data into a common format: character encoding, TLS encryption, image compression.",
            Icon::Lock,
            ColorTag::Orange,
        ),
        step(
            "l5",
            "5. Session",
            "Dialogue control",
            "Opens, manages and closes sessions between applications, with checkpoints for recovery.",
            Icon::Handshake,
            ColorTag::Yellow,
        ),
        step(
            "l4",
            "4. Transport",
            "End-to-end delivery",
            "Segments data and provides ports, ordering, flow control and retransmission (TCP) or none of it (UDP).",
            Icon::Packet,
            ColorTag::Green,
        ),
        step(
            "l3",
            "3. Network",
            "Logical addressing and routing",
            "IP addresses identify hosts; routers pick the path a packet takes across networks.",
            Icon::Router,
            ColorTag::Teal,
        ),
        step(
            "l2",
            "2. Data Link",
            "Node-to-node frames",
            "MAC addresses, framing and error detection on a single link. Switches work here.",
            Icon::Switch,
            ColorTag::Blue,
        ),
        step(
            "l1",
            "1. Physical",
            "Bits on the wire",
            "Voltages, light pulses and radio waves. Cables, hubs and repeaters belong here.",
            Icon::Hub,
            ColorTag::Purple,
        ),
    ],
};

pub const TCP_IP_LAYERS: Topic = Topic {
    id: "tcp-ip-layers",
    title: "The TCP/IP Model",
    interval_ms: 2500,
    steps: &[
        step(
            "application",
            "Application",
            "OSI layers 5 to 7 in one",
            "HTTP, DNS, SMTP, SSH. Applications handle their own presentation and sessions.",
            Icon::Computer,
            ColorTag::Red,
        ),
        step(
            "transport",
            "Transport",
            "TCP or UDP",
            "Port numbers identify the process; TCP adds reliability, UDP keeps it lightweight.",
            Icon::Packet,
            ColorTag::Green,
        ),
        step(
            "internet",
            "Internet",
            "IP, ICMP",
            "Best-effort delivery of packets between any two hosts, routed hop by hop.",
            Icon::Globe,
            ColorTag::Teal,
        ),
        step(
            "link",
            "Network Access",
            "Ethernet, Wi-Fi",
            "Everything needed to put a frame onto the local medium: OSI layers 1 and 2 together.",
            Icon::Link,
            ColorTag::Blue,
        ),
    ],
};

pub const ENCAPSULATION: Topic = Topic {
    id: "encapsulation",
    title: "Encapsulation",
    interval_ms: 2500,
    steps: &[
        step(
            "data",
            "Data",
            "Application payload",
            "The message as the application produced it, e.g. an HTTP GET request.",
            Icon::Data,
            ColorTag::Red,
        ),
        step(
            "segment",
            "Segment",
            "+ TCP header",
            "Source and destination ports, sequence and acknowledgement numbers are prepended.",
            Icon::Packet,
            ColorTag::Green,
        ),
        step(
            "packet",
            "Packet",
            "+ IP header",
            "Source and destination IP addresses and a TTL are added so routers can forward it.",
            Icon::Router,
            ColorTag::Teal,
        ),
        step(
            "frame",
            "Frame",
            "+ Ethernet header and trailer",
            "MAC addresses in front, a frame check sequence behind for error detection.",
            Icon::Switch,
            ColorTag::Blue,
        ),
        step(
            "bits",
            "Bits",
            "Onto the medium",
            "The frame is serialized into signals: 1s and 0s on copper, fiber or radio.",
            Icon::Hub,
            ColorTag::Purple,
        ),
    ],
};

pub const CIRCUIT_SWITCHING: Topic = Topic {
    id: "circuit-switching",
    title: "Circuit Switching",
    interval_ms: 2500,
    steps: &[
        step(
            "setup",
            "Call Setup",
            "Caller dials, exchanges reserve a path",
            "Signaling travels through each exchange, which reserves a channel on the next trunk.",
            Icon::Phone,
            ColorTag::Blue,
        ),
        step(
            "established",
            "Circuit Established",
            "Dedicated end-to-end path",
            "The whole path is reserved for this call. Nobody else can use that bandwidth, even in silence.",
            Icon::Link,
            ColorTag::Green,
        ),
        step(
            "transfer",
            "Data Transfer",
            "Constant rate, constant delay",
            "Voice flows continuously over the reserved channel with no queuing and no reordering.",
            Icon::Data,
            ColorTag::Purple,
        ),
        step(
            "teardown",
            "Call Teardown",
            "Resources released",
            "Hanging up frees every reserved channel along the path for the next caller.",
            Icon::Unlink,
            ColorTag::Red,
        ),
    ],
};

pub const PACKET_SWITCHING: Topic = Topic {
    id: "packet-switching",
    title: "Packet Switching",
    interval_ms: 2000,
    steps: &[
        step(
            "split",
            "Segmentation",
            "Message split into packets",
            "Each packet carries a piece of the data plus a header with source, destination and sequence number.",
            Icon::Packet,
            ColorTag::Blue,
        ),
        step(
            "route-a",
            "Packet 1 via Router A",
            "Independent forwarding",
            "Every packet is routed on its own; no path is reserved in advance.",
            Icon::Router,
            ColorTag::Green,
        ),
        step(
            "route-b",
            "Packet 2 via Router B",
            "A different path",
            "Congestion on one link sends the next packet another way. Links are shared by everyone.",
            Icon::Router,
            ColorTag::Orange,
        ),
        step(
            "queue",
            "Queuing",
            "Store and forward",
            "Routers buffer packets while the outgoing link is busy, so delay varies from packet to packet.",
            Icon::Clock,
            ColorTag::Yellow,
        ),
        step(
            "reassembly",
            "Reassembly",
            "Reordered at the destination",
            "Packets may arrive out of order; the receiver uses sequence numbers to rebuild the message.",
            Icon::Check,
            ColorTag::Teal,
        ),
    ],
};

pub const MESSAGE_SWITCHING: Topic = Topic {
    id: "message-switching",
    title: "Message Switching",
    interval_ms: 3000,
    steps: &[
        step(
            "compose",
            "Message Composed",
            "Whole message handed to the network",
            "Telegrams and early e-mail relays sent the complete message as a single unit.",
            Icon::Envelope,
            ColorTag::Blue,
        ),
        step(
            "store",
            "Stored at Node",
            "Held until fully received",
            "Each node writes the entire message to storage before doing anything with it.",
            Icon::Server,
            ColorTag::Orange,
        ),
        step(
            "forward",
            "Forwarded",
            "Sent on when the next link is free",
            "No dedicated path; each hop waits for the next link, so large messages add large delays.",
            Icon::Router,
            ColorTag::Purple,
        ),
        step(
            "deliver",
            "Delivered",
            "Destination receives the full message",
            "Reliable but slow: delay grows with message size multiplied by the number of hops.",
            Icon::Check,
            ColorTag::Green,
        ),
    ],
};

pub const HUB_COLLISION: Topic = Topic {
    id: "hub-collision",
    title: "Hub Collisions",
    interval_ms: 2500,
    steps: &[
        step(
            "a-sends",
            "PC A Transmits",
            "Frame leaves PC A",
            "PC A senses an idle medium and starts sending a frame addressed to PC D.",
            Icon::Computer,
            ColorTag::Blue,
        ),
        step(
            "repeat",
            "Hub Repeats",
            "Copied out of every port",
            "A hub has no idea about addresses; it regenerates the signal on all other ports.",
            Icon::Hub,
            ColorTag::Gray,
        ),
        step(
            "c-sends",
            "PC C Transmits",
            "Another sender at the same time",
            "PC C also sensed silence a moment ago and begins its own transmission.",
            Icon::Computer,
            ColorTag::Orange,
        ),
        special(step(
            "collision",
            "Collision!",
            "Signals overlap on the shared medium",
            "Both frames are corrupted. Every port on a hub is in one collision domain.",
            Icon::Collision,
            ColorTag::Red,
        )),
        step(
            "backoff",
            "Backoff and Retry",
            "CSMA/CD recovers",
            "Senders emit a jam signal, wait a random backoff time, then try again.",
            Icon::Clock,
            ColorTag::Green,
        ),
    ],
};

pub const SWITCH_LEARNING: Topic = Topic {
    id: "switch-learning",
    title: "How a Switch Learns",
    interval_ms: 2500,
    steps: &[
        step(
            "arrive",
            "Frame Arrives",
            "PC A -> PC B on port 1",
            "The frame carries source MAC AA:AA and destination MAC BB:BB.",
            Icon::Computer,
            ColorTag::Blue,
        ),
        step(
            "learn",
            "Learn Source",
            "AA:AA is on port 1",
            "The switch records the source MAC and the port it came in on in its MAC table.",
            Icon::Book,
            ColorTag::Green,
        ),
        step(
            "lookup",
            "Look Up Destination",
            "BB:BB not in the table",
            "An unknown destination means the switch cannot pick a single port yet.",
            Icon::Search,
            ColorTag::Yellow,
        ),
        step(
            "flood",
            "Flood",
            "Out of every port except port 1",
            "Unknown unicast frames are flooded; only PC B will accept it.",
            Icon::Switch,
            ColorTag::Orange,
        ),
        step(
            "unicast",
            "Reply Learned",
            "BB:BB is on port 3",
            "PC B's reply teaches the switch its port. From now on traffic between A and B is unicast.",
            Icon::Check,
            ColorTag::Teal,
        ),
    ],
};

pub const ROUTER_FORWARDING: Topic = Topic {
    id: "router-forwarding",
    title: "Router Forwarding",
    interval_ms: 3000,
    steps: &[
        step(
            "arrive",
            "Packet Arrives",
            "On interface eth0",
            "The router strips the Ethernet frame addressed to its own MAC.",
            Icon::Packet,
            ColorTag::Blue,
        ),
        step(
            "read",
            "Read Destination",
            "Destination 10.2.0.15",
            "Only the IP header matters for forwarding; the payload is never inspected.",
            Icon::Search,
            ColorTag::Yellow,
        ),
        step(
            "match",
            "Longest Prefix Match",
            "10.2.0.0/16 beats 0.0.0.0/0",
            "The most specific matching route in the routing table wins.",
            Icon::Book,
            ColorTag::Purple,
        ),
        step(
            "ttl",
            "Decrement TTL",
            "TTL 64 -> 63",
            "A packet whose TTL reaches zero is dropped, preventing endless loops.",
            Icon::Clock,
            ColorTag::Orange,
        ),
        step(
            "forward",
            "Forward",
            "Out of eth1 toward 192.168.1.2",
            "A new frame is built for the next hop's MAC address and sent on its way.",
            Icon::Router,
            ColorTag::Green,
        ),
    ],
};

pub const TCP_HANDSHAKE: Topic = Topic {
    id: "tcp-handshake",
    title: "TCP Three-Way Handshake",
    interval_ms: 2000,
    steps: &[
        step(
            "syn",
            "SYN",
            "Client: seq = 100",
            "The client picks an initial sequence number and asks to open a connection.",
            Icon::Computer,
            ColorTag::Blue,
        ),
        step(
            "syn-ack",
            "SYN-ACK",
            "Server: seq = 300, ack = 101",
            "The server acknowledges the client's number and sends its own initial sequence number.",
            Icon::Server,
            ColorTag::Green,
        ),
        step(
            "ack",
            "ACK",
            "Client: ack = 301",
            "The client acknowledges the server's number. Both sides now agree on the starting point.",
            Icon::Handshake,
            ColorTag::Purple,
        ),
        step(
            "established",
            "Established",
            "Data may flow both ways",
            "Every byte sent from here on is numbered, acknowledged and retransmitted if lost.",
            Icon::Check,
            ColorTag::Teal,
        ),
    ],
};

pub const DNS_RESOLUTION: Topic = Topic {
    id: "dns-resolution",
    title: "Resolving a Domain Name",
    interval_ms: 3000,
    steps: &[
        step(
            "cache",
            "Local Cache",
            "Browser and OS check first",
            "A recent answer for example.com is reused until its TTL expires.",
            Icon::Computer,
            ColorTag::Blue,
        ),
        step(
            "resolver",
            "Recursive Resolver",
            "Usually run by your ISP",
            "The resolver does the legwork on the client's behalf and caches what it learns.",
            Icon::Server,
            ColorTag::Green,
        ),
        step(
            "root",
            "Root Server",
            "Ask about .com",
            "A root server answers with the name servers responsible for the .com top-level domain.",
            Icon::Globe,
            ColorTag::Purple,
        ),
        step(
            "tld",
            "TLD Server",
            "Ask about example.com",
            "The .com server points to the authoritative name servers for example.com.",
            Icon::Book,
            ColorTag::Orange,
        ),
        step(
            "authoritative",
            "Authoritative Server",
            "A record: 93.184.216.34",
            "The authoritative server holds the zone and returns the final answer.",
            Icon::Check,
            ColorTag::Teal,
        ),
    ],
};

pub const ALL_TOPICS: &[&Topic] = &[
    &PACKET_JOURNEY,
    &OSI_LAYERS,
    &TCP_IP_LAYERS,
    &ENCAPSULATION,
    &CIRCUIT_SWITCHING,
    &PACKET_SWITCHING,
    &MESSAGE_SWITCHING,
    &HUB_COLLISION,
    &SWITCH_LEARNING,
    &ROUTER_FORWARDING,
    &TCP_HANDSHAKE,
    &DNS_RESOLUTION,
];

pub fn topic(id: &str) -> Option<&'static Topic> {
    ALL_TOPICS.iter().copied().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_topic_ids_unique() {
        let ids: HashSet<_> = ALL_TOPICS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), ALL_TOPICS.len());
    }

    #[test]
    fn test_step_ids_unique_within_topic() {
        for t in ALL_TOPICS {
            let ids: HashSet<_> = t.steps.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), t.steps.len(), "duplicate step id in {}", t.id);
        }
    }

    #[test]
    fn test_intervals_in_observed_range() {
        for t in ALL_TOPICS {
            assert!(
                (2000..=3000).contains(&t.interval_ms),
                "{} ticks every {} ms",
                t.id,
                t.interval_ms
            );
        }
    }

    #[test]
    fn test_collision_step_is_special() {
        let collision = HUB_COLLISION
            .steps
            .iter()
            .find(|s| s.id == "collision")
            .unwrap();
        assert!(collision.special);
        assert_eq!(HUB_COLLISION.steps.iter().filter(|s| s.special).count(), 1);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(topic("tcp-handshake").unwrap().steps.len(), 4);
        assert!(topic("token-ring").is_none());
    }
}
