//! Reference tables.
//!
//! Each table exists once. Visualize mode draws it as cards, exam mode as a
//! dense table, and both read the same rows.

/// A literal table: a header row and data rows of the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactTable {
    pub id: &'static str,
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

impl FactTable {
    /// The cell under `column` in `row`, by header name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&'static str> {
        let col = self.columns.iter().position(|c| *c == column)?;
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Width of each column in characters, for plain-text rendering.
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

pub const NETWORK_TYPES: FactTable = FactTable {
    id: "network-types",
    title: "Network Types by Scale",
    columns: &["Type", "Span", "Example"],
    rows: &[
        &["PAN", "A few meters", "Bluetooth headphones and a phone"],
        &["LAN", "A building", "Office Ethernet and Wi-Fi"],
        &["MAN", "A city", "Municipal fiber ring"],
        &["WAN", "Countries and continents", "The Internet, corporate MPLS"],
    ],
};

pub const OSI_LAYER_FACTS: FactTable = FactTable {
    id: "osi-layers",
    title: "OSI Layers at a Glance",
    columns: &["Layer", "Name", "PDU", "Protocols", "Devices"],
    rows: &[
        &["7", "Application", "Data", "HTTP, SMTP, DNS", "Gateway"],
        &["6", "Presentation", "Data", "TLS, JPEG, ASCII", "Gateway"],
        &["5", "Session", "Data", "NetBIOS, RPC", "Gateway"],
        &["4", "Transport", "Segment", "TCP, UDP", "Firewall"],
        &["3", "Network", "Packet", "IP, ICMP, OSPF", "Router"],
        &["2", "Data Link", "Frame", "Ethernet, 802.11, PPP", "Switch, bridge"],
        &["1", "Physical", "Bits", "RJ45, DSL, fiber", "Hub, repeater"],
    ],
};

pub const MODEL_COMPARISON: FactTable = FactTable {
    id: "model-comparison",
    title: "TCP/IP vs OSI",
    columns: &["TCP/IP layer", "OSI layers", "Examples"],
    rows: &[
        &["Application", "7, 6, 5", "HTTP, DNS, SSH"],
        &["Transport", "4", "TCP, UDP"],
        &["Internet", "3", "IPv4, IPv6, ICMP"],
        &["Network Access", "2, 1", "Ethernet, Wi-Fi"],
    ],
};

pub const SWITCHING_METRICS: FactTable = FactTable {
    id: "switching-metrics",
    title: "Switching Techniques Compared",
    columns: &["Technique", "Path", "Reservation", "Delay", "Example"],
    rows: &[
        &[
            "Circuit",
            "Dedicated, fixed",
            "Before transfer",
            "Setup time, then constant",
            "Landline telephone",
        ],
        &[
            "Message",
            "Hop by hop",
            "None",
            "High, grows with message size",
            "Telegraph, early e-mail relay",
        ],
        &[
            "Packet",
            "Per packet",
            "None",
            "Low, variable (queuing)",
            "The Internet",
        ],
    ],
};

pub const MAC_TABLE: FactTable = FactTable {
    id: "mac-table",
    title: "Switch MAC Table",
    columns: &["MAC address", "Port", "VLAN", "Age (s)"],
    rows: &[
        &["00:1A:2B:3C:4D:01", "1", "10", "12"],
        &["00:1A:2B:3C:4D:02", "2", "10", "45"],
        &["00:1A:2B:3C:4D:03", "3", "20", "3"],
        &["00:1A:2B:3C:4D:04", "5", "20", "280"],
    ],
};

pub const ROUTING_TABLE: FactTable = FactTable {
    id: "routing-table",
    title: "Router Routing Table",
    columns: &["Destination", "Next hop", "Interface", "Metric"],
    rows: &[
        &["10.1.0.0/16", "directly connected", "eth0", "0"],
        &["10.2.0.0/16", "192.168.1.2", "eth1", "1"],
        &["172.16.0.0/12", "192.168.1.3", "eth1", "2"],
        &["0.0.0.0/0", "203.0.113.1", "eth2", "10"],
    ],
};

pub const DEVICE_FACTS: FactTable = FactTable {
    id: "devices",
    title: "Network Devices",
    columns: &["Device", "OSI layer", "Forwards on", "Collision domains", "Broadcast domains"],
    rows: &[
        &["Hub", "1", "Nothing (repeats)", "1 for all ports", "1"],
        &["Repeater", "1", "Nothing (regenerates)", "1", "1"],
        &["Bridge", "2", "MAC address", "1 per port", "1"],
        &["Switch", "2", "MAC address", "1 per port", "1 (per VLAN)"],
        &["Router", "3", "IP address", "1 per port", "1 per port"],
    ],
};

pub const TCP_VS_UDP: FactTable = FactTable {
    id: "tcp-vs-udp",
    title: "TCP vs UDP",
    columns: &["Property", "TCP", "UDP"],
    rows: &[
        &["Connection", "Three-way handshake", "Connectionless"],
        &["Reliability", "Acknowledged, retransmitted", "Best effort"],
        &["Ordering", "Guaranteed", "Not guaranteed"],
        &["Header size", "20 to 60 bytes", "8 bytes"],
        &["Flow control", "Sliding window", "None"],
        &["Typical use", "Web, e-mail, file transfer", "DNS, VoIP, games, streaming"],
    ],
};

pub const IPV4_CLASSES: FactTable = FactTable {
    id: "ipv4-classes",
    title: "Classful IPv4 Addressing",
    columns: &["Class", "First octet", "Default mask", "Private range"],
    rows: &[
        &["A", "1 - 126", "255.0.0.0 (/8)", "10.0.0.0 - 10.255.255.255"],
        &["B", "128 - 191", "255.255.0.0 (/16)", "172.16.0.0 - 172.31.255.255"],
        &["C", "192 - 223", "255.255.255.0 (/24)", "192.168.0.0 - 192.168.255.255"],
        &["D", "224 - 239", "n/a (multicast)", "n/a"],
        &["E", "240 - 255", "n/a (reserved)", "n/a"],
    ],
};

pub const COMMON_PROTOCOLS: FactTable = FactTable {
    id: "common-protocols",
    title: "Common Protocols and Ports",
    columns: &["Protocol", "Port", "Transport", "Purpose"],
    rows: &[
        &["FTP", "20, 21", "TCP", "File transfer"],
        &["SSH", "22", "TCP", "Secure remote shell"],
        &["Telnet", "23", "TCP", "Clear-text remote shell"],
        &["SMTP", "25", "TCP", "Sending e-mail"],
        &["DNS", "53", "UDP, TCP", "Name resolution"],
        &["DHCP", "67, 68", "UDP", "Address assignment"],
        &["HTTP", "80", "TCP", "Web pages"],
        &["POP3", "110", "TCP", "Retrieving e-mail"],
        &["IMAP", "143", "TCP", "Mailbox access"],
        &["HTTPS", "443", "TCP", "Encrypted web"],
    ],
};

pub const DNS_RECORDS: FactTable = FactTable {
    id: "dns-records",
    title: "DNS Record Types",
    columns: &["Type", "Maps", "Example"],
    rows: &[
        &["A", "Name to IPv4", "example.com -> 93.184.216.34"],
        &["AAAA", "Name to IPv6", "example.com -> 2606:2800:220:1::"],
        &["CNAME", "Alias to name", "www.example.com -> example.com"],
        &["MX", "Domain to mail server", "example.com -> mail.example.com"],
        &["NS", "Zone to name server", "example.com -> a.iana-servers.net"],
    ],
};

pub const HISTORY_TIMELINE: FactTable = FactTable {
    id: "history",
    title: "Milestones in Networking",
    columns: &["Year", "Milestone"],
    rows: &[
        &["1969", "ARPANET sends its first message between UCLA and Stanford"],
        &["1973", "Ethernet is invented at Xerox PARC"],
        &["1974", "Cerf and Kahn publish the TCP design"],
        &["1983", "ARPANET switches to TCP/IP; DNS is introduced"],
        &["1984", "The OSI reference model is published as ISO 7498"],
        &["1991", "The World Wide Web goes public"],
        &["1997", "IEEE 802.11 Wi-Fi standard is released"],
        &["1998", "IPv6 is specified in RFC 2460"],
    ],
};

pub const ALL_TABLES: &[&FactTable] = &[
    &NETWORK_TYPES,
    &OSI_LAYER_FACTS,
    &MODEL_COMPARISON,
    &SWITCHING_METRICS,
    &MAC_TABLE,
    &ROUTING_TABLE,
    &DEVICE_FACTS,
    &TCP_VS_UDP,
    &IPV4_CLASSES,
    &COMMON_PROTOCOLS,
    &DNS_RECORDS,
    &HISTORY_TIMELINE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_match_header_width() {
        for table in ALL_TABLES {
            for (i, row) in table.rows.iter().enumerate() {
                assert_eq!(
                    row.len(),
                    table.columns.len(),
                    "{} row {} has the wrong width",
                    table.id,
                    i
                );
            }
        }
    }

    #[test]
    fn test_cell_lookup() {
        assert_eq!(COMMON_PROTOCOLS.cell(4, "Port"), Some("53"));
        assert_eq!(COMMON_PROTOCOLS.cell(4, "Colour"), None);
        assert_eq!(COMMON_PROTOCOLS.cell(99, "Port"), None);
    }

    #[test]
    fn test_column_widths() {
        let widths = TCP_VS_UDP.column_widths();
        assert_eq!(widths.len(), 3);
        assert_eq!(widths[2], "DNS, VoIP, games, streaming".len());
    }
}
