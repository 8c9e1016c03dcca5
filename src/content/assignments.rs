//! Assignment quizzes.

use crate::assignment::{AssignmentItem, AssignmentSet, AssignmentTarget};

const fn item(id: &'static str, label: &'static str, correct_target: &'static str) -> AssignmentItem {
    AssignmentItem {
        id,
        label,
        correct_target,
    }
}

const fn target(id: &'static str, label: &'static str) -> AssignmentTarget {
    AssignmentTarget { id, label }
}

pub const DEVICE_LAYERS: AssignmentSet = AssignmentSet {
    id: "device-layers",
    title: "Sort the Devices",
    instructions: "Place each device on the OSI layer where it makes its forwarding decision.",
    items: &[
        item("hub", "Hub", "physical"),
        item("repeater", "Repeater", "physical"),
        item("modem", "Modem", "physical"),
        item("switch", "Switch", "data-link"),
        item("bridge", "Bridge", "data-link"),
        item("nic", "Network card", "data-link"),
        item("access-point", "Wireless access point", "data-link"),
        item("router", "Router", "network"),
        item("l3-switch", "Layer 3 switch", "network"),
    ],
    targets: &[
        target("physical", "Layer 1 - Physical"),
        target("data-link", "Layer 2 - Data Link"),
        target("network", "Layer 3 - Network"),
    ],
};

pub const OSI_ORDER: AssignmentSet = AssignmentSet {
    id: "osi-order",
    title: "Build the OSI Stack",
    instructions: "Drop each layer name onto its layer number.",
    items: &[
        item("transport", "Transport", "l4"),
        item("physical", "Physical", "l1"),
        item("application", "Application", "l7"),
        item("network", "Network", "l3"),
        item("session", "Session", "l5"),
        item("data-link", "Data Link", "l2"),
        item("presentation", "Presentation", "l6"),
    ],
    targets: &[
        target("l7", "Layer 7"),
        target("l6", "Layer 6"),
        target("l5", "Layer 5"),
        target("l4", "Layer 4"),
        target("l3", "Layer 3"),
        target("l2", "Layer 2"),
        target("l1", "Layer 1"),
    ],
};

pub const ALL_ASSIGNMENTS: &[&AssignmentSet] = &[&DEVICE_LAYERS, &OSI_ORDER];
