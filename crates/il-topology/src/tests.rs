//! Unit tests for il-topology.
//!
//! All tests use hand-crafted or in-memory topologies.

#[cfg(test)]
mod builder {
    use il_core::SectionId;

    use crate::{TopologyBuilder, TopologyError};

    #[test]
    fn empty_build() {
        let g = TopologyBuilder::new().build().unwrap();
        assert_eq!(g.section_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn one_way_link_is_asymmetric() {
        let mut b = TopologyBuilder::new();
        let a = b.add_section("A").unwrap();
        let c = b.add_section("C").unwrap();
        b.link(a, c);
        let g = b.build().unwrap();
        assert!(g.is_neighbor(a, c));
        assert!(!g.is_neighbor(c, a));
        assert!(g.neighbors(c).is_empty());
    }

    #[test]
    fn link_is_idempotent() {
        let mut b = TopologyBuilder::new();
        let a = b.add_section("A").unwrap();
        let c = b.add_section("C").unwrap();
        b.link(a, c);
        b.link(a, c);
        b.link_both(a, c);
        let g = b.build().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(a), &[c]);
    }

    #[test]
    fn neighbors_sorted_per_section() {
        let mut b = TopologyBuilder::new();
        let hub = b.add_section("HUB").unwrap();
        let x = b.add_section("X").unwrap();
        let y = b.add_section("Y").unwrap();
        let z = b.add_section("Z").unwrap();
        b.link(hub, z);
        b.link(hub, x);
        b.link(hub, y);
        let g = b.build().unwrap();
        assert_eq!(g.neighbors(hub), &[x, y, z]);
    }

    #[test]
    fn unknown_section_has_no_neighbors() {
        let g = TopologyBuilder::new().build().unwrap();
        assert!(g.neighbors(SectionId(7)).is_empty());
        assert!(!g.contains(SectionId(7)));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut b = TopologyBuilder::new();
        b.add_section("A").unwrap();
        assert!(matches!(b.add_section("A"), Err(TopologyError::DuplicateSection(_))));
    }

    #[test]
    fn undeclared_link_rejected() {
        let mut b = TopologyBuilder::new();
        let a = b.add_section("A").unwrap();
        b.link(a, SectionId(9));
        assert!(matches!(b.build(), Err(TopologyError::SectionNotFound(SectionId(9)))));
    }

    #[test]
    fn names_round_trip() {
        let mut b = TopologyBuilder::new();
        let a = b.add_section("Platform 1").unwrap();
        let g = b.build().unwrap();
        assert_eq!(g.name_of(a), Some("Platform 1"));
        assert_eq!(g.section_by_name("Platform 1"), Some(a));
        assert_eq!(g.section_by_name("nope"), None);
    }
}

#[cfg(test)]
mod layout {
    use crate::crossover_layout;

    #[test]
    fn crossover_shape() {
        let (g, l) = crossover_layout().unwrap();
        assert_eq!(g.section_count(), 11);
        // 8 declared hops, each mirrored.
        assert_eq!(g.edge_count(), 16);

        assert!(g.is_neighbor(l.s1, l.s5));
        assert!(g.is_neighbor(l.s5, l.s1));
        assert!(g.is_neighbor(l.s3, l.s4));
        assert!(g.is_neighbor(l.s10, l.s11));
        assert!(!g.is_neighbor(l.s1, l.s2));
        assert!(!g.is_neighbor(l.s9, l.s9));
        assert_eq!(g.neighbors(l.s9), &[l.s6, l.s10]);
    }

    #[test]
    fn crossover_names() {
        let (g, l) = crossover_layout().unwrap();
        assert_eq!(g.name_of(l.s7), Some("S7"));
        assert_eq!(g.section_by_name("S11"), Some(l.s11));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{TopologyError, load_topology_csv, load_topology_reader};

    const CSV: &str = "\
from,to,bidirectional
S1,S5,true
S3,S4,yes
S4,S7,
S7,S9,0
";

    #[test]
    fn loads_sections_in_file_order() {
        let g = load_topology_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(g.section_count(), 6);
        let names: Vec<_> = g.sections().filter_map(|s| g.name_of(s)).collect();
        assert_eq!(names, ["S1", "S5", "S3", "S4", "S7", "S9"]);
    }

    #[test]
    fn bidirectional_flag_respected() {
        let g = load_topology_reader(Cursor::new(CSV)).unwrap();
        let id = |n: &str| g.section_by_name(n).unwrap();
        assert!(g.is_neighbor(id("S1"), id("S5")));
        assert!(g.is_neighbor(id("S5"), id("S1")));
        assert!(g.is_neighbor(id("S4"), id("S7")));
        assert!(!g.is_neighbor(id("S7"), id("S4")));
        assert!(!g.is_neighbor(id("S9"), id("S7")));
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn bad_flag_is_parse_error() {
        let csv = "from,to,bidirectional\nA,B,maybe\n";
        assert!(matches!(
            load_topology_reader(Cursor::new(csv)),
            Err(TopologyError::Parse(_))
        ));
    }

    #[test]
    fn empty_name_is_parse_error() {
        let csv = "from,to,bidirectional\nA,,true\n";
        assert!(matches!(
            load_topology_reader(Cursor::new(csv)),
            Err(TopologyError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let res = load_topology_csv(std::path::Path::new("/nonexistent/topology.csv"));
        assert!(matches!(res, Err(TopologyError::Io(_))));
    }
}
